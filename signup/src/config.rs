use clap::Parser;
use signup_core::{
    settings::{DEFAULT_ENDPOINT, DEFAULT_LANDING_PAGE},
    Settings,
};
use std::path::PathBuf;
use url::Url;

/// A terminal sign-up panel for the registration endpoint
#[derive(Debug, Parser)]
#[clap(version)]
pub struct Config {
    /// Where to send registrations.
    #[clap(long, env = "SIGNUP_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: Url,

    /// Where to send people once they've signed up.
    #[clap(long, default_value = DEFAULT_LANDING_PAGE)]
    landing_page: String,

    /// Where should we write logs?
    #[clap(long)]
    data_dir: Option<PathBuf>,
}

impl Config {
    /// Get either the configured or a default data directory. If no data
    /// directory can be found (e.g. because `$HOME` is unset) we will use the
    /// current directory.
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .or_else(|| {
                directories::ProjectDirs::from("", "", "signup")
                    .map(|dirs| dirs.data_local_dir().to_owned())
            })
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// The host-independent part of the configuration.
    pub fn settings(&self) -> Settings {
        Settings {
            endpoint: self.endpoint.clone(),
            landing_page: self.landing_page.clone(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults_match_core_settings() {
        let config = Config::try_parse_from(["signup"]).unwrap();

        // the env var would override the default endpoint
        if std::env::var_os("SIGNUP_ENDPOINT").is_none() {
            assert_eq!(config.settings(), Settings::default());
        }
    }

    #[test]
    fn endpoint_flag_overrides() {
        let config = Config::try_parse_from([
            "signup",
            "--endpoint",
            "https://accounts.example.com/signup",
            "--landing-page",
            "welcome.html",
        ])
        .unwrap();

        let settings = config.settings();
        assert_eq!(settings.endpoint.host_str(), Some("accounts.example.com"));
        assert_eq!(settings.landing_page, "welcome.html");
    }

    #[test]
    fn bad_endpoint_is_rejected() {
        assert!(Config::try_parse_from(["signup", "--endpoint", "not a url"]).is_err());
    }

    #[test]
    fn data_dir_flag_wins() {
        let config = Config::try_parse_from(["signup", "--data-dir", "/tmp/signup"]).unwrap();

        assert_eq!(config.data_dir(), PathBuf::from("/tmp/signup"));
    }
}
