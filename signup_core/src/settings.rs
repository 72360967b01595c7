use url::Url;

/// Where registrations go unless a host says otherwise.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/signup";

/// Where the browser goes after a successful registration, relative to the
/// current page.
pub const DEFAULT_LANDING_PAGE: &str = "index.html";

/// Host-independent settings for the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Full URL of the registration endpoint.
    pub endpoint: Url,

    /// Where to navigate once the server accepts a registration.
    pub landing_page: String,
}

impl Settings {
    /// Settings pointing at a specific endpoint, keeping the default landing
    /// page.
    ///
    /// ## Errors
    ///
    /// Returns an error if `endpoint` is not an absolute URL.
    pub fn with_endpoint(endpoint: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            endpoint: Url::parse(endpoint)?,
            landing_page: DEFAULT_LANDING_PAGE.to_owned(),
        })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: Url::parse(DEFAULT_ENDPOINT).expect("default endpoint is a valid URL"),
            landing_page: DEFAULT_LANDING_PAGE.to_owned(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_points_at_local_signup() {
        let settings = Settings::default();

        assert_eq!(settings.endpoint.as_str(), "http://127.0.0.1:8000/signup");
        assert_eq!(settings.landing_page, "index.html");
    }

    #[test]
    fn with_endpoint_rejects_relative_urls() {
        assert!(Settings::with_endpoint("/signup").is_err());
    }

    #[test]
    fn with_endpoint_keeps_landing_page() {
        let settings = Settings::with_endpoint("https://example.com/api/signup").unwrap();

        assert_eq!(settings.endpoint.path(), "/api/signup");
        assert_eq!(settings.landing_page, DEFAULT_LANDING_PAGE);
    }
}
