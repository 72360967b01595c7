use core::fmt;
use serde::{Deserialize, Serialize};

/// What we tell the user when the confirmation doesn't match.
pub const MISMATCH_MESSAGE: &str = "Passwords do not match.";

/// Names of the form fields we read, in the order they appear on the page.
pub const FIELD_NAMES: [&str; 5] = ["username", "email", "password", "confirm_password", "full_name"];

/// The values currently typed into the registration form.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    /// Requested account name.
    pub username: String,

    /// Contact address.
    pub email: String,

    /// Plaintext password.
    pub password: String,

    /// The password again, to catch typos.
    pub confirm_password: String,

    /// Display name.
    pub full_name: String,
}

impl SignupForm {
    /// Build a form from `(name, value)` pairs, the way a browser serializes
    /// form data. Names we don't know about (including `role`) are dropped,
    /// and later values win over earlier ones.
    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut form = Self::default();

        for (name, value) in fields {
            let slot = match name.as_ref() {
                "username" => &mut form.username,
                "email" => &mut form.email,
                "password" => &mut form.password,
                "confirm_password" => &mut form.confirm_password,
                "full_name" => &mut form.full_name,
                _ => continue,
            };

            *slot = value.into();
        }

        form
    }

    /// Check the form and build the payload for the registration endpoint.
    ///
    /// ## Errors
    ///
    /// Returns `Mismatch` if the password and its confirmation are not exactly
    /// equal. No payload is built in that case.
    pub fn credentials(&self) -> Result<Credentials, Mismatch> {
        if self.password != self.confirm_password {
            return Err(Mismatch);
        }

        Ok(Credentials {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            full_name: self.full_name.clone(),
            role: Role::User,
        })
    }
}

impl fmt::Debug for SignupForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupForm")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("confirm_password", &"<redacted>")
            .field("full_name", &self.full_name)
            .finish()
    }
}

/// The password and its confirmation differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Passwords do not match.")]
pub struct Mismatch;

/// The request body for the registration endpoint.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Requested account name.
    pub username: String,

    /// Contact address.
    pub email: String,

    /// Plaintext password.
    pub password: String,

    /// Display name.
    pub full_name: String,

    /// Always `user` for accounts made through this form.
    pub role: Role,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("full_name", &self.full_name)
            .field("role", &self.role)
            .finish()
    }
}

/// Account roles the form is allowed to ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A regular account.
    User,
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn filled(password: &str, confirm_password: &str) -> SignupForm {
        SignupForm {
            username: "link".to_owned(),
            email: "link@hyrule.example".to_owned(),
            password: password.to_owned(),
            confirm_password: confirm_password.to_owned(),
            full_name: "Link".to_owned(),
        }
    }

    #[test]
    fn from_fields_reads_known_names() {
        let form = SignupForm::from_fields([
            ("username", "zelda"),
            ("email", "zelda@hyrule.example"),
            ("password", "triforce"),
            ("confirm_password", "triforce"),
            ("full_name", "Zelda"),
        ]);

        assert_eq!(form.username, "zelda");
        assert_eq!(form.email, "zelda@hyrule.example");
        assert_eq!(form.password, "triforce");
        assert_eq!(form.confirm_password, "triforce");
        assert_eq!(form.full_name, "Zelda");
    }

    #[test]
    fn from_fields_ignores_role() {
        let form = SignupForm::from_fields([("role", "admin"), ("password", "a")]);

        assert_eq!(form, SignupForm {
            password: "a".to_owned(),
            ..SignupForm::default()
        });
    }

    #[test]
    fn mismatch_builds_nothing() {
        assert_eq!(filled("hunter2", "hunter3").credentials(), Err(Mismatch));
    }

    #[test]
    fn comparison_is_exact() {
        assert_eq!(filled("Hunter2", "hunter2").credentials(), Err(Mismatch));
        assert_eq!(filled("hunter2 ", "hunter2").credentials(), Err(Mismatch));
    }

    #[test]
    fn credentials_serialize_with_user_role() {
        let creds = filled("hunter2", "hunter2").credentials().unwrap();

        assert_eq!(
            serde_json::to_value(&creds).unwrap(),
            json!({
                "username": "link",
                "email": "link@hyrule.example",
                "password": "hunter2",
                "full_name": "Link",
                "role": "user",
            })
        );
    }

    #[test]
    fn debug_hides_passwords() {
        let form = filled("hunter2", "hunter2");
        let creds = form.credentials().unwrap();

        assert!(!format!("{form:?}").contains("hunter2"));
        assert!(!format!("{creds:?}").contains("hunter2"));
    }

    proptest! {
        #[test]
        fn matching_passwords_always_build(password in ".*") {
            let creds = filled(&password, &password).credentials().unwrap();

            prop_assert_eq!(creds.password, password);
            prop_assert_eq!(creds.role, Role::User);
        }

        #[test]
        fn differing_passwords_never_build(password in ".*", confirm in ".*") {
            prop_assume!(password != confirm);

            prop_assert_eq!(filled(&password, &confirm).credentials(), Err(Mismatch));
        }
    }
}
