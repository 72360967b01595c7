use crate::{
    api::{self, Transport},
    form::MISMATCH_MESSAGE,
    Credentials, Outcome, Panel, Settings, SignupForm, View,
};

/// Runs the sign-in/sign-up panel: switching sides and submitting the
/// registration form.
///
/// This owns no UI; every host hands in a `View` for each call. That keeps the
/// controller cheap to clone into event handlers and easy to test.
#[derive(Debug, Clone)]
pub struct Controller<T> {
    /// How we reach the endpoint.
    transport: T,

    /// Where we send things and where we go afterwards.
    settings: Settings,
}

impl<T: Transport> Controller<T> {
    /// Construct a new controller
    pub fn new(transport: T, settings: Settings) -> Self {
        Self {
            transport,
            settings,
        }
    }

    /// The settings this controller was built with.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The "sign up" trigger was activated.
    pub fn sign_up_clicked<V: View + ?Sized>(&self, view: &mut V) {
        view.set_panel(Panel::SignUp);
    }

    /// The "sign in" trigger was activated.
    pub fn sign_in_clicked<V: View + ?Sized>(&self, view: &mut V) {
        view.set_panel(Panel::SignIn);
    }

    /// Validate a form, telling the user if the passwords don't match.
    /// Returns the payload to send only if they do.
    pub fn check<V: View + ?Sized>(&self, form: &SignupForm, view: &mut V) -> Option<Credentials> {
        match form.credentials() {
            Ok(creds) => Some(creds),
            Err(_) => {
                tracing::info!(username = %form.username, "passwords did not match");
                view.alert(MISMATCH_MESSAGE);
                None
            }
        }
    }

    /// Send an already-validated payload to the endpoint.
    pub async fn send(&self, creds: &Credentials) -> Outcome {
        api::signup(&self.transport, &self.settings.endpoint, creds).await
    }

    /// Handle a submission from start to finish: validate, send, and show the
    /// result. Returns `None` if validation stopped us before any request was
    /// made.
    pub async fn submit<V: View + ?Sized>(
        &self,
        form: &SignupForm,
        view: &mut V,
    ) -> Option<Outcome> {
        let creds = self.check(form, view)?;

        let outcome = self.send(&creds).await;
        outcome.apply(view, &self.settings.landing_page);

        Some(outcome)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        outcome::{SUCCESS_MESSAGE, UNREACHABLE_MESSAGE},
        test::{matching_form, FakeTransport, RecordingView},
    };
    use futures::executor::block_on;
    use proptest::prelude::*;
    use reqwest::StatusCode;
    use serde_json::json;

    fn controller(transport: FakeTransport) -> Controller<FakeTransport> {
        Controller::new(transport, Settings::default())
    }

    fn form() -> SignupForm {
        SignupForm::from_fields([
            ("username", "link"),
            ("email", "link@hyrule.example"),
            ("password", "hunter2"),
            ("confirm_password", "hunter2"),
            ("full_name", "Link"),
            ("role", "admin"),
        ])
    }

    #[test]
    fn panel_toggles_are_idempotent() {
        let controller = controller(FakeTransport::failing("unused"));
        let mut view = RecordingView::default();

        controller.sign_up_clicked(&mut view);
        controller.sign_up_clicked(&mut view);
        assert_eq!(view.panel, Panel::SignUp);

        controller.sign_in_clicked(&mut view);
        controller.sign_in_clicked(&mut view);
        assert_eq!(view.panel, Panel::SignIn);
    }

    #[test]
    fn success_alerts_navigates_and_resets() {
        let controller = controller(FakeTransport::replying(StatusCode::OK, json!({})));
        let mut view = RecordingView::default();

        let outcome = block_on(controller.submit(&form(), &mut view));

        assert_eq!(outcome, Some(Outcome::Created(json!({}))));
        assert_eq!(view.alerts, vec![SUCCESS_MESSAGE.to_owned()]);
        assert_eq!(view.navigations, vec!["index.html".to_owned()]);
        assert_eq!(view.resets, 1);
    }

    #[test]
    fn rejection_shows_server_detail() {
        let controller = controller(FakeTransport::replying(
            StatusCode::BAD_REQUEST,
            json!({"detail": "Email already exists"}),
        ));
        let mut view = RecordingView::default();

        block_on(controller.submit(&form(), &mut view));

        assert_eq!(view.alerts, vec!["Error: Email already exists".to_owned()]);
        assert!(view.navigations.is_empty());
        assert_eq!(view.resets, 0);
    }

    #[test]
    fn rejection_without_detail_uses_fallback() {
        let controller = controller(FakeTransport::replying(
            StatusCode::BAD_REQUEST,
            json!({}),
        ));
        let mut view = RecordingView::default();

        block_on(controller.submit(&form(), &mut view));

        assert_eq!(
            view.alerts,
            vec!["Error: Signup failed. Please try again.".to_owned()]
        );
    }

    #[test]
    fn network_failure_shows_generic_message() {
        let controller = controller(FakeTransport::failing("connection refused"));
        let mut view = RecordingView::default();

        block_on(controller.submit(&form(), &mut view));

        assert_eq!(view.alerts, vec![UNREACHABLE_MESSAGE.to_owned()]);
        assert!(view.navigations.is_empty());
        assert_eq!(view.resets, 0);
    }

    #[test]
    fn mismatch_alerts_without_sending() {
        let transport = FakeTransport::replying(StatusCode::OK, json!({}));
        let controller = controller(transport);
        let mut view = RecordingView::default();
        let mut form = form();
        form.confirm_password = "hunter3".to_owned();

        assert_eq!(block_on(controller.submit(&form, &mut view)), None);
        assert_eq!(view.alerts, vec![MISMATCH_MESSAGE.to_owned()]);
        assert!(controller.transport.requests().is_empty());
    }

    proptest! {
        #[test]
        fn mismatched_passwords_never_hit_the_network(
            form in matching_form(),
            confirm in ".{0,24}",
        ) {
            prop_assume!(form.password != confirm);

            let controller = controller(FakeTransport::replying(StatusCode::OK, json!({})));
            let mut view = RecordingView::default();
            let form = SignupForm { confirm_password: confirm, ..form };

            prop_assert_eq!(block_on(controller.submit(&form, &mut view)), None);
            prop_assert!(controller.transport.requests().is_empty());
            prop_assert_eq!(view.alerts, vec![MISMATCH_MESSAGE.to_owned()]);
        }

        #[test]
        fn matching_passwords_send_exactly_one_user_request(
            form in matching_form(),
            role in "[a-z]{0,8}",
        ) {
            let controller = controller(FakeTransport::replying(StatusCode::OK, json!({})));
            let mut view = RecordingView::default();

            // whatever role the page tries to sneak in gets dropped
            let form = SignupForm::from_fields([
                ("role", role.as_str()),
                ("username", form.username.as_str()),
                ("email", form.email.as_str()),
                ("password", form.password.as_str()),
                ("confirm_password", form.confirm_password.as_str()),
                ("full_name", form.full_name.as_str()),
            ]);

            block_on(controller.submit(&form, &mut view));

            let requests = controller.transport.requests();
            prop_assert_eq!(requests.len(), 1);
            prop_assert_eq!(&requests[0].0, &controller.settings().endpoint);
            prop_assert_eq!(&requests[0].1["role"], &json!("user"));
            prop_assert_eq!(&requests[0].1["password"], &json!(form.password));
        }
    }
}
