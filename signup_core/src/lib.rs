//! Common code for the sign-up panel across all clients (TUI, WASM in the
//! browser.)

/// Talking to the registration endpoint.
pub mod api;

/// Glue between the form, the endpoint, and whatever is hosting the UI.
pub mod controller;
pub use controller::Controller;

/// The registration form and the payload built from it.
pub mod form;
pub use form::{Credentials, Mismatch, Role, SignupForm};

/// How a submission settled.
pub mod outcome;
pub use outcome::Outcome;

/// Which side of the sign-in/sign-up panel is showing.
pub mod panel;
pub use panel::Panel;

/// Where to send registrations and where to go afterwards.
pub mod settings;
pub use settings::Settings;

/// The UI surface a host gives the controller.
pub mod view;
pub use view::View;
