use super::Action;
use signup_core::{
    api::{self, HttpTransport, Transport},
    Credentials, Settings,
};
use url::Url;

/// Connections to external services that effects use. We keep these around to
/// have some level of connection sharing for the app as a whole.
pub struct EffectContext<T = HttpTransport> {
    /// How to reach the registration endpoint
    transport: T,

    /// Where the registration endpoint lives
    endpoint: Url,
}

impl<T: Transport> EffectContext<T> {
    /// Get a new `EffectContext`
    pub fn new(transport: T, settings: &Settings) -> Self {
        Self {
            transport,
            endpoint: settings.endpoint.clone(),
        }
    }
}

/// Things that can happen as a result of user input. Side effects!
#[derive(Debug)]
pub enum Effect {
    /// Send a registration to the server
    SignUp(Credentials),
}

impl Effect {
    /// Perform the side-effectful portions of this effect, returning the next
    /// `Action` the application needs to handle
    pub async fn run<T: Transport>(self, context: &EffectContext<T>) -> Option<Action> {
        match self {
            Self::SignUp(creds) => {
                let outcome = api::signup(&context.transport, &context.endpoint, &creds).await;

                Some(Action::Settled(outcome))
            }
        }
    }
}
