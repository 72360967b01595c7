/// Things that can go wrong talking to the endpoint
pub mod error;
pub use error::Error;

/// The registration call itself
pub mod signup;
pub use signup::signup;

/// Getting bytes to and from the endpoint
pub mod transport;
pub use transport::{HttpTransport, Reply, Transport};
