use crossterm::event::KeyEvent;
use signup_core::Outcome;

/// Things that can happen to this app
#[derive(Debug)]
pub enum Action {
    /// The user did something on the keyboard
    Key(KeyEvent),

    /// Something bad happened; display it to the user
    Problem(String),

    /// A submission came back from the server (or didn't)
    Settled(Outcome),
}
