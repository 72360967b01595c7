/// The class toggled on the panel container when the sign-up side is active.
pub const ACTIVE_CLASS: &str = "right-panel-active";

/// Which side of the panel is in front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    /// The sign-in form is showing (the container has no active flag.)
    #[default]
    SignIn,

    /// The sign-up form is showing (the container carries `ACTIVE_CLASS`.)
    SignUp,
}

impl Panel {
    /// Whether the container should carry `ACTIVE_CLASS` for this panel.
    pub fn is_active(self) -> bool {
        matches!(self, Self::SignUp)
    }
}
