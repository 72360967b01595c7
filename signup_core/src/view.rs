use crate::Panel;

/// Everything the controller needs to do to the page it lives on. The browser
/// implements this on top of the DOM; tests just write everything down.
pub trait View {
    /// Show one side of the panel or the other. Setting the panel that's
    /// already showing is fine and changes nothing.
    fn set_panel(&mut self, panel: Panel);

    /// Tell the user something and wait for them to acknowledge it.
    fn alert(&mut self, message: &str);

    /// Go somewhere else, relative to the current page.
    fn navigate(&mut self, target: &str);

    /// Clear every field in the registration form.
    fn reset_form(&mut self);
}
