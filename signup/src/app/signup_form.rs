use crate::form_fields;
use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use signup_core::SignupForm;
use tui_input::{backend::crossterm::EventHandler, Input};

form_fields!(
    Field,
    Username => "Username",
    Email => "Email",
    Password => "Password",
    ConfirmPassword => "Confirm Password",
    FullName => "Full Name",
);

impl Field {
    /// Whether to hide what's typed here.
    fn is_secret(self) -> bool {
        matches!(self, Self::Password | Self::ConfirmPassword)
    }
}

/// The registration form as typed into the terminal
#[derive(Debug)]
pub struct SignupFormInput {
    /// Which field we're editing
    active: Field,

    /// What should we call you?
    username: Input,

    /// Where can we reach you?
    email: Input,

    /// What's your password? (Will be masked)
    password: Input,

    /// Same again, please. (Will be masked)
    confirm_password: Input,

    /// Your name as you'd like it shown
    full_name: Input,
}

impl SignupFormInput {
    /// Fill the form with existing values.
    pub fn with_values(form: &SignupForm) -> Self {
        Self {
            active: Field::Username,
            username: Input::new(form.username.clone()),
            email: Input::new(form.email.clone()),
            password: Input::new(form.password.clone()),
            confirm_password: Input::new(form.confirm_password.clone()),
            full_name: Input::new(form.full_name.clone()),
        }
    }

    /// The input backing a field.
    fn input(&self, field: Field) -> &Input {
        match field {
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
            Field::FullName => &self.full_name,
        }
    }

    /// The input backing a field, for editing.
    fn input_mut(&mut self, field: Field) -> &mut Input {
        match field {
            Field::Username => &mut self.username,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
            Field::FullName => &mut self.full_name,
        }
    }

    #[expect(clippy::cast_possible_truncation)]
    pub fn render(&self, body_area: Rect, frame: &mut Frame<'_>) {
        // 3 rows per field, plus the border around the whole thing
        let height = 3 * Field::FIELDS.len() as u16 + 2;

        let popup_vert = Layout::vertical([Constraint::Length(height)]).flex(Flex::Center);
        let popup_horiz = Layout::horizontal([Constraint::Percentage(50)]).flex(Flex::Center);

        let [popup_area] = popup_vert.areas(body_area);
        let [popup_area] = popup_horiz.areas(popup_area);
        frame.render_widget(Clear, popup_area);

        let outer = Block::default()
            .borders(Borders::ALL)
            .title("Create Account");
        let inner_area = outer.inner(popup_area);
        frame.render_widget(outer, popup_area);

        let width = inner_area.width.saturating_sub(2 + 1); // -2 for the border, -1 for the cursor

        let rows = Layout::vertical(vec![Constraint::Length(3); Field::FIELDS.len()])
            .split(inner_area);

        let border_style = Style::default().fg(Color::Blue);

        for (field, area) in Field::FIELDS.iter().copied().zip(rows.iter()) {
            let input = self.input(field);
            let scroll = input.visual_scroll(width as usize);

            let shown = if field.is_secret() {
                "*".repeat(input.value().chars().count())
            } else {
                input.value().to_owned()
            };

            let widget = Paragraph::new(shown).scroll((0, scroll as u16)).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(field.label())
                    .border_style(if field == self.active {
                        border_style
                    } else {
                        Style::default()
                    }),
            );

            frame.render_widget(widget, *area);

            if field == self.active {
                frame.set_cursor_position((
                    area.x
                        + (input.visual_cursor().max(scroll) - scroll) as u16 // current end of text
                        + 1, // just past the end of the text
                    area.y + 1, // +1 row for the border/title
                ));
            }
        }
    }

    pub fn handle_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.active = self.active.next();
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.active = self.active.prev();
            }
            _ => {
                let event = Event::Key(key);
                let active = self.active;

                self.input_mut(active).handle_event(&event);
            }
        }
    }

    /// Snapshot what's been typed so far.
    pub fn finish(&self) -> SignupForm {
        SignupForm {
            username: self.username.to_string(),
            email: self.email.to_string(),
            password: self.password.to_string(),
            confirm_password: self.confirm_password.to_string(),
            full_name: self.full_name.to_string(),
        }
    }
}

impl Default for SignupFormInput {
    fn default() -> Self {
        Self::with_values(&SignupForm::default())
    }
}
