/// Things that can happen to the app
mod action;
pub use action::Action;

/// Side effects the app asks the shell to perform
mod effect;
pub use effect::{Effect, EffectContext};

/// The registration form
mod signup_form;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use layout::Flex;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};
use signup_core::{form::MISMATCH_MESSAGE, Panel, View};
use signup_form::SignupFormInput;
use std::process::ExitCode;

/// The "functional core" of the app.
#[derive(Debug)]
pub struct App {
    /// Status to display (visible at the bottom of the screen.) This is where
    /// alerts go.
    status_line: Option<String>,

    /// Which side of the panel is in front
    panel: Panel,

    /// What's been typed into the registration form
    form: SignupFormInput,

    /// Where to go once the server accepts a registration
    landing_page: String,

    /// Where we were sent after signing up, if anywhere
    location: Option<String>,

    /// Set once the user asks to leave
    exiting: Option<ExitCode>,
}

impl App {
    /// Create a new instance of the app
    pub fn new(landing_page: String) -> Self {
        Self {
            status_line: None,
            panel: Panel::default(),
            form: SignupFormInput::default(),
            landing_page,
            location: None,
            exiting: None,
        }
    }

    /// Render the app's UI to the screen
    pub fn render(&self, frame: &mut Frame) {
        let vertical = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ]);
        let [header_area, body_area, status_area] = vertical.areas(frame.area());

        let horizontal = Layout::horizontal([Constraint::Min(0), Constraint::Min(0)]);
        let [tabs_area, location_area] = horizontal.areas(header_area);

        let tabs = Tabs::new(["Sign in (F3)", "Sign up (F2)"])
            .select(usize::from(self.panel.is_active()))
            .highlight_style(Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD));
        frame.render_widget(tabs, tabs_area);

        if let Some(location) = &self.location {
            frame.render_widget(
                Paragraph::new(format!("→ {location}"))
                    .alignment(Alignment::Right)
                    .fg(Color::DarkGray),
                location_area,
            );
        }

        match self.panel {
            Panel::SignIn => {
                let popup_vert = Layout::vertical([Constraint::Length(4)]).flex(Flex::Center);
                let popup_horiz =
                    Layout::horizontal([Constraint::Percentage(50)]).flex(Flex::Center);

                let [popup_area] = popup_vert.areas(body_area);
                let [popup_area] = popup_horiz.areas(popup_area);

                let welcome = Paragraph::new(vec![
                    Line::from("Welcome back!"),
                    Line::from("New here? Press F2 to create an account.").fg(Color::DarkGray),
                ])
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("Sign in"));

                frame.render_widget(welcome, popup_area);
            }
            Panel::SignUp => self.form.render(body_area, frame),
        }

        let status = Paragraph::new(match &self.status_line {
            Some(line) => line.as_str(),
            None => "Tab to move between fields, Enter to submit, Esc to quit.",
        });

        frame.render_widget(status, status_area);
    }

    /// Handle an `Action`, updating the app's state and producing some side effect(s)
    pub fn handle(&mut self, action: Action) -> Vec<Effect> {
        match action {
            Action::Key(key) => self.handle_key(key),

            Action::Problem(problem) => {
                self.status_line = Some(problem);

                vec![]
            }

            Action::Settled(outcome) => {
                tracing::info!(created = outcome.is_created(), "signup settled");

                let landing_page = self.landing_page.clone();
                outcome.apply(self, &landing_page);

                vec![]
            }
        }
    }

    /// Handle a single key press
    fn handle_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        if key.kind != KeyEventKind::Press {
            return vec![];
        }

        match (key.code, self.panel) {
            (KeyCode::Esc, _) => {
                self.exiting = Some(ExitCode::SUCCESS);

                vec![]
            }

            (KeyCode::F(2), _) => {
                self.set_panel(Panel::SignUp);

                vec![]
            }

            (KeyCode::F(3), _) => {
                self.set_panel(Panel::SignIn);

                vec![]
            }

            (KeyCode::Enter, Panel::SignUp) => self.submit(),

            (_, Panel::SignUp) => {
                self.form.handle_event(key);

                vec![]
            }

            (_, Panel::SignIn) => vec![],
        }
    }

    /// Validate the form, and if it's good ask for it to be sent.
    fn submit(&mut self) -> Vec<Effect> {
        let form = self.form.finish();

        match form.credentials() {
            Ok(creds) => {
                self.status_line = Some("Signing up…".to_owned());

                vec![Effect::SignUp(creds)]
            }
            Err(_) => {
                tracing::info!(username = %form.username, "passwords did not match");
                self.alert(MISMATCH_MESSAGE);

                vec![]
            }
        }
    }

    /// Let the TUI manager know whether we're all wrapped up and can exit.
    pub fn should_exit(&self) -> Option<ExitCode> {
        self.exiting
    }
}

impl View for App {
    fn set_panel(&mut self, panel: Panel) {
        self.panel = panel;
    }

    fn alert(&mut self, message: &str) {
        self.status_line = Some(message.to_owned());
    }

    fn navigate(&mut self, target: &str) {
        self.location = Some(target.to_owned());
    }

    fn reset_form(&mut self) {
        self.form = SignupFormInput::default();
    }
}
