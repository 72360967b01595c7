//! A TUI for signing up with the registration endpoint

/// The "functional core" to the main module's "imperative shell"
mod app;

/// Configuration and argument parsing
mod config;

/// Tab-through form field enums
mod form_fields;

use app::{App, EffectContext};
use clap::Parser;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::DefaultTerminal;
use signup_core::api::HttpTransport;
use std::{fs, io, process::ExitCode, sync::Arc};
use tokio::{
    sync::mpsc::{unbounded_channel, UnboundedSender},
    task::JoinHandle,
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode, Problem> {
    let config = config::Config::parse();

    // Keep the guard alive until we exit so buffered log lines get flushed.
    let _log_guard = init_logging(&config)?;

    let settings = config.settings();
    tracing::info!(endpoint = %settings.endpoint, "starting");

    let context = Arc::new(EffectContext::new(HttpTransport::default(), &settings));
    let app = App::new(settings.landing_page);

    let mut terminal = ratatui::init();
    terminal.clear()?;
    let res = run(terminal, app, context).await;
    ratatui::restore();

    Ok(res?)
}

/// Send logs to a daily file in the data directory. The terminal belongs to
/// the UI, so nothing goes to stdout.
fn init_logging(config: &config::Config) -> Result<WorkerGuard, Problem> {
    let dir = config.data_dir();
    fs::create_dir_all(&dir)?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::daily(
        dir,
        "signup.log",
    ));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(guard)
}

/// Manage the lifecycle of the app
async fn run(
    mut terminal: DefaultTerminal,
    mut app: App,
    context: Arc<EffectContext>,
) -> io::Result<ExitCode> {
    // Side-effectful behaviors (network access, here) take place via async
    // tasks. Once those tasks are done, we read their results off of a
    // channel. We keep track of outstanding effects so we can exit cleanly.
    let (effect_tx, mut effect_rx) = unbounded_channel();
    let mut outstanding_effects: Vec<JoinHandle<()>> = Vec::with_capacity(1);

    terminal.draw(|frame| app.render(frame))?;

    let mut event_stream = EventStream::new();

    // Start our event loop!
    loop {
        // First thing we do is wait for an event. This can be either external
        // input or the async result of an effect. This is an `Option<_>`
        // because we don't necessarily need to pay attention to every single
        // piece of external input.
        let next_action_opt = tokio::select! {
            event_opt = event_stream.next() => {
                match event_opt {
                    Some(Ok(Event::Key(key_event))) => {
                        Some(app::Action::Key(key_event))
                    }
                    Some(Err(err)) => {
                        tracing::warn!(%err, "problem reading terminal events");
                        Some(app::Action::Problem(err.to_string()))
                    }
                    _ => None,
                }
            },

            effect_opt = effect_rx.recv() => {
                effect_opt
            }
        };

        // Once we have an action, we send it to `app.handle` to get any next
        // effects. Rapid repeat submissions are not deduplicated; each one
        // gets its own task.
        if let Some(action) = next_action_opt {
            for effect in app.handle(action) {
                outstanding_effects.push(spawn_effect_task(
                    effect_tx.clone(),
                    Arc::clone(&context),
                    effect,
                ));
            }
        }

        // Now that we handled the event, we re-render to display any changes
        // the app cares about.
        terminal.draw(|frame| app.render(frame))?;

        // Drop handles for effects that have already reported back. This list
        // should never be long, so a full scan is fine.
        outstanding_effects.retain(|handle| !handle.is_finished());

        // Finally, if the app indicates that it should exit, we wait for all
        // outstanding effects to finish before exiting the loop with the exit
        // code from the app.
        if let Some(code) = app.should_exit() {
            for effect in outstanding_effects.drain(..) {
                if let Err(err) = effect.await {
                    tracing::error!(%err, "effect task failed while exiting");
                }
            }

            return Ok(code);
        }
    }
}

/// Spawn a task to run an effect and send the next action to the app.
fn spawn_effect_task(
    effect_tx: UnboundedSender<app::Action>,
    context: Arc<EffectContext>,
    effect: app::Effect,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        if let Some(next_action) = effect.run(&*context).await {
            // A closed channel means the loop has already returned, so there's
            // nobody left to tell.
            let _ = effect_tx.send(next_action);
        }
    })
}

/// Problems that can stop the app from starting or running.
#[derive(Debug, thiserror::Error)]
enum Problem {
    /// We had a problem with the terminal or the log directory.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Somebody else already set up logging.
    #[error("could not set up logging: {0}")]
    Logging(#[from] tracing::subscriber::SetGlobalDefaultError),
}
