use crate::api::ApiClient;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::EventHandler;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use anyhow::Context;
use std::sync::mpsc::RecvTimeoutError;
use tokio::runtime::Handle;

/// Run the TUI until the user quits.
///
/// The loop is synchronous; HTTP calls and reply timers run on `runtime`
/// and report back through the event channel.
pub fn run(config: &Config, runtime: Handle) -> anyhow::Result<()> {
    let client = ApiClient::new(&config.api).context("failed to build HTTP client")?;
    let tick_rate = config.ui.tick_rate();

    let (mut terminal, guard) = setup_terminal().context("failed to set up terminal")?;
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(config, client, runtime, events.sender());
    tracing::info!(base_url = app.base_url(), "ui started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(event) => app.handle_event(event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    app.teardown();
    drop(guard);
    tracing::info!("ui stopped");
    Ok(())
}
