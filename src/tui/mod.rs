pub mod action;
pub mod component;
pub mod components;
pub mod keys;
pub mod reducer;
pub mod renderer;
pub mod runtime;
pub mod state;
pub mod widgets;

#[cfg(test)]
pub mod testing;

pub use action::Action;
pub use component::{Component, Effect, Element};
pub use keys::key_to_action;
pub use reducer::reduce;
pub use renderer::Renderer;
pub use runtime::Runtime;
pub use state::AppState;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::config::Config;
use crate::logging::LogHandle;
use crate::panel::PanelError;
use crate::settings::ConfigFileStore;

#[derive(Error, Debug)]
pub enum TuiError {
    #[error("Terminal error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to mount settings panel: {0}")]
    Panel(#[from] PanelError),
}

pub type TuiResult<T> = Result<T, TuiError>;

/// Key poll interval; also bounds how late a jump timer delivery is picked up
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Open the settings surface in the terminal and run until it closes
pub async fn run(config: Config, log: Option<LogHandle>) -> TuiResult<()> {
    let display = config.display();
    let initial_state = AppState::open(config, Arc::new(ConfigFileStore::new()), log)?;
    let mut runtime = Runtime::new(initial_state);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = main_loop(&mut terminal, &mut runtime, &display);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    runtime: &mut Runtime,
    display: &crate::config::DisplayConfig,
) -> TuiResult<()> {
    let mut renderer = Renderer::new();

    while runtime.state().host.is_open() {
        let actions_processed = runtime.process_actions();
        if actions_processed > 0 {
            tracing::debug!("LOOP: Processed {} actions", actions_processed);
        }
        // Pick up jump deliveries that arrived since the last pass
        runtime.dispatch(Action::Pump);

        terminal.draw(|f| {
            let element = runtime.build();
            renderer.render(element, f.area(), f.buffer_mut(), display);
        })?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if let Some(action) = key_to_action(key, runtime.state()) {
                    runtime.dispatch(action);
                }
            }
        }
    }

    tracing::debug!("LOOP: surface closed, leaving");
    Ok(())
}
