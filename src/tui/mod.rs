//! Terminal UI for tic-tac-toe.

mod app;
mod input;
mod ui;

pub use app::{App, Flow};
pub use input::{Action, action_for_key, action_for_mouse, move_cursor};
pub use ui::{ScreenLayout, draw, layout};

use crate::config::AppConfig;
use anyhow::Result;
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use tracing::{error, info, instrument, trace, warn};

/// Run the interactive game until the user quits.
///
/// The terminal is restored on every exit path, including a panic in the
/// event loop.
pub fn run_tui(config: &AppConfig) -> Result<()> {
    // Log to a file so output cannot corrupt the screen.
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    let mouse = *config.mouse();
    info!(mouse, "Starting tic-tac-toe TUI");

    install_panic_hook(mouse);
    let mut terminal = setup_terminal(mouse)?;

    let mut app = App::new(*config.show_hints());
    let res = run_app(&mut terminal, &mut app);
    let restored = restore_terminal(mouse);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    if let Err(err) = &restored {
        warn!(error = %err, "Failed to restore terminal");
    }
    info!("TUI exited");
    res.and(restored.map_err(Into::into))
}

/// Chains a hook that restores the terminal before the default panic output.
fn install_panic_hook(mouse: bool) {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal(mouse);
        original_hook(panic_info);
    }));
}

/// Enters raw mode and the alternate screen. Undoes both if a later step fails.
fn setup_terminal(mouse: bool) -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let enter = || -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        if mouse {
            execute!(stdout, EnableMouseCapture)?;
        }
        Terminal::new(CrosstermBackend::new(stdout))
    };
    enter().inspect_err(|_| {
        let _ = restore_terminal(mouse);
    })
}

/// One teardown step.
type Step<'a> = Box<dyn FnOnce() -> io::Result<()> + 'a>;

/// Leaves raw mode, the alternate screen and mouse capture.
fn restore_terminal(mouse: bool) -> io::Result<()> {
    let mut steps: Vec<Step<'_>> = Vec::new();
    steps.push(Box::new(disable_raw_mode));
    if mouse {
        steps.push(Box::new(|| {
            let mut stdout = io::stdout();
            execute!(stdout, DisableMouseCapture)
        }));
    }
    steps.push(Box::new(|| {
        let mut stdout = io::stdout();
        execute!(stdout, LeaveAlternateScreen)
    }));
    steps.push(Box::new(|| {
        let mut stdout = io::stdout();
        execute!(stdout, Show)
    }));
    run_all(steps)
}

/// Runs every step even after a failure and returns the first error.
fn run_all(steps: Vec<Step<'_>>) -> io::Result<()> {
    steps.into_iter().fold(Ok(()), |first, step| {
        let res = step();
        first.and(res)
    })
}

/// Draw, wait for one event, handle it, repeat.
#[instrument(skip_all)]
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        let mut area = Rect::default();
        terminal.draw(|f| {
            area = f.area();
            ui::draw(f, app);
        })?;

        let flow = match event::read()? {
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse, area),
            other => {
                trace!(event = ?other, "Unhandled event");
                Flow::Continue
            }
        };

        if flow == Flow::Quit {
            info!("User quit");
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_restore_steps_all_run_after_failure() {
        let ran = Cell::new(0);
        let mut steps: Vec<Step<'_>> = Vec::new();
        steps.push(Box::new(|| {
            ran.set(ran.get() + 1);
            Err(io::Error::other("raw mode"))
        }));
        steps.push(Box::new(|| {
            ran.set(ran.get() + 1);
            Err(io::Error::other("alternate screen"))
        }));
        steps.push(Box::new(|| {
            ran.set(ran.get() + 1);
            Ok(())
        }));

        let err = run_all(steps).unwrap_err();
        assert_eq!(ran.get(), 3);
        assert_eq!(err.to_string(), "raw mode");
    }

    #[test]
    fn test_restore_steps_succeed_when_all_succeed() {
        let ran = Cell::new(0);
        let mut steps: Vec<Step<'_>> = Vec::new();
        for _ in 0..2 {
            steps.push(Box::new(|| {
                ran.set(ran.get() + 1);
                Ok(())
            }));
        }

        assert!(run_all(steps).is_ok());
        assert_eq!(ran.get(), 2);
    }
}
