// TUI module - terminal preview of the portfolio sections
//
// Sets up the terminal, runs the event loop (keyboard input and a redraw
// tick that drives fades, reveals and autoplay), and restores the terminal
// on the way out, including when the loop fails.

pub mod app;
pub mod components;
pub mod layout;
pub mod traits;
pub mod ui;

use crate::config::Config;
use crate::logging::LogBuffer;
use crate::model::{JobRecord, ProjectRecord};
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

/// Redraw interval; short enough for smooth fades
const TICK: Duration = Duration::from_millis(50);

/// Run the preview until the user quits
pub async fn run_preview(
    config: &Config,
    jobs: Vec<JobRecord>,
    projects: Vec<ProjectRecord>,
    log_buffer: LogBuffer,
) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(config, jobs, projects, log_buffer, Instant::now());
    tracing::info!("Preview started");

    let result = run_event_loop(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// tokio::select! waits on keyboard input and the redraw tick, responding to
/// whichever completes first.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(TICK);

    loop {
        let now = Instant::now();
        terminal
            .draw(|f| ui::draw(f, app, now))
            .context("Failed to draw terminal")?;

        tokio::select! {
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key)) = event::read() {
                        // Ignore release/repeat events on terminals that send them
                        if key.kind == KeyEventKind::Press {
                            app.handle_key(key, Instant::now());
                        }
                    }
                }
            } => {}

            _ = tick_interval.tick() => {
                app.tick(Instant::now());
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
