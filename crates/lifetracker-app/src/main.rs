mod app;

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, DisableFocusChange, EnableFocusChange, Event as CEvent, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use lifetracker_core::{bus::Event, logging};

use crate::app::{stage_for_key, App};

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableFocusChange, LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> Result<()> {
    logging::init();
    tracing::info!("LifeTracker starting up");

    let mut terminal = setup_terminal()?;
    let res = run(&mut terminal);
    restore_terminal(terminal)?;
    tracing::info!("LifeTracker shut down");
    res
}

fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    let mut app = App::new();
    let tick_interval = Duration::from_millis(100);
    let poll_timeout = Duration::from_millis(16);
    let mut last_tick = Instant::now();

    // The host delivers create/start/resume before the first frame.
    app.publish_launch_sequence();

    loop {
        app.drain_and_apply();
        app.sync_banner(Instant::now());

        if app.should_quit() {
            // Pause/stop/destroy still reach the observer before teardown;
            // they land in the log file, not on screen.
            app.publish_teardown_sequence();
            app.drain_and_apply();
            return Ok(());
        }

        // ── Render ──
        terminal.draw(|f| app.render(f))?;

        // ── Poll → Publish ──
        if event::poll(poll_timeout)? {
            match event::read()? {
                CEvent::Key(key) => {
                    if key.code == KeyCode::Char('q') {
                        app.bus.publish(Event::Quit);
                    } else if let Some(stage) = stage_for_key(key.code) {
                        app.bus.publish(Event::Lifecycle(stage));
                    } else {
                        app.bus.publish(Event::Key(key));
                    }
                }
                CEvent::FocusGained => app.bus.publish(Event::FocusGained),
                CEvent::FocusLost => app.bus.publish(Event::FocusLost),
                CEvent::Resize(cols, rows) => {
                    app.bus.publish(Event::Resize { cols, rows });
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_interval {
            last_tick = Instant::now();
            app.bus.publish(Event::Tick { now: last_tick });
        }
    }
}
