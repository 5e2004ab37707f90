//! Runtime: event loop and input routing for the dashboard TUI.
//!
//! Responsibilities
//! - Own the terminal lifecycle (enter/leave alternate screen, raw mode).
//! - Forward terminal input from a dedicated thread over a channel.
//! - Route events into `MainView` and act on returned `Effect`s.
//! - Render only after something changed.
//!
//! A slow idle ticker doubles as a resize watchdog: some terminals drop
//! resize notifications, so the loop compares the terminal size after every
//! wakeup and synthesizes `Msg::Resize` when it changed.
use std::io::Stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use laba_types::{Effect, Msg};
use ratatui::{Terminal, prelude::*};
use tokio::{
    signal,
    sync::mpsc,
    time::{self, MissedTickBehavior},
};
use tracing::{info, warn};

use crate::app::App;
use crate::config::TuiConfig;
use crate::ui::components::Component;
use crate::ui::main_component::MainView;

const INPUT_CHANNEL_CAPACITY: usize = 256;
const IDLE_INTERVAL: Duration = Duration::from_millis(1000);
const MOUSE_MOVE_THROTTLE: Duration = Duration::from_millis(16);

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Spawn a dedicated input thread that blocks on terminal input and forwards
/// `crossterm` events over a Tokio channel.
///
/// `poll()` and `read()` stay on the same OS thread; the loop ends when the
/// receiver is dropped or reading fails.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(INPUT_CHANNEL_CAPACITY);

    std::thread::spawn(move || {
        let mut last_mouse_move = Instant::now();
        loop {
            match event::poll(MOUSE_MOVE_THROTTLE) {
                Ok(false) => {
                    if sender.is_closed() {
                        break;
                    }
                    continue;
                }
                Ok(true) => {}
                Err(error) => {
                    warn!("Failed to poll terminal input: {}", error);
                    break;
                }
            }
            match event::read() {
                Ok(event) => {
                    // Throttle mouse moves; nothing in the shell reacts to hover.
                    let is_mouse_move = event.as_mouse_event().is_some_and(|e| e.kind == MouseEventKind::Moved);
                    if is_mouse_move {
                        if last_mouse_move.elapsed() < MOUSE_MOVE_THROTTLE {
                            continue;
                        }
                        last_mouse_move = Instant::now();
                    }
                    if let Err(error) = sender.blocking_send(event) {
                        warn!("Failed to forward input event: {}", error);
                        break;
                    }
                }
                Err(error) => {
                    warn!("Failed to read terminal input: {}", error);
                    break;
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Tui> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).context("enter alternate screen")?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout)).context("create terminal")?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode().context("disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture).context("leave alternate screen")?;
    terminal.show_cursor().context("show cursor")?;
    Ok(())
}

fn render(terminal: &mut Tui, app: &mut App, main_view: &mut MainView) -> Result<()> {
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

/// Route a raw crossterm event into the main view.
///
/// Only key presses are routed. Terminals that report releases and repeats
/// (Windows, kitty keyboard protocol) would otherwise toggle twice per stroke.
fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) if key_event.kind != KeyEventKind::Press => Vec::new(),
        Event::Key(key_event) => main_view.handle_key_events(app, key_event),
        Event::Mouse(mouse_event) => main_view.handle_mouse_events(app, mouse_event),
        Event::Resize(width, height) => main_view.handle_message(app, Msg::Resize(width, height)),
        Event::FocusGained | Event::FocusLost | Event::Paste(_) => Vec::new(),
    }
}

/// Entry point for the TUI runtime: sets up the terminal, runs the event
/// loop, and always restores the terminal before returning.
pub async fn run_app(config: TuiConfig) -> Result<()> {
    let mut app = App::new(config);
    let mut main_view = MainView::new();
    info!(
        color_mode = ?app.config.color_mode,
        capability = ?app.capability,
        "starting dashboard shell"
    );

    let mut terminal = setup_terminal()?;
    let outcome = event_loop(&mut terminal, &mut app, &mut main_view).await;
    let cleanup = cleanup_terminal(&mut terminal);
    info!("dashboard shell stopped");

    outcome.and(cleanup)
}

async fn event_loop(terminal: &mut Tui, app: &mut App, main_view: &mut MainView) -> Result<()> {
    let mut input_receiver = spawn_input_thread();
    let mut ticker = time::interval(IDLE_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    render(terminal, app, main_view)?;

    // Track the last known terminal size to synthesize Resize messages when
    // the terminal fails to emit them.
    let mut last_size: Option<(u16, u16)> = crossterm::terminal::size().ok();

    loop {
        let mut needs_render = false;
        let mut effects: Vec<Effect> = Vec::new();
        tokio::select! {
            maybe_event = input_receiver.recv() => {
                let Some(event) = maybe_event else {
                    // Input thread ended; shut down cleanly.
                    break;
                };
                effects.extend(handle_input_event(app, main_view, event));
                needs_render = true;
            }
            _ = ticker.tick() => {
                effects.extend(main_view.handle_message(app, Msg::Tick));
            }
            _ = signal::ctrl_c() => { break; }
        }

        if effects.contains(&Effect::Quit) {
            break;
        }

        if let Ok((w, h)) = crossterm::terminal::size()
            && last_size != Some((w, h))
        {
            last_size = Some((w, h));
            main_view.handle_message(app, Msg::Resize(w, h));
            needs_render = true;
        }

        if needs_render {
            render(terminal, app, main_view)?;
        }
    }
    Ok(())
}
