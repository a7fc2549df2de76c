use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::widgets::Paragraph;
use ratatui::Terminal;

use whip_core::{update, view, Key, Msg, SessionState};
use whip_engine::{EngineEvent, EngineHandle, ExtractSettings, LookupSettings};

use crate::effects::{run_effects, ClipboardSink, SystemClipboard};
use crate::keys::map_key;

const TICK_RATE: Duration = Duration::from_millis(80);
const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Sets up the terminal, runs the interaction loop, and restores the
/// terminal whatever the outcome.
pub fn run(state: SessionState, auto_submit: bool) -> Result<()> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = event_loop(&mut terminal, state, auto_submit);

    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut state: SessionState,
    auto_submit: bool,
) -> Result<()> {
    let engine = EngineHandle::new(LookupSettings::default(), ExtractSettings::default());
    let mut clipboard = SystemClipboard;
    let mut spinner = 0usize;
    let mut dirty = true;
    let mut last_tick = Instant::now();

    // Seeded URL plus a recognized platform go straight into the lookup.
    if auto_submit {
        let (next, quit) = dispatch(state, Msg::Key(Key::Enter), &engine, &mut clipboard);
        state = next;
        if quit {
            return Ok(());
        }
    }

    loop {
        // Worker completions first, so a finished lookup chains into
        // extraction before the next redraw.
        while let Some(engine_event) = engine.try_recv() {
            let msg = to_msg(engine_event);
            let (next, quit) = dispatch(state, msg, &engine, &mut clipboard);
            state = next;
            dirty = true;
            if quit {
                return Ok(());
            }
        }

        if dirty {
            let text = view(&state, SPINNER_FRAMES[spinner]);
            terminal.draw(|frame| {
                frame.render_widget(Paragraph::new(text.as_str()), frame.size());
            })?;
            dirty = false;
        }

        let timeout = TICK_RATE
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    let (next, quit) = dispatch(state, map_key(key), &engine, &mut clipboard);
                    state = next;
                    dirty = true;
                    if quit {
                        return Ok(());
                    }
                }
            }
        }

        if last_tick.elapsed() >= TICK_RATE {
            last_tick = Instant::now();
            let (next, quit) = dispatch(state, Msg::Tick, &engine, &mut clipboard);
            state = next;
            if quit {
                return Ok(());
            }
            if state.is_busy() {
                spinner = (spinner + 1) % SPINNER_FRAMES.len();
                dirty = true;
            }
        }
    }
}

/// Runs one message through the state machine and executes the commands
/// it returns. The bool is true once the session asked to quit.
fn dispatch<C: ClipboardSink>(
    state: SessionState,
    msg: Msg,
    engine: &EngineHandle,
    clipboard: &mut C,
) -> (SessionState, bool) {
    let (state, effects) = update(state, msg);
    let quit = run_effects(effects, engine, clipboard);
    (state, quit)
}

/// Converts a worker completion into a state-machine message, logging the
/// cause of any failure; the UI itself only shows a generic error.
fn to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::LookupDone(result) => Msg::LookupDone(result.map_err(|err| {
            log::warn!("lookup failed: {err}");
            err.to_string()
        })),
        EngineEvent::ExtractDone(result) => Msg::ExtractDone(result.map_err(|err| {
            log::warn!("extraction failed: {err}");
            err.to_string()
        })),
    }
}
