//! Interactive raw-mode console loop.
//!
//! Enter submits, Up/Down recall history, Tab completes, Ctrl-U clears the
//! edit line, Esc or Ctrl-C quits.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;

use folio_effects::counter;
use folio_effects::konami::KonamiDetector;
use folio_effects::typewriter::Typewriter;
use folio_terminal::{InputEvent, Line, LineStyle, Session, intro};
use folio_types::config::FolioConfig;

use crate::input::{self, Action};
use crate::view::ConsoleView;

/// Pause between two frames of the stats count-up.
const COUNTER_FRAME: Duration = Duration::from_millis(20);

const EASTER_EGG: &str = "Easter egg found! You're awesome!";

/// Restores cooked mode when dropped, including on early return.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            log::warn!("failed to restore terminal mode: {e}");
        }
    }
}

/// Run the interactive session until the user quits.
pub fn run(session: &mut Session, config: &FolioConfig, prompt: &str) -> Result<()> {
    let _raw = RawModeGuard::enable()?;
    let mut view = ConsoleView::new(io::stdout().lock(), prompt, true, true);
    let animate = config.typewriter_ms > 0;

    if config.intro {
        play_intro(session, &mut view)?;
    }
    type_greeting(
        session,
        &mut view,
        &config.greeting,
        Duration::from_millis(config.typewriter_ms),
    )?;
    animate_stats(session, &mut view, animate)?;

    let mut konami = KonamiDetector::new();
    view.draw_edit_line(session.edit_line())?;
    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind == KeyEventKind::Press && konami.push(input::konami_key(&key)) {
            view.erase_current_row()?;
            session.print(Line::success(EASTER_EGG), &mut view);
        }

        match input::action_for(&key) {
            Action::Quit => break,
            Action::Insert(c) => {
                let mut line = session.edit_line().to_string();
                line.push(c);
                session.set_edit_line(line);
            },
            Action::Backspace => {
                let mut line = session.edit_line().to_string();
                line.pop();
                session.set_edit_line(line);
            },
            Action::ClearLine => session.set_edit_line(""),
            Action::Submit => {
                let line = session.edit_line().to_string();
                view.erase_current_row()?;
                session.handle(InputEvent::Submit(line), &mut view);
            },
            Action::Navigate(direction) => {
                session.handle(InputEvent::Navigate(direction), &mut view);
            },
            Action::Complete => {
                let partial = session.edit_line().to_string();
                view.erase_current_row()?;
                session.handle(InputEvent::RequestCompletion(partial), &mut view);
            },
            Action::Ignore => {},
        }
        view.draw_edit_line(session.edit_line())?;
    }

    view.erase_current_row()?;
    Ok(())
}

/// Wait up to `timeout`; returns true if a key was pressed meanwhile.
fn key_pressed_within(timeout: Duration) -> io::Result<bool> {
    if event::poll(timeout)?
        && let Event::Key(key) = event::read()?
    {
        return Ok(key.kind == KeyEventKind::Press);
    }
    Ok(false)
}

/// Play the scripted intro. Any key press skips the rest of it.
fn play_intro<W: Write>(session: &mut Session, view: &mut ConsoleView<W>) -> io::Result<()> {
    for step in intro::script(session.profile()) {
        if key_pressed_within(step.delay)? {
            log::debug!("intro skipped");
            break;
        }
        session.print(step.line, view);
    }
    Ok(())
}

fn type_greeting<W: Write>(
    session: &mut Session,
    view: &mut ConsoleView<W>,
    greeting: &[String],
    delay: Duration,
) -> io::Result<()> {
    for text in greeting {
        if !delay.is_zero() {
            for frame in Typewriter::new(text, delay) {
                view.draw_transient(frame, LineStyle::Info)?;
                thread::sleep(delay);
            }
            view.erase_current_row()?;
        }
        session.print(Line::info(text.as_str()), view);
    }
    Ok(())
}

/// Count every stat up from zero on one row, then leave the final values
/// in the scrollback.
fn animate_stats<W: Write>(
    session: &mut Session,
    view: &mut ConsoleView<W>,
    animate: bool,
) -> io::Result<()> {
    let stats = session.profile().stats.clone();
    if stats.is_empty() {
        return Ok(());
    }
    let frames: Vec<Vec<String>> = stats.iter().map(|s| counter::frames(s.value)).collect();
    let len = frames.iter().map(Vec::len).max().unwrap_or(1);
    let row = |i: usize| -> String {
        stats
            .iter()
            .zip(&frames)
            .map(|(stat, f)| format!("{} {}", f[i.min(f.len() - 1)], stat.label))
            .collect::<Vec<_>>()
            .join("  |  ")
    };

    if animate {
        for i in 0..len {
            view.draw_transient(&row(i), LineStyle::Success)?;
            thread::sleep(COUNTER_FRAME);
        }
        view.erase_current_row()?;
    }
    session.print(Line::success(row(len - 1)), view);
    Ok(())
}
