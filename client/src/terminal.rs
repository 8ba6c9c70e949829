use std::{
    io::{stdout, Stdout, Write},
    time::Duration,
};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode as TermKeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::Print,
    terminal::{self, disable_raw_mode, enable_raw_mode, Clear, ClearType},
};
use game::{InputSource, KeyCode, RenderSurface};
use log::warn;

/// the real terminal, in raw mode on the alternate screen for as long as this value lives.
pub struct Terminal {
    out: Stdout,
}

impl Terminal {
    pub fn new() -> std::io::Result<Self> {
        enable_raw_mode()?;
        let mut out = stdout();
        if let Err(err) = execute!(
            out,
            terminal::EnterAlternateScreen,
            Clear(ClearType::All),
            MoveTo(0, 0)
        ) {
            let _ = disable_raw_mode();
            return Err(err);
        }
        Ok(Self { out })
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        if let Err(err) = execute!(self.out, terminal::LeaveAlternateScreen, Show) {
            warn!("failed to leave the alternate screen: {err}");
        }
        if let Err(err) = disable_raw_mode() {
            warn!("failed to disable raw mode: {err}");
        }
    }
}

impl RenderSurface for Terminal {
    fn clear(&mut self) -> std::io::Result<()> {
        queue!(self.out, Clear(ClearType::All))
    }

    fn write_char(&mut self, row: u16, col: u16, ch: char) -> std::io::Result<()> {
        queue!(self.out, MoveTo(col, row), Print(ch))
    }

    fn write_text(&mut self, row: u16, col: u16, text: &str) -> std::io::Result<()> {
        queue!(self.out, MoveTo(col, row), Print(text))
    }

    fn present(&mut self) -> std::io::Result<()> {
        self.out.flush()
    }

    fn hide_cursor(&mut self) -> std::io::Result<()> {
        execute!(self.out, Hide)
    }
}

/// keyboard events from the terminal. crossterm reads them from a process-wide queue, so this
/// holds no state of its own.
pub struct Keyboard;

impl InputSource for Keyboard {
    fn poll_key(&mut self) -> std::io::Result<Option<KeyCode>> {
        if !event::poll(Duration::ZERO)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key_event) => Ok(decode_key(key_event)),
            _ => Ok(None),
        }
    }
}

/// maps a terminal key event onto the game's keys. releases and unbound keys decode to `None`.
fn decode_key(key_event: KeyEvent) -> Option<KeyCode> {
    if key_event.kind == KeyEventKind::Release {
        return None;
    }
    if key_event.modifiers == KeyModifiers::CONTROL && key_event.code == TermKeyCode::Char('c') {
        return Some(KeyCode::Interrupt);
    }
    match key_event.code {
        TermKeyCode::Up => Some(KeyCode::Up),
        TermKeyCode::Down => Some(KeyCode::Down),
        TermKeyCode::Char(ch) => Some(KeyCode::Char(ch)),
        _ => None,
    }
}
