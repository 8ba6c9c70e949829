use std::{collections::VecDeque, io};

use crate::{
    game_state::{GAME_HEIGHT, GAME_WIDTH},
    input::{InputSource, KeyCode},
    render::RenderSurface,
};

/// in-memory character grid standing in for the terminal.
pub struct GridSurface {
    cells: Vec<Vec<char>>,
    pub presented: usize,
    pub cursor_hidden: bool,
}

impl GridSurface {
    pub fn new() -> Self {
        Self {
            cells: vec![vec![' '; GAME_WIDTH as usize]; GAME_HEIGHT as usize],
            presented: 0,
            cursor_hidden: false,
        }
    }

    pub fn cell(&self, row: u16, col: u16) -> char {
        self.cells[row as usize][col as usize]
    }

    pub fn row(&self, row: u16) -> String {
        self.cells[row as usize].iter().collect()
    }

    pub fn text(&self) -> String {
        (0..GAME_HEIGHT as u16)
            .map(|row| self.row(row))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl RenderSurface for GridSurface {
    fn clear(&mut self) -> io::Result<()> {
        for row in self.cells.iter_mut() {
            row.fill(' ');
        }
        Ok(())
    }

    fn write_char(&mut self, row: u16, col: u16, ch: char) -> io::Result<()> {
        self.cells[row as usize][col as usize] = ch;
        Ok(())
    }

    fn write_text(&mut self, row: u16, col: u16, text: &str) -> io::Result<()> {
        let row = &mut self.cells[row as usize];
        for (cell, ch) in row.iter_mut().skip(col as usize).zip(text.chars()) {
            *cell = ch;
        }
        Ok(())
    }

    fn present(&mut self) -> io::Result<()> {
        self.presented += 1;
        Ok(())
    }

    fn hide_cursor(&mut self) -> io::Result<()> {
        self.cursor_hidden = true;
        Ok(())
    }
}

/// replays one scripted poll result per tick, then reports no input.
pub struct ScriptedInput {
    keys: VecDeque<Option<KeyCode>>,
}

impl ScriptedInput {
    pub fn new<I: IntoIterator<Item = Option<KeyCode>>>(keys: I) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    pub fn idle() -> Self {
        Self::new([])
    }
}

impl InputSource for ScriptedInput {
    fn poll_key(&mut self) -> io::Result<Option<KeyCode>> {
        Ok(self.keys.pop_front().flatten())
    }
}

/// a surface whose terminal has gone away.
pub struct BrokenSurface;

impl RenderSurface for BrokenSurface {
    fn clear(&mut self) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "terminal closed"))
    }

    fn write_char(&mut self, _row: u16, _col: u16, _ch: char) -> io::Result<()> {
        Ok(())
    }

    fn write_text(&mut self, _row: u16, _col: u16, _text: &str) -> io::Result<()> {
        Ok(())
    }

    fn present(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn hide_cursor(&mut self) -> io::Result<()> {
        Ok(())
    }
}
