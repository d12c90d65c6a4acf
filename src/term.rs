use crate::{TermInt, Coords};
use crate::error::Result;
use crate::render::Viewport;
use std::{io::{Stdout, Write, stdout}, time::Duration};

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::style::Color;
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::event::{Event, KeyEvent, read, poll};

/// What one terminal cell shows.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cell {
    pub ch: char,
    pub bg: Color,
}

impl Cell {
    pub fn new(ch: char, bg: Color) -> Self {
        Cell { ch, bg }
    }

    pub fn blank(bg: Color) -> Self {
        Cell { ch: ' ', bg }
    }
}

pub struct TermManager {
    width: TermInt,
    height: TermInt,
    stdout: Stdout,
    screen: Vec<Cell>,
    current_msg: Option<Message>,
}

struct Message {
    top_left: Coords,
    width: TermInt,
    height: TermInt,
}

impl TermManager {
    pub fn new() -> Result<Self> {
        let (width, height) = terminal::size()?;
        let stdout = stdout();
        let screen = vec![Cell::blank(Color::Reset); width as usize * height as usize];
        Ok(TermManager { width, height, stdout, screen, current_msg: None })
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen)?;
        self.set_raw_mode(true)?;
        self.set_cursor_visibility(false)?;
        self.set_cursor_blink(false)?;
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        self.set_raw_mode(false)?;
        self.set_cursor_visibility(true)?;
        self.set_cursor_blink(true)?;
        execute!(self.stdout, style::ResetColor, LeaveAlternateScreen)?;
        Ok(())
    }

    pub fn read_key_blocking(&self) -> Result<KeyEvent> {
        loop {
            if let Event::Key(ev) = read()? {
                return Ok(ev);
            }
        }
    }

    pub fn read_key_events_queue(&self) -> Result<Vec<KeyEvent>> {
        let mut events = vec![];

        while poll(Duration::from_millis(0))? {
            if let Event::Key(ev) = read()? {
                events.push(ev);
            }
        }

        Ok(events)
    }

    pub fn get_terminal_size(&self) -> Coords {
        (self.width, self.height)
    }

    pub fn draw_borders(&mut self, size: Option<Coords>) -> Result<()> {
        let (width, height) = match size {
            Some((x, y)) => (x, y),
            None => (self.width, self.height)
        };

        let end_x = width - 1;
        let end_y = height - 1;

        for x in 0..width {
            let ch = if x == 0 || x == width - 1 {'+'} else {'-'};
            self.print_at((x, 0), Cell::new(ch, Color::Reset))?;
            self.print_at((x, end_y), Cell::new(ch, Color::Reset))?;
        }

        for y in 1..height - 1 {
            self.print_at((0, y), Cell::new('|', Color::Reset))?;
            self.print_at((end_x, y), Cell::new('|', Color::Reset))?;
        }

        self.flush()
    }

    /// Writes the cells of `frame` that differ from what is already on screen.
    pub fn present(&mut self, frame: &[Cell], viewport: &Viewport) -> Result<()> {
        for (idx, cell) in frame.iter().enumerate() {
            let pos = viewport.coords_of(idx);
            if self.screen[self.index(pos)] != *cell {
                self.print_at(pos, *cell)?;
            }
        }

        self.flush()
    }

    pub fn show_message(&mut self, lines: &[&str]) -> Result<()> {
        if self.has_message() {
            self.hide_message()?;
        }

        let msg_height = (lines.len() + 2) as TermInt;
        let msg_width = (lines.iter().map(|x| x.chars().count()).max().unwrap_or(0) + 2) as TermInt;
        let center = (self.width / 2, self.height / 2);
        let top_left = (center.0.saturating_sub(msg_width / 2), center.1.saturating_sub(msg_height / 2));

        queue!(self.stdout, style::ResetColor)?;

        // Print the top and bottom empty lines
        for y in [top_left.1, top_left.1 + msg_height - 1].iter() {
            for x_diff in 0..msg_width {
                self.print_at_no_save((top_left.0 + x_diff, *y), ' ')?;
            }
        }

        // Print the message lines
        for (i, line) in lines.iter().enumerate() {
            let padded_line = format!("{line: ^width$}", line = line, width = msg_width as usize);
            let y = top_left.1 + i as TermInt + 1;
            for (x_diff, ch) in padded_line.chars().enumerate() {
                self.print_at_no_save((top_left.0 + x_diff as TermInt, y), ch)?;
            }
        }

        self.current_msg = Some(Message::new(msg_width, msg_height, top_left));
        self.flush()
    }

    pub fn hide_message(&mut self) -> Result<()> {
        let msg = match self.current_msg.take() {
            Some(msg) => msg,
            None => return Ok(()),
        };
        let top_left = msg.top_left();

        // Restore the content from the screen buffer
        for y_diff in 0..msg.height() {
            for x_diff in 0..msg.width() {
                let pos = (top_left.0 + x_diff, top_left.1 + y_diff);
                let cell = self.screen[self.index(pos)];
                self.emit(pos, cell)?;
            }
        }

        self.flush()
    }

    /// Paints a cell and remembers it. Cells under a message are only remembered.
    pub fn print_at(&mut self, pos: Coords, cell: Cell) -> Result<()> {
        let idx = self.index(pos);
        self.screen[idx] = cell;

        let covered = self.current_msg.as_ref().map_or(false, |msg| msg.contains(pos));
        if !covered {
            self.emit(pos, cell)?;
        }
        Ok(())
    }

    pub fn clear(&mut self) -> Result<()> {
        execute!(self.stdout, style::ResetColor, terminal::Clear(ClearType::All))?;
        self.screen = vec![Cell::blank(Color::Reset); self.width as usize * self.height as usize];
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.stdout.flush()?;
        Ok(())
    }

    pub fn has_message(&self) -> bool {
        self.current_msg.is_some()
    }

    ///////////////////////////////////////////////////////////////////////////

    fn index(&self, pos: Coords) -> usize {
        self.width as usize * pos.1 as usize + pos.0 as usize
    }

    fn emit(&mut self, pos: Coords, cell: Cell) -> Result<()> {
        queue!(
            self.stdout,
            cursor::MoveTo(pos.0, pos.1),
            style::SetBackgroundColor(cell.bg),
            style::Print(cell.ch)
        )?;
        Ok(())
    }

    fn print_at_no_save(&mut self, pos: Coords, ch: char) -> Result<()> {
        // Messages go straight to the terminal so hiding them can restore the buffer
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), style::Print(ch))?;
        Ok(())
    }

    fn set_raw_mode(&self, option: bool) -> Result<()> {
        if option {
            terminal::enable_raw_mode()?;
        } else {
            terminal::disable_raw_mode()?;
        }
        Ok(())
    }

    fn set_cursor_blink(&mut self, option: bool) -> Result<()> {
        if option {
            execute!(self.stdout, cursor::EnableBlinking)?;
        } else {
            execute!(self.stdout, cursor::DisableBlinking)?;
        }
        Ok(())
    }

    fn set_cursor_visibility(&mut self, option: bool) -> Result<()> {
        if option {
            execute!(self.stdout, cursor::Show)?;
        } else {
            execute!(self.stdout, cursor::Hide)?;
        }
        Ok(())
    }
}

impl Message {
    pub fn new(width: TermInt, height: TermInt, top_left: Coords) -> Self {
        Message { width, height, top_left }
    }

    pub fn width(&self) -> TermInt {
        self.width
    }

    pub fn height(&self) -> TermInt {
        self.height
    }

    pub fn top_left(&self) -> Coords {
        self.top_left
    }

    pub fn contains(&self, pos: Coords) -> bool {
        let (x0, y0) = self.top_left;
        pos.0 >= x0 && pos.0 < x0 + self.width && pos.1 >= y0 && pos.1 < y0 + self.height
    }
}
