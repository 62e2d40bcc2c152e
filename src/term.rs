use std::io::{self, stdout, Stdout, Write};
use std::time::Duration;

use crossterm::event::{poll, read, DisableMouseCapture, EnableMouseCapture, Event};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, terminal};

use crate::grid::Rect;

pub type TermInt = u16;

pub struct TermManager {
    width: TermInt,
    height: TermInt,
    stdout: Stdout,
}

/// Clips a `len`-char run starting at (x, y) to a `width` x `height` screen.
/// Returns the start column and how many chars to skip and then print, or
/// `None` when nothing lands on screen.
fn visible_span(
    x: i32,
    y: i32,
    len: usize,
    width: TermInt,
    height: TermInt,
) -> Option<(TermInt, usize, usize)> {
    if y < 0 || y >= height as i32 {
        return None;
    }

    let skip = (-x).max(0) as usize;
    let room = (width as i32 - x.max(0)).max(0) as usize;
    let take = len.saturating_sub(skip).min(room);
    if take == 0 {
        return None;
    }

    Some((x.max(0) as TermInt, skip, take))
}

impl TermManager {
    pub fn new() -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(TermManager { width, height, stdout: stdout() })
    }

    pub fn setup(&mut self) -> io::Result<()> {
        execute!(self.stdout, EnterAlternateScreen, EnableMouseCapture, cursor::Hide)?;
        terminal::enable_raw_mode()
    }

    pub fn restore(&mut self) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(self.stdout, DisableMouseCapture, cursor::Show, LeaveAlternateScreen)
    }

    /// Drains every event that is already waiting.
    pub fn read_events_queue(&self) -> io::Result<Vec<Event>> {
        let mut events = vec![];

        while poll(Duration::from_millis(0))? {
            events.push(read()?);
        }

        Ok(events)
    }

    pub fn size(&self) -> (TermInt, TermInt) {
        (self.width, self.height)
    }

    pub fn set_size(&mut self, width: TermInt, height: TermInt) {
        self.width = width;
        self.height = height;
    }

    /// Prints `text` at (x, y), dropping whatever falls outside the terminal.
    pub fn print_at(&mut self, x: i32, y: i32, text: &str, color: Color) -> io::Result<()> {
        let len = text.chars().count();
        let (column, skip, take) = match visible_span(x, y, len, self.width, self.height) {
            Some(span) => span,
            None => return Ok(()),
        };
        let visible: String = text.chars().skip(skip).take(take).collect();

        queue!(
            self.stdout,
            cursor::MoveTo(column, y as TermInt),
            SetForegroundColor(color),
            Print(visible),
            ResetColor
        )
    }

    pub fn print_centered(&mut self, y: i32, text: &str, color: Color) -> io::Result<()> {
        let x = self.width as i32 / 2 - text.chars().count() as i32 / 2;
        self.print_at(x, y, text, color)
    }

    /// Draws a box whose outer edge is `rect`.
    pub fn draw_border(&mut self, rect: Rect, color: Color) -> io::Result<()> {
        let end_x = rect.x + rect.w - 1;
        let end_y = rect.y + rect.h - 1;
        let horizontal = "─".repeat((rect.w - 2).max(0) as usize);

        self.print_at(rect.x, rect.y, &format!("┌{}┐", horizontal), color)?;
        self.print_at(rect.x, end_y, &format!("└{}┘", horizontal), color)?;

        for y in rect.y + 1..end_y {
            self.print_at(rect.x, y, "│", color)?;
            self.print_at(end_x, y, "│", color)?;
        }

        Ok(())
    }

    pub fn clear(&mut self) -> io::Result<()> {
        queue!(self.stdout, terminal::Clear(ClearType::All))
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }
}
