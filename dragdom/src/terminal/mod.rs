use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Color as CtColor, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::buffer::Buffer;
use crate::container::Viewport;
use crate::element::Element;
use crate::layout::LayoutResult;
use crate::render::{render_to_buffer, Stylesheet};
use crate::types::Rgb;

/// Raw-mode terminal with mouse capture and double-buffered drawing.
///
/// The previous terminal state is restored on drop.
pub struct Terminal {
    stdout: io::Stdout,
    current_buffer: Buffer,
    previous_buffer: Buffer,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        let (width, height) = terminal::size()?;

        Ok(Self {
            stdout,
            current_buffer: Buffer::new(width, height),
            previous_buffer: Buffer::new(width, height),
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.current_buffer.width(), self.current_buffer.height())
    }

    pub fn viewport(&self) -> Viewport {
        let (width, height) = self.size();
        Viewport::new(width as f64, height as f64)
    }

    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();

        let has_event = match timeout {
            Some(dur) => event::poll(dur)?,
            None => {
                // Block until event
                events.push(event::read()?);
                return Ok(events);
            }
        };

        if has_event {
            events.push(event::read()?);
            // Drain any additional pending events
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }

        Ok(events)
    }

    pub fn render(
        &mut self,
        root: &Element,
        layout: &LayoutResult,
        stylesheet: &Stylesheet,
    ) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        if width != self.current_buffer.width() || height != self.current_buffer.height() {
            self.current_buffer = Buffer::new(width, height);
            self.previous_buffer = Buffer::new(width, height);
            execute!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        }

        self.current_buffer.clear();
        render_to_buffer(root, layout, stylesheet, &mut self.current_buffer);
        self.flush_diff()?;

        std::mem::swap(&mut self.current_buffer, &mut self.previous_buffer);
        Ok(())
    }

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut last_x = u16::MAX;
        let mut last_y = u16::MAX;
        let mut last_fg = None;
        let mut last_bg = None;

        for (x, y, cell) in self.current_buffer.diff(&self.previous_buffer) {
            // Move cursor if not sequential
            if y != last_y || x != last_x.wrapping_add(1) {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }

            if last_fg != Some(cell.fg) {
                queue!(self.stdout, SetForegroundColor(to_crossterm(cell.fg)))?;
                last_fg = Some(cell.fg);
            }

            if last_bg != Some(cell.bg) {
                queue!(self.stdout, SetBackgroundColor(to_crossterm(cell.bg)))?;
                last_bg = Some(cell.bg);
            }

            write!(self.stdout, "{}", cell.char)?;

            last_x = x;
            last_y = y;
        }

        queue!(self.stdout, SetForegroundColor(CtColor::Reset), SetBackgroundColor(CtColor::Reset))?;
        self.stdout.flush()
    }
}

fn to_crossterm(rgb: Rgb) -> CtColor {
    CtColor::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
