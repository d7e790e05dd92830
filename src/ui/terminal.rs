//! Raw-mode handling and inline frame repainting

use std::io::{self, Write};

use anyhow::Context;
use crossterm::{
    cursor::{Hide, MoveToColumn, MoveUp, Show},
    execute, queue,
    terminal::{self, Clear, ClearType},
};
use tracing::{debug, warn};

/// Puts the terminal into raw mode for as long as it is alive
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn new() -> anyhow::Result<Self> {
        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        if let Err(e) = execute!(io::stdout(), Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(e).context("Failed to hide cursor");
        }
        debug!("Terminal raw mode enabled");
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = execute!(io::stdout(), Show) {
            warn!("Failed to show cursor: {}", e);
        }
        if let Err(e) = terminal::disable_raw_mode() {
            warn!("Failed to disable raw mode: {}", e);
        }
        debug!("Terminal restored");
    }
}

/// Current terminal width, if the terminal can report it
pub fn columns() -> Option<u16> {
    match terminal::size() {
        Ok((cols, _)) => Some(cols),
        Err(e) => {
            warn!("Could not read terminal size: {}", e);
            None
        }
    }
}

/// Repaints frames in place below the cursor
pub struct Renderer<W: Write> {
    out: W,
    last_frame: Option<String>,
    lines_drawn: u16,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            last_frame: None,
            lines_drawn: 0,
        }
    }

    /// Replace the previous frame with `frame`
    pub fn draw(&mut self, frame: &str) -> io::Result<()> {
        if self.last_frame.as_deref() == Some(frame) {
            return Ok(());
        }

        queue!(self.out, MoveToColumn(0))?;
        if self.lines_drawn > 0 {
            queue!(self.out, MoveUp(self.lines_drawn))?;
        }
        queue!(self.out, Clear(ClearType::FromCursorDown))?;

        // Raw mode disables output post-processing, so line feeds need a carriage return
        self.out.write_all(frame.replace('\n', "\r\n").as_bytes())?;
        self.out.flush()?;

        self.lines_drawn = u16::try_from(frame.matches('\n').count()).unwrap_or(u16::MAX);
        self.last_frame = Some(frame.to_string());
        Ok(())
    }

    /// Erase whatever frame is on screen
    pub fn clear(&mut self) -> io::Result<()> {
        self.draw("")
    }

    /// Height in lines of the frame currently on screen
    pub fn lines_drawn(&self) -> u16 {
        self.lines_drawn
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
