use std::fmt;
use std::io::{self, Write};

use tracing::debug;

use crate::error::{SplitError, SplitResult};

/// Human-readable progress output that goes quiet once the reader hangs up.
pub(crate) struct Progress<'a, W: Write> {
    out: &'a mut W,
    closed: bool,
}

impl<'a, W: Write> Progress<'a, W> {
    pub(crate) fn new(out: &'a mut W) -> Self {
        Self { out, closed: false }
    }

    pub(crate) fn line(&mut self, args: fmt::Arguments<'_>) -> SplitResult<()> {
        if self.closed {
            return Ok(());
        }

        match writeln!(self.out, "{args}") {
            Ok(()) => Ok(()),
            Err(err) if should_ignore_pipe_error(&err) => {
                debug!("progress output closed, continuing without it");
                self.closed = true;
                Ok(())
            }
            Err(err) => Err(SplitError::Console(err)),
        }
    }
}

/// True for errors raised when the reading end of stdout has gone away.
pub fn should_ignore_pipe_error(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::BrokenPipe | io::ErrorKind::WouldBlock
    )
}
