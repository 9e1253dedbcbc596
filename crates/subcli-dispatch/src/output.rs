//! Output streams for dispatch.
//!
//! The dispatcher never writes to the process stdout/stderr directly. It is
//! handed a [`Streams`] pair, so an application can point it at the terminal
//! and a test can point it at a [`SharedBuffer`].
//!
//! Writes are fire-and-forget: a failed diagnostic write is not something the
//! dispatcher can recover from, so errors are dropped.

use std::cell::RefCell;
use std::fmt;
use std::io::{self, Write};
use std::rc::Rc;

/// The two destinations the dispatcher writes to.
pub struct Streams<'a> {
    /// Help text, version line and suggestion lists.
    pub out: &'a mut dyn Write,
    /// Diagnostics, one line each, prefixed with the app name.
    pub err: &'a mut dyn Write,
}

impl<'a> Streams<'a> {
    pub fn new(out: &'a mut dyn Write, err: &'a mut dyn Write) -> Self {
        Self { out, err }
    }

    /// Writes `text` followed by a newline to the output stream.
    pub fn println(&mut self, text: &str) {
        let _ = writeln!(self.out, "{}", text);
    }

    /// Writes `text` verbatim to the output stream.
    pub fn print(&mut self, text: &str) {
        let _ = write!(self.out, "{}", text);
    }

    /// Writes `<app>: <message>` to the error stream.
    pub fn printerr(&mut self, app: &str, message: impl fmt::Display) {
        let _ = writeln!(self.err, "{}: {}", app, message);
    }

    pub fn flush(&mut self) {
        let _ = self.out.flush();
        let _ = self.err.flush();
    }
}

/// An in-memory writer whose clones share one buffer.
///
/// Hand one clone to [`Streams`] and keep another to read what was written.
///
/// ```rust
/// use std::io::Write;
/// use subcli_dispatch::SharedBuffer;
///
/// let buffer = SharedBuffer::new();
/// let mut writer = buffer.clone();
/// write!(writer, "hello").unwrap();
/// assert_eq!(buffer.contents(), "hello");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    bytes: Rc<RefCell<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.borrow()).into_owned()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.bytes.borrow_mut().clear();
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
