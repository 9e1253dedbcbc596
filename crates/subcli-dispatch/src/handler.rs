//! Command handler types.
//!
//! A handler is the business logic behind a command: it receives the parsed
//! [`Args`] for one invocation and returns the process exit status. The
//! dispatcher treats it as an opaque callable.
//!
//! # Single-Threaded Design
//!
//! CLI applications parse, run one handler and exit. Handlers therefore take
//! `&mut self` (and closures are `FnMut`), so a handler can mutate its own
//! state without `Arc<Mutex<_>>`. The registry shares each handler as an
//! `Rc<RefCell<_>>`, which keeps the registry itself read-only during dispatch.

use std::cell::RefCell;
use std::rc::Rc;

use crate::Args;

/// Trait for command handlers.
///
/// # Example
///
/// ```rust
/// use subcli_dispatch::{Args, Handler};
///
/// struct Counter { count: i32 }
///
/// impl Handler for Counter {
///     fn handle(&mut self, _args: &Args) -> i32 {
///         self.count += 1;
///         0
///     }
/// }
/// ```
pub trait Handler {
    /// Executes the command; the returned value becomes the exit status.
    fn handle(&mut self, args: &Args) -> i32;
}

/// A shared, type-erased handler as stored in a [`Command`](crate::Command).
pub type SharedHandler = Rc<RefCell<dyn Handler>>;

/// A wrapper that implements [`Handler`] for `FnMut` closures.
///
/// ```rust
/// use subcli_dispatch::{Args, FnHandler, Handler};
///
/// let mut handler = FnHandler::new(|args: &Args| if args.has("force") { 0 } else { 1 });
/// assert_eq!(handler.handle(&Args::default()), 1);
/// ```
pub struct FnHandler<F>
where
    F: FnMut(&Args) -> i32,
{
    f: F,
}

impl<F> FnHandler<F>
where
    F: FnMut(&Args) -> i32,
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> Handler for FnHandler<F>
where
    F: FnMut(&Args) -> i32,
{
    fn handle(&mut self, args: &Args) -> i32 {
        (self.f)(args)
    }
}
