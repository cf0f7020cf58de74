#![warn(future_incompatible, unreachable_pub)]
//#![deny(missing_debug_implementations)]
//#![warn(missing_docs)]

//! Sequential async traversal.
//!
//! This crate runs an asynchronous operation over the elements of a
//! collection strictly one at a time, in order, with the ability to stop
//! early. It is meant for work that has to suspend per element, such as
//! inspecting files one by one, without hand-writing a chain of nested
//! continuations.
//!
//! # Examples
//!
//! **Visit every element, stopping on the first failure**
//!
//! ```rust
//! use std::ops::ControlFlow;
//! use seriatim::iter;
//!
//! #[seriatim::main]
//! async fn main() {
//!     let sizes = [3, 7, 0, 4];
//!     let flow = iter::each(&sizes, |size, index| async move {
//!         seriatim::task::yield_now().await;
//!         match size {
//!             0 => ControlFlow::Break(format!("entry {index} is empty")),
//!             _ => ControlFlow::Continue(()),
//!         }
//!     })
//!     .await;
//!     assert_eq!(flow, ControlFlow::Break("entry 2 is empty".to_string()));
//! }
//! ```
//!
//! **Breadth-first directory walk**
//!
//! ```rust,no_run
#![doc = include_str!("../demos/walk.rs")]
//! ```
//!
//! # Design Decisions
//!
//! Every combinator returns a future, and that future drives the per-item
//! futures itself. There is no recursion between steps: a traversal over a
//! million elements that all complete immediately runs in a loop inside a
//! single `poll`, and never holds more than one per-item future at once.
//!
//! Stopping and failing share one channel, [`ControlFlow`]. What the break
//! value means is up to the caller, and the traversal hands it back
//! unchanged. [`iter::map`] and [`iter::reduce`] keep two quirks that callers
//! may rely on: `map` quietly skips items whose mapper failed, and `reduce`
//! seeds every call with the initial value instead of the previous result.
//!
//! The traversals don't need `Send`, and don't spawn anything. They run on
//! any executor; [`runtime::block_on`] is provided for programs that don't
//! have one.
//!
//! [`ControlFlow`]: std::ops::ControlFlow

pub mod args;
pub mod iter;
pub mod runtime;
pub mod task;

#[cfg(feature = "macros")]
pub use seriatim_macro::attr_macro_main as main;
#[cfg(feature = "macros")]
pub use seriatim_macro::attr_macro_test as test;

pub mod prelude {
    pub use crate::iter::Positional as _;
    pub use crate::iter::Queue as _;
    pub use std::ops::ControlFlow;
}
