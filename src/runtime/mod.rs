//! Single-threaded runtime support.
//!
//! The traversals in [`iter`] are plain futures and run on any executor. For
//! programs and tests which don't bring their own, [`block_on()`] drives a
//! future to completion on the current thread. The `#[seriatim::main]` and
//! `#[seriatim::test]` attributes expand to a call to it.
//!
//! [`iter`]: crate::iter

#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, unreachable_pub)]

mod block_on;

pub use block_on::block_on;
