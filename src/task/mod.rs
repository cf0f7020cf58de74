//! Types and Traits for working with asynchronous tasks.

mod sleep;
mod yield_now;

pub use sleep::{sleep, Sleep};
pub use yield_now::{yield_now, YieldNow};
