//! Sequential async iteration.
//!
//! Every combinator in this module runs its per-item operation strictly one
//! element at a time: the future returned for element `N` is driven to
//! completion before the operation is even called for element `N + 1`. This
//! holds no matter when the futures would have finished under a concurrent
//! scheduler; ordering comes from the traversal, not from the clock.
//!
//! Operations signal whether to go on through [`ControlFlow`]. Returning
//! `ControlFlow::Break(value)` stops the traversal and hands `value` back to
//! the caller unchanged, whether it represents an error or just an early
//! exit. Completing the whole collection resolves to `ControlFlow::Continue(())`.
//!
//! State the operations need, the "context" they run in, is captured by the
//! closures themselves. Because only one operation runs at a time, shared
//! state can live in a `Cell` or `RefCell` without further coordination.
//!
//! # Examples
//!
//! ```
//! use std::ops::ControlFlow;
//! use seriatim::iter;
//! use seriatim::runtime::block_on;
//!
//! let files = ["a.txt", "b.txt", "c.txt"];
//! let flow = block_on(iter::each(&files, |name, index| async move {
//!     println!("{index}: {name}");
//!     if *name == "b.txt" {
//!         return ControlFlow::Break("b.txt is not allowed");
//!     }
//!     ControlFlow::Continue(())
//! }));
//! assert_eq!(flow, ControlFlow::Break("b.txt is not allowed"));
//! ```

use std::future::Future;
use std::ops::ControlFlow;

mod dequeue;
mod each;
mod fold;
mod map;
mod source;

pub use dequeue::Dequeue;
pub use each::Each;
pub use fold::{fold_left, reduce};
pub use map::{collect, map};
pub use source::{Positional, Queue};

/// Visit every element of a collection in order, one at a time.
///
/// `op` is called as `op(item, index)`, where `index` is the position of
/// `item` in the collection. The future it returns decides whether to carry
/// on: `ControlFlow::Continue(())` moves to the next element,
/// `ControlFlow::Break(stop)` ends the traversal and the returned future
/// resolves to `ControlFlow::Break(stop)`. When every element has been
/// visited the returned future resolves to `ControlFlow::Continue(())`.
///
/// The collection is never modified by the traversal, and it is read anew
/// on every step. If `op` modifies a [`RefCell`]-backed collection, later
/// steps see the modification: appended elements are visited, and removing
/// elements shortens the traversal. No copy is taken up front.
///
/// [`RefCell`]: std::cell::RefCell
///
/// # Example
///
/// ```
/// use std::cell::RefCell;
/// use std::ops::ControlFlow;
/// use seriatim::iter;
/// use seriatim::runtime::block_on;
///
/// let list = [1, 2, 3, 4, 5, 6];
/// let output = RefCell::new(Vec::new());
/// let flow: ControlFlow<()> = block_on(iter::each(&list, |n, _| {
///     output.borrow_mut().push(n * 5);
///     async { ControlFlow::Continue(()) }
/// }));
/// assert!(flow.is_continue());
/// assert_eq!(*output.borrow(), [5, 10, 15, 20, 25, 30]);
/// ```
pub fn each<L, F, Fut, S>(list: L, op: F) -> Each<L, F, Fut>
where
    L: Positional,
    F: FnMut(L::Item, usize) -> Fut,
    Fut: Future<Output = ControlFlow<S>>,
{
    Each::new(list, op)
}

/// Drain a queue from the front, one element at a time.
///
/// Each element is removed from the queue *before* `op(item)` is called.
/// That makes it safe for `op` to push new elements onto the back of the
/// queue, and they will be drained in turn; the traversal only ends once the
/// queue is empty. This suits breadth-first expansions such as walking a
/// directory tree. Note that an operation which always appends never
/// finishes.
///
/// `ControlFlow::Break(stop)` ends the drain right away, leaving any
/// remaining elements in the queue, and the returned future resolves to
/// `ControlFlow::Break(stop)`. Otherwise it resolves to
/// `ControlFlow::Continue(())` once the queue is empty.
///
/// # Example
///
/// ```
/// use std::cell::RefCell;
/// use std::collections::VecDeque;
/// use std::ops::ControlFlow;
/// use seriatim::iter;
/// use seriatim::runtime::block_on;
///
/// let queue = RefCell::new(VecDeque::from([1, 2, 3, 4, 5, 6, 7, 8]));
/// let flow = block_on(iter::dequeue(&queue, |n| async move {
///     if n == 5 {
///         return ControlFlow::Break(n);
///     }
///     ControlFlow::Continue(())
/// }));
/// assert_eq!(flow, ControlFlow::Break(5));
/// assert_eq!(queue.borrow().len(), 3);
/// ```
pub fn dequeue<Q, F, Fut, S>(queue: Q, op: F) -> Dequeue<Q, F, Fut>
where
    Q: Queue,
    F: FnMut(Q::Item) -> Fut,
    Fut: Future<Output = ControlFlow<S>>,
{
    Dequeue::new(queue, op)
}
