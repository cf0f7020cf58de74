use std::cell::RefCell;
use std::convert::Infallible;
use std::future::Future;
use std::ops::ControlFlow;

use super::{each, Positional};

/// Combine the elements of a collection into a single value, one at a time.
///
/// The `reducer` is called as `reducer(init, item)` for every element.
///
/// # Re-seeding
///
/// This is **not** a classic left fold. Every call receives a fresh clone of
/// the *original* `init`, never the value produced by the previous call, and
/// the output is whatever the *last* call produced. Code that needs a running
/// accumulation should carry it in its own state, for example by capturing a
/// `Cell` in the reducer.
///
/// Each call's result replaces the stored value: `Ok(value)` stores the
/// value and `Err(_)` clears it. Errors do not halt the traversal. Resolves
/// to `None` for an empty collection, or when the last call failed.
///
/// # Example
///
/// ```
/// use seriatim::iter;
/// use seriatim::runtime::block_on;
///
/// let list = [1, 2, 3];
/// let last = block_on(iter::reduce(10, &list, |init, n| async move {
///     Ok::<_, ()>(init + n)
/// }));
/// // 10 + 3, not 10 + 1 + 2 + 3.
/// assert_eq!(last, Some(13));
/// ```
pub async fn reduce<A, L, F, Fut, E>(init: A, list: L, mut reducer: F) -> Option<A>
where
    A: Clone,
    L: Positional,
    F: FnMut(A, L::Item) -> Fut,
    Fut: Future<Output = Result<A, E>>,
{
    let value = RefCell::new(None);
    let flow = each(list, |item, _| {
        let step = reducer(init.clone(), item);
        let value = &value;
        async move {
            *value.borrow_mut() = step.await.ok();
            ControlFlow::<Infallible>::Continue(())
        }
    })
    .await;
    match flow {
        ControlFlow::Continue(()) => {}
        ControlFlow::Break(never) => match never {},
    }
    value.into_inner()
}

/// An alias for [`reduce`].
pub async fn fold_left<A, L, F, Fut, E>(init: A, list: L, reducer: F) -> Option<A>
where
    A: Clone,
    L: Positional,
    F: FnMut(A, L::Item) -> Fut,
    Fut: Future<Output = Result<A, E>>,
{
    reduce(init, list, reducer).await
}
