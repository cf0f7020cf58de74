use std::cell::RefCell;
use std::convert::Infallible;
use std::future::Future;
use std::ops::ControlFlow;

use super::{each, Positional};

/// Transform every element of a collection, one at a time.
///
/// The `mapper` is called as `mapper(item, index)` and its future resolves
/// to a `Result`. Every `Ok` value is appended to the output, including
/// "empty" values such as `None` or `()`. An `Err` skips the item: it is
/// dropped, nothing is appended and the traversal carries on with the next
/// element. Errors never halt the traversal and are not reported to the
/// caller.
///
/// Resolves to the mapped values in input order.
///
/// # Example
///
/// ```
/// use seriatim::iter;
/// use seriatim::runtime::block_on;
///
/// let list = [1, 2, 3];
/// let doubled = block_on(iter::map(&list, |n, _| async move {
///     Ok::<_, ()>(n * 2)
/// }));
/// assert_eq!(doubled, [2, 4, 6]);
/// ```
pub async fn map<L, F, Fut, U, E>(list: L, mut mapper: F) -> Vec<U>
where
    L: Positional,
    F: FnMut(L::Item, usize) -> Fut,
    Fut: Future<Output = Result<U, E>>,
{
    let collected = RefCell::new(Vec::new());
    let flow = each(list, |item, index| {
        let mapping = mapper(item, index);
        let collected = &collected;
        async move {
            match mapping.await {
                Ok(value) => collected.borrow_mut().push(value),
                Err(_) => tracing::trace!(index, "mapper failed, skipping item"),
            }
            ControlFlow::<Infallible>::Continue(())
        }
    })
    .await;
    match flow {
        ControlFlow::Continue(()) => {}
        ControlFlow::Break(never) => match never {},
    }
    collected.into_inner()
}

/// An alias for [`map`].
pub async fn collect<L, F, Fut, U, E>(list: L, mapper: F) -> Vec<U>
where
    L: Positional,
    F: FnMut(L::Item, usize) -> Fut,
    Fut: Future<Output = Result<U, E>>,
{
    map(list, mapper).await
}
