use std::future::Future;
use std::ops::ControlFlow;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::future::FusedFuture;
use futures_core::ready;
use pin_project_lite::pin_project;

use super::Positional;

pin_project! {
    /// Visits every element of a collection, one at a time.
    ///
    /// This `struct` is created by the [`each`] function. See its
    /// documentation for more.
    ///
    /// [`each`]: crate::iter::each
    #[must_use = "futures do nothing unless polled or .awaited"]
    pub struct Each<L, F, Fut> {
        list: L,
        op: F,
        #[pin]
        step: Option<Fut>,
        cursor: Option<usize>,
        completed: bool,
    }
}

impl<L, F, Fut> Each<L, F, Fut> {
    pub(super) fn new(list: L, op: F) -> Self {
        Self {
            list,
            op,
            step: None,
            cursor: None,
            completed: false,
        }
    }
}

impl<L, F, Fut, S> Future for Each<L, F, Fut>
where
    L: Positional,
    F: FnMut(L::Item, usize) -> Fut,
    Fut: Future<Output = ControlFlow<S>>,
{
    type Output = ControlFlow<S>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();
        assert!(!*this.completed, "future polled after completing");
        loop {
            if let Some(step) = this.step.as_mut().as_pin_mut() {
                let flow = ready!(step.poll(cx));
                this.step.set(None);
                if let ControlFlow::Break(stop) = flow {
                    tracing::trace!(index = ?this.cursor, "traversal stopped early");
                    *this.completed = true;
                    return Poll::Ready(ControlFlow::Break(stop));
                }
            }

            // The length is looked up on every step: the operation may have
            // changed the collection.
            let index = this.cursor.map_or(0, |cursor| cursor + 1);
            *this.cursor = Some(index);
            match this.list.at(index) {
                Some(item) => this.step.set(Some((this.op)(item, index))),
                None => {
                    tracing::trace!(visited = index, "traversal finished");
                    *this.completed = true;
                    return Poll::Ready(ControlFlow::Continue(()));
                }
            }
        }
    }
}

impl<L, F, Fut, S> FusedFuture for Each<L, F, Fut>
where
    L: Positional,
    F: FnMut(L::Item, usize) -> Fut,
    Fut: Future<Output = ControlFlow<S>>,
{
    fn is_terminated(&self) -> bool {
        self.completed
    }
}
