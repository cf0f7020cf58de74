use std::future::Future;
use std::ops::ControlFlow;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::future::FusedFuture;
use futures_core::ready;
use pin_project_lite::pin_project;

use super::Queue;

pin_project! {
    /// Drains a queue from the front, one element at a time.
    ///
    /// This `struct` is created by the [`dequeue`] function. See its
    /// documentation for more.
    ///
    /// [`dequeue`]: crate::iter::dequeue
    #[must_use = "futures do nothing unless polled or .awaited"]
    pub struct Dequeue<Q, F, Fut> {
        queue: Q,
        op: F,
        #[pin]
        step: Option<Fut>,
        drained: usize,
        completed: bool,
    }
}

impl<Q, F, Fut> Dequeue<Q, F, Fut> {
    pub(super) fn new(queue: Q, op: F) -> Self {
        Self {
            queue,
            op,
            step: None,
            drained: 0,
            completed: false,
        }
    }
}

impl<Q, F, Fut, S> Future for Dequeue<Q, F, Fut>
where
    Q: Queue,
    F: FnMut(Q::Item) -> Fut,
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
                    tracing::trace!(drained = *this.drained, "drain stopped early");
                    *this.completed = true;
                    return Poll::Ready(ControlFlow::Break(stop));
                }
            }

            // Pop before handing the item out so the operation can push onto
            // the same queue.
            match this.queue.pop_front() {
                Some(item) => {
                    *this.drained += 1;
                    this.step.set(Some((this.op)(item)));
                }
                None => {
                    tracing::trace!(drained = *this.drained, "queue drained");
                    *this.completed = true;
                    return Poll::Ready(ControlFlow::Continue(()));
                }
            }
        }
    }
}

impl<Q, F, Fut, S> FusedFuture for Dequeue<Q, F, Fut>
where
    Q: Queue,
    F: FnMut(Q::Item) -> Fut,
    Fut: Future<Output = ControlFlow<S>>,
{
    fn is_terminated(&self) -> bool {
        self.completed
    }
}
