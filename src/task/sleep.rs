use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::{Duration, Instant};

use async_io::Timer;
use pin_project_lite::pin_project;

/// Sleeps for the specified amount of time.
///
/// The timer is driven by `async-io`, so the returned future works with any
/// executor, including [`block_on`].
///
/// [`block_on`]: crate::runtime::block_on
pub fn sleep(dur: Duration) -> Sleep {
    Sleep {
        timer: Timer::after(dur),
        completed: false,
    }
}

pin_project! {
    /// Sleeps for the specified amount of time.
    ///
    /// This `struct` is created by the [`sleep`] function. See its
    /// documentation for more.
    #[must_use = "futures do nothing unless polled or .awaited"]
    pub struct Sleep {
        #[pin]
        timer: Timer,
        completed: bool,
    }
}

impl Future for Sleep {
    type Output = Instant;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        assert!(!self.completed, "future polled after completing");
        let this = self.project();
        match this.timer.poll(cx) {
            Poll::Ready(instant) => {
                *this.completed = true;
                Poll::Ready(instant)
            }
            Poll::Pending => Poll::Pending,
        }
    }
}
