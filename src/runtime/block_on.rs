use core::cell::Cell;
use core::future::Future;
use core::pin::pin;
use core::task::Waker;
use core::task::{Context, Poll};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::task::Wake;
use std::thread::{self, Thread};

thread_local! {
    static ENTERED: Cell<bool> = const { Cell::new(false) };
}

/// Run a future to completion on the current thread.
///
/// The thread is parked whenever the future is pending, until its waker is
/// called.
///
/// # Panics
///
/// Panics when called from within another `block_on` on the same thread.
///
/// # Example
///
/// ```
/// let answer = seriatim::runtime::block_on(async { 6 * 7 });
/// assert_eq!(answer, 42);
/// ```
pub fn block_on<Fut>(fut: Fut) -> Fut::Output
where
    Fut: Future,
{
    if ENTERED.with(|entered| entered.replace(true)) {
        panic!("cannot seriatim::runtime::block_on inside an existing block_on!")
    }
    let _guard = Entered;

    // Pin the future so it can be polled
    let mut fut = pin!(fut);

    // Create a new context to be passed to the future.
    let waker_impl = Arc::new(ThreadWaker::new(thread::current()));
    let waker = Waker::from(Arc::clone(&waker_impl));
    let mut cx = Context::from_waker(&waker);

    // Either the future completes and we return, or we sleep until some
    // waker tells us to try again.
    loop {
        match fut.as_mut().poll(&mut cx) {
            Poll::Ready(res) => break res,
            Poll::Pending => waker_impl.park(),
        }
    }
}

/// Clears the reentrancy flag, also when the future panics.
struct Entered;

impl Drop for Entered {
    fn drop(&mut self) {
        ENTERED.with(|entered| entered.set(false));
    }
}

struct ThreadWaker {
    thread: Thread,
    awake: AtomicBool,
}

impl ThreadWaker {
    fn new(thread: Thread) -> Self {
        Self {
            thread,
            awake: AtomicBool::new(false),
        }
    }

    /// Blocks until woken, consuming the wakeup.
    fn park(&self) {
        while !self.awake.swap(false, Ordering::Acquire) {
            thread::park();
        }
    }
}

impl Wake for ThreadWaker {
    fn wake(self: Arc<Self>) {
        self.wake_by_ref();
    }

    fn wake_by_ref(self: &Arc<Self>) {
        self.awake.store(true, Ordering::Release);
        self.thread.unpark();
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::task::{sleep, yield_now};
    use std::time::Duration;

    #[test]
    fn drives_pending_futures() {
        let value = block_on(async {
            yield_now().await;
            yield_now().await;
            "meow"
        });
        assert_eq!(value, "meow");
    }

    #[test]
    fn wakes_from_the_timer_thread() {
        let value = block_on(async {
            sleep(Duration::from_millis(10)).await;
            "meow"
        });
        assert_eq!(value, "meow");
    }

    #[test]
    #[should_panic(expected = "inside an existing block_on")]
    fn nesting_panics() {
        block_on(async { block_on(async {}) });
    }

    #[test]
    fn can_be_entered_again_after_returning() {
        block_on(async {});
        block_on(async {});
    }
}
