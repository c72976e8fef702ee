//! Runtime abstraction layer for timers and async work
//!
//! The map logic only ever needs two things from an executor: run a callback
//! after a delay (with the option to call it off), and drive a future to
//! completion in the background. Both are expressed as object-safe traits so
//! the controller does not care which runtime sits underneath.

use crate::prelude::{Arc, Duration, Future, Pin};

/// A scheduled callback
pub type Callback = Box<dyn FnOnce() + Send + 'static>;

/// Something that can run a callback after a delay
pub trait Scheduler: Send + Sync + 'static {
    /// Schedule `callback` to run once `delay` has elapsed
    fn schedule(&self, delay: Duration, callback: Callback) -> TaskHandle;
}

/// Backend-specific part of a [`TaskHandle`]
pub trait AsyncHandle: Send + Sync {
    /// Check if the task is finished (ran or was cancelled)
    fn is_finished(&self) -> bool;

    /// Cancel the task. Cancelling a finished task is a no-op.
    fn cancel(&self);
}

/// Handle to a scheduled task.
///
/// Dropping the handle does not cancel the task; call [`TaskHandle::cancel`].
pub struct TaskHandle(Box<dyn AsyncHandle>);

impl TaskHandle {
    pub fn new(handle: Box<dyn AsyncHandle>) -> Self {
        Self(handle)
    }

    pub fn is_finished(&self) -> bool {
        self.0.is_finished()
    }

    pub fn cancel(&self) {
        self.0.cancel();
    }
}

impl std::fmt::Debug for TaskHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskHandle")
            .field("finished", &self.is_finished())
            .finish()
    }
}

/// Spawn a future on the default runtime
pub fn spawn<F>(future: F) -> TaskHandle
where
    F: Future<Output = ()> + Send + 'static,
{
    spawn_boxed(Box::pin(future))
}

fn spawn_boxed(future: Pin<Box<dyn Future<Output = ()> + Send + 'static>>) -> TaskHandle {
    #[cfg(feature = "tokio-runtime")]
    {
        spawners::tokio_impl::spawn(future)
    }

    #[cfg(not(feature = "tokio-runtime"))]
    {
        // Without a runtime the future is driven to completion in place
        futures::executor::block_on(future);
        TaskHandle::new(Box::new(spawners::Finished))
    }
}

/// Wait for `duration` without blocking the runtime
pub async fn delay(duration: Duration) {
    #[cfg(feature = "tokio-runtime")]
    {
        ::tokio::time::sleep(duration).await;
    }

    #[cfg(not(feature = "tokio-runtime"))]
    {
        std::thread::sleep(duration);
    }
}

/// The scheduler backed by the default runtime
pub fn default_scheduler() -> Arc<dyn Scheduler> {
    #[cfg(feature = "tokio-runtime")]
    {
        Arc::new(spawners::tokio_impl::TokioScheduler)
    }

    #[cfg(not(feature = "tokio-runtime"))]
    {
        Arc::new(spawners::ImmediateScheduler)
    }
}

/// Default scheduler implementations
pub mod spawners {
    use super::*;

    /// Runs every callback synchronously, ignoring the delay.
    ///
    /// Handy for scripted drivers and tests that do not care about timing;
    /// a debouncer on top of it emits every value.
    pub struct ImmediateScheduler;

    impl Scheduler for ImmediateScheduler {
        fn schedule(&self, _delay: Duration, callback: Callback) -> TaskHandle {
            callback();
            TaskHandle::new(Box::new(Finished))
        }
    }

    pub(crate) struct Finished;

    impl AsyncHandle for Finished {
        fn is_finished(&self) -> bool {
            true
        }

        fn cancel(&self) {}
    }

    #[cfg(feature = "tokio-runtime")]
    pub mod tokio_impl {
        use super::*;
        use ::tokio::task::JoinHandle;

        /// Tokio-based scheduler: each scheduled callback is a task that
        /// sleeps, then runs. Must be used from within a tokio runtime.
        pub struct TokioScheduler;

        impl Scheduler for TokioScheduler {
            fn schedule(&self, delay: Duration, callback: Callback) -> TaskHandle {
                spawn(Box::pin(async move {
                    ::tokio::time::sleep(delay).await;
                    callback();
                }))
            }
        }

        pub(crate) fn spawn(
            future: Pin<Box<dyn Future<Output = ()> + Send + 'static>>,
        ) -> TaskHandle {
            TaskHandle::new(Box::new(TokioHandle(::tokio::spawn(future))))
        }

        struct TokioHandle(JoinHandle<()>);

        impl AsyncHandle for TokioHandle {
            fn is_finished(&self) -> bool {
                self.0.is_finished()
            }

            fn cancel(&self) {
                self.0.abort();
            }
        }
    }
}
