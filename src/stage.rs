//! Stage plumbing: one task per operator invocation

use std::future::Future;
use tokio::task::JoinHandle;

use crate::transport::{Outlet, Transport};

/// Spawn a stage on the current tokio runtime.
///
/// Panics when called outside a runtime, like `tokio::spawn`.
pub(crate) fn spawn_stage<F>(name: &'static str, body: F) -> JoinHandle<F::Output>
where
    F: Future + Send + 'static,
    F::Output: Send + 'static,
{
    log::trace!("stage {} started", name);
    tokio::spawn(async move {
        let output = body.await;
        log::trace!("stage {} finished", name);
        output
    })
}

/// Outcome of waiting on a stage's input
pub(crate) enum Pull<T> {
    Item(T),
    /// Input closed and drained
    Exhausted,
    /// Our own consumer went away
    Cancelled,
}

/// Receive the next input value unless the stage's consumer disappears first.
///
/// A stage that stops sending (a filter rejecting everything, say) would
/// otherwise never notice its consumer is gone.
pub(crate) async fn pull<T, U>(
    name: &'static str,
    input: &mut Transport<T>,
    output: &Outlet<U>,
) -> Pull<T> {
    tokio::select! {
        biased;
        _ = output.closed() => {
            log::debug!("stage {}: consumer gone, releasing input", name);
            Pull::Cancelled
        }
        item = input.recv() => match item {
            Some(item) => Pull::Item(item),
            None => Pull::Exhausted,
        },
    }
}
