//! Timers and cancellation that work both under tokio and in the browser.

use std::future::Future;
use std::time::Duration;

use futures::future::{AbortHandle, Abortable};

use crate::error::ClientError;

#[cfg(not(target_arch = "wasm32"))]
pub(crate) async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

#[cfg(target_arch = "wasm32")]
pub(crate) async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

/// Wrap `fut` so it can be aborted from outside.
///
/// The returned future yields [`ClientError::Cancelled`] once the handle is
/// aborted; UI components abort on unmount so late responses never reach
/// disposed state.
pub fn cancellable<F, T>(fut: F) -> (impl Future<Output = Result<T, ClientError>>, AbortHandle)
where
    F: Future<Output = Result<T, ClientError>>,
{
    let (handle, registration) = AbortHandle::new_pair();
    let wrapped = Abortable::new(fut, registration);
    (async move { wrapped.await? }, handle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_aborted_future_reports_cancelled() {
        let (fut, handle) = cancellable(async {
            sleep(Duration::from_secs(5)).await;
            Ok::<_, ClientError>(1)
        });
        handle.abort();
        assert!(matches!(fut.await, Err(ClientError::Cancelled)));
    }

    #[tokio::test]
    async fn test_completed_future_passes_through() {
        let (fut, _handle) = cancellable(async { Ok::<_, ClientError>(7) });
        assert!(matches!(fut.await, Ok(7)));
    }
}
