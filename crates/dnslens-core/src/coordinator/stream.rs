// ── Snapshot subscription streams ──
//
// Subscription handle for consuming snapshot replacements from a
// coordinator.

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_core::Stream;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

/// A subscription to one coordinator's snapshot.
///
/// Provides both point-in-time access and push notification via
/// `changed()`, or conversion to a `Stream` for combinator use.
pub struct SnapshotStream<T: Clone + Send + Sync + 'static> {
    current: Arc<T>,
    receiver: watch::Receiver<Arc<T>>,
}

impl<T: Clone + Send + Sync + 'static> SnapshotStream<T> {
    pub(crate) fn new(receiver: watch::Receiver<Arc<T>>) -> Self {
        let current = receiver.borrow().clone();
        Self { current, receiver }
    }

    /// The snapshot captured at the last notification (or creation).
    pub fn current(&self) -> &Arc<T> {
        &self.current
    }

    /// The latest published snapshot, which may be newer than
    /// [`current`](Self::current) if a notification is still pending.
    pub fn latest(&self) -> Arc<T> {
        self.receiver.borrow().clone()
    }

    /// Wait for the next replacement, returning the new snapshot.
    /// Returns `None` once the coordinator has been dropped.
    pub async fn changed(&mut self) -> Option<Arc<T>> {
        self.receiver.changed().await.ok()?;
        let snapshot = self.receiver.borrow_and_update().clone();
        self.current = snapshot.clone();
        Some(snapshot)
    }

    /// Convert into a `Stream` for use with `StreamExt` combinators.
    pub fn into_stream(self) -> SnapshotWatchStream<T> {
        SnapshotWatchStream {
            inner: WatchStream::new(self.receiver),
        }
    }
}

/// `Stream` adapter backed by a `watch::Receiver`.
///
/// Yields an `Arc<T>` each time the coordinator replaces its snapshot.
pub struct SnapshotWatchStream<T: Clone + Send + Sync + 'static> {
    inner: WatchStream<Arc<T>>,
}

impl<T: Clone + Send + Sync + 'static> Stream for SnapshotWatchStream<T> {
    type Item = Arc<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        // WatchStream is Unpin when the inner type is Unpin, and
        // Arc<T> always is.
        Pin::new(&mut self.inner).poll_next(cx)
    }
}
