//! Caller-supplied callbacks observing a pack transfer.

use gix_features::progress::Count;

use crate::{transport::ProgressFn, TransferStats};

/// Callbacks invoked while talking to a remote.
#[derive(Default)]
pub struct RemoteCallbacks<'a> {
    transfer_progress: Option<Box<ProgressFn<'a>>>,
}

impl<'a> RemoteCallbacks<'a> {
    /// Create callbacks that observe nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Call `progress` with the transfer counters whenever they change.
    ///
    /// Returning `false` from `progress` asks the transport to abort.
    pub fn with_transfer_progress(mut self, progress: impl FnMut(&TransferStats) -> bool + 'a) -> Self {
        self.transfer_progress = Some(Box::new(progress));
        self
    }

    /// Mirror the number of received objects into `progress`.
    pub fn with_count(self, progress: &'a dyn Count) -> Self {
        self.with_transfer_progress(move |stats| {
            progress.set(stats.received_objects);
            true
        })
    }

    /// Return `true` if a transfer progress callback is set.
    pub fn has_transfer_progress(&self) -> bool {
        self.transfer_progress.is_some()
    }

    pub(crate) fn transfer_progress(&mut self) -> Option<&mut ProgressFn<'a>> {
        self.transfer_progress.as_deref_mut()
    }
}

impl std::fmt::Debug for RemoteCallbacks<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteCallbacks")
            .field("transfer_progress", &self.transfer_progress.is_some())
            .finish()
    }
}
