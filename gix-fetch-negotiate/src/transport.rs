//! The boundary to the wire protocol.
//!
//! Implementations perform the actual I/O, and every method may block.
//! Nothing here is retried; errors are reported with the failing operation attached.

use crate::{error::BoxError, Account, Advertisement, Direction, Repository, TransferStats};

/// A progress callback receiving the current transfer counters.
///
/// Returning `false` asks the transport to abort the transfer.
pub type ProgressFn<'a> = dyn FnMut(&TransferStats) -> bool + 'a;

/// A connection to a remote, borrowed for the duration of a fetch.
pub trait Transport {
    /// Return `true` if [`connect()`](Transport::connect) succeeded and the connection is still open.
    fn is_connected(&self) -> bool;

    /// Open a connection in the given `direction`, authenticating with `credentials` if provided.
    fn connect(&mut self, direction: Direction, credentials: Option<&Account>) -> Result<(), BoxError>;

    /// Return the references advertised by the remote, in advertisement order.
    ///
    /// The slice belongs to the transport's advertisement buffer. Callers may update
    /// [`Advertisement::local`] in place.
    fn list_references(&mut self) -> Result<&mut [Advertisement], BoxError>;

    /// Perform the want/have exchange for `wants`, in order.
    ///
    /// Entries marked as [local](Advertisement::local) may be used as evidence of what we have.
    fn negotiate(&mut self, repository: &dyn Repository, wants: &[Advertisement]) -> Result<(), BoxError>;

    /// Receive the pack negotiated previously, updating `stats` as data arrives and
    /// calling `progress` with them if provided.
    fn download_pack(
        &mut self,
        repository: &dyn Repository,
        stats: &mut TransferStats,
        progress: Option<&mut ProgressFn<'_>>,
    ) -> Result<(), BoxError>;
}
