//! The phases of a fetch: selecting wants, negotiating, and downloading the pack.
//!
//! A [`Fetch`] borrows the transport and the pure collaborators for the duration of a session,
//! while all state that outlives a call is kept in the [`Remote`].

use crate::{
    interrupt::{CancellationFlag, NEVER},
    progress::RemoteCallbacks,
    refspec::{DefaultRefspecParser, RefspecParser},
    transport::Transport,
    validate::{GixNameValidator, ReferenceNameValidator},
    Error, FetchOptions, Remote, Repository, Result, TransferStats, TransportOperation,
};

mod list;
mod wants;

pub use list::ID_DELIMITER;

/// Drives the fetch phases for a remote over a borrowed transport.
pub struct Fetch<'a> {
    transport: &'a mut dyn Transport,
    parser: &'a dyn RefspecParser,
    validator: &'a dyn ReferenceNameValidator,
    interrupt: &'a CancellationFlag,
}

impl<'a> Fetch<'a> {
    /// Use `transport` with the default refspec parser and name validation, without cancellation.
    pub fn new(transport: &'a mut dyn Transport) -> Self {
        Fetch {
            transport,
            parser: &DefaultRefspecParser,
            validator: &GixNameValidator,
            interrupt: &NEVER,
        }
    }

    /// Parse and expand refspecs with `parser`.
    pub fn with_parser(mut self, parser: &'a dyn RefspecParser) -> Self {
        self.parser = parser;
        self
    }

    /// Decide which advertised names are well-formed with `validator`.
    pub fn with_validator(mut self, validator: &'a dyn ReferenceNameValidator) -> Self {
        self.validator = validator;
        self
    }

    /// Stop with [`Error::Cancelled`] once `flag` is cancelled.
    pub fn with_interrupt(mut self, flag: &'a CancellationFlag) -> Self {
        self.interrupt = flag;
        self
    }

    /// Compute the wants of `remote` and, if any object is missing locally, negotiate them with the remote.
    ///
    /// If everything is present already no exchange happens at all.
    pub fn negotiate(&mut self, remote: &mut Remote, repository: &dyn Repository, options: &FetchOptions) -> Result<()> {
        let _span = gix_trace::coarse!("gix_fetch_negotiate::Fetch::negotiate()");
        remote.need_pack = false;

        self.filter_wants(remote, repository, options)
            .map_err(|err| Error::FilterWants(Box::new(err)))?;

        if !remote.need_pack {
            gix_trace::debug!(wants = remote.wants.len(), "all wanted objects are present, skipping negotiation");
            return Ok(());
        }

        gix_trace::debug!(wants = remote.wants.len(), "negotiating");
        self.transport
            .negotiate(repository, &remote.wants)
            .map_err(Error::transport(TransportOperation::Negotiate))
    }

    /// Receive the pack negotiated by [`negotiate()`](Self::negotiate), if one is needed.
    ///
    /// `callbacks` may observe the transfer; the counters end up in [`Remote::stats()`].
    pub fn download_pack(
        &mut self,
        remote: &mut Remote,
        repository: &dyn Repository,
        callbacks: Option<&mut RemoteCallbacks<'_>>,
    ) -> Result<()> {
        let _span = gix_trace::coarse!("gix_fetch_negotiate::Fetch::download_pack()");
        if !remote.need_pack {
            gix_trace::debug!("no pack needed");
            return Ok(());
        }

        let progress = callbacks.and_then(|callbacks| callbacks.transfer_progress());
        remote.stats = TransferStats::default();
        self.transport
            .download_pack(repository, &mut remote.stats, progress)
            .map_err(Error::transport(TransportOperation::Download))?;

        gix_trace::debug!(
            objects = remote.stats.received_objects,
            bytes = remote.stats.received_bytes,
            "pack received"
        );
        Ok(())
    }
}
