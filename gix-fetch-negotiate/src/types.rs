//! Common types used throughout fetch negotiation

use bstr::{BStr, BString};
use gix_hash::ObjectId;

/// A reference as advertised by the remote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advertisement {
    /// The full reference name, like `refs/heads/main` or `HEAD`.
    pub name: BString,
    /// The object the reference points to on the remote.
    pub id: ObjectId,
    /// `true` once the object was found in the local object database.
    pub local: bool,
}

impl Advertisement {
    /// Create an advertisement which is not yet known to be local.
    pub fn new(name: impl Into<BString>, id: ObjectId) -> Self {
        Self {
            name: name.into(),
            id,
            local: false,
        }
    }

    /// The reference name as byte string.
    pub fn name(&self) -> &BStr {
        self.name.as_ref()
    }
}

/// Controls whether tags are fetched in addition to what refspecs select.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AutotagPolicy {
    /// Use the remote's stored default.
    #[default]
    Unspecified,
    /// Never fetch tags beyond those matched by refspecs.
    None,
    /// Fetch tags pointing into history that is fetched anyway.
    Automatic,
    /// Fetch every tag the remote advertises.
    All,
}

impl AutotagPolicy {
    /// Return `overridden` unless it is [`Unspecified`](AutotagPolicy::Unspecified), otherwise `self`.
    pub fn resolve(self, overridden: AutotagPolicy) -> AutotagPolicy {
        match overridden {
            AutotagPolicy::Unspecified => self,
            other => other,
        }
    }
}

/// Per-call fetch configuration.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    /// Overrides the remote's autotag policy for this call only.
    pub download_tags: AutotagPolicy,
}

impl FetchOptions {
    /// Set the autotag override.
    pub fn with_download_tags(mut self, policy: AutotagPolicy) -> Self {
        self.download_tags = policy;
        self
    }
}

/// Counters maintained by the transport while a pack is streamed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TransferStats {
    /// Objects in the pack as announced by its header.
    pub total_objects: usize,
    /// Objects indexed so far.
    pub indexed_objects: usize,
    /// Objects received so far.
    pub received_objects: usize,
    /// Objects injected from the local database to complete a thin pack.
    pub local_objects: usize,
    /// Deltas in the pack.
    pub total_deltas: usize,
    /// Deltas resolved so far.
    pub indexed_deltas: usize,
    /// Bytes received so far.
    pub received_bytes: u64,
}

/// The direction of a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Receive objects from the remote.
    Fetch,
    /// Send objects to the remote.
    Push,
}

impl Direction {
    /// The service to invoke on the remote side for this direction.
    pub fn service(self) -> gix_transport::Service {
        match self {
            Direction::Fetch => gix_transport::Service::UploadPack,
            Direction::Push => gix_transport::Service::ReceivePack,
        }
    }
}

/// Credentials a transport may use to authenticate.
#[derive(Clone, PartialEq, Eq)]
pub struct Account {
    /// The user name.
    pub username: String,
    /// The password or token.
    pub password: String,
}

impl std::fmt::Debug for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Account")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
