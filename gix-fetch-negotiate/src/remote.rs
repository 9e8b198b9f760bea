use bstr::{BStr, BString};

use crate::{refspec::Refspec, Advertisement, AutotagPolicy, TransferStats};

/// The state of a remote across the phases of a single fetch.
///
/// A remote is not meant to be shared between concurrent fetches; all operations take it by `&mut`.
#[derive(Debug, Clone)]
pub struct Remote {
    pub(crate) name: Option<BString>,
    pub(crate) configured: Vec<Refspec>,
    pub(crate) active: Vec<Refspec>,
    pub(crate) download_tags: AutotagPolicy,
    pub(crate) wants: Vec<Advertisement>,
    pub(crate) need_pack: bool,
    pub(crate) stats: TransferStats,
}

impl Default for Remote {
    fn default() -> Self {
        Remote {
            name: None,
            configured: Vec::new(),
            active: Vec::new(),
            download_tags: AutotagPolicy::Automatic,
            wants: Vec::new(),
            need_pack: false,
            stats: TransferStats::default(),
        }
    }
}

impl Remote {
    /// Create an anonymous remote without refspecs that downloads tags automatically.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a remote known under `name`.
    pub fn named(name: impl Into<BString>) -> Self {
        Remote {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Add a configured fetch refspec, which also becomes active.
    pub fn with_fetch_refspec(mut self, spec: Refspec) -> Self {
        self.configured.push(spec.clone());
        self.active.push(spec);
        self
    }

    /// Set the autotag policy used when a fetch doesn't override it.
    pub fn with_download_tags(mut self, policy: AutotagPolicy) -> Self {
        self.download_tags = policy;
        self
    }

    /// The name of the remote, if it has one.
    pub fn name(&self) -> Option<&BStr> {
        self.name.as_ref().map(AsRef::as_ref)
    }

    /// The refspecs as configured.
    pub fn fetch_refspecs(&self) -> &[Refspec] {
        &self.configured
    }

    /// The refspecs used for matching, which may include a synthesized `HEAD` refspec.
    pub fn active_refspecs(&self) -> &[Refspec] {
        &self.active
    }

    /// The stored autotag policy.
    pub fn download_tags(&self) -> AutotagPolicy {
        self.download_tags
    }

    /// The advertisements selected by the last successful want computation, in advertisement order.
    pub fn wants(&self) -> &[Advertisement] {
        &self.wants
    }

    /// Return `true` if at least one wanted object is missing locally and a pack has to be fetched.
    pub fn need_pack(&self) -> bool {
        self.need_pack
    }

    /// Counters of the last pack transfer.
    pub fn stats(&self) -> &TransferStats {
        &self.stats
    }

    /// Forget all active refspecs that aren't configured, so `HEAD` is synthesized anew on the next fetch.
    pub fn reset_active_refspecs(&mut self) {
        self.active = self.configured.clone();
    }

    pub(crate) fn reset_wants(&mut self) {
        self.wants.clear();
        self.need_pack = false;
    }
}
