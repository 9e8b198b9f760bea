use std::collections::HashSet;

use bstr::BString;
use gix_hash::ObjectId;

use super::Fetch;
use crate::{
    refspec::{self, matching::first_matches, Operation, Refspec, RefspecParser},
    validate::ReferenceNameValidator,
    Advertisement, AutotagPolicy, Error, FetchOptions, Remote, Repository, Result, TransportOperation,
};

impl Fetch<'_> {
    /// Select the advertised references `remote` is interested in and mark those whose objects exist locally.
    ///
    /// Invalid reference names are skipped silently. Wanted references that are present locally
    /// are kept, so the negotiation can use them as evidence of what we have.
    /// References are listed before the object database is obtained, so if both are unavailable
    /// the listing error is the one reported.
    /// On error, the wants of `remote` are left empty.
    pub fn filter_wants(&mut self, remote: &mut Remote, repository: &dyn Repository, options: &FetchOptions) -> Result<()> {
        let _span = gix_trace::detail!("gix_fetch_negotiate::Fetch::filter_wants()");
        remote.reset_wants();
        let res = self.filter_wants_inner(remote, repository, options);
        if res.is_err() {
            remote.reset_wants();
        }
        res
    }

    fn filter_wants_inner(&mut self, remote: &mut Remote, repository: &dyn Repository, options: &FetchOptions) -> Result<()> {
        let tag_policy = remote.download_tags.resolve(options.download_tags);
        let tagspec = self.parser.parse(refspec::TAGS.into(), Operation::Fetch)?;

        let advertised = self
            .transport
            .list_references()
            .map_err(Error::transport(TransportOperation::List))?;
        if remote.active.is_empty() {
            synthesize_head(self.parser, remote, advertised)?;
        }
        gix_trace::trace!(
            active = ?remote.active.iter().map(Refspec::raw).collect::<Vec<_>>(),
            "active refspecs"
        );

        let objects = repository.objects().map_err(Error::StoreUnavailable)?;

        let matched = first_matches(&remote.active, advertised);
        let mut wants = Vec::new();
        let mut seen = HashSet::<(BString, ObjectId)>::new();
        for (head, spec_index) in advertised.iter_mut().zip(matched) {
            self.interrupt.check()?;
            let spec = spec_index.and_then(|index| remote.active.get(index));
            if !is_wanted(self.validator, &tagspec, tag_policy, head, spec) {
                continue;
            }
            head.local = objects.exists(&head.id);
            gix_trace::trace!(id = %head.id, name = %head.name, local = head.local, "wanted head");
            if seen.insert((head.name.clone(), head.id)) {
                wants.push(head.clone());
            }
        }

        remote.need_pack = wants.iter().any(|want| !want.local);
        remote.wants = wants;
        gix_trace::debug!(
            advertised = advertised.len(),
            wants = remote.wants.len(),
            need_pack = remote.need_pack,
            "filtered wants"
        );
        Ok(())
    }
}

/// Parse `HEAD`, expand it against `advertised` and make it the only active refspec of `remote`.
pub(super) fn synthesize_head(
    parser: &dyn RefspecParser,
    remote: &mut Remote,
    advertised: &[Advertisement],
) -> Result<()> {
    let head = parser.parse(refspec::HEAD.into(), Operation::Fetch)?;
    let head = parser.expand(&head, advertised)?;
    gix_trace::debug!(source = %head.source(), "no refspecs configured, fetching the remote's default");
    remote.active.push(head);
    Ok(())
}

/// `matched` is the first active refspec whose source matches `head`, if any.
fn is_wanted(
    validator: &dyn ReferenceNameValidator,
    tagspec: &Refspec,
    tag_policy: AutotagPolicy,
    head: &Advertisement,
    matched: Option<&Refspec>,
) -> bool {
    let name = head.name();
    if !validator.is_valid(name) {
        gix_trace::trace!(name = %name, "skipping invalid reference name");
        return false;
    }
    if tag_policy == AutotagPolicy::All && refspec::matches(tagspec, name) {
        return true;
    }
    gix_trace::trace!(
        name = %name,
        destination = ?matched.and_then(|spec| spec.transform(name)),
        "matched"
    );
    matched.is_some()
}
