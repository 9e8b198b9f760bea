//! Matching reference names against the active refspecs of a remote.

use bstr::BStr;
use gix_refspec::{match_group::Item, MatchGroup};

use super::Refspec;
use crate::{Advertisement, Remote};

/// Return `true` if `name` satisfies the source pattern of `spec`.
pub fn matches(spec: &Refspec, name: &BStr) -> bool {
    spec.source_matches(name)
}

/// Return the first active refspec of `remote` whose source matches `name`.
pub fn matching_refspec<'r>(remote: &'r Remote, name: &BStr) -> Option<&'r Refspec> {
    let specs = remote.active_refspecs();
    let first = MatchGroup::from_fetch_specs(specs.iter().map(Refspec::as_gix))
        .match_lhs(std::iter::once(Item {
            full_ref_name: name,
            target: gix_hash::Kind::Sha1.null_ref(),
            object: None,
        }))
        .mappings
        .iter()
        .filter(|mapping| mapping.item_index.is_some())
        .map(|mapping| mapping.spec_index)
        .min();
    first.and_then(|index| specs.get(index))
}

/// Return `true` if any active refspec of `remote` matches `name`.
pub fn matches_any_active(remote: &Remote, name: &BStr) -> bool {
    matching_refspec(remote, name).is_some()
}

/// For each of `advertised`, the index of the first spec in `specs` matching its name, in one pass.
pub(crate) fn first_matches(specs: &[Refspec], advertised: &[Advertisement]) -> Vec<Option<usize>> {
    let mut out = vec![None; advertised.len()];
    let items = advertised.iter().map(|head| Item {
        full_ref_name: head.name(),
        target: &head.id,
        object: None,
    });
    for mapping in MatchGroup::from_fetch_specs(specs.iter().map(Refspec::as_gix))
        .match_lhs(items)
        .mappings
    {
        let Some(item_index) = mapping.item_index else { continue };
        if let Some(slot) = out.get_mut(item_index) {
            let first = slot.get_or_insert(mapping.spec_index);
            *first = (*first).min(mapping.spec_index);
        }
    }
    out
}
