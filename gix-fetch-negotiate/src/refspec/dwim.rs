use bstr::{BString, ByteSlice, ByteVec};

use super::{Operation, Refspec};
use crate::{Advertisement, Error, Result};

/// Resolve the source of `spec` to the first advertised full name it abbreviates
/// and qualify a shorthand destination below `refs/heads/` or `refs/tags/`.
///
/// Candidates are tried in the order of [`gix_refspec::RefSpecRef::expand_prefixes()`].
/// Sources that are already full names, or that abbreviate nothing advertised, are kept as they are.
pub(super) fn expand(spec: &Refspec, advertised: &[Advertisement]) -> Result<Refspec> {
    let mut source = spec.source.clone();
    if !source.starts_with_str("refs/") {
        let mut candidates = Vec::new();
        spec.as_gix().expand_prefixes(&mut candidates);
        if let Some(resolved) = candidates
            .into_iter()
            .find(|candidate| advertised.iter().any(|head| head.name == *candidate))
        {
            source = resolved;
        }
    }

    let destination = spec.destination.as_ref().map(|destination| {
        if destination.starts_with_str("refs/") {
            destination.clone()
        } else if source.starts_with_str("refs/tags/") {
            qualify("refs/tags/", destination)
        } else {
            qualify("refs/heads/", destination)
        }
    });

    if source == spec.source && destination == spec.destination {
        return Ok(spec.clone());
    }

    let mut text = BString::default();
    if spec.force {
        text.push_byte(b'+');
    }
    text.push_str(&source);
    if let Some(destination) = &destination {
        text.push_byte(b':');
        text.push_str(destination);
    }
    let parsed = gix_refspec::parse(text.as_bstr(), Operation::Fetch).map_err(|err| Error::InvalidRefspec {
        spec: text.clone(),
        source: err,
    })?;
    Refspec::from_ref(spec.raw.clone(), parsed)
}

fn qualify(prefix: &str, name: &[u8]) -> BString {
    let mut out = BString::from(prefix);
    out.push_str(name);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::refspec::parse;
    use gix_hash::ObjectId;

    fn ads(names: &[&str]) -> Vec<Advertisement> {
        names
            .iter()
            .map(|name| Advertisement::new(*name, ObjectId::null(gix_hash::Kind::Sha1)))
            .collect()
    }

    #[test]
    fn head_is_kept_when_advertised() {
        let spec = expand(&parse("HEAD").unwrap(), &ads(&["HEAD", "refs/heads/main"])).unwrap();
        assert_eq!(spec.source(), "HEAD");
        assert_eq!(spec.destination(), None);
    }

    #[test]
    fn head_is_kept_when_nothing_is_advertised() {
        let spec = expand(&parse("HEAD").unwrap(), &[]).unwrap();
        assert_eq!(spec.source(), "HEAD");
    }

    #[test]
    fn branch_shorthand_resolves_to_full_name() {
        let spec = expand(&parse("main:main").unwrap(), &ads(&["refs/heads/main"])).unwrap();
        assert_eq!(spec.source(), "refs/heads/main");
        assert_eq!(spec.destination(), Some("refs/heads/main".into()));
        assert_eq!(spec.raw(), "main:main", "the written form is kept");
        assert!(spec.source_matches("refs/heads/main".into()));
    }

    #[test]
    fn tags_take_precedence_over_branches() {
        let spec = expand(&parse("+v1:v1").unwrap(), &ads(&["refs/heads/v1", "refs/tags/v1"])).unwrap();
        assert_eq!(spec.source(), "refs/tags/v1");
        assert_eq!(spec.destination(), Some("refs/tags/v1".into()));
        assert!(spec.is_force_update());
    }

    #[test]
    fn remote_head_rule() {
        let spec = expand(&parse("origin").unwrap(), &ads(&["refs/remotes/origin/HEAD"])).unwrap();
        assert_eq!(spec.source(), "refs/remotes/origin/HEAD");
    }

    #[test]
    fn full_names_are_untouched() {
        let spec = expand(
            &parse("refs/heads/*:refs/remotes/origin/*").unwrap(),
            &ads(&["refs/heads/main"]),
        )
        .unwrap();
        assert_eq!(spec.source(), "refs/heads/*");
        assert_eq!(spec.destination(), Some("refs/remotes/origin/*".into()));
    }
}
