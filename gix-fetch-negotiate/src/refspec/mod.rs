//! Refspecs as used during fetch, their parsing and the "dwim" expansion of shorthand sources.
//!
//! Matching names and mapping them to their destination is done by [`gix_refspec::MatchGroup`].

use std::borrow::Cow;

use bstr::{BStr, BString};
use gix_refspec::{instruction::Fetch, match_group::Item, Instruction, MatchGroup, RefSpecRef};

use crate::{Advertisement, Error, Result};

mod dwim;
pub mod matching;

pub use gix_refspec::parse::Operation;
pub use matching::{matches, matches_any_active, matching_refspec};

/// The refspec selecting all tags.
pub const TAGS: &str = "refs/tags/*:refs/tags/*";

/// The source used when a remote has no refspecs at all.
pub const HEAD: &str = "HEAD";

/// A parsed fetch refspec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Refspec {
    raw: BString,
    spec: gix_refspec::RefSpec,
    source: BString,
    destination: Option<BString>,
    force: bool,
}

impl Refspec {
    fn from_ref(raw: BString, spec: RefSpecRef<'_>) -> Result<Self> {
        let (source, destination) = match spec.instruction() {
            Instruction::Fetch(Fetch::Only { src }) => (src, None),
            Instruction::Fetch(Fetch::AndUpdate { src, dst, .. }) => (src, Some(dst)),
            Instruction::Fetch(Fetch::Exclude { .. }) => {
                return Err(unsupported(raw, "negative refspecs are not supported"));
            }
            Instruction::Push(_) => return Err(unsupported(raw, "only fetch refspecs are supported")),
        };
        let source = source.to_owned();
        let destination = destination.map(ToOwned::to_owned);
        let spec = spec.to_owned();
        Ok(Refspec {
            force: spec.allow_non_fast_forward(),
            raw,
            spec,
            source,
            destination,
        })
    }

    /// The refspec as originally written.
    pub fn raw(&self) -> &BStr {
        self.raw.as_ref()
    }

    /// The pattern matched against remote reference names.
    pub fn source(&self) -> &BStr {
        self.source.as_ref()
    }

    /// Where matching references are stored locally, if anywhere.
    pub fn destination(&self) -> Option<&BStr> {
        self.destination.as_ref().map(AsRef::as_ref)
    }

    /// Whether non-fast-forward updates are allowed, i.e. the refspec started with `+`.
    pub fn is_force_update(&self) -> bool {
        self.force
    }

    /// Whether the source contains a `*` wildcard.
    pub fn is_pattern(&self) -> bool {
        self.source.contains(&b'*')
    }

    /// Return `true` if `name` matches the source pattern.
    ///
    /// Shorthand sources like `main` match the full names they abbreviate.
    pub fn source_matches(&self, name: &BStr) -> bool {
        self.map_name(name).is_some()
    }

    /// Return `true` if `name` matches the destination pattern.
    pub fn destination_matches(&self, name: &BStr) -> bool {
        MatchGroup::from_fetch_specs(Some(self.spec.to_ref()))
            .match_rhs(std::iter::once(name_item(name)))
            .mappings
            .iter()
            .any(|mapping| mapping.item_index.is_some())
    }

    /// Map the remote reference `name` to its local destination.
    ///
    /// Returns `None` if there is no destination or `name` does not match the source.
    pub fn transform(&self, name: &BStr) -> Option<BString> {
        self.map_name(name).flatten()
    }

    /// `None` if `name` doesn't match, otherwise the destination it maps to, if there is one.
    fn map_name(&self, name: &BStr) -> Option<Option<BString>> {
        MatchGroup::from_fetch_specs(Some(self.spec.to_ref()))
            .match_lhs(std::iter::once(name_item(name)))
            .mappings
            .into_iter()
            .find(|mapping| mapping.item_index.is_some())
            .map(|mapping| mapping.rhs.map(Cow::into_owned))
    }

    /// The parsed form, for matching many specs at once.
    pub(crate) fn as_gix(&self) -> RefSpecRef<'_> {
        self.spec.to_ref()
    }
}

/// An item to match by name only. Object-id sources never match it.
fn name_item(name: &BStr) -> Item<'_> {
    Item {
        full_ref_name: name,
        target: gix_hash::Kind::Sha1.null_ref(),
        object: None,
    }
}

fn unsupported(spec: BString, message: &str) -> Error {
    Error::UnsupportedRefspec {
        spec,
        message: message.into(),
    }
}

impl std::fmt::Display for Refspec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.raw, f)
    }
}

/// Turns refspec strings into [`Refspec`]s and expands shorthand sources against an advertisement.
pub trait RefspecParser {
    /// Parse `raw` for use in the given `operation`.
    fn parse(&self, raw: &BStr, operation: Operation) -> Result<Refspec>;

    /// Resolve a shorthand `spec`, like `main` or `HEAD`, against the names in `advertised`.
    fn expand(&self, spec: &Refspec, advertised: &[Advertisement]) -> Result<Refspec>;
}

/// The default parser, validating with `gix-refspec`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultRefspecParser;

impl RefspecParser for DefaultRefspecParser {
    fn parse(&self, raw: &BStr, operation: Operation) -> Result<Refspec> {
        let spec = gix_refspec::parse(raw, operation).map_err(|source| Error::InvalidRefspec {
            spec: raw.to_owned(),
            source,
        })?;
        Refspec::from_ref(raw.to_owned(), spec)
    }

    fn expand(&self, spec: &Refspec, advertised: &[Advertisement]) -> Result<Refspec> {
        dwim::expand(spec, advertised)
    }
}

/// Parse `raw` as fetch refspec with the default parser.
pub fn parse(raw: &str) -> Result<Refspec> {
    DefaultRefspecParser.parse(raw.into(), Operation::Fetch)
}
