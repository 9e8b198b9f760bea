//! Syntactic validation of advertised reference names.

use bstr::BStr;

/// A pure predicate telling whether a reference name is well-formed.
pub trait ReferenceNameValidator {
    /// Return `true` if `name` is a valid full reference name.
    fn is_valid(&self, name: &BStr) -> bool;
}

impl<F> ReferenceNameValidator for F
where
    F: Fn(&BStr) -> bool,
{
    fn is_valid(&self, name: &BStr) -> bool {
        self(name)
    }
}

/// Validation as performed by `gix-validate`, accepting full names like `refs/heads/main` and `HEAD`.
#[derive(Debug, Default, Clone, Copy)]
pub struct GixNameValidator;

impl ReferenceNameValidator for GixNameValidator {
    fn is_valid(&self, name: &BStr) -> bool {
        gix_validate::reference::name(name).is_ok()
    }
}
