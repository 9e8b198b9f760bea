//! Access to the local repository during negotiation.

use crate::error::BoxError;

/// The local repository the fetch is performed for.
///
/// Negotiation only needs to know which objects already exist, which is answered by
/// [`gix_object::Exists`], so object database handles of `gix-odb` can be used directly.
pub trait Repository {
    /// Obtain the object database, or fail if it is unavailable.
    fn objects(&self) -> Result<&dyn gix_object::Exists, BoxError>;
}

/// A [`Repository`] over any object database implementing [`gix_object::Exists`].
#[derive(Debug, Clone)]
pub struct Objects<T>(pub T);

impl<T> Repository for Objects<T>
where
    T: gix_object::Exists,
{
    fn objects(&self) -> Result<&dyn gix_object::Exists, BoxError> {
        Ok(&self.0)
    }
}
