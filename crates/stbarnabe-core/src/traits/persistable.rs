//! Entity-side half of the repository contract.

use serde::Serialize;

use crate::error::AppError;
use crate::result::AppResult;

/// A record the generic repositories know how to store.
///
/// `Id` is the identifier type. The identifier is absent before the
/// record is first stored and present (and immutable) afterwards.
pub trait Persistable<Id>: Clone + Serialize + Send + Sync + 'static {
    /// Lowercase entity token used in alerts and error bodies.
    const ENTITY_NAME: &'static str;

    /// Sortable JSON properties and the SQL columns backing them.
    const SORT_COLUMNS: &'static [(&'static str, &'static str)];

    /// The identifier, if the record has been stored.
    fn id(&self) -> Option<Id>;

    /// The same record carrying `id`.
    fn with_id(self, id: Id) -> Self;

    /// Resolve a JSON sort property into its SQL column.
    fn sort_column(property: &str) -> AppResult<&'static str> {
        Self::SORT_COLUMNS
            .iter()
            .find(|(name, _)| *name == property)
            .map(|(_, column)| *column)
            .ok_or_else(|| {
                AppError::validation(format!(
                    "Unknown sort property '{property}' for {}",
                    Self::ENTITY_NAME
                ))
            })
    }
}
