//! PostgreSQL repository implementations for all St-Barnabe entities.

pub mod employe;
pub mod versement;

pub use employe::EmployeRepository;
pub use versement::VersementRepository;

use stbarnabe_core::result::AppResult;
use stbarnabe_core::traits::Persistable;
use stbarnabe_core::types::SortField;

/// Build an `ORDER BY` clause from whitelisted sort properties.
///
/// The primary key always closes the clause so that paging is stable.
pub(crate) fn order_by_clause<E: Persistable<i64>>(sort: &[SortField]) -> AppResult<String> {
    let mut parts = Vec::with_capacity(sort.len() + 1);
    let mut has_id = false;

    for field in sort {
        let column = E::sort_column(&field.field)?;
        has_id |= column == "id";
        parts.push(format!("{column} {}", field.direction.as_sql()));
    }
    if !has_id {
        parts.push("id ASC".to_string());
    }

    Ok(format!("ORDER BY {}", parts.join(", ")))
}
