//! Employe entity model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use stbarnabe_core::traits::Persistable;

/// An employee of the parish.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Employe {
    /// Store-assigned identifier, absent before creation.
    #[serde(default)]
    pub id: Option<i64>,
    /// Family name.
    #[validate(length(min = 1, max = 100))]
    pub nom: String,
    /// Given name.
    #[validate(length(min = 1, max = 100))]
    pub prenom: String,
    /// Contact address.
    #[serde(default)]
    #[validate(email)]
    pub email: Option<String>,
    /// Hiring date.
    #[serde(default)]
    pub date_embauche: Option<NaiveDate>,
}

impl Persistable<i64> for Employe {
    const ENTITY_NAME: &'static str = "employe";

    const SORT_COLUMNS: &'static [(&'static str, &'static str)] = &[
        ("id", "id"),
        ("nom", "nom"),
        ("prenom", "prenom"),
        ("email", "email"),
        ("dateEmbauche", "date_embauche"),
    ];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn with_id(self, id: i64) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }
}
