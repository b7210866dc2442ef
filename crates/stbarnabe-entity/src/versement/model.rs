//! Versement entity model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use stbarnabe_core::traits::Persistable;

/// A monetary payment record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Versement {
    /// Store-assigned identifier, absent before creation.
    #[serde(default)]
    pub id: Option<i64>,
    /// Amount paid.
    #[validate(range(min = 0.0))]
    pub montant: f64,
    /// Date of the payment.
    pub date_versement: NaiveDate,
    /// Free-text label.
    #[serde(default)]
    #[validate(length(max = 255))]
    pub libelle: Option<String>,
    /// Employee receiving the payment.
    #[serde(default)]
    pub employe_id: Option<i64>,
}

impl Persistable<i64> for Versement {
    const ENTITY_NAME: &'static str = "versement";

    const SORT_COLUMNS: &'static [(&'static str, &'static str)] = &[
        ("id", "id"),
        ("montant", "montant"),
        ("dateVersement", "date_versement"),
        ("libelle", "libelle"),
        ("employeId", "employe_id"),
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
