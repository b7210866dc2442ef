//! Process-local repository used when `database.provider = "memory"`.
//!
//! Rows live in a [`DashMap`] keyed by identifier; identifiers come from an
//! atomic sequence starting at 1. Ordering mirrors PostgreSQL: sort
//! properties are compared on their JSON values, nulls sort last in
//! ascending order, and the identifier breaks ties.
//!
//! A nullable foreign key between two stores behaves like the
//! `REFERENCES … ON DELETE SET NULL` constraint of the SQL schema: writing
//! a dangling reference is a conflict, and deleting the target row clears
//! the references to it.

use std::cmp::Ordering;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicI64, Ordering as AtomicOrdering};
use std::sync::{Arc, RwLock, Weak};

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;

use stbarnabe_core::error::AppError;
use stbarnabe_core::result::AppResult;
use stbarnabe_core::traits::{Persistable, Repository};
use stbarnabe_core::types::{Page, PageRequest, SortDirection, SortField};

/// Existence check on the rows of a store.
pub trait KeyLookup: Send + Sync {
    /// Whether a row carries `id`.
    fn contains_key(&self, id: i64) -> bool;
}

/// A store whose rows may point at rows of another store.
pub trait ReferenceHolder: Send + Sync {
    /// Null out every reference to the deleted row `id`.
    fn clear_references(&self, id: i64);
}

/// Nullable reference from rows of `E` to another store.
pub struct ForeignKey<E> {
    column: &'static str,
    get: fn(&E) -> Option<i64>,
    clear: fn(&mut E),
    target: Arc<dyn KeyLookup>,
}

impl<E> ForeignKey<E> {
    /// Reference stored in `column`, read with `get` and nulled with `clear`.
    pub fn new(
        column: &'static str,
        get: fn(&E) -> Option<i64>,
        clear: fn(&mut E),
        target: Arc<dyn KeyLookup>,
    ) -> Self {
        Self {
            column,
            get,
            clear,
            target,
        }
    }
}

/// In-memory store for any entity keyed by `i64`.
pub struct InMemoryRepository<E> {
    rows: DashMap<i64, E>,
    sequence: AtomicI64,
    foreign_key: Option<ForeignKey<E>>,
    dependents: RwLock<Vec<Weak<dyn ReferenceHolder>>>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Persistable<i64>> InMemoryRepository<E> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            rows: DashMap::new(),
            sequence: AtomicI64::new(0),
            foreign_key: None,
            dependents: RwLock::new(Vec::new()),
            _entity: PhantomData,
        }
    }

    /// Enforce `foreign_key` on every insert and update.
    pub fn with_foreign_key(mut self, foreign_key: ForeignKey<E>) -> Self {
        self.foreign_key = Some(foreign_key);
        self
    }

    /// Register a store whose references to this one are cleared on delete.
    pub fn add_dependent(&self, dependent: Arc<dyn ReferenceHolder>) {
        let mut dependents = self
            .dependents
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        dependents.push(Arc::downgrade(&dependent));
    }

    fn next_id(&self) -> i64 {
        self.sequence.fetch_add(1, AtomicOrdering::SeqCst) + 1
    }

    fn check_references(&self, entity: &E) -> AppResult<()> {
        let Some(fk) = &self.foreign_key else {
            return Ok(());
        };
        match (fk.get)(entity) {
            Some(id) if !fk.target.contains_key(id) => Err(AppError::conflict(format!(
                "{}.{} references missing row {id}",
                E::ENTITY_NAME,
                fk.column
            ))),
            _ => Ok(()),
        }
    }

    fn cascade_delete(&self, id: i64) {
        let dependents = self
            .dependents
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        for dependent in dependents.iter().filter_map(Weak::upgrade) {
            dependent.clear_references(id);
        }
    }
}

impl<E: Persistable<i64>> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Persistable<i64>> KeyLookup for InMemoryRepository<E> {
    fn contains_key(&self, id: i64) -> bool {
        self.rows.contains_key(&id)
    }
}

impl<E: Persistable<i64>> ReferenceHolder for InMemoryRepository<E> {
    fn clear_references(&self, id: i64) {
        let Some(fk) = &self.foreign_key else {
            return;
        };
        for mut row in self.rows.iter_mut() {
            if (fk.get)(row.value()) == Some(id) {
                (fk.clear)(row.value_mut());
            }
        }
    }
}

#[async_trait]
impl<E: Persistable<i64>> Repository<E, i64> for InMemoryRepository<E> {
    async fn find_by_id(&self, id: &i64) -> AppResult<Option<E>> {
        Ok(self.rows.get(id).map(|row| row.value().clone()))
    }

    async fn find_all(&self, page: &PageRequest) -> AppResult<Page<E>> {
        for field in &page.sort {
            E::sort_column(&field.field)?;
        }

        let mut keyed = Vec::with_capacity(self.rows.len());
        for row in self.rows.iter() {
            let json = serde_json::to_value(row.value())?;
            keyed.push((*row.key(), json, row.value().clone()));
        }

        keyed.sort_by(|(a_id, a, _), (b_id, b, _)| {
            compare_rows(&page.sort, a, b).then_with(|| a_id.cmp(b_id))
        });

        let total = keyed.len() as u64;
        let content = keyed
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .map(|(_, _, entity)| entity)
            .collect();

        Ok(Page::new(content, page, total))
    }

    async fn insert(&self, entity: &E) -> AppResult<E> {
        self.check_references(entity)?;
        let stored = entity.clone().with_id(self.next_id());
        if let Some(id) = stored.id() {
            self.rows.insert(id, stored.clone());
        }
        Ok(stored)
    }

    async fn update(&self, entity: &E) -> AppResult<E> {
        let id = entity.id().ok_or_else(|| {
            AppError::validation(format!("Cannot update a {} without an id", E::ENTITY_NAME))
        })?;
        self.check_references(entity)?;

        match self.rows.get_mut(&id) {
            Some(mut row) => {
                *row = entity.clone();
                Ok(entity.clone())
            }
            None => Err(AppError::not_found(format!(
                "{} {id} not found",
                E::ENTITY_NAME
            ))),
        }
    }

    async fn delete_by_id(&self, id: &i64) -> AppResult<bool> {
        let removed = self.rows.remove(id).is_some();
        if removed {
            self.cascade_delete(*id);
        }
        Ok(removed)
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.rows.len() as u64)
    }
}

fn compare_rows(sort: &[SortField], a: &Value, b: &Value) -> Ordering {
    for field in sort {
        let ordering = compare_values(&a[&field.field], &b[&field.field]);
        let ordering = match field.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => Ordering::Greater,
        (_, Value::Null) => Ordering::Less,
        (Value::Number(x), Value::Number(y)) => {
            let x = x.as_f64().unwrap_or(0.0);
            let y = y.as_f64().unwrap_or(0.0);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        _ => a.to_string().cmp(&b.to_string()),
    }
}
