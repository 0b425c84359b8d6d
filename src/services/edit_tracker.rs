use serde::{Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::error::{AppError, Result};
use crate::models::{Record, Shift};

/// Changed field values of one row, keyed by their serialized (camelCase) name.
pub type FieldMap = Map<String, Value>;

pub const DEFAULT_COMPARER: &str = "id";

fn to_fields<T: Serialize>(value: &T) -> Result<FieldMap> {
    match serde_json::to_value(value)? {
        Value::Object(fields) => Ok(fields),
        other => Err(AppError::invalid_record(format!(
            "expected an object, got {}",
            other
        ))),
    }
}

/// Fields present in both records whose values differ.
///
/// Values are compared as JSON, so nested values are compared structurally.
pub fn get_changed_fields<T: Serialize>(original: &T, edited: &T) -> Result<Vec<String>> {
    Ok(changed_values(original, edited)?.into_iter().map(|(k, _)| k).collect())
}

/// Like [`get_changed_fields`] but keeps the edited value of each changed field.
pub fn changed_values<T: Serialize>(original: &T, edited: &T) -> Result<FieldMap> {
    let original = to_fields(original)?;
    let edited = to_fields(edited)?;

    Ok(edited
        .into_iter()
        .filter(|(key, value)| original.get(key).is_some_and(|old| old != value))
        .collect())
}

/// Pending field-level edits for a set of rows.
///
/// A row appears in [`pending`](Self::pending) only while it differs from its
/// original; editing it back removes the entry.
#[derive(Debug, Clone)]
pub struct EditTracker<T: Record> {
    comparer: String,
    sticky_fields: Vec<String>,
    rows: Vec<(String, T)>,
    pending: BTreeMap<String, FieldMap>,
}

impl<T: Record> EditTracker<T> {
    pub fn new(rows: Vec<T>) -> Result<Self> {
        Self::with_comparer(rows, DEFAULT_COMPARER)
    }

    /// Tracks rows keyed by the value of `comparer` instead of `id`.
    pub fn with_comparer(rows: Vec<T>, comparer: impl Into<String>) -> Result<Self> {
        let comparer = comparer.into();
        let rows = rows
            .into_iter()
            .map(|row| row_key(&comparer, &row).map(|key| (key, row)))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            comparer,
            sticky_fields: Vec::new(),
            rows,
            pending: BTreeMap::new(),
        })
    }

    /// Copies `field` from the original row into every pending entry.
    /// Sticky fields never make a row dirty on their own.
    pub fn with_sticky_field(mut self, field: impl Into<String>) -> Self {
        self.sticky_fields.push(field.into());
        self
    }

    pub fn rows(&self) -> impl Iterator<Item = &T> {
        self.rows.iter().map(|(_, row)| row)
    }

    pub fn original(&self, key: &str) -> Option<&T> {
        self.rows.iter().find(|(k, _)| k == key).map(|(_, row)| row)
    }

    /// Reconciles the full edited value of a row against its original.
    /// Returns whether the row is dirty afterwards.
    pub fn record_edit(&mut self, edited: &T) -> Result<bool> {
        let key = row_key(&self.comparer, edited)?;
        let original = self
            .original(&key)
            .ok_or_else(|| AppError::UnknownRecord(key.clone()))?;
        let changed = changed_values(original, edited)?;
        let sticky = self.sticky_values(original)?;

        Ok(self.store(key, changed, sticky))
    }

    /// Applies raw field values from an edit event on top of the row's original
    /// and reconciles the result.
    pub fn record_field_edits(&mut self, key: &str, fields: FieldMap) -> Result<bool>
    where
        T: DeserializeOwned,
    {
        let original = self
            .original(key)
            .ok_or_else(|| AppError::UnknownRecord(key.to_string()))?;
        let mut merged = to_fields(original)?;
        merged.extend(fields);
        let edited: T = serde_json::from_value(Value::Object(merged))?;

        self.record_edit(&edited)
    }

    /// Re-seeds the tracker with edits from an earlier session. Entries for
    /// unknown rows and empty entries are dropped.
    pub fn restore(&mut self, previous: BTreeMap<String, FieldMap>) -> Result<()> {
        for (key, mut fields) in previous {
            let original = match self.original(&key) {
                Some(original) if !fields.is_empty() => original,
                _ => {
                    log::debug!("Dropping stale edit entry for row {}", key);
                    continue;
                }
            };
            fill_missing(&mut fields, self.sticky_values(original)?);
            self.pending.insert(key, fields);
        }
        Ok(())
    }

    pub fn is_dirty(&self, key: &str) -> bool {
        self.pending.contains_key(key)
    }

    pub fn is_field_updated(&self, key: &str, field: &str) -> bool {
        self.pending
            .get(key)
            .is_some_and(|fields| fields.contains_key(field))
    }

    pub fn has_changes(&self) -> bool {
        !self.pending.is_empty()
    }

    pub fn pending(&self) -> &BTreeMap<String, FieldMap> {
        &self.pending
    }

    /// The row as currently edited: original with its pending fields applied.
    pub fn edited_row(&self, key: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        let Some(original) = self.original(key) else {
            return Ok(None);
        };
        let mut fields = to_fields(original)?;
        if let Some(pending) = self.pending.get(key) {
            fields.extend(pending.clone());
        }
        Ok(Some(serde_json::from_value(Value::Object(fields))?))
    }

    /// One typed partial update per dirty row, carrying the row's `id`.
    pub fn patches(&self) -> Result<Vec<T::Patch>> {
        self.pending
            .iter()
            .filter_map(|(key, fields)| self.original(key).map(|row| (row, fields)))
            .map(|(row, fields)| {
                let mut patch = fields.clone();
                patch.insert("id".to_string(), Value::String(row.id().to_string()));
                serde_json::from_value::<T::Patch>(Value::Object(patch)).map_err(AppError::from)
            })
            .collect()
    }

    fn sticky_values(&self, original: &T) -> Result<FieldMap> {
        if self.sticky_fields.is_empty() {
            return Ok(FieldMap::new());
        }
        let fields = to_fields(original)?;
        Ok(self
            .sticky_fields
            .iter()
            .filter_map(|name| fields.get(name).map(|v| (name.clone(), v.clone())))
            .collect())
    }

    fn store(&mut self, key: String, mut changed: FieldMap, sticky: FieldMap) -> bool {
        if changed.is_empty() {
            if self.pending.remove(&key).is_some() {
                log::debug!("Row {} is back to its original value", key);
            }
            return false;
        }
        fill_missing(&mut changed, sticky);
        log::debug!(
            "Row {} has pending changes: {:?}",
            key,
            changed.keys().collect::<Vec<_>>()
        );
        self.pending.insert(key, changed);
        true
    }
}

impl EditTracker<Shift> {
    /// Shift edit forms don't carry the owner, so it is re-attached to every entry.
    pub fn for_shifts(shifts: Vec<Shift>) -> Result<Self> {
        Ok(Self::new(shifts)?.with_sticky_field("employeeId"))
    }
}

/// Adds sticky values the entry doesn't already carry; an edited value wins.
fn fill_missing(entry: &mut FieldMap, sticky: FieldMap) {
    for (name, value) in sticky {
        entry.entry(name).or_insert(value);
    }
}

fn row_key<T: Serialize>(comparer: &str, row: &T) -> Result<String> {
    match to_fields(row)?.get(comparer) {
        Some(Value::String(key)) => Ok(key.clone()),
        Some(Value::Number(key)) => Ok(key.to_string()),
        _ => Err(AppError::invalid_record(format!(
            "row has no usable `{}` field",
            comparer
        ))),
    }
}
