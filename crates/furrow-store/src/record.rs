//! Schemaless records as returned by the data store.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};

/// Field values of a record, keyed by column name.
pub type Fields = Map<String, Value>;

/// Name of the identifier column. It is never stored inside [`Record::fields`].
pub const ID_FIELD: &str = "id";

/// A stored row: a store-assigned id plus its fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: Uuid,
    #[serde(flatten)]
    pub fields: Fields,
}

impl Record {
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    #[must_use]
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    #[must_use]
    pub fn get_i64(&self, field: &str) -> Option<i64> {
        self.get(field).and_then(Value::as_i64)
    }

    #[must_use]
    pub fn get_bool(&self, field: &str) -> Option<bool> {
        self.get(field).and_then(Value::as_bool)
    }

    /// Reads a UUID stored as its hyphenated string form.
    #[must_use]
    pub fn get_uuid(&self, field: &str) -> Option<Uuid> {
        self.get_str(field).and_then(|raw| Uuid::parse_str(raw).ok())
    }

    /// Reads a calendar date stored as `YYYY-MM-DD`.
    #[must_use]
    pub fn get_date(&self, field: &str) -> Option<NaiveDate> {
        self.get_str(field)
            .and_then(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())
    }

    /// ## Summary
    /// Deserializes the record, id included, into a typed model.
    ///
    /// ## Errors
    /// Returns `StoreError::Serialization` if the fields do not match `T`.
    pub fn into_model<T: DeserializeOwned>(self) -> StoreResult<T> {
        let mut object = self.fields;
        object.insert(ID_FIELD.to_string(), Value::String(self.id.to_string()));
        Ok(serde_json::from_value(Value::Object(object))?)
    }
}

/// ## Summary
/// Serializes a value into record fields.
///
/// An `id` key produced by the value is dropped since ids are assigned by the store.
///
/// ## Errors
/// Returns `StoreError::InvalidRecord` if `value` does not serialize to a JSON object.
pub fn to_fields<T: Serialize>(value: &T) -> StoreResult<Fields> {
    match serde_json::to_value(value)? {
        Value::Object(mut fields) => {
            fields.remove(ID_FIELD);
            Ok(fields)
        }
        other => Err(StoreError::InvalidRecord(format!(
            "expected an object, got {other}"
        ))),
    }
}
