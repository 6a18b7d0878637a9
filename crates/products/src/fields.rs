use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use catalog_core::{DomainError, DomainResult};

/// Deserialize a field mapping into one of the variants' field structs.
pub(crate) fn read_fields<T: DeserializeOwned>(fields: &Map<String, Value>) -> DomainResult<T> {
    serde_json::from_value(Value::Object(fields.clone()))
        .map_err(|e| DomainError::validation(format!("malformed product data: {e}")))
}
