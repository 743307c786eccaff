//! Envelope validation for upstream response bodies.

use crate::error::{ApiClientError, Result};
use crate::types::{Envelope, Resource};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Pull the payload of `resource` out of a decoded response body.
///
/// A body without the envelope field is `MalformedResponse`. A present field
/// whose records do not fit `T` is `Parse`.
pub fn extract<T: DeserializeOwned>(
    mut body: Value,
    resource: Resource,
    envelope: Envelope,
) -> Result<T> {
    let field = resource.field(envelope);

    let payload = body
        .as_object_mut()
        .and_then(|object| object.remove(field))
        .filter(|value| !value.is_null())
        .ok_or(ApiClientError::MalformedResponse {
            resource: resource.name(),
            field,
        })?;

    serde_json::from_value(payload).map_err(|e| {
        ApiClientError::Parse(format!("Failed to parse {}: {}", resource.name(), e))
    })
}
