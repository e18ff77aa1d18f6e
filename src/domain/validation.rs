//! Payload validation shared by the input entities.
//!
//! Request payloads arrive as raw JSON so the service can distinguish a
//! missing property from one with the wrong runtime type. Every input
//! entity funnels its fields through [`required_string`].

use serde_json::Value;
use thiserror::Error;

/// Validation failures raised while constructing an input entity.
///
/// The `entity` name is baked into the message so handlers can return it
/// verbatim ("cannot create a new thread because ...").
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required property is absent, `null`, or an empty string.
    #[error("cannot create a new {entity} because a required property is missing")]
    MissingProperty { entity: &'static str },

    /// A property is present but is not a JSON string.
    #[error("cannot create a new {entity} because a property does not meet the data type specification")]
    WrongType { entity: &'static str },

    /// A string property exceeds its character limit.
    #[error("cannot create a new {entity} because the {field} exceeds the character limit")]
    CharacterLimit {
        entity: &'static str,
        field: &'static str,
    },

    /// A property contains characters outside its allowed set.
    #[error("cannot create a new {entity} because the {field} contains restricted characters")]
    RestrictedCharacter {
        entity: &'static str,
        field: &'static str,
    },
}

/// Extract a required string field from a JSON payload.
///
/// An absent, `null`, or empty-string field reports `MissingProperty`; a
/// non-string field reports `WrongType`; a string longer than `limit`
/// characters reports `CharacterLimit`. A string of exactly `limit`
/// characters is accepted.
pub(crate) fn required_string(
    payload: &Value,
    entity: &'static str,
    field: &'static str,
    limit: Option<usize>,
) -> Result<String, ValidationError> {
    let value = match payload.get(field) {
        None | Some(Value::Null) => return Err(ValidationError::MissingProperty { entity }),
        Some(value) => value,
    };

    let text = value
        .as_str()
        .ok_or(ValidationError::WrongType { entity })?;

    if text.is_empty() {
        return Err(ValidationError::MissingProperty { entity });
    }

    if let Some(limit) = limit {
        if text.chars().count() > limit {
            return Err(ValidationError::CharacterLimit { entity, field });
        }
    }

    Ok(text.to_string())
}
