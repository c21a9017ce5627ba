//! Record model

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

/// Minimum name length, counted in UTF-16 code units
pub const NAME_MIN_LENGTH: usize = 3;

/// A single addressable entry of the resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Record {
    /// Identifier assigned on creation, never changed afterwards
    #[schema(example = 1)]
    pub id: i64,
    #[schema(example = "entry1")]
    pub name: String,
}

impl Record {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Create / replace record request
///
/// `name` is kept as raw JSON so a non-string value is reported as a
/// field error instead of failing body deserialization.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct RecordPayload {
    #[validate(required(message = "\"name\" is required"))]
    #[schema(value_type = Option<String>, min_length = 3, example = "newitem")]
    pub name: Option<Value>,
}

impl RecordPayload {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(Value::String(name.into())),
        }
    }

    /// Apply the name rule and return the accepted name
    pub fn validated_name(self) -> Result<String, ValidationErrors> {
        self.validate()?;

        let value = self.name.unwrap_or_default();
        let name = check_name(&value).map(str::to_string).map_err(|error| {
            let mut errors = ValidationErrors::new();
            errors.add("name", error);
            errors
        })?;
        Ok(name)
    }
}

fn name_error(code: &'static str, message: &'static str, value: &Value) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::from(message));
    error.add_param(Cow::from("value"), value);
    error
}

fn check_name(value: &Value) -> Result<&str, ValidationError> {
    let name = value
        .as_str()
        .ok_or_else(|| name_error("string.base", "\"name\" must be a string", value))?;

    if name.is_empty() {
        return Err(name_error(
            "string.empty",
            "\"name\" is not allowed to be empty",
            value,
        ));
    }

    if name.encode_utf16().count() < NAME_MIN_LENGTH {
        let mut error = name_error(
            "string.min",
            "\"name\" length must be at least 3 characters long",
            value,
        );
        error.add_param(Cow::from("limit"), &NAME_MIN_LENGTH);
        return Err(error);
    }

    Ok(name)
}

/// The five records every fresh store starts with
pub fn seed_records() -> Vec<Record> {
    (1..=5).map(|id| Record::new(id, format!("entry{}", id))).collect()
}
