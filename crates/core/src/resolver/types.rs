use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::provider::ImageId;

use super::ResolveError;

/// Field carrying the identifier list in a batch request body.
const IMAGE_IDS_FIELD: &str = "image_ids";

/// Successful single-image result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlateReading {
    pub plate_number: String,
}

/// Outcome for one entry of a batch request.
///
/// `image_id` echoes the caller's value verbatim, even when it is not an
/// integer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BatchItemResult {
    Plate { image_id: Value, plate_number: String },
    Error { image_id: Value, error: String },
}

impl BatchItemResult {
    pub fn plate(image_id: Value, plate_number: impl Into<String>) -> Self {
        BatchItemResult::Plate {
            image_id,
            plate_number: plate_number.into(),
        }
    }

    pub fn error(image_id: Value, error: impl Into<String>) -> Self {
        BatchItemResult::Error {
            image_id,
            error: error.into(),
        }
    }

    pub fn image_id(&self) -> &Value {
        match self {
            BatchItemResult::Plate { image_id, .. } | BatchItemResult::Error { image_id, .. } => {
                image_id
            }
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, BatchItemResult::Error { .. })
    }
}

/// A validated batch request envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchRequest {
    /// Raw entries in caller order; each one is validated independently.
    pub image_ids: Vec<Value>,
}

impl BatchRequest {
    /// Parse a JSON request body.
    pub fn from_slice(body: &[u8]) -> Result<Self, ResolveError> {
        let value: Value = serde_json::from_slice(body).map_err(|_| ResolveError::NotJson)?;
        Self::from_value(value)
    }

    /// Validate the envelope of an already decoded body.
    pub fn from_value(value: Value) -> Result<Self, ResolveError> {
        let Value::Object(mut fields) = value else {
            return Err(ResolveError::MissingField(IMAGE_IDS_FIELD));
        };

        match fields.remove(IMAGE_IDS_FIELD) {
            None => Err(ResolveError::MissingField(IMAGE_IDS_FIELD)),
            Some(Value::Array(image_ids)) => Ok(Self { image_ids }),
            Some(_) => Err(ResolveError::NotAList(IMAGE_IDS_FIELD)),
        }
    }
}

/// Interpret a batch entry as an image id.
///
/// Only JSON integers that fit an [`ImageId`] qualify; booleans, floats,
/// strings and containers do not.
pub fn batch_image_id(value: &Value) -> Option<ImageId> {
    match value {
        Value::Number(number) => number.as_i64(),
        _ => None,
    }
}

/// Interpret a query parameter as an image id.
pub fn query_image_id(raw: Option<&str>, field: &'static str) -> Result<ImageId, ResolveError> {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Err(ResolveError::MissingParameter(field)),
    };

    raw.trim()
        .parse::<ImageId>()
        .map_err(|_| ResolveError::InvalidParameter(field))
}
