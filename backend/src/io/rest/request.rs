//! Request body decoding.
//!
//! Both decoders produce plain [`FormValues`] so that create and update go
//! through the same rule sets.

use axum::{
    extract::{
        rejection::{FormRejection, PathRejection},
        Path,
    },
    Form,
};
use serde_json::Value;
use tracing::warn;

use crate::domain::validation::{FormValues, Violations};

const NOT_JSON_OBJECT: &str = "This value should be a JSON object.";

/// Values of a url-encoded form. An undecodable body counts as an empty form,
/// so every expected field is then reported as missing.
pub fn form_values(form: Result<Form<FormValues>, FormRejection>) -> FormValues {
    match form {
        Ok(Form(values)) => values,
        Err(rejection) => {
            warn!("Unreadable form body: {}", rejection);
            FormValues::new()
        }
    }
}

/// Numeric id from the path. Ids that are not integers match no record.
pub fn path_id(path: Result<Path<i64>, PathRejection>) -> Option<i64> {
    match path {
        Ok(Path(id)) => Some(id),
        Err(rejection) => {
            warn!("Unusable id in path: {}", rejection);
            None
        }
    }
}

/// Flatten a JSON object body into form values.
/// Strings are kept as is, `null` becomes blank, other values keep their JSON text.
pub fn json_form_values(body: &[u8]) -> Result<FormValues, Violations> {
    let not_object = || Violations::single("body", NOT_JSON_OBJECT);

    let parsed: Value = serde_json::from_slice(body).map_err(|_| not_object())?;
    let object = parsed.as_object().ok_or_else(not_object)?;

    Ok(object
        .iter()
        .map(|(key, value)| {
            let text = match value {
                Value::String(s) => s.clone(),
                Value::Null => String::new(),
                other => other.to_string(),
            };
            (key.clone(), text)
        })
        .collect())
}
