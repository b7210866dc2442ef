//! Explicit request-body validation.

use validator::{Validate, ValidationErrors};

use stbarnabe_core::error::{AppError, FieldError};
use stbarnabe_core::result::AppResult;

/// Run the `validator` constraints of `body`, reporting each violation.
pub fn validate_body<T: Validate>(body: &T, object_name: &str) -> AppResult<()> {
    body.validate()
        .map_err(|errors| to_app_error(&errors, object_name))
}

fn to_app_error(errors: &ValidationErrors, object_name: &str) -> AppError {
    let mut field_errors: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, violations)| {
            violations.iter().map(move |violation| FieldError {
                object_name: object_name.to_string(),
                field: field.to_string(),
                message: violation.code.to_string(),
            })
        })
        .collect();
    field_errors.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.message.cmp(&b.message)));

    AppError::field_validation(format!("Invalid {object_name}"), field_errors)
}
