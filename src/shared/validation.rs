//! Validation Utilities

use validator::ValidationErrors;

use super::error::{AppError, FieldError};

/// Convert validation errors to AppError
///
/// Flattens the whole error tree so nested entries (each guest in a
/// submission) surface their own field messages.
pub fn validation_error(errors: ValidationErrors) -> AppError {
    let field_errors = collect_field_errors("", &errors);
    AppError::Validation(field_errors)
}

fn collect_field_errors(prefix: &str, errors: &ValidationErrors) -> Vec<FieldError> {
    use validator::ValidationErrorsKind;

    let mut out = Vec::new();
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };
        match kind {
            ValidationErrorsKind::Field(errs) => {
                out.extend(errs.iter().map(|e| FieldError {
                    field: path.clone(),
                    message: e.message.clone().map(|m| m.to_string()).unwrap_or_default(),
                }));
            }
            ValidationErrorsKind::Struct(nested) => {
                out.extend(collect_field_errors(&path, nested));
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    let item_path = format!("{}[{}]", path, index);
                    out.extend(collect_field_errors(&item_path, nested));
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(email(message = "Invalid email format"))]
        email: String,
    }

    #[test]
    fn collects_field_messages() {
        let probe = Probe {
            email: "not-an-email".into(),
        };
        let err = validation_error(probe.validate().unwrap_err());
        match err {
            AppError::Validation(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "email");
                assert_eq!(errors[0].message, "Invalid email format");
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
