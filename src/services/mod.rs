//! Thin service functions between routes and the api traits.
//!
//! This is the only layer that looks inside an [`ApiError::Http`] body: a
//! 400 whose body decodes to the validation-problem shape becomes
//! [`ServiceError::Validation`] with per-field messages. Everything else
//! passes through untouched for generic handling.

use std::collections::HashMap;

use thiserror::Error;

use crate::api::ApiError;
use crate::dto::problem::ValidationProblem;

pub mod customers;
pub mod hotels;
pub mod rooms;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The remote API rejected the payload; `fields` maps field names to
    /// human-readable messages for inline display.
    #[error("{detail}")]
    Validation {
        detail: String,
        fields: HashMap<String, String>,
    },

    #[error(transparent)]
    Api(#[from] ApiError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Classifies a mutation failure. Only an HTTP 400 with a decodable problem
/// body is treated as a validation failure. The API reports camelCase field
/// names; they are mapped to the snake_case names the forms use.
pub(crate) fn classify_mutation_error(err: ApiError) -> ServiceError {
    if let ApiError::Http { status: 400, body } = &err {
        if let Ok(problem) = serde_json::from_str::<ValidationProblem>(body) {
            if !problem.errors.is_empty() || problem.detail.is_some() {
                return ServiceError::Validation {
                    detail: problem
                        .detail
                        .unwrap_or_else(|| "Datos inválidos".to_string()),
                    fields: problem
                        .errors
                        .into_iter()
                        .map(|(field, message)| (to_snake_case(&field), message))
                        .collect(),
                };
            }
        }
    }
    ServiceError::Api(err)
}

fn to_snake_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len() + 2);
    for c in field.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_400_with_problem_body_becomes_validation() {
        let err = ApiError::Http {
            status: 400,
            body: r#"{"detail":"Datos inválidos","errors":{"nit":"NIT duplicado"}}"#.to_string(),
        };

        match classify_mutation_error(err) {
            ServiceError::Validation { detail, fields } => {
                assert_eq!(detail, "Datos inválidos");
                assert_eq!(fields.get("nit").map(String::as_str), Some("NIT duplicado"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_400_with_opaque_body_stays_api_error() {
        let err = ApiError::Http {
            status: 400,
            body: "not json".to_string(),
        };
        assert!(matches!(
            classify_mutation_error(err),
            ServiceError::Api(ApiError::Http { status: 400, .. })
        ));
    }

    #[test]
    fn test_500_is_never_validation() {
        let err = ApiError::Http {
            status: 500,
            body: r#"{"detail":"boom","errors":{"x":"y"}}"#.to_string(),
        };
        assert!(matches!(
            classify_mutation_error(err),
            ServiceError::Api(_)
        ));
    }

    #[test]
    fn test_timeout_passes_through() {
        assert!(matches!(
            classify_mutation_error(ApiError::Timeout),
            ServiceError::Api(ApiError::Timeout)
        ));
    }
}
