use std::collections::HashMap;

use serde::Deserialize;

/// Body the remote API returns with HTTP 400 when a mutation fails
/// validation: a human-readable summary plus one message per offending
/// field.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ValidationProblem {
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub errors: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_parses_detail_and_errors() {
        let body = r#"{"detail":"Datos inválidos","errors":{"nit":"El NIT ya está registrado"}}"#;
        let problem: ValidationProblem = serde_json::from_str(body).unwrap();
        assert_eq!(problem.detail.as_deref(), Some("Datos inválidos"));
        assert_eq!(
            problem.errors.get("nit").map(String::as_str),
            Some("El NIT ya está registrado")
        );
    }

    #[test]
    fn test_problem_tolerates_missing_fields() {
        let problem: ValidationProblem = serde_json::from_str("{}").unwrap();
        assert!(problem.detail.is_none());
        assert!(problem.errors.is_empty());
    }
}
