//! HTML form payloads and validation helpers.
//!
//! Client-side constraints declared here are advisory only; the remote API
//! is the validation authority. These checks just save a round-trip for the
//! obvious cases.

use std::collections::HashMap;

use validator::ValidationErrors;

pub mod customers;
pub mod hotels;
pub mod rooms;

/// Flattens validator output into one message per field, the same shape the
/// remote API uses for its 400 responses, so templates render both the same
/// way.
pub fn validation_messages(errors: &ValidationErrors) -> HashMap<String, String> {
    errors
        .field_errors()
        .iter()
        .map(|(field, field_errors)| {
            let message = field_errors
                .first()
                .and_then(|e| e.message.as_ref())
                .map(|m| m.to_string())
                .unwrap_or_else(|| "Valor inválido".to_string());
            (field.to_string(), message)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    use crate::forms::customers::AddCustomerForm;

    #[test]
    fn test_validation_messages_take_first_message_per_field() {
        let form = AddCustomerForm {
            first_name: String::new(),
            last_name: "Pérez".to_string(),
            nit: "123".to_string(),
            phone_number: "12345678".to_string(),
        };

        let errors = form.validate().unwrap_err();
        let messages = validation_messages(&errors);

        assert_eq!(
            messages.get("first_name").map(String::as_str),
            Some("El nombre es obligatorio")
        );
        assert_eq!(
            messages.get("nit").map(String::as_str),
            Some("El NIT debe tener 9 dígitos")
        );
        assert!(!messages.contains_key("last_name"));
    }
}
