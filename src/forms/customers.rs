use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::customer::{NewCustomer, UpdateCustomer};

#[derive(Clone, Debug, Default, Deserialize, Serialize, Validate)]
/// Form data for registering a new customer.
pub struct AddCustomerForm {
    #[validate(length(min = 1, message = "El nombre es obligatorio"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "El apellido es obligatorio"))]
    pub last_name: String,
    #[validate(length(equal = 9, message = "El NIT debe tener 9 dígitos"))]
    pub nit: String,
    #[validate(length(min = 1, message = "El teléfono es obligatorio"))]
    pub phone_number: String,
}

impl From<&AddCustomerForm> for NewCustomer {
    fn from(form: &AddCustomerForm) -> Self {
        NewCustomer::new(
            &form.first_name,
            &form.last_name,
            &form.nit,
            &form.phone_number,
        )
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, Validate)]
/// Form data for editing an existing customer. The id comes from the route
/// path, not the form body.
pub struct EditCustomerForm {
    #[validate(length(min = 1, message = "El nombre es obligatorio"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "El apellido es obligatorio"))]
    pub last_name: String,
    #[validate(length(equal = 9, message = "El NIT debe tener 9 dígitos"))]
    pub nit: String,
    #[validate(length(min = 1, message = "El teléfono es obligatorio"))]
    pub phone_number: String,
}

impl EditCustomerForm {
    pub fn into_update(&self, id: &str) -> UpdateCustomer {
        UpdateCustomer::new(
            id,
            &self.first_name,
            &self.last_name,
            &self.nit,
            &self.phone_number,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_form_trims_into_domain_payload() {
        let form = AddCustomerForm {
            first_name: "  Juan ".to_string(),
            last_name: "Pérez".to_string(),
            nit: "123456789".to_string(),
            phone_number: " 12345678 ".to_string(),
        };

        let new_customer = NewCustomer::from(&form);
        assert_eq!(new_customer.first_name, "Juan");
        assert_eq!(new_customer.phone_number, "12345678");
    }

    #[test]
    fn test_edit_form_carries_path_id() {
        let form = EditCustomerForm {
            first_name: "Juan".to_string(),
            last_name: "Pérez".to_string(),
            nit: "123456789".to_string(),
            phone_number: "12345678".to_string(),
        };

        let update = form.into_update("c-42");
        assert_eq!(update.id, "c-42");
        assert_eq!(update.last_name, "Pérez");
    }
}
