use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::hotel::NewHotel;

#[derive(Clone, Debug, Default, Deserialize, Serialize, Validate)]
/// Form data for registering a new hotel. Checkboxes post `true` when
/// checked and are absent otherwise, hence the serde defaults.
pub struct AddHotelForm {
    #[validate(length(min = 1, message = "El nombre es obligatorio"))]
    pub name: String,
    #[validate(length(min = 1, message = "La dirección es obligatoria"))]
    pub address: String,
    #[validate(length(min = 1, message = "La ciudad es obligatoria"))]
    pub city: String,
    #[validate(length(min = 1, message = "El teléfono es obligatorio"))]
    pub phone_number: String,
    #[validate(email(message = "Correo electrónico inválido"))]
    pub email: String,
    #[validate(length(equal = 9, message = "El NIT debe tener 9 dígitos"))]
    pub nit: String,
    #[serde(default)]
    pub has_pool: bool,
    #[serde(default)]
    pub has_gym: bool,
}

impl From<&AddHotelForm> for NewHotel {
    fn from(form: &AddHotelForm) -> Self {
        NewHotel::new(
            &form.name,
            &form.address,
            &form.city,
            &form.phone_number,
            &form.email,
            &form.nit,
            form.has_pool,
            form.has_gym,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unchecked_boxes_default_to_false() {
        let form: AddHotelForm = serde_html_form::from_str(
            "name=Plaza&address=Calle+1&city=Bogot%C3%A1&phone_number=5551234\
             &email=INFO@PLAZA.CO&nit=123456789&has_pool=true",
        )
        .unwrap();

        assert!(form.has_pool);
        assert!(!form.has_gym);

        let hotel = NewHotel::from(&form);
        assert_eq!(hotel.email, "info@plaza.co");
    }
}
