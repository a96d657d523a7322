use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::hotel_room::NewHotelRoom;

#[derive(Clone, Debug, Default, Deserialize, Serialize, Validate)]
/// Form data for registering a room under an existing hotel.
pub struct AddHotelRoomForm {
    #[validate(length(min = 1, message = "El nombre es obligatorio"))]
    pub name: String,
    #[validate(length(min = 1, message = "La descripción es obligatoria"))]
    pub description: String,
    #[validate(range(min = 0.0, message = "El costo no puede ser negativo"))]
    pub production_cost: f64,
    #[validate(range(min = 0.0, message = "El precio no puede ser negativo"))]
    pub sale_price: f64,
    #[validate(range(min = 1, message = "La capacidad mínima es 1"))]
    pub capacity: u32,
    #[serde(default)]
    pub has_tv: bool,
    #[validate(length(min = 1, message = "Seleccione un hotel"))]
    pub hotel_id: String,
}

impl From<&AddHotelRoomForm> for NewHotelRoom {
    fn from(form: &AddHotelRoomForm) -> Self {
        NewHotelRoom::new(
            &form.name,
            &form.description,
            form.production_cost,
            form.sale_price,
            form.capacity,
            form.has_tv,
            form.hotel_id.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_numeric_fields_parse_from_form_encoding() {
        let form: AddHotelRoomForm = serde_html_form::from_str(
            "name=Suite&description=Vista+al+mar&production_cost=120.5\
             &sale_price=300&capacity=2&has_tv=true&hotel_id=h-1",
        )
        .unwrap();

        assert_eq!(form.production_cost, 120.5);
        assert_eq!(form.sale_price, 300.0);
        assert_eq!(form.capacity, 2);
        assert!(form.has_tv);
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_zero_capacity_fails_advisory_validation() {
        let form = AddHotelRoomForm {
            name: "Suite".to_string(),
            description: "x".to_string(),
            production_cost: 1.0,
            sale_price: 2.0,
            capacity: 0,
            has_tv: false,
            hotel_id: "h-1".to_string(),
        };

        assert!(form.validate().is_err());
    }
}
