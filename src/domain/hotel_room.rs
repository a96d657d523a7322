use serde::{Deserialize, Serialize};

/// A room belonging to a hotel. `hotel_name` is denormalized by the remote
/// API so listings can show it without a second lookup.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct HotelRoom {
    pub id: String,
    pub name: String,
    pub description: String,
    pub production_cost: f64,
    pub sale_price: f64,
    pub capacity: u32,
    #[serde(rename = "hasTV")]
    pub has_tv: bool,
    pub hotel_id: String,
    pub hotel_name: String,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewHotelRoom {
    pub name: String,
    pub description: String,
    pub production_cost: f64,
    pub sale_price: f64,
    pub capacity: u32,
    #[serde(rename = "hasTV")]
    pub has_tv: bool,
    pub hotel_id: String,
}

impl NewHotelRoom {
    #[must_use]
    pub fn new(
        name: &str,
        description: &str,
        production_cost: f64,
        sale_price: f64,
        capacity: u32,
        has_tv: bool,
        hotel_id: impl Into<String>,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            description: description.trim().to_string(),
            production_cost,
            sale_price,
            capacity,
            has_tv,
            hotel_id: hotel_id.into(),
        }
    }
}
