use serde::{Deserialize, Serialize};

/// A hotel record as returned by the remote API. Uses the same soft-delete
/// discipline as customers.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub address: String,
    pub city: String,
    pub phone_number: String,
    pub email: String,
    pub nit: String,
    pub has_pool: bool,
    pub has_gym: bool,
    pub active: bool,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewHotel {
    pub name: String,
    pub address: String,
    pub city: String,
    pub phone_number: String,
    pub email: String,
    pub nit: String,
    pub has_pool: bool,
    pub has_gym: bool,
}

impl NewHotel {
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: &str,
        address: &str,
        city: &str,
        phone_number: &str,
        email: &str,
        nit: &str,
        has_pool: bool,
        has_gym: bool,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            address: address.trim().to_string(),
            city: city.trim().to_string(),
            phone_number: phone_number.trim().to_string(),
            email: email.trim().to_lowercase(),
            nit: nit.trim().to_string(),
            has_pool,
            has_gym,
        }
    }
}
