use serde::{Deserialize, Serialize};

/// A customer record as returned by the remote API. Deactivated customers
/// stay listed with `active == false`; they are never physically removed.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub nit: String,
    pub phone_number: String,
    pub active: bool,
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
    pub nit: String,
    pub phone_number: String,
}

impl NewCustomer {
    #[must_use]
    pub fn new(first_name: &str, last_name: &str, nit: &str, phone_number: &str) -> Self {
        Self {
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            nit: nit.trim().to_string(),
            phone_number: phone_number.trim().to_string(),
        }
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomer {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub nit: String,
    pub phone_number: String,
}

impl UpdateCustomer {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        first_name: &str,
        last_name: &str,
        nit: &str,
        phone_number: &str,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            nit: nit.trim().to_string(),
            phone_number: phone_number.trim().to_string(),
        }
    }
}
