//! Client for the remote hotel management API.
//!
//! Each resource gets a reader/writer trait pair so services and tests can
//! swap the HTTP-backed [`RestApi`] for a mock. List queries are builders
//! that normalize filter input before it ever reaches a query string.

#![allow(async_fn_in_trait)]

use serde::Serialize;

use crate::domain::customer::{Customer, NewCustomer, UpdateCustomer};
use crate::domain::hotel::{Hotel, NewHotel};
use crate::domain::hotel_room::{HotelRoom, NewHotelRoom};
use crate::domain::page::Page;
use crate::pagination::DEFAULT_PAGE_SIZE;

pub mod client;
pub mod customers;
pub mod errors;
pub mod hotels;
#[cfg(feature = "test-mocks")]
pub mod mock;

pub use client::RestApi;
pub use errors::{ApiError, ApiResult};

/// Drops filter values that are empty once trimmed, so they are omitted from
/// the outgoing query instead of being sent as empty strings.
fn non_empty(value: impl Into<String>) -> Option<String> {
    let value = value.into().trim().to_string();
    (!value.is_empty()).then_some(value)
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    pub page: usize,
    pub size: usize,
}

impl Default for CustomerListQuery {
    fn default() -> Self {
        Self {
            first_name: None,
            last_name: None,
            nit: None,
            active: None,
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl CustomerListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn first_name(mut self, value: impl Into<String>) -> Self {
        self.first_name = non_empty(value);
        self
    }

    pub fn last_name(mut self, value: impl Into<String>) -> Self {
        self.last_name = non_empty(value);
        self
    }

    pub fn nit(mut self, value: impl Into<String>) -> Self {
        self.nit = non_empty(value);
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    pub fn paginate(mut self, page: usize, size: usize) -> Self {
        self.page = page;
        self.size = size.max(1);
        self
    }

    pub fn to_query_string(&self) -> String {
        serde_html_form::to_string(self).unwrap_or_default()
    }

    /// Query string without the page parameter, for pagination links that
    /// append their own.
    pub fn to_filter_query_string(&self) -> String {
        let mut query = self.clone();
        query.page = 0;
        strip_page(query.to_query_string())
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HotelListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_pool: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_gym: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    pub page: usize,
    pub size: usize,
}

impl Default for HotelListQuery {
    fn default() -> Self {
        Self {
            name: None,
            city: None,
            has_pool: None,
            has_gym: None,
            active: None,
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl HotelListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = non_empty(value);
        self
    }

    pub fn city(mut self, value: impl Into<String>) -> Self {
        self.city = non_empty(value);
        self
    }

    pub fn has_pool(mut self, value: bool) -> Self {
        self.has_pool = Some(value);
        self
    }

    pub fn has_gym(mut self, value: bool) -> Self {
        self.has_gym = Some(value);
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    pub fn paginate(mut self, page: usize, size: usize) -> Self {
        self.page = page;
        self.size = size.max(1);
        self
    }

    pub fn to_query_string(&self) -> String {
        serde_html_form::to_string(self).unwrap_or_default()
    }

    pub fn to_filter_query_string(&self) -> String {
        let mut query = self.clone();
        query.page = 0;
        strip_page(query.to_query_string())
    }
}

#[derive(Clone, Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HotelRoomListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_sale_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_sale_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_capacity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_capacity: Option<u32>,
    #[serde(rename = "hasTV", skip_serializing_if = "Option::is_none")]
    pub has_tv: Option<bool>,
    pub page: usize,
    pub size: usize,
}

impl Default for HotelRoomListQuery {
    fn default() -> Self {
        Self {
            name: None,
            min_sale_price: None,
            max_sale_price: None,
            min_capacity: None,
            max_capacity: None,
            has_tv: None,
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl HotelRoomListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = non_empty(value);
        self
    }

    pub fn sale_price_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_sale_price = min;
        self.max_sale_price = max;
        self
    }

    pub fn capacity_range(mut self, min: Option<u32>, max: Option<u32>) -> Self {
        self.min_capacity = min;
        self.max_capacity = max;
        self
    }

    pub fn has_tv(mut self, value: bool) -> Self {
        self.has_tv = Some(value);
        self
    }

    pub fn paginate(mut self, page: usize, size: usize) -> Self {
        self.page = page;
        self.size = size.max(1);
        self
    }

    pub fn to_query_string(&self) -> String {
        serde_html_form::to_string(self).unwrap_or_default()
    }

    pub fn to_filter_query_string(&self) -> String {
        let mut query = self.clone();
        query.page = 0;
        strip_page(query.to_query_string())
    }
}

/// Removes a `page=0` pair from a serialized query. Values are
/// percent-encoded, so the literal pair can only be the parameter itself.
fn strip_page(qs: String) -> String {
    qs.replace("page=0&", "").replace("&page=0", "")
}

pub trait CustomerReader {
    async fn get_customer_by_id(&self, id: &str) -> ApiResult<Customer>;
    async fn list_customers(&self, query: CustomerListQuery) -> ApiResult<Page<Customer>>;
}

pub trait CustomerWriter {
    async fn create_customer(&self, new_customer: &NewCustomer) -> ApiResult<Customer>;
    async fn update_customer(&self, updates: &UpdateCustomer) -> ApiResult<Customer>;
    async fn deactivate_customer(&self, id: &str) -> ApiResult<()>;
}

pub trait HotelReader {
    async fn get_hotel_by_id(&self, id: &str) -> ApiResult<Hotel>;
    async fn list_hotels(&self, query: HotelListQuery) -> ApiResult<Page<Hotel>>;
}

pub trait HotelWriter {
    async fn create_hotel(&self, new_hotel: &NewHotel) -> ApiResult<Hotel>;
    async fn deactivate_hotel(&self, id: &str) -> ApiResult<()>;
}

pub trait HotelRoomReader {
    async fn list_hotel_rooms(&self, query: HotelRoomListQuery) -> ApiResult<Page<HotelRoom>>;
}

pub trait HotelRoomWriter {
    async fn create_hotel_room(&self, new_room: &NewHotelRoom) -> ApiResult<HotelRoom>;
}
