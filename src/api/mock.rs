//! Mock api implementations for isolating services in tests.

use mockall::mock;

use crate::api::errors::ApiResult;
use crate::api::{
    CustomerListQuery, CustomerReader, CustomerWriter, HotelListQuery, HotelReader,
    HotelRoomListQuery, HotelRoomReader, HotelRoomWriter, HotelWriter,
};
use crate::domain::customer::{Customer, NewCustomer, UpdateCustomer};
use crate::domain::hotel::{Hotel, NewHotel};
use crate::domain::hotel_room::{HotelRoom, NewHotelRoom};
use crate::domain::page::Page;

mock! {
    pub Api {}

    impl CustomerReader for Api {
        async fn get_customer_by_id(&self, id: &str) -> ApiResult<Customer>;
        async fn list_customers(&self, query: CustomerListQuery) -> ApiResult<Page<Customer>>;
    }

    impl CustomerWriter for Api {
        async fn create_customer(&self, new_customer: &NewCustomer) -> ApiResult<Customer>;
        async fn update_customer(&self, updates: &UpdateCustomer) -> ApiResult<Customer>;
        async fn deactivate_customer(&self, id: &str) -> ApiResult<()>;
    }

    impl HotelReader for Api {
        async fn get_hotel_by_id(&self, id: &str) -> ApiResult<Hotel>;
        async fn list_hotels(&self, query: HotelListQuery) -> ApiResult<Page<Hotel>>;
    }

    impl HotelWriter for Api {
        async fn create_hotel(&self, new_hotel: &NewHotel) -> ApiResult<Hotel>;
        async fn deactivate_hotel(&self, id: &str) -> ApiResult<()>;
    }

    impl HotelRoomReader for Api {
        async fn list_hotel_rooms(&self, query: HotelRoomListQuery) -> ApiResult<Page<HotelRoom>>;
    }

    impl HotelRoomWriter for Api {
        async fn create_hotel_room(&self, new_room: &NewHotelRoom) -> ApiResult<HotelRoom>;
    }
}
