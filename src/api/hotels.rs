use crate::api::client::RestApi;
use crate::api::errors::ApiResult;
use crate::api::{
    HotelListQuery, HotelReader, HotelRoomListQuery, HotelRoomReader, HotelRoomWriter, HotelWriter,
};
use crate::domain::hotel::{Hotel, NewHotel};
use crate::domain::hotel_room::{HotelRoom, NewHotelRoom};
use crate::domain::page::Page;
use crate::dto::page::PagedResponseDto;

impl HotelReader for RestApi {
    async fn get_hotel_by_id(&self, id: &str) -> ApiResult<Hotel> {
        self.get_json(&format!("/hotels/{id}")).await
    }

    async fn list_hotels(&self, query: HotelListQuery) -> ApiResult<Page<Hotel>> {
        let dto: PagedResponseDto<Hotel> = self
            .get_json(&format!("/hotels?{}", query.to_query_string()))
            .await?;
        Ok(dto.into())
    }
}

impl HotelWriter for RestApi {
    async fn create_hotel(&self, new_hotel: &NewHotel) -> ApiResult<Hotel> {
        self.post_json("/hotels", new_hotel).await
    }

    async fn deactivate_hotel(&self, id: &str) -> ApiResult<()> {
        self.delete(&format!("/hotels/{id}")).await
    }
}

impl HotelRoomReader for RestApi {
    async fn list_hotel_rooms(&self, query: HotelRoomListQuery) -> ApiResult<Page<HotelRoom>> {
        let dto: PagedResponseDto<HotelRoom> = self
            .get_json(&format!("/hotels/rooms?{}", query.to_query_string()))
            .await?;
        Ok(dto.into())
    }
}

impl HotelRoomWriter for RestApi {
    async fn create_hotel_room(&self, new_room: &NewHotelRoom) -> ApiResult<HotelRoom> {
        self.post_json("/hotels/rooms", new_room).await
    }
}
