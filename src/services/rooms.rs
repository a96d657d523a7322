use crate::api::{HotelRoomListQuery, HotelRoomReader, HotelRoomWriter};
use crate::domain::hotel_room::{HotelRoom, NewHotelRoom};
use crate::domain::page::Page;
use crate::services::{ServiceError, ServiceResult, classify_mutation_error};

pub async fn list_rooms<A>(api: &A, query: HotelRoomListQuery) -> ServiceResult<Page<HotelRoom>>
where
    A: HotelRoomReader + ?Sized,
{
    api.list_hotel_rooms(query)
        .await
        .map_err(ServiceError::from)
}

pub async fn register_room<A>(api: &A, new_room: &NewHotelRoom) -> ServiceResult<HotelRoom>
where
    A: HotelRoomWriter + ?Sized,
{
    api.create_hotel_room(new_room)
        .await
        .map_err(classify_mutation_error)
}
