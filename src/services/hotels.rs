use crate::api::{HotelListQuery, HotelReader, HotelWriter};
use crate::domain::hotel::{Hotel, NewHotel};
use crate::domain::page::Page;
use crate::services::{ServiceError, ServiceResult, classify_mutation_error};

pub async fn list_hotels<A>(api: &A, query: HotelListQuery) -> ServiceResult<Page<Hotel>>
where
    A: HotelReader + ?Sized,
{
    api.list_hotels(query).await.map_err(ServiceError::from)
}

/// Fetches active hotels for the room form's hotel selector.
pub async fn list_active_hotels<A>(api: &A, size: usize) -> ServiceResult<Vec<Hotel>>
where
    A: HotelReader + ?Sized,
{
    let page = api
        .list_hotels(HotelListQuery::new().active(true).paginate(0, size))
        .await
        .map_err(ServiceError::from)?;
    Ok(page.items)
}

pub async fn register_hotel<A>(api: &A, new_hotel: &NewHotel) -> ServiceResult<Hotel>
where
    A: HotelWriter + ?Sized,
{
    api.create_hotel(new_hotel)
        .await
        .map_err(classify_mutation_error)
}

/// Soft-deletes a hotel.
pub async fn deactivate_hotel<A>(api: &A, id: &str) -> ServiceResult<()>
where
    A: HotelWriter + ?Sized,
{
    api.deactivate_hotel(id).await.map_err(ServiceError::from)
}
