pub mod customer;
pub mod hotel;
pub mod hotel_room;
pub mod page;
