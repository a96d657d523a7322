use actix_files::Files;
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use tera::Tera;

use crate::api::RestApi;
use crate::models::config::ServerConfig;
use crate::routes::customers::{
    add_customer, add_customer_form, customers_table, deactivate_customer, edit_customer_form,
    save_customer, show_customers,
};
use crate::routes::hotels::{
    add_hotel, add_hotel_form, deactivate_hotel, hotels_table, show_hotels,
};
use crate::routes::main::show_index;
use crate::routes::rooms::{add_room, add_room_form, rooms_table, show_rooms};

pub mod api;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod routes;
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // One API client per process, shared by reference across handlers.
    let api = RestApi::from_config(&server_config)
        .map_err(|e| std::io::Error::other(format!("Failed to build API client: {e}")))?;

    let secret_key = Key::from(server_config.secret.as_bytes());
    let message_store = CookieMessageStore::builder(secret_key).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(message_framework.clone())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(show_index)
            // Literal segments must register before the `{id}` routes.
            .service(show_customers)
            .service(customers_table)
            .service(add_customer_form)
            .service(add_customer)
            .service(edit_customer_form)
            .service(save_customer)
            .service(deactivate_customer)
            .service(show_rooms)
            .service(rooms_table)
            .service(add_room_form)
            .service(add_room)
            .service(show_hotels)
            .service(hotels_table)
            .service(add_hotel_form)
            .service(add_hotel)
            .service(deactivate_hotel)
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(api.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
