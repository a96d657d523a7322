use std::collections::HashMap;

use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use log::error;
use serde::{Deserialize, Serialize};
use tera::Tera;
use validator::Validate;

use crate::api::{HotelListQuery, RestApi};
use crate::domain::hotel::{Hotel, NewHotel};
use crate::domain::page::Page;
use crate::forms::hotels::AddHotelForm;
use crate::forms::validation_messages;
use crate::pagination::{DEFAULT_PAGE_SIZE, Paginated, SKELETON_ROWS};
use crate::routes::{base_context, parse_bool_param, redirect, render_template};
use crate::services::ServiceError;
use crate::services::hotels as hotel_service;

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HotelFilterParams {
    pub name: Option<String>,
    pub city: Option<String>,
    pub has_pool: Option<String>,
    pub has_gym: Option<String>,
    pub active: Option<String>,
    pub page: Option<usize>,
    pub size: Option<usize>,
}

impl HotelFilterParams {
    fn to_query(&self) -> HotelListQuery {
        let mut query = HotelListQuery::new()
            .name(self.name.clone().unwrap_or_default())
            .city(self.city.clone().unwrap_or_default())
            .paginate(
                self.page.unwrap_or(0),
                self.size.unwrap_or(DEFAULT_PAGE_SIZE),
            );
        if let Some(has_pool) = parse_bool_param(&self.has_pool) {
            query = query.has_pool(has_pool);
        }
        if let Some(has_gym) = parse_bool_param(&self.has_gym) {
            query = query.has_gym(has_gym);
        }
        if let Some(active) = parse_bool_param(&self.active) {
            query = query.active(active);
        }
        query
    }
}

#[get("/hotels")]
pub async fn show_hotels(
    params: web::Query<HotelFilterParams>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = params.to_query();

    let mut context = base_context(&flash_messages, "hotels");
    context.insert("filter", &*params);
    context.insert("query", &query.to_query_string());
    context.insert("filter_query", &query.to_filter_query_string());
    context.insert("skeleton_rows", &SKELETON_ROWS);

    render_template(&tera, "hotels/index.html", &context)
}

#[get("/hotels/table")]
pub async fn hotels_table(
    params: web::Query<HotelFilterParams>,
    api: web::Data<RestApi>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = params.to_query();

    let mut context = tera::Context::new();
    context.insert("filter_query", &query.to_filter_query_string());

    match hotel_service::list_hotels(api.get_ref(), query).await {
        Ok(page) => {
            context.insert("hotels", &Paginated::new(page));
            context.insert("fetch_failed", &false);
        }
        Err(e) => {
            error!("Failed to list hotels: {e}");
            context.insert("hotels", &Paginated::new(Page::<Hotel>::empty()));
            context.insert("fetch_failed", &true);
        }
    }

    render_template(&tera, "hotels/table.html", &context)
}

fn render_add_form(
    tera: &Tera,
    flash_messages: &IncomingFlashMessages,
    form: &AddHotelForm,
    field_errors: &HashMap<String, String>,
    error: Option<&str>,
) -> actix_web::HttpResponse {
    let mut context = base_context(flash_messages, "hotels");
    context.insert("form", form);
    context.insert("field_errors", field_errors);
    context.insert("error", &error);
    render_template(tera, "hotels/add.html", &context)
}

#[get("/hotels/add")]
pub async fn add_hotel_form(
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    render_add_form(
        &tera,
        &flash_messages,
        &AddHotelForm::default(),
        &HashMap::new(),
        None,
    )
}

#[post("/hotels/add")]
pub async fn add_hotel(
    api: web::Data<RestApi>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<AddHotelForm>,
) -> impl Responder {
    if let Err(errors) = form.validate() {
        return render_add_form(
            &tera,
            &flash_messages,
            &form,
            &validation_messages(&errors),
            Some("Revise los campos marcados."),
        );
    }

    match hotel_service::register_hotel(api.get_ref(), &NewHotel::from(&form)).await {
        Ok(_) => {
            FlashMessage::success("Hotel registrado.".to_string()).send();
            redirect("/hotels")
        }
        Err(ServiceError::Validation { detail, fields }) => {
            render_add_form(&tera, &flash_messages, &form, &fields, Some(&detail))
        }
        Err(err) => {
            error!("Failed to register hotel: {err}");
            render_add_form(
                &tera,
                &flash_messages,
                &form,
                &HashMap::new(),
                Some("Error al registrar el hotel."),
            )
        }
    }
}

#[post("/hotels/{id}/deactivate")]
pub async fn deactivate_hotel(id: web::Path<String>, api: web::Data<RestApi>) -> impl Responder {
    let id = id.into_inner();

    match hotel_service::deactivate_hotel(api.get_ref(), &id).await {
        Ok(()) => {
            FlashMessage::success("Hotel desactivado.".to_string()).send();
        }
        Err(err) => {
            error!("Failed to deactivate hotel {id}: {err}");
            FlashMessage::error("Error al desactivar el hotel.".to_string()).send();
        }
    }

    redirect("/hotels")
}
