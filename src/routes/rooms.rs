use std::collections::HashMap;

use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use log::error;
use serde::{Deserialize, Serialize};
use tera::Tera;
use validator::Validate;

use crate::api::{HotelRoomListQuery, RestApi};
use crate::domain::hotel::Hotel;
use crate::domain::hotel_room::{HotelRoom, NewHotelRoom};
use crate::domain::page::Page;
use crate::forms::rooms::AddHotelRoomForm;
use crate::forms::validation_messages;
use crate::pagination::{DEFAULT_PAGE_SIZE, Paginated, SKELETON_ROWS};
use crate::routes::{base_context, parse_bool_param, parse_num_param, redirect, render_template};
use crate::services::ServiceError;
use crate::services::hotels as hotel_service;
use crate::services::rooms as room_service;

/// Hotels offered in the room form's selector; one page is plenty for an
/// admin UI.
const HOTEL_CHOICES: usize = 100;

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoomFilterParams {
    pub name: Option<String>,
    pub min_sale_price: Option<String>,
    pub max_sale_price: Option<String>,
    pub min_capacity: Option<String>,
    pub max_capacity: Option<String>,
    #[serde(rename = "hasTV")]
    pub has_tv: Option<String>,
    pub page: Option<usize>,
    pub size: Option<usize>,
}

impl RoomFilterParams {
    fn to_query(&self) -> HotelRoomListQuery {
        let mut query = HotelRoomListQuery::new()
            .name(self.name.clone().unwrap_or_default())
            .sale_price_range(
                parse_num_param(&self.min_sale_price),
                parse_num_param(&self.max_sale_price),
            )
            .capacity_range(
                parse_num_param(&self.min_capacity),
                parse_num_param(&self.max_capacity),
            )
            .paginate(
                self.page.unwrap_or(0),
                self.size.unwrap_or(DEFAULT_PAGE_SIZE),
            );
        if let Some(has_tv) = parse_bool_param(&self.has_tv) {
            query = query.has_tv(has_tv);
        }
        query
    }
}

#[get("/hotels/rooms")]
pub async fn show_rooms(
    params: web::Query<RoomFilterParams>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = params.to_query();

    let mut context = base_context(&flash_messages, "rooms");
    context.insert("filter", &*params);
    context.insert("query", &query.to_query_string());
    context.insert("filter_query", &query.to_filter_query_string());
    context.insert("skeleton_rows", &SKELETON_ROWS);

    render_template(&tera, "rooms/index.html", &context)
}

#[get("/hotels/rooms/table")]
pub async fn rooms_table(
    params: web::Query<RoomFilterParams>,
    api: web::Data<RestApi>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = params.to_query();

    let mut context = tera::Context::new();
    context.insert("filter_query", &query.to_filter_query_string());

    match room_service::list_rooms(api.get_ref(), query).await {
        Ok(page) => {
            context.insert("rooms", &Paginated::new(page));
            context.insert("fetch_failed", &false);
        }
        Err(e) => {
            error!("Failed to list rooms: {e}");
            context.insert("rooms", &Paginated::new(Page::<HotelRoom>::empty()));
            context.insert("fetch_failed", &true);
        }
    }

    render_template(&tera, "rooms/table.html", &context)
}

fn render_add_form(
    tera: &Tera,
    flash_messages: &IncomingFlashMessages,
    hotels: &[Hotel],
    form: &AddHotelRoomForm,
    field_errors: &HashMap<String, String>,
    error: Option<&str>,
) -> actix_web::HttpResponse {
    let mut context = base_context(flash_messages, "rooms");
    context.insert("hotels", hotels);
    context.insert("form", form);
    context.insert("field_errors", field_errors);
    context.insert("error", &error);
    render_template(tera, "rooms/add.html", &context)
}

/// The form needs the list of active hotels for its selector; if that
/// lookup fails the form is still usable, just with an empty selector and a
/// warning.
async fn hotel_choices(api: &RestApi) -> (Vec<Hotel>, bool) {
    match hotel_service::list_active_hotels(api, HOTEL_CHOICES).await {
        Ok(hotels) => (hotels, false),
        Err(e) => {
            error!("Failed to list hotels for room form: {e}");
            (Vec::new(), true)
        }
    }
}

#[get("/hotels/rooms/add")]
pub async fn add_room_form(
    api: web::Data<RestApi>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let (hotels, failed) = hotel_choices(api.get_ref()).await;
    let error = failed.then_some("No se pudieron cargar los hoteles.");

    render_add_form(
        &tera,
        &flash_messages,
        &hotels,
        &AddHotelRoomForm::default(),
        &HashMap::new(),
        error,
    )
}

#[post("/hotels/rooms/add")]
pub async fn add_room(
    api: web::Data<RestApi>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<AddHotelRoomForm>,
) -> impl Responder {
    if let Err(errors) = form.validate() {
        let (hotels, _) = hotel_choices(api.get_ref()).await;
        return render_add_form(
            &tera,
            &flash_messages,
            &hotels,
            &form,
            &validation_messages(&errors),
            Some("Revise los campos marcados."),
        );
    }

    match room_service::register_room(api.get_ref(), &NewHotelRoom::from(&form)).await {
        Ok(_) => {
            FlashMessage::success("Habitación registrada.".to_string()).send();
            redirect("/hotels/rooms")
        }
        Err(ServiceError::Validation { detail, fields }) => {
            let (hotels, _) = hotel_choices(api.get_ref()).await;
            render_add_form(&tera, &flash_messages, &hotels, &form, &fields, Some(&detail))
        }
        Err(err) => {
            error!("Failed to register room: {err}");
            let (hotels, _) = hotel_choices(api.get_ref()).await;
            render_add_form(
                &tera,
                &flash_messages,
                &hotels,
                &form,
                &HashMap::new(),
                Some("Error al registrar la habitación."),
            )
        }
    }
}
