use std::collections::HashMap;

use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use log::error;
use serde::{Deserialize, Serialize};
use tera::Tera;
use validator::Validate;

use crate::api::{CustomerListQuery, RestApi};
use crate::domain::customer::{Customer, NewCustomer};
use crate::domain::page::Page;
use crate::forms::customers::{AddCustomerForm, EditCustomerForm};
use crate::forms::validation_messages;
use crate::pagination::{DEFAULT_PAGE_SIZE, Paginated, SKELETON_ROWS};
use crate::routes::{base_context, parse_bool_param, redirect, render_template};
use crate::services::ServiceError;
use crate::services::customers as customer_service;

/// Filter and paging parameters carried by the customers list URL. Field
/// names mirror the remote API so pagination links round-trip unchanged.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomerFilterParams {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub nit: Option<String>,
    pub active: Option<String>,
    pub page: Option<usize>,
    pub size: Option<usize>,
}

impl CustomerFilterParams {
    fn to_query(&self) -> CustomerListQuery {
        let mut query = CustomerListQuery::new()
            .first_name(self.first_name.clone().unwrap_or_default())
            .last_name(self.last_name.clone().unwrap_or_default())
            .nit(self.nit.clone().unwrap_or_default())
            .paginate(
                self.page.unwrap_or(0),
                self.size.unwrap_or(DEFAULT_PAGE_SIZE),
            );
        if let Some(active) = parse_bool_param(&self.active) {
            query = query.active(active);
        }
        query
    }
}

/// Page shell: filter form plus a skeleton table that htmx replaces with the
/// real rows once `/customers/table` answers.
#[get("/customers")]
pub async fn show_customers(
    params: web::Query<CustomerFilterParams>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = params.to_query();

    let mut context = base_context(&flash_messages, "customers");
    context.insert("filter", &*params);
    context.insert("query", &query.to_query_string());
    context.insert("filter_query", &query.to_filter_query_string());
    context.insert("skeleton_rows", &SKELETON_ROWS);

    render_template(&tera, "customers/index.html", &context)
}

/// Table partial. A failed fetch renders zero rows with an error banner
/// instead of breaking the page.
#[get("/customers/table")]
pub async fn customers_table(
    params: web::Query<CustomerFilterParams>,
    api: web::Data<RestApi>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let query = params.to_query();

    let mut context = tera::Context::new();
    context.insert("filter_query", &query.to_filter_query_string());

    match customer_service::list_customers(api.get_ref(), query).await {
        Ok(page) => {
            context.insert("customers", &Paginated::new(page));
            context.insert("fetch_failed", &false);
        }
        Err(e) => {
            error!("Failed to list customers: {e}");
            context.insert("customers", &Paginated::new(Page::<Customer>::empty()));
            context.insert("fetch_failed", &true);
        }
    }

    render_template(&tera, "customers/table.html", &context)
}

fn render_add_form(
    tera: &Tera,
    flash_messages: &IncomingFlashMessages,
    form: &AddCustomerForm,
    field_errors: &HashMap<String, String>,
    error: Option<&str>,
) -> actix_web::HttpResponse {
    let mut context = base_context(flash_messages, "customers");
    context.insert("form", form);
    context.insert("field_errors", field_errors);
    context.insert("error", &error);
    render_template(tera, "customers/add.html", &context)
}

#[get("/customers/add")]
pub async fn add_customer_form(
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    render_add_form(
        &tera,
        &flash_messages,
        &AddCustomerForm::default(),
        &HashMap::new(),
        None,
    )
}

#[post("/customers/add")]
pub async fn add_customer(
    api: web::Data<RestApi>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<AddCustomerForm>,
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

    match customer_service::register_customer(api.get_ref(), &NewCustomer::from(&form)).await {
        Ok(_) => {
            FlashMessage::success("Cliente registrado.".to_string()).send();
            redirect("/customers")
        }
        Err(ServiceError::Validation { detail, fields }) => {
            render_add_form(&tera, &flash_messages, &form, &fields, Some(&detail))
        }
        Err(err) => {
            error!("Failed to register customer: {err}");
            render_add_form(
                &tera,
                &flash_messages,
                &form,
                &HashMap::new(),
                Some("Error al registrar el cliente."),
            )
        }
    }
}

fn render_edit_form(
    tera: &Tera,
    flash_messages: &IncomingFlashMessages,
    customer_id: &str,
    form: &EditCustomerForm,
    field_errors: &HashMap<String, String>,
    error: Option<&str>,
) -> actix_web::HttpResponse {
    let mut context = base_context(flash_messages, "customers");
    context.insert("customer_id", customer_id);
    context.insert("form", form);
    context.insert("field_errors", field_errors);
    context.insert("error", &error);
    render_template(tera, "customers/edit.html", &context)
}

#[get("/customers/{id}/edit")]
pub async fn edit_customer_form(
    id: web::Path<String>,
    api: web::Data<RestApi>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let id = id.into_inner();

    match customer_service::get_customer(api.get_ref(), &id).await {
        Ok(customer) => {
            let form = EditCustomerForm {
                first_name: customer.first_name,
                last_name: customer.last_name,
                nit: customer.nit,
                phone_number: customer.phone_number,
            };
            render_edit_form(&tera, &flash_messages, &id, &form, &HashMap::new(), None)
        }
        Err(e) => {
            error!("Failed to load customer {id}: {e}");
            FlashMessage::error("Cliente no encontrado.".to_string()).send();
            redirect("/customers")
        }
    }
}

#[post("/customers/{id}/edit")]
pub async fn save_customer(
    id: web::Path<String>,
    api: web::Data<RestApi>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<EditCustomerForm>,
) -> impl Responder {
    let id = id.into_inner();

    if let Err(errors) = form.validate() {
        return render_edit_form(
            &tera,
            &flash_messages,
            &id,
            &form,
            &validation_messages(&errors),
            Some("Revise los campos marcados."),
        );
    }

    match customer_service::save_customer(api.get_ref(), &form.into_update(&id)).await {
        Ok(_) => {
            FlashMessage::success("Cliente actualizado.".to_string()).send();
            redirect("/customers")
        }
        Err(ServiceError::Validation { detail, fields }) => {
            render_edit_form(&tera, &flash_messages, &id, &form, &fields, Some(&detail))
        }
        Err(err) => {
            error!("Failed to update customer {id}: {err}");
            render_edit_form(
                &tera,
                &flash_messages,
                &id,
                &form,
                &HashMap::new(),
                Some("Error al actualizar el cliente."),
            )
        }
    }
}

/// Soft delete. The form posting here sits behind a browser confirmation;
/// rows already inactive never render the button.
#[post("/customers/{id}/deactivate")]
pub async fn deactivate_customer(
    id: web::Path<String>,
    api: web::Data<RestApi>,
) -> impl Responder {
    let id = id.into_inner();

    match customer_service::deactivate_customer(api.get_ref(), &id).await {
        Ok(()) => {
            FlashMessage::success("Cliente desactivado.".to_string()).send();
        }
        Err(err) => {
            error!("Failed to deactivate customer {id}: {err}");
            FlashMessage::error("Error al desactivar el cliente.".to_string()).send();
        }
    }

    redirect("/customers")
}
