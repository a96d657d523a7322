use actix_web::{Responder, get};

use crate::routes::redirect;

/// The customers listing doubles as the landing page.
#[get("/")]
pub async fn show_index() -> impl Responder {
    redirect("/customers")
}
