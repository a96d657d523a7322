//! Actix handlers and the small helpers they share.

use actix_web::HttpResponse;
use actix_web::http::header;
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use log::error;
use tera::{Context, Tera};

pub mod customers;
pub mod hotels;
pub mod main;
pub mod rooms;

/// Maps a flash message level to the alert style used by the templates.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

/// 303 redirect so a form POST is never replayed on refresh.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

pub fn render_template(tera: &Tera, name: &str, context: &Context) -> HttpResponse {
    match tera.render(name, context) {
        Ok(html) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html),
        Err(e) => {
            error!("Failed to render template {name}: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Context pre-filled with what the base layout expects.
pub fn base_context(flash_messages: &IncomingFlashMessages, current_page: &str) -> Context {
    let alerts = flash_messages
        .iter()
        .map(|f| (f.content().to_string(), alert_level_to_str(&f.level())))
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_page", current_page);
    context
}

/// Tri-state select values: "true"/"false" filter, anything else is absent.
pub(crate) fn parse_bool_param(value: &Option<String>) -> Option<bool> {
    match value.as_deref() {
        Some("true") => Some(true),
        Some("false") => Some(false),
        _ => None,
    }
}

/// Numeric filter inputs arrive as strings and may be empty; both cases mean
/// "no filter".
pub(crate) fn parse_num_param<T: std::str::FromStr>(value: &Option<String>) -> Option<T> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_level_to_str_mappings() {
        assert_eq!(alert_level_to_str(&Level::Error), "danger");
        assert_eq!(alert_level_to_str(&Level::Warning), "warning");
        assert_eq!(alert_level_to_str(&Level::Success), "success");
        assert_eq!(alert_level_to_str(&Level::Info), "info");
        assert_eq!(alert_level_to_str(&Level::Debug), "info");
    }

    #[test]
    fn test_parse_bool_param() {
        assert_eq!(parse_bool_param(&Some("true".to_string())), Some(true));
        assert_eq!(parse_bool_param(&Some("false".to_string())), Some(false));
        assert_eq!(parse_bool_param(&Some(String::new())), None);
        assert_eq!(parse_bool_param(&None), None);
    }

    #[test]
    fn test_parse_num_param() {
        assert_eq!(parse_num_param::<f64>(&Some("12.5".to_string())), Some(12.5));
        assert_eq!(parse_num_param::<u32>(&Some(" 4 ".to_string())), Some(4));
        assert_eq!(parse_num_param::<u32>(&Some(String::new())), None);
        assert_eq!(parse_num_param::<u32>(&Some("abc".to_string())), None);
        assert_eq!(parse_num_param::<u32>(&None), None);
    }
}
