use actix_web::HttpResponse;
use actix_web::http::header::ContentType;
use actix_web::web;
use serde::Serialize;

pub mod main;

/// Path serving the loaded configuration.
pub const CONFIG_ROUTE: &str = "/getconfig";

/// Register every route of the service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route(CONFIG_ROUTE, web::to(main::get_config));
}

/// Pretty-printed JSON response, or a plain-text 500 when `value` cannot be
/// serialized.
fn json_response<T: Serialize>(value: &T) -> HttpResponse {
    match serde_json::to_string_pretty(value) {
        Ok(body) => HttpResponse::Ok()
            .content_type(ContentType::json())
            .body(body),
        Err(_) => HttpResponse::InternalServerError()
            .content_type(ContentType::plaintext())
            .body("Failed to marshal config to JSON"),
    }
}
