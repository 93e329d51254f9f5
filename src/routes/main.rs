use actix_web::{HttpResponse, web};

use crate::models::config::AppConfig;
use crate::routes::json_response;

/// Return the loaded configuration as JSON. Accepts any method.
pub async fn get_config(config: web::Data<AppConfig>) -> HttpResponse {
    json_response(config.get_ref())
}
