use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::http::{session, Error};
use crate::services::auth::Login;
use crate::util::sensitive::Sensitive;
use crate::App;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Sensitive<String>,
    pub password: Sensitive<String>,
}

pub async fn login(
    app: web::Data<App>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, Error> {
    Login {
        username: &request.username,
        password: &request.password,
    }
    .perform(&app.config.auth)?;

    Ok(HttpResponse::Ok()
        .cookie(session::auth_cookie(app.config.auth.secure_cookie))
        .json(json!({ "success": true })))
}

pub async fn logout() -> HttpResponse {
    HttpResponse::Ok()
        .cookie(session::removal_cookie())
        .json(json!({ "success": true }))
}
