use actix_web::{web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::http::Error;
use crate::models::id::PostId;
use crate::models::{SavedPost, SavedPostView};
use crate::services::saved::{ListSavedPosts, SavePost, UnsavePost};
use crate::App;

pub async fn list(app: web::Data<App>) -> Result<web::Json<Vec<SavedPostView>>, Error> {
    let views = ListSavedPosts.perform(&app).await?;
    Ok(web::Json(views))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveRequest {
    pub post_id: PostId,
}

pub async fn save(
    app: web::Data<App>,
    request: web::Json<SaveRequest>,
) -> Result<web::Json<SavedPost>, Error> {
    let saved = SavePost {
        post_id: request.post_id,
    }
    .perform(&app)
    .await?;
    Ok(web::Json(saved))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnsaveQuery {
    pub post_id: PostId,
}

pub async fn unsave(
    app: web::Data<App>,
    query: web::Query<UnsaveQuery>,
) -> Result<HttpResponse, Error> {
    UnsavePost {
        post_id: query.post_id,
    }
    .perform(&app)
    .await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true })))
}
