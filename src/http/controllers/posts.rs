use actix_multipart::form::tempfile::TempFile;
use actix_multipart::form::text::Text;
use actix_multipart::form::MultipartForm;
use actix_web::{web, HttpResponse};
use error_stack::{Report, ResultExt};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error as ThisError;

use crate::http::{AdminSession, Error};
use crate::models::id::PostId;
use crate::models::Post;
use crate::services::posts::{CreatePost, DeletePost, ListPosts, SetPostActive};
use crate::types;
use crate::uploads::{ImageUpload, UploadError, MAX_IMAGE_SIZE};
use crate::App;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub active: bool,
}

pub async fn list(
    app: web::Data<App>,
    query: web::Query<ListQuery>,
) -> Result<web::Json<Vec<Post>>, Error> {
    let posts = ListPosts {
        active_only: query.active,
    }
    .perform(&app)
    .await?;
    Ok(web::Json(posts))
}

#[derive(Debug, MultipartForm)]
pub struct CreatePostForm {
    #[multipart(rename = "facebookUrl")]
    pub facebook_url: Text<String>,
    pub title: Option<Text<String>>,
    pub description: Option<Text<String>>,
    pub image: TempFile,
}

#[derive(Debug, ThisError)]
#[error("Could not read the uploaded image")]
struct ReadUploadError;

pub async fn create(
    _session: AdminSession,
    app: web::Data<App>,
    MultipartForm(form): MultipartForm<CreatePostForm>,
) -> Result<web::Json<Post>, Error> {
    let image = read_image(&form)?;

    let post = CreatePost {
        facebook_url: form.facebook_url.into_inner(),
        title: form.title.map(Text::into_inner),
        description: form.description.map(Text::into_inner),
        image,
    }
    .perform(&app)
    .await?;

    Ok(web::Json(post))
}

fn read_image(form: &CreatePostForm) -> Result<ImageUpload, Error> {
    // the multipart layer already knows the spooled size, so an oversized
    // upload is rejected without buffering it into memory first
    if form.image.size > MAX_IMAGE_SIZE {
        return Err(Report::new(UploadError::TooLarge).into());
    }

    let data = std::fs::read(form.image.file.path())
        .map_err(Report::new)
        .change_context(ReadUploadError)
        .map_err(|report| Error::from_report(types::Error::Internal, report))?;

    Ok(ImageUpload {
        file_name: form.image.file_name.clone(),
        content_type: form.image.content_type.clone(),
        data,
    })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetActiveRequest {
    pub is_active: bool,
}

pub async fn set_active(
    _session: AdminSession,
    app: web::Data<App>,
    id: web::Path<PostId>,
    request: web::Json<SetActiveRequest>,
) -> Result<web::Json<Post>, Error> {
    let post = SetPostActive {
        id: id.into_inner(),
        is_active: request.is_active,
    }
    .perform(&app)
    .await?;
    Ok(web::Json(post))
}

pub async fn delete(
    _session: AdminSession,
    app: web::Data<App>,
    id: web::Path<PostId>,
) -> Result<HttpResponse, Error> {
    DeletePost {
        id: id.into_inner(),
    }
    .perform(&app)
    .await?;
    Ok(HttpResponse::Ok().json(json!({ "success": true })))
}
