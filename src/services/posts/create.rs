use url::Url;

use crate::http::Error;
use crate::models::post::InsertPost;
use crate::models::Post;
use crate::uploads::ImageUpload;
use crate::{uploads, App};

/// Links must point at one of these hosts; everything else is rejected
/// before the image is even looked at.
const ALLOWED_URL_PREFIXES: [&str; 2] = ["https://www.facebook.com/", "https://fb.watch/"];

#[derive(Debug)]
pub struct CreatePost {
    pub facebook_url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: ImageUpload,
}

impl CreatePost {
    /// Validates the link and the image, stores the image, then inserts
    /// the row with `is_active = true`. If the insert fails the freshly
    /// stored file is removed again so no orphan is left behind.
    #[tracing::instrument(skip_all, name = "services.posts.create")]
    pub async fn perform(self, app: &App) -> Result<Post, Error> {
        validate_link(&self.facebook_url)?;

        let thumbnail_url = self.image.store(&app.config.uploads)?;

        let mut conn = app.db().await?;
        let inserted = InsertPost {
            facebook_url: &self.facebook_url,
            title: self.title.as_deref().filter(|t| !t.is_empty()),
            description: self.description.as_deref().filter(|d| !d.is_empty()),
            thumbnail_url: &thumbnail_url,
        }
        .insert(&mut conn)
        .await;

        match inserted {
            Ok(post) => Ok(post),
            Err(report) => {
                uploads::remove_managed_file(&app.config.uploads, &thumbnail_url);
                Err(report.into())
            }
        }
    }
}

fn validate_link(facebook_url: &str) -> Result<(), Error> {
    let parsed = Url::parse(facebook_url).is_ok();
    let allowed = ALLOWED_URL_PREFIXES
        .iter()
        .any(|prefix| facebook_url.starts_with(prefix));

    if parsed && allowed {
        Ok(())
    } else {
        Err(Error::invalid_request("Invalid Facebook URL"))
    }
}
