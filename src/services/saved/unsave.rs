use crate::http::Error;
use crate::models::id::PostId;
use crate::models::SavedPost;
use crate::App;

/// Removes the saved marker for a post. Unsaving something that was never
/// saved is reported as not-found and mutates nothing.
#[derive(Debug)]
pub struct UnsavePost {
    pub post_id: PostId,
}

impl UnsavePost {
    #[tracing::instrument(skip_all, name = "services.saved.unsave")]
    pub async fn perform(self, app: &App) -> Result<(), Error> {
        let mut conn = app.db().await?;

        let Some(marker) = SavedPost::find_by_post(&mut conn, self.post_id).await? else {
            return Err(Error::not_found());
        };

        SavedPost::delete(&mut conn, marker.id).await?;
        Ok(())
    }
}
