use crate::http::Error;
use crate::models::{Post, SavedPost, SavedPostView};
use crate::App;

/// Materializes the saved list, newest-saved first, by resolving every
/// marker against the live post table. Markers whose post has been
/// deleted are silently dropped.
#[derive(Debug)]
pub struct ListSavedPosts;

impl ListSavedPosts {
    #[tracing::instrument(skip_all, name = "services.saved.list")]
    pub async fn perform(self, app: &App) -> Result<Vec<SavedPostView>, Error> {
        let mut conn = app.db().await?;

        let markers = SavedPost::list(&mut conn).await?;
        let mut views = Vec::with_capacity(markers.len());
        for marker in markers {
            if let Some(post) = Post::find(&mut conn, marker.post_id).await? {
                views.push(SavedPostView {
                    post,
                    saved_id: marker.id,
                    saved_at: marker.saved_at,
                });
            }
        }

        Ok(views)
    }
}
