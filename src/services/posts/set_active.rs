use crate::http::Error;
use crate::models::id::PostId;
use crate::models::Post;
use crate::App;

/// Shows or hides a post in the public feed without removing it.
#[derive(Debug)]
pub struct SetPostActive {
    pub id: PostId,
    pub is_active: bool,
}

impl SetPostActive {
    #[tracing::instrument(skip_all, name = "services.posts.set_active")]
    pub async fn perform(self, app: &App) -> Result<Post, Error> {
        let mut conn = app.db().await?;
        Post::set_active(&mut conn, self.id, self.is_active)
            .await?
            .ok_or_else(Error::not_found)
    }
}
