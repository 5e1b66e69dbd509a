use crate::http::Error;
use crate::models::Post;
use crate::App;

/// Lists posts newest first. The public feed asks for active posts only;
/// the admin dashboard sees everything.
#[derive(Debug)]
pub struct ListPosts {
    pub active_only: bool,
}

impl ListPosts {
    #[tracing::instrument(skip_all, name = "services.posts.list")]
    pub async fn perform(self, app: &App) -> Result<Vec<Post>, Error> {
        let mut conn = app.db().await?;
        let posts = Post::list(&mut conn, self.active_only).await?;
        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils;

    #[tokio::test]
    async fn inactive_posts_are_hidden_from_the_public_feed() {
        let (app, _guard) = test_utils::build_test_app().await;
        let active = test_utils::seed_post(&app)
            .title("active")
            .call()
            .await;
        let hidden = test_utils::seed_post(&app)
            .title("hidden")
            .is_active(false)
            .call()
            .await;

        let feed = ListPosts { active_only: true }.perform(&app).await.unwrap();
        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].id, active.id);

        let admin = ListPosts { active_only: false }.perform(&app).await.unwrap();
        assert_eq!(admin.len(), 2);
        assert!(admin.iter().any(|p| p.id == hidden.id));
    }

    #[tokio::test]
    async fn posts_are_ordered_newest_first() {
        let (app, _guard) = test_utils::build_test_app().await;
        let older = test_utils::seed_post(&app)
            .title("older")
            .age_secs(120)
            .call()
            .await;
        let newer = test_utils::seed_post(&app)
            .title("newer")
            .call()
            .await;

        let feed = ListPosts { active_only: true }.perform(&app).await.unwrap();
        assert_eq!(
            feed.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![newer.id, older.id]
        );
    }
}
