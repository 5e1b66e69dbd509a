use crate::http::Error;
use crate::models::id::PostId;
use crate::models::Post;
use crate::{uploads, App};

/// Removes a post and, when its thumbnail lives under the managed upload
/// directory, best-effort deletes the file as well. A failed file delete
/// never fails the overall operation.
#[derive(Debug)]
pub struct DeletePost {
    pub id: PostId,
}

impl DeletePost {
    #[tracing::instrument(skip_all, name = "services.posts.delete")]
    pub async fn perform(self, app: &App) -> Result<(), Error> {
        let mut conn = app.db().await?;

        let Some(post) = Post::find(&mut conn, self.id).await? else {
            return Err(Error::not_found());
        };

        uploads::remove_managed_file(&app.config.uploads, &post.thumbnail_url);

        Post::delete(&mut conn, self.id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils;
    use crate::types;

    #[tokio::test]
    async fn deletes_row_and_managed_thumbnail() {
        let (app, _guard) = test_utils::build_test_app().await;

        let image = test_utils::jpeg_upload(512);
        let thumbnail_url = image.store(&app.config.uploads).unwrap();
        let post = test_utils::seed_post(&app)
            .thumbnail_url(&thumbnail_url)
            .call()
            .await;

        let stored = uploads::managed_file_path(&app.config.uploads, &thumbnail_url).unwrap();
        assert!(stored.exists());

        DeletePost { id: post.id }.perform(&app).await.unwrap();

        assert!(!stored.exists());
        assert!(test_utils::list_all_posts(&app).await.is_empty());
    }

    #[tokio::test]
    async fn leaves_unmanaged_thumbnails_alone() {
        let (app, _guard) = test_utils::build_test_app().await;
        let post = test_utils::seed_post(&app)
            .thumbnail_url("https://example.com/elsewhere.png")
            .call()
            .await;

        DeletePost { id: post.id }.perform(&app).await.unwrap();
        assert!(test_utils::list_all_posts(&app).await.is_empty());
    }

    #[tokio::test]
    async fn survives_an_already_missing_thumbnail_file() {
        let (app, _guard) = test_utils::build_test_app().await;
        let post = test_utils::seed_post(&app)
            .thumbnail_url("/uploads/already-gone.jpg")
            .call()
            .await;

        DeletePost { id: post.id }.perform(&app).await.unwrap();
        assert!(test_utils::list_all_posts(&app).await.is_empty());
    }

    #[tokio::test]
    async fn unknown_id_is_not_found() {
        let (app, _guard) = test_utils::build_test_app().await;
        let error = DeletePost {
            id: PostId::generate(),
        }
        .perform(&app)
        .await
        .unwrap_err();
        assert_eq!(error.as_type(), &types::Error::NotFound);
    }
}
