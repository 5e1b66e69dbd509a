use crate::database::SqlxErrorExt;
use crate::http::Error;
use crate::models::id::PostId;
use crate::models::saved_post::InsertSavedPost;
use crate::models::{Post, SavedPost};
use crate::types;
use crate::App;

/// Creates a saved marker for an existing post.
///
/// The existence check runs inside a transaction and the table carries a
/// unique constraint on `post_id`, so two overlapping saves for the same
/// post cannot both land; the loser gets the same conflict error the
/// check produces.
#[derive(Debug)]
pub struct SavePost {
    pub post_id: PostId,
}

impl SavePost {
    #[tracing::instrument(skip_all, name = "services.saved.save")]
    pub async fn perform(self, app: &App) -> Result<SavedPost, Error> {
        let mut tx = app.db_transaction().await?;

        if Post::find(&mut tx, self.post_id).await?.is_none() {
            return Err(Error::not_found());
        }

        if SavedPost::find_by_post(&mut tx, self.post_id).await?.is_some() {
            return Err(Error::new(types::Error::AlreadySaved));
        }

        let saved = InsertSavedPost {
            post_id: self.post_id,
        }
        .insert(&mut tx)
        .await?;

        tx.commit().await.into_db_error()?;
        Ok(saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils;

    #[tokio::test]
    async fn saves_an_existing_post() {
        let (app, _guard) = test_utils::build_test_app().await;
        let post = test_utils::seed_post(&app).call().await;

        let saved = SavePost { post_id: post.id }.perform(&app).await.unwrap();
        assert_eq!(saved.post_id, post.id);
    }

    #[tokio::test]
    async fn saving_twice_is_a_conflict_with_a_single_row() {
        let (app, _guard) = test_utils::build_test_app().await;
        let post = test_utils::seed_post(&app).call().await;

        SavePost { post_id: post.id }.perform(&app).await.unwrap();
        let error = SavePost { post_id: post.id }
            .perform(&app)
            .await
            .unwrap_err();
        assert_eq!(error.as_type(), &types::Error::AlreadySaved);

        assert_eq!(test_utils::count_saved(&app, post.id).await, 1);
    }

    #[tokio::test]
    async fn unique_constraint_backstops_the_existence_check() {
        let (app, _guard) = test_utils::build_test_app().await;
        let post = test_utils::seed_post(&app).call().await;

        // bypass the service-level check entirely
        let mut conn = app.db().await.unwrap();
        let insert = InsertSavedPost { post_id: post.id };
        insert.insert(&mut conn).await.unwrap();

        let report = insert.insert(&mut conn).await.unwrap_err();
        assert!(matches!(
            report.current_context(),
            crate::models::saved_post::InsertSavedPostError::AlreadySaved
        ));
        drop(conn);
        assert_eq!(test_utils::count_saved(&app, post.id).await, 1);
    }

    #[tokio::test]
    async fn saving_an_unknown_post_is_not_found() {
        let (app, _guard) = test_utils::build_test_app().await;
        let error = SavePost {
            post_id: PostId::generate(),
        }
        .perform(&app)
        .await
        .unwrap_err();
        assert_eq!(error.as_type(), &types::Error::NotFound);
        assert!(test_utils::list_saved_markers(&app).await.is_empty());
    }
}
