//! Shared helpers for service and model tests. Every test gets its own
//! temporary directory holding both the SQLite file and the upload dir,
//! so tests never observe each other.
use chrono::{Duration, Utc};
use std::num::{NonZeroU32, NonZeroU64};
use tempfile::TempDir;

use crate::config;
use crate::models::id::PostId;
use crate::models::{Post, SavedPost};
use crate::uploads::ImageUpload;
use crate::App;

/// Builds an [`App`] backed by a fresh file-based SQLite database with
/// migrations applied. Keep the returned [`TempDir`] alive for the whole
/// test; dropping it deletes the database and upload directory.
pub async fn build_test_app() -> (App, TempDir) {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("test.db");

    let cfg = config::Server {
        ip: "127.0.0.1".parse().unwrap(),
        port: 0,
        workers: 1,
        db: config::Database {
            url: format!("sqlite://{}", db_path.display()),
            pool_size: NonZeroU32::new(1).unwrap(),
            timeout_secs: NonZeroU64::new(5).unwrap(),
        },
        auth: config::AdminAuth::default(),
        uploads: config::Uploads {
            dir: dir.path().join("uploads"),
            public_prefix: "/uploads".to_string(),
        },
    };

    let app = App::new(cfg).await.unwrap();
    (app, dir)
}

/// Inserts a post directly, bypassing the service layer.
pub fn seed_post(app: &App) -> SeedPost<'_> {
    SeedPost {
        app,
        title: None,
        is_active: true,
        age_secs: 0,
        thumbnail_url: "/uploads/seeded.jpg".to_string(),
    }
}

pub struct SeedPost<'a> {
    app: &'a App,
    title: Option<String>,
    is_active: bool,
    age_secs: i64,
    thumbnail_url: String,
}

impl SeedPost<'_> {
    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Backdates `created_at` to force a feed ordering.
    pub fn age_secs(mut self, age_secs: i64) -> Self {
        self.age_secs = age_secs;
        self
    }

    pub fn thumbnail_url(mut self, thumbnail_url: &str) -> Self {
        self.thumbnail_url = thumbnail_url.to_string();
        self
    }

    pub async fn call(self) -> Post {
        let mut conn = self.app.db().await.unwrap();
        let created_at = Utc::now().naive_utc() - Duration::seconds(self.age_secs);

        sqlx::query_as::<_, Post>(
            "INSERT INTO posts (id, facebook_url, title, description, thumbnail_url, is_active, created_at) \
             VALUES (?, ?, ?, NULL, ?, ?, ?) RETURNING *",
        )
        .bind(PostId::generate())
        .bind("https://www.facebook.com/share/p/seeded")
        .bind(self.title)
        .bind(self.thumbnail_url)
        .bind(self.is_active)
        .bind(created_at)
        .fetch_one(&mut *conn)
        .await
        .unwrap()
    }
}

/// Inserts a saved marker directly, backdated by `age_secs`.
pub async fn seed_saved(app: &App, post_id: PostId, age_secs: i64) -> SavedPost {
    let mut conn = app.db().await.unwrap();
    let saved_at = Utc::now().naive_utc() - Duration::seconds(age_secs);

    sqlx::query_as::<_, SavedPost>(
        "INSERT INTO saved_posts (id, post_id, saved_at) VALUES (?, ?, ?) RETURNING *",
    )
    .bind(crate::models::id::SavedPostId::generate())
    .bind(post_id)
    .bind(saved_at)
    .fetch_one(&mut *conn)
    .await
    .unwrap()
}

pub fn jpeg_upload(len: usize) -> ImageUpload {
    ImageUpload {
        file_name: Some("photo.jpg".to_string()),
        content_type: Some(mime::IMAGE_JPEG),
        data: vec![0xAB; len],
    }
}

pub fn png_upload(len: usize) -> ImageUpload {
    ImageUpload {
        file_name: Some("shot.png".to_string()),
        content_type: Some(mime::IMAGE_PNG),
        data: vec![0xCD; len],
    }
}

/// A detached [`Post`] value for tests that never touch the database.
pub fn sample_post(id: PostId) -> Post {
    Post {
        id,
        facebook_url: "https://www.facebook.com/share/p/sample".to_string(),
        title: Some("Sample".to_string()),
        description: None,
        thumbnail_url: "/uploads/sample.jpg".to_string(),
        is_active: true,
        created_at: Utc::now().naive_utc(),
    }
}

pub async fn list_all_posts(app: &App) -> Vec<Post> {
    let mut conn = app.db().await.unwrap();
    Post::list(&mut conn, false).await.unwrap()
}

pub async fn list_saved_markers(app: &App) -> Vec<SavedPost> {
    let mut conn = app.db().await.unwrap();
    SavedPost::list(&mut conn).await.unwrap()
}

pub async fn count_saved(app: &App, post_id: PostId) -> i64 {
    let mut conn = app.db().await.unwrap();
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM saved_posts WHERE post_id = ?")
        .bind(post_id)
        .fetch_one(&mut *conn)
        .await
        .unwrap()
}

pub fn upload_dir_is_empty(app: &App) -> bool {
    match std::fs::read_dir(&app.config.uploads.dir) {
        Ok(mut entries) => entries.next().is_none(),
        Err(_) => true,
    }
}
