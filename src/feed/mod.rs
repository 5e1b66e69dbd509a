use std::collections::HashSet;

use crate::models::id::PostId;
use crate::models::{Post, SavedPost, SavedPostView};
use crate::services::saved::{ListSavedPosts, SavePost, UnsavePost};
use crate::App;

/// Backing store for the saved list, abstracted so the view state can be
/// driven by the real service layer or a test double.
#[allow(async_fn_in_trait)]
pub trait SavedStore {
    type Error;

    async fn fetch_saved(&self) -> Result<Vec<SavedPostView>, Self::Error>;
    async fn save(&self, post_id: PostId) -> Result<SavedPost, Self::Error>;
    async fn unsave(&self, post_id: PostId) -> Result<(), Self::Error>;
}

impl SavedStore for App {
    type Error = crate::http::Error;

    async fn fetch_saved(&self) -> Result<Vec<SavedPostView>, Self::Error> {
        ListSavedPosts.perform(self).await
    }

    async fn save(&self, post_id: PostId) -> Result<SavedPost, Self::Error> {
        SavePost { post_id }.perform(self).await
    }

    async fn unsave(&self, post_id: PostId) -> Result<(), Self::Error> {
        UnsavePost { post_id }.perform(self).await
    }
}

/// The two mutually exclusive feed views. Switching between them is pure
/// local state; no fetch is involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    Saved,
}

/// Outcome of a toggle request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// The toggle ran and the saved list was reconciled.
    Applied,
    /// A toggle for the same post is still in flight; nothing happened.
    /// Toggles for other posts are not blocked.
    InFlight,
}

/// View state for the home/saved feed.
///
/// Saved ids are flipped optimistically for instant feedback, then the
/// authoritative saved list is re-fetched to reconcile. A failing store
/// call rolls the optimistic flip back.
#[derive(Debug)]
pub struct FeedState<S> {
    store: S,
    view: View,
    home: Vec<Post>,
    saved: Vec<SavedPostView>,
    saved_ids: HashSet<PostId>,
    in_flight: HashSet<PostId>,
}

impl<S: SavedStore> FeedState<S> {
    pub fn new(store: S, initial_posts: Vec<Post>) -> Self {
        Self {
            store,
            view: View::Home,
            home: initial_posts,
            saved: Vec::new(),
            saved_ids: HashSet::new(),
            in_flight: HashSet::new(),
        }
    }

    /// Fetches the saved list. Runs on every mount regardless of the
    /// initial view.
    pub async fn mount(&mut self) -> Result<(), S::Error> {
        self.refresh_saved().await
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn switch_view(&mut self, view: View) {
        self.view = view;
    }

    pub fn visible_posts(&self) -> Vec<&Post> {
        match self.view {
            View::Home => self.home.iter().collect(),
            View::Saved => self.saved.iter().map(|v| &v.post).collect(),
        }
    }

    pub fn is_saved(&self, post_id: PostId) -> bool {
        self.saved_ids.contains(&post_id)
    }

    pub fn is_toggling(&self, post_id: PostId) -> bool {
        self.in_flight.contains(&post_id)
    }

    /// Saves or unsaves a post depending on its current local state.
    pub async fn toggle_save(&mut self, post_id: PostId) -> Result<Toggle, S::Error> {
        if !self.in_flight.insert(post_id) {
            return Ok(Toggle::InFlight);
        }

        let was_saved = self.saved_ids.contains(&post_id);
        self.flip(post_id, !was_saved);

        let result = if was_saved {
            self.store.unsave(post_id).await
        } else {
            self.store.save(post_id).await.map(drop)
        };

        let outcome = match result {
            Ok(()) => self.refresh_saved().await.map(|()| Toggle::Applied),
            Err(error) => {
                self.flip(post_id, was_saved);
                Err(error)
            }
        };

        self.in_flight.remove(&post_id);
        outcome
    }

    fn flip(&mut self, post_id: PostId, saved: bool) {
        if saved {
            self.saved_ids.insert(post_id);
        } else {
            self.saved_ids.remove(&post_id);
        }
    }

    async fn refresh_saved(&mut self) -> Result<(), S::Error> {
        let views = self.store.fetch_saved().await?;
        self.saved_ids = views.iter().map(|v| v.post.id).collect();
        self.saved = views;
        Ok(())
    }
}
