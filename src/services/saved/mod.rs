mod list;
mod save;
mod unsave;

pub use list::ListSavedPosts;
pub use save::SavePost;
pub use unsave::UnsavePost;
