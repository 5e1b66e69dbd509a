mod create;
mod delete;
mod list;
mod set_active;

pub use create::CreatePost;
pub use delete::DeletePost;
pub use list::ListPosts;
pub use set_active::SetPostActive;
