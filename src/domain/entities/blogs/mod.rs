pub mod blog;

pub use blog::{Blog, BlogStatus};
