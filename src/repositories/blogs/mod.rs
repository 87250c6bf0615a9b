pub mod blog_repo;

pub use blog_repo::BlogRepository;
