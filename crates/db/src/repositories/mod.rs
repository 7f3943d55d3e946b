//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod image_repo;
pub mod painting_repo;
pub mod user_repo;

pub use image_repo::ImageRepo;
pub use painting_repo::PaintingRepo;
pub use user_repo::UserRepo;
