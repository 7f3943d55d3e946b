//! Request handlers.
//!
//! Each submodule provides async handler functions for one area of the API.
//! Handlers delegate to `muse_pipeline`, `muse_core` or the GraphQL schema
//! and map errors via [`crate::error::AppError`].

pub mod controlnet;
pub mod graphql;
pub mod images;
pub mod pages;
pub mod processors;
