//! GraphQL surface for paintings.
//!
//! Field and argument names follow the schema existing clients were built
//! against (`allPaintings`, `painting(paintingId)`, `createPainting`,
//! `updatePainting`). Errors carry a `code` extension matching the REST
//! error codes.

pub mod mutation;
pub mod query;
pub mod types;

use async_graphql::{EmptySubscription, Schema};
use muse_db::DbPool;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

pub type PaintingSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with the pool available to resolvers as context data.
pub fn build_schema(pool: DbPool) -> PaintingSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(pool)
        .finish()
}

/// The pool stored by [`build_schema`].
pub(crate) fn pool<'a>(ctx: &async_graphql::Context<'a>) -> async_graphql::Result<&'a DbPool> {
    ctx.data::<DbPool>()
}
