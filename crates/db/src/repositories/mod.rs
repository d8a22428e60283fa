//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod commentary;
pub mod matches;

pub use commentary::{CommentaryRepository, CreateCommentaryInput};
pub use matches::{CreateMatchInput, MatchRepository};
