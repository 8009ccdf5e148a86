//! Service layer for business logic over blog collections.
//!
//! This module contains the pure aggregation functions that compute
//! derived statistics over a list of blogs. They hold no state and do no
//! I/O; the HTTP layer applies them to whatever collection the repository
//! returns.

pub mod stats;

pub use stats::{favorite_blog, most_blogs, most_likes, total_likes};
