//! # Blog-list Backend
//!
//! A minimal CRUD backend for a blog-listing application. Blog entries
//! (title, author, url, likes) are persisted through a pluggable
//! repository and exposed over a REST API via axum, together with a set
//! of pure aggregation functions computing derived statistics over a
//! collection of blogs.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Domain types shared by storage, aggregation and HTTP
//! - [`db`]: Repository pattern, storage backends and the service layer
//! - [`services`]: Pure aggregation functions (total likes, favorite
//!   blog, most blogs, most likes)
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod api;

pub mod db;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;

#[cfg(test)]
#[path = "api_tests.rs"]
mod api_tests;
