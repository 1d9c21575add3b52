//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.

pub mod store;

pub use store::InMemoryPostStore;
