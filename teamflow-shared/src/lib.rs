//! # TeamFlow Shared Library
//!
//! This crate contains shared types, business rules, and utilities used by
//! the TeamFlow API server.
//!
//! ## Module Organization
//!
//! - `models`: Database models and data structures
//! - `auth`: Password hashing, JWT tokens, and auth middleware
//! - `policy`: Authorization and task-lifecycle decision layer
//! - `db`: Connection pool, shared pool handle, and migrations

pub mod auth;
pub mod db;
pub mod models;
pub mod policy;

/// Current version of the TeamFlow shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
