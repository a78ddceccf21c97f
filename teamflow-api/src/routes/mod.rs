/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `health`: Health check endpoint
/// - `auth`: Authentication endpoints (register, login, refresh)
/// - `users`: User directory (admin only)
/// - `projects`: Project creation and listing
/// - `tasks`: Task creation, listing, and status workflow

pub mod health;
pub mod auth;
pub mod users;
pub mod projects;
pub mod tasks;
