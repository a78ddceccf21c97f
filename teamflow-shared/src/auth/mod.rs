/// Authentication utilities
///
/// This module provides the credential-verification primitives for TeamFlow:
///
/// # Modules
///
/// - [`password`]: Argon2id password hashing and strength validation
/// - [`jwt`]: JWT token generation and validation (user id + role claims)
/// - [`middleware`]: Axum middleware extracting a verified `AuthContext`
///
/// # Security Features
///
/// - **Password Hashing**: Argon2id with 64 MB memory, 3 iterations
/// - **JWT Tokens**: HS256 signing with access/refresh expirations
/// - **Constant-time Comparison**: password verification never short-circuits
///
/// Authorization decisions do not live here; they belong to the
/// [`crate::policy`] module, which consumes the actor facts these utilities
/// establish.

pub mod jwt;
pub mod middleware;
pub mod password;
