/// User directory endpoint
///
/// Lists all users for assignment and directory purposes. Admin only: the
/// policy layer denies members before the store is touched. Results are
/// projected to `{id, name, role}` so credentials and email addresses never
/// leave the server.
///
/// # Endpoints
///
/// - `GET /v1/users` - List all users (admin only)

use crate::{app::AppState, error::ApiResult};
use axum::{extract::State, Extension, Json};
use serde::Serialize;
use teamflow_shared::{
    auth::middleware::AuthContext,
    models::user::{User, UserSummary},
    policy,
};

/// User listing response
#[derive(Debug, Serialize)]
pub struct ListUsersResponse {
    /// All users projected to id, name, and role
    pub users: Vec<UserSummary>,
}

/// List all users (admin only)
///
/// # Errors
///
/// - `403 Forbidden`: Caller is not an admin
pub async fn list_users(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> ApiResult<Json<ListUsersResponse>> {
    // Policy check before any store access
    policy::require_user_listing(auth.role)?;

    let users = User::list_summaries(&state.db).await?;

    Ok(Json(ListUsersResponse { users }))
}
