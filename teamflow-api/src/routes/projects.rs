/// Project endpoints
///
/// Any authenticated user may create and list projects. The creator is
/// always stamped from the authenticated actor, never taken from the
/// request body. Member lists are informational; they grant no access.
///
/// # Endpoints
///
/// - `POST /v1/projects` - Create a project
/// - `GET /v1/projects` - List all projects with their members

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};
use teamflow_shared::{
    auth::middleware::AuthContext,
    models::project::{CreateProject, Project, ProjectMember},
    policy,
};
use uuid::Uuid;
use validator::Validate;

/// Create project request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProjectRequest {
    /// Project title
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    /// Free-form description
    #[serde(default)]
    pub description: String,

    /// Initial member user IDs (informational only)
    #[serde(default)]
    pub members: Vec<Uuid>,
}

/// A project together with its member projection
#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    /// The project itself
    #[serde(flatten)]
    pub project: Project,

    /// Members projected to id, name, and email
    pub members: Vec<ProjectMember>,
}

/// Project listing response
#[derive(Debug, Serialize)]
pub struct ListProjectsResponse {
    /// All projects, newest first
    pub projects: Vec<ProjectResponse>,
}

/// Create a new project
///
/// The authenticated actor becomes the creator regardless of role.
///
/// # Errors
///
/// - `422 Unprocessable Entity`: Validation failed
/// - `500 Internal Server Error`: A member reference is invalid
pub async fn create_project(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(req): Json<CreateProjectRequest>,
) -> ApiResult<Json<ProjectResponse>> {
    policy::require_project_creation(auth.role)?;

    req.validate().map_err(ApiError::from_validation)?;

    let project = Project::create(
        &state.db,
        CreateProject {
            title: req.title,
            description: req.description,
            created_by: auth.user_id,
            members: req.members,
        },
    )
    .await?;

    let members = Project::members(&state.db, project.id).await?;

    Ok(Json(ProjectResponse { project, members }))
}

/// List all projects with their members
///
/// Visibility is not scoped by membership: every authenticated caller sees
/// the full set.
pub async fn list_projects(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> ApiResult<Json<ListProjectsResponse>> {
    policy::require_project_listing(auth.role)?;

    let projects = Project::list(&state.db).await?;

    let mut responses = Vec::with_capacity(projects.len());
    for project in projects {
        let members = Project::members(&state.db, project.id).await?;
        responses.push(ProjectResponse { project, members });
    }

    Ok(Json(ListProjectsResponse {
        projects: responses,
    }))
}
