/// Task endpoints
///
/// Task creation is admin only; listing is open to any authenticated user.
/// The status endpoint advances a task exactly one step along the linear
/// workflow (todo → in-progress → done); clients never send a target
/// status. Advancing a finished task is a no-op, not an error.
///
/// Existence is resolved before authorization for status updates: a missing
/// task is a 404 even for a caller who would have been denied, matching the
/// policy contract that denials only apply to tasks that exist.
///
/// # Endpoints
///
/// - `POST /v1/tasks` - Create a task (admin only)
/// - `GET /v1/tasks/:project_id` - List tasks in a project
/// - `PATCH /v1/tasks/:id/status` - Advance task status one step

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use teamflow_shared::{
    auth::middleware::AuthContext,
    models::{
        project::Project,
        task::{CreateTask, Task},
    },
    policy,
};
use uuid::Uuid;
use validator::Validate;

/// Create task request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTaskRequest {
    /// Task title
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,

    /// Project the task belongs to
    pub project_id: Uuid,

    /// Assignee (optional; an unassigned task can only be advanced by an admin)
    #[serde(default)]
    pub assigned_to: Option<Uuid>,
}

/// Task listing response
#[derive(Debug, Serialize)]
pub struct ListTasksResponse {
    /// Tasks in the project, oldest first
    pub tasks: Vec<Task>,
}

/// Create a new task (admin only)
///
/// New tasks always start in the `todo` state.
///
/// # Errors
///
/// - `403 Forbidden`: Caller is not an admin ("Only admin can add tasks")
/// - `422 Unprocessable Entity`: Validation failed
/// - `404 Not Found`: Project does not exist
pub async fn create_task(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Json(req): Json<CreateTaskRequest>,
) -> ApiResult<Json<Task>> {
    // Policy check before validation and store access
    policy::require_task_creation(auth.role)?;

    req.validate().map_err(ApiError::from_validation)?;

    // The project must exist before a task can be attached to it
    Project::find_by_id(&state.db, req.project_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Project not found".to_string()))?;

    let task = Task::create(
        &state.db,
        CreateTask {
            title: req.title,
            project_id: req.project_id,
            assigned_to: req.assigned_to,
        },
    )
    .await?;

    Ok(Json(task))
}

/// List all tasks in a project
pub async fn list_tasks(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(project_id): Path<Uuid>,
) -> ApiResult<Json<ListTasksResponse>> {
    policy::require_task_listing(auth.role)?;

    let tasks = Task::list_by_project(&state.db, project_id).await?;

    Ok(Json(ListTasksResponse { tasks }))
}

/// Advance a task's status one step
///
/// Admins may advance any task; a member only a task assigned to them. The
/// next status is computed server-side from the current one.
///
/// # Errors
///
/// - `404 Not Found`: Task does not exist
/// - `403 Forbidden`: Caller may not advance this task
pub async fn update_task_status(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<Task>> {
    // Existence first: a missing task is 404 before any policy decision
    let task = Task::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Task not found".to_string()))?;

    let next = policy::plan_status_update(&auth.actor(), task.status, task.assigned_to)?;

    let updated = Task::set_status(&state.db, task.id, next)
        .await?
        .ok_or_else(|| ApiError::NotFound("Task not found".to_string()))?;

    Ok(Json(updated))
}
