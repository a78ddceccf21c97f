/// Task model and database operations
///
/// Tasks are the unit of work inside a project. Their status follows a
/// strictly linear workflow; there is no backward transition, no jump, and
/// no task deletion.
///
/// # State Machine
///
/// ```text
/// todo → in-progress → done
///                      done (terminal, re-advancing is a no-op)
/// ```
///
/// # Schema
///
/// ```sql
/// CREATE TYPE task_status AS ENUM ('todo', 'in-progress', 'done');
///
/// CREATE TABLE tasks (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     title VARCHAR(255) NOT NULL,
///     status task_status NOT NULL DEFAULT 'todo',
///     project_id UUID NOT NULL REFERENCES projects(id) ON DELETE CASCADE,
///     assigned_to UUID REFERENCES users(id) ON DELETE SET NULL,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
/// ```
///
/// # Example
///
/// ```no_run
/// use teamflow_shared::models::task::{Task, CreateTask, TaskStatus};
/// use teamflow_shared::db::pool::{create_pool, DatabaseConfig};
/// use uuid::Uuid;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(DatabaseConfig::default()).await?;
///
/// let task = Task::create(&pool, CreateTask {
///     title: "Write copy".to_string(),
///     project_id: Uuid::new_v4(),
///     assigned_to: Some(Uuid::new_v4()),
/// }).await?;
/// assert_eq!(task.status, TaskStatus::Todo);
///
/// // Advance one step: todo → in-progress
/// Task::set_status(&pool, task.id, task.status.next()).await?;
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Task workflow status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "task_status", rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Not started (the initial state for every task)
    Todo,

    /// Being worked on
    InProgress,

    /// Finished (terminal)
    Done,
}

impl TaskStatus {
    /// Converts status to string for display
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Done => "done",
        }
    }

    /// Checks if the status is terminal
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskStatus::Done)
    }

    /// Returns the next status in the workflow
    ///
    /// This is the only legal transition: one step forward. `Done` maps to
    /// itself, so advancing a finished task is idempotent rather than an
    /// error.
    pub fn next(self) -> TaskStatus {
        match self {
            TaskStatus::Todo => TaskStatus::InProgress,
            TaskStatus::InProgress => TaskStatus::Done,
            TaskStatus::Done => TaskStatus::Done,
        }
    }
}

/// Task model
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Unique task ID
    pub id: Uuid,

    /// Task title
    pub title: String,

    /// Current workflow status
    pub status: TaskStatus,

    /// Project this task belongs to (required)
    pub project_id: Uuid,

    /// Assignee (nullable if the user was deleted)
    ///
    /// The sole non-admin actor allowed to advance the task. An unassigned
    /// task is never updatable by a member.
    pub assigned_to: Option<Uuid>,

    /// When the task was created
    pub created_at: DateTime<Utc>,

    /// When the task was last updated
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new task
#[derive(Debug, Clone)]
pub struct CreateTask {
    /// Task title
    pub title: String,

    /// Project the task belongs to
    pub project_id: Uuid,

    /// Assignee
    pub assigned_to: Option<Uuid>,
}

impl Task {
    /// Creates a new task in the `todo` state
    ///
    /// # Errors
    ///
    /// Returns an error if the project or assignee reference is invalid or
    /// the database operation fails.
    pub async fn create(pool: &PgPool, data: CreateTask) -> Result<Self, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (title, project_id, assigned_to)
            VALUES ($1, $2, $3)
            RETURNING id, title, status, project_id, assigned_to, created_at, updated_at
            "#,
        )
        .bind(data.title)
        .bind(data.project_id)
        .bind(data.assigned_to)
        .fetch_one(pool)
        .await?;

        Ok(task)
    }

    /// Finds a task by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, status, project_id, assigned_to, created_at, updated_at
            FROM tasks
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// Lists all tasks in a project
    pub async fn list_by_project(pool: &PgPool, project_id: Uuid) -> Result<Vec<Self>, sqlx::Error> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, title, status, project_id, assigned_to, created_at, updated_at
            FROM tasks
            WHERE project_id = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(project_id)
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }

    /// Persists a status computed by the policy layer
    ///
    /// Single-row write; concurrent updates to the same task are
    /// last-write-wins at the store, which is accepted for this workflow.
    pub async fn set_status(
        pool: &PgPool,
        id: Uuid,
        status: TaskStatus,
    ) -> Result<Option<Self>, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            UPDATE tasks
            SET status = $2,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, status, project_id, assigned_to, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }
}
