/// Project model and database operations
///
/// Projects group tasks. The creator is stamped from the authenticated
/// actor, and the member list is purely informational: no access check
/// anywhere consults it. Projects are never updated or deleted.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE projects (
///     id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
///     title VARCHAR(255) NOT NULL,
///     description TEXT NOT NULL DEFAULT '',
///     created_by UUID NOT NULL REFERENCES users(id),
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// );
///
/// CREATE TABLE project_members (
///     project_id UUID NOT NULL REFERENCES projects(id) ON DELETE CASCADE,
///     user_id UUID NOT NULL REFERENCES users(id) ON DELETE CASCADE,
///     created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
///     PRIMARY KEY (project_id, user_id)
/// );
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// Project model
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Project {
    /// Unique project ID
    pub id: Uuid,

    /// Project title
    pub title: String,

    /// Free-form description
    pub description: String,

    /// User who created the project
    pub created_by: Uuid,

    /// When the project was created
    pub created_at: DateTime<Utc>,

    /// When the project was last updated
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new project
#[derive(Debug, Clone)]
pub struct CreateProject {
    /// Project title
    pub title: String,

    /// Description (may be empty)
    pub description: String,

    /// Creator, taken from the authenticated actor
    pub created_by: Uuid,

    /// Initial members (informational only)
    pub members: Vec<Uuid>,
}

/// Member projection returned alongside a project listing
///
/// Matches the fields the listing populates: id, name, and email.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ProjectMember {
    /// User ID
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Email address
    pub email: String,
}

impl Project {
    /// Creates a new project along with its initial member rows
    ///
    /// The project insert and member inserts run in one transaction so a
    /// bad member reference cannot leave a half-created project behind.
    ///
    /// # Errors
    ///
    /// Returns an error if the creator or a member id does not exist, or
    /// the database operation fails.
    pub async fn create(pool: &PgPool, data: CreateProject) -> Result<Self, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let project = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (title, description, created_by)
            VALUES ($1, $2, $3)
            RETURNING id, title, description, created_by, created_at, updated_at
            "#,
        )
        .bind(data.title)
        .bind(data.description)
        .bind(data.created_by)
        .fetch_one(&mut *tx)
        .await?;

        for user_id in data.members {
            sqlx::query(
                r#"
                INSERT INTO project_members (project_id, user_id)
                VALUES ($1, $2)
                ON CONFLICT DO NOTHING
                "#,
            )
            .bind(project.id)
            .bind(user_id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(project)
    }

    /// Finds a project by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<Self>, sqlx::Error> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            SELECT id, title, description, created_by, created_at, updated_at
            FROM projects
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(project)
    }

    /// Lists all projects
    ///
    /// Visibility is not scoped by membership: every authenticated caller
    /// sees the full set. Ordered by creation date, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Self>, sqlx::Error> {
        let projects = sqlx::query_as::<_, Project>(
            r#"
            SELECT id, title, description, created_by, created_at, updated_at
            FROM projects
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(projects)
    }

    /// Lists the members of a project projected to `{id, name, email}`
    pub async fn members(pool: &PgPool, project_id: Uuid) -> Result<Vec<ProjectMember>, sqlx::Error> {
        let members = sqlx::query_as::<_, ProjectMember>(
            r#"
            SELECT u.id, u.name, u.email
            FROM project_members pm
            JOIN users u ON u.id = pm.user_id
            WHERE pm.project_id = $1
            ORDER BY u.name ASC
            "#,
        )
        .bind(project_id)
        .fetch_all(pool)
        .await?;

        Ok(members)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_project_struct() {
        let create = CreateProject {
            title: "Launch".to_string(),
            description: "Q3 launch work".to_string(),
            created_by: Uuid::new_v4(),
            members: vec![],
        };

        assert_eq!(create.title, "Launch");
        assert!(create.members.is_empty());
    }

    #[test]
    fn test_project_member_serializes_email() {
        let member = ProjectMember {
            id: Uuid::new_v4(),
            name: "Sam".to_string(),
            email: "sam@example.com".to_string(),
        };

        let json = serde_json::to_string(&member).unwrap();
        assert!(json.contains("sam@example.com"));
    }

    // Integration tests for database operations require a running Postgres
    // and live in the api crate's test setup.
}
