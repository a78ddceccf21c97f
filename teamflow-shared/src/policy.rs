/// Authorization and task-lifecycle policy
///
/// This module is the decision layer consulted by every request handler. It
/// answers two questions: may this actor perform the requested operation,
/// and — for status updates — what is the next legal task status.
///
/// The policy is pure and stateless: it performs no I/O, holds no shared
/// state, and operates only on facts the caller has already resolved
/// (actor id and role, loaded task fields). Callers must resolve existence
/// first; a missing task is a not-found failure, never a policy denial.
///
/// # Permission Model
///
/// Role is the sole axis of authorization:
///
/// - **admin**: may list users, create tasks, and advance any task
/// - **member**: may create/list projects and tasks like anyone, but may
///   advance only a task assigned to them
///
/// Project membership is informational and never consulted here.
///
/// # Example
///
/// ```
/// use teamflow_shared::models::user::Role;
/// use teamflow_shared::models::task::TaskStatus;
/// use teamflow_shared::policy::{self, Actor};
/// use uuid::Uuid;
///
/// let member = Actor { id: Uuid::new_v4(), role: Role::Member };
///
/// // Members cannot create tasks
/// assert!(policy::require_task_creation(member.role).is_err());
///
/// // But a member may advance a task assigned to them
/// let next = policy::plan_status_update(&member, TaskStatus::Todo, Some(member.id)).unwrap();
/// assert_eq!(next, TaskStatus::InProgress);
/// ```

use uuid::Uuid;

use crate::models::task::TaskStatus;
use crate::models::user::Role;

/// The authenticated user issuing a request
///
/// Carries exactly the facts the policy needs: identifier and role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    /// User ID
    pub id: Uuid,

    /// Role from the verified credentials
    pub role: Role,
}

/// Error type for policy denials
///
/// Every variant maps to an authorization failure at the boundary (HTTP
/// 403), distinct from not-found and validation failures. The display
/// strings are the externally visible denial reasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PolicyError {
    /// Actor's role or ownership does not permit the operation
    #[error("Forbidden")]
    Forbidden,

    /// Task creation is restricted to admins
    #[error("Only admin can add tasks")]
    AdminOnly,
}

/// Checks whether the actor may list users
///
/// Admin only. On allow, the caller must project users to
/// `{id, name, role}` — credentials are never included.
pub fn require_user_listing(role: Role) -> Result<(), PolicyError> {
    match role {
        Role::Admin => Ok(()),
        Role::Member => Err(PolicyError::Forbidden),
    }
}

/// Checks whether the actor may create a project
///
/// Any authenticated actor may; there is no role restriction. The caller
/// stamps the creator field from the actor's id regardless of role.
pub fn require_project_creation(role: Role) -> Result<(), PolicyError> {
    match role {
        Role::Admin | Role::Member => Ok(()),
    }
}

/// Checks whether the actor may list projects
///
/// Any authenticated actor may, and the result set is not filtered by
/// membership. Scoping "my projects" is a presentation concern.
pub fn require_project_listing(role: Role) -> Result<(), PolicyError> {
    match role {
        Role::Admin | Role::Member => Ok(()),
    }
}

/// Checks whether the actor may list the tasks of a project
///
/// Unconditional for any authenticated actor.
pub fn require_task_listing(role: Role) -> Result<(), PolicyError> {
    match role {
        Role::Admin | Role::Member => Ok(()),
    }
}

/// Checks whether the actor may create a task
///
/// Admin only; members are denied with the task-creation reason.
pub fn require_task_creation(role: Role) -> Result<(), PolicyError> {
    match role {
        Role::Admin => Ok(()),
        Role::Member => Err(PolicyError::AdminOnly),
    }
}

/// Checks whether the actor may advance a task's status
///
/// Admins may advance any task. A member may advance only a task explicitly
/// assigned to them; an unassigned task is never updatable by a member.
///
/// The caller must have loaded the task already — existence is checked
/// before this function is reached.
pub fn require_status_update(actor: &Actor, assignee_id: Option<Uuid>) -> Result<(), PolicyError> {
    match actor.role {
        Role::Admin => Ok(()),
        Role::Member => {
            if assignee_id == Some(actor.id) {
                Ok(())
            } else {
                Err(PolicyError::Forbidden)
            }
        }
    }
}

/// Authorizes a status update and computes the next legal status
///
/// Combined form of [`require_status_update`] and [`TaskStatus::next`]:
/// the allow/deny decision plus the computed next status in one call. The
/// only supported mutation is "advance one step"; callers never pass an
/// arbitrary target.
pub fn plan_status_update(
    actor: &Actor,
    current: TaskStatus,
    assignee_id: Option<Uuid>,
) -> Result<TaskStatus, PolicyError> {
    require_status_update(actor, assignee_id)?;
    Ok(current.next())
}
