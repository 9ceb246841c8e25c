use std::sync::Arc;

use scaleflow_core::{AppError, AppResult, CompanyId};
use scaleflow_domain::{ActorContext, AppRoute, CapabilitySet, Role, ShiftId, UserId};
use tracing::warn;

use crate::DirectoryRepository;

mod approvals;
mod people;
mod shifts;
mod summary;

#[cfg(test)]
mod tests;

/// Everything the front end needs to render navigation and gates for one actor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilitySummary {
    /// Role of the actor.
    pub role: Option<Role>,
    /// Capability flags of the role.
    pub capabilities: CapabilitySet,
    /// Capability tags for display.
    pub capability_tags: Vec<&'static str>,
    /// Roles the actor may hand out.
    pub assignable_roles: Vec<Role>,
    /// Routes the actor may open.
    pub accessible_routes: Vec<AppRoute>,
}

/// Resolved permissions of an actor on one shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftAccess {
    /// Shift the flags apply to.
    pub shift_id: ShiftId,
    /// Actor may see the shift.
    pub can_view: bool,
    /// Actor may edit or delete the shift.
    pub can_modify: bool,
    /// Actor may approve swap requests on the shift.
    pub can_approve_swap: bool,
}

/// Resolved permissions of an actor on one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccess {
    /// User the flags apply to.
    pub user_id: UserId,
    /// Actor may edit the user.
    pub can_manage: bool,
    /// Roles the actor may give this user.
    pub assignable_roles: Vec<Role>,
}

/// Application service for company-scoped permission checks.
///
/// Predicates come from [`scaleflow_domain::policy`]; this service only
/// resolves the ownership metadata of the target record first.
#[derive(Clone)]
pub struct AuthorizationService {
    repository: Arc<dyn DirectoryRepository>,
}

impl AuthorizationService {
    /// Creates a new authorization service from a repository implementation.
    #[must_use]
    pub fn new(repository: Arc<dyn DirectoryRepository>) -> Self {
        Self { repository }
    }
}

fn forbidden(actor: &ActorContext, action: &str) -> AppError {
    warn!(
        role = actor.role_label(),
        user_id = ?actor.user_id,
        company_id = ?actor.company_id,
        action,
        "permission denied"
    );

    AppError::Forbidden(format!(
        "role '{}' may not {action}",
        actor.role_label()
    ))
}

fn company_label(company_id: Option<CompanyId>) -> String {
    company_id.map_or_else(|| "none".to_owned(), |value| value.to_string())
}
