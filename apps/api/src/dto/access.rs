use scaleflow_application::{CapabilitySummary, ShiftAccess, UserAccess};
use scaleflow_core::{AppError, AppResult};
use scaleflow_domain::{
    AccessGate, AppRoute, Capability, CapabilitySet, GateOutcome, Role, RouteDecision, Shift,
};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Capability flags of one role.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/capability-flags-response.ts"
)]
pub struct CapabilityFlagsResponse {
    pub can_manage_company: bool,
    pub can_manage_schedules: bool,
    pub can_manage_employees: bool,
    pub can_view_employees: bool,
    pub can_approve_swaps: bool,
    pub can_approve_preferences: bool,
    pub can_view_reports: bool,
    pub can_access_admin: bool,
}

impl From<CapabilitySet> for CapabilityFlagsResponse {
    fn from(value: CapabilitySet) -> Self {
        Self {
            can_manage_company: value.can_manage_company,
            can_manage_schedules: value.can_manage_schedules,
            can_manage_employees: value.can_manage_employees,
            can_view_employees: value.can_view_employees,
            can_approve_swaps: value.can_approve_swaps,
            can_approve_preferences: value.can_approve_preferences,
            can_view_reports: value.can_view_reports,
            can_access_admin: value.can_access_admin,
        }
    }
}

/// Capabilities, assignable roles and reachable routes of the caller.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/capability-summary-response.ts"
)]
pub struct CapabilitySummaryResponse {
    pub role: Option<String>,
    pub capabilities: CapabilityFlagsResponse,
    pub capability_tags: Vec<String>,
    pub assignable_roles: Vec<String>,
    pub accessible_routes: Vec<String>,
}

impl From<CapabilitySummary> for CapabilitySummaryResponse {
    fn from(value: CapabilitySummary) -> Self {
        Self {
            role: value.role.map(|role| role.as_str().to_owned()),
            capabilities: CapabilityFlagsResponse::from(value.capabilities),
            capability_tags: value
                .capability_tags
                .into_iter()
                .map(str::to_owned)
                .collect(),
            assignable_roles: role_names(&value.assignable_roles),
            accessible_routes: value
                .accessible_routes
                .iter()
                .map(|route| route.path().to_owned())
                .collect(),
        }
    }
}

/// Query for a route guard check.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/route-access-query.ts"
)]
pub struct RouteAccessQuery {
    pub path: String,
}

/// Route guard outcome.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/route-access-response.ts"
)]
pub struct RouteAccessResponse {
    pub route: String,
    pub allowed: bool,
    pub denial: Option<String>,
    pub redirect_to: Option<String>,
}

impl RouteAccessResponse {
    pub fn new(route: AppRoute, decision: RouteDecision) -> Self {
        let denial = decision.denial();
        Self {
            route: route.path().to_owned(),
            allowed: decision.is_allowed(),
            denial: denial.map(|value| value.as_str().to_owned()),
            redirect_to: denial.map(|value| value.redirect_path().to_owned()),
        }
    }
}

/// Incoming payload describing a gated control.
#[derive(Debug, Default, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/gate-request.ts"
)]
pub struct GateRequest {
    pub allowed_roles: Option<Vec<String>>,
    pub required_capabilities: Option<Vec<String>>,
    pub disable_instead: Option<bool>,
    pub tooltip: Option<String>,
    pub has_fallback: Option<bool>,
}

impl GateRequest {
    pub fn into_gate(self) -> AppResult<AccessGate> {
        let allowed_roles = self
            .allowed_roles
            .map(|roles| {
                roles
                    .iter()
                    .map(|value| Role::from_transport(value.as_str()))
                    .collect::<Result<Vec<_>, AppError>>()
            })
            .transpose()?;

        let required_capabilities = self
            .required_capabilities
            .unwrap_or_default()
            .iter()
            .map(|value| Capability::from_transport(value.as_str()))
            .collect::<Result<Vec<_>, AppError>>()?;

        Ok(AccessGate {
            allowed_roles,
            required_capabilities,
            disable_instead: self.disable_instead.unwrap_or(false),
            tooltip: self.tooltip.filter(|value| !value.trim().is_empty()),
            has_fallback: self.has_fallback.unwrap_or(false),
        })
    }
}

/// Gate outcome.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/gate-response.ts"
)]
pub struct GateResponse {
    pub outcome: String,
    pub tooltip: Option<String>,
}

impl From<GateOutcome> for GateResponse {
    fn from(value: GateOutcome) -> Self {
        let (outcome, tooltip) = match value {
            GateOutcome::Render => ("render", None),
            GateOutcome::RenderDisabled { tooltip } => ("render_disabled", tooltip),
            GateOutcome::RenderFallback { tooltip } => ("render_fallback", tooltip),
            GateOutcome::Hidden => ("hidden", None),
        };

        Self {
            outcome: outcome.to_owned(),
            tooltip,
        }
    }
}

/// Caller permissions on one shift.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/shift-access-response.ts"
)]
pub struct ShiftAccessResponse {
    pub shift_id: String,
    pub can_view: bool,
    pub can_modify: bool,
    pub can_approve_swap: bool,
}

impl From<ShiftAccess> for ShiftAccessResponse {
    fn from(value: ShiftAccess) -> Self {
        Self {
            shift_id: value.shift_id.to_string(),
            can_view: value.can_view,
            can_modify: value.can_modify,
            can_approve_swap: value.can_approve_swap,
        }
    }
}

/// API representation of a shift.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/shift-response.ts"
)]
pub struct ShiftResponse {
    pub shift_id: String,
    pub company_id: String,
    pub employee_id: Option<String>,
    pub starts_at: String,
    pub ends_at: String,
    pub position: Option<String>,
    pub notes: Option<String>,
    pub is_published: bool,
}

impl From<Shift> for ShiftResponse {
    fn from(value: Shift) -> Self {
        Self {
            shift_id: value.id().to_string(),
            company_id: value.company_id().to_string(),
            employee_id: value.employee_id().map(|id| id.to_string()),
            starts_at: value.starts_at().to_rfc3339(),
            ends_at: value.ends_at().to_rfc3339(),
            position: value.position().map(str::to_owned),
            notes: value.notes().map(str::to_owned),
            is_published: value.is_published(),
        }
    }
}

/// Caller permissions on one user.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/user-access-response.ts"
)]
pub struct UserAccessResponse {
    pub user_id: String,
    pub can_manage: bool,
    pub assignable_roles: Vec<String>,
}

impl From<UserAccess> for UserAccessResponse {
    fn from(value: UserAccess) -> Self {
        Self {
            user_id: value.user_id.to_string(),
            can_manage: value.can_manage,
            assignable_roles: role_names(&value.assignable_roles),
        }
    }
}

/// Incoming payload for a role change check.
#[derive(Debug, Deserialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/assign-role-request.ts"
)]
pub struct AssignRoleRequest {
    pub role: String,
}

fn role_names(roles: &[Role]) -> Vec<String> {
    roles.iter().map(|role| role.as_str().to_owned()).collect()
}
