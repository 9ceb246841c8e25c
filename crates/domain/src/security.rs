use std::str::FromStr;

use scaleflow_core::{AppError, CompanyId};
use serde::{Deserialize, Serialize};

use crate::UserId;

/// Functional role held by a user. Every user holds exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Platform operator with cross-company reach.
    SystemAdmin,
    /// Company manager.
    Manager,
    /// Company operator, equivalent to a manager inside one company.
    Operator,
    /// Builds and publishes schedules without managing people.
    ScheduleManager,
    /// Staff member.
    Staff,
    /// Employee.
    Employee,
}

impl Role {
    /// Returns a stable transport value for this role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SystemAdmin => "system_admin",
            Self::Manager => "manager",
            Self::Operator => "operator",
            Self::ScheduleManager => "schedule_manager",
            Self::Staff => "staff",
            Self::Employee => "employee",
        }
    }

    /// Returns a human-readable label.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::SystemAdmin => "System Admin",
            Self::Manager => "Manager",
            Self::Operator => "Operator",
            Self::ScheduleManager => "Schedule Manager",
            Self::Staff => "Staff",
            Self::Employee => "Employee",
        }
    }

    /// Position in the management hierarchy. Higher outranks lower.
    #[must_use]
    pub fn rank(&self) -> u8 {
        match self {
            Self::SystemAdmin => 4,
            Self::Manager | Self::Operator => 3,
            Self::ScheduleManager => 2,
            Self::Staff | Self::Employee => 1,
        }
    }

    /// Returns all roles, highest rank first.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Role] = &[
            Role::SystemAdmin,
            Role::Manager,
            Role::Operator,
            Role::ScheduleManager,
            Role::Staff,
            Role::Employee,
        ];

        ALL
    }

    /// Parses a transport value into a role.
    pub fn from_transport(value: &str) -> Result<Self, AppError> {
        Self::from_str(value)
    }

    /// Parses a transport value, mapping unknown values to no role at all.
    #[must_use]
    pub fn from_transport_lenient(value: &str) -> Option<Self> {
        Self::from_str(value.trim()).ok()
    }
}

impl FromStr for Role {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "system_admin" => Ok(Self::SystemAdmin),
            "manager" => Ok(Self::Manager),
            "operator" => Ok(Self::Operator),
            "schedule_manager" => Ok(Self::ScheduleManager),
            "staff" => Ok(Self::Staff),
            "employee" => Ok(Self::Employee),
            _ => Err(AppError::Validation(format!("unknown role value '{value}'"))),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Named boolean capability attached to a role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Edit company settings.
    ManageCompany,
    /// Create, edit and publish shifts and templates.
    ManageSchedules,
    /// Invite, edit and re-role employees.
    ManageEmployees,
    /// Browse the employee directory.
    ViewEmployees,
    /// Approve or reject shift swap requests.
    ApproveSwaps,
    /// Approve or reject availability preferences.
    ApprovePreferences,
    /// Open reports.
    ViewReports,
    /// Open the platform admin area.
    AccessAdmin,
}

impl Capability {
    /// Returns a stable tag for this capability.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ManageCompany => "manage_company",
            Self::ManageSchedules => "manage_schedules",
            Self::ManageEmployees => "manage_employees",
            Self::ViewEmployees => "view_employees",
            Self::ApproveSwaps => "approve_swaps",
            Self::ApprovePreferences => "approve_preferences",
            Self::ViewReports => "view_reports",
            Self::AccessAdmin => "access_admin",
        }
    }

    /// Returns all capabilities in display order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[Capability] = &[
            Capability::ManageCompany,
            Capability::ManageSchedules,
            Capability::ManageEmployees,
            Capability::ViewEmployees,
            Capability::ApproveSwaps,
            Capability::ApprovePreferences,
            Capability::ViewReports,
            Capability::AccessAdmin,
        ];

        ALL
    }

    /// Parses a transport value into a capability.
    pub fn from_transport(value: &str) -> Result<Self, AppError> {
        Self::from_str(value)
    }
}

impl FromStr for Capability {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "manage_company" => Ok(Self::ManageCompany),
            "manage_schedules" => Ok(Self::ManageSchedules),
            "manage_employees" => Ok(Self::ManageEmployees),
            "view_employees" => Ok(Self::ViewEmployees),
            "approve_swaps" => Ok(Self::ApproveSwaps),
            "approve_preferences" => Ok(Self::ApprovePreferences),
            "view_reports" => Ok(Self::ViewReports),
            "access_admin" => Ok(Self::AccessAdmin),
            _ => Err(AppError::Validation(format!(
                "unknown capability value '{value}'"
            ))),
        }
    }
}

/// Capability flags held by one role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilitySet {
    /// See [`Capability::ManageCompany`].
    pub can_manage_company: bool,
    /// See [`Capability::ManageSchedules`].
    pub can_manage_schedules: bool,
    /// See [`Capability::ManageEmployees`].
    pub can_manage_employees: bool,
    /// See [`Capability::ViewEmployees`].
    pub can_view_employees: bool,
    /// See [`Capability::ApproveSwaps`].
    pub can_approve_swaps: bool,
    /// See [`Capability::ApprovePreferences`].
    pub can_approve_preferences: bool,
    /// See [`Capability::ViewReports`].
    pub can_view_reports: bool,
    /// See [`Capability::AccessAdmin`].
    pub can_access_admin: bool,
}

impl CapabilitySet {
    /// Returns the capability set of a role. No role grants nothing.
    #[must_use]
    pub const fn for_role(role: Option<Role>) -> Self {
        let Some(role) = role else {
            return Self::NONE;
        };

        match role {
            Role::SystemAdmin => Self::ALL,
            Role::Manager | Role::Operator => Self {
                can_access_admin: false,
                ..Self::ALL
            },
            Role::ScheduleManager => Self {
                can_manage_schedules: true,
                can_view_employees: true,
                can_approve_swaps: true,
                can_approve_preferences: true,
                can_view_reports: true,
                ..Self::NONE
            },
            Role::Staff | Role::Employee => Self::NONE,
        }
    }

    const NONE: Self = Self {
        can_manage_company: false,
        can_manage_schedules: false,
        can_manage_employees: false,
        can_view_employees: false,
        can_approve_swaps: false,
        can_approve_preferences: false,
        can_view_reports: false,
        can_access_admin: false,
    };

    const ALL: Self = Self {
        can_manage_company: true,
        can_manage_schedules: true,
        can_manage_employees: true,
        can_view_employees: true,
        can_approve_swaps: true,
        can_approve_preferences: true,
        can_view_reports: true,
        can_access_admin: true,
    };

    /// Returns whether the set holds one capability.
    #[must_use]
    pub fn has(&self, capability: Capability) -> bool {
        match capability {
            Capability::ManageCompany => self.can_manage_company,
            Capability::ManageSchedules => self.can_manage_schedules,
            Capability::ManageEmployees => self.can_manage_employees,
            Capability::ViewEmployees => self.can_view_employees,
            Capability::ApproveSwaps => self.can_approve_swaps,
            Capability::ApprovePreferences => self.can_approve_preferences,
            Capability::ViewReports => self.can_view_reports,
            Capability::AccessAdmin => self.can_access_admin,
        }
    }

    /// Returns the held capabilities in [`Capability::all`] order.
    #[must_use]
    pub fn capabilities(&self) -> Vec<Capability> {
        Capability::all()
            .iter()
            .copied()
            .filter(|capability| self.has(*capability))
            .collect()
    }

    /// Returns whether every capability of `other` is also held here.
    #[must_use]
    pub fn includes(&self, other: &Self) -> bool {
        Capability::all()
            .iter()
            .all(|capability| !other.has(*capability) || self.has(*capability))
    }
}

/// Session snapshot of the caller, captured fresh for each check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorContext {
    /// Role of the caller, `None` when unauthenticated or unrecognised.
    pub role: Option<Role>,
    /// Caller user id.
    pub user_id: Option<UserId>,
    /// Company the caller belongs to.
    pub company_id: Option<CompanyId>,
}

impl ActorContext {
    /// Creates an actor context from session values.
    #[must_use]
    pub fn new(role: Option<Role>, user_id: Option<UserId>, company_id: Option<CompanyId>) -> Self {
        Self {
            role,
            user_id,
            company_id,
        }
    }

    /// Returns an anonymous actor holding nothing.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Returns whether the caller presented a recognised role.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.role.is_some()
    }

    /// Returns whether the caller is a system admin.
    #[must_use]
    pub fn is_system_admin(&self) -> bool {
        self.role == Some(Role::SystemAdmin)
    }

    /// Returns the capability set of the caller's role.
    #[must_use]
    pub fn capabilities(&self) -> CapabilitySet {
        CapabilitySet::for_role(self.role)
    }

    /// Short label for log lines.
    #[must_use]
    pub fn role_label(&self) -> &'static str {
        self.role.map_or("none", |role| role.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::{Capability, CapabilitySet, Role};

    fn flags(set: CapabilitySet) -> [bool; 8] {
        [
            set.can_manage_company,
            set.can_manage_schedules,
            set.can_manage_employees,
            set.can_view_employees,
            set.can_approve_swaps,
            set.can_approve_preferences,
            set.can_view_reports,
            set.can_access_admin,
        ]
    }

    #[test]
    fn capability_table_matches_golden_values() {
        let expected = [
            (Some(Role::SystemAdmin), [true; 8]),
            (
                Some(Role::Manager),
                [true, true, true, true, true, true, true, false],
            ),
            (
                Some(Role::Operator),
                [true, true, true, true, true, true, true, false],
            ),
            (
                Some(Role::ScheduleManager),
                [false, true, false, true, true, true, true, false],
            ),
            (Some(Role::Staff), [false; 8]),
            (Some(Role::Employee), [false; 8]),
            (None, [false; 8]),
        ];

        for (role, row) in expected {
            assert_eq!(flags(CapabilitySet::for_role(role)), row, "role {role:?}");
        }
    }

    #[test]
    fn system_admin_is_superset_of_every_role() {
        let admin = CapabilitySet::for_role(Some(Role::SystemAdmin));
        for role in Role::all() {
            assert!(admin.includes(&CapabilitySet::for_role(Some(*role))));
        }
    }

    #[test]
    fn role_roundtrip_transport_value() {
        for role in Role::all() {
            let restored = Role::from_str(role.as_str());
            assert!(matches!(restored, Ok(value) if value == *role));
        }
    }

    #[test]
    fn unknown_role_is_rejected_or_dropped() {
        assert!(Role::from_str("owner").is_err());
        assert_eq!(Role::from_transport_lenient("owner"), None);
        assert_eq!(Role::from_transport_lenient(" manager "), Some(Role::Manager));
    }

    #[test]
    fn unknown_capability_is_rejected() {
        assert!(Capability::from_str("delete_company").is_err());
    }

    #[test]
    fn capabilities_list_follows_flags() {
        let schedule_manager = CapabilitySet::for_role(Some(Role::ScheduleManager));
        assert_eq!(
            schedule_manager.capabilities(),
            vec![
                Capability::ManageSchedules,
                Capability::ViewEmployees,
                Capability::ApproveSwaps,
                Capability::ApprovePreferences,
                Capability::ViewReports,
            ]
        );
        assert!(CapabilitySet::for_role(Some(Role::Staff)).capabilities().is_empty());
    }

    #[test]
    fn role_serializes_as_snake_case() {
        let value = serde_json::to_string(&Role::ScheduleManager).unwrap_or_default();
        assert_eq!(value, "\"schedule_manager\"");
    }
}
