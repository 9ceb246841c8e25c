//! Front-end route table and guard decisions.

use serde::{Deserialize, Serialize};

use crate::policy::can_access_route;
use crate::{ActorContext, Role};

const MANAGEMENT_ROLES: &[Role] = &[Role::SystemAdmin, Role::Manager, Role::Operator];
const SCHEDULING_ROLES: &[Role] = &[
    Role::SystemAdmin,
    Role::Manager,
    Role::Operator,
    Role::ScheduleManager,
];
const ADMIN_ROLES: &[Role] = &[Role::SystemAdmin];

/// Routes of the single-page application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AppRoute {
    /// Sign-in page.
    Login,
    /// Invitation acceptance page.
    AcceptInvite,
    /// Landing dashboard.
    Dashboard,
    /// Own profile.
    Profile,
    /// Password change.
    UpdatePassword,
    /// First-run company creation.
    CompanySetup,
    /// Company calendar.
    Schedule,
    /// Shift template library.
    ShiftTemplates,
    /// Employee directory.
    Employees,
    /// Own availability preferences.
    Availability,
    /// Shift swap requests.
    SwapRequests,
    /// Reports.
    Reports,
    /// Company settings.
    CompanySettings,
    /// Platform administration.
    Admin,
}

/// Declarative access rule attached to a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteGuard {
    /// Reachable without a session.
    pub public: bool,
    /// Roles allowed in. `None` admits every authenticated role.
    pub allowed_roles: Option<&'static [Role]>,
    /// Caller must belong to a company.
    pub requires_company: bool,
}

impl RouteGuard {
    const PUBLIC: Self = Self {
        public: true,
        allowed_roles: None,
        requires_company: false,
    };

    const fn signed_in(requires_company: bool) -> Self {
        Self {
            public: false,
            allowed_roles: None,
            requires_company,
        }
    }

    const fn roles(allowed_roles: &'static [Role], requires_company: bool) -> Self {
        Self {
            public: false,
            allowed_roles: Some(allowed_roles),
            requires_company,
        }
    }
}

impl AppRoute {
    /// Returns all routes in navigation order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        const ALL: &[AppRoute] = &[
            AppRoute::Login,
            AppRoute::AcceptInvite,
            AppRoute::Dashboard,
            AppRoute::Profile,
            AppRoute::UpdatePassword,
            AppRoute::CompanySetup,
            AppRoute::Schedule,
            AppRoute::ShiftTemplates,
            AppRoute::Employees,
            AppRoute::Availability,
            AppRoute::SwapRequests,
            AppRoute::Reports,
            AppRoute::CompanySettings,
            AppRoute::Admin,
        ];

        ALL
    }

    /// Returns the browser path.
    #[must_use]
    pub fn path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::AcceptInvite => "/accept-invite",
            Self::Dashboard => "/dashboard",
            Self::Profile => "/profile",
            Self::UpdatePassword => "/update-password",
            Self::CompanySetup => "/company/setup",
            Self::Schedule => "/schedule",
            Self::ShiftTemplates => "/shift-templates",
            Self::Employees => "/employees",
            Self::Availability => "/availability",
            Self::SwapRequests => "/swap-requests",
            Self::Reports => "/reports",
            Self::CompanySettings => "/company/settings",
            Self::Admin => "/admin",
        }
    }

    /// Resolves a browser path, ignoring a trailing slash and query string.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/dashboard",
            trimmed => trimmed,
        };

        Self::all().iter().copied().find(|route| route.path() == path)
    }

    /// Returns the access rule for this route.
    #[must_use]
    pub fn guard(&self) -> RouteGuard {
        match self {
            Self::Login | Self::AcceptInvite => RouteGuard::PUBLIC,
            Self::Dashboard | Self::Profile | Self::UpdatePassword | Self::CompanySetup => {
                RouteGuard::signed_in(false)
            }
            Self::Schedule | Self::Availability | Self::SwapRequests => RouteGuard::signed_in(true),
            Self::ShiftTemplates | Self::Reports => RouteGuard::roles(SCHEDULING_ROLES, true),
            Self::Employees | Self::CompanySettings => RouteGuard::roles(MANAGEMENT_ROLES, true),
            Self::Admin => RouteGuard::roles(ADMIN_ROLES, false),
        }
    }

    /// Decides whether an actor may open this route.
    #[must_use]
    pub fn decide(&self, actor: &ActorContext) -> RouteDecision {
        let guard = self.guard();
        if guard.public {
            return RouteDecision::Allow;
        }
        if !actor.is_authenticated() {
            return RouteDecision::Deny(RouteDenial::Unauthenticated);
        }
        if can_access_route(
            actor.role,
            guard.allowed_roles,
            guard.requires_company,
            actor.company_id.is_some(),
        ) {
            return RouteDecision::Allow;
        }

        if can_access_route(actor.role, guard.allowed_roles, false, true) {
            RouteDecision::Deny(RouteDenial::CompanyRequired)
        } else {
            RouteDecision::Deny(RouteDenial::RoleNotAllowed)
        }
    }

    /// Returns the routes an actor may open, in navigation order.
    #[must_use]
    pub fn accessible_to(actor: &ActorContext) -> Vec<Self> {
        Self::all()
            .iter()
            .copied()
            .filter(|route| route.decide(actor).is_allowed())
            .collect()
    }
}

/// Reason a route guard turned the caller away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteDenial {
    /// No session.
    Unauthenticated,
    /// Role is not on the allow-list.
    RoleNotAllowed,
    /// Caller has no company yet.
    CompanyRequired,
}

impl RouteDenial {
    /// Returns a stable transport value.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "unauthenticated",
            Self::RoleNotAllowed => "role_not_allowed",
            Self::CompanyRequired => "company_required",
        }
    }

    /// Returns where the front end sends the caller instead.
    #[must_use]
    pub fn redirect_path(&self) -> &'static str {
        match self {
            Self::Unauthenticated => AppRoute::Login.path(),
            Self::RoleNotAllowed => "/unauthorized",
            Self::CompanyRequired => AppRoute::CompanySetup.path(),
        }
    }
}

/// Outcome of a route guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the route.
    Allow,
    /// Redirect elsewhere.
    Deny(RouteDenial),
}

impl RouteDecision {
    /// Returns whether the route may render.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Returns the denial reason, if any.
    #[must_use]
    pub fn denial(&self) -> Option<RouteDenial> {
        match self {
            Self::Allow => None,
            Self::Deny(denial) => Some(*denial),
        }
    }
}

#[cfg(test)]
mod tests {
    use scaleflow_core::CompanyId;

    use super::{AppRoute, RouteDecision, RouteDenial};
    use crate::{ActorContext, Role, UserId};

    fn actor(role: Role, with_company: bool) -> ActorContext {
        ActorContext::new(
            Some(role),
            Some(UserId::new()),
            with_company.then(CompanyId::new),
        )
    }

    #[test]
    fn every_route_path_resolves_back() {
        for route in AppRoute::all() {
            assert_eq!(AppRoute::from_path(route.path()), Some(*route));
        }
        assert_eq!(AppRoute::from_path("/employees/?tab=invites"), Some(AppRoute::Employees));
        assert_eq!(AppRoute::from_path("/"), Some(AppRoute::Dashboard));
        assert_eq!(AppRoute::from_path("/nowhere"), None);
    }

    #[test]
    fn public_routes_admit_anonymous_callers() {
        assert!(AppRoute::Login.decide(&ActorContext::anonymous()).is_allowed());
        assert_eq!(
            AppRoute::Dashboard.decide(&ActorContext::anonymous()),
            RouteDecision::Deny(RouteDenial::Unauthenticated)
        );
    }

    #[test]
    fn employee_is_kept_out_of_management_routes() {
        let employee = actor(Role::Employee, true);
        assert!(AppRoute::Schedule.decide(&employee).is_allowed());
        assert_eq!(
            AppRoute::Employees.decide(&employee).denial(),
            Some(RouteDenial::RoleNotAllowed)
        );
    }

    #[test]
    fn company_requirement_is_reported_after_role_passes() {
        assert_eq!(
            AppRoute::Employees.decide(&actor(Role::Manager, false)).denial(),
            Some(RouteDenial::CompanyRequired)
        );
        assert_eq!(
            AppRoute::Employees.decide(&actor(Role::Staff, false)).denial(),
            Some(RouteDenial::RoleNotAllowed)
        );
    }

    #[test]
    fn admin_area_needs_no_company() {
        assert!(AppRoute::Admin.decide(&actor(Role::SystemAdmin, false)).is_allowed());
        assert!(!AppRoute::Admin.decide(&actor(Role::Manager, true)).is_allowed());
    }

    #[test]
    fn schedule_manager_navigation() {
        let routes = AppRoute::accessible_to(&actor(Role::ScheduleManager, true));
        assert!(routes.contains(&AppRoute::ShiftTemplates));
        assert!(routes.contains(&AppRoute::Reports));
        assert!(!routes.contains(&AppRoute::Employees));
        assert!(!routes.contains(&AppRoute::Admin));
    }

    #[test]
    fn redirects_point_at_known_pages() {
        assert_eq!(RouteDenial::Unauthenticated.redirect_path(), "/login");
        assert_eq!(RouteDenial::CompanyRequired.redirect_path(), "/company/setup");
    }
}
