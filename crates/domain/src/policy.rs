//! Pure permission predicates.
//!
//! Every function here is total and side-effect free. Missing context (no
//! role, no user id, no company id) always resolves to a denial.

use scaleflow_core::{CompanyId, same_company};

use crate::{ActorContext, CapabilitySet, Role, UserId};

/// Returns the capability set held by a role.
#[must_use]
pub fn role_permissions(role: Option<Role>) -> CapabilitySet {
    CapabilitySet::for_role(role)
}

/// Returns the capability tags held by a role, for display.
#[must_use]
pub fn role_capabilities(role: Option<Role>) -> Vec<&'static str> {
    role_permissions(role)
        .capabilities()
        .iter()
        .map(|capability| capability.as_str())
        .collect()
}

/// Route-level check.
///
/// Role membership is evaluated first; the company requirement is only
/// considered once the role passes.
#[must_use]
pub fn can_access_route(
    role: Option<Role>,
    allowed_roles: Option<&[Role]>,
    requires_company: bool,
    has_company: bool,
) -> bool {
    if let Some(allowed_roles) = allowed_roles {
        let is_member = role.is_some_and(|role| allowed_roles.contains(&role));
        if !is_member {
            return false;
        }
    }

    !requires_company || has_company
}

/// Returns whether an actor may manage a user in the target company.
#[must_use]
pub fn can_manage_user(
    role: Option<Role>,
    company_id: Option<CompanyId>,
    target_company_id: Option<CompanyId>,
) -> bool {
    if role == Some(Role::SystemAdmin) {
        return true;
    }

    role_permissions(role).can_manage_employees && same_company(company_id, target_company_id)
}

/// Returns the roles an actor may hand out, highest rank first.
///
/// Roles without the manage-employees capability assign nothing. System admin
/// is only assignable by a system admin.
#[must_use]
pub fn assignable_roles(role: Option<Role>) -> Vec<Role> {
    let Some(role) = role else {
        return Vec::new();
    };
    if !role_permissions(Some(role)).can_manage_employees {
        return Vec::new();
    }

    Role::all()
        .iter()
        .copied()
        .filter(|candidate| candidate.rank() <= role.rank())
        .filter(|candidate| *candidate != Role::SystemAdmin || role == Role::SystemAdmin)
        .collect()
}

/// Returns whether an actor may assign `target_role` to someone.
#[must_use]
pub fn can_assign_role(role: Option<Role>, target_role: Option<Role>) -> bool {
    let Some(target_role) = target_role else {
        return false;
    };

    assignable_roles(role).contains(&target_role)
}

/// Returns whether an actor may create, edit or delete a shift.
#[must_use]
pub fn can_modify_shift(
    role: Option<Role>,
    company_id: Option<CompanyId>,
    shift_company_id: Option<CompanyId>,
) -> bool {
    if role == Some(Role::SystemAdmin) {
        return true;
    }

    role_permissions(role).can_manage_schedules && same_company(company_id, shift_company_id)
}

/// Returns whether an actor may see a shift.
///
/// Owners always see their own shift. Unpublished shifts are otherwise only
/// visible to manager-class roles of the same company.
#[must_use]
pub fn can_view_shift(
    role: Option<Role>,
    user_id: Option<UserId>,
    company_id: Option<CompanyId>,
    shift_employee_id: Option<UserId>,
    shift_company_id: Option<CompanyId>,
    is_published: bool,
) -> bool {
    let Some(role) = role else {
        return false;
    };

    let is_owner = matches!((user_id, shift_employee_id), (Some(user), Some(owner)) if user == owner);
    if is_owner || role == Role::SystemAdmin {
        return true;
    }

    if !same_company(company_id, shift_company_id) {
        return false;
    }

    let capabilities = role_permissions(Some(role));
    if capabilities.can_manage_employees || capabilities.can_view_employees {
        return true;
    }

    is_published
}

/// Returns whether an actor may approve a swap request on a company's shift.
#[must_use]
pub fn can_approve_swap_request(
    role: Option<Role>,
    company_id: Option<CompanyId>,
    shift_company_id: Option<CompanyId>,
) -> bool {
    role_permissions(role).can_approve_swaps && same_company(company_id, shift_company_id)
}

/// Returns whether an actor may approve an availability preference.
#[must_use]
pub fn can_approve_preference(
    role: Option<Role>,
    company_id: Option<CompanyId>,
    preference_owner_company_id: Option<CompanyId>,
) -> bool {
    role_permissions(role).can_approve_preferences
        && same_company(company_id, preference_owner_company_id)
}

impl ActorContext {
    /// See [`can_manage_user`].
    #[must_use]
    pub fn can_manage_user(&self, target_company_id: Option<CompanyId>) -> bool {
        can_manage_user(self.role, self.company_id, target_company_id)
    }

    /// See [`can_assign_role`].
    #[must_use]
    pub fn can_assign_role(&self, target_role: Role) -> bool {
        can_assign_role(self.role, Some(target_role))
    }

    /// See [`assignable_roles`].
    #[must_use]
    pub fn assignable_roles(&self) -> Vec<Role> {
        assignable_roles(self.role)
    }

    /// See [`can_modify_shift`].
    #[must_use]
    pub fn can_modify_shift(&self, shift_company_id: Option<CompanyId>) -> bool {
        can_modify_shift(self.role, self.company_id, shift_company_id)
    }

    /// See [`can_view_shift`].
    #[must_use]
    pub fn can_view_shift(
        &self,
        shift_employee_id: Option<UserId>,
        shift_company_id: Option<CompanyId>,
        is_published: bool,
    ) -> bool {
        can_view_shift(
            self.role,
            self.user_id,
            self.company_id,
            shift_employee_id,
            shift_company_id,
            is_published,
        )
    }

    /// See [`can_approve_swap_request`].
    #[must_use]
    pub fn can_approve_swap_request(&self, shift_company_id: Option<CompanyId>) -> bool {
        can_approve_swap_request(self.role, self.company_id, shift_company_id)
    }

    /// See [`can_approve_preference`].
    #[must_use]
    pub fn can_approve_preference(&self, preference_owner_company_id: Option<CompanyId>) -> bool {
        can_approve_preference(self.role, self.company_id, preference_owner_company_id)
    }
}
