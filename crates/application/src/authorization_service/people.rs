use scaleflow_domain::Profile;

use super::*;

impl AuthorizationService {
    /// Returns what an actor may do with a user.
    ///
    /// Nobody may change their own role, so the assignable list is empty for
    /// the actor's own profile.
    pub async fn user_access(&self, actor: &ActorContext, user_id: UserId) -> AppResult<UserAccess> {
        let profile = self.load_profile(user_id).await?;
        let can_manage = actor.can_manage_user(profile.company_id());

        let assignable_roles = if can_manage
            && actor.user_id != Some(user_id)
            && actor.can_assign_role(profile.role())
        {
            actor.assignable_roles()
        } else {
            Vec::new()
        };

        Ok(UserAccess {
            user_id,
            can_manage,
            assignable_roles,
        })
    }

    /// Ensures the actor may manage a user and returns the profile.
    pub async fn require_user_management(
        &self,
        actor: &ActorContext,
        user_id: UserId,
    ) -> AppResult<Profile> {
        let profile = self.load_profile(user_id).await?;
        if !actor.can_manage_user(profile.company_id()) {
            return Err(forbidden(
                actor,
                &format!(
                    "manage user '{user_id}' of company '{}'",
                    company_label(profile.company_id())
                ),
            ));
        }

        Ok(profile)
    }

    /// Ensures the actor may give `role` to a user.
    ///
    /// The actor must manage the user, must not be the user, and must be able
    /// to assign both the user's current role and the new one.
    pub async fn require_role_assignment(
        &self,
        actor: &ActorContext,
        user_id: UserId,
        role: Role,
    ) -> AppResult<()> {
        let profile = self.require_user_management(actor, user_id).await?;

        if actor.user_id == Some(user_id) {
            return Err(forbidden(actor, "change their own role"));
        }

        if !actor.can_assign_role(profile.role()) {
            return Err(forbidden(
                actor,
                &format!("re-role a user holding '{}'", profile.role()),
            ));
        }

        if !actor.can_assign_role(role) {
            return Err(forbidden(actor, &format!("assign role '{role}'")));
        }

        tracing::info!(
            role = actor.role_label(),
            target_user = %user_id,
            from = profile.role().as_str(),
            to = role.as_str(),
            "role assignment permitted"
        );

        Ok(())
    }

    async fn load_profile(&self, user_id: UserId) -> AppResult<Profile> {
        self.repository
            .find_profile(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("user '{user_id}'")))
    }
}
