use scaleflow_core::same_company;
use scaleflow_domain::{Shift, ShiftTemplate, ShiftTemplateId};

use super::*;

impl AuthorizationService {
    /// Returns what an actor may do with a shift.
    pub async fn shift_access(
        &self,
        actor: &ActorContext,
        shift_id: ShiftId,
    ) -> AppResult<ShiftAccess> {
        let shift = self.load_shift(shift_id).await?;
        let company_id = Some(shift.company_id());

        Ok(ShiftAccess {
            shift_id,
            can_view: actor.can_view_shift(shift.employee_id(), company_id, shift.is_published()),
            can_modify: actor.can_modify_shift(company_id),
            can_approve_swap: actor.can_approve_swap_request(company_id),
        })
    }

    /// Ensures the actor may edit a shift and returns it.
    pub async fn require_shift_modification(
        &self,
        actor: &ActorContext,
        shift_id: ShiftId,
    ) -> AppResult<Shift> {
        let shift = self.load_shift(shift_id).await?;
        if !actor.can_modify_shift(Some(shift.company_id())) {
            return Err(forbidden(actor, &format!("modify shift '{shift_id}'")));
        }

        Ok(shift)
    }

    /// Ensures the actor may edit a shift template and returns it.
    ///
    /// Templates follow the same rule as the shifts created from them.
    pub async fn require_template_modification(
        &self,
        actor: &ActorContext,
        template_id: ShiftTemplateId,
    ) -> AppResult<ShiftTemplate> {
        let template = self
            .repository
            .find_shift_template(template_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("shift template '{template_id}'")))?;

        if !actor.can_modify_shift(Some(template.company_id())) {
            return Err(forbidden(
                actor,
                &format!("modify shift template '{template_id}'"),
            ));
        }

        Ok(template)
    }

    /// Lists the shifts of a company the actor is allowed to see.
    ///
    /// Only members of the company and system admins learn whether the
    /// company exists; anonymous callers are rejected outright.
    pub async fn visible_shifts(
        &self,
        actor: &ActorContext,
        company_id: CompanyId,
    ) -> AppResult<Vec<Shift>> {
        if !actor.is_authenticated() {
            return Err(forbidden(
                actor,
                &format!("list shifts of company '{company_id}'"),
            ));
        }

        let is_member =
            actor.is_system_admin() || same_company(actor.company_id, Some(company_id));
        if is_member && self.repository.find_company(company_id).await?.is_none() {
            return Err(AppError::NotFound(format!("company '{company_id}'")));
        }

        let shifts = self.repository.list_shifts_for_company(company_id).await?;
        let total = shifts.len();
        let visible: Vec<Shift> = shifts
            .into_iter()
            .filter(|shift| {
                actor.can_view_shift(
                    shift.employee_id(),
                    Some(shift.company_id()),
                    shift.is_published(),
                )
            })
            .collect();

        tracing::debug!(
            role = actor.role_label(),
            actor_company = %company_label(actor.company_id),
            company_id = %company_id,
            total,
            visible = visible.len(),
            "filtered company shifts"
        );

        Ok(visible)
    }

    pub(super) async fn load_shift(&self, shift_id: ShiftId) -> AppResult<Shift> {
        self.repository
            .find_shift(shift_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("shift '{shift_id}'")))
    }
}
