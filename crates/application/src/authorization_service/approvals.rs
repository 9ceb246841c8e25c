use scaleflow_domain::{AvailabilityPreference, PreferenceId, SwapRequest, SwapRequestId};

use super::*;

impl AuthorizationService {
    /// Ensures the actor may review a swap request and returns it.
    ///
    /// The reviewer must belong to the company of the swapped shift. Requesters
    /// may not review their own request, and only pending requests can be
    /// reviewed.
    pub async fn require_swap_request_approval(
        &self,
        actor: &ActorContext,
        swap_request_id: SwapRequestId,
    ) -> AppResult<SwapRequest> {
        let swap_request = self
            .repository
            .find_swap_request(swap_request_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("swap request '{swap_request_id}'")))?;

        let shift = self.load_shift(swap_request.shift_id()).await?;
        if shift.company_id() != swap_request.company_id() {
            warn!(
                %swap_request_id,
                shift_company = %shift.company_id(),
                request_company = %swap_request.company_id(),
                "swap request company does not match its shift"
            );
        }

        if !actor.can_approve_swap_request(Some(shift.company_id())) {
            return Err(forbidden(
                actor,
                &format!("approve swap request '{swap_request_id}'"),
            ));
        }

        if actor.user_id == Some(swap_request.requester_id()) {
            return Err(forbidden(actor, "approve their own swap request"));
        }

        if !swap_request.status().is_pending() {
            return Err(AppError::Conflict(format!(
                "swap request '{swap_request_id}' is already {}",
                swap_request.status().as_str()
            )));
        }

        Ok(swap_request)
    }

    /// Ensures the actor may review an availability preference and returns it.
    pub async fn require_preference_approval(
        &self,
        actor: &ActorContext,
        preference_id: PreferenceId,
    ) -> AppResult<AvailabilityPreference> {
        let preference = self
            .repository
            .find_preference(preference_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("preference '{preference_id}'")))?;

        if !actor.can_approve_preference(Some(preference.company_id())) {
            return Err(forbidden(
                actor,
                &format!("approve preference '{preference_id}'"),
            ));
        }

        if actor.user_id == Some(preference.employee_id()) {
            return Err(forbidden(actor, "approve their own preference"));
        }

        if !preference.status().is_pending() {
            return Err(AppError::Conflict(format!(
                "preference '{preference_id}' is already {}",
                preference.status().as_str()
            )));
        }

        Ok(preference)
    }
}
