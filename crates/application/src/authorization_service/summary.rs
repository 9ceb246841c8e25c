use scaleflow_domain::policy::role_capabilities;
use scaleflow_domain::{AccessGate, GateOutcome, RouteDecision};

use super::*;

impl AuthorizationService {
    /// Returns capabilities, assignable roles and reachable routes of an actor.
    #[must_use]
    pub fn capability_summary(&self, actor: &ActorContext) -> CapabilitySummary {
        CapabilitySummary {
            role: actor.role,
            capabilities: actor.capabilities(),
            capability_tags: role_capabilities(actor.role),
            assignable_roles: actor.assignable_roles(),
            accessible_routes: AppRoute::accessible_to(actor),
        }
    }

    /// Resolves a browser path and runs its route guard.
    pub fn route_decision(
        &self,
        actor: &ActorContext,
        path: &str,
    ) -> AppResult<(AppRoute, RouteDecision)> {
        let route = AppRoute::from_path(path)
            .ok_or_else(|| AppError::NotFound(format!("no route matches path '{path}'")))?;

        let decision = route.decide(actor);
        if let Some(denial) = decision.denial() {
            tracing::debug!(
                role = actor.role_label(),
                path = route.path(),
                denial = denial.as_str(),
                "route guard redirected caller"
            );
        }

        Ok((route, decision))
    }

    /// Evaluates a rendering gate.
    #[must_use]
    pub fn evaluate_gate(&self, actor: &ActorContext, gate: &AccessGate) -> GateOutcome {
        gate.evaluate(actor)
    }
}
