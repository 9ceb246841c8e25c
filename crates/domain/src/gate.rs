//! Decision table behind the permission gate wrapped around UI controls.

use serde::{Deserialize, Serialize};

use crate::policy::can_access_route;
use crate::{ActorContext, Capability, Role};

/// Requirements and presentation options of one gated control.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessGate {
    /// Role allow-list. `None` skips the role check.
    pub allowed_roles: Option<Vec<Role>>,
    /// Capabilities that must all be held.
    pub required_capabilities: Vec<Capability>,
    /// Render the control disabled instead of hiding it.
    pub disable_instead: bool,
    /// Explanation shown next to a denied control.
    pub tooltip: Option<String>,
    /// Whether the caller supplied fallback content.
    pub has_fallback: bool,
}

/// What the gate renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GateOutcome {
    /// Children unchanged.
    Render,
    /// Children with `disabled`/`aria-disabled` set.
    RenderDisabled {
        /// Tooltip wrapped around the disabled children.
        tooltip: Option<String>,
    },
    /// Fallback content instead of the children.
    RenderFallback {
        /// Tooltip wrapped around the fallback.
        tooltip: Option<String>,
    },
    /// Nothing.
    Hidden,
}

impl AccessGate {
    /// Gate on a role allow-list.
    #[must_use]
    pub fn for_roles(roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            allowed_roles: Some(roles.into_iter().collect()),
            ..Self::default()
        }
    }

    /// Gate on a set of capabilities.
    #[must_use]
    pub fn for_capabilities(capabilities: impl IntoIterator<Item = Capability>) -> Self {
        Self {
            required_capabilities: capabilities.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Renders denied children disabled.
    #[must_use]
    pub fn disable_instead(mut self) -> Self {
        self.disable_instead = true;
        self
    }

    /// Declares fallback content.
    #[must_use]
    pub fn with_fallback(mut self) -> Self {
        self.has_fallback = true;
        self
    }

    /// Sets the tooltip shown on the disabled control or the fallback.
    #[must_use]
    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Returns whether every check passes for the actor.
    #[must_use]
    pub fn permits(&self, actor: &ActorContext) -> bool {
        if !can_access_route(actor.role, self.allowed_roles.as_deref(), false, true) {
            return false;
        }

        let capabilities = actor.capabilities();
        self.required_capabilities
            .iter()
            .all(|capability| capabilities.has(*capability))
    }

    /// Evaluates the gate.
    #[must_use]
    pub fn evaluate(&self, actor: &ActorContext) -> GateOutcome {
        if self.permits(actor) {
            return GateOutcome::Render;
        }

        if self.disable_instead {
            return GateOutcome::RenderDisabled {
                tooltip: self.tooltip.clone(),
            };
        }

        if self.has_fallback {
            return GateOutcome::RenderFallback {
                tooltip: self.tooltip.clone(),
            };
        }

        GateOutcome::Hidden
    }
}
