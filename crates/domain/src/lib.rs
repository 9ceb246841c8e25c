//! Domain entities, the role-capability table and pure permission predicates.

#![forbid(unsafe_code)]

mod approval;
mod company;
mod gate;
mod ids;
pub mod policy;
mod preference;
mod route;
mod security;
mod shift;
mod swap_request;
mod user;

pub use approval::ApprovalStatus;
pub use company::Company;
pub use gate::{AccessGate, GateOutcome};
pub use ids::{PreferenceId, ShiftId, ShiftTemplateId, SwapRequestId};
pub use preference::{AvailabilityPreference, PreferenceLevel};
pub use route::{AppRoute, RouteDecision, RouteDenial, RouteGuard};
pub use security::{ActorContext, Capability, CapabilitySet, Role};
pub use shift::{Shift, ShiftInput, ShiftTemplate};
pub use swap_request::SwapRequest;
pub use user::{EmailAddress, Profile, UserId};
