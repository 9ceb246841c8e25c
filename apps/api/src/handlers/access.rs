use axum::Json;
use axum::extract::{Extension, Path, Query, State};
use axum::http::StatusCode;

use scaleflow_core::CompanyId;
use scaleflow_domain::{ActorContext, PreferenceId, Role, ShiftId, SwapRequestId, UserId};

use crate::dto::{
    AssignRoleRequest, CapabilitySummaryResponse, GateRequest, GateResponse, RouteAccessQuery,
    RouteAccessResponse, ShiftAccessResponse, ShiftResponse, UserAccessResponse,
};
use crate::error::ApiResult;
use crate::state::AppState;

mod approvals;
mod people;
mod shifts;
mod summary;


pub use approvals::{approve_preference_handler, approve_swap_request_handler};
pub use people::{assign_role_handler, user_access_handler};
pub use shifts::{company_shifts_handler, shift_access_handler};
pub use summary::{gate_handler, me_handler, route_access_handler};
