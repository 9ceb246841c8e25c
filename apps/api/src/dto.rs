use serde::Serialize;
use ts_rs::TS;

mod access;

pub use access::{
    AssignRoleRequest, CapabilityFlagsResponse, CapabilitySummaryResponse, GateRequest,
    GateResponse, RouteAccessQuery, RouteAccessResponse, ShiftAccessResponse, ShiftResponse,
    UserAccessResponse,
};

/// Health response payload.
#[derive(Debug, Serialize, TS)]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/health-response.ts"
)]
pub struct HealthResponse {
    pub status: &'static str,
}
