use chrono::{DateTime, Utc};
use scaleflow_core::{AppError, AppResult, CompanyId};
use serde::{Deserialize, Serialize};

use crate::{ApprovalStatus, ShiftId, SwapRequestId, UserId};

/// Request to hand a shift to another employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapRequest {
    id: SwapRequestId,
    shift_id: ShiftId,
    company_id: CompanyId,
    requester_id: UserId,
    target_employee_id: Option<UserId>,
    reason: Option<String>,
    status: ApprovalStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl SwapRequest {
    /// Creates a pending swap request.
    ///
    /// `company_id` is the company of the shift being swapped.
    pub fn new(
        id: SwapRequestId,
        shift_id: ShiftId,
        company_id: CompanyId,
        requester_id: UserId,
        target_employee_id: Option<UserId>,
        reason: Option<String>,
    ) -> AppResult<Self> {
        if target_employee_id == Some(requester_id) {
            return Err(AppError::Validation(
                "a shift cannot be swapped with its own requester".to_owned(),
            ));
        }

        let now = Utc::now();
        Ok(Self {
            id,
            shift_id,
            company_id,
            requester_id,
            target_employee_id,
            reason,
            status: ApprovalStatus::Pending,
            created_at: now,
            updated_at: now,
        })
    }

    /// Returns the swap request id.
    #[must_use]
    pub fn id(&self) -> SwapRequestId {
        self.id
    }

    /// Returns the shift being swapped.
    #[must_use]
    pub fn shift_id(&self) -> ShiftId {
        self.shift_id
    }

    /// Returns the company of the shift.
    #[must_use]
    pub fn company_id(&self) -> CompanyId {
        self.company_id
    }

    /// Returns the requesting employee.
    #[must_use]
    pub fn requester_id(&self) -> UserId {
        self.requester_id
    }

    /// Returns the proposed replacement, if any.
    #[must_use]
    pub fn target_employee_id(&self) -> Option<UserId> {
        self.target_employee_id
    }

    /// Returns the reason given by the requester.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    /// Returns the review status.
    #[must_use]
    pub fn status(&self) -> ApprovalStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last update timestamp.
    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns a copy with a new review status.
    #[must_use]
    pub fn with_status(mut self, status: ApprovalStatus) -> Self {
        self.status = status;
        self.updated_at = Utc::now();
        self
    }
}
