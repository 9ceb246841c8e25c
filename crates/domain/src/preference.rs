use chrono::{DateTime, NaiveTime, Utc, Weekday};
use scaleflow_core::{AppError, AppResult, CompanyId};
use serde::{Deserialize, Serialize};

use crate::{ApprovalStatus, PreferenceId, UserId};

/// How strongly an employee wants a time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferenceLevel {
    /// Employee would like to work the window.
    Preferred,
    /// Employee can work the window.
    Available,
    /// Employee cannot work the window.
    Unavailable,
}

/// Recurring weekly availability submitted by an employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityPreference {
    id: PreferenceId,
    employee_id: UserId,
    company_id: CompanyId,
    weekday: Weekday,
    start_time: NaiveTime,
    end_time: NaiveTime,
    level: PreferenceLevel,
    status: ApprovalStatus,
    created_at: DateTime<Utc>,
}

impl AvailabilityPreference {
    /// Creates a pending availability preference.
    pub fn new(
        id: PreferenceId,
        employee_id: UserId,
        company_id: CompanyId,
        weekday: Weekday,
        start_time: NaiveTime,
        end_time: NaiveTime,
        level: PreferenceLevel,
    ) -> AppResult<Self> {
        if end_time <= start_time {
            return Err(AppError::Validation(
                "availability window must end after it starts".to_owned(),
            ));
        }

        Ok(Self {
            id,
            employee_id,
            company_id,
            weekday,
            start_time,
            end_time,
            level,
            status: ApprovalStatus::Pending,
            created_at: Utc::now(),
        })
    }

    /// Returns the preference id.
    #[must_use]
    pub fn id(&self) -> PreferenceId {
        self.id
    }

    /// Returns the submitting employee.
    #[must_use]
    pub fn employee_id(&self) -> UserId {
        self.employee_id
    }

    /// Returns the company of the submitting employee.
    #[must_use]
    pub fn company_id(&self) -> CompanyId {
        self.company_id
    }

    /// Returns the weekday.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Returns the window start.
    #[must_use]
    pub fn start_time(&self) -> NaiveTime {
        self.start_time
    }

    /// Returns the window end.
    #[must_use]
    pub fn end_time(&self) -> NaiveTime {
        self.end_time
    }

    /// Returns the preference level.
    #[must_use]
    pub fn level(&self) -> PreferenceLevel {
        self.level
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

    /// Returns a copy with a new review status.
    #[must_use]
    pub fn with_status(mut self, status: ApprovalStatus) -> Self {
        self.status = status;
        self
    }
}
