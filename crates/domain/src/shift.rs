//! Shifts and reusable shift templates.

use chrono::{DateTime, NaiveTime, Utc};
use scaleflow_core::{AppError, AppResult, CompanyId, NonEmptyString};
use serde::{Deserialize, Serialize};

use crate::{ShiftId, ShiftTemplateId, UserId};

/// One scheduled block of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shift {
    id: ShiftId,
    company_id: CompanyId,
    employee_id: Option<UserId>,
    starts_at: DateTime<Utc>,
    ends_at: DateTime<Utc>,
    position: Option<String>,
    notes: Option<String>,
    is_published: bool,
    created_by: Option<UserId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Input for [`Shift::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftInput {
    /// Owning company.
    pub company_id: CompanyId,
    /// Assigned employee. `None` leaves the shift open.
    pub employee_id: Option<UserId>,
    /// Start instant.
    pub starts_at: DateTime<Utc>,
    /// End instant.
    pub ends_at: DateTime<Utc>,
    /// Position label.
    pub position: Option<String>,
    /// Free-form notes.
    pub notes: Option<String>,
    /// Whether employees can see the shift.
    pub is_published: bool,
    /// Author of the shift.
    pub created_by: Option<UserId>,
}

impl Shift {
    /// Creates a shift. The end must come after the start.
    pub fn new(id: ShiftId, input: ShiftInput) -> AppResult<Self> {
        if input.ends_at <= input.starts_at {
            return Err(AppError::Validation(format!(
                "shift '{id}' must end after it starts"
            )));
        }

        let now = Utc::now();
        Ok(Self {
            id,
            company_id: input.company_id,
            employee_id: input.employee_id,
            starts_at: input.starts_at,
            ends_at: input.ends_at,
            position: input.position,
            notes: input.notes,
            is_published: input.is_published,
            created_by: input.created_by,
            created_at: now,
            updated_at: now,
        })
    }

    /// Returns the shift id.
    #[must_use]
    pub fn id(&self) -> ShiftId {
        self.id
    }

    /// Returns the owning company.
    #[must_use]
    pub fn company_id(&self) -> CompanyId {
        self.company_id
    }

    /// Returns the assigned employee.
    #[must_use]
    pub fn employee_id(&self) -> Option<UserId> {
        self.employee_id
    }

    /// Returns the start instant.
    #[must_use]
    pub fn starts_at(&self) -> DateTime<Utc> {
        self.starts_at
    }

    /// Returns the end instant.
    #[must_use]
    pub fn ends_at(&self) -> DateTime<Utc> {
        self.ends_at
    }

    /// Returns the position label.
    #[must_use]
    pub fn position(&self) -> Option<&str> {
        self.position.as_deref()
    }

    /// Returns the notes.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Returns whether employees can see the shift.
    #[must_use]
    pub fn is_published(&self) -> bool {
        self.is_published
    }

    /// Returns the author.
    #[must_use]
    pub fn created_by(&self) -> Option<UserId> {
        self.created_by
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
}

/// Reusable start/end pattern for creating shifts.
///
/// `end_time` earlier than `start_time` describes an overnight shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftTemplate {
    id: ShiftTemplateId,
    company_id: CompanyId,
    name: NonEmptyString,
    start_time: NaiveTime,
    end_time: NaiveTime,
    position: Option<String>,
    created_at: DateTime<Utc>,
}

impl ShiftTemplate {
    /// Creates a shift template.
    pub fn new(
        id: ShiftTemplateId,
        company_id: CompanyId,
        name: impl Into<String>,
        start_time: NaiveTime,
        end_time: NaiveTime,
        position: Option<String>,
    ) -> AppResult<Self> {
        if start_time == end_time {
            return Err(AppError::Validation(
                "shift template start and end must differ".to_owned(),
            ));
        }

        Ok(Self {
            id,
            company_id,
            name: NonEmptyString::new(name)?,
            start_time,
            end_time,
            position,
            created_at: Utc::now(),
        })
    }

    /// Returns the template id.
    #[must_use]
    pub fn id(&self) -> ShiftTemplateId {
        self.id
    }

    /// Returns the owning company.
    #[must_use]
    pub fn company_id(&self) -> CompanyId {
        self.company_id
    }

    /// Returns the template name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the local start time.
    #[must_use]
    pub fn start_time(&self) -> NaiveTime {
        self.start_time
    }

    /// Returns the local end time.
    #[must_use]
    pub fn end_time(&self) -> NaiveTime {
        self.end_time
    }

    /// Returns the position label.
    #[must_use]
    pub fn position(&self) -> Option<&str> {
        self.position.as_deref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns whether the template crosses midnight.
    #[must_use]
    pub fn is_overnight(&self) -> bool {
        self.end_time < self.start_time
    }
}
