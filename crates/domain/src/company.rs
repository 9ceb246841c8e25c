use chrono::{DateTime, Utc};
use scaleflow_core::{AppResult, CompanyId, NonEmptyString};
use serde::{Deserialize, Serialize};

/// Tenant company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    id: CompanyId,
    name: NonEmptyString,
    address: Option<String>,
    phone: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Company {
    /// Creates a company record.
    pub fn new(
        id: CompanyId,
        name: impl Into<String>,
        address: Option<String>,
        phone: Option<String>,
    ) -> AppResult<Self> {
        let now = Utc::now();
        Ok(Self {
            id,
            name: NonEmptyString::new(name)?,
            address,
            phone,
            created_at: now,
            updated_at: now,
        })
    }

    /// Returns the company id.
    #[must_use]
    pub fn id(&self) -> CompanyId {
        self.id
    }

    /// Returns the company name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the postal address.
    #[must_use]
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    /// Returns the phone number.
    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
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
