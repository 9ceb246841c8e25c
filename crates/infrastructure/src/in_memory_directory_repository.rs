use std::collections::HashMap;

use async_trait::async_trait;
use scaleflow_application::DirectoryRepository;
use scaleflow_core::{AppError, AppResult, CompanyId};
use scaleflow_domain::{
    AvailabilityPreference, Company, PreferenceId, Profile, Shift, ShiftId, ShiftTemplate,
    ShiftTemplateId, SwapRequest, SwapRequestId, UserId,
};
use tokio::sync::RwLock;
use tracing::debug;

/// In-memory directory of companies, profiles and scheduling records.
#[derive(Debug, Default)]
pub struct InMemoryDirectoryRepository {
    companies: RwLock<HashMap<CompanyId, Company>>,
    profiles: RwLock<HashMap<UserId, Profile>>,
    shifts: RwLock<HashMap<ShiftId, Shift>>,
    shift_templates: RwLock<HashMap<ShiftTemplateId, ShiftTemplate>>,
    preferences: RwLock<HashMap<PreferenceId, AvailabilityPreference>>,
    swap_requests: RwLock<HashMap<SwapRequestId, SwapRequest>>,
}

impl InMemoryDirectoryRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a company.
    pub async fn save_company(&self, company: Company) -> AppResult<()> {
        let mut companies = self.companies.write().await;
        if companies.contains_key(&company.id()) {
            return Err(AppError::Conflict(format!(
                "company '{}' already exists",
                company.id()
            )));
        }

        debug!(company_id = %company.id(), "stored company");
        companies.insert(company.id(), company);
        Ok(())
    }

    /// Stores or replaces a profile. The profile's company must exist.
    pub async fn save_profile(&self, profile: Profile) -> AppResult<()> {
        if let Some(company_id) = profile.company_id() {
            self.ensure_company(company_id).await?;
        }

        self.profiles.write().await.insert(profile.id(), profile);
        Ok(())
    }

    /// Stores or replaces a shift. The shift's company must exist.
    pub async fn save_shift(&self, shift: Shift) -> AppResult<()> {
        self.ensure_company(shift.company_id()).await?;
        self.shifts.write().await.insert(shift.id(), shift);
        Ok(())
    }

    /// Stores or replaces a shift template.
    pub async fn save_shift_template(&self, template: ShiftTemplate) -> AppResult<()> {
        self.ensure_company(template.company_id()).await?;
        self.shift_templates
            .write()
            .await
            .insert(template.id(), template);
        Ok(())
    }

    /// Stores or replaces an availability preference.
    pub async fn save_preference(&self, preference: AvailabilityPreference) -> AppResult<()> {
        self.ensure_company(preference.company_id()).await?;
        self.preferences
            .write()
            .await
            .insert(preference.id(), preference);
        Ok(())
    }

    /// Stores or replaces a swap request. The swapped shift must exist and
    /// belong to the request's company.
    pub async fn save_swap_request(&self, swap_request: SwapRequest) -> AppResult<()> {
        let shift_company_id = self
            .shifts
            .read()
            .await
            .get(&swap_request.shift_id())
            .map(Shift::company_id)
            .ok_or_else(|| AppError::NotFound(format!("shift '{}'", swap_request.shift_id())))?;

        if shift_company_id != swap_request.company_id() {
            return Err(AppError::Validation(format!(
                "swap request company '{}' does not own shift '{}'",
                swap_request.company_id(),
                swap_request.shift_id()
            )));
        }

        self.swap_requests
            .write()
            .await
            .insert(swap_request.id(), swap_request);
        Ok(())
    }

    async fn ensure_company(&self, company_id: CompanyId) -> AppResult<()> {
        if self.companies.read().await.contains_key(&company_id) {
            Ok(())
        } else {
            Err(AppError::NotFound(format!("company '{company_id}'")))
        }
    }
}

#[async_trait]
impl DirectoryRepository for InMemoryDirectoryRepository {
    async fn find_company(&self, company_id: CompanyId) -> AppResult<Option<Company>> {
        Ok(self.companies.read().await.get(&company_id).cloned())
    }

    async fn find_profile(&self, user_id: UserId) -> AppResult<Option<Profile>> {
        Ok(self.profiles.read().await.get(&user_id).cloned())
    }

    async fn find_shift(&self, shift_id: ShiftId) -> AppResult<Option<Shift>> {
        Ok(self.shifts.read().await.get(&shift_id).cloned())
    }

    async fn list_shifts_for_company(&self, company_id: CompanyId) -> AppResult<Vec<Shift>> {
        let shifts = self.shifts.read().await;

        let mut values: Vec<Shift> = shifts
            .values()
            .filter(|shift| shift.company_id() == company_id)
            .cloned()
            .collect();
        values.sort_by(|left, right| {
            left.starts_at()
                .cmp(&right.starts_at())
                .then_with(|| left.id().as_uuid().cmp(&right.id().as_uuid()))
        });

        Ok(values)
    }

    async fn find_shift_template(
        &self,
        template_id: ShiftTemplateId,
    ) -> AppResult<Option<ShiftTemplate>> {
        Ok(self.shift_templates.read().await.get(&template_id).cloned())
    }

    async fn find_preference(
        &self,
        preference_id: PreferenceId,
    ) -> AppResult<Option<AvailabilityPreference>> {
        Ok(self.preferences.read().await.get(&preference_id).cloned())
    }

    async fn find_swap_request(
        &self,
        swap_request_id: SwapRequestId,
    ) -> AppResult<Option<SwapRequest>> {
        Ok(self.swap_requests.read().await.get(&swap_request_id).cloned())
    }
}
