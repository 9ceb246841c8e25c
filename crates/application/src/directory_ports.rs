use async_trait::async_trait;
use scaleflow_core::{AppResult, CompanyId};
use scaleflow_domain::{
    AvailabilityPreference, Company, PreferenceId, Profile, Shift, ShiftId, ShiftTemplate,
    ShiftTemplateId, SwapRequest, SwapRequestId, UserId,
};

/// Read port over the records whose ownership drives permission checks.
#[async_trait]
pub trait DirectoryRepository: Send + Sync {
    /// Finds a company.
    async fn find_company(&self, company_id: CompanyId) -> AppResult<Option<Company>>;

    /// Finds a user profile.
    async fn find_profile(&self, user_id: UserId) -> AppResult<Option<Profile>>;

    /// Finds a shift.
    async fn find_shift(&self, shift_id: ShiftId) -> AppResult<Option<Shift>>;

    /// Lists every shift of a company ordered by start time.
    async fn list_shifts_for_company(&self, company_id: CompanyId) -> AppResult<Vec<Shift>>;

    /// Finds a shift template.
    async fn find_shift_template(
        &self,
        template_id: ShiftTemplateId,
    ) -> AppResult<Option<ShiftTemplate>>;

    /// Finds an availability preference.
    async fn find_preference(
        &self,
        preference_id: PreferenceId,
    ) -> AppResult<Option<AvailabilityPreference>>;

    /// Finds a swap request.
    async fn find_swap_request(
        &self,
        swap_request_id: SwapRequestId,
    ) -> AppResult<Option<SwapRequest>>;
}
