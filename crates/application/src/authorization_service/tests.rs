use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Duration, NaiveTime, Utc, Weekday};
use scaleflow_core::{AppError, AppResult, CompanyId};
use scaleflow_domain::{
    AccessGate, ActorContext, AppRoute, ApprovalStatus, AvailabilityPreference, Capability,
    Company, GateOutcome, PreferenceId, PreferenceLevel, Profile, Role, RouteDenial, Shift,
    ShiftId, ShiftInput, ShiftTemplate, ShiftTemplateId, SwapRequest, SwapRequestId, UserId,
};
use tokio::sync::Mutex;

use crate::DirectoryRepository;

use super::AuthorizationService;

#[derive(Default)]
struct FakeDirectoryRepository {
    companies: HashMap<CompanyId, Company>,
    profiles: HashMap<UserId, Profile>,
    shifts: HashMap<ShiftId, Shift>,
    templates: HashMap<ShiftTemplateId, ShiftTemplate>,
    preferences: HashMap<PreferenceId, AvailabilityPreference>,
    swap_requests: HashMap<SwapRequestId, SwapRequest>,
    lookups: Mutex<usize>,
}

#[async_trait]
impl DirectoryRepository for FakeDirectoryRepository {
    async fn find_company(&self, company_id: CompanyId) -> AppResult<Option<Company>> {
        *self.lookups.lock().await += 1;
        Ok(self.companies.get(&company_id).cloned())
    }

    async fn find_profile(&self, user_id: UserId) -> AppResult<Option<Profile>> {
        *self.lookups.lock().await += 1;
        Ok(self.profiles.get(&user_id).cloned())
    }

    async fn find_shift(&self, shift_id: ShiftId) -> AppResult<Option<Shift>> {
        *self.lookups.lock().await += 1;
        Ok(self.shifts.get(&shift_id).cloned())
    }

    async fn list_shifts_for_company(&self, company_id: CompanyId) -> AppResult<Vec<Shift>> {
        *self.lookups.lock().await += 1;
        let mut shifts: Vec<Shift> = self
            .shifts
            .values()
            .filter(|shift| shift.company_id() == company_id)
            .cloned()
            .collect();
        shifts.sort_by_key(Shift::starts_at);
        Ok(shifts)
    }

    async fn find_shift_template(
        &self,
        template_id: ShiftTemplateId,
    ) -> AppResult<Option<ShiftTemplate>> {
        Ok(self.templates.get(&template_id).cloned())
    }

    async fn find_preference(
        &self,
        preference_id: PreferenceId,
    ) -> AppResult<Option<AvailabilityPreference>> {
        Ok(self.preferences.get(&preference_id).cloned())
    }

    async fn find_swap_request(
        &self,
        swap_request_id: SwapRequestId,
    ) -> AppResult<Option<SwapRequest>> {
        Ok(self.swap_requests.get(&swap_request_id).cloned())
    }
}

struct Fixture {
    company_id: CompanyId,
    other_company_id: CompanyId,
    manager: ActorContext,
    employee: ActorContext,
    colleague_id: UserId,
    published_shift: ShiftId,
    draft_shift: ShiftId,
    own_draft_shift: ShiftId,
    foreign_shift: ShiftId,
    template_id: ShiftTemplateId,
    swap_request_id: SwapRequestId,
    approved_swap_request_id: SwapRequestId,
    mismatched_swap_request_id: SwapRequestId,
    preference_id: PreferenceId,
    admin_user_id: UserId,
}

fn profile(user_id: UserId, role: Role, company_id: Option<CompanyId>) -> Profile {
    Profile::new(
        user_id,
        format!("{}@scaleflow.test", role.as_str()),
        role.display_name(),
        None,
        role,
        company_id,
    )
    .unwrap_or_else(|error| panic!("profile fixture: {error}"))
}

fn shift(
    company_id: CompanyId,
    employee_id: Option<UserId>,
    offset_hours: i64,
    is_published: bool,
) -> Shift {
    let starts_at = Utc::now() + Duration::hours(offset_hours);
    Shift::new(
        ShiftId::new(),
        ShiftInput {
            company_id,
            employee_id,
            starts_at,
            ends_at: starts_at + Duration::hours(8),
            position: None,
            notes: None,
            is_published,
            created_by: None,
        },
    )
    .unwrap_or_else(|error| panic!("shift fixture: {error}"))
}

fn build() -> (AuthorizationService, Fixture, Arc<FakeDirectoryRepository>) {
    let company_id = CompanyId::new();
    let other_company_id = CompanyId::new();
    let manager_id = UserId::new();
    let employee_id = UserId::new();
    let colleague_id = UserId::new();
    let admin_user_id = UserId::new();

    let mut repository = FakeDirectoryRepository::default();
    for id in [company_id, other_company_id] {
        repository.companies.insert(
            id,
            Company::new(id, "Harbor Cafe", None, None)
                .unwrap_or_else(|error| panic!("company fixture: {error}")),
        );
    }
    for (user_id, role, company) in [
        (manager_id, Role::Manager, Some(company_id)),
        (employee_id, Role::Employee, Some(company_id)),
        (colleague_id, Role::Staff, Some(company_id)),
        (admin_user_id, Role::SystemAdmin, Some(company_id)),
    ] {
        repository
            .profiles
            .insert(user_id, profile(user_id, role, company));
    }

    let published = shift(company_id, Some(colleague_id), 1, true);
    let draft = shift(company_id, Some(colleague_id), 2, false);
    let own_draft = shift(company_id, Some(employee_id), 3, false);
    let foreign = shift(other_company_id, None, 4, true);
    let fixture_ids = (published.id(), draft.id(), own_draft.id(), foreign.id());
    for value in [published, draft, own_draft, foreign] {
        repository.shifts.insert(value.id(), value);
    }

    let template = ShiftTemplate::new(
        ShiftTemplateId::new(),
        company_id,
        "Opening",
        NaiveTime::from_hms_opt(6, 0, 0).unwrap_or_default(),
        NaiveTime::from_hms_opt(14, 0, 0).unwrap_or_default(),
        None,
    )
    .unwrap_or_else(|error| panic!("template fixture: {error}"));
    let template_id = template.id();
    repository.templates.insert(template_id, template);

    let swap_request = SwapRequest::new(
        SwapRequestId::new(),
        fixture_ids.0,
        company_id,
        colleague_id,
        Some(employee_id),
        Some("doctor appointment".to_owned()),
    )
    .unwrap_or_else(|error| panic!("swap fixture: {error}"));
    let swap_request_id = swap_request.id();
    let approved = SwapRequest::new(
        SwapRequestId::new(),
        fixture_ids.1,
        company_id,
        colleague_id,
        None,
        None,
    )
    .unwrap_or_else(|error| panic!("swap fixture: {error}"))
    .with_status(ApprovalStatus::Approved);
    let approved_swap_request_id = approved.id();
    let mismatched = SwapRequest::new(
        SwapRequestId::new(),
        fixture_ids.3,
        company_id,
        colleague_id,
        None,
        None,
    )
    .unwrap_or_else(|error| panic!("swap fixture: {error}"));
    let mismatched_swap_request_id = mismatched.id();
    repository
        .swap_requests
        .insert(mismatched_swap_request_id, mismatched);
    repository.swap_requests.insert(swap_request_id, swap_request);
    repository
        .swap_requests
        .insert(approved_swap_request_id, approved);

    let preference = AvailabilityPreference::new(
        PreferenceId::new(),
        employee_id,
        company_id,
        Weekday::Sat,
        NaiveTime::from_hms_opt(8, 0, 0).unwrap_or_default(),
        NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default(),
        PreferenceLevel::Unavailable,
    )
    .unwrap_or_else(|error| panic!("preference fixture: {error}"));
    let preference_id = preference.id();
    repository.preferences.insert(preference_id, preference);

    let repository = Arc::new(repository);
    let service = AuthorizationService::new(repository.clone());
    let fixture = Fixture {
        company_id,
        other_company_id,
        manager: ActorContext::new(Some(Role::Manager), Some(manager_id), Some(company_id)),
        employee: ActorContext::new(Some(Role::Employee), Some(employee_id), Some(company_id)),
        colleague_id,
        published_shift: fixture_ids.0,
        draft_shift: fixture_ids.1,
        own_draft_shift: fixture_ids.2,
        foreign_shift: fixture_ids.3,
        template_id,
        swap_request_id,
        approved_swap_request_id,
        mismatched_swap_request_id,
        preference_id,
        admin_user_id,
    };

    (service, fixture, repository)
}

#[tokio::test]
async fn employee_sees_published_and_own_shifts_only() {
    let (service, fixture, _) = build();

    let visible = service
        .visible_shifts(&fixture.employee, fixture.company_id)
        .await
        .unwrap_or_default();
    let ids: Vec<ShiftId> = visible.iter().map(Shift::id).collect();

    assert_eq!(ids, vec![fixture.published_shift, fixture.own_draft_shift]);
}

#[tokio::test]
async fn manager_sees_every_shift_of_own_company() {
    let (service, fixture, _) = build();

    let visible = service
        .visible_shifts(&fixture.manager, fixture.company_id)
        .await
        .unwrap_or_default();
    assert_eq!(visible.len(), 3);

    let foreign = service
        .visible_shifts(&fixture.manager, fixture.other_company_id)
        .await
        .unwrap_or_default();
    assert!(foreign.is_empty());
}

#[tokio::test]
async fn unknown_company_is_not_found_for_system_admin() {
    let (service, fixture, _) = build();
    let admin = ActorContext::new(Some(Role::SystemAdmin), Some(fixture.admin_user_id), None);

    let result = service.visible_shifts(&admin, CompanyId::new()).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn outsiders_cannot_tell_known_from_unknown_companies() {
    let (service, fixture, _) = build();

    let known = service
        .visible_shifts(&fixture.manager, fixture.other_company_id)
        .await;
    let unknown = service
        .visible_shifts(&fixture.manager, CompanyId::new())
        .await;
    assert!(matches!(known, Ok(shifts) if shifts.is_empty()));
    assert!(matches!(unknown, Ok(shifts) if shifts.is_empty()));

    let anonymous = ActorContext::anonymous();
    assert!(matches!(
        service
            .visible_shifts(&anonymous, fixture.company_id)
            .await,
        Err(AppError::Forbidden(_))
    ));
    assert!(matches!(
        service.visible_shifts(&anonymous, CompanyId::new()).await,
        Err(AppError::Forbidden(_))
    ));
}

#[tokio::test]
async fn shift_access_reports_each_flag() {
    let (service, fixture, _) = build();

    let draft = service
        .shift_access(&fixture.employee, fixture.draft_shift)
        .await;
    assert!(matches!(
        draft,
        Ok(access) if !access.can_view && !access.can_modify && !access.can_approve_swap
    ));

    let own = service
        .shift_access(&fixture.employee, fixture.own_draft_shift)
        .await;
    assert!(matches!(own, Ok(access) if access.can_view && !access.can_modify));

    let managed = service
        .shift_access(&fixture.manager, fixture.draft_shift)
        .await;
    assert!(matches!(
        managed,
        Ok(access) if access.can_view && access.can_modify && access.can_approve_swap
    ));

    let foreign = service
        .shift_access(&fixture.manager, fixture.foreign_shift)
        .await;
    assert!(matches!(foreign, Ok(access) if !access.can_view && !access.can_modify));
}

#[tokio::test]
async fn shift_modification_is_forbidden_across_companies() {
    let (service, fixture, _) = build();

    assert!(
        service
            .require_shift_modification(&fixture.manager, fixture.published_shift)
            .await
            .is_ok()
    );
    assert!(matches!(
        service
            .require_shift_modification(&fixture.manager, fixture.foreign_shift)
            .await,
        Err(AppError::Forbidden(_))
    ));
    assert!(matches!(
        service
            .require_shift_modification(&fixture.manager, ShiftId::new())
            .await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn templates_follow_schedule_capability() {
    let (service, fixture, _) = build();

    assert!(
        service
            .require_template_modification(&fixture.manager, fixture.template_id)
            .await
            .is_ok()
    );
    assert!(matches!(
        service
            .require_template_modification(&fixture.employee, fixture.template_id)
            .await,
        Err(AppError::Forbidden(_))
    ));
}

#[tokio::test]
async fn manager_can_re_role_staff_but_not_system_admin() {
    let (service, fixture, _) = build();

    assert!(
        service
            .require_role_assignment(&fixture.manager, fixture.colleague_id, Role::ScheduleManager)
            .await
            .is_ok()
    );
    assert!(matches!(
        service
            .require_role_assignment(&fixture.manager, fixture.colleague_id, Role::SystemAdmin)
            .await,
        Err(AppError::Forbidden(_))
    ));
    assert!(matches!(
        service
            .require_role_assignment(&fixture.manager, fixture.admin_user_id, Role::Employee)
            .await,
        Err(AppError::Forbidden(_))
    ));
}

#[tokio::test]
async fn actor_cannot_change_own_role() {
    let (service, fixture, _) = build();
    let manager_id = fixture
        .manager
        .user_id
        .unwrap_or_else(|| panic!("manager has an id"));

    let result = service
        .require_role_assignment(&fixture.manager, manager_id, Role::Operator)
        .await;
    assert!(matches!(result, Err(AppError::Forbidden(_))));

    let access = service.user_access(&fixture.manager, manager_id).await;
    assert!(matches!(access, Ok(access) if access.can_manage && access.assignable_roles.is_empty()));
}

#[tokio::test]
async fn user_access_lists_assignable_roles_for_managed_user() {
    let (service, fixture, _) = build();

    let access = service
        .user_access(&fixture.manager, fixture.colleague_id)
        .await;
    assert!(matches!(
        access,
        Ok(access) if access.can_manage && access.assignable_roles.len() == 5
    ));

    let denied = service
        .user_access(&fixture.employee, fixture.colleague_id)
        .await;
    assert!(matches!(
        denied,
        Ok(access) if !access.can_manage && access.assignable_roles.is_empty()
    ));
}

#[tokio::test]
async fn system_admin_without_company_manages_any_user() {
    let (service, fixture, _) = build();
    let admin = ActorContext::new(Some(Role::SystemAdmin), Some(UserId::new()), None);

    assert!(
        service
            .require_user_management(&admin, fixture.colleague_id)
            .await
            .is_ok()
    );
    assert!(
        service
            .require_role_assignment(&admin, fixture.admin_user_id, Role::Manager)
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn swap_request_approval_rules() {
    let (service, fixture, _) = build();

    assert!(
        service
            .require_swap_request_approval(&fixture.manager, fixture.swap_request_id)
            .await
            .is_ok()
    );
    assert!(matches!(
        service
            .require_swap_request_approval(&fixture.employee, fixture.swap_request_id)
            .await,
        Err(AppError::Forbidden(_))
    ));
    assert!(matches!(
        service
            .require_swap_request_approval(&fixture.manager, fixture.approved_swap_request_id)
            .await,
        Err(AppError::Conflict(_))
    ));

    let foreign_manager = ActorContext::new(
        Some(Role::Manager),
        Some(UserId::new()),
        Some(fixture.other_company_id),
    );
    assert!(matches!(
        service
            .require_swap_request_approval(&foreign_manager, fixture.swap_request_id)
            .await,
        Err(AppError::Forbidden(_))
    ));
}

#[tokio::test]
async fn swap_approval_follows_company_of_swapped_shift() {
    let (service, fixture, _) = build();

    assert!(matches!(
        service
            .require_swap_request_approval(&fixture.manager, fixture.mismatched_swap_request_id)
            .await,
        Err(AppError::Forbidden(_))
    ));

    let shift_company_manager = ActorContext::new(
        Some(Role::Manager),
        Some(UserId::new()),
        Some(fixture.other_company_id),
    );
    assert!(
        service
            .require_swap_request_approval(
                &shift_company_manager,
                fixture.mismatched_swap_request_id
            )
            .await
            .is_ok()
    );
}

#[tokio::test]
async fn preference_approval_rules() {
    let (service, fixture, _) = build();

    assert!(
        service
            .require_preference_approval(&fixture.manager, fixture.preference_id)
            .await
            .is_ok()
    );

    let self_reviewing = ActorContext::new(
        Some(Role::ScheduleManager),
        fixture.employee.user_id,
        Some(fixture.company_id),
    );
    assert!(matches!(
        service
            .require_preference_approval(&self_reviewing, fixture.preference_id)
            .await,
        Err(AppError::Forbidden(_))
    ));
}

#[tokio::test]
async fn anonymous_actor_is_denied_everywhere() {
    let (service, fixture, repository) = build();
    let anonymous = ActorContext::anonymous();

    let access = service
        .shift_access(&anonymous, fixture.published_shift)
        .await;
    assert!(matches!(
        access,
        Ok(access) if !access.can_view && !access.can_modify && !access.can_approve_swap
    ));
    assert!(
        service
            .require_user_management(&anonymous, fixture.colleague_id)
            .await
            .is_err()
    );
    assert!(*repository.lookups.lock().await >= 2);
}

#[test]
fn capability_summary_for_schedule_manager() {
    let (service, fixture, _) = build();
    let actor = ActorContext::new(
        Some(Role::ScheduleManager),
        Some(UserId::new()),
        Some(fixture.company_id),
    );

    let summary = service.capability_summary(&actor);
    assert!(summary.capabilities.can_manage_schedules);
    assert!(!summary.capabilities.can_manage_employees);
    assert!(summary.assignable_roles.is_empty());
    assert!(summary.capability_tags.contains(&"approve_swaps"));
    assert!(summary.accessible_routes.contains(&AppRoute::ShiftTemplates));
    assert!(!summary.accessible_routes.contains(&AppRoute::CompanySettings));
}

#[test]
fn route_decision_resolves_paths() {
    let (service, fixture, _) = build();
    let homeless_manager = ActorContext::new(Some(Role::Manager), Some(UserId::new()), None);

    let decision = service.route_decision(&homeless_manager, "/schedule");
    assert!(matches!(
        decision,
        Ok((AppRoute::Schedule, decision)) if decision.denial() == Some(RouteDenial::CompanyRequired)
    ));
    assert!(matches!(
        service.route_decision(&fixture.employee, "/missing"),
        Err(AppError::NotFound(_))
    ));
}

#[test]
fn gate_evaluation_delegates_to_decision_table() {
    let (service, fixture, _) = build();
    let gate = AccessGate::for_capabilities([Capability::ApproveSwaps])
        .disable_instead()
        .with_tooltip("Only managers approve swaps");

    assert_eq!(service.evaluate_gate(&fixture.manager, &gate), GateOutcome::Render);
    assert!(matches!(
        service.evaluate_gate(&fixture.employee, &gate),
        GateOutcome::RenderDisabled { tooltip: Some(_) }
    ));
}
