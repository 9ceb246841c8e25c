use chrono::{Duration, NaiveTime, Utc, Weekday};
use scaleflow_core::{AppError, AppResult, CompanyId};
use scaleflow_domain::{
    AvailabilityPreference, Company, PreferenceId, PreferenceLevel, Profile, Role, Shift,
    ShiftId, ShiftInput, ShiftTemplate, ShiftTemplateId, SwapRequest, SwapRequestId, UserId,
};
use scaleflow_infrastructure::InMemoryDirectoryRepository;
use tracing::info;
use uuid::Uuid;

const DEV_SEED_COMPANY_ID: &str = "11111111-1111-1111-1111-111111111111";
const DEV_SEED_COMPANY_NAME: &str = "Harbor Street Bakery";
const DEV_SEED_ADMIN_USER_ID: &str = "a2c8ea5f-4f39-4724-97f5-932f97f54f76";
const DEV_SEED_MANAGER_USER_ID: &str = "5b0e1c52-7a57-4c8e-9d0f-3f4a8e61b7d2";
const DEV_SEED_SCHEDULER_USER_ID: &str = "c61d2b9e-0e4f-4a7b-8f25-6a3d9c1e4b80";
const DEV_SEED_STAFF_USER_ID: &str = "96d11e90-7403-4654-9727-cb1043f8bd31";
const DEV_SEED_COWORKER_USER_ID: &str = "e4f7a2c1-3b8d-4f6e-a9c0-7d2b5e8f1a34";

/// Ids of the seeded demo directory.
#[derive(Debug, Clone, Copy)]
pub struct DemoDirectory {
    pub company_id: CompanyId,
    pub admin_id: UserId,
    pub manager_id: UserId,
    pub scheduler_id: UserId,
    pub staff_id: UserId,
    pub coworker_id: UserId,
    pub published_shift_id: ShiftId,
    pub draft_shift_id: ShiftId,
    pub template_id: ShiftTemplateId,
    pub preference_id: PreferenceId,
    pub swap_request_id: SwapRequestId,
}

pub async fn run(repository: &InMemoryDirectoryRepository) -> AppResult<DemoDirectory> {
    let company_id = CompanyId::from_uuid(parse_uuid_const(
        DEV_SEED_COMPANY_ID,
        "DEV_SEED_COMPANY_ID",
    )?);
    let admin_id = seed_user_id(DEV_SEED_ADMIN_USER_ID, "DEV_SEED_ADMIN_USER_ID")?;
    let manager_id = seed_user_id(DEV_SEED_MANAGER_USER_ID, "DEV_SEED_MANAGER_USER_ID")?;
    let scheduler_id = seed_user_id(DEV_SEED_SCHEDULER_USER_ID, "DEV_SEED_SCHEDULER_USER_ID")?;
    let staff_id = seed_user_id(DEV_SEED_STAFF_USER_ID, "DEV_SEED_STAFF_USER_ID")?;
    let coworker_id = seed_user_id(DEV_SEED_COWORKER_USER_ID, "DEV_SEED_COWORKER_USER_ID")?;

    repository
        .save_company(Company::new(
            company_id,
            DEV_SEED_COMPANY_NAME,
            Some("12 Harbor Street".to_owned()),
            None,
        )?)
        .await?;

    for (user_id, email, first_name, role, company) in [
        (
            admin_id,
            "admin@scaleflow.local",
            "Platform",
            Role::SystemAdmin,
            None,
        ),
        (
            manager_id,
            "manager@scaleflow.local",
            "Maya",
            Role::Manager,
            Some(company_id),
        ),
        (
            scheduler_id,
            "scheduler@scaleflow.local",
            "Sam",
            Role::ScheduleManager,
            Some(company_id),
        ),
        (
            staff_id,
            "staff@scaleflow.local",
            "Theo",
            Role::Staff,
            Some(company_id),
        ),
        (
            coworker_id,
            "coworker@scaleflow.local",
            "Nina",
            Role::Employee,
            Some(company_id),
        ),
    ] {
        repository
            .save_profile(Profile::new(user_id, email, first_name, None, role, company)?)
            .await?;
    }

    let tomorrow = Utc::now() + Duration::days(1);
    let published_shift_id = ShiftId::new();
    repository
        .save_shift(Shift::new(
            published_shift_id,
            ShiftInput {
                company_id,
                employee_id: Some(staff_id),
                starts_at: tomorrow,
                ends_at: tomorrow + Duration::hours(8),
                position: Some("Front counter".to_owned()),
                notes: None,
                is_published: true,
                created_by: Some(scheduler_id),
            },
        )?)
        .await?;

    let draft_shift_id = ShiftId::new();
    repository
        .save_shift(Shift::new(
            draft_shift_id,
            ShiftInput {
                company_id,
                employee_id: None,
                starts_at: tomorrow + Duration::days(1),
                ends_at: tomorrow + Duration::days(1) + Duration::hours(6),
                position: Some("Ovens".to_owned()),
                notes: Some("Needs a second baker".to_owned()),
                is_published: false,
                created_by: Some(scheduler_id),
            },
        )?)
        .await?;

    let template_id = ShiftTemplateId::new();
    repository
        .save_shift_template(ShiftTemplate::new(
            template_id,
            company_id,
            "Early bake",
            seed_time(4, 0)?,
            seed_time(12, 0)?,
            Some("Ovens".to_owned()),
        )?)
        .await?;

    let preference_id = PreferenceId::new();
    repository
        .save_preference(AvailabilityPreference::new(
            preference_id,
            staff_id,
            company_id,
            Weekday::Sat,
            seed_time(8, 0)?,
            seed_time(14, 0)?,
            PreferenceLevel::Preferred,
        )?)
        .await?;

    let swap_request_id = SwapRequestId::new();
    repository
        .save_swap_request(SwapRequest::new(
            swap_request_id,
            published_shift_id,
            company_id,
            staff_id,
            Some(coworker_id),
            Some("Family event".to_owned()),
        )?)
        .await?;

    info!(
        %company_id,
        company_name = DEV_SEED_COMPANY_NAME,
        %published_shift_id,
        %draft_shift_id,
        %swap_request_id,
        %preference_id,
        "development directory seed completed"
    );

    Ok(DemoDirectory {
        company_id,
        admin_id,
        manager_id,
        scheduler_id,
        staff_id,
        coworker_id,
        published_shift_id,
        draft_shift_id,
        template_id,
        preference_id,
        swap_request_id,
    })
}

fn seed_user_id(value: &str, name: &str) -> AppResult<UserId> {
    parse_uuid_const(value, name).map(UserId::from_uuid)
}

fn parse_uuid_const(value: &str, name: &str) -> AppResult<Uuid> {
    Uuid::parse_str(value).map_err(|error| {
        AppError::Internal(format!("invalid static uuid '{name}={value}': {error}"))
    })
}

fn seed_time(hour: u32, minute: u32) -> AppResult<NaiveTime> {
    NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or_else(|| AppError::Internal(format!("invalid seed time {hour}:{minute}")))
}
