use super::*;

pub async fn user_access_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<ActorContext>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<UserAccessResponse>> {
    let user_id = UserId::parse(user_id.as_str())?;
    let access = state
        .authorization_service
        .user_access(&actor, user_id)
        .await?;

    Ok(Json(UserAccessResponse::from(access)))
}

pub async fn assign_role_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<ActorContext>,
    Path(user_id): Path<String>,
    Json(payload): Json<AssignRoleRequest>,
) -> ApiResult<StatusCode> {
    let user_id = UserId::parse(user_id.as_str())?;
    let role = Role::from_transport(payload.role.as_str())?;

    state
        .authorization_service
        .require_role_assignment(&actor, user_id, role)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
