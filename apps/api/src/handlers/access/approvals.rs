use super::*;

pub async fn approve_swap_request_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<ActorContext>,
    Path(swap_request_id): Path<String>,
) -> ApiResult<StatusCode> {
    let swap_request_id = SwapRequestId::parse(swap_request_id.as_str())?;

    state
        .authorization_service
        .require_swap_request_approval(&actor, swap_request_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn approve_preference_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<ActorContext>,
    Path(preference_id): Path<String>,
) -> ApiResult<StatusCode> {
    let preference_id = PreferenceId::parse(preference_id.as_str())?;

    state
        .authorization_service
        .require_preference_approval(&actor, preference_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
