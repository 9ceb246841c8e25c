use super::*;

pub async fn me_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<ActorContext>,
) -> Json<CapabilitySummaryResponse> {
    Json(CapabilitySummaryResponse::from(
        state.authorization_service.capability_summary(&actor),
    ))
}

pub async fn route_access_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<ActorContext>,
    Query(query): Query<RouteAccessQuery>,
) -> ApiResult<Json<RouteAccessResponse>> {
    let (route, decision) = state
        .authorization_service
        .route_decision(&actor, query.path.as_str())?;

    Ok(Json(RouteAccessResponse::new(route, decision)))
}

pub async fn gate_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<ActorContext>,
    Json(payload): Json<GateRequest>,
) -> ApiResult<Json<GateResponse>> {
    let gate = payload.into_gate()?;
    let outcome = state.authorization_service.evaluate_gate(&actor, &gate);

    Ok(Json(GateResponse::from(outcome)))
}
