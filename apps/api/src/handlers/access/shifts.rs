use super::*;

pub async fn shift_access_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<ActorContext>,
    Path(shift_id): Path<String>,
) -> ApiResult<Json<ShiftAccessResponse>> {
    let shift_id = ShiftId::parse(shift_id.as_str())?;
    let access = state
        .authorization_service
        .shift_access(&actor, shift_id)
        .await?;

    Ok(Json(ShiftAccessResponse::from(access)))
}

pub async fn company_shifts_handler(
    State(state): State<AppState>,
    Extension(actor): Extension<ActorContext>,
    Path(company_id): Path<String>,
) -> ApiResult<Json<Vec<ShiftResponse>>> {
    let company_id = company_id.parse::<CompanyId>()?;
    let shifts = state
        .authorization_service
        .visible_shifts(&actor, company_id)
        .await?
        .into_iter()
        .map(ShiftResponse::from)
        .collect();

    Ok(Json(shifts))
}
