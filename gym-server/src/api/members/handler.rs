//! Member API Handlers
//!
//! Registration and renewal load the plan, compute the membership window
//! through the lifecycle engine, and hand the repository one atomic write
//! (member + ledger row). The clock is read exactly once per request.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{MemberCreate, MemberRenew, MemberUpdate, MemberView};
use crate::db::repository::{MemberRepository, PlanRepository};
use crate::membership;
use crate::utils::validation::{self, MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN};
use crate::utils::{AppError, AppResult, time};

/// GET /api/members - all members, newest first
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<MemberView>>> {
    let now = time::now_millis();
    let repo = MemberRepository::new(state.db.clone());
    let members = repo.find_all().await?;
    Ok(Json(
        members.into_iter().map(|m| m.into_view(now)).collect(),
    ))
}

/// POST /api/members - register a member on a plan
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MemberCreate>,
) -> AppResult<Json<MemberView>> {
    validation::validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validation::validate_required_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validation::validate_optional_text(&payload.email, "email", MAX_EMAIL_LEN)?;

    let now = time::now_millis();
    let tz = state.config.timezone;

    let plans = PlanRepository::new(state.db.clone());
    let plan = plans
        .find_by_id(&payload.plan_id)
        .await?
        .ok_or_else(|| AppError::not_found("Membership plan not found"))?;

    let members = MemberRepository::new(state.db.clone());
    if let Some(ref email) = payload.email
        && members.find_by_email(email, None).await?.is_some()
    {
        return Err(AppError::conflict("A member with this email already exists"));
    }
    if members.find_by_phone(&payload.phone, None).await?.is_some() {
        return Err(AppError::conflict(
            "A member with this phone number already exists",
        ));
    }

    let window = membership::registration_window(plan.duration_months, now, tz);
    let member = members
        .register(payload.name, payload.email, payload.phone, &plan, window, now)
        .await?;

    Ok(Json(member.into_view(now)))
}

/// PUT /api/members/{id} - update profile fields
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<MemberUpdate>,
) -> AppResult<Json<MemberView>> {
    validation::validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validation::validate_required_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validation::validate_optional_text(&payload.email, "email", MAX_EMAIL_LEN)?;

    let now = time::now_millis();
    let members = MemberRepository::new(state.db.clone());
    let existing = members
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Member not found"))?;

    let exclude = existing.id.as_ref();
    if let Some(ref email) = payload.email
        && members.find_by_email(email, exclude).await?.is_some()
    {
        return Err(AppError::conflict(
            "This email is already in use by another member",
        ));
    }
    if members
        .find_by_phone(&payload.phone, exclude)
        .await?
        .is_some()
    {
        return Err(AppError::conflict(
            "This phone number is already in use by another member",
        ));
    }

    let member = members.update_profile(&id, payload).await?;
    Ok(Json(member.into_view(now)))
}

/// PUT /api/members/{id}/renew - renew onto a plan
pub async fn renew(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<MemberRenew>,
) -> AppResult<Json<MemberView>> {
    let now = time::now_millis();
    let tz = state.config.timezone;

    let members = MemberRepository::new(state.db.clone());
    let member = members
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found("Member not found"))?;

    let plans = PlanRepository::new(state.db.clone());
    let plan = plans
        .find_by_id(&payload.plan_id)
        .await?
        .ok_or_else(|| AppError::not_found("Membership plan not found"))?;

    let window =
        membership::renewal_window(plan.duration_months, member.membership.end_date, now, tz);
    let member_id = member
        .id
        .ok_or_else(|| AppError::internal("Member record has no id"))?;

    let updated = members.renew(&member_id, &plan, window, now).await?;
    Ok(Json(updated.into_view(now)))
}
