//! Check-in API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::db::models::{Checkin, CheckinCreate, MembershipStatus};
use crate::db::repository::{CheckinRepository, MemberRepository};
use crate::utils::{AppError, AppResult, time};

/// POST /api/checkins - check a member in
///
/// Rejected with no row written when the membership is expired. Repeat
/// check-ins on the same day are allowed; the attendance log keeps them
/// all.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CheckinCreate>,
) -> AppResult<Json<Checkin>> {
    let now = time::now_millis();

    let members = MemberRepository::new(state.db.clone());
    let member = members
        .find_by_id(&payload.member_id)
        .await?
        .ok_or_else(|| AppError::not_found("Member not found"))?;

    if member.membership.status(now) != MembershipStatus::Active {
        return Err(AppError::business_rule("Membership is expired. Please renew."));
    }

    let checkins = CheckinRepository::new(state.db.clone());
    let checkin = checkins.create(&member, now).await?;
    Ok(Json(checkin))
}

/// GET /api/checkins/today - today's check-ins, most recent first
pub async fn list_today(State(state): State<ServerState>) -> AppResult<Json<Vec<Checkin>>> {
    let now = time::now_millis();
    let tz = state.config.timezone;
    let today = time::local_date(now, tz);

    let checkins = CheckinRepository::new(state.db.clone());
    let rows = checkins
        .find_between_desc(
            time::day_start_millis(today, tz),
            time::day_end_millis(today, tz),
        )
        .await?;
    Ok(Json(rows))
}
