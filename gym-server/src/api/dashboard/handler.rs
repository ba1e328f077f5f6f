//! Dashboard API Handlers
//!
//! Read-side only: fetches the ledger rows for the widest window any chart
//! needs, then derives KPIs and series with the pure aggregation in
//! [`crate::reporting`].

use axum::{Json, extract::State};
use chrono::Duration;
use serde::Serialize;

use crate::core::ServerState;
use crate::db::models::MemberView;
use crate::db::repository::{CheckinRepository, MemberRepository, TransactionRepository};
use crate::reporting::{self, DailyPoint, HourBucket};
use crate::utils::{AppResult, time};

/// Days covered by the expiring-soon list
const EXPIRING_WINDOW_DAYS: i64 = 7;

/// Days covered by the busiest-hours histogram
const BUSIEST_HOURS_LOOKBACK_DAYS: i64 = 30;

// ============================================================================
// Response Types
// ============================================================================

/// KPI card values
#[derive(Debug, Clone, Serialize)]
pub struct DashboardKpi {
    pub todays_revenue: i64,
    pub todays_checkins: i64,
    pub active_members: i64,
    pub new_members_today: i64,
}

/// Chart series
#[derive(Debug, Clone, Serialize)]
pub struct DashboardCharts {
    pub weekly: Vec<DailyPoint>,
    pub monthly: Vec<DailyPoint>,
    pub busiest_hours: Vec<HourBucket>,
}

/// Full dashboard response
#[derive(Debug, Serialize)]
pub struct DashboardStats {
    pub kpi: DashboardKpi,
    pub expiring_soon: Vec<MemberView>,
    pub charts: DashboardCharts,
}

// ============================================================================
// Handler
// ============================================================================

/// GET /api/dashboard/stats
pub async fn stats(State(state): State<ServerState>) -> AppResult<Json<DashboardStats>> {
    let now = time::now_millis();
    let tz = state.config.timezone;
    let today = time::local_date(now, tz);

    let day_start = time::day_start_millis(today, tz);
    let day_end = time::day_end_millis(today, tz);

    // Widest fetch window: the 30-day chart starts at a day boundary, the
    // busiest-hours lookback at an instant
    let series_start = time::day_start_millis(today - Duration::days(29), tz);
    let lookback_start = now - BUSIEST_HOURS_LOOKBACK_DAYS * time::DAY_MILLIS;
    let fetch_from = series_start.min(lookback_start);

    let transactions = TransactionRepository::new(state.db.clone())
        .find_since(series_start)
        .await?;
    let checkins = CheckinRepository::new(state.db.clone())
        .find_since(fetch_from)
        .await?;

    let members = MemberRepository::new(state.db.clone());
    let active_members = members.count_active(now).await?;
    let new_members_today = members.count_joined_between(day_start, day_end).await?;
    let expiring = members
        .expiring_between(now, now + EXPIRING_WINDOW_DAYS * time::DAY_MILLIS)
        .await?;

    let kpi = DashboardKpi {
        todays_revenue: reporting::sum_in_range(&transactions, day_start, day_end),
        todays_checkins: reporting::count_in_range(&checkins, day_start, day_end),
        active_members,
        new_members_today,
    };

    let charts = DashboardCharts {
        weekly: reporting::daily_series(&transactions, &checkins, 7, now, tz),
        monthly: reporting::daily_series(&transactions, &checkins, 30, now, tz),
        busiest_hours: reporting::busiest_hours(
            &checkins,
            now,
            BUSIEST_HOURS_LOOKBACK_DAYS,
            tz,
        ),
    };

    Ok(Json(DashboardStats {
        kpi,
        expiring_soon: expiring.into_iter().map(|m| m.into_view(now)).collect(),
        charts,
    }))
}
