//! HTTP surface tests — drive the real router end to end

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use gym_server::db::models::PlanCreate;
use gym_server::db::repository::{CheckinRepository, MemberRepository, PlanRepository};
use gym_server::membership;
use gym_server::utils::time;
use gym_server::{Config, ServerState};

async fn test_state() -> (tempfile::TempDir, ServerState) {
    let tmp = tempfile::tempdir().unwrap();
    let config = Config::with_overrides(tmp.path().to_string_lossy().to_string(), 0);
    let state = ServerState::initialize(&config).await.unwrap();
    (tmp, state)
}

fn app(state: &ServerState) -> Router {
    gym_server::api::build_app().with_state(state.clone())
}

async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(v) => builder
            .header("content-type", "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    let (_tmp, state) = test_state().await;
    let app = app(&state);

    let (status, body) = send_json(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn full_registration_flow_over_http() {
    let (_tmp, state) = test_state().await;
    let app = app(&state);

    // Create a plan
    let (status, plan) = send_json(
        &app,
        "POST",
        "/api/plans",
        Some(json!({"name": "Basic (1 Month)", "duration_months": 1, "price": 160000})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let plan_id = plan["id"].as_str().unwrap().to_string();

    // Register a member on it
    let (status, member) = send_json(
        &app,
        "POST",
        "/api/members",
        Some(json!({
            "name": "Budi",
            "phone": "0812000001",
            "email": "budi@example.com",
            "plan_id": plan_id,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(member["membership"]["status"], "Active");
    assert_eq!(member["membership"]["plan_name"], "Basic (1 Month)");
    assert_eq!(member["membership"]["price"], 160000);
    let member_id = member["id"].as_str().unwrap().to_string();

    // Same phone again conflicts
    let (status, err) = send_json(
        &app,
        "POST",
        "/api/members",
        Some(json!({
            "name": "Someone Else",
            "phone": "0812000001",
            "plan_id": plan_id,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(err["code"], "E0004");

    // Check the member in
    let (status, checkin) = send_json(
        &app,
        "POST",
        "/api/checkins",
        Some(json!({"member_id": member_id})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(checkin["member_name"], "Budi");

    let (status, today) = send_json(&app, "GET", "/api/checkins/today", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(today.as_array().unwrap().len(), 1);

    // One ledger row for the registration fee
    let (status, ledger) = send_json(&app, "GET", "/api/transactions", None).await;
    assert_eq!(status, StatusCode::OK);
    let ledger = ledger.as_array().unwrap();
    assert_eq!(ledger.len(), 1);
    assert_eq!(ledger[0]["amount"], 160000);

    // Dashboard reflects all of it
    let (status, stats) = send_json(&app, "GET", "/api/dashboard/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["kpi"]["todays_revenue"], 160000);
    assert_eq!(stats["kpi"]["todays_checkins"], 1);
    assert_eq!(stats["kpi"]["active_members"], 1);
    assert_eq!(stats["kpi"]["new_members_today"], 1);
    assert_eq!(stats["charts"]["weekly"].as_array().unwrap().len(), 7);
    assert_eq!(stats["charts"]["monthly"].as_array().unwrap().len(), 30);

    // Renewing while active extends the window
    let (status, renewed) = send_json(
        &app,
        "PUT",
        &format!("/api/members/{member_id}/renew"),
        Some(json!({"plan_id": plan_id})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        renewed["membership"]["start_date"],
        member["membership"]["end_date"]
    );

    let (_, ledger) = send_json(&app, "GET", "/api/transactions", None).await;
    assert_eq!(ledger.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn validation_and_lookup_failures_map_to_error_codes() {
    let (_tmp, state) = test_state().await;
    let app = app(&state);

    let (status, err) = send_json(
        &app,
        "POST",
        "/api/plans",
        Some(json!({"name": "  ", "duration_months": 1, "price": 160000})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["code"], "E0002");

    let (status, err) = send_json(
        &app,
        "POST",
        "/api/plans",
        Some(json!({"name": "Negative", "duration_months": -1, "price": 160000})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["code"], "E0002");

    let (status, err) = send_json(
        &app,
        "POST",
        "/api/members",
        Some(json!({"name": "Budi", "phone": "0812", "plan_id": "plan:doesnotexist"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err["code"], "E0003");

    let (status, _) = send_json(
        &app,
        "PUT",
        "/api/plans/plan:doesnotexist",
        Some(json!({"price": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn expired_membership_cannot_check_in() {
    let (_tmp, state) = test_state().await;
    let app = app(&state);
    let tz = state.config.timezone;

    // A member whose one-month window closed a month ago
    let plan = PlanRepository::new(state.db.clone())
        .create(PlanCreate {
            name: "Basic (1 Month)".to_string(),
            duration_months: 1,
            price: 160_000,
        })
        .await
        .unwrap();

    let registered_at = time::now_millis() - 60 * time::DAY_MILLIS;
    let window = membership::registration_window(plan.duration_months, registered_at, tz);
    let member = MemberRepository::new(state.db.clone())
        .register(
            "Budi".to_string(),
            None,
            "0812000001".to_string(),
            &plan,
            window,
            registered_at,
        )
        .await
        .unwrap();

    let (status, err) = send_json(
        &app,
        "POST",
        "/api/checkins",
        Some(json!({"member_id": member.id.as_ref().unwrap().to_string()})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(err["code"], "E0005");

    // The rejection wrote nothing
    let rows = CheckinRepository::new(state.db.clone())
        .find_since(0)
        .await
        .unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn pos_flow_over_http() {
    let (_tmp, state) = test_state().await;
    let app = app(&state);

    let (status, food) = send_json(
        &app,
        "POST",
        "/api/foods",
        Some(json!({"name": "Water", "price": 5000, "stock": 3})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let food_id = food["id"].as_str().unwrap().to_string();

    let (status, sale) = send_json(
        &app,
        "POST",
        "/api/sales",
        Some(json!({"items": [{"food_id": food_id, "quantity": 3}]})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(sale["total"], 15000);

    let (_, foods) = send_json(&app, "GET", "/api/foods", None).await;
    assert_eq!(foods.as_array().unwrap()[0]["stock"], 0);

    // Sold out
    let (status, err) = send_json(
        &app,
        "POST",
        "/api/sales",
        Some(json!({"items": [{"food_id": food_id, "quantity": 1}]})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(err["code"], "E0007");

    let (_, sales) = send_json(&app, "GET", "/api/sales", None).await;
    assert_eq!(sales.as_array().unwrap().len(), 1);

    // Empty carts are rejected before touching anything
    let (status, err) = send_json(&app, "POST", "/api/sales", Some(json!({"items": []}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["code"], "E0002");
}
