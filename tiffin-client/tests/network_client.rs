//! Network client against a real axum server on a local port

use axum::extract::{Path, Query};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::{delete, get, patch, post};
use axum::{Json, Router};
use chrono::NaiveDate;
use serde_json::{Value, json};
use std::collections::HashMap;
use tiffin_client::{ClientConfig, ClientError, Session, TiffinClient};

const SESSION_COOKIE: &str = "token=abc123";

fn user_json() -> Value {
    json!({"_id": "u1", "name": "Asha", "email": "asha@example.com", "role": "user"})
}

fn order_json(id: &str, status: &str) -> Value {
    json!({
        "_id": id,
        "userId": "u1",
        "providerId": "p1",
        "menuId": "m1",
        "items": [{"mealType": "full", "sabji": "Paneer", "quantity": 2, "pricePerUnit": 120, "totalPrice": 240}],
        "grandTotal": 240,
        "status": status
    })
}

fn has_session(headers: &HeaderMap) -> bool {
    headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|c| c.contains(SESSION_COOKIE))
}

async fn login(Json(body): Json<Value>) -> impl IntoResponse {
    if body["password"] == "secret1" {
        (
            StatusCode::OK,
            [(header::SET_COOKIE, format!("{SESSION_COOKIE}; Path=/; HttpOnly"))],
            Json(json!({"message": "Login successful", "user": user_json()})),
        )
            .into_response()
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"message": "Invalid email or password"})),
        )
            .into_response()
    }
}

async fn current_user(headers: HeaderMap) -> impl IntoResponse {
    if has_session(&headers) {
        (StatusCode::OK, Json(json!({"user": user_json()})))
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"message": "Not authenticated"})),
        )
    }
}

async fn list_orders(Query(q): Query<HashMap<String, String>>) -> Json<Value> {
    let id = format!(
        "{}-{}",
        q.get("userId").cloned().unwrap_or_default(),
        q.get("date").cloned().unwrap_or_else(|| "all".into())
    );
    Json(json!({"count": 1, "orders": [order_json(&id, "pending")]}))
}

async fn update_status(Path(id): Path<String>, Json(body): Json<Value>) -> Json<Value> {
    let status = body["status"].as_str().unwrap_or("pending").to_string();
    Json(json!({"message": "Order updated", "order": order_json(&id, &status)}))
}

async fn delete_menu(Path(id): Path<String>, Json(body): Json<Value>) -> impl IntoResponse {
    if body["providerId"] == "p1" {
        (StatusCode::OK, Json(json!({"message": format!("Menu {id} deleted")})))
    } else {
        (
            StatusCode::FORBIDDEN,
            Json(json!({"message": "Not your menu"})),
        )
    }
}

fn app() -> Router {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/user", get(current_user))
        .route("/order", get(list_orders))
        .route("/order/{id}/status", patch(update_status))
        .route("/provider/{id}", delete(delete_menu))
        .route(
            "/provider",
            get(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({"message": "Server error"})),
                )
            }),
        )
        .route(
            "/user/providers",
            get(|| async { (StatusCode::BAD_GATEWAY, "upstream down") }),
        )
}

async fn spawn_backend() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app()).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_login_sets_cookie_and_user_is_fetched() {
    let base = spawn_backend().await;
    let session = Session::from_config(&ClientConfig::new(&base)).unwrap();

    let user = session.login("asha@example.com", "secret1").await.unwrap();
    assert_eq!(user.id, "u1");
    assert_eq!(session.current_user().await.map(|u| u.name), Some("Asha".into()));

    let refreshed = session.refresh_user().await.unwrap();
    assert_eq!(refreshed.map(|u| u.email), Some("asha@example.com".into()));
}

#[tokio::test]
async fn test_wrong_password_surfaces_server_message() {
    let base = spawn_backend().await;
    let session = Session::from_config(&ClientConfig::new(&base)).unwrap();

    let err = session.login("asha@example.com", "nope").await.unwrap_err();
    assert!(matches!(&err, ClientError::NotAuthenticated(m) if m == "Invalid email or password"));
    assert!(session.current_user().await.is_none());
}

#[tokio::test]
async fn test_refresh_without_cookie_is_silent_logout() {
    let base = spawn_backend().await;
    let session = Session::from_config(&ClientConfig::new(&base)).unwrap();
    assert_eq!(session.refresh_user().await.unwrap(), None);
    assert!(session.require_user().await.unwrap_err().is_not_authenticated());
}

#[tokio::test]
async fn test_session_survives_restart_and_logout_clears_it() {
    let base = spawn_backend().await;
    let dir = tempfile::tempdir().unwrap();
    let config = ClientConfig::new(&base).with_session_dir(dir.path());

    let first = Session::from_config(&config).unwrap();
    first.login("asha@example.com", "secret1").await.unwrap();
    drop(first);

    let second = Session::from_config(&config).unwrap();
    let restored = second.restore().await;
    assert_eq!(restored.map(|u| u.id), Some("u1".into()));
    // restored cookie is accepted by the backend
    assert!(second.refresh_user().await.unwrap().is_some());

    second.logout().await.unwrap();
    assert!(second.current_user().await.is_none());
    assert!(!dir.path().join("session.json").exists());

    let third = Session::from_config(&config).unwrap();
    assert!(third.restore().await.is_none());
}

#[tokio::test]
async fn test_order_queries_and_status_update() {
    let base = spawn_backend().await;
    let client = TiffinClient::connect(&ClientConfig::new(&base)).unwrap();

    let all = client.list_orders("u1", None).await.unwrap();
    assert_eq!(all[0].id, "u1-all");

    let day = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
    let dated = client.list_orders("u1", Some(day)).await.unwrap();
    assert_eq!(dated[0].id, "u1-2026-10-18");

    let updated = client
        .update_order_status("o42", shared::OrderStatus::Preparing)
        .await
        .unwrap();
    assert_eq!(updated.id, "o42");
    assert_eq!(updated.status(), Some(shared::OrderStatus::Preparing));
}

#[tokio::test]
async fn test_error_mapping() {
    let base = spawn_backend().await;
    let client = TiffinClient::connect(&ClientConfig::new(&base)).unwrap();

    let err = client.list_menus().await.unwrap_err();
    assert!(err.is_server_error());
    assert_eq!(err.user_message("Failed to load menus"), "Server error");

    let err = client.list_providers().await.unwrap_err();
    assert_eq!(err.status(), Some(502));
    assert_eq!(err.to_string(), "upstream down");

    let err = client.delete_menu("m1", "p2").await.unwrap_err();
    assert!(matches!(err, ClientError::Forbidden(ref m) if m == "Not your menu"));

    let ok = client.delete_menu("m1", "p1").await.unwrap();
    assert_eq!(ok.message, "Menu m1 deleted");
}

#[tokio::test]
async fn test_unreachable_backend() {
    let client = TiffinClient::connect(&ClientConfig::new("http://127.0.0.1:9").with_timeout(2)).unwrap();
    let err = client.list_menus().await.unwrap_err();
    assert!(err.is_network_error());
    assert_eq!(
        err.user_message("Failed to load menus"),
        "Unable to reach the server. Check your connection."
    );
}
