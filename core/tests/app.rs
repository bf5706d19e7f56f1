// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end tests of the application core against a mocked backend.

use decorcal_core::{CalendarView, Config, DecorCal, LoadState, ViewMode};
use jiff::civil::date;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn setup(server: &MockServer) -> (TempDir, DecorCal) {
    let state_dir = TempDir::new().expect("Failed to create temp dir");
    let mut config = Config::new(server.uri());
    config.state_dir = Some(state_dir.path().to_path_buf());
    let app = DecorCal::new(config).await.expect("Failed to create app");
    (state_dir, app)
}

async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/auth/token"))
        .and(body_json(json!({ "username": "admin", "password": "secret" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "accessToken": "jwt-token",
            "expiresAtUtc": "2999-01-01T00:00:00Z",
            "tokenType": "Bearer",
            "role": "Admin"
        })))
        .mount(server)
        .await;
}

async fn mount_kits(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/kits"))
        .and(query_param("page", "1"))
        .and(query_param("pageSize", "20"))
        .and(header("Authorization", "Bearer jwt-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{ "id": "kit-1", "name": "Safari" }, { "id": "kit-2", "name": "Circo" }],
            "page": 1,
            "pageSize": 20,
            "totalCount": 2
        })))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/kits/kit-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "kit-1",
            "name": "Safari",
            "reservations": [{
                "id": "res-1",
                "startDate": "2024-05-10",
                "endDate": "2024-05-12",
                "status": "Active"
            }]
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn app_requires_login_before_loading() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/kits"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (_dir, app) = setup(&server).await;

    assert!(!app.is_authenticated());
    let err = app
        .calendar(CalendarView::new(date(2024, 5, 10)))
        .await
        .expect_err("Calendar should require a session");
    assert!(err.to_string().contains("Not logged in"));
}

#[tokio::test]
async fn app_rejects_stored_empty_token() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/kits"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let token = json!({
        "accessToken": "",
        "expiresAtUtc": "2999-01-01T00:00:00Z",
        "tokenType": "Bearer",
        "role": "Admin"
    });
    std::fs::write(dir.path().join("token.json"), token.to_string())
        .expect("Failed to write token file");

    let mut config = Config::new(server.uri());
    config.state_dir = Some(dir.path().to_path_buf());
    let app = DecorCal::new(config).await.expect("Failed to create app");

    // Act
    let err = app
        .calendar(CalendarView::new(date(2024, 5, 10)))
        .await
        .expect_err("Calendar should require a usable token");

    // Assert
    assert!(!app.is_authenticated());
    assert!(err.to_string().contains("Not logged in"));
}

#[tokio::test]
async fn app_login_persists_token() {
    // Arrange
    let server = MockServer::start().await;
    mount_login(&server).await;
    let (dir, mut app) = setup(&server).await;

    // Act
    let token = app
        .login("admin", "secret")
        .await
        .expect("Failed to log in");

    // Assert
    assert_eq!(token.access_token, "jwt-token");
    assert!(app.is_authenticated());

    let mut config = Config::new(server.uri());
    config.state_dir = Some(dir.path().to_path_buf());
    let reopened = DecorCal::new(config).await.expect("Failed to reopen app");
    assert!(reopened.is_authenticated());
}

#[tokio::test]
async fn app_logout_forgets_token() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    let (_dir, mut app) = setup(&server).await;
    app.login("admin", "secret").await.expect("Failed to log in");

    app.logout().await.expect("Failed to log out");

    assert!(!app.is_authenticated());
}

#[tokio::test]
async fn app_calendar_is_all_or_nothing() {
    // Arrange
    let server = MockServer::start().await;
    mount_login(&server).await;
    mount_kits(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/kits/kit-2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (_dir, mut app) = setup(&server).await;
    app.login("admin", "secret").await.expect("Failed to log in");

    // Act
    let page = app
        .calendar(CalendarView::new(date(2024, 5, 10)))
        .await
        .expect("Failed to build calendar page");

    // Assert
    match page.state() {
        LoadState::Errored(message) => assert_eq!(message, "Could not load the calendar."),
        other => panic!("Expected errored state, got {other:?}"),
    }
    assert!(page.month_grid().is_empty());
}

#[tokio::test]
async fn app_calendar_loads_week_view() {
    // Arrange
    let server = MockServer::start().await;
    mount_login(&server).await;
    mount_kits(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/kits/kit-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "kit-2",
            "name": "Circo",
            "reservations": [{
                "id": "res-2",
                "startDate": "2024-05-11",
                "endDate": "2024-05-11",
                "status": "Cancelled"
            }]
        })))
        .mount(&server)
        .await;

    let (_dir, mut app) = setup(&server).await;
    app.login("admin", "secret").await.expect("Failed to log in");

    // Act
    let view = CalendarView::new(date(2024, 5, 11)).with_mode(ViewMode::Week);
    let page = app.calendar(view).await.expect("Failed to build calendar page");

    // Assert
    let counts: Vec<_> = page.week_strip().iter().map(|c| c.count).collect();
    // Monday 2024-05-06 .. Sunday 2024-05-12
    assert_eq!(counts, [0, 0, 0, 0, 1, 2, 1]);
    assert_eq!(page.selected_items().len(), 2);
    assert_eq!(page.active_count(), 1);
}

#[tokio::test]
async fn app_dashboard_lists_active_reservations() {
    // Arrange
    let server = MockServer::start().await;
    mount_login(&server).await;
    mount_kits(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/kits/kit-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "kit-2",
            "name": "Circo",
            "reservations": [{
                "id": "res-2",
                "startDate": "2024-05-01",
                "endDate": "2024-05-02",
                "status": "Cancelled"
            }]
        })))
        .mount(&server)
        .await;

    let (_dir, mut app) = setup(&server).await;
    app.login("admin", "secret").await.expect("Failed to log in");

    // Act
    let dashboard = app.dashboard().await.expect("Failed to load dashboard");

    // Assert
    assert_eq!(dashboard.kit_count, 2);
    assert_eq!(dashboard.upcoming.len(), 1);
    assert_eq!(dashboard.upcoming[0].kit_name, "Safari");
    assert_eq!(dashboard.occupancy_label(), "1 reservas ativas");
}

#[tokio::test]
async fn app_dashboard_reports_failure() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    mount_kits(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/kits/kit-2"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let (_dir, mut app) = setup(&server).await;
    app.login("admin", "secret").await.expect("Failed to log in");

    let err = app.dashboard().await.expect_err("Expected the dashboard to fail");

    assert_eq!(err.to_string(), "Could not load the dashboard.");
}
