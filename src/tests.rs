//! Integration tests for the RSVP service.
//!
//! The service runs against an in-process mock of the RSVP store endpoint.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{Query, State},
    http::StatusCode as MockStatus,
    routing::get,
    Json, Router,
};
use reqwest::{redirect::Policy, Client, StatusCode};
use serde_json::{json, Value};

use crate::config::WriteMode;
use crate::store::{DemoStore, HttpStore, RsvpStore};
use crate::{create_router, AppState};

const PASSWORD: &str = "letmein";

/// Failure the mock endpoint answers with instead of doing the work.
#[derive(Debug, Clone)]
enum Fault {
    Status(u16),
    Error(String),
}

impl Fault {
    fn reply(&self) -> (MockStatus, Json<Value>) {
        match self {
            Fault::Status(code) => (
                MockStatus::from_u16(*code).unwrap(),
                Json(json!({ "error": "Internal error" })),
            ),
            Fault::Error(message) => (MockStatus::OK, Json(json!({ "error": message }))),
        }
    }
}

/// In-memory stand-in for the spreadsheet endpoint.
#[derive(Clone)]
struct MockEndpoint {
    rows: Arc<Mutex<Vec<Value>>>,
    password: Arc<Mutex<String>>,
    list_error: Arc<Mutex<Option<String>>>,
    write_fault: Arc<Mutex<Option<Fault>>>,
    delete_fault: Arc<Mutex<Option<Fault>>>,
    fetches: Arc<AtomicUsize>,
    deletes: Arc<AtomicUsize>,
    submits: Arc<AtomicUsize>,
}

impl MockEndpoint {
    fn new() -> Self {
        Self {
            rows: Arc::new(Mutex::new(vec![
                json!({
                    "id": 2,
                    "timestamp": "2026-05-01T10:30:00.000Z",
                    "name": "Ana Lima",
                    "email": "ana@example.com",
                    "phone": "555-0101",
                    "attending": "yes",
                    "guests": "2",
                    "dietary": "Vegetarian",
                    "message": "See you there"
                }),
                json!({
                    "id": 3,
                    "timestamp": "2026-05-02T08:00:00.000Z",
                    "name": "Ben Ortiz",
                    "email": "ben@example.com",
                    "phone": "555-0102",
                    "attending": "no",
                    "guests": "1"
                }),
                json!({
                    "id": 4,
                    "timestamp": "2026-05-03T19:45:00.000Z",
                    "name": "Cleo Park",
                    "email": "cleo@example.com",
                    "phone": "555-0103",
                    "attending": "yes",
                    "guests": "3"
                }),
            ])),
            password: Arc::new(Mutex::new(PASSWORD.to_string())),
            list_error: Arc::new(Mutex::new(None)),
            write_fault: Arc::new(Mutex::new(None)),
            delete_fault: Arc::new(Mutex::new(None)),
            fetches: Arc::new(AtomicUsize::new(0)),
            deletes: Arc::new(AtomicUsize::new(0)),
            submits: Arc::new(AtomicUsize::new(0)),
        }
    }

    async fn spawn(&self) -> String {
        let app = Router::new()
            .route("/exec", get(mock_read).post(mock_write))
            .with_state(self.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock endpoint");
        let addr = listener.local_addr().expect("Failed to get addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}/exec", addr)
    }

    fn rotate_password(&self, password: &str) {
        *self.password.lock().unwrap() = password.to_string();
    }

    fn fail_listing(&self, message: &str) {
        *self.list_error.lock().unwrap() = Some(message.to_string());
    }

    fn fail_writes(&self, fault: Fault) {
        *self.write_fault.lock().unwrap() = Some(fault);
    }

    fn fail_deletes(&self, fault: Fault) {
        *self.delete_fault.lock().unwrap() = Some(fault);
    }

    fn row_count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn fetches(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    fn deletes(&self) -> usize {
        self.deletes.load(Ordering::SeqCst)
    }

    fn submits(&self) -> usize {
        self.submits.load(Ordering::SeqCst)
    }
}

/// Rows without an id are addressed by their position in the listing.
fn row_matches(row: &Value, position: usize, row_id: &str) -> bool {
    match &row["id"] {
        Value::Null => position.to_string() == row_id,
        Value::String(id) => id == row_id,
        id => id.to_string() == row_id,
    }
}

async fn mock_read(
    State(endpoint): State<MockEndpoint>,
    Query(params): Query<HashMap<String, String>>,
) -> (MockStatus, Json<Value>) {
    let expected = endpoint.password.lock().unwrap().clone();
    let password = params.get("password").cloned().unwrap_or_default();
    let is_delete = params.get("action").map(String::as_str) == Some("delete");

    if is_delete {
        endpoint.deletes.fetch_add(1, Ordering::SeqCst);
    } else {
        endpoint.fetches.fetch_add(1, Ordering::SeqCst);
    }

    if password != expected {
        return (MockStatus::OK, Json(json!({ "error": "Invalid password" })));
    }

    if is_delete {
        if let Some(fault) = endpoint.delete_fault.lock().unwrap().clone() {
            return fault.reply();
        }

        let row_id = params.get("rowId").cloned().unwrap_or_default();
        let mut rows = endpoint.rows.lock().unwrap();
        let Some(index) = rows
            .iter()
            .enumerate()
            .position(|(position, row)| row_matches(row, position, &row_id))
        else {
            return (
                MockStatus::OK,
                Json(json!({ "error": format!("Row {} not found", row_id) })),
            );
        };
        rows.remove(index);
        return (MockStatus::OK, Json(json!({ "success": true })));
    }

    if let Some(message) = endpoint.list_error.lock().unwrap().clone() {
        return (MockStatus::OK, Json(json!({ "error": message })));
    }

    let rows = endpoint.rows.lock().unwrap().clone();
    (MockStatus::OK, Json(json!({ "rsvps": rows })))
}

async fn mock_write(
    State(endpoint): State<MockEndpoint>,
    Json(record): Json<Value>,
) -> (MockStatus, Json<Value>) {
    endpoint.submits.fetch_add(1, Ordering::SeqCst);
    if let Some(fault) = endpoint.write_fault.lock().unwrap().clone() {
        return fault.reply();
    }

    let mut rows = endpoint.rows.lock().unwrap();
    let mut record = record;
    record["id"] = json!(rows.len() + 2);
    rows.push(record);
    (MockStatus::OK, Json(json!({ "success": true })))
}

/// Test fixture for integration tests.
struct TestFixture {
    client: Client,
    base_url: String,
    endpoint: MockEndpoint,
}

impl TestFixture {
    async fn new() -> Self {
        Self::with_mode(WriteMode::Opaque).await
    }

    async fn with_mode(write_mode: WriteMode) -> Self {
        let endpoint = MockEndpoint::new();
        let url = endpoint.spawn().await;
        let store = HttpStore::new(url, write_mode).expect("Failed to build store");
        Self::with_store(Arc::new(store), endpoint).await
    }

    async fn with_store(store: Arc<dyn RsvpStore>, endpoint: MockEndpoint) -> Self {
        let app = create_router(AppState::new(store, Duration::from_secs(60)));

        // Bind to random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to get addr");
        let base_url = format!("http://{}", addr);

        // Spawn server
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        // Wait for server to start
        tokio::time::sleep(Duration::from_millis(100)).await;

        let client = Client::builder()
            .cookie_store(true)
            .redirect(Policy::none())
            .build()
            .unwrap();

        TestFixture {
            client,
            base_url,
            endpoint,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_form(&self, path: &str, form: &[(&str, &str)]) -> reqwest::Response {
        self.client
            .post(self.url(path))
            .form(form)
            .send()
            .await
            .unwrap()
    }

    async fn get(&self, path: &str) -> reqwest::Response {
        self.client.get(self.url(path)).send().await.unwrap()
    }

    async fn login(&self, password: &str) -> reqwest::Response {
        self.post_form("/admin/login", &[("password", password)]).await
    }
}

fn guest_form<'a>() -> Vec<(&'a str, &'a str)> {
    vec![
        ("name", "  Dana Reyes "),
        ("email", "dana@example.com"),
        ("phone", "555-0199"),
        ("attending", "yes"),
        ("guests", "2"),
        ("dietary", ""),
        ("message", "Congrats!"),
    ]
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let fixture = TestFixture::new().await;

    let resp = fixture.get("/health").await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "OK");
}

#[tokio::test]
async fn test_index_redirects_to_form() {
    let fixture = TestFixture::new().await;

    let resp = fixture.get("/").await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()["location"], "/rsvp");
}

// ============================================================================
// RSVP Submission Tests
// ============================================================================

#[tokio::test]
async fn test_rsvp_form_renders() {
    let fixture = TestFixture::new().await;

    let resp = fixture.get("/rsvp").await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.unwrap();
    assert!(body.contains(r#"name="email""#));
    assert!(body.contains(r#"name="attending""#));
}

#[tokio::test]
async fn test_rsvp_missing_fields_are_reported() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .post_form("/rsvp", &[("name", "Dana"), ("email", "not-an-email")])
        .await;

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = resp.text().await.unwrap();
    assert!(body.contains("Please enter a valid email address"));
    assert!(body.contains("Please enter your phone number"));
    assert!(body.contains("Please select your attendance"));
    assert!(!body.contains("Please enter your name"));
    assert_eq!(fixture.endpoint.submits(), 0);
}

#[tokio::test]
async fn test_rsvp_submission_reaches_endpoint() {
    let fixture = TestFixture::new().await;

    let resp = fixture.post_form("/rsvp", &guest_form()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.text().await.unwrap().contains("successMessage"));
    assert_eq!(fixture.endpoint.submits(), 1);

    let rows = fixture.endpoint.rows.lock().unwrap().clone();
    let stored = rows.last().unwrap();
    assert_eq!(stored["name"], "Dana Reyes");
    assert_eq!(stored["attending"], "yes");
    assert_eq!(stored["guests"], "2");
    assert!(stored["timestamp"].as_str().unwrap().ends_with('Z'));
}

#[tokio::test]
async fn test_rsvp_unreachable_endpoint_keeps_values() {
    // Grab a free port, then release it so nothing listens there
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let store = HttpStore::new(format!("http://{}/exec", addr), WriteMode::Opaque).unwrap();
    let fixture = TestFixture::with_store(Arc::new(store), MockEndpoint::new()).await;

    let resp = fixture.post_form("/rsvp", &guest_form()).await;

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body = resp.text().await.unwrap();
    assert!(body.contains("There was an error submitting your RSVP"));
    assert!(body.contains(r#"value="dana@example.com""#));
}

#[tokio::test]
async fn test_opaque_write_ignores_server_error() {
    let fixture = TestFixture::new().await;
    fixture.endpoint.fail_writes(Fault::Status(500));

    let resp = fixture.post_form("/rsvp", &guest_form()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.text().await.unwrap().contains("successMessage"));
    assert_eq!(fixture.endpoint.submits(), 1);
}

#[tokio::test]
async fn test_checked_write_reports_server_error() {
    let fixture = TestFixture::with_mode(WriteMode::Checked).await;
    fixture.endpoint.fail_writes(Fault::Status(500));

    let resp = fixture.post_form("/rsvp", &guest_form()).await;

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body = resp.text().await.unwrap();
    assert!(body.contains("There was an error submitting your RSVP"));
    assert!(body.contains(r#"value="dana@example.com""#));
    assert!(!body.contains("successMessage"));
    assert_eq!(fixture.endpoint.submits(), 1);
}

#[tokio::test]
async fn test_checked_write_reports_endpoint_error() {
    let fixture = TestFixture::with_mode(WriteMode::Checked).await;
    fixture
        .endpoint
        .fail_writes(Fault::Error("Sheet is read-only".to_string()));

    let resp = fixture.post_form("/rsvp", &guest_form()).await;

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body = resp.text().await.unwrap();
    assert!(body.contains("There was an error submitting your RSVP"));
    assert_eq!(fixture.endpoint.row_count(), 3);
}

#[tokio::test]
async fn test_checked_write_success() {
    let fixture = TestFixture::with_mode(WriteMode::Checked).await;

    let resp = fixture.post_form("/rsvp", &guest_form()).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(fixture.endpoint.row_count(), 4);
}

// ============================================================================
// Admin Login Tests
// ============================================================================

#[tokio::test]
async fn test_admin_shows_login_without_session() {
    let fixture = TestFixture::new().await;

    let resp = fixture.get("/admin").await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.text().await.unwrap().contains("loginForm"));
    assert_eq!(fixture.endpoint.fetches(), 0);
}

#[tokio::test]
async fn test_login_shows_dashboard_with_stats() {
    let fixture = TestFixture::new().await;

    let resp = fixture.login(PASSWORD).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.unwrap();
    // Responses sum every party size; guests only count attending parties
    assert!(body.contains(r#"id="totalResponses">6</span>"#));
    assert!(body.contains(r#"id="attending">2</span>"#));
    assert!(body.contains(r#"id="notAttending">1</span>"#));
    assert!(body.contains(r#"id="totalGuests">5</span>"#));
    assert!(body.contains("Ana Lima"));
    assert!(body.contains("May 1, 2026, 10:30 AM"));
    assert_eq!(fixture.endpoint.fetches(), 1);

    // The session cookie keeps the admin logged in
    let resp = fixture.get("/admin").await;
    assert!(resp.text().await.unwrap().contains("dashboardSection"));
    assert_eq!(fixture.endpoint.fetches(), 2);
}

#[tokio::test]
async fn test_login_empty_password() {
    let fixture = TestFixture::new().await;

    let resp = fixture.login("").await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(resp.text().await.unwrap().contains("Please enter a password."));
    assert_eq!(fixture.endpoint.fetches(), 0);
}

#[tokio::test]
async fn test_login_invalid_password() {
    let fixture = TestFixture::new().await;

    let resp = fixture.login("wrong").await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = resp.text().await.unwrap();
    assert!(body.contains("Invalid password. Please try again."));
    assert!(!body.contains("wrong"));

    let resp = fixture.get("/admin").await;
    assert!(resp.text().await.unwrap().contains("loginForm"));
}

#[tokio::test]
async fn test_login_unreachable_endpoint() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let store = HttpStore::new(format!("http://{}/exec", addr), WriteMode::Opaque).unwrap();
    let fixture = TestFixture::with_store(Arc::new(store), MockEndpoint::new()).await;

    let resp = fixture.login(PASSWORD).await;

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(resp
        .text()
        .await
        .unwrap()
        .contains("Error connecting to server. Please try again."));
}

#[tokio::test]
async fn test_logout_ends_session() {
    let fixture = TestFixture::new().await;
    fixture.login(PASSWORD).await;

    let resp = fixture.post_form("/admin/logout", &[]).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let fetches = fixture.endpoint.fetches();
    let resp = fixture.get("/admin").await;
    assert!(resp.text().await.unwrap().contains("loginForm"));
    assert_eq!(fixture.endpoint.fetches(), fetches);
}

// ============================================================================
// Admin Listing Tests
// ============================================================================

#[tokio::test]
async fn test_listing_error_keeps_session() {
    let fixture = TestFixture::new().await;
    fixture.login(PASSWORD).await;
    fixture.endpoint.fail_listing("Some other failure");

    let resp = fixture.get("/admin").await;

    let body = resp.text().await.unwrap();
    assert!(body.contains("Some other failure"));
    assert!(body.contains(r#"id="totalResponses">-</span>"#));
    assert!(body.contains(r#"id="totalGuests">-</span>"#));
    assert!(!body.contains("Ana Lima"));
    assert!(body.contains("dashboardSection"));
}

#[tokio::test]
async fn test_rotated_password_logs_out() {
    let fixture = TestFixture::new().await;
    fixture.login(PASSWORD).await;
    fixture.endpoint.rotate_password("new-secret");

    let resp = fixture.get("/admin").await;
    assert!(resp.text().await.unwrap().contains("loginForm"));

    // The dropped session stays dropped once the password works again
    fixture.endpoint.rotate_password(PASSWORD);
    let fetches = fixture.endpoint.fetches();
    let resp = fixture.get("/admin").await;
    assert!(resp.text().await.unwrap().contains("loginForm"));
    assert_eq!(fixture.endpoint.fetches(), fetches);
}

// ============================================================================
// Admin Delete Tests
// ============================================================================

#[tokio::test]
async fn test_delete_asks_for_confirmation() {
    let fixture = TestFixture::new().await;
    fixture.login(PASSWORD).await;

    let resp = fixture
        .get("/admin/delete?row_id=3&email=ben%40example.com&positional=false")
        .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.unwrap();
    assert!(body.contains("Are you sure you want to delete the RSVP for "));
    assert!(body.contains("ben@example.com"));
    assert_eq!(fixture.endpoint.deletes(), 0);
}

#[tokio::test]
async fn test_delete_declined_sends_nothing() {
    let fixture = TestFixture::new().await;
    fixture.login(PASSWORD).await;
    let fetches = fixture.endpoint.fetches();

    let resp = fixture
        .post_form(
            "/admin/delete",
            &[("row_id", "3"), ("email", "ben@example.com"), ("confirm", "no")],
        )
        .await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(fixture.endpoint.deletes(), 0);
    assert_eq!(fixture.endpoint.fetches(), fetches);
    assert_eq!(fixture.endpoint.row_count(), 3);
}

#[tokio::test]
async fn test_delete_confirmed_reloads_once() {
    let fixture = TestFixture::new().await;
    fixture.login(PASSWORD).await;
    let fetches = fixture.endpoint.fetches();

    let resp = fixture
        .post_form(
            "/admin/delete",
            &[("row_id", "3"), ("email", "ben@example.com"), ("confirm", "yes")],
        )
        .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.unwrap();
    assert!(body.contains("RSVP deleted successfully"));
    assert!(body.contains(r#"id="totalResponses">5</span>"#));
    assert!(body.contains(r#"id="notAttending">0</span>"#));
    assert!(!body.contains("Ben Ortiz"));

    assert_eq!(fixture.endpoint.deletes(), 1);
    assert_eq!(fixture.endpoint.fetches(), fetches + 1);
}

#[tokio::test]
async fn test_delete_refused_shows_remediation() {
    let fixture = TestFixture::new().await;
    fixture.login(PASSWORD).await;
    let fetches = fixture.endpoint.fetches();

    let resp = fixture
        .post_form("/admin/delete", &[("row_id", "99"), ("confirm", "yes")])
        .await;

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body = resp.text().await.unwrap();
    assert!(body.contains("Failed to delete RSVP: Row 99 not found"));
    assert!(body.contains("redeployed with delete support"));
    assert_eq!(fixture.endpoint.fetches(), fetches);
}

#[tokio::test]
async fn test_delete_server_error_is_reported() {
    let fixture = TestFixture::new().await;
    fixture.login(PASSWORD).await;
    fixture.endpoint.fail_deletes(Fault::Status(500));
    let fetches = fixture.endpoint.fetches();

    let resp = fixture
        .post_form("/admin/delete", &[("row_id", "3"), ("confirm", "yes")])
        .await;

    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    let body = resp.text().await.unwrap();
    assert!(body.contains("Failed to delete RSVP: Server returned 500"));
    assert_eq!(fixture.endpoint.deletes(), 1);
    assert_eq!(fixture.endpoint.fetches(), fetches);
    assert_eq!(fixture.endpoint.row_count(), 3);
}

#[tokio::test]
async fn test_row_without_id_is_deleted_by_position() {
    let fixture = TestFixture::new().await;
    *fixture.endpoint.rows.lock().unwrap() = vec![
        json!({ "id": 2, "name": "Ana Lima", "attending": "yes", "guests": "2" }),
        json!({
            "timestamp": "2026-05-04T12:00:00.000Z",
            "name": "Dev Shah",
            "email": "dev@example.com",
            "attending": "no",
            "guests": "1"
        }),
    ];

    let resp = fixture.login(PASSWORD).await;
    let body = resp.text().await.unwrap();
    assert!(body.contains("Dev Shah"));
    assert!(body.contains(r#"<tr data-row-id="1">"#));
    assert!(body.contains(r#"name="positional" value="true""#));

    let resp = fixture
        .post_form(
            "/admin/delete",
            &[
                ("row_id", "1"),
                ("email", "dev@example.com"),
                ("positional", "true"),
                ("confirm", "yes"),
            ],
        )
        .await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.unwrap();
    assert!(body.contains("RSVP deleted successfully"));
    assert!(!body.contains("Dev Shah"));
    assert!(body.contains("Ana Lima"));
    assert_eq!(fixture.endpoint.row_count(), 1);
}

#[tokio::test]
async fn test_delete_without_session() {
    let fixture = TestFixture::new().await;

    let resp = fixture
        .post_form("/admin/delete", &[("row_id", "3"), ("confirm", "yes")])
        .await;

    assert!(resp.text().await.unwrap().contains("loginForm"));
    assert_eq!(fixture.endpoint.deletes(), 0);
}

#[tokio::test]
async fn test_delete_missing_row_id() {
    let fixture = TestFixture::new().await;
    fixture.login(PASSWORD).await;

    let resp = fixture
        .post_form("/admin/delete", &[("confirm", "yes")])
        .await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(fixture.endpoint.deletes(), 0);
}

// ============================================================================
// Demo Mode Tests
// ============================================================================

#[tokio::test]
async fn test_demo_mode_round_trip() {
    let store = DemoStore::new(Some(PASSWORD.to_string()), Duration::ZERO);
    let fixture = TestFixture::with_store(Arc::new(store), MockEndpoint::new()).await;

    let resp = fixture.post_form("/rsvp", &guest_form()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = fixture.login(PASSWORD).await;
    let body = resp.text().await.unwrap();
    assert!(body.contains(r#"id="totalResponses">4</span>"#));
    assert!(body.contains(r#"id="attending">2</span>"#));

    let resp = fixture
        .post_form("/admin/delete", &[("row_id", "2"), ("confirm", "yes")])
        .await;
    let body = resp.text().await.unwrap();
    assert!(body.contains(r#"id="totalResponses">2</span>"#));
    assert!(body.contains(r#"id="attending">1</span>"#));

    // Nothing ever reached the HTTP endpoint
    assert_eq!(fixture.endpoint.submits(), 0);
    assert_eq!(fixture.endpoint.fetches(), 0);
}
