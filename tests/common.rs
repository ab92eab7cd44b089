use wishflow_backend::{
    api::router::create_router,
    state::AppState,
    config::Config,
    infra::factory::load_templates,
    infra::repositories::{
        sqlite_user_repo::SqliteUserRepo,
        sqlite_event_repo::SqliteEventRepo,
        sqlite_participant_repo::SqliteParticipantRepo,
        sqlite_invitation_repo::SqliteInvitationRepo,
        sqlite_wish_repo::SqliteWishRepo,
        sqlite_assignment_repo::SqliteAssignmentRepo,
        sqlite_job_repo::SqliteJobRepo,
    },
    domain::ports::EmailService,
    background::start_background_worker,
    error::AppError,
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::sync::Arc;
use uuid::Uuid;
use axum::{
    body::Body,
    http::Request,
    Router,
};
use std::str::FromStr;
use async_trait::async_trait;
use tower::ServiceExt;
use serde_json::{json, Value};

pub struct MockEmailService;

#[async_trait]
impl EmailService for MockEmailService {
    async fn send(&self, _recipient: &str, _subject: &str, _html_body: &str) -> Result<(), AppError> {
        Ok(())
    }
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            mail_service_url: "http://localhost".to_string(),
            mail_service_token: "token".to_string(),
            frontend_url: "http://localhost:5173".to_string(),
        };

        let state = Arc::new(AppState {
            config: config.clone(),
            user_repo: Arc::new(SqliteUserRepo::new(pool.clone())),
            event_repo: Arc::new(SqliteEventRepo::new(pool.clone())),
            participant_repo: Arc::new(SqliteParticipantRepo::new(pool.clone())),
            invitation_repo: Arc::new(SqliteInvitationRepo::new(pool.clone())),
            wish_repo: Arc::new(SqliteWishRepo::new(pool.clone())),
            assignment_repo: Arc::new(SqliteAssignmentRepo::new(pool.clone())),
            job_repo: Arc::new(SqliteJobRepo::new(pool.clone())),
            email_service: Arc::new(MockEmailService),
            templates: Arc::new(load_templates()),
        });

        // Start Background Worker
        let worker_state = state.clone();
        tokio::spawn(async move {
            start_background_worker(worker_state).await;
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    /// Registers a profile and returns its user id for `X-User-Id` headers.
    pub async fn register_user(&self, display_name: &str, email: &str) -> String {
        let payload = json!({
            "display_name": display_name,
            "email": email,
        });

        let response = self.router.clone().oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/users")
                .header("Content-Type", "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap()
        ).await.unwrap();

        if !response.status().is_success() {
            panic!("User registration failed in test helper: status {}", response.status());
        }

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        body["id"].as_str().expect("No id in registration response").to_string()
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}
