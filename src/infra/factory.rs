use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::{postgres::{PgPoolOptions, PgConnectOptions}, sqlite::{SqlitePoolOptions, SqliteJournalMode, SqliteConnectOptions}};
use sqlx::{PgPool, SqlitePool, ConnectOptions};
use tracing::info;
use tracing::log::LevelFilter;
use tera::Tera;

use crate::config::Config;
use crate::state::AppState;
use crate::infra::email::http_email_service::HttpEmailService;
use crate::infra::repositories::{
    postgres_user_repo::PostgresUserRepo, postgres_event_repo::PostgresEventRepo,
    postgres_participant_repo::PostgresParticipantRepo, postgres_invitation_repo::PostgresInvitationRepo,
    postgres_wish_repo::PostgresWishRepo, postgres_assignment_repo::PostgresAssignmentRepo,
    postgres_job_repo::PostgresJobRepo,
    sqlite_user_repo::SqliteUserRepo, sqlite_event_repo::SqliteEventRepo,
    sqlite_participant_repo::SqliteParticipantRepo, sqlite_invitation_repo::SqliteInvitationRepo,
    sqlite_wish_repo::SqliteWishRepo, sqlite_assignment_repo::SqliteAssignmentRepo,
    sqlite_job_repo::SqliteJobRepo,
};

pub fn load_templates() -> Tera {
    let mut tera = Tera::default();
    tera.add_raw_template("invitation.html", include_str!("../templates/invitation.html"))
        .expect("Failed to load invitation template");
    tera.add_raw_template("assignment.html", include_str!("../templates/assignment.html"))
        .expect("Failed to load assignment template");
    tera
}

pub async fn bootstrap_state(config: &Config) -> AppState {
    let database_url = &config.database_url;
    let email_service = Arc::new(HttpEmailService::new(
        config.mail_service_url.clone(),
        config.mail_service_token.clone(),
    ));

    let templates = Arc::new(load_templates());

    if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        info!("Initializing PostgreSQL connection...");

        let mut opts: PgConnectOptions = database_url.parse().expect("Invalid Postgres URL");
        opts = opts.log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(opts)
            .await
            .expect("Failed to connect to Postgres");

        run_postgres_migrations(&pool).await;

        AppState {
            config: config.clone(),
            user_repo: Arc::new(PostgresUserRepo::new(pool.clone())),
            event_repo: Arc::new(PostgresEventRepo::new(pool.clone())),
            participant_repo: Arc::new(PostgresParticipantRepo::new(pool.clone())),
            invitation_repo: Arc::new(PostgresInvitationRepo::new(pool.clone())),
            wish_repo: Arc::new(PostgresWishRepo::new(pool.clone())),
            assignment_repo: Arc::new(PostgresAssignmentRepo::new(pool.clone())),
            job_repo: Arc::new(PostgresJobRepo::new(pool.clone())),
            email_service,
            templates,
        }
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(database_url)
            .expect("Invalid SQLite connection string")
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        run_sqlite_migrations(&pool).await;

        AppState {
            config: config.clone(),
            user_repo: Arc::new(SqliteUserRepo::new(pool.clone())),
            event_repo: Arc::new(SqliteEventRepo::new(pool.clone())),
            participant_repo: Arc::new(SqliteParticipantRepo::new(pool.clone())),
            invitation_repo: Arc::new(SqliteInvitationRepo::new(pool.clone())),
            wish_repo: Arc::new(SqliteWishRepo::new(pool.clone())),
            assignment_repo: Arc::new(SqliteAssignmentRepo::new(pool.clone())),
            job_repo: Arc::new(SqliteJobRepo::new(pool.clone())),
            email_service,
            templates,
        }
    }
}

async fn run_postgres_migrations(pool: &PgPool) {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .expect("Failed to run Postgres migrations");
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
