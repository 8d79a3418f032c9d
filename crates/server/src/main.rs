// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod session;

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use kestrel_api::{
    ApiError, AttendanceView, CreateInventoryItemRequest, CreateProjectLogRequest,
    CreateProjectRequest, DeleteInventoryItemRequest, DeleteProjectLogRequest,
    DeleteProjectRequest, IdentityResolver, InventoryView, MemberDirectoryView, ProjectDetailView,
    ProjectListView, ProjectMemberRequest, ToggleAttendanceRequest, UpdateInventoryItemRequest,
    UpdateProfileRoleRequest, UpdateProjectLogRequest, UpdateProjectRequest, WhoAmIResponse,
    translate_domain_error,
};
use kestrel_domain::{ProjectId, parse_calendar_date};
use kestrel_persistence::Persistence;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::{Date, OffsetDateTime};
use tokio::sync::Mutex;
use tracing::{error, info};

use crate::session::SessionProfile;

/// Kestrel Server - HTTP server for the Kestrel membership dashboard
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: String,
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// The store, serialized behind a mutex.
    persistence: Arc<Mutex<Persistence>>,
}

/// Query parameters for the attendance view.
#[derive(Debug, Deserialize)]
struct AttendanceQuery {
    /// The day to show (`YYYY-MM-DD`); today when omitted.
    date: Option<String>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::AuthenticationRequired { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Unauthorized { .. } => StatusCode::FORBIDDEN,
            ApiError::InvalidInput { .. } | ApiError::ConfirmationRequired { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::Store { .. } => {
                error!(error = %err, "Store error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// The current UTC calendar day.
fn today() -> Date {
    OffsetDateTime::now_utc().date()
}

/// Runs one API operation against the locked store.
async fn with_store<T>(
    app_state: &AppState,
    operation: impl FnOnce(&mut Persistence) -> Result<T, ApiError>,
) -> Result<Json<T>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let result: T = operation(&mut *persistence)?;
    drop(persistence);
    Ok(Json(result))
}

/// Handler for GET `/me`.
async fn handle_whoami(
    SessionProfile(session): SessionProfile,
) -> Result<Json<WhoAmIResponse>, HttpError> {
    Ok(Json(kestrel_api::whoami(&session)?))
}

// ============================================================================
// Projects
// ============================================================================

/// Handler for GET `/projects`.
async fn handle_list_projects(
    AxumState(app_state): AxumState<AppState>,
    SessionProfile(session): SessionProfile,
) -> Result<Json<ProjectListView>, HttpError> {
    with_store(&app_state, |store| {
        kestrel_api::list_projects(store, session.state(), today())
    })
    .await
}

/// Handler for GET `/projects/mine`.
async fn handle_list_my_projects(
    AxumState(app_state): AxumState<AppState>,
    SessionProfile(session): SessionProfile,
) -> Result<Json<ProjectListView>, HttpError> {
    with_store(&app_state, |store| {
        kestrel_api::list_my_projects(store, session.state(), today())
    })
    .await
}

/// Handler for GET `/projects/{project_id}`.
async fn handle_get_project_detail(
    AxumState(app_state): AxumState<AppState>,
    SessionProfile(session): SessionProfile,
    Path(project_id): Path<String>,
) -> Result<Json<ProjectDetailView>, HttpError> {
    let project_id: ProjectId = ProjectId::from(project_id);
    with_store(&app_state, |store| {
        kestrel_api::get_project_detail(store, session.state(), &project_id)
    })
    .await
}

/// Handler for POST `/projects`.
async fn handle_create_project(
    AxumState(app_state): AxumState<AppState>,
    SessionProfile(session): SessionProfile,
    Json(req): Json<CreateProjectRequest>,
) -> Result<Json<ProjectListView>, HttpError> {
    info!(name = %req.name, "Handling create_project request");
    with_store(&app_state, |store| {
        kestrel_api::create_project(store, session.state(), &req, today())
    })
    .await
}

/// Handler for POST `/projects/update`.
async fn handle_update_project(
    AxumState(app_state): AxumState<AppState>,
    SessionProfile(session): SessionProfile,
    Json(req): Json<UpdateProjectRequest>,
) -> Result<Json<ProjectListView>, HttpError> {
    info!(project_id = %req.project_id, "Handling update_project request");
    with_store(&app_state, |store| {
        kestrel_api::update_project(store, session.state(), &req, today())
    })
    .await
}

/// Handler for POST `/projects/delete`.
async fn handle_delete_project(
    AxumState(app_state): AxumState<AppState>,
    SessionProfile(session): SessionProfile,
    Json(req): Json<DeleteProjectRequest>,
) -> Result<Json<ProjectListView>, HttpError> {
    info!(
        project_id = %req.project_id,
        confirmed = req.confirmed,
        "Handling delete_project request"
    );
    with_store(&app_state, |store| {
        kestrel_api::delete_project(store, session.state(), &req, today())
    })
    .await
}

/// Handler for POST `/project_members`.
async fn handle_add_project_member(
    AxumState(app_state): AxumState<AppState>,
    SessionProfile(session): SessionProfile,
    Json(req): Json<ProjectMemberRequest>,
) -> Result<Json<ProjectListView>, HttpError> {
    info!(
        project_id = %req.project_id,
        user_id = %req.user_id,
        "Handling add_project_member request"
    );
    with_store(&app_state, |store| {
        kestrel_api::add_project_member(store, session.state(), &req, today())
    })
    .await
}

/// Handler for POST `/project_members/remove`.
async fn handle_remove_project_member(
    AxumState(app_state): AxumState<AppState>,
    SessionProfile(session): SessionProfile,
    Json(req): Json<ProjectMemberRequest>,
) -> Result<Json<ProjectListView>, HttpError> {
    info!(
        project_id = %req.project_id,
        user_id = %req.user_id,
        "Handling remove_project_member request"
    );
    with_store(&app_state, |store| {
        kestrel_api::remove_project_member(store, session.state(), &req, today())
    })
    .await
}

// ============================================================================
// Project logs
// ============================================================================

/// Handler for POST `/project_logs`.
async fn handle_create_project_log(
    AxumState(app_state): AxumState<AppState>,
    SessionProfile(session): SessionProfile,
    Json(req): Json<CreateProjectLogRequest>,
) -> Result<Json<ProjectDetailView>, HttpError> {
    info!(project_id = %req.project_id, "Handling create_project_log request");
    with_store(&app_state, |store| {
        kestrel_api::create_project_log(store, session.state(), &req, today())
    })
    .await
}

/// Handler for POST `/project_logs/update`.
async fn handle_update_project_log(
    AxumState(app_state): AxumState<AppState>,
    SessionProfile(session): SessionProfile,
    Json(req): Json<UpdateProjectLogRequest>,
) -> Result<Json<ProjectDetailView>, HttpError> {
    info!(log_id = %req.log_id, "Handling update_project_log request");
    with_store(&app_state, |store| {
        kestrel_api::update_project_log(store, session.state(), &req)
    })
    .await
}

/// Handler for POST `/project_logs/delete`.
async fn handle_delete_project_log(
    AxumState(app_state): AxumState<AppState>,
    SessionProfile(session): SessionProfile,
    Json(req): Json<DeleteProjectLogRequest>,
) -> Result<Json<Option<ProjectDetailView>>, HttpError> {
    info!(log_id = %req.log_id, "Handling delete_project_log request");
    with_store(&app_state, |store| {
        kestrel_api::delete_project_log(store, session.state(), &req)
    })
    .await
}

// ============================================================================
// Inventory
// ============================================================================

/// Handler for GET `/inventory`.
async fn handle_list_inventory(
    AxumState(app_state): AxumState<AppState>,
    SessionProfile(session): SessionProfile,
) -> Result<Json<InventoryView>, HttpError> {
    with_store(&app_state, |store| {
        kestrel_api::list_inventory(store, session.state())
    })
    .await
}

/// Handler for POST `/inventory`.
async fn handle_create_inventory_item(
    AxumState(app_state): AxumState<AppState>,
    SessionProfile(session): SessionProfile,
    Json(req): Json<CreateInventoryItemRequest>,
) -> Result<Json<InventoryView>, HttpError> {
    info!(name = %req.name, "Handling create_inventory_item request");
    with_store(&app_state, |store| {
        kestrel_api::create_inventory_item(store, session.state(), &req)
    })
    .await
}

/// Handler for POST `/inventory/update`.
async fn handle_update_inventory_item(
    AxumState(app_state): AxumState<AppState>,
    SessionProfile(session): SessionProfile,
    Json(req): Json<UpdateInventoryItemRequest>,
) -> Result<Json<InventoryView>, HttpError> {
    info!(item_id = %req.item_id, "Handling update_inventory_item request");
    with_store(&app_state, |store| {
        kestrel_api::update_inventory_item(store, session.state(), &req)
    })
    .await
}

/// Handler for POST `/inventory/delete`.
async fn handle_delete_inventory_item(
    AxumState(app_state): AxumState<AppState>,
    SessionProfile(session): SessionProfile,
    Json(req): Json<DeleteInventoryItemRequest>,
) -> Result<Json<InventoryView>, HttpError> {
    info!(item_id = %req.item_id, "Handling delete_inventory_item request");
    with_store(&app_state, |store| {
        kestrel_api::delete_inventory_item(store, session.state(), &req)
    })
    .await
}

// ============================================================================
// Attendance and members
// ============================================================================

/// Handler for GET `/attendance`.
async fn handle_get_attendance(
    AxumState(app_state): AxumState<AppState>,
    SessionProfile(session): SessionProfile,
    Query(query): Query<AttendanceQuery>,
) -> Result<Json<AttendanceView>, HttpError> {
    let date: Date = match query.date.as_deref() {
        Some(raw) => parse_calendar_date(raw).map_err(translate_domain_error)?,
        None => today(),
    };
    with_store(&app_state, |store| {
        kestrel_api::get_attendance(store, session.state(), date)
    })
    .await
}

/// Handler for POST `/attendance/toggle`.
async fn handle_toggle_attendance(
    AxumState(app_state): AxumState<AppState>,
    SessionProfile(session): SessionProfile,
    Json(req): Json<ToggleAttendanceRequest>,
) -> Result<Json<AttendanceView>, HttpError> {
    info!(member_id = %req.member_id, date = %req.date, "Handling toggle_attendance request");
    with_store(&app_state, |store| {
        kestrel_api::toggle_attendance(store, session.state(), &req)
    })
    .await
}

/// Handler for GET `/members`.
async fn handle_list_members(
    AxumState(app_state): AxumState<AppState>,
    SessionProfile(session): SessionProfile,
) -> Result<Json<MemberDirectoryView>, HttpError> {
    with_store(&app_state, |store| {
        kestrel_api::list_members(store, session.state())
    })
    .await
}

/// Handler for POST `/members/role`.
async fn handle_update_profile_role(
    AxumState(app_state): AxumState<AppState>,
    SessionProfile(session): SessionProfile,
    Json(req): Json<UpdateProfileRoleRequest>,
) -> Result<Json<MemberDirectoryView>, HttpError> {
    info!(profile_id = %req.profile_id, role = %req.role, "Handling update_profile_role request");
    with_store(&app_state, |store| {
        kestrel_api::update_profile_role(store, session.state(), &req)
    })
    .await
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/me", get(handle_whoami))
        .route("/projects", get(handle_list_projects).post(handle_create_project))
        .route("/projects/mine", get(handle_list_my_projects))
        .route("/projects/update", post(handle_update_project))
        .route("/projects/delete", post(handle_delete_project))
        .route("/projects/{project_id}", get(handle_get_project_detail))
        .route("/project_members", post(handle_add_project_member))
        .route("/project_members/remove", post(handle_remove_project_member))
        .route("/project_logs", post(handle_create_project_log))
        .route("/project_logs/update", post(handle_update_project_log))
        .route("/project_logs/delete", post(handle_delete_project_log))
        .route(
            "/inventory",
            get(handle_list_inventory).post(handle_create_inventory_item),
        )
        .route("/inventory/update", post(handle_update_inventory_item))
        .route("/inventory/delete", post(handle_delete_inventory_item))
        .route("/attendance", get(handle_get_attendance))
        .route("/attendance/toggle", post(handle_toggle_attendance))
        .route("/members", get(handle_list_members))
        .route("/members/role", post(handle_update_profile_role))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Kestrel Server");

    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };
    let app: Router = build_router(app_state);

    let addr: std::net::SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests;
