use axum::{
	Json, Router,
	extract::{
		Path, Query, State,
		rejection::{JsonRejection, QueryRejection},
	},
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::{get, post},
};
use serde::Serialize;

use bulletin_domain::{Announcement, Category, CategoryMap, Exchange};
use bulletin_service::{Error, ReloadReport, SearchRequest, SearchResponse, StatsResponse};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/v1/announcements", get(search_query))
		.route("/v1/announcements/search", post(search_json))
		.route("/v1/announcements/{id}", get(announcement))
		.route("/v1/categories", get(all_categories))
		.route("/v1/categories/{exchange}", get(categories))
		.route("/v1/stats", get(stats))
		.route("/v1/keywords/popular", get(popular_keywords))
		.with_state(state)
}

pub fn admin_router(state: AppState) -> Router {
	Router::new().route("/v1/admin/reload", post(reload)).with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn search_query(
	State(state): State<AppState>,
	payload: Result<Query<SearchRequest>, QueryRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
	let Query(payload) = payload.map_err(|err| invalid_query(err.body_text()))?;

	run_search(&state, payload)
}

async fn search_json(
	State(state): State<AppState>,
	payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
	let Json(payload) = payload.map_err(|err| invalid_query(err.body_text()))?;

	run_search(&state, payload)
}

fn run_search(
	state: &AppState,
	mut payload: SearchRequest,
) -> Result<Json<SearchResponse>, ApiError> {
	payload.keyword = payload.keyword.trim().to_string();

	let response = state.service.search(payload)?;

	Ok(Json(response))
}

async fn announcement(
	State(state): State<AppState>,
	Path(id): Path<String>,
) -> Result<Json<Announcement>, ApiError> {
	let announcement = state.service.get_by_id(&id).ok_or_else(|| {
		let message = format!("Announcement {id} not found.");

		json_error(StatusCode::NOT_FOUND, "not_found", message, None)
	})?;

	Ok(Json(announcement))
}

async fn all_categories(State(state): State<AppState>) -> Json<CategoryMap> {
	Json(state.service.list_all_categories())
}

async fn categories(
	State(state): State<AppState>,
	Path(exchange): Path<String>,
) -> Json<Vec<Category>> {
	let categories = match Exchange::parse(&exchange) {
		Some(exchange) => state.service.list_categories(exchange),
		None => Vec::new(),
	};

	Json(categories)
}

async fn stats(State(state): State<AppState>) -> Json<StatsResponse> {
	Json(state.service.stats())
}

async fn popular_keywords(State(state): State<AppState>) -> Json<Vec<String>> {
	Json(state.service.popular_keywords())
}

async fn reload(State(state): State<AppState>) -> Result<Json<ReloadReport>, ApiError> {
	let service = state.service.clone();
	let report = tokio::task::spawn_blocking(move || service.reload()).await.map_err(|err| {
		json_error(
			StatusCode::INTERNAL_SERVER_ERROR,
			"internal_error",
			format!("Reload task failed: {err}."),
			None,
		)
	})??;

	Ok(Json(report))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
	fields: Option<Vec<String>>,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	error_code: String,
	message: String,
	fields: Option<Vec<String>>,
}
impl ApiError {
	fn new(
		status: StatusCode,
		error_code: impl Into<String>,
		message: impl Into<String>,
		fields: Option<Vec<String>>,
	) -> Self {
		Self { status, error_code: error_code.into(), message: message.into(), fields }
	}
}
impl From<Error> for ApiError {
	fn from(err: Error) -> Self {
		match err {
			Error::InvalidQuery { message } => invalid_query(message),
			Error::Config { message } => {
				json_error(StatusCode::INTERNAL_SERVER_ERROR, "config_error", message, None)
			},
			Error::Corpus { message } => {
				tracing::error!(%message, "Corpus operation failed.");

				json_error(StatusCode::INTERNAL_SERVER_ERROR, "corpus_error", message, None)
			},
		}
	}
}
impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		let body =
			ErrorBody { error_code: self.error_code, message: self.message, fields: self.fields };

		(self.status, Json(body)).into_response()
	}
}

pub fn json_error(
	status: StatusCode,
	code: &str,
	message: impl Into<String>,
	fields: Option<Vec<String>>,
) -> ApiError {
	ApiError::new(status, code, message, fields)
}

fn invalid_query(message: impl Into<String>) -> ApiError {
	json_error(StatusCode::BAD_REQUEST, "invalid_query", message, None)
}
