use crate::application::error::AppError;
use crate::application::service::{
    ItemRead, ItemRecommend, ItemSummary, RecommendDefaults, RecommendRequest,
    RecommendService, RecommendValidationError, RecommendationHit, ValidatedRecommendQuery,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::io;
use std::sync::Arc;

#[derive(Clone)]
struct AppState {
    service: Arc<RecommendService>,
}

#[derive(Debug, Deserialize)]
struct ListQuery {
    limit: Option<usize>,
    offset: Option<usize>,
}

#[derive(Debug, Serialize)]
struct ListResponse {
    total: usize,
    items: Vec<ItemSummary>,
}

#[derive(Debug, Serialize)]
struct RecommendResponse {
    query: ItemSummary,
    results: Vec<RecommendationHit>,
}

#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    message: String,
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::NotFound(message) => Self {
                status: StatusCode::NOT_FOUND,
                message,
            },
            AppError::InvalidDataset(message)
            | AppError::InvalidConfig(message)
            | AppError::Io(message) => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message,
            },
        }
    }
}

impl From<RecommendValidationError> for ApiError {
    fn from(err: RecommendValidationError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.message }));
        (self.status, body).into_response()
    }
}

async fn recommend_handler(
    State(state): State<AppState>,
    Json(req): Json<RecommendRequest>,
) -> Result<Json<RecommendResponse>, ApiError> {
    let service = Arc::clone(&state.service);
    let response = tokio::task::spawn_blocking(move || {
        let query =
            ValidatedRecommendQuery::from_request(req, service.default_k(), service.max_k())?;
        let selected = service.get(&query.title)?;
        let results = service.recommend(query)?;
        Ok::<_, ApiError>(RecommendResponse {
            query: selected,
            results,
        })
    })
    .await
    .map_err(|err| ApiError {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        message: format!("join error: {}", err),
    })??;

    tracing::debug!(
        title = %response.query.title,
        results = response.results.len(),
        "recommend"
    );
    Ok(Json(response))
}

async fn get_item_handler(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Result<Json<ItemSummary>, ApiError> {
    Ok(Json(state.service.get(&title)?))
}

async fn list_items_handler(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<ListResponse> {
    let limit = query.limit.unwrap_or(20).min(200);
    let offset = query.offset.unwrap_or(0);

    let (total, items) = state.service.list(offset, limit);
    Json(ListResponse { total, items })
}

async fn health_handler() -> &'static str {
    "ok"
}

pub fn router(service: Arc<RecommendService>) -> Router {
    let state = AppState { service };

    Router::new()
        .route("/health", get(health_handler))
        .route("/items", get(list_items_handler))
        .route("/items/:title", get(get_item_handler))
        .route("/recommend", post(recommend_handler))
        .with_state(state)
}

pub async fn serve(addr: String, service: RecommendService) -> io::Result<()> {
    let app = router(Arc::new(service));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
