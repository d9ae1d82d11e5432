//! Catalog service routes

use axum::{
    Extension, Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::{
    error::CatalogError,
    middleware::{AuthPrincipal, principal_middleware},
    models::{Category, NewListing},
    query::ListingQuery,
    state::AppState,
};

/// Create the router for the catalog service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/landing", get(landing))
        .route("/listings", get(browse_listings).post(create_listing))
        .route("/listings/:id", get(get_listing))
        .route("/categories/:category", get(browse_category))
        .route("/search", get(search_listings))
        .route("/users/:id", get(get_user))
        .layer(middleware::from_fn(principal_middleware))
        .with_state(state)
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "catalog-service"
    }))
}

/// Per-category snapshots for the landing view
pub async fn landing(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.catalog.landing().await)
}

/// Browse all listings with optional refinements
pub async fn browse_listings(
    State(state): State<AppState>,
    Query(query): Query<ListingQuery>,
) -> impl IntoResponse {
    Json(state.catalog.browse_all(&query).await)
}

/// Get a single listing by ID
pub async fn get_listing(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse {
    match state.catalog.listing_detail(id).await {
        Some(listing) => Json(listing).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "Listing not found"})),
        )
            .into_response(),
    }
}

/// Browse one category with optional refinements
pub async fn browse_category(
    State(state): State<AppState>,
    Path(category): Path<String>,
    Query(query): Query<ListingQuery>,
) -> impl IntoResponse {
    let category: Category = match category.parse() {
        Ok(category) => category,
        Err(e) => {
            return (StatusCode::BAD_REQUEST, Json(json!({"error": e.to_string()})))
                .into_response();
        }
    };

    Json(state.catalog.browse_category(category, &query).await).into_response()
}

/// Search query parameters
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// Free-text search across all listings
pub async fn search_listings(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    Json(state.catalog.search(&params.q).await)
}

/// Get a user profile by ID
pub async fn get_user(State(state): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    match state.catalog.owner_profile(id).await {
        Some(user) => Json(user).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": "User not found"})),
        )
            .into_response(),
    }
}

/// Create a new listing for the authenticated principal
pub async fn create_listing(
    State(state): State<AppState>,
    Extension(principal): Extension<Option<AuthPrincipal>>,
    Json(draft): Json<NewListing>,
) -> Result<impl IntoResponse, CatalogError> {
    let id = state
        .catalog
        .create_listing(draft, principal.map(|p| p.id))
        .await?;

    Ok((StatusCode::CREATED, Json(json!({ "id": id }))))
}
