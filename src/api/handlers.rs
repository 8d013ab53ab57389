//! HTTP request handlers for the practitioner salary API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::calculation::calculate_salary;
use crate::models::{ContagionAllowance, MainCategoryEntry, RankEntry, SubCategoryEntry};

use super::request::{LookupQuery, SalaryRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
///
/// The `/api/get*` routes keep the paths earlier web clients call.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/mainCategories", get(main_categories_handler))
        .route("/subCategories", get(sub_categories_handler))
        .route("/ranks", get(ranks_handler))
        .route("/api/getMainCategories", get(main_categories_handler))
        .route("/api/getSubCategories", get(sub_categories_handler))
        .route("/api/getRanks", get(ranks_handler))
        .route("/contagionAllowances", get(contagion_allowances_handler))
        .route("/calculateSalary", post(calculate_salary_handler))
        .with_state(state)
}

fn json_ok<T: Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn query_rejected(correlation_id: Uuid, rejection: QueryRejection) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %rejection.body_text(),
        "Query string rejected"
    );
    ApiErrorResponse {
        status: StatusCode::BAD_REQUEST,
        error: ApiError::new("INVALID_QUERY", rejection.body_text()),
    }
    .into_response()
}

/// Handler for GET /mainCategories.
async fn main_categories_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Listing main categories");

    match state.lookup().list_main_categories().await {
        Ok(categories) => {
            info!(
                correlation_id = %correlation_id,
                count = categories.len(),
                "Main categories listed"
            );
            let body: Vec<MainCategoryEntry> = categories
                .into_iter()
                .map(|main_category| MainCategoryEntry { main_category })
                .collect();
            json_ok(body)
        }
        Err(err) => {
            error!(
                correlation_id = %correlation_id,
                error = %err,
                "Error fetching main categories"
            );
            ApiErrorResponse::from_lookup(err, "main categories").into_response()
        }
    }
}

/// Handler for GET /subCategories?mainCategory=X.
async fn sub_categories_handler(
    State(state): State<AppState>,
    query: Result<Query<LookupQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => return query_rejected(correlation_id, rejection),
    };

    let main_category = match query.require_main_category() {
        Ok(main_category) => main_category,
        Err(err) => {
            warn!(correlation_id = %correlation_id, "Sub-category request without main category");
            return ApiErrorResponse::from(err).into_response();
        }
    };
    info!(correlation_id = %correlation_id, main_category, "Listing sub-categories");

    match state.lookup().list_sub_categories(main_category).await {
        Ok(sub_categories) => {
            let body: Vec<SubCategoryEntry> = sub_categories
                .into_iter()
                .map(|sub_category| SubCategoryEntry { sub_category })
                .collect();
            json_ok(body)
        }
        Err(err) => {
            error!(correlation_id = %correlation_id, error = %err, "Error fetching sub categories");
            ApiErrorResponse::from_lookup(err, "sub categories").into_response()
        }
    }
}

/// Handler for GET /ranks?mainCategory=X&subCategory=Y.
async fn ranks_handler(
    State(state): State<AppState>,
    query: Result<Query<LookupQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => return query_rejected(correlation_id, rejection),
    };

    let main_category = match query.require_main_category() {
        Ok(main_category) => main_category,
        Err(err) => {
            warn!(correlation_id = %correlation_id, "Rank request without main category");
            return ApiErrorResponse::from(err).into_response();
        }
    };
    let sub_category = query.sub_category.as_deref();
    info!(
        correlation_id = %correlation_id,
        main_category,
        sub_category = sub_category.unwrap_or_default(),
        "Listing ranks"
    );

    match state.lookup().list_ranks(main_category, sub_category).await {
        Ok(ranks) => {
            let body: Vec<RankEntry> = ranks.into_iter().map(|rank| RankEntry { rank }).collect();
            json_ok(body)
        }
        Err(err) => {
            error!(correlation_id = %correlation_id, error = %err, "Error fetching ranks");
            ApiErrorResponse::from_lookup(err, "ranks").into_response()
        }
    }
}

/// Handler for GET /contagionAllowances.
async fn contagion_allowances_handler() -> Response {
    json_ok(ContagionAllowance::ALL)
}

/// Handler for POST /calculateSalary.
///
/// Accepts experience years and a contagion allowance tier and returns the
/// salary breakdown.
async fn calculate_salary_handler(
    State(state): State<AppState>,
    payload: Result<Json<SalaryRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing salary calculation request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    if body_text.contains("missing field") {
                        ApiError::validation_error(body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error,
            }
            .into_response();
        }
    };

    let salary_config = state.salary();
    let result = request
        .validate(salary_config)
        .and_then(|(years, tier)| calculate_salary(years, tier, salary_config));

    match result {
        Ok(breakdown) => {
            info!(
                correlation_id = %correlation_id,
                experience_years = request.experience_years,
                contagion_allowance = request.contagion_allowance,
                total = %breakdown.total,
                "Salary calculated"
            );
            json_ok(breakdown)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Salary calculation rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}
