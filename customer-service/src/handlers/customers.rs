use crate::dtos::{CustomerResponse, SearchParams, SeedResponse};
use crate::services::{self, metrics, CustomerFilter};
use crate::startup::AppState;
use axum::{extract::State, Json};
use service_core::error::AppError;
use service_core::utils::ValidatedQuery;

/// `GET /api/customers/search`
///
/// Case-insensitive partial match of `q` against first name, last name,
/// phone, address, postcode and email.
#[tracing::instrument(skip_all)]
pub async fn search_customers(
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<SearchParams>,
) -> Result<Json<Vec<CustomerResponse>>, AppError> {
    let store = state.store.require()?;

    let filter = CustomerFilter::search(params.q);
    let customers = store.find_customers(&filter, params.limit).await?;

    tracing::info!(
        limit = params.limit,
        results = customers.len(),
        "Customer search completed"
    );
    metrics::record_search(customers.len());

    Ok(Json(
        customers.into_iter().map(CustomerResponse::from).collect(),
    ))
}

/// `POST /api/customers/seed`
///
/// Inserts the sample customers, skipping any whose email is already stored.
/// Safe to call repeatedly.
#[tracing::instrument(skip_all)]
pub async fn seed_customers(State(state): State<AppState>) -> Result<Json<SeedResponse>, AppError> {
    let store = state.store.require()?;

    let outcome = services::seed_customers(store, &services::sample_customers()).await?;

    tracing::info!(
        inserted = outcome.inserted,
        total = outcome.total,
        "Customer seed completed"
    );
    metrics::record_seed(outcome.inserted);

    Ok(Json(SeedResponse::from(outcome)))
}
