use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::{
    application::usecases::beneficiaries::BeneficiariesUseCase,
    domain::{
        repositories::beneficiaries::BeneficiaryRepository,
        value_objects::beneficiaries::{InsertBeneficiaryModel, UpdateBeneficiaryModel},
    },
    infrastructure::postgres::{
        postgres_connection::PgPoolSquad, repositories::beneficiaries::BeneficiaryPostgres,
    },
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBeneficiariesQuery {
    status: Option<String>,
    plan_id: Option<Uuid>,
}

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let beneficiary_repository = BeneficiaryPostgres::new(Arc::clone(&db_pool));
    let beneficiaries_usecase = BeneficiariesUseCase::new(Arc::new(beneficiary_repository));

    Router::new()
        .route("/", post(create).get(list))
        .route("/:id", get(get_by_id).put(update).delete(soft_delete))
        .with_state(Arc::new(beneficiaries_usecase))
}

pub async fn create<T>(
    State(usecase): State<Arc<BeneficiariesUseCase<T>>>,
    Json(model): Json<InsertBeneficiaryModel>,
) -> impl IntoResponse
where
    T: BeneficiaryRepository + Send + Sync + 'static,
{
    info!("beneficiaries: create request received");
    match usecase.create(model).await {
        Ok(created) => (StatusCode::CREATED, Json(created)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn get_by_id<T>(
    State(usecase): State<Arc<BeneficiariesUseCase<T>>>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse
where
    T: BeneficiaryRepository + Send + Sync + 'static,
{
    match usecase.get_by_id(id).await {
        Ok(beneficiary) => Json(beneficiary).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn list<T>(
    State(usecase): State<Arc<BeneficiariesUseCase<T>>>,
    Query(query): Query<ListBeneficiariesQuery>,
) -> impl IntoResponse
where
    T: BeneficiaryRepository + Send + Sync + 'static,
{
    match usecase.list(query.status, query.plan_id).await {
        Ok(beneficiaries) => Json(beneficiaries).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn update<T>(
    State(usecase): State<Arc<BeneficiariesUseCase<T>>>,
    Path(id): Path<Uuid>,
    Json(patch): Json<UpdateBeneficiaryModel>,
) -> impl IntoResponse
where
    T: BeneficiaryRepository + Send + Sync + 'static,
{
    info!(%id, "beneficiaries: update request received");
    match usecase.update(id, patch).await {
        Ok(updated) => Json(updated).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn soft_delete<T>(
    State(usecase): State<Arc<BeneficiariesUseCase<T>>>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse
where
    T: BeneficiaryRepository + Send + Sync + 'static,
{
    info!(%id, "beneficiaries: delete request received");
    match usecase.soft_delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => err.into_response(),
    }
}
