use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tracing::info;
use uuid::Uuid;

use crate::{
    application::usecases::plans::PlansUseCase,
    domain::{
        repositories::plans::PlanRepository,
        value_objects::plans::{InsertPlanModel, UpdatePlanModel},
    },
    infrastructure::postgres::{
        postgres_connection::PgPoolSquad, repositories::plans::PlanPostgres,
    },
};

pub fn routes(db_pool: Arc<PgPoolSquad>) -> Router {
    let plan_repository = PlanPostgres::new(Arc::clone(&db_pool));
    let plans_usecase = PlansUseCase::new(Arc::new(plan_repository));

    Router::new()
        .route("/", post(create).get(list))
        .route("/:id", get(get_by_id).put(update).delete(soft_delete))
        .with_state(Arc::new(plans_usecase))
}

pub async fn create<T>(
    State(usecase): State<Arc<PlansUseCase<T>>>,
    Json(model): Json<InsertPlanModel>,
) -> impl IntoResponse
where
    T: PlanRepository + Send + Sync + 'static,
{
    info!("plans: create request received");
    match usecase.create(model).await {
        Ok(created) => (StatusCode::CREATED, Json(created)).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn get_by_id<T>(
    State(usecase): State<Arc<PlansUseCase<T>>>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse
where
    T: PlanRepository + Send + Sync + 'static,
{
    match usecase.get_by_id(id).await {
        Ok(plan) => Json(plan).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn list<T>(State(usecase): State<Arc<PlansUseCase<T>>>) -> impl IntoResponse
where
    T: PlanRepository + Send + Sync + 'static,
{
    match usecase.list().await {
        Ok(plans) => Json(plans).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn update<T>(
    State(usecase): State<Arc<PlansUseCase<T>>>,
    Path(id): Path<Uuid>,
    Json(patch): Json<UpdatePlanModel>,
) -> impl IntoResponse
where
    T: PlanRepository + Send + Sync + 'static,
{
    info!(%id, "plans: update request received");
    match usecase.update(id, patch).await {
        Ok(updated) => Json(updated).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn soft_delete<T>(
    State(usecase): State<Arc<PlansUseCase<T>>>,
    Path(id): Path<Uuid>,
) -> impl IntoResponse
where
    T: PlanRepository + Send + Sync + 'static,
{
    info!(%id, "plans: delete request received");
    match usecase.soft_delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => err.into_response(),
    }
}
