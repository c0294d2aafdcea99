use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use diesel::{dsl::exists, prelude::*, select};
use uuid::Uuid;

use crate::{
    domain::{
        entities::plans::{InsertPlanEntity, PlanEntity, UpdatePlanEntity},
        repositories::plans::PlanRepository,
    },
    infrastructure::postgres::{
        postgres_connection::PgPoolSquad,
        schema::{beneficiaries, plans},
    },
};

/// Soft-delete visibility filter for the plans table.
fn not_deleted() -> diesel::dsl::Eq<plans::deleted, bool> {
    plans::deleted.eq(false)
}

pub struct PlanPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl PlanPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl PlanRepository for PlanPostgres {
    async fn insert(&self, entity: InsertPlanEntity) -> Result<Uuid> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let now = Utc::now();

        let id = diesel::insert_into(plans::table)
            .values((
                &entity,
                plans::registered_at.eq(now),
                plans::updated_at.eq(now),
            ))
            .returning(plans::id)
            .get_result::<Uuid>(&mut conn)?;

        Ok(id)
    }

    async fn update(&self, id: Uuid, entity: UpdatePlanEntity) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        diesel::update(plans::table.filter(plans::id.eq(id)).filter(not_deleted()))
            .set((&entity, plans::updated_at.eq(Utc::now())))
            .execute(&mut conn)?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<PlanEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let plan = plans::table
            .filter(plans::id.eq(id))
            .filter(not_deleted())
            .select(PlanEntity::as_select())
            .first::<PlanEntity>(&mut conn)
            .optional()?;

        Ok(plan)
    }

    async fn list(&self) -> Result<Vec<PlanEntity>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let records = plans::table
            .filter(not_deleted())
            .order(plans::name.asc())
            .select(PlanEntity::as_select())
            .load::<PlanEntity>(&mut conn)?;

        Ok(records)
    }

    async fn exists_by_name(&self, name: &str) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let found = select(exists(
            plans::table
                .filter(plans::name.eq(name))
                .filter(not_deleted()),
        ))
        .get_result::<bool>(&mut conn)?;

        Ok(found)
    }

    async fn exists_by_ans_code(&self, code: &str) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let found = select(exists(
            plans::table
                .filter(plans::ans_registration_code.eq(code))
                .filter(not_deleted()),
        ))
        .get_result::<bool>(&mut conn)?;

        Ok(found)
    }

    async fn has_linked_beneficiaries(&self, plan_id: Uuid) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let found = select(exists(
            beneficiaries::table
                .filter(beneficiaries::plan_id.eq(plan_id))
                .filter(beneficiaries::deleted.eq(false)),
        ))
        .get_result::<bool>(&mut conn)?;

        Ok(found)
    }

    async fn soft_delete(&self, id: Uuid) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let now = Utc::now();

        let affected =
            diesel::update(plans::table.filter(plans::id.eq(id)).filter(not_deleted()))
                .set((
                    plans::deleted.eq(true),
                    plans::deleted_at.eq(now),
                    plans::updated_at.eq(now),
                ))
                .execute(&mut conn)?;

        Ok(affected > 0)
    }
}
