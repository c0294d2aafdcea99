use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use diesel::{dsl::exists, prelude::*, select};
use uuid::Uuid;

use crate::{
    domain::{
        entities::beneficiaries::{
            BeneficiaryEntity, InsertBeneficiaryEntity, UpdateBeneficiaryEntity,
        },
        repositories::beneficiaries::{BeneficiaryRepository, BeneficiaryWithPlan},
        value_objects::{
            beneficiaries::ListBeneficiariesFilter,
            enums::beneficiary_statuses::BeneficiaryStatus,
        },
    },
    infrastructure::postgres::{
        postgres_connection::PgPoolSquad,
        schema::{beneficiaries, plans},
    },
};

/// Soft-delete visibility filter. Composed into every read and write below;
/// `hard_delete` is the only operation that bypasses it.
fn not_deleted() -> diesel::dsl::Eq<beneficiaries::deleted, bool> {
    beneficiaries::deleted.eq(false)
}

pub struct BeneficiaryPostgres {
    db_pool: Arc<PgPoolSquad>,
}

impl BeneficiaryPostgres {
    pub fn new(db_pool: Arc<PgPoolSquad>) -> Self {
        Self { db_pool }
    }
}

#[async_trait]
impl BeneficiaryRepository for BeneficiaryPostgres {
    async fn insert(&self, entity: InsertBeneficiaryEntity) -> Result<Uuid> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let now = Utc::now();

        let id = diesel::insert_into(beneficiaries::table)
            .values((
                &entity,
                beneficiaries::registered_at.eq(now),
                beneficiaries::updated_at.eq(now),
            ))
            .returning(beneficiaries::id)
            .get_result::<Uuid>(&mut conn)?;

        Ok(id)
    }

    async fn update(&self, id: Uuid, entity: UpdateBeneficiaryEntity) -> Result<()> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        diesel::update(
            beneficiaries::table
                .filter(beneficiaries::id.eq(id))
                .filter(not_deleted()),
        )
        .set((&entity, beneficiaries::updated_at.eq(Utc::now())))
        .execute(&mut conn)?;

        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<BeneficiaryWithPlan>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let record = beneficiaries::table
            .inner_join(plans::table)
            .filter(beneficiaries::id.eq(id))
            .filter(not_deleted())
            .select((BeneficiaryEntity::as_select(), plans::name))
            .first::<BeneficiaryWithPlan>(&mut conn)
            .optional()?;

        Ok(record)
    }

    async fn find_by_cpf(&self, cpf: &str) -> Result<Option<BeneficiaryWithPlan>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let record = beneficiaries::table
            .inner_join(plans::table)
            .filter(beneficiaries::cpf.eq(cpf))
            .filter(not_deleted())
            .select((BeneficiaryEntity::as_select(), plans::name))
            .first::<BeneficiaryWithPlan>(&mut conn)
            .optional()?;

        Ok(record)
    }

    async fn list(&self, filter: ListBeneficiariesFilter) -> Result<Vec<BeneficiaryWithPlan>> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let mut query = beneficiaries::table
            .inner_join(plans::table)
            .filter(not_deleted())
            .into_boxed();

        if let Some(status) = filter.status {
            query = query.filter(beneficiaries::status.eq(status.to_string()));
        }
        if let Some(plan_id) = filter.plan_id {
            query = query.filter(beneficiaries::plan_id.eq(plan_id));
        }

        let records = query
            .order(beneficiaries::full_name.asc())
            .select((BeneficiaryEntity::as_select(), plans::name))
            .load::<BeneficiaryWithPlan>(&mut conn)?;

        Ok(records)
    }

    async fn exists_by_cpf(&self, cpf: &str) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let found = select(exists(
            beneficiaries::table
                .filter(beneficiaries::cpf.eq(cpf))
                .filter(not_deleted()),
        ))
        .get_result::<bool>(&mut conn)?;

        Ok(found)
    }

    async fn soft_delete(&self, id: Uuid) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;
        let now = Utc::now();

        // Soft delete always forces the status to Inactive alongside the flag.
        let affected = diesel::update(
            beneficiaries::table
                .filter(beneficiaries::id.eq(id))
                .filter(not_deleted()),
        )
        .set((
            beneficiaries::deleted.eq(true),
            beneficiaries::deleted_at.eq(now),
            beneficiaries::status.eq(BeneficiaryStatus::Inactive.to_string()),
            beneficiaries::updated_at.eq(now),
        ))
        .execute(&mut conn)?;

        Ok(affected > 0)
    }

    async fn hard_delete(&self, id: Uuid) -> Result<bool> {
        let mut conn = Arc::clone(&self.db_pool).get()?;

        let affected = diesel::delete(beneficiaries::table.filter(beneficiaries::id.eq(id)))
            .execute(&mut conn)?;

        Ok(affected > 0)
    }
}
