use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::infrastructure::postgres::schema::beneficiaries;

#[derive(Debug, Clone, Identifiable, Selectable, Queryable)]
#[diesel(table_name = beneficiaries)]
pub struct BeneficiaryEntity {
    pub id: Uuid,
    pub full_name: String,
    pub cpf: String,
    pub birth_date: NaiveDate,
    pub status: String,
    pub plan_id: Uuid,
    pub registered_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted: bool,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = beneficiaries)]
pub struct InsertBeneficiaryEntity {
    pub full_name: String,
    pub cpf: String,
    pub birth_date: NaiveDate,
    pub status: String,
    pub plan_id: Uuid,
}

/// Full overwrite of the mutable columns. The CPF is a natural key and never
/// changes after creation; `updated_at` is refreshed by the repository.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = beneficiaries)]
pub struct UpdateBeneficiaryEntity {
    pub full_name: String,
    pub birth_date: NaiveDate,
    pub status: String,
    pub plan_id: Uuid,
}
