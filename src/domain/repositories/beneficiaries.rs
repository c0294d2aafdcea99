use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::{
    entities::beneficiaries::{BeneficiaryEntity, InsertBeneficiaryEntity, UpdateBeneficiaryEntity},
    value_objects::beneficiaries::ListBeneficiariesFilter,
};

/// A beneficiary row joined with its plan name, the shape every read returns.
pub type BeneficiaryWithPlan = (BeneficiaryEntity, String);

/// Every read applies the soft-delete visibility filter; `hard_delete` is the
/// only operation allowed to see rows marked deleted.
#[async_trait]
#[automock]
pub trait BeneficiaryRepository {
    async fn insert(&self, entity: InsertBeneficiaryEntity) -> Result<Uuid>;
    async fn update(&self, id: Uuid, entity: UpdateBeneficiaryEntity) -> Result<()>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BeneficiaryWithPlan>>;
    async fn find_by_cpf(&self, cpf: &str) -> Result<Option<BeneficiaryWithPlan>>;
    async fn list(&self, filter: ListBeneficiariesFilter) -> Result<Vec<BeneficiaryWithPlan>>;
    async fn exists_by_cpf(&self, cpf: &str) -> Result<bool>;
    async fn soft_delete(&self, id: Uuid) -> Result<bool>;
    async fn hard_delete(&self, id: Uuid) -> Result<bool>;
}
