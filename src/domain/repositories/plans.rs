use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;
use uuid::Uuid;

use crate::domain::entities::plans::{InsertPlanEntity, PlanEntity, UpdatePlanEntity};

#[async_trait]
#[automock]
pub trait PlanRepository {
    async fn insert(&self, entity: InsertPlanEntity) -> Result<Uuid>;
    async fn update(&self, id: Uuid, entity: UpdatePlanEntity) -> Result<()>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<PlanEntity>>;
    async fn list(&self) -> Result<Vec<PlanEntity>>;
    async fn exists_by_name(&self, name: &str) -> Result<bool>;
    async fn exists_by_ans_code(&self, code: &str) -> Result<bool>;
    /// "Does any non-deleted beneficiary still reference this plan?"
    async fn has_linked_beneficiaries(&self, plan_id: Uuid) -> Result<bool>;
    async fn soft_delete(&self, id: Uuid) -> Result<bool>;
}
