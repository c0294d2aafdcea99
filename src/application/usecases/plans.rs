use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use crate::{
    application::error::ServiceError,
    domain::{
        repositories::plans::PlanRepository,
        value_objects::plans::{InsertPlanModel, PlanModel, UpdatePlanModel},
    },
};

const NAME_ALREADY_REGISTERED: &str = "a plan with this name already exists";
const ANS_CODE_ALREADY_REGISTERED: &str = "a plan with this ANS registration code already exists";
const NAME_OR_CODE_ALREADY_REGISTERED: &str =
    "a plan with this name or ANS registration code already exists";
const PLAN_NOT_FOUND: &str = "plan not found";
const PLAN_HAS_BENEFICIARIES: &str = "cannot delete a plan with linked beneficiaries";

pub struct PlansUseCase<T>
where
    T: PlanRepository + Send + Sync,
{
    plan_repository: Arc<T>,
}

impl<T> PlansUseCase<T>
where
    T: PlanRepository + Send + Sync,
{
    pub fn new(plan_repository: Arc<T>) -> Self {
        Self { plan_repository }
    }

    pub async fn create(&self, model: InsertPlanModel) -> Result<PlanModel, ServiceError> {
        let violations = model.validate();
        if !violations.is_empty() {
            return Err(ServiceError::Validation(violations));
        }

        // Name first, then code; the two checks are independent.
        if self.plan_repository.exists_by_name(&model.name).await? {
            return Err(ServiceError::Conflict(NAME_ALREADY_REGISTERED.to_string()));
        }
        if self
            .plan_repository
            .exists_by_ans_code(&model.ans_registration_code)
            .await?
        {
            return Err(ServiceError::Conflict(
                ANS_CODE_ALREADY_REGISTERED.to_string(),
            ));
        }

        let id = self
            .plan_repository
            .insert(model.into_insert_entity())
            .await
            .map_err(|err| {
                ServiceError::from_write_error(err, NAME_OR_CODE_ALREADY_REGISTERED, PLAN_NOT_FOUND)
            })?;
        info!(%id, "plan created");

        self.projection_by_id(id).await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<PlanModel, ServiceError> {
        self.projection_by_id(id).await
    }

    pub async fn list(&self) -> Result<Vec<PlanModel>, ServiceError> {
        let plans = self.plan_repository.list().await?;
        Ok(plans.into_iter().map(PlanModel::from).collect())
    }

    pub async fn update(
        &self,
        id: Uuid,
        patch: UpdatePlanModel,
    ) -> Result<PlanModel, ServiceError> {
        let violations = patch.validate();
        if !violations.is_empty() {
            return Err(ServiceError::Validation(violations));
        }

        let existing = self
            .plan_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(PLAN_NOT_FOUND.to_string()))?;

        self.plan_repository
            .update(id, patch.apply_to(&existing))
            .await
            .map_err(|err| {
                ServiceError::from_write_error(err, NAME_OR_CODE_ALREADY_REGISTERED, PLAN_NOT_FOUND)
            })?;
        info!(%id, "plan updated");

        self.projection_by_id(id).await
    }

    pub async fn soft_delete(&self, id: Uuid) -> Result<(), ServiceError> {
        if self.plan_repository.has_linked_beneficiaries(id).await? {
            return Err(ServiceError::Conflict(PLAN_HAS_BENEFICIARIES.to_string()));
        }

        let deleted = self.plan_repository.soft_delete(id).await?;
        if !deleted {
            return Err(ServiceError::NotFound(PLAN_NOT_FOUND.to_string()));
        }

        info!(%id, "plan soft-deleted");
        Ok(())
    }

    async fn projection_by_id(&self, id: Uuid) -> Result<PlanModel, ServiceError> {
        let plan = self
            .plan_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(PLAN_NOT_FOUND.to_string()))?;

        Ok(PlanModel::from(plan))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use mockall::predicate::eq;

    use crate::domain::{entities::plans::PlanEntity, repositories::plans::MockPlanRepository};

    fn sample_plan(id: Uuid) -> PlanEntity {
        let now = Utc::now();
        PlanEntity {
            id,
            name: "Plano Ouro".to_string(),
            ans_registration_code: "ANS-001".to_string(),
            active: true,
            registered_at: now,
            updated_at: now,
            deleted: false,
            deleted_at: None,
        }
    }

    fn sample_insert() -> InsertPlanModel {
        InsertPlanModel {
            name: "Plano Ouro".to_string(),
            ans_registration_code: "ANS-001".to_string(),
        }
    }

    #[tokio::test]
    async fn create_returns_active_plan() {
        let id = Uuid::new_v4();
        let mut repo = MockPlanRepository::new();

        repo.expect_exists_by_name()
            .with(eq("Plano Ouro"))
            .returning(|_| Box::pin(async { Ok(false) }));
        repo.expect_exists_by_ans_code()
            .with(eq("ANS-001"))
            .returning(|_| Box::pin(async { Ok(false) }));
        repo.expect_insert()
            .returning(move |_| Box::pin(async move { Ok(id) }));
        repo.expect_find_by_id().with(eq(id)).returning(move |_| {
            let plan = sample_plan(id);
            Box::pin(async move { Ok(Some(plan)) })
        });

        let usecase = PlansUseCase::new(Arc::new(repo));
        let created = usecase.create(sample_insert()).await.unwrap();

        assert_eq!(created.id, id);
        assert!(created.active);
    }

    #[tokio::test]
    async fn create_rejects_duplicate_name_before_checking_code() {
        let mut repo = MockPlanRepository::new();
        repo.expect_exists_by_name()
            .with(eq("Plano Ouro"))
            .returning(|_| Box::pin(async { Ok(true) }));
        // exists_by_ans_code must not be called once the name check fails
        repo.expect_exists_by_ans_code().times(0);

        let usecase = PlansUseCase::new(Arc::new(repo));
        let result = usecase.create(sample_insert()).await;

        match result {
            Err(ServiceError::Conflict(message)) => {
                assert_eq!(message, NAME_ALREADY_REGISTERED);
            }
            other => panic!("expected conflict, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn create_rejects_duplicate_ans_code() {
        let mut repo = MockPlanRepository::new();
        repo.expect_exists_by_name()
            .returning(|_| Box::pin(async { Ok(false) }));
        repo.expect_exists_by_ans_code()
            .with(eq("ANS-001"))
            .returning(|_| Box::pin(async { Ok(true) }));

        let usecase = PlansUseCase::new(Arc::new(repo));
        let result = usecase.create(sample_insert()).await;

        match result {
            Err(ServiceError::Conflict(message)) => {
                assert_eq!(message, ANS_CODE_ALREADY_REGISTERED);
            }
            other => panic!("expected conflict, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn soft_delete_is_blocked_while_beneficiaries_are_linked() {
        let id = Uuid::new_v4();
        let mut repo = MockPlanRepository::new();
        repo.expect_has_linked_beneficiaries()
            .with(eq(id))
            .returning(|_| Box::pin(async { Ok(true) }));
        // no mutation may happen when the referential check fails
        repo.expect_soft_delete().times(0);

        let usecase = PlansUseCase::new(Arc::new(repo));
        let result = usecase.soft_delete(id).await;

        match result {
            Err(ServiceError::Conflict(message)) => {
                assert_eq!(message, PLAN_HAS_BENEFICIARIES);
            }
            other => panic!("expected conflict, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn soft_delete_succeeds_once_no_beneficiaries_remain() {
        let id = Uuid::new_v4();
        let mut repo = MockPlanRepository::new();
        repo.expect_has_linked_beneficiaries()
            .with(eq(id))
            .returning(|_| Box::pin(async { Ok(false) }));
        repo.expect_soft_delete()
            .with(eq(id))
            .returning(|_| Box::pin(async { Ok(true) }));

        let usecase = PlansUseCase::new(Arc::new(repo));
        usecase.soft_delete(id).await.unwrap();
    }

    #[tokio::test]
    async fn update_merges_only_present_fields() {
        let id = Uuid::new_v4();
        let mut repo = MockPlanRepository::new();

        repo.expect_find_by_id().with(eq(id)).returning(move |_| {
            let plan = sample_plan(id);
            Box::pin(async move { Ok(Some(plan)) })
        });
        repo.expect_update()
            .withf(|_, changeset| {
                changeset.name == "Plano Ouro" && changeset.ans_registration_code == "ANS-001" && !changeset.active
            })
            .returning(|_, _| Box::pin(async { Ok(()) }));

        let usecase = PlansUseCase::new(Arc::new(repo));
        let patch = UpdatePlanModel {
            active: Some(false),
            ..Default::default()
        };

        let updated = usecase.update(id, patch).await.unwrap();
        assert_eq!(updated.id, id);
    }

    #[tokio::test]
    async fn update_reports_not_found_for_missing_id() {
        let id = Uuid::new_v4();
        let mut repo = MockPlanRepository::new();
        repo.expect_find_by_id()
            .with(eq(id))
            .returning(|_| Box::pin(async { Ok(None) }));

        let usecase = PlansUseCase::new(Arc::new(repo));
        let result = usecase.update(id, UpdatePlanModel::default()).await;

        assert!(matches!(result, Err(ServiceError::NotFound(_))));
    }
}
