use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    entities::beneficiaries::{BeneficiaryEntity, InsertBeneficiaryEntity, UpdateBeneficiaryEntity},
    value_objects::{
        enums::beneficiary_statuses::BeneficiaryStatus,
        validation::{FieldRule, is_cpf},
    },
};

/// Public projection of a beneficiary. Soft-delete bookkeeping never leaves
/// the repository layer; the plan name is resolved on read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BeneficiaryModel {
    pub id: Uuid,
    pub full_name: String,
    pub cpf: String,
    pub birth_date: NaiveDate,
    pub status: BeneficiaryStatus,
    pub plan_id: Uuid,
    pub plan_name: String,
    pub registered_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BeneficiaryModel {
    pub fn from_entity(entity: BeneficiaryEntity, plan_name: String) -> Self {
        Self {
            id: entity.id,
            full_name: entity.full_name,
            cpf: entity.cpf,
            birth_date: entity.birth_date,
            status: BeneficiaryStatus::parse(&entity.status).unwrap_or_default(),
            plan_id: entity.plan_id,
            plan_name,
            registered_at: entity.registered_at,
            updated_at: entity.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertBeneficiaryModel {
    pub full_name: String,
    pub cpf: String,
    pub birth_date: NaiveDate,
    pub plan_id: Uuid,
}

impl InsertBeneficiaryModel {
    pub fn validate(&self) -> Vec<FieldRule> {
        let mut violations = Vec::new();

        let name = self.full_name.trim();
        if name.is_empty() {
            violations.push(FieldRule::new("full_name", "required"));
        } else if name.chars().count() < 3 || name.chars().count() > 150 {
            violations.push(FieldRule::new("full_name", "length_between_3_and_150"));
        }

        if !is_cpf(&self.cpf) {
            violations.push(FieldRule::new("cpf", "exactly_11_digits"));
        }

        violations
    }

    pub fn into_insert_entity(self) -> InsertBeneficiaryEntity {
        InsertBeneficiaryEntity {
            full_name: self.full_name.trim().to_string(),
            cpf: self.cpf,
            birth_date: self.birth_date,
            status: BeneficiaryStatus::Active.to_string(),
            plan_id: self.plan_id,
        }
    }
}

/// Patch shape for PUT: every field optional, applied as "if present,
/// overwrite" against the loaded entity. An unparseable status string leaves
/// the stored status unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBeneficiaryModel {
    pub full_name: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub plan_id: Option<Uuid>,
    pub status: Option<String>,
}

impl UpdateBeneficiaryModel {
    pub fn validate(&self) -> Vec<FieldRule> {
        let mut violations = Vec::new();

        if let Some(name) = &self.full_name {
            let name = name.trim();
            if name.is_empty() {
                violations.push(FieldRule::new("full_name", "required"));
            } else if name.chars().count() < 3 || name.chars().count() > 150 {
                violations.push(FieldRule::new("full_name", "length_between_3_and_150"));
            }
        }

        violations
    }

    pub fn apply_to(&self, entity: &BeneficiaryEntity) -> UpdateBeneficiaryEntity {
        let status = self
            .status
            .as_deref()
            .and_then(BeneficiaryStatus::parse)
            .map(|status| status.to_string())
            .unwrap_or_else(|| entity.status.clone());

        UpdateBeneficiaryEntity {
            full_name: self
                .full_name
                .as_deref()
                .map(|name| name.trim().to_string())
                .unwrap_or_else(|| entity.full_name.clone()),
            birth_date: self.birth_date.unwrap_or(entity.birth_date),
            status,
            plan_id: self.plan_id.unwrap_or(entity.plan_id),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListBeneficiariesFilter {
    pub status: Option<BeneficiaryStatus>,
    pub plan_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entity() -> BeneficiaryEntity {
        let now = Utc::now();
        BeneficiaryEntity {
            id: Uuid::new_v4(),
            full_name: "Maria Souza".to_string(),
            cpf: "12345678901".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
            status: BeneficiaryStatus::Active.to_string(),
            plan_id: Uuid::new_v4(),
            registered_at: now,
            updated_at: now,
            deleted: false,
            deleted_at: None,
        }
    }

    #[test]
    fn insert_validation_flags_short_name_and_bad_cpf() {
        let model = InsertBeneficiaryModel {
            full_name: "Jo".to_string(),
            cpf: "123".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            plan_id: Uuid::new_v4(),
        };

        let violations = model.validate();
        assert_eq!(violations.len(), 2);
        assert_eq!(
            violations[0],
            FieldRule::new("full_name", "length_between_3_and_150")
        );
        assert_eq!(violations[1], FieldRule::new("cpf", "exactly_11_digits"));
    }

    #[test]
    fn empty_patch_keeps_every_field() {
        let entity = sample_entity();
        let patch = UpdateBeneficiaryModel::default();

        let changeset = patch.apply_to(&entity);
        assert_eq!(changeset.full_name, entity.full_name);
        assert_eq!(changeset.birth_date, entity.birth_date);
        assert_eq!(changeset.status, entity.status);
        assert_eq!(changeset.plan_id, entity.plan_id);
    }

    #[test]
    fn unparseable_status_leaves_field_unchanged() {
        let mut entity = sample_entity();
        entity.status = BeneficiaryStatus::Inactive.to_string();

        let patch = UpdateBeneficiaryModel {
            status: Some("bogus".to_string()),
            ..Default::default()
        };

        let changeset = patch.apply_to(&entity);
        assert_eq!(changeset.status, BeneficiaryStatus::Inactive.to_string());
    }

    #[test]
    fn patch_overwrites_only_present_fields() {
        let entity = sample_entity();
        let new_plan = Uuid::new_v4();

        let patch = UpdateBeneficiaryModel {
            full_name: Some("Maria S. Oliveira".to_string()),
            plan_id: Some(new_plan),
            status: Some("inativo".to_string()),
            ..Default::default()
        };

        let changeset = patch.apply_to(&entity);
        assert_eq!(changeset.full_name, "Maria S. Oliveira");
        assert_eq!(changeset.birth_date, entity.birth_date);
        assert_eq!(changeset.plan_id, new_plan);
        assert_eq!(changeset.status, BeneficiaryStatus::Inactive.to_string());
    }
}
