use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    entities::plans::{InsertPlanEntity, PlanEntity, UpdatePlanEntity},
    value_objects::validation::FieldRule,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlanModel {
    pub id: Uuid,
    pub name: String,
    pub ans_registration_code: String,
    pub active: bool,
    pub registered_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<PlanEntity> for PlanModel {
    fn from(entity: PlanEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            ans_registration_code: entity.ans_registration_code,
            active: entity.active,
            registered_at: entity.registered_at,
            updated_at: entity.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertPlanModel {
    pub name: String,
    pub ans_registration_code: String,
}

impl InsertPlanModel {
    pub fn validate(&self) -> Vec<FieldRule> {
        let mut violations = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            violations.push(FieldRule::new("name", "required"));
        } else if name.chars().count() > 100 {
            violations.push(FieldRule::new("name", "max_length_100"));
        }

        let code = self.ans_registration_code.trim();
        if code.is_empty() {
            violations.push(FieldRule::new("ans_registration_code", "required"));
        } else if code.chars().count() > 50 {
            violations.push(FieldRule::new("ans_registration_code", "max_length_50"));
        }

        violations
    }

    pub fn into_insert_entity(self) -> InsertPlanEntity {
        InsertPlanEntity {
            name: self.name.trim().to_string(),
            ans_registration_code: self.ans_registration_code.trim().to_string(),
            active: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlanModel {
    pub name: Option<String>,
    pub ans_registration_code: Option<String>,
    pub active: Option<bool>,
}

impl UpdatePlanModel {
    pub fn validate(&self) -> Vec<FieldRule> {
        let mut violations = Vec::new();

        if let Some(name) = &self.name {
            let name = name.trim();
            if name.is_empty() {
                violations.push(FieldRule::new("name", "required"));
            } else if name.chars().count() > 100 {
                violations.push(FieldRule::new("name", "max_length_100"));
            }
        }

        if let Some(code) = &self.ans_registration_code {
            let code = code.trim();
            if code.is_empty() {
                violations.push(FieldRule::new("ans_registration_code", "required"));
            } else if code.chars().count() > 50 {
                violations.push(FieldRule::new("ans_registration_code", "max_length_50"));
            }
        }

        violations
    }

    pub fn apply_to(&self, entity: &PlanEntity) -> UpdatePlanEntity {
        UpdatePlanEntity {
            name: self
                .name
                .as_deref()
                .map(|name| name.trim().to_string())
                .unwrap_or_else(|| entity.name.clone()),
            ans_registration_code: self
                .ans_registration_code
                .as_deref()
                .map(|code| code.trim().to_string())
                .unwrap_or_else(|| entity.ans_registration_code.clone()),
            active: self.active.unwrap_or(entity.active),
        }
    }
}
