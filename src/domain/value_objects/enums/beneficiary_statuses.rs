use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BeneficiaryStatus {
    #[default]
    Active,
    Inactive,
}

impl Display for BeneficiaryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = match self {
            BeneficiaryStatus::Active => "Active",
            BeneficiaryStatus::Inactive => "Inactive",
        };
        write!(f, "{}", status)
    }
}

impl BeneficiaryStatus {
    /// Case-insensitive parse. Accepts the Portuguese spellings kept for
    /// compatibility with existing clients ("ativo"/"inativo"). Unrecognized
    /// values yield `None`; callers decide whether that means "no filter" or
    /// "leave the field unchanged".
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" | "ativo" => Some(BeneficiaryStatus::Active),
            "inactive" | "inativo" => Some(BeneficiaryStatus::Inactive),
            _ => None,
        }
    }
}
