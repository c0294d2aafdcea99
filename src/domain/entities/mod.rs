pub mod beneficiaries;
pub mod plans;
