pub mod beneficiaries;
pub mod enums;
pub mod plans;
pub mod validation;
