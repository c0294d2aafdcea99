pub mod beneficiary_statuses;
