pub mod composer;
pub mod metrics_service;
pub mod question_bank_service;
pub mod question_validator;
pub mod uniqueness;
