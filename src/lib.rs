pub mod config;
pub mod dto;
pub mod error;
pub mod fragments;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::services::question_bank_service::{BankOptions, QuestionBankService};

#[derive(Clone)]
pub struct AppState {
    pub question_bank: QuestionBankService,
}

impl AppState {
    pub fn new(options: BankOptions) -> Self {
        Self {
            question_bank: QuestionBankService::new(options),
        }
    }

    pub fn from_config() -> Self {
        Self::new(BankOptions::from_config(crate::config::get_config()))
    }
}
