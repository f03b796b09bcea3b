pub mod health;
pub mod question_bank;
