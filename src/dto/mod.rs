pub mod question_bank_dto;
