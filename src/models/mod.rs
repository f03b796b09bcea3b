pub mod discipline;
pub mod question;
pub mod session;
