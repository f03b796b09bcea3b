pub mod rng;
pub mod time;
pub mod token;
pub mod validation;
