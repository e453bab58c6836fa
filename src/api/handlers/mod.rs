pub mod availability;
pub mod health;
pub mod pass;
pub mod pass_type;
pub mod profile;
