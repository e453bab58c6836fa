pub mod pass;
pub mod pass_profile;
pub mod pass_type;
