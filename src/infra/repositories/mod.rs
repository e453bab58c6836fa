pub mod sqlite_pass_repo;
pub mod sqlite_pass_type_repo;
pub mod sqlite_profile_repo;

pub mod postgres_pass_repo;
pub mod postgres_pass_type_repo;
pub mod postgres_profile_repo;
