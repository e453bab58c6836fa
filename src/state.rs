use std::sync::Arc;
use crate::domain::ports::{PassProfileRepository, PassRepository, PassTypeRepository};
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub pass_type_repo: Arc<dyn PassTypeRepository>,
    pub profile_repo: Arc<dyn PassProfileRepository>,
    pub pass_repo: Arc<dyn PassRepository>,
}
