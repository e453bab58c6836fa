use std::sync::Arc;
use std::time::Duration;
use chrono::Utc;
use tokio::time::sleep;
use tracing::{error, info, info_span, Instrument};
use crate::state::AppState;

/// Periodic housekeeping: active passes whose validity window has closed are
/// moved to `expired`. Pending passes are left alone so a late payment
/// confirmation can still be reconciled upstream.
pub async fn start_background_worker(state: Arc<AppState>) {
    info!("Starting pass expiry worker...");

    loop {
        let span = info_span!("expiry_sweep");

        async {
            match state.pass_repo.expire_overdue(Utc::now()).await {
                Ok(0) => {}
                Ok(count) => info!("Marked {} overdue passes as expired", count),
                Err(e) => error!("Expiry sweep failed: {:?}", e),
            }
        }
            .instrument(span)
            .await;

        sleep(Duration::from_secs(state.config.expiry_sweep_secs)).await;
    }
}
