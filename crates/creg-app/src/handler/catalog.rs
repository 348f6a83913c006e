//! Catalog load handler.

use creg_model::Catalog;

use super::{Effect, MessageHandler};
use crate::notice::Notice;
use crate::state::{AppState, CatalogStatus};

/// Applies the outcome of the one-time catalog load.
///
/// A failure leaves an empty catalog, so selection is effectively disabled.
pub struct CatalogHandler;

impl MessageHandler<Result<Catalog, String>> for CatalogHandler {
    fn handle(&self, state: &mut AppState, msg: Result<Catalog, String>) -> Effect {
        match msg {
            Ok(catalog) => match state.settings.effective_band(&catalog) {
                Ok(band) => {
                    tracing::info!(
                        courses = catalog.len(),
                        min = band.min(),
                        max = band.max(),
                        "Catalog ready"
                    );
                    state.band = band;
                    state.catalog = catalog;
                    state.status = CatalogStatus::Loaded;
                }
                Err(err) => fail(state, err.to_string()),
            },
            Err(reason) => fail(state, reason),
        }

        state.selection = Default::default();
        state.registered.clear();
        state.revalidate();
        Effect::None
    }
}

fn fail(state: &mut AppState, reason: String) {
    tracing::warn!(%reason, "Catalog load failed");
    state.catalog = Catalog::default();
    state.status = CatalogStatus::Failed(reason.clone());
    state.push_notice(Notice::LoadFailed { reason });
}
