//! Application state for the web layer.

use std::sync::Arc;

use crate::maps::MapsClient;
use crate::ns::NsClient;

/// Shared application state.
///
/// Holds one client per upstream provider.
#[derive(Clone)]
pub struct AppState {
    /// NS train information client
    pub ns: Arc<NsClient>,

    /// Google Maps client
    pub maps: Arc<MapsClient>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(ns: NsClient, maps: MapsClient) -> Self {
        Self {
            ns: Arc::new(ns),
            maps: Arc::new(maps),
        }
    }
}
