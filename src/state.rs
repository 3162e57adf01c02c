use crate::clock::Clock;
use crate::storage::SheetStore;

pub const VISITS_SHEET: &str = "visits";
pub const READINGS_SHEET: &str = "readings";

#[derive(Clone)]
pub struct AppState {
    pub store: SheetStore,
    pub clock: Clock,
}

impl AppState {
    pub fn new(store: SheetStore, clock: Clock) -> Self {
        Self { store, clock }
    }
}
