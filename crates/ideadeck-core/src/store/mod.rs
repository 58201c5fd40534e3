pub mod curation;
pub mod idea_store;
pub mod overlay;
pub mod views;

pub use curation::CurationLedger;
pub use idea_store::{store_from_listing, IdeaStore, StoreSource};
pub use overlay::CurationOverlay;
pub use views::{project, EmptyKind, HiddenPolicy, Projection, SortKey, Tab, ViewParams};
