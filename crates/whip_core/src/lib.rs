//! Whiplink core: pure interaction state machine and renderer.
mod catalog;
mod effect;
mod msg;
mod record;
mod state;
mod update;
mod view;

pub use catalog::{Platform, CATALOG};
pub use effect::Effect;
pub use msg::{Extraction, Key, Msg};
pub use record::{CanonicalRecord, RecordKind};
pub use state::{Phase, SessionState};
pub use update::update;
pub use view::view;
