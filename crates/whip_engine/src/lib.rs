//! Whiplink engine: network workers for canonical lookup and link
//! extraction, plus the channel plumbing that reports their completions
//! back to the interaction loop.
mod engine;
mod extract;
mod lookup;
mod types;
mod wire;

pub use engine::EngineHandle;
pub use extract::{ExtractSettings, LinkExtractor, PageLinkExtractor};
pub use lookup::{HttpLookupClient, LookupClient, LookupSettings};
pub use types::{EngineEvent, ExtractError, LookupError};
