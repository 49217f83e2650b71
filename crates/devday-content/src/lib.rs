//! Bundled content for Denver Dev Day 2025: the agenda, the speaker
//! directory, and event facts. Everything here is literal data; nothing
//! is loaded at runtime or mutated after construction.

pub mod agenda;
pub mod event;
pub mod speakers;

pub use agenda::sessions;
pub use event::{contact, event_info, included_benefits, social_links, sponsors};
pub use speakers::speakers;
