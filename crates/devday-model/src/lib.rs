pub mod event;
pub mod registration;
pub mod session;
pub mod speaker;

pub use event::{ContactInfo, EventInfo, SocialLink, SocialPlatform, Sponsor, SponsorTier};
pub use registration::{RegistrationInput, Role};
pub use session::{Session, SessionKind, Track, TrackFilter, tracks_in};
pub use speaker::{SocialLinks, Speaker, partition_featured};
