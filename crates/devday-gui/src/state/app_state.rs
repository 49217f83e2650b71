//! Application-level state

use devday_model::{
    ContactInfo, EventInfo, Session, SocialLink, Speaker, Sponsor, Track, TrackFilter, tracks_in,
};

use crate::settings::Settings;

use super::RegistrationState;

/// Page sections reachable from the navigation bar, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    Agenda,
    Speakers,
    Register,
}

impl Section {
    /// Get display name for the navigation link
    pub fn label(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Agenda => "Agenda",
            Self::Speakers => "Speakers",
            Self::Register => "Register",
        }
    }

    /// Get all sections in order
    pub fn all() -> &'static [Section] {
        &[Self::Home, Self::Agenda, Self::Speakers, Self::Register]
    }
}

/// Top-level application state
pub struct AppState {
    // Bundled content, loaded once at startup and never mutated.
    pub event: EventInfo,
    pub sessions: Vec<Session>,
    pub tracks: Vec<Track>,
    pub speakers: Vec<Speaker>,
    pub benefits: [&'static str; 7],
    pub sponsors: Vec<Sponsor>,
    pub contact: ContactInfo,
    pub social: Vec<SocialLink>,

    /// Agenda filter selection.
    pub selected_track: TrackFilter,
    /// Speaker whose detail modal is open, by id.
    pub selected_speaker: Option<u32>,
    /// Navigation request consumed by the target section on its next
    /// render.
    pub pending_scroll: Option<Section>,
    /// Registration form state.
    pub registration: RegistrationState,
    /// User preferences
    pub settings: Settings,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        let sessions = devday_content::sessions();
        let tracks = tracks_in(&sessions);
        Self {
            event: devday_content::event_info(),
            sessions,
            tracks,
            speakers: devday_content::speakers(),
            benefits: devday_content::included_benefits(),
            sponsors: devday_content::sponsors(),
            contact: devday_content::contact(),
            social: devday_content::social_links(),
            selected_track: TrackFilter::All,
            selected_speaker: None,
            pending_scroll: None,
            registration: RegistrationState::default(),
            settings,
        }
    }

    /// Request a scroll to the given section.
    pub fn scroll_to(&mut self, section: Section) {
        self.pending_scroll = Some(section);
    }

    /// Consumes a pending navigation request for the given section.
    /// Returns true exactly once per request.
    pub fn take_scroll(&mut self, section: Section) -> bool {
        if self.pending_scroll == Some(section) {
            self.pending_scroll = None;
            true
        } else {
            false
        }
    }

    pub fn speaker_by_id(&self, id: u32) -> Option<&Speaker> {
        self.speakers.iter().find(|speaker| speaker.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_carries_the_full_programme() {
        let state = AppState::new(Settings::default());
        assert_eq!(state.sessions.len(), 14);
        assert_eq!(state.speakers.len(), 6);
        assert_eq!(state.tracks.len(), 6);
        assert_eq!(state.selected_track, TrackFilter::All);
        assert!(state.selected_speaker.is_none());
    }

    #[test]
    fn scroll_requests_are_consumed_once() {
        let mut state = AppState::new(Settings::default());
        state.scroll_to(Section::Agenda);
        assert!(!state.take_scroll(Section::Speakers));
        assert!(state.take_scroll(Section::Agenda));
        assert!(!state.take_scroll(Section::Agenda));
    }

    #[test]
    fn speakers_resolve_by_id() {
        let state = AppState::new(Settings::default());
        let speaker = state.speaker_by_id(3).expect("speaker 3");
        assert_eq!(speaker.name, "Dr. Lisa Wang");
        assert!(state.speaker_by_id(99).is_none());
    }
}
