use chrono::NaiveTime;
use std::fmt;
use std::str::FromStr;

/// Kind of agenda entry. Breaks and logistics entries carry no track and
/// stay visible under every filter selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionKind {
    Keynote,
    Technical,
    Panel,
    Break,
}

impl SessionKind {
    /// Badge text shown next to the session title.
    pub fn label(&self) -> &'static str {
        match self {
            SessionKind::Keynote => "Keynote",
            SessionKind::Technical => "Technical",
            SessionKind::Panel => "Panel",
            SessionKind::Break => "Break",
        }
    }
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Topical category used by the agenda filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Track {
    General,
    Frontend,
    Backend,
    AiMl,
    Mobile,
    Leadership,
}

impl Track {
    /// Canonical track name as it appears in the agenda.
    pub fn as_str(&self) -> &'static str {
        match self {
            Track::General => "General",
            Track::Frontend => "Frontend",
            Track::Backend => "Backend",
            Track::AiMl => "AI/ML",
            Track::Mobile => "Mobile",
            Track::Leadership => "Leadership",
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Track {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "GENERAL" => Ok(Track::General),
            "FRONTEND" => Ok(Track::Frontend),
            "BACKEND" => Ok(Track::Backend),
            "AI/ML" | "AIML" => Ok(Track::AiMl),
            "MOBILE" => Ok(Track::Mobile),
            "LEADERSHIP" => Ok(Track::Leadership),
            _ => Err(format!("Unknown track: {}", s)),
        }
    }
}

/// One scheduled agenda entry.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: u32,
    pub start: NaiveTime,
    pub title: String,
    pub speaker: Option<String>,
    pub speaker_title: Option<String>,
    pub kind: SessionKind,
    pub description: String,
    pub duration: String,
    pub location: String,
    pub featured: bool,
    /// None marks a track-agnostic entry (registration, breaks, closing).
    pub track: Option<Track>,
}

impl Session {
    /// Start time formatted as it appears in the agenda, e.g. "8:00 AM".
    pub fn start_label(&self) -> String {
        self.start.format("%-I:%M %p").to_string()
    }
}

/// Agenda filter selection: every session, or a single track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackFilter {
    #[default]
    All,
    Track(Track),
}

impl TrackFilter {
    /// Whether the session is visible under this filter.
    ///
    /// Sessions without a track pass every filter; they are never hidden.
    pub fn matches(&self, session: &Session) -> bool {
        match self {
            TrackFilter::All => true,
            TrackFilter::Track(track) => match session.track {
                Some(session_track) => session_track == *track,
                None => true,
            },
        }
    }

    /// Button text for the filter bar.
    pub fn label(&self) -> &'static str {
        match self {
            TrackFilter::All => "All Tracks",
            TrackFilter::Track(track) => track.as_str(),
        }
    }
}

/// Tracks present in the given sessions, in first-appearance order.
pub fn tracks_in(sessions: &[Session]) -> Vec<Track> {
    let mut seen = Vec::new();
    for session in sessions {
        if let Some(track) = session.track {
            if !seen.contains(&track) {
                seen.push(track);
            }
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(id: u32, track: Option<Track>) -> Session {
        Session {
            id,
            start: NaiveTime::from_hms_opt(9, 0, 0).expect("valid time"),
            title: format!("Session {}", id),
            speaker: None,
            speaker_title: None,
            kind: SessionKind::Technical,
            description: String::new(),
            duration: "60 min".to_string(),
            location: "Main Hall".to_string(),
            featured: false,
            track,
        }
    }

    #[test]
    fn all_filter_matches_everything() {
        assert!(TrackFilter::All.matches(&session(1, Some(Track::Frontend))));
        assert!(TrackFilter::All.matches(&session(2, None)));
    }

    #[test]
    fn track_filter_keeps_trackless_sessions() {
        let filter = TrackFilter::Track(Track::Frontend);
        assert!(filter.matches(&session(1, Some(Track::Frontend))));
        assert!(filter.matches(&session(2, None)));
        assert!(!filter.matches(&session(3, Some(Track::Backend))));
    }

    #[test]
    fn tracks_in_keeps_first_appearance_order() {
        let sessions = vec![
            session(1, None),
            session(2, Some(Track::Backend)),
            session(3, Some(Track::Frontend)),
            session(4, Some(Track::Backend)),
        ];
        assert_eq!(tracks_in(&sessions), vec![Track::Backend, Track::Frontend]);
    }

    #[test]
    fn start_label_drops_leading_zero() {
        let entry = session(1, None);
        assert_eq!(entry.start_label(), "9:00 AM");
    }

    #[test]
    fn track_parses_display_names() {
        assert_eq!("Frontend".parse::<Track>(), Ok(Track::Frontend));
        assert_eq!("ai/ml".parse::<Track>(), Ok(Track::AiMl));
        assert!("Gardening".parse::<Track>().is_err());
    }

    #[test]
    fn filter_labels() {
        assert_eq!(TrackFilter::All.label(), "All Tracks");
        assert_eq!(TrackFilter::Track(Track::AiMl).label(), "AI/ML");
    }
}
