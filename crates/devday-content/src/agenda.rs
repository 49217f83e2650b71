//! The published conference schedule.

use chrono::NaiveTime;

use devday_model::{Session, SessionKind, Track};

fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid time literal")
}

/// All fourteen agenda entries, in chronological order. Parallel-room
/// slots share a start time; breaks carry no track or speaker.
pub fn sessions() -> Vec<Session> {
    vec![
        Session {
            id: 1,
            start: at(8, 0),
            title: "Registration & Breakfast".to_string(),
            speaker: None,
            speaker_title: None,
            kind: SessionKind::Break,
            description: "Check-in, networking, and continental breakfast".to_string(),
            duration: "60 min".to_string(),
            location: "Main Lobby".to_string(),
            featured: false,
            track: None,
        },
        Session {
            id: 2,
            start: at(9, 0),
            title: "Opening Keynote: The Future of Web Development".to_string(),
            speaker: Some("Sarah Chen".to_string()),
            speaker_title: Some("Senior Principal Engineer, Google".to_string()),
            kind: SessionKind::Keynote,
            description: "Exploring the next generation of web technologies, performance \
                          optimization, and developer experience improvements."
                .to_string(),
            duration: "45 min".to_string(),
            location: "Main Auditorium".to_string(),
            featured: true,
            track: Some(Track::General),
        },
        Session {
            id: 3,
            start: at(10, 0),
            title: "Coffee Break & Networking".to_string(),
            speaker: None,
            speaker_title: None,
            kind: SessionKind::Break,
            description: "Sponsored by Kahua - Connect with fellow developers over coffee"
                .to_string(),
            duration: "15 min".to_string(),
            location: "Exhibition Hall".to_string(),
            featured: false,
            track: None,
        },
        Session {
            id: 4,
            start: at(10, 15),
            title: "Building Scalable React Applications".to_string(),
            speaker: Some("Mike Rodriguez".to_string()),
            speaker_title: Some("React Core Team Member".to_string()),
            kind: SessionKind::Technical,
            description: "Advanced patterns and architectural decisions for large-scale React \
                          applications."
                .to_string(),
            duration: "45 min".to_string(),
            location: "Room A".to_string(),
            featured: true,
            track: Some(Track::Frontend),
        },
        Session {
            id: 5,
            start: at(10, 15),
            title: "Cloud-Native Development with Kubernetes".to_string(),
            speaker: Some("Alex Thompson".to_string()),
            speaker_title: Some("DevOps Architect, Microsoft".to_string()),
            kind: SessionKind::Technical,
            description: "Container orchestration strategies and best practices for modern \
                          cloud applications."
                .to_string(),
            duration: "45 min".to_string(),
            location: "Room B".to_string(),
            featured: false,
            track: Some(Track::Backend),
        },
        Session {
            id: 6,
            start: at(11, 15),
            title: "AI-Powered Development Tools".to_string(),
            speaker: Some("Dr. Lisa Wang".to_string()),
            speaker_title: Some("ML Research Lead, OpenAI".to_string()),
            kind: SessionKind::Technical,
            description: "How artificial intelligence is revolutionizing the software \
                          development lifecycle."
                .to_string(),
            duration: "45 min".to_string(),
            location: "Room A".to_string(),
            featured: true,
            track: Some(Track::AiMl),
        },
        Session {
            id: 7,
            start: at(11, 15),
            title: "Mobile Development with Flutter".to_string(),
            speaker: Some("James Park".to_string()),
            speaker_title: Some("Mobile Lead, Uber".to_string()),
            kind: SessionKind::Technical,
            description: "Cross-platform mobile development strategies and performance \
                          optimization."
                .to_string(),
            duration: "45 min".to_string(),
            location: "Room B".to_string(),
            featured: false,
            track: Some(Track::Mobile),
        },
        Session {
            id: 8,
            start: at(12, 15),
            title: "Lunch & Sponsor Showcase".to_string(),
            speaker: None,
            speaker_title: None,
            kind: SessionKind::Break,
            description: "Catered lunch featuring local Denver favorites and sponsor \
                          exhibitions from Kahua, Uno Platform, TEKsystems, and 40AU"
                .to_string(),
            duration: "75 min".to_string(),
            location: "Exhibition Hall".to_string(),
            featured: false,
            track: None,
        },
        Session {
            id: 9,
            start: at(13, 30),
            title: "Panel: The Future of Remote Work in Tech".to_string(),
            speaker: Some("Industry Leaders Panel".to_string()),
            speaker_title: Some("CTOs from leading tech companies".to_string()),
            kind: SessionKind::Panel,
            description: "Discussion on remote work trends, team collaboration, and company \
                          culture."
                .to_string(),
            duration: "45 min".to_string(),
            location: "Main Auditorium".to_string(),
            featured: true,
            track: Some(Track::Leadership),
        },
        Session {
            id: 10,
            start: at(14, 30),
            title: "Web Performance Optimization".to_string(),
            speaker: Some("Emma Davis".to_string()),
            speaker_title: Some("Performance Engineer, Netflix".to_string()),
            kind: SessionKind::Technical,
            description: "Advanced techniques for optimizing web application performance and \
                          user experience."
                .to_string(),
            duration: "45 min".to_string(),
            location: "Room A".to_string(),
            featured: false,
            track: Some(Track::Frontend),
        },
        Session {
            id: 11,
            start: at(14, 30),
            title: "Database Design for Modern Applications".to_string(),
            speaker: Some("Robert Kim".to_string()),
            speaker_title: Some("Database Architect, MongoDB".to_string()),
            kind: SessionKind::Technical,
            description: "NoSQL vs SQL considerations and database architecture patterns."
                .to_string(),
            duration: "45 min".to_string(),
            location: "Room B".to_string(),
            featured: false,
            track: Some(Track::Backend),
        },
        Session {
            id: 12,
            start: at(15, 30),
            title: "Afternoon Break".to_string(),
            speaker: None,
            speaker_title: None,
            kind: SessionKind::Break,
            description: "Refreshments and networking".to_string(),
            duration: "15 min".to_string(),
            location: "Exhibition Hall".to_string(),
            featured: false,
            track: None,
        },
        Session {
            id: 13,
            start: at(15, 45),
            title: "Closing Keynote: Building Inclusive Tech Communities".to_string(),
            speaker: Some("Jordan Martinez".to_string()),
            speaker_title: Some("VP of Engineering, Slack".to_string()),
            kind: SessionKind::Keynote,
            description: "Creating diverse and inclusive technology teams and communities."
                .to_string(),
            duration: "45 min".to_string(),
            location: "Main Auditorium".to_string(),
            featured: true,
            track: Some(Track::General),
        },
        Session {
            id: 14,
            start: at(16, 45),
            title: "Closing Reception & Awards".to_string(),
            speaker: None,
            speaker_title: None,
            kind: SessionKind::Break,
            description: "Networking reception with local craft beer and community awards"
                .to_string(),
            duration: "75 min".to_string(),
            location: "Rooftop Terrace".to_string(),
            featured: false,
            track: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use devday_model::{TrackFilter, tracks_in};

    #[test]
    fn schedule_has_fourteen_entries_in_order() {
        let sessions = sessions();
        assert_eq!(sessions.len(), 14);
        assert!(
            sessions.windows(2).all(|pair| pair[0].start <= pair[1].start),
            "agenda must be chronological"
        );
        assert_eq!(sessions[0].title, "Registration & Breakfast");
        assert_eq!(sessions[13].title, "Closing Reception & Awards");
    }

    #[test]
    fn tracks_derive_in_first_appearance_order() {
        assert_eq!(
            tracks_in(&sessions()),
            vec![
                Track::General,
                Track::Frontend,
                Track::Backend,
                Track::AiMl,
                Track::Mobile,
                Track::Leadership,
            ]
        );
    }

    #[test]
    fn breaks_have_no_track_or_speaker() {
        for session in sessions() {
            if session.kind == SessionKind::Break {
                assert!(session.track.is_none(), "{} has a track", session.title);
                assert!(session.speaker.is_none(), "{} has a speaker", session.title);
            }
        }
    }

    #[test]
    fn frontend_filter_keeps_breaks_and_drops_backend() {
        let sessions = sessions();
        let filter = TrackFilter::Track(Track::Frontend);
        let visible: Vec<_> = sessions.iter().filter(|s| filter.matches(s)).collect();

        assert_eq!(visible.len(), 7);
        assert!(visible.iter().any(|s| s.title == "Building Scalable React Applications"));
        assert!(visible.iter().any(|s| s.title == "Coffee Break & Networking"));
        assert!(
            !visible
                .iter()
                .any(|s| s.title == "Cloud-Native Development with Kubernetes")
        );
    }

    #[test]
    fn all_filter_is_idempotent() {
        let sessions = sessions();
        let once: Vec<_> = sessions
            .iter()
            .filter(|s| TrackFilter::All.matches(s))
            .map(|s| s.id)
            .collect();
        let twice: Vec<_> = sessions
            .iter()
            .filter(|s| TrackFilter::All.matches(s))
            .filter(|s| TrackFilter::All.matches(s))
            .map(|s| s.id)
            .collect();
        assert_eq!(once, twice);
        assert_eq!(once.len(), sessions.len());
    }

    #[test]
    fn featured_slots_match_the_published_programme() {
        let featured: Vec<_> = sessions()
            .into_iter()
            .filter(|s| s.featured)
            .map(|s| s.id)
            .collect();
        assert_eq!(featured, vec![2, 4, 6, 9, 13]);
    }
}
