//! Consistency checks between the speaker directory and the agenda.

use devday_content::{sessions, speakers};

#[test]
fn every_speaker_session_appears_in_the_agenda() {
    let sessions = sessions();
    for speaker in speakers() {
        let slot = sessions
            .iter()
            .find(|session| session.title.contains(&speaker.session))
            .unwrap_or_else(|| panic!("no agenda entry for {}", speaker.session));
        assert_eq!(
            slot.start, speaker.session_time,
            "{} is listed at a different time than their session",
            speaker.name
        );
    }
}

#[test]
fn agenda_speaker_names_match_the_directory_entries() {
    let directory = speakers();
    for session in sessions() {
        let Some(name) = &session.speaker else {
            continue;
        };
        // Panels aggregate several names and have no directory entry.
        if let Some(speaker) = directory.iter().find(|s| &s.name == name) {
            assert!(
                session.title.contains(&speaker.session),
                "{} is billed for '{}' but the directory lists '{}'",
                name,
                session.title,
                speaker.session
            );
        }
    }
}
