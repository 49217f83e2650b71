use chrono::NaiveTime;

/// Social profiles for a speaker; either may be absent. Twitter is
/// stored as a handle ("@sarahchen_dev"), LinkedIn as a profile slug.
#[derive(Debug, Clone, Default)]
pub struct SocialLinks {
    pub twitter: Option<String>,
    pub linkedin: Option<String>,
}

impl SocialLinks {
    pub fn twitter_url(&self) -> Option<String> {
        self.twitter
            .as_ref()
            .map(|handle| format!("https://twitter.com/{}", handle.trim_start_matches('@')))
    }

    pub fn linkedin_url(&self) -> Option<String> {
        self.linkedin
            .as_ref()
            .map(|slug| format!("https://linkedin.com/in/{}", slug))
    }
}

/// One speaker directory entry. The session title and time cross-reference
/// the agenda.
#[derive(Debug, Clone)]
pub struct Speaker {
    pub id: u32,
    pub name: String,
    pub title: String,
    pub company: String,
    pub bio: String,
    pub session: String,
    pub session_time: NaiveTime,
    pub location: String,
    pub expertise: Vec<String>,
    pub social: SocialLinks,
    pub featured: bool,
}

impl Speaker {
    /// Uppercased first letter of each name part, used for the avatar
    /// when no photo is available ("Dr. Lisa Wang" -> "DLW").
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .map(|c| c.to_ascii_uppercase())
            .collect()
    }

    /// Session start formatted for display, e.g. "9:00 AM".
    pub fn session_time_label(&self) -> String {
        self.session_time.format("%-I:%M %p").to_string()
    }
}

/// Splits the directory into featured and regular speakers, preserving
/// each record's position within its half.
pub fn partition_featured(speakers: &[Speaker]) -> (Vec<&Speaker>, Vec<&Speaker>) {
    speakers.iter().partition(|speaker| speaker.featured)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn speaker(name: &str, featured: bool) -> Speaker {
        Speaker {
            id: 1,
            name: name.to_string(),
            title: "Engineer".to_string(),
            company: "Acme".to_string(),
            bio: String::new(),
            session: "Talk".to_string(),
            session_time: NaiveTime::from_hms_opt(9, 0, 0).expect("valid time"),
            location: "Main Hall".to_string(),
            expertise: vec![],
            social: SocialLinks::default(),
            featured,
        }
    }

    #[test]
    fn initials_take_each_name_part() {
        assert_eq!(speaker("Sarah Chen", true).initials(), "SC");
        assert_eq!(speaker("Dr. Lisa Wang", true).initials(), "DLW");
    }

    #[test]
    fn social_urls_strip_the_handle_prefix() {
        let social = SocialLinks {
            twitter: Some("@sarahchen_dev".to_string()),
            linkedin: Some("sarah-chen-google".to_string()),
        };
        assert_eq!(
            social.twitter_url().as_deref(),
            Some("https://twitter.com/sarahchen_dev")
        );
        assert_eq!(
            social.linkedin_url().as_deref(),
            Some("https://linkedin.com/in/sarah-chen-google")
        );
        assert_eq!(SocialLinks::default().twitter_url(), None);
    }

    #[test]
    fn partition_preserves_order() {
        let speakers = vec![
            speaker("A One", true),
            speaker("B Two", false),
            speaker("C Three", true),
        ];
        let (featured, regular) = partition_featured(&speakers);
        assert_eq!(
            featured.iter().map(|s| s.name.as_str()).collect::<Vec<_>>(),
            vec!["A One", "C Three"]
        );
        assert_eq!(
            regular.iter().map(|s| s.name.as_str()).collect::<Vec<_>>(),
            vec!["B Two"]
        );
    }
}
