use chrono::{NaiveDate, NaiveTime};
use std::fmt;

/// Top-level facts about the event, shown in the hero banner and the
/// registration side panel.
#[derive(Debug, Clone)]
pub struct EventInfo {
    pub name: String,
    pub year: u16,
    pub tagline: String,
    pub description: String,
    pub date: NaiveDate,
    pub doors_open: NaiveTime,
    pub doors_close: NaiveTime,
    pub venue: String,
    pub expected_attendance: String,
}

impl EventInfo {
    /// Event date formatted for display, e.g. "June 27, 2025".
    pub fn date_label(&self) -> String {
        self.date.format("%B %-d, %Y").to_string()
    }

    /// Opening hours formatted for display, e.g. "8:00 AM - 6:00 PM".
    pub fn hours_label(&self) -> String {
        format!(
            "{} - {}",
            self.doors_open.format("%-I:%M %p"),
            self.doors_close.format("%-I:%M %p")
        )
    }
}

/// Sponsorship level, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SponsorTier {
    Platinum,
    Gold,
    Silver,
    Bronze,
}

impl SponsorTier {
    pub fn label(&self) -> &'static str {
        match self {
            SponsorTier::Platinum => "Platinum",
            SponsorTier::Gold => "Gold",
            SponsorTier::Silver => "Silver",
            SponsorTier::Bronze => "Bronze",
        }
    }
}

impl fmt::Display for SponsorTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone)]
pub struct Sponsor {
    pub name: String,
    pub tier: SponsorTier,
}

/// Contact block rendered in the footer.
#[derive(Debug, Clone)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub venue: String,
    pub street: String,
    pub city: String,
}

/// Platforms the event maintains a presence on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialPlatform {
    Twitter,
    LinkedIn,
    GitHub,
    Instagram,
}

impl SocialPlatform {
    pub fn label(&self) -> &'static str {
        match self {
            SocialPlatform::Twitter => "Twitter",
            SocialPlatform::LinkedIn => "LinkedIn",
            SocialPlatform::GitHub => "GitHub",
            SocialPlatform::Instagram => "Instagram",
        }
    }
}

/// One footer social link.
#[derive(Debug, Clone)]
pub struct SocialLink {
    pub platform: SocialPlatform,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_format_without_padding() {
        let info = EventInfo {
            name: "Denver Dev Day".to_string(),
            year: 2025,
            tagline: String::new(),
            description: String::new(),
            date: NaiveDate::from_ymd_opt(2025, 6, 27).expect("valid date"),
            doors_open: NaiveTime::from_hms_opt(8, 0, 0).expect("valid time"),
            doors_close: NaiveTime::from_hms_opt(18, 0, 0).expect("valid time"),
            venue: String::new(),
            expected_attendance: String::new(),
        };
        assert_eq!(info.date_label(), "June 27, 2025");
        assert_eq!(info.hours_label(), "8:00 AM - 6:00 PM");
    }

    #[test]
    fn tiers_order_highest_first() {
        assert!(SponsorTier::Platinum < SponsorTier::Gold);
        assert!(SponsorTier::Silver < SponsorTier::Bronze);
    }
}
