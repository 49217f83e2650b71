//! Event facts, sponsors, and contact details.

use chrono::{NaiveDate, NaiveTime};

use devday_model::{
    ContactInfo, EventInfo, SocialLink, SocialPlatform, Sponsor, SponsorTier,
};

/// Headline facts shown in the hero banner and the registration side
/// panel.
pub fn event_info() -> EventInfo {
    EventInfo {
        name: "Denver Dev Day".to_string(),
        year: 2025,
        tagline: "Colorado's Premier Developer Conference".to_string(),
        description: "Join us in the heart of the Rocky Mountains for a day of cutting-edge \
                      tech talks, networking, and innovation. Connect with industry leaders \
                      and fellow developers in Denver's thriving tech community."
            .to_string(),
        date: NaiveDate::from_ymd_opt(2025, 6, 27).expect("valid date literal"),
        doors_open: NaiveTime::from_hms_opt(8, 0, 0).expect("valid time literal"),
        doors_close: NaiveTime::from_hms_opt(18, 0, 0).expect("valid time literal"),
        venue: "Denver Convention Center".to_string(),
        expected_attendance: "500+ developers".to_string(),
    }
}

/// Everything a ticket covers, listed beside the registration form.
pub fn included_benefits() -> [&'static str; 7] {
    [
        "Full day conference access",
        "Breakfast and lunch",
        "Coffee breaks and networking",
        "Swag bag with local treats",
        "Access to speaker presentations",
        "Networking reception",
        "Certificate of attendance",
    ]
}

/// Sponsors in tier order, highest first.
pub fn sponsors() -> Vec<Sponsor> {
    vec![
        Sponsor {
            name: "Kahua".to_string(),
            tier: SponsorTier::Platinum,
        },
        Sponsor {
            name: "Uno Platform".to_string(),
            tier: SponsorTier::Gold,
        },
        Sponsor {
            name: "TEKsystems".to_string(),
            tier: SponsorTier::Silver,
        },
        Sponsor {
            name: "40AU (FortyAU)".to_string(),
            tier: SponsorTier::Bronze,
        },
    ]
}

/// Footer contact block.
pub fn contact() -> ContactInfo {
    ContactInfo {
        email: "info@denverdevday.com".to_string(),
        phone: "(303) 555-0199".to_string(),
        venue: "Denver Convention Center".to_string(),
        street: "700 14th Street".to_string(),
        city: "Denver, CO 80202".to_string(),
    }
}

/// Footer social links.
pub fn social_links() -> Vec<SocialLink> {
    vec![
        SocialLink {
            platform: SocialPlatform::Twitter,
            url: "https://twitter.com/denverdevday".to_string(),
        },
        SocialLink {
            platform: SocialPlatform::LinkedIn,
            url: "https://linkedin.com/company/denver-dev-day".to_string(),
        },
        SocialLink {
            platform: SocialPlatform::GitHub,
            url: "https://github.com/denver-dev-day".to_string(),
        },
        SocialLink {
            platform: SocialPlatform::Instagram,
            url: "https://instagram.com/denverdevday".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_labels_render_the_published_schedule() {
        let info = event_info();
        assert_eq!(info.date_label(), "June 27, 2025");
        assert_eq!(info.hours_label(), "8:00 AM - 6:00 PM");
        assert_eq!(info.venue, "Denver Convention Center");
    }

    #[test]
    fn ticket_covers_seven_benefits() {
        assert_eq!(included_benefits().len(), 7);
    }

    #[test]
    fn sponsors_descend_through_the_tiers() {
        let sponsors = sponsors();
        assert_eq!(sponsors.len(), 4);
        assert!(
            sponsors.windows(2).all(|pair| pair[0].tier < pair[1].tier),
            "sponsor list must run highest tier first"
        );
    }

    #[test]
    fn four_social_platforms_are_linked() {
        let links = social_links();
        assert_eq!(links.len(), 4);
        assert!(links.iter().all(|link| link.url.starts_with("https://")));
    }
}
