//! GUI display helpers for model types.

use egui::Color32;

use devday_model::{SessionKind, SocialPlatform};

use crate::theme::colors;

/// GUI-specific display helpers for SessionKind
pub trait SessionKindDisplay {
    /// Returns the egui_phosphor icon for this session kind
    fn icon(&self) -> &'static str;

    /// Returns the badge fill color for this session kind
    fn badge_color(&self) -> Color32;
}

impl SessionKindDisplay for SessionKind {
    fn icon(&self) -> &'static str {
        match self {
            Self::Keynote | Self::Panel => egui_phosphor::regular::USERS,
            Self::Technical | Self::Break => egui_phosphor::regular::CLOCK,
        }
    }

    fn badge_color(&self) -> Color32 {
        match self {
            Self::Keynote => colors::DENVER_RED,
            Self::Technical => colors::COLORADO_BLUE,
            Self::Panel => colors::FOREST_GREEN,
            Self::Break => colors::BREAK_GRAY,
        }
    }
}

/// GUI-specific display helpers for SocialPlatform
pub trait SocialPlatformDisplay {
    /// Returns the egui_phosphor logo icon for this platform
    fn icon(&self) -> &'static str;
}

impl SocialPlatformDisplay for SocialPlatform {
    fn icon(&self) -> &'static str {
        match self {
            Self::Twitter => egui_phosphor::regular::TWITTER_LOGO,
            Self::LinkedIn => egui_phosphor::regular::LINKEDIN_LOGO,
            Self::GitHub => egui_phosphor::regular::GITHUB_LOGO,
            Self::Instagram => egui_phosphor::regular::INSTAGRAM_LOGO,
        }
    }
}
