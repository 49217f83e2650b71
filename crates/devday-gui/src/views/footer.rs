//! Footer section
//!
//! Brand and social links, the contact block, and the sponsor list with
//! tier badges. Read-only; the footer never mutates state.

use egui::{Color32, RichText, Ui};

use devday_model::SponsorTier;

use crate::state::{AppState, SocialPlatformDisplay};
use crate::theme::{colors, spacing};

/// Footer view
pub struct FooterView;

impl FooterView {
    /// Render the footer columns and the copyright line
    pub fn show(ui: &mut Ui, state: &AppState) {
        ui.columns(3, |columns| {
            show_brand(&mut columns[0], state);
            show_contact(&mut columns[1], state);
            show_sponsors(&mut columns[2], state);
        });

        ui.add_space(spacing::LG);
        ui.vertical_centered(|ui| {
            ui.label(
                RichText::new(format!(
                    "© {} {}. All rights reserved.",
                    state.event.year, state.event.name
                ))
                .weak()
                .small(),
            );
        });
        ui.add_space(spacing::MD);
    }
}

fn show_brand(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(egui_phosphor::regular::MOUNTAINS)
                .size(20.0)
                .color(colors::COLORADO_BLUE),
        );
        ui.label(RichText::new(&state.event.name).strong().size(16.0));
    });
    ui.add_space(spacing::XS);
    ui.label(RichText::new(&state.event.tagline).weak().small());
    ui.add_space(spacing::SM);
    ui.horizontal(|ui| {
        for link in &state.social {
            ui.hyperlink_to(RichText::new(link.platform.icon()).size(18.0), &link.url)
                .on_hover_text(link.platform.label());
        }
    });
}

fn show_contact(ui: &mut Ui, state: &AppState) {
    ui.label(RichText::new("Contact").strong().size(16.0));
    ui.add_space(spacing::SM);
    contact_row(ui, egui_phosphor::regular::ENVELOPE, &state.contact.email);
    contact_row(ui, egui_phosphor::regular::PHONE, &state.contact.phone);
    contact_row(ui, egui_phosphor::regular::MAP_PIN, &state.contact.venue);
    ui.label(RichText::new(&state.contact.street).weak().small());
    ui.label(RichText::new(&state.contact.city).weak().small());
}

fn show_sponsors(ui: &mut Ui, state: &AppState) {
    ui.label(RichText::new("Sponsors").strong().size(16.0));
    ui.add_space(spacing::SM);
    for sponsor in &state.sponsors {
        ui.horizontal(|ui| {
            ui.label(RichText::new(&sponsor.name).small());
            tier_badge(ui, sponsor.tier);
        });
    }
}

fn tier_badge(ui: &mut Ui, tier: SponsorTier) {
    let color = match tier {
        SponsorTier::Platinum => colors::COLORADO_SKY,
        SponsorTier::Gold => colors::DENVER_GOLD,
        SponsorTier::Silver => colors::BREAK_GRAY,
        SponsorTier::Bronze => Color32::from_rgb(205, 127, 50),
    };
    egui::Frame::new()
        .stroke(egui::Stroke::new(1.0, color))
        .inner_margin(egui::Margin::symmetric(6, 2))
        .corner_radius(4.0)
        .show(ui, |ui| {
            ui.label(RichText::new(tier.label()).small().color(color));
        });
}

fn contact_row(ui: &mut Ui, icon: &str, text: &str) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(icon).color(colors::COLORADO_BLUE));
        ui.label(RichText::new(text).small());
    });
}
