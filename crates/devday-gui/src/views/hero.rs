//! Hero section
//!
//! Conference title, tagline, headline event facts, and the calls to
//! action that jump to registration and the agenda.

use egui::{RichText, Ui};

use crate::state::{AppState, Section};
use crate::theme::{colors, spacing};
use crate::views::section_anchor;

/// Hero banner view
pub struct HeroView;

impl HeroView {
    /// Render the hero banner
    pub fn show(ui: &mut Ui, state: &mut AppState) {
        section_anchor(ui, state, Section::Home);

        let mut go_to: Option<Section> = None;

        ui.vertical_centered(|ui| {
            ui.add_space(spacing::XL);

            ui.heading(
                RichText::new("Denver Dev Day")
                    .size(40.0)
                    .strong()
                    .color(colors::COLORADO_BLUE),
            );
            ui.heading(
                RichText::new("2025")
                    .size(32.0)
                    .strong()
                    .color(colors::DENVER_GOLD),
            );
            ui.add_space(spacing::SM);
            ui.label(RichText::new(&state.event.tagline).size(18.0).strong());
            ui.add_space(spacing::SM);
            ui.label(RichText::new(&state.event.description).weak());

            ui.add_space(spacing::LG);

            ui.columns(3, |columns| {
                detail_card(
                    &mut columns[0],
                    egui_phosphor::regular::CALENDAR,
                    &state.event.date_label(),
                    "Mark your calendar",
                );
                detail_card(
                    &mut columns[1],
                    egui_phosphor::regular::CLOCK,
                    &state.event.hours_label(),
                    &state.event.expected_attendance,
                );
                detail_card(
                    &mut columns[2],
                    egui_phosphor::regular::MAP_PIN,
                    &state.event.venue,
                    "Heart of downtown Denver",
                );
            });

            ui.add_space(spacing::LG);

            if ui
                .button(
                    RichText::new(format!(
                        "{} Register Now",
                        egui_phosphor::regular::TICKET
                    ))
                    .size(16.0),
                )
                .clicked()
            {
                go_to = Some(Section::Register);
            }
            ui.add_space(spacing::XS);
            if ui
                .button(format!(
                    "{} View Agenda",
                    egui_phosphor::regular::CALENDAR_CHECK
                ))
                .clicked()
            {
                go_to = Some(Section::Agenda);
            }
        });

        if let Some(section) = go_to {
            state.scroll_to(section);
        }
    }
}

/// One headline fact, framed as a card.
fn detail_card(ui: &mut Ui, icon: &str, main: &str, sub: &str) {
    egui::Frame::new()
        .fill(ui.visuals().faint_bg_color)
        .inner_margin(spacing::MD as f32)
        .corner_radius(8.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(icon)
                        .size(22.0)
                        .color(colors::COLORADO_BLUE),
                );
                ui.add_space(spacing::XS);
                ui.label(RichText::new(main).strong());
                ui.label(RichText::new(sub).weak().small());
            });
        });
}
