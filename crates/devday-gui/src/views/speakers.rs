//! Speakers section
//!
//! Featured speakers first in wide cards, the rest in a tighter grid
//! below. Clicking any card opens the detail window for that speaker.

use egui::{Color32, FontId, RichText, Ui};

use devday_model::{Speaker, partition_featured};

use crate::state::{AppState, Section};
use crate::theme::{colors, spacing};
use crate::views::section_anchor;

/// Speaker directory view
pub struct SpeakersView;

impl SpeakersView {
    /// Render the speaker grid and, when one is selected, the detail window
    pub fn show(ui: &mut Ui, state: &mut AppState) {
        section_anchor(ui, state, Section::Speakers);

        ui.vertical_centered(|ui| {
            ui.heading(RichText::new("Featured Speakers").size(28.0));
            ui.add_space(spacing::XS);
            ui.label(RichText::new("Learn from industry leaders and local experts").weak());
        });

        ui.add_space(spacing::MD);

        let mut clicked: Option<u32> = None;
        let (featured, regular) = partition_featured(&state.speakers);

        for chunk in featured.chunks(2) {
            ui.columns(2, |columns| {
                for (i, speaker) in chunk.iter().enumerate() {
                    featured_card(&mut columns[i], speaker, &mut clicked);
                }
            });
            ui.add_space(spacing::SM);
        }

        if !regular.is_empty() {
            ui.add_space(spacing::SM);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("More Speakers").strong().size(18.0));
            });
            ui.add_space(spacing::SM);

            for chunk in regular.chunks(3) {
                ui.columns(3, |columns| {
                    for (i, speaker) in chunk.iter().enumerate() {
                        regular_card(&mut columns[i], speaker, &mut clicked);
                    }
                });
                ui.add_space(spacing::SM);
            }
        }

        if let Some(id) = clicked {
            state.selected_speaker = Some(id);
        }

        show_detail(ui, state);
    }
}

fn featured_card(ui: &mut Ui, speaker: &Speaker, clicked: &mut Option<u32>) {
    let response = egui::Frame::new()
        .fill(ui.visuals().faint_bg_color)
        .inner_margin(spacing::MD as f32)
        .corner_radius(8.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                avatar(ui, speaker, 32.0);
                ui.add_space(spacing::SM);
                ui.label(RichText::new(&speaker.name).strong().size(16.0));
                ui.label(
                    RichText::new(&speaker.title)
                        .color(colors::COLORADO_BLUE)
                        .small(),
                );
                ui.label(RichText::new(&speaker.company).weak().small());
                ui.add_space(spacing::SM);
                ui.label(RichText::new(bio_preview(&speaker.bio)).weak().small());
                ui.add_space(spacing::SM);
                ui.label(RichText::new(&speaker.session).italics().small());
                ui.label(
                    RichText::new(format!(
                        "{} {} · {}",
                        egui_phosphor::regular::CLOCK,
                        speaker.session_time_label(),
                        speaker.location
                    ))
                    .weak()
                    .small(),
                );
                if !speaker.expertise.is_empty() {
                    ui.add_space(spacing::XS);
                    ui.horizontal_wrapped(|ui| {
                        for area in speaker.expertise.iter().take(3) {
                            expertise_tag(ui, area);
                        }
                    });
                }
            });
        })
        .response;

    if response.interact(egui::Sense::click()).clicked() {
        *clicked = Some(speaker.id);
    }
}

fn regular_card(ui: &mut Ui, speaker: &Speaker, clicked: &mut Option<u32>) {
    let response = egui::Frame::new()
        .fill(ui.visuals().faint_bg_color)
        .inner_margin(spacing::MD as f32)
        .corner_radius(8.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                avatar(ui, speaker, 24.0);
                ui.add_space(spacing::SM);
                ui.label(RichText::new(&speaker.name).strong());
                ui.label(RichText::new(&speaker.title).weak().small());
                ui.label(RichText::new(&speaker.company).weak().small());
            });
        })
        .response;

    if response.interact(egui::Sense::click()).clicked() {
        *clicked = Some(speaker.id);
    }
}

/// Opening of the bio, cut at a word boundary for the card preview.
fn bio_preview(bio: &str) -> String {
    const LIMIT: usize = 140;
    if bio.chars().count() <= LIMIT {
        return bio.to_string();
    }
    let mut cut = String::new();
    for word in bio.split_whitespace() {
        if cut.chars().count() + word.chars().count() + 1 > LIMIT {
            break;
        }
        if !cut.is_empty() {
            cut.push(' ');
        }
        cut.push_str(word);
    }
    format!("{}...", cut)
}

/// Initials on a filled circle, standing in for a photo.
fn avatar(ui: &mut Ui, speaker: &Speaker, radius: f32) {
    let (rect, _response) =
        ui.allocate_exact_size(egui::vec2(radius * 2.0, radius * 2.0), egui::Sense::hover());
    let painter = ui.painter();
    painter.circle_filled(rect.center(), radius, colors::COLORADO_BLUE);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        speaker.initials(),
        FontId::proportional(radius * 0.7),
        Color32::WHITE,
    );
}

/// Detail window for the selected speaker, anchored to the screen center.
fn show_detail(ui: &mut Ui, state: &mut AppState) {
    let Some(id) = state.selected_speaker else {
        return;
    };
    let Some(speaker) = state.speaker_by_id(id) else {
        state.selected_speaker = None;
        return;
    };

    let mut close = false;
    egui::Window::new(speaker.name.as_str())
        .id(egui::Id::new("speaker_detail"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ui.ctx(), |ui| {
            ui.set_min_width(360.0);
            ui.set_max_width(440.0);

            ui.horizontal(|ui| {
                avatar(ui, speaker, 28.0);
                ui.add_space(spacing::SM);
                ui.vertical(|ui| {
                    ui.label(RichText::new(&speaker.title).strong());
                    ui.label(RichText::new(&speaker.company).color(colors::COLORADO_BLUE));
                });
            });

            ui.add_space(spacing::SM);
            ui.separator();
            ui.add_space(spacing::SM);

            ui.label(RichText::new("About").strong());
            ui.add_space(spacing::XS);
            ui.label(&speaker.bio);

            ui.add_space(spacing::SM);
            egui::Frame::new()
                .fill(ui.visuals().faint_bg_color)
                .inner_margin(spacing::SM as f32)
                .corner_radius(4.0)
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(RichText::new(&speaker.session).strong());
                    ui.label(
                        RichText::new(format!(
                            "{} {} · {} {}",
                            egui_phosphor::regular::CLOCK,
                            speaker.session_time_label(),
                            egui_phosphor::regular::MAP_PIN,
                            speaker.location
                        ))
                        .weak()
                        .small(),
                    );
                });

            if !speaker.expertise.is_empty() {
                ui.add_space(spacing::SM);
                ui.label(RichText::new("Expertise").strong());
                ui.add_space(spacing::XS);
                ui.horizontal_wrapped(|ui| {
                    for area in &speaker.expertise {
                        expertise_tag(ui, area);
                    }
                });
            }

            let twitter = speaker.social.twitter_url();
            let linkedin = speaker.social.linkedin_url();
            if twitter.is_some() || linkedin.is_some() {
                ui.add_space(spacing::SM);
                ui.horizontal(|ui| {
                    if let Some(url) = twitter {
                        ui.hyperlink_to(
                            format!("{} Twitter", egui_phosphor::regular::TWITTER_LOGO),
                            url,
                        );
                    }
                    if let Some(url) = linkedin {
                        ui.hyperlink_to(
                            format!("{} LinkedIn", egui_phosphor::regular::LINKEDIN_LOGO),
                            url,
                        );
                    }
                });
            }

            ui.add_space(spacing::MD);
            ui.vertical_centered(|ui| {
                if ui.button("Close").clicked() {
                    close = true;
                }
            });
        });

    if close {
        state.selected_speaker = None;
    }
}

fn expertise_tag(ui: &mut Ui, area: &str) {
    egui::Frame::new()
        .stroke(egui::Stroke::new(1.0, colors::COLORADO_BLUE))
        .inner_margin(egui::Margin::symmetric(6, 2))
        .corner_radius(4.0)
        .show(ui, |ui| {
            ui.label(RichText::new(area).small().color(colors::COLORADO_BLUE));
        });
}
