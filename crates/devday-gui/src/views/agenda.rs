//! Agenda section
//!
//! Chronological session list with a track filter bar. Track-less
//! entries (registration, breaks, the reception) stay visible under
//! every filter selection.

use egui::{Color32, RichText, Ui};

use devday_model::{Session, SessionKind, Track, TrackFilter};

use crate::state::{AppState, Section, SessionKindDisplay};
use crate::theme::{colors, spacing};
use crate::views::section_anchor;

/// Agenda section view
pub struct AgendaView;

impl AgendaView {
    /// Render the agenda listing
    pub fn show(ui: &mut Ui, state: &mut AppState) {
        section_anchor(ui, state, Section::Agenda);

        ui.vertical_centered(|ui| {
            ui.heading(RichText::new("Conference Agenda").size(28.0));
            ui.add_space(spacing::XS);
            ui.label(
                RichText::new("A full day of learning, networking, and inspiration").weak(),
            );
        });

        ui.add_space(spacing::MD);

        // Filter bar; the change is applied after rendering.
        let mut selected: Option<TrackFilter> = None;
        ui.horizontal_wrapped(|ui| {
            ui.label(
                RichText::new(egui_phosphor::regular::FUNNEL)
                    .color(ui.visuals().weak_text_color()),
            );
            if ui
                .selectable_label(
                    state.selected_track == TrackFilter::All,
                    TrackFilter::All.label(),
                )
                .clicked()
            {
                selected = Some(TrackFilter::All);
            }
            for track in &state.tracks {
                let filter = TrackFilter::Track(*track);
                if ui
                    .selectable_label(state.selected_track == filter, filter.label())
                    .clicked()
                {
                    selected = Some(filter);
                }
            }
        });
        if let Some(filter) = selected {
            state.selected_track = filter;
        }

        ui.add_space(spacing::SM);

        let visible: Vec<&Session> = state
            .sessions
            .iter()
            .filter(|session| state.selected_track.matches(session))
            .collect();

        if state.selected_track != TrackFilter::All {
            ui.label(
                RichText::new(format!(
                    "{} of {} sessions",
                    visible.len(),
                    state.sessions.len()
                ))
                .weak()
                .small(),
            );
            ui.add_space(spacing::XS);
        }

        for session in visible {
            session_row(ui, session);
            ui.add_space(spacing::SM);
        }
    }
}

/// One agenda entry card. Featured slots carry a gold edge.
fn session_row(ui: &mut Ui, session: &Session) {
    let mut frame = egui::Frame::new()
        .fill(ui.visuals().faint_bg_color)
        .inner_margin(spacing::MD as f32)
        .corner_radius(8.0);
    if session.featured {
        frame = frame.stroke(egui::Stroke::new(1.0, colors::DENVER_GOLD));
    }

    frame.show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.add_sized(
                egui::vec2(76.0, 18.0),
                egui::Label::new(RichText::new(session.start_label()).strong().monospace()),
            );

            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    kind_badge(ui, session.kind);
                    if let Some(track) = session.track {
                        track_tag(ui, track);
                    }
                    if session.featured {
                        ui.label(
                            RichText::new(egui_phosphor::regular::STAR)
                                .color(colors::DENVER_GOLD),
                        );
                    }
                });
                ui.add_space(spacing::XS);

                ui.label(RichText::new(&session.title).strong().size(16.0));
                if let (Some(speaker), Some(title)) = (&session.speaker, &session.speaker_title)
                {
                    ui.label(
                        RichText::new(format!("{} · {}", speaker, title))
                            .color(colors::COLORADO_BLUE),
                    );
                }
                ui.label(RichText::new(&session.description).weak().small());

                ui.add_space(spacing::XS);
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(format!(
                            "{} {}",
                            egui_phosphor::regular::CLOCK,
                            session.duration
                        ))
                        .weak()
                        .small(),
                    );
                    ui.label(
                        RichText::new(format!(
                            "{} {}",
                            egui_phosphor::regular::MAP_PIN,
                            session.location
                        ))
                        .weak()
                        .small(),
                    );
                });
            });
        });
    });
}

fn kind_badge(ui: &mut Ui, kind: SessionKind) {
    egui::Frame::new()
        .fill(kind.badge_color())
        .inner_margin(egui::Margin::symmetric(6, 2))
        .corner_radius(4.0)
        .show(ui, |ui| {
            ui.label(
                RichText::new(format!("{} {}", kind.icon(), kind.label()))
                    .small()
                    .color(Color32::WHITE),
            );
        });
}

fn track_tag(ui: &mut Ui, track: Track) {
    egui::Frame::new()
        .stroke(egui::Stroke::new(1.0, colors::COLORADO_BLUE))
        .inner_margin(egui::Margin::symmetric(6, 2))
        .corner_radius(4.0)
        .show(ui, |ui| {
            ui.label(
                RichText::new(track.as_str())
                    .small()
                    .color(colors::COLORADO_BLUE),
            );
        });
}
