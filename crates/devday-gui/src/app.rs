//! Main application struct and eframe::App implementation

use eframe::egui;
use egui::RichText;

use devday_core::SimulatedGateway;

use crate::settings::save_settings;
use crate::state::{AppState, Section};
use crate::theme::{apply_visuals, colors, spacing};
use crate::views::{AgendaView, FooterView, HeroView, RegistrationView, SpeakersView};

/// Main application struct
pub struct DevDayApp {
    state: AppState,
    /// Stand-in for the registration backend; decides how dispatched
    /// submissions resolve.
    gateway: SimulatedGateway,
}

impl DevDayApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Initialize Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Load settings from disk
        let settings = crate::settings::load_settings();
        tracing::info!("Loaded settings: dark_mode={}", settings.general.dark_mode);
        apply_visuals(&cc.egui_ctx, settings.general.dark_mode);

        Self {
            state: AppState::new(settings),
            gateway: SimulatedGateway::new(),
        }
    }
}

impl eframe::App for DevDayApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply the outcome of an in-flight submission, if one resolved.
        self.state.registration.poll();
        if self.state.registration.is_submitting() {
            // Keep frames coming while the worker sleeps out the delay.
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        self.show_navigation(ctx);

        // One vertical page; navigation scrolls to section anchors.
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    HeroView::show(ui, &mut self.state);
                    section_gap(ui);
                    AgendaView::show(ui, &mut self.state);
                    section_gap(ui);
                    SpeakersView::show(ui, &mut self.state);
                    section_gap(ui);
                    RegistrationView::show(ui, &mut self.state, &mut self.gateway);
                    section_gap(ui);
                    FooterView::show(ui, &self.state);
                });
        });
    }
}

impl DevDayApp {
    /// Top navigation bar: brand, section links, register shortcut, and
    /// the theme toggle.
    fn show_navigation(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("navigation").show(ctx, |ui| {
            ui.add_space(spacing::XS);
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(egui_phosphor::regular::MOUNTAINS)
                        .size(20.0)
                        .color(colors::COLORADO_BLUE),
                );
                ui.label(RichText::new("Denver Dev Day").strong().size(16.0));
                ui.label(
                    RichText::new("2025")
                        .size(16.0)
                        .color(colors::DENVER_GOLD),
                );

                ui.add_space(spacing::LG);

                for section in Section::all() {
                    if ui.selectable_label(false, section.label()).clicked() {
                        self.state.scroll_to(*section);
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let dark = self.state.settings.general.dark_mode;
                    let icon = if dark {
                        egui_phosphor::regular::SUN
                    } else {
                        egui_phosphor::regular::MOON
                    };
                    if ui.button(icon).on_hover_text("Toggle dark mode").clicked() {
                        self.state.settings.general.dark_mode = !dark;
                        apply_visuals(ctx, !dark);
                        if let Err(e) = save_settings(&self.state.settings) {
                            tracing::error!("Failed to save settings: {}", e);
                        }
                    }

                    if ui
                        .button(format!(
                            "{} Register Now",
                            egui_phosphor::regular::TICKET
                        ))
                        .clicked()
                    {
                        self.state.scroll_to(Section::Register);
                    }
                });
            });
            ui.add_space(spacing::XS);
        });
    }
}

/// Vertical breathing room between page sections.
fn section_gap(ui: &mut egui::Ui) {
    ui.add_space(spacing::XL);
    ui.separator();
    ui.add_space(spacing::XL);
}
