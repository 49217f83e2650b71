//! Registration section
//!
//! Two-column layout: the form on the left, event information and the
//! included-benefits list on the right. While a submission is in flight
//! the submit button is disabled; once it succeeds the success view
//! replaces the form until the visitor resets it.

use egui::{Color32, RichText, Ui};

use devday_core::SimulatedGateway;
use devday_model::Role;
use devday_validate::{FieldId, ValidationReport};

use crate::state::{AppState, Section};
use crate::theme::{colors, spacing};
use crate::views::section_anchor;

/// Registration section view
pub struct RegistrationView;

impl RegistrationView {
    /// Render the form, the side panel, and any in-flight feedback
    pub fn show(ui: &mut Ui, state: &mut AppState, gateway: &mut SimulatedGateway) {
        section_anchor(ui, state, Section::Register);

        ui.vertical_centered(|ui| {
            ui.heading(RichText::new("Register for Denver Dev Day").size(28.0));
            ui.add_space(spacing::XS);
            ui.label(
                RichText::new("Secure your spot at Colorado's premier developer conference")
                    .weak(),
            );
        });

        ui.add_space(spacing::MD);

        let mut submit = false;
        let mut reset = false;

        egui_extras::StripBuilder::new(ui)
            .size(egui_extras::Size::relative(0.55).at_least(320.0)) // Form
            .size(egui_extras::Size::exact(1.0)) // Separator
            .size(egui_extras::Size::remainder()) // Event info
            .horizontal(|mut strip| {
                strip.cell(|ui| {
                    if state.registration.succeeded() {
                        reset = show_success(ui);
                    } else {
                        submit = show_form(ui, state);
                    }
                });

                strip.cell(|ui| {
                    ui.separator();
                });

                strip.cell(|ui| {
                    show_event_panel(ui, state);
                });
            });

        if submit {
            state.registration.submit(gateway);
        }
        if reset {
            state.registration.reset();
        }
    }
}

/// The form fields with their inline issues. Returns true when the
/// submit button was clicked.
fn show_form(ui: &mut Ui, state: &mut AppState) -> bool {
    let mut submit = false;
    let registration = &mut state.registration;

    if let Some(message) = registration.failure_message() {
        failure_banner(ui, message);
        ui.add_space(spacing::SM);
    }

    field_label(ui, FieldId::FullName);
    ui.add(
        egui::TextEdit::singleline(&mut registration.input.full_name)
            .desired_width(f32::INFINITY)
            .hint_text("Enter your full name"),
    );
    field_error(ui, &registration.report, FieldId::FullName);
    ui.add_space(spacing::SM);

    field_label(ui, FieldId::Email);
    ui.add(
        egui::TextEdit::singleline(&mut registration.input.email)
            .desired_width(f32::INFINITY)
            .hint_text("your.email@company.com"),
    );
    field_error(ui, &registration.report, FieldId::Email);
    ui.add_space(spacing::SM);

    field_label(ui, FieldId::Role);
    let selected = registration
        .input
        .role
        .map(|role| role.label())
        .unwrap_or("Select your role");
    egui::ComboBox::from_id_salt("registration_role")
        .width(ui.available_width())
        .selected_text(selected)
        .show_ui(ui, |ui| {
            for role in Role::all() {
                ui.selectable_value(&mut registration.input.role, Some(role), role.label());
            }
        });
    field_error(ui, &registration.report, FieldId::Role);
    ui.add_space(spacing::SM);

    field_label(ui, FieldId::Company);
    ui.add(
        egui::TextEdit::singleline(&mut registration.input.company)
            .desired_width(f32::INFINITY)
            .hint_text("Your company name"),
    );
    field_error(ui, &registration.report, FieldId::Company);
    ui.add_space(spacing::SM);

    ui.label(RichText::new("Dietary Restrictions").strong().small());
    ui.add(
        egui::TextEdit::multiline(&mut registration.input.dietary)
            .desired_width(f32::INFINITY)
            .desired_rows(2)
            .hint_text("Let us know about any dietary needs"),
    );
    ui.add_space(spacing::SM);

    ui.checkbox(
        &mut registration.input.newsletter,
        "Keep me posted about future Denver Dev Day events",
    );

    ui.add_space(spacing::MD);
    let submitting = registration.is_submitting();
    ui.horizontal(|ui| {
        let button = egui::Button::new(
            RichText::new(format!(
                "{} Complete Registration",
                egui_phosphor::regular::TICKET
            ))
            .color(Color32::WHITE),
        )
        .fill(colors::COLORADO_BLUE);
        if ui.add_enabled(!submitting, button).clicked() {
            submit = true;
        }
        if submitting {
            ui.spinner();
            ui.label(RichText::new("Submitting your registration...").weak());
        }
    });

    submit
}

/// Confirmation shown in place of the form. Returns true when the
/// visitor asks to register another attendee.
fn show_success(ui: &mut Ui) -> bool {
    let mut reset = false;
    ui.vertical_centered(|ui| {
        ui.add_space(spacing::LG);
        ui.label(
            RichText::new(egui_phosphor::regular::CHECK_CIRCLE)
                .size(48.0)
                .color(colors::SUCCESS),
        );
        ui.add_space(spacing::SM);
        ui.heading("Registration Successful!");
        ui.add_space(spacing::XS);
        ui.label(
            RichText::new(
                "Thank you for registering for Denver Dev Day 2025. \
                 A confirmation email with your ticket is on its way.",
            )
            .weak(),
        );
        ui.add_space(spacing::MD);
        if ui.button("Register Another Attendee").clicked() {
            reset = true;
        }
        ui.add_space(spacing::LG);
    });
    reset
}

fn show_event_panel(ui: &mut Ui, state: &AppState) {
    ui.label(RichText::new("Event Information").strong().size(16.0));
    ui.add_space(spacing::SM);
    info_row(ui, egui_phosphor::regular::CALENDAR, &state.event.date_label());
    info_row(ui, egui_phosphor::regular::CLOCK, &state.event.hours_label());
    info_row(ui, egui_phosphor::regular::MAP_PIN, &state.event.venue);
    info_row(ui, egui_phosphor::regular::USERS, &state.event.expected_attendance);

    ui.add_space(spacing::MD);
    ui.label(RichText::new("What's Included").strong().size(16.0));
    ui.add_space(spacing::SM);
    for benefit in state.benefits {
        ui.horizontal(|ui| {
            ui.label(RichText::new(egui_phosphor::regular::CHECK).color(colors::FOREST_GREEN));
            ui.label(benefit);
        });
    }
}

fn info_row(ui: &mut Ui, icon: &str, text: &str) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(icon).color(colors::COLORADO_BLUE));
        ui.label(text);
    });
    ui.add_space(spacing::XS);
}

fn field_label(ui: &mut Ui, field: FieldId) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(field.label()).strong().small());
        if field.is_required() {
            ui.label(
                RichText::new("*")
                    .color(ui.visuals().error_fg_color)
                    .small(),
            );
        }
    });
}

/// Inline message under a field, present only when the last validation
/// pass flagged it.
fn field_error(ui: &mut Ui, report: &ValidationReport, field: FieldId) {
    if let Some(issue) = report.issue_for(field) {
        ui.label(
            RichText::new(format!(
                "{} {}",
                egui_phosphor::regular::WARNING,
                issue.message
            ))
            .color(ui.visuals().error_fg_color)
            .small(),
        );
    }
}

fn failure_banner(ui: &mut Ui, message: &str) {
    egui::Frame::new()
        .stroke(egui::Stroke::new(1.0, colors::DENVER_RED))
        .inner_margin(egui::Margin::symmetric(spacing::SM as i8, spacing::XS as i8))
        .corner_radius(4.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(egui_phosphor::regular::X_CIRCLE)
                        .color(ui.visuals().error_fg_color),
                );
                ui.label(RichText::new(message).color(ui.visuals().error_fg_color));
            });
        });
}
