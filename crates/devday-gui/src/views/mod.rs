//! View components
//!
//! Each view renders one section of the single-page layout.

mod agenda;
mod footer;
mod hero;
mod registration;
mod speakers;

pub use agenda::AgendaView;
pub use footer::FooterView;
pub use hero::HeroView;
pub use registration::RegistrationView;
pub use speakers::SpeakersView;

use crate::state::{AppState, Section};
use egui::Ui;

/// Zero-size marker at the top of a section. Consumes a pending
/// navigation request by scrolling itself into view.
pub(crate) fn section_anchor(ui: &mut Ui, state: &mut AppState, section: Section) {
    let response = ui.allocate_response(egui::Vec2::ZERO, egui::Sense::hover());
    if state.take_scroll(section) {
        response.scroll_to_me(Some(egui::Align::TOP));
    }
}
