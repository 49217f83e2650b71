//! Theme and styling constants

/// Spacing constants
pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

/// Brand palette from the conference site, plus indicator colors not
/// covered by egui's visuals.
pub mod colors {
    use egui::Color32;

    pub const COLORADO_BLUE: Color32 = Color32::from_rgb(0x4A, 0x90, 0xA4);
    pub const COLORADO_SKY: Color32 = Color32::from_rgb(0x87, 0xCE, 0xEB);
    pub const DENVER_RED: Color32 = Color32::from_rgb(0xC5, 0x30, 0x30);
    pub const DENVER_GOLD: Color32 = Color32::from_rgb(0xFF, 0xD7, 0x00);
    pub const FOREST_GREEN: Color32 = Color32::from_rgb(0x2F, 0x85, 0x5A);
    pub const BREAK_GRAY: Color32 = Color32::from_rgb(0x9C, 0xA3, 0xAF);

    /// Success/positive indicator color (green)
    pub const SUCCESS: Color32 = Color32::from_rgb(34, 197, 94);
}

/// Applies the persisted light/dark preference to the egui context.
pub fn apply_visuals(ctx: &egui::Context, dark_mode: bool) {
    if dark_mode {
        ctx.set_visuals(egui::Visuals::dark());
    } else {
        ctx.set_visuals(egui::Visuals::light());
    }
}
