use eframe::egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, pos2};

use crate::config::MenuIcon;

/// Diameter of the close control disc.
pub const CLOSE_SIZE: f32 = 32.0;

/// Fill for interactable items without an own color.
pub const ENABLED_FILL: Color32 = Color32::from_rgb(255, 255, 255);
/// Fill for disabled items and the close control.
pub const DISABLED_FILL: Color32 = Color32::from_rgb(216, 216, 216);

/// A shadowed circular element, described in one call and painted as a
/// whole: soft shadow, fill, hairline outline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Disc {
    pub center: Pos2,
    pub radius: f32,
    pub fill: Color32,
    pub opacity: f32,
}

impl Disc {
    pub fn new(center: Pos2, radius: f32, fill: Color32) -> Self {
        Self {
            center,
            radius,
            fill,
            opacity: 1.0,
        }
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }
}

pub fn paint_disc(painter: &Painter, disc: &Disc) {
    painter.circle_filled(
        disc.center,
        disc.radius + 6.0,
        fade(Color32::from_rgba_unmultiplied(0, 0, 0, 41), disc.opacity),
    );
    painter.circle_filled(disc.center, disc.radius, fade(disc.fill, disc.opacity));
    painter.circle_stroke(
        disc.center,
        disc.radius,
        Stroke::new(
            1.0,
            fade(Color32::from_rgba_unmultiplied(15, 15, 15, 70), disc.opacity),
        ),
    );
}

pub fn paint_icon(painter: &Painter, center: Pos2, icon: &MenuIcon, opacity: f32) {
    match icon {
        MenuIcon::Glyph(glyph) => {
            painter.text(
                center,
                Align2::CENTER_CENTER,
                glyph,
                FontId::proportional(20.0),
                fade(Color32::from_gray(45), opacity),
            );
        }
        MenuIcon::Texture { id, size } => {
            let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
            painter.image(
                *id,
                Rect::from_center_size(center, *size),
                uv,
                fade(Color32::WHITE, opacity),
            );
        }
    }
}

pub fn paint_label(painter: &Painter, center: Pos2, text: &str, opacity: f32) {
    painter.text(
        center,
        Align2::CENTER_CENTER,
        text,
        FontId::proportional(12.0),
        fade(Color32::from_gray(25), opacity),
    );
}

/// Fades a color towards fully transparent; `opacity` 1.0 is the color
/// itself, 0.0 is invisible.
pub fn fade(color: Color32, opacity: f32) -> Color32 {
    color.gamma_multiply(opacity.clamp(0.0, 1.0))
}
