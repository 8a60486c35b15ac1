// LaunchPal - ui/background.rs
//
// Decorative animated wave background, painted on egui's background layer
// behind all panels. Shares no state with the chat session.

use crate::ui::theme;
use egui::{Color32, Mesh, Pos2, Rect, Shape};
use std::f64::consts::TAU;

/// One translucent sine wave.
#[derive(Debug, Clone, Copy)]
pub struct Wave {
    pub amplitude: f32,
    pub wavelength: f32,
    /// Multiplier applied to the shared phase.
    pub speed: f32,
    pub colour: Color32,
}

/// The three layered waves, back to front.
///
/// Colours are premultiplied: rgba(180,210,255,70), rgba(135,190,230,90),
/// rgba(200,230,255,60).
pub const WAVES: [Wave; 3] = [
    Wave {
        amplitude: 20.0,
        wavelength: 220.0,
        speed: 0.03,
        colour: Color32::from_rgba_premultiplied(49, 58, 70, 70),
    },
    Wave {
        amplitude: 25.0,
        wavelength: 150.0,
        speed: 0.016,
        colour: Color32::from_rgba_premultiplied(48, 67, 81, 90),
    },
    Wave {
        amplitude: 30.0,
        wavelength: 300.0,
        speed: 0.01,
        colour: Color32::from_rgba_premultiplied(47, 54, 60, 60),
    },
];

/// Horizontal sampling step in points.
const SAMPLE_STEP: f32 = 4.0;

/// Shared phase for `time_secs` of wall-clock time, wrapped to [0, 2π).
pub fn phase_at(time_secs: f64) -> f32 {
    ((time_secs * crate::util::constants::WAVE_PHASE_PER_SEC) % TAU) as f32
}

/// Height of `wave` at horizontal offset `x` (relative to the left edge).
pub fn wave_y(wave: &Wave, x: f32, phase: f32, baseline: f32) -> f32 {
    let angle = (std::f32::consts::TAU / wave.wavelength) * x + phase * wave.speed;
    baseline + wave.amplitude * angle.sin()
}

/// Filled mesh between the wave curve and the bottom of `rect`.
fn wave_mesh(wave: &Wave, rect: Rect, phase: f32) -> Mesh {
    let mut mesh = Mesh::default();
    let baseline = rect.center().y;
    let width = rect.width().max(0.0);

    let mut x = 0.0;
    loop {
        let top = Pos2::new(rect.left() + x, wave_y(wave, x, phase, baseline));
        let bottom = Pos2::new(rect.left() + x, rect.bottom());
        let idx = mesh.vertices.len() as u32;
        mesh.colored_vertex(top, wave.colour);
        mesh.colored_vertex(bottom, wave.colour);
        if idx >= 2 {
            mesh.add_triangle(idx - 2, idx - 1, idx);
            mesh.add_triangle(idx - 1, idx + 1, idx);
        }
        if x >= width {
            break;
        }
        x = (x + SAMPLE_STEP).min(width);
    }
    mesh
}

/// Paint the background for this frame.
///
/// When `animate` is true a repaint is scheduled for the next animation tick.
pub fn paint(ctx: &egui::Context, dark_mode: bool, animate: bool) {
    let rect = ctx.screen_rect();
    let painter = ctx.layer_painter(egui::LayerId::background());
    painter.rect_filled(
        rect,
        0.0,
        theme::pick(dark_mode, theme::BACKGROUND_LIGHT, theme::BACKGROUND_DARK),
    );

    let phase = if animate {
        phase_at(ctx.input(|i| i.time))
    } else {
        0.0
    };

    for wave in &WAVES {
        painter.add(Shape::mesh(wave_mesh(wave, rect, phase)));
    }

    if animate {
        ctx.request_repaint_after(std::time::Duration::from_millis(
            crate::util::constants::ANIMATION_FRAME_MS,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_wraps() {
        assert!((phase_at(1.0) - 1.0).abs() < 1e-6);
        let wrapped = phase_at(TAU + 0.5);
        assert!((wrapped - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_wave_stays_within_amplitude() {
        for wave in &WAVES {
            for x in [0.0, 17.0, 111.0, 640.0] {
                let y = wave_y(wave, x, 2.0, 300.0);
                assert!((y - 300.0).abs() <= wave.amplitude + 1e-3);
            }
        }
    }

    #[test]
    fn test_wave_period_matches_wavelength() {
        let w = WAVES[0];
        let a = wave_y(&w, 10.0, 0.0, 0.0);
        let b = wave_y(&w, 10.0 + w.wavelength, 0.0, 0.0);
        assert!((a - b).abs() < 1e-3);
    }

    #[test]
    fn test_mesh_covers_full_width() {
        let rect = Rect::from_min_size(Pos2::ZERO, egui::vec2(10.0, 100.0));
        let mesh = wave_mesh(&WAVES[1], rect, 0.0);
        // x = 0, 4, 8, 10 -> 4 columns of two vertices, three quads.
        assert_eq!(mesh.vertices.len(), 8);
        assert_eq!(mesh.indices.len(), 3 * 6);
        assert_eq!(mesh.vertices.last().unwrap().pos.x, 10.0);
    }
}
