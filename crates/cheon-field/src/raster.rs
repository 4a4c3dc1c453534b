//! Rasterize the displacement field onto the terminal grid.
//!
//! One character cell covers 10x20 logical units (2:1 aspect correction),
//! so an 80x24 terminal spans an 800x480 logical container. Each character
//! subsamples cell coverage into an alpha level mapped onto a shading
//! ladder; the gradient overlay is composited through that mask.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use cheon_core::{FieldTuning, GridConfig, Rgb, Size, Vec2};

use crate::frame::{CellQuad, compute_frame};
use crate::gradient::AngularGradient;

/// Logical units spanned by one terminal column.
pub const UNITS_PER_COL: f32 = 10.0;
/// Logical units spanned by one terminal row.
pub const UNITS_PER_ROW: f32 = 20.0;

/// Coverage subsamples per character cell, horizontal then vertical.
const SUBSAMPLES_X: u32 = 2;
const SUBSAMPLES_Y: u32 = 4;

/// Flat fill used when the gradient overlay is disabled.
const BASE_FILL: Rgb = Rgb::new(0.56, 0.56, 0.58);

/// Everything the rasterizer needs for one frame.
#[derive(Debug, Clone)]
pub struct Scene<'a> {
    /// Grid shape.
    pub grid: &'a GridConfig,
    /// Field tuning.
    pub tuning: &'a FieldTuning,
    /// Gradient stops for the overlay pass.
    pub stops: &'a [Rgb],
    /// Eased pointer position, if an interaction is live or still relaxing.
    pub pointer: Option<Vec2>,
    /// Blend between rest (0.0) and fully displaced (1.0) geometry.
    pub intensity: f32,
    /// Whether the gradient overlay pass is drawn.
    pub overlay: bool,
}

/// Logical container size for a terminal area.
pub fn container_size(area: Rect) -> Size {
    Size::new(
        area.width as f32 * UNITS_PER_COL,
        area.height as f32 * UNITS_PER_ROW,
    )
}

/// Render the field into `frame` over `area`.
pub fn render(frame: &mut Frame, area: Rect, scene: &Scene) {
    let container = container_size(area);
    let quads = eased_quads(scene, container);
    let gradient = AngularGradient::new(container.center(), scene.stops.to_vec());

    let lines: Vec<Line> = (0..area.height)
        .map(|y| {
            let band_top = y as f32 * UNITS_PER_ROW;
            // Only quads that reach this row band matter for its characters.
            let band: Vec<&CellQuad> = quads
                .iter()
                .filter(|q| {
                    let (min, max) = q.bounds();
                    min.y < band_top + UNITS_PER_ROW && max.y > band_top
                })
                .collect();

            let spans: Vec<Span> = (0..area.width)
                .map(|x| render_char(x, y, &band, &gradient, scene.overlay))
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

/// Quads for the frame, eased between rest and displaced geometry.
fn eased_quads(scene: &Scene, container: Size) -> Vec<CellQuad> {
    let displaced = compute_frame(scene.grid, scene.tuning, container, scene.pointer);
    if scene.pointer.is_none() || scene.intensity >= 1.0 {
        return displaced;
    }

    let rest = compute_frame(scene.grid, scene.tuning, container, None);
    rest.iter()
        .zip(&displaced)
        .map(|(r, d)| r.lerp(d, scene.intensity))
        .collect()
}

/// Render one character cell: coverage subsampling over the quads that
/// reach it, mapped onto the shading ladder, gradient fill clipped to the
/// silhouette.
fn render_char(
    x: u16,
    y: u16,
    band: &[&CellQuad],
    gradient: &AngularGradient,
    overlay: bool,
) -> Span<'static> {
    let left = x as f32 * UNITS_PER_COL;
    let top = y as f32 * UNITS_PER_ROW;

    let candidates: Vec<&CellQuad> = band
        .iter()
        .copied()
        .filter(|q| {
            let (min, max) = q.bounds();
            min.x < left + UNITS_PER_COL && max.x > left
        })
        .collect();
    if candidates.is_empty() {
        return Span::raw(" ");
    }

    let mut hits = 0u32;
    for sy in 0..SUBSAMPLES_Y {
        for sx in 0..SUBSAMPLES_X {
            let p = Vec2::new(
                left + (sx as f32 + 0.5) * UNITS_PER_COL / SUBSAMPLES_X as f32,
                top + (sy as f32 + 0.5) * UNITS_PER_ROW / SUBSAMPLES_Y as f32,
            );
            if candidates.iter().any(|q| q.contains(p)) {
                hits += 1;
            }
        }
    }
    if hits == 0 {
        return Span::raw(" ");
    }

    let coverage = hits as f32 / (SUBSAMPLES_X * SUBSAMPLES_Y) as f32;
    let ch = if coverage >= 0.85 {
        '█'
    } else if coverage >= 0.55 {
        '▓'
    } else if coverage >= 0.3 {
        '▒'
    } else {
        '░'
    };

    let fill = if overlay {
        gradient.sample(Vec2::new(
            left + UNITS_PER_COL / 2.0,
            top + UNITS_PER_ROW / 2.0,
        ))
    } else {
        BASE_FILL
    };

    Span::styled(ch.to_string(), Style::new().fg(fill.to_color()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene<'a>(
        grid: &'a GridConfig,
        tuning: &'a FieldTuning,
        stops: &'a [Rgb],
        pointer: Option<Vec2>,
        intensity: f32,
    ) -> Scene<'a> {
        Scene {
            grid,
            tuning,
            stops,
            pointer,
            intensity,
            overlay: true,
        }
    }

    #[test]
    fn test_container_size_applies_aspect_correction() {
        let size = container_size(Rect::new(0, 0, 80, 24));
        assert_eq!(size, Size::new(800.0, 480.0));
    }

    #[test]
    fn test_eased_quads_at_zero_intensity_are_at_rest() {
        let grid = GridConfig::default();
        let tuning = FieldTuning::default();
        let container = Size::new(800.0, 480.0);
        let pointer = Some(container.center());

        let rest = compute_frame(&grid, &tuning, container, None);
        let eased = eased_quads(&scene(&grid, &tuning, &[], pointer, 0.0), container);
        assert_eq!(eased, rest);
    }

    #[test]
    fn test_eased_quads_at_full_intensity_are_displaced() {
        let grid = GridConfig::default();
        let tuning = FieldTuning::default();
        let container = Size::new(800.0, 480.0);
        let pointer = Some(container.center());

        let displaced = compute_frame(&grid, &tuning, container, pointer);
        let eased = eased_quads(&scene(&grid, &tuning, &[], pointer, 1.0), container);
        assert_eq!(eased, displaced);
    }

    #[test]
    fn test_char_inside_a_cell_is_solid() {
        let quad = CellQuad {
            center: Vec2::new(15.0, 30.0),
            size: 40.0,
            radius: 5.0,
        };
        // Character (1, 1) spans units 10..20 x 20..40, well inside the quad.
        let band = [&quad];
        let gradient = AngularGradient::new(Vec2::ZERO, vec![Rgb::new(1.0, 1.0, 1.0)]);
        let span = render_char(1, 1, &band, &gradient, false);
        assert_eq!(span.content.as_ref(), "█");
    }

    #[test]
    fn test_char_far_from_every_cell_is_blank() {
        let quad = CellQuad {
            center: Vec2::new(15.0, 30.0),
            size: 10.0,
            radius: 3.0,
        };
        let band = [&quad];
        let gradient = AngularGradient::new(Vec2::ZERO, vec![Rgb::new(1.0, 1.0, 1.0)]);
        let span = render_char(20, 1, &band, &gradient, true);
        assert_eq!(span.content.as_ref(), " ");
    }
}
