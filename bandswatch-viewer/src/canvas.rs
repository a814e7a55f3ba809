//! Canvas rendering for the band swatch demo.

use bandswatch_core::{layout_bands, DraggableRect, Point, SwatchPair};
use egui::{Align2, FontId, Painter, Pos2, Rect, Rounding, Shape, Stroke, Vec2};

use crate::layers::OverlayVisibility;
use crate::theme;
use crate::transform::ViewportTransform;

/// Local Y coordinate where the upper swatch ends and the lower one begins.
pub fn swatch_split_y(rect: &DraggableRect, pair: &SwatchPair) -> f32 {
    rect.top_edge() + pair.top_height(rect.size.height)
}

/// Render one frame: bands first, then the rectangle, then any overlays.
pub fn render_frame(
    painter: &Painter,
    transform: &ViewportTransform,
    rect: &DraggableRect,
    pair: &SwatchPair,
    corner_radius: f32,
    overlays: &OverlayVisibility,
) {
    render_bands(painter, transform);
    render_swatches(painter, transform, rect, pair, corner_radius);

    if overlays.is_clean() {
        return;
    }

    if overlays.guides {
        render_guides(painter, transform, rect);
    }

    if overlays.readout {
        render_readout(painter, transform, rect, pair);
    }
}

/// Render the four full-width bands.
fn render_bands(painter: &Painter, transform: &ViewportTransform) {
    let height = transform.viewport_size().height;
    for band in layout_bands(height) {
        let rect = transform.full_width_rect(band.top, band.bottom);
        painter.rect_filled(rect, 0.0, theme::band_color(band.color));
    }
}

/// Render the two stacked swatches, rounded as a single rectangle.
fn render_swatches(
    painter: &Painter,
    transform: &ViewportTransform,
    rect: &DraggableRect,
    pair: &SwatchPair,
    corner_radius: f32,
) {
    let (min, max) = rect.bounds();
    let split_y = swatch_split_y(rect, pair);

    let top_height = pair.top_height(rect.size.height);
    let bottom_height = pair.bottom_height(rect.size.height);

    // Corners belong to whichever swatch reaches them; a swatch with no
    // height is skipped so the other one keeps all four corners.
    let (top_rounding, bottom_rounding) = if bottom_height <= 0.0 {
        (Rounding::same(corner_radius), Rounding::ZERO)
    } else if top_height <= 0.0 {
        (Rounding::ZERO, Rounding::same(corner_radius))
    } else {
        (
            Rounding {
                nw: corner_radius,
                ne: corner_radius,
                sw: 0.0,
                se: 0.0,
            },
            Rounding {
                nw: 0.0,
                ne: 0.0,
                sw: corner_radius,
                se: corner_radius,
            },
        )
    };

    if top_height > 0.0 {
        let top = Rect::from_min_max(
            transform.to_screen(min),
            transform.to_screen(Point::new(max.x, split_y)),
        );
        painter.rect_filled(top, top_rounding, theme::band_color(pair.top));
    }

    if bottom_height > 0.0 {
        let bottom = Rect::from_min_max(
            transform.to_screen(Point::new(min.x, split_y)),
            transform.to_screen(max),
        );
        painter.rect_filled(bottom, bottom_rounding, theme::band_color(pair.bottom));
    }
}

/// Render band boundaries and the rectangle's top and bottom edges.
fn render_guides(painter: &Painter, transform: &ViewportTransform, rect: &DraggableRect) {
    let canvas = transform.canvas_rect();
    let band_stroke = Stroke::new(theme::GUIDE_STROKE_WIDTH, theme::BAND_GUIDE);
    let edge_stroke = Stroke::new(theme::GUIDE_STROKE_WIDTH, theme::EDGE_GUIDE);

    for band in layout_bands(transform.viewport_size().height).iter().skip(1) {
        let y = canvas.min.y + band.top;
        painter.line_segment(
            [Pos2::new(canvas.min.x, y), Pos2::new(canvas.max.x, y)],
            band_stroke,
        );
    }

    for edge in [rect.top_edge(), rect.bottom_edge()] {
        let y = canvas.min.y + edge;
        painter.extend(Shape::dashed_line(
            &[Pos2::new(canvas.min.x, y), Pos2::new(canvas.max.x, y)],
            edge_stroke,
            6.0,
            4.0,
        ));
    }
}

/// Text describing the current mapping, one fact per line.
pub fn readout_text(rect: &DraggableRect, pair: &SwatchPair) -> String {
    format!(
        "center  ({:.1}, {:.1})\nbands   {} / {}  ({} / {})\nswatch  {} / {}\nratio   {:.3} / {:.3}",
        rect.center.x,
        rect.center.y,
        pair.top_band(),
        pair.bottom_band(),
        pair.top_segment,
        pair.bottom_segment,
        pair.top,
        pair.bottom,
        pair.top_ratio,
        pair.bottom_ratio()
    )
}

/// Render the mapping readout in the top-left corner.
fn render_readout(
    painter: &Painter,
    transform: &ViewportTransform,
    rect: &DraggableRect,
    pair: &SwatchPair,
) {
    let galley = painter.layout_no_wrap(
        readout_text(rect, pair),
        FontId::monospace(theme::READOUT_FONT_SIZE),
        theme::READOUT_TEXT,
    );

    let padding = Vec2::splat(theme::READOUT_PADDING);
    let origin = transform.canvas_rect().min + padding;
    let background =
        Align2::LEFT_TOP.anchor_size(origin, galley.size() + padding * 2.0);

    painter.rect_filled(background, 4.0, theme::READOUT_BG);
    painter.galley(background.min + padding, galley, theme::READOUT_TEXT);
}
