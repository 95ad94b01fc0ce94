//! Pure layout math for the SVG charts. Nothing here touches the DOM.

use super::value_objects::Viewport;

/// Share of each bar slot left empty between bars
pub const BAR_SPACING_RATIO: f64 = 0.2;

/// Min/max of the present values, `None` when every value is missing.
pub fn value_range<I>(values: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = Option<f64>>,
{
    values
        .into_iter()
        .flatten()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// X position of sample `index` out of `len`, spread edge to edge.
/// A single sample sits in the middle.
pub fn x_position(index: usize, len: usize, viewport: &Viewport) -> f64 {
    if len <= 1 {
        return viewport.padding + viewport.inner_width() / 2.0;
    }
    viewport.padding + viewport.inner_width() * index as f64 / (len - 1) as f64
}

/// Y position of `value` in `range`; a flat range maps to the vertical middle.
pub fn y_position(value: f64, range: (f64, f64), viewport: &Viewport) -> f64 {
    let (lo, hi) = range;
    let span = hi - lo;
    let ratio = if span.abs() < f64::EPSILON { 0.5 } else { (value - lo) / span };
    viewport.padding + viewport.inner_height() * (1.0 - ratio)
}

/// Line segments for a series with gaps. A missing value ends the current
/// segment, so no point is ever drawn at a false zero.
pub fn polyline_segments(values: &[Option<f64>], range: (f64, f64), viewport: &Viewport) -> Vec<Vec<(f64, f64)>> {
    let mut segments = Vec::new();
    let mut current = Vec::new();

    for (i, value) in values.iter().enumerate() {
        match value {
            Some(v) if v.is_finite() => {
                current.push((x_position(i, values.len(), viewport), y_position(*v, range, viewport)));
            }
            _ => {
                if !current.is_empty() {
                    segments.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }

    segments
}

/// `points` attribute of an SVG `<polyline>`/`<polygon>`.
pub fn svg_points(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Left edge and width of each of `count` bars.
pub fn bar_slots(count: usize, viewport: &Viewport) -> Vec<(f64, f64)> {
    if count == 0 {
        return Vec::new();
    }
    let slot = viewport.inner_width() / count as f64;
    let width = slot * (1.0 - BAR_SPACING_RATIO);
    (0..count)
        .map(|i| (viewport.padding + slot * i as f64 + (slot - width) / 2.0, width))
        .collect()
}

/// Height in pixels of a bar for `value` on a `0..=max` scale.
pub fn bar_height(value: f64, max: f64, viewport: &Viewport) -> f64 {
    if max <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    viewport.inner_height() * (value / max).clamp(0.0, 1.0)
}

/// Radar vertices for scores in `[0, 100]`, first spoke pointing up,
/// going clockwise.
pub fn radar_points(values: &[f64], center: (f64, f64), radius: f64) -> Vec<(f64, f64)> {
    let n = values.len();
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let angle = -std::f64::consts::FRAC_PI_2 + std::f64::consts::TAU * i as f64 / n as f64;
            let r = radius * value.clamp(0.0, 100.0) / 100.0;
            (center.0 + r * angle.cos(), center.1 + r * angle.sin())
        })
        .collect()
}
