use std::f64::consts::{PI, TAU};

use crate::models::{Bar, DonutArc, DonutChart, DonutGeometry, DonutSegment, Point, Sparkline};

/// Build a sparkline for `values` inside a `width` x `height` box
///
/// Values are min-max scaled onto the box height (y = 0 at the top). A flat
/// series uses a range of 1 so every point sits on the baseline. A single
/// value is drawn as one centred point; an empty series yields nothing.
pub fn sparkline(values: &[f64], width: f64, height: f64) -> Sparkline {
    let line: Vec<Point> = match values.len() {
        0 => return Sparkline::default(),
        1 => vec![Point::new(width / 2.0, height / 2.0)],
        n => {
            let min = values.iter().copied().fold(f64::INFINITY, f64::min);
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let range = if max - min == 0.0 { 1.0 } else { max - min };

            values
                .iter()
                .enumerate()
                .map(|(i, v)| {
                    let x = i as f64 / (n - 1) as f64 * width;
                    let y = height - (v - min) / range * height;
                    Point::new(x, y)
                })
                .collect()
        }
    };

    let mut area = Vec::with_capacity(line.len() + 2);
    area.push(Point::new(0.0, height));
    area.extend(line.iter().copied());
    area.push(Point::new(width, height));

    Sparkline { line, area }
}

/// Render points as an SVG `points` attribute: "x,y x,y ..."
pub fn svg_points(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", trim_float(p.x), trim_float(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Bar heights proportional to the series maximum
///
/// Zero and negative values, and every bar of an all-zero series, get
/// `min_height` so the bar stays visible and the row keeps its layout.
pub fn bar_heights(values: &[f64], max_height: f64, min_height: f64) -> Vec<f64> {
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    let floor = min_height.clamp(0.0, max_height.max(0.0));

    values
        .iter()
        .map(|&v| {
            if max <= 0.0 || v <= 0.0 {
                floor
            } else {
                (v / max * max_height).max(floor)
            }
        })
        .collect()
}

/// Labelled bars for a chart
pub fn bars(data: &[(String, f64)], max_height: f64, min_height: f64) -> Vec<Bar> {
    let values: Vec<f64> = data.iter().map(|(_, v)| *v).collect();
    bar_heights(&values, max_height, min_height)
        .into_iter()
        .zip(data)
        .map(|(height, (label, value))| Bar {
            label: label.clone(),
            value: *value,
            height,
        })
        .collect()
}

/// Partition the circle into consecutive slices, clockwise from 12 o'clock
///
/// Slices follow input order. Negative values count as zero. A zero total
/// produces [`DonutChart::Neutral`].
pub fn donut(segments: &[DonutSegment], geometry: DonutGeometry) -> DonutChart {
    let total: f64 = segments.iter().map(|s| s.value.max(0.0)).sum();
    let center = geometry.center();

    if total <= 0.0 || !total.is_finite() {
        return DonutChart::Neutral {
            center,
            radius: geometry.radius,
        };
    }

    let mut cumulative = 0.0;
    let arcs = segments
        .iter()
        .map(|segment| {
            let value = segment.value.max(0.0);
            let start_angle = cumulative / total * TAU - PI / 2.0;
            cumulative += value;
            let end_angle = cumulative / total * TAU - PI / 2.0;
            let large_arc = end_angle - start_angle > PI;

            DonutArc {
                label: segment.label.clone(),
                value,
                share: value / total,
                start_angle,
                end_angle,
                large_arc,
                path: arc_path(center, geometry.radius, start_angle, end_angle),
            }
        })
        .collect();

    DonutChart::Segments { total, arcs }
}

fn polar(center: Point, radius: f64, angle: f64) -> Point {
    Point::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
}

/// SVG path for a pie wedge from `start` to `end` (radians), sweep flag 1
fn arc_path(center: Point, radius: f64, start: f64, end: f64) -> String {
    let from = polar(center, radius, start);
    let to = polar(center, radius, end);
    let r = trim_float(radius);

    // Start and end coincide on a full circle; split it into two half arcs
    if end - start >= TAU - 1e-9 {
        let mid = polar(center, radius, start + PI);
        return format!(
            "M {} {} L {} {} A {} {} 0 0 1 {} {} A {} {} 0 0 1 {} {} Z",
            trim_float(center.x),
            trim_float(center.y),
            trim_float(from.x),
            trim_float(from.y),
            r,
            r,
            trim_float(mid.x),
            trim_float(mid.y),
            r,
            r,
            trim_float(to.x),
            trim_float(to.y),
        );
    }

    let large_arc = if end - start > PI { 1 } else { 0 };
    format!(
        "M {} {} L {} {} A {} {} 0 {} 1 {} {} Z",
        trim_float(center.x),
        trim_float(center.y),
        trim_float(from.x),
        trim_float(from.y),
        r,
        r,
        large_arc,
        trim_float(to.x),
        trim_float(to.y),
    )
}

/// Format with at most 3 decimals and no trailing zeros
fn trim_float(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    // Avoid printing "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    let text = format!("{:.3}", rounded);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
