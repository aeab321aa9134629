//! Chart geometry models

use serde::Serialize;

/// A point in screen coordinates (y grows downwards)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// Stroke polyline plus the closed area under it for the gradient fill
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Sparkline {
    pub line: Vec<Point>,
    pub area: Vec<Point>,
}

/// A labelled bar and its rendered height in pixels
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    pub height: f64,
}

/// Input slice of a donut chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DonutSegment {
    pub label: String,
    pub value: f64,
}

impl DonutSegment {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        DonutSegment {
            label: label.into(),
            value,
        }
    }
}

/// Square canvas and radius of a donut chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DonutGeometry {
    pub size: f64,
    pub radius: f64,
}

impl DonutGeometry {
    pub fn center(&self) -> Point {
        Point::new(self.size / 2.0, self.size / 2.0)
    }
}

impl Default for DonutGeometry {
    fn default() -> Self {
        DonutGeometry {
            size: 100.0,
            radius: 35.0,
        }
    }
}

/// One rendered slice; angles in radians
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DonutArc {
    pub label: String,
    pub value: f64,
    pub share: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub large_arc: bool,
    pub path: String,
}

impl DonutArc {
    pub fn span(&self) -> f64 {
        self.end_angle - self.start_angle
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DonutChart {
    Segments { total: f64, arcs: Vec<DonutArc> },
    /// Nothing to partition; draw a single neutral circle
    Neutral { center: Point, radius: f64 },
}
