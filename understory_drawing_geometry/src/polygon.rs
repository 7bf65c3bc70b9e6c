// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Write as _};

use kurbo::Point;

use crate::ImageMetrics;
use crate::placement::write_number;

/// A polygon scaled from natural pixel space into rendered space.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectedPolygon {
    /// Vertices in rendered coordinates, in input order.
    pub points: Vec<Point>,
    /// Average of the rendered vertices; the origin for an empty polygon.
    pub centroid: Point,
}

impl ProjectedPolygon {
    /// Returns the vertices in SVG `points` attribute form: `"x,y x,y ..."`.
    #[must_use]
    pub fn svg_points(&self) -> String {
        let mut out = String::new();
        for (i, p) in self.points.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            // Writing into a `String` cannot fail.
            let _ = write!(out, "{}", SvgPoint(*p));
        }
        out
    }
}

struct SvgPoint(Point);

impl fmt::Display for SvgPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_number(f, self.0.x)?;
        f.write_str(",")?;
        write_number(f, self.0.y)
    }
}

/// Scales `vertices` from the natural pixel space of an image into its
/// rendered space.
///
/// The centroid is the plain vertex average, which is what map labels are
/// anchored to; it is not the area centroid.
#[must_use]
pub fn project_polygon(vertices: &[Point], metrics: &ImageMetrics) -> ProjectedPolygon {
    let points: Vec<Point> = vertices.iter().map(|&p| metrics.to_rendered(p)).collect();
    let centroid = if points.is_empty() {
        Point::ORIGIN
    } else {
        let n = points.len() as f64;
        let sum = points
            .iter()
            .fold(Point::ORIGIN, |acc, p| Point::new(acc.x + p.x, acc.y + p.y));
        Point::new(sum.x / n, sum.y / n)
    };
    ProjectedPolygon { points, centroid }
}
