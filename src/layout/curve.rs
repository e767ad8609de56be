use crate::model::Position;
use serde::Serialize;
use std::fmt::Write;

/// A cubic Bezier segment in canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CubicBezier {
    pub start: Position,
    pub control1: Position,
    pub control2: Position,
    pub end: Position,
}

impl CubicBezier {
    /// Evaluates the curve at `t`, clamped to `[0, 1]`.
    pub fn point_at(&self, t: f64) -> Position {
        let t = t.clamp(0.0, 1.0);
        let u = 1.0 - t;
        let (a, b, c, d) = (u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t);
        Position {
            x: a * self.start.x + b * self.control1.x + c * self.control2.x + d * self.end.x,
            y: a * self.start.y + b * self.control1.y + c * self.control2.y + d * self.end.y,
        }
    }

    /// SVG path data: `M sx sy C c1x c1y, c2x c2y, ex ey`.
    pub fn to_svg_path(&self) -> String {
        let mut d = String::new();
        // Writing into a String cannot fail.
        let _ = write!(
            d,
            "M {} {} C {} {}, {} {}, {} {}",
            self.start.x,
            self.start.y,
            self.control1.x,
            self.control1.y,
            self.control2.x,
            self.control2.y,
            self.end.x,
            self.end.y
        );
        d
    }
}
