//! Strike-through geometry over the winning line.
//!
//! The engine reports which line won; everything visual about the strike
//! is derived here from the endpoint cells' screen rectangles: midpoint,
//! length, rotation angle, and the run of terminal cells the decoration
//! passes through. Coordinates are screen cells, y growing downward.

use ratatui::layout::Rect;

/// A straight segment between the centers of two cell rectangles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Strike {
    start: (f64, f64),
    end: (f64, f64),
}

impl Strike {
    /// Builds the strike spanning the first and last winning cells.
    pub fn between(first: Rect, last: Rect) -> Self {
        Self {
            start: center_of(first),
            end: center_of(last),
        }
    }

    /// Midpoint of the segment - where the decoration is anchored.
    pub fn midpoint(&self) -> (f64, f64) {
        (
            (self.start.0 + self.end.0) / 2.0,
            (self.start.1 + self.end.1) / 2.0,
        )
    }

    /// Length of the segment.
    pub fn length(&self) -> f64 {
        let dx = self.end.0 - self.start.0;
        let dy = self.end.1 - self.start.1;
        dx.hypot(dy)
    }

    /// Rotation angle in degrees, 0 pointing right, positive downward.
    pub fn angle_deg(&self) -> f64 {
        let dx = self.end.0 - self.start.0;
        let dy = self.end.1 - self.start.1;
        dy.atan2(dx).to_degrees()
    }

    /// Terminal cells along the segment, endpoints included.
    ///
    /// Steps once per cell on the dominant axis and interpolates the
    /// other, so the path always reaches the far endpoint exactly.
    pub fn path(&self) -> Vec<(u16, u16)> {
        let (x0, y0) = (self.start.0.round() as i32, self.start.1.round() as i32);
        let (x1, y1) = (self.end.0.round() as i32, self.end.1.round() as i32);

        let steps = (x1 - x0).abs().max((y1 - y0).abs());
        if steps == 0 {
            return vec![(x0 as u16, y0 as u16)];
        }

        (0..=steps)
            .map(|i| {
                let x = x0 + (x1 - x0) * i / steps;
                let y = y0 + (y1 - y0) * i / steps;
                (x as u16, y as u16)
            })
            .collect()
    }
}

fn center_of(rect: Rect) -> (f64, f64) {
    (
        f64::from(rect.x) + f64::from(rect.width) / 2.0,
        f64::from(rect.y) + f64::from(rect.height) / 2.0,
    )
}
