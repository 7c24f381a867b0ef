//! Plain geometry values.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle described only by its size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rectangle {
    /// Width of the rectangle.
    pub width: f64,
    /// Height of the rectangle.
    pub height: f64,
}

impl Rectangle {
    /// Create a rectangle with the given width and height.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Area covered by the rectangle (`width * height`).
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area() {
        assert!((Rectangle::new(10.0, 20.0).area() - 200.0).abs() < f64::EPSILON);
        assert!(Rectangle::new(0.0, 5.0).area().abs() < f64::EPSILON);
        assert!((Rectangle::new(1.5, 4.0).area() - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_default_is_empty() {
        let rect = Rectangle::default();
        assert!(rect.area().abs() < f64::EPSILON);
    }
}
