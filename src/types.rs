#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub const ZERO: Vector2D = Vector2D { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Vector2D { x, y }
    }

    /// Unit vector for a heading in degrees, where 0 points up the screen
    /// and angles grow clockwise.
    pub fn from_heading(degrees: f64) -> Self {
        let radians = degrees.to_radians();
        Vector2D::new(radians.sin(), -radians.cos())
    }

    pub fn scale(&self, scalar: f64) -> Self {
        Vector2D::new(self.x * scalar, self.y * scalar)
    }

    pub fn add(&self, other: Vector2D) -> Self {
        Vector2D::new(self.x + other.x, self.y + other.y)
    }

    pub fn sub(&self, other: Vector2D) -> Self {
        Vector2D::new(self.x - other.x, self.y - other.y)
    }

    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn distance_to(&self, other: Vector2D) -> f64 {
        other.sub(*self).length()
    }
}

/// Teleports a coordinate that left `[0, max]` to the opposite edge.
pub fn wrap_coordinate(value: f64, max: f64) -> f64 {
    if value < 0.0 {
        max
    } else if value > max {
        0.0
    } else {
        value
    }
}

pub fn in_bounds(position: Vector2D, width: f64, height: f64) -> bool {
    (0.0..=width).contains(&position.x) && (0.0..=height).contains(&position.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_zero_points_up() {
        let up = Vector2D::from_heading(0.0);
        assert_eq!(up, Vector2D::new(0.0, -1.0));
    }

    #[test]
    fn heading_ninety_points_right() {
        let right = Vector2D::from_heading(90.0);
        assert!((right.x - 1.0).abs() < 1e-12);
        assert!(right.y.abs() < 1e-12);
    }

    #[test]
    fn wrap_teleports_to_opposite_edge() {
        assert_eq!(wrap_coordinate(-0.5, 1280.0), 1280.0);
        assert_eq!(wrap_coordinate(1280.5, 1280.0), 0.0);
        assert_eq!(wrap_coordinate(640.0, 1280.0), 640.0);
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(in_bounds(Vector2D::new(0.0, 800.0), 1280.0, 800.0));
        assert!(!in_bounds(Vector2D::new(-0.1, 10.0), 1280.0, 800.0));
        assert!(!in_bounds(Vector2D::new(10.0, 800.1), 1280.0, 800.0));
    }
}
