// --- Pixel collision mask ---
// Anchor is the pixel sitting on the owning entity's position.
#[derive(Clone, Debug, PartialEq)]
pub struct CollisionMask {
    width: usize,
    height: usize,
    bits: Vec<bool>,
    anchor: (i32, i32),
}

impl CollisionMask {
    pub fn empty() -> Self {
        CollisionMask { width: 0, height: 0, bits: Vec::new(), anchor: (0, 0) }
    }

    pub fn circle(diameter: u32) -> Self {
        let size = diameter as usize;
        let radius = diameter as f64 / 2.0;
        let mut bits = vec![false; size * size];
        for y in 0..size {
            for x in 0..size {
                let dx = x as f64 + 0.5 - radius;
                let dy = y as f64 + 0.5 - radius;
                bits[y * size + x] = dx * dx + dy * dy <= radius * radius;
            }
        }
        let anchor = (diameter as i32 / 2, diameter as i32 / 2);
        CollisionMask { width: size, height: size, bits, anchor }
    }

    // Triangle, nose along angle_degrees (0 = up, clockwise)
    pub fn ship(size: f64, angle_degrees: f64) -> Self {
        let half = size / 2.0;
        let (sin, cos) = angle_degrees.to_radians().sin_cos();
        let rotate = |(x, y): (f64, f64)| (x * cos - y * sin, x * sin + y * cos);
        let vertices = [rotate((0.0, -half)), rotate((-half, half)), rotate((half, half))];

        let extent = vertices
            .iter()
            .map(|&(x, y)| x.abs().max(y.abs()))
            .fold(0.0_f64, f64::max)
            .ceil() as usize;
        let side = extent * 2 + 1;
        let mut bits = vec![false; side * side];
        for py in 0..side {
            for px in 0..side {
                let point = (px as f64 - extent as f64, py as f64 - extent as f64);
                bits[py * side + px] = point_in_triangle(point, &vertices);
            }
        }
        CollisionMask { width: side, height: side, bits, anchor: (extent as i32, extent as i32) }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn anchor(&self) -> (i32, i32) {
        self.anchor
    }

    pub fn is_set(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return false;
        }
        self.bits[y as usize * self.width + x as usize]
    }

    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&bit| bit).count()
    }

    // offset: other's anchor relative to ours
    pub fn overlap(&self, other: &CollisionMask, offset: (i32, i32)) -> bool {
        let shift_x = other.anchor.0 - self.anchor.0 - offset.0;
        let shift_y = other.anchor.1 - self.anchor.1 - offset.1;
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                if self.is_set(x, y) && other.is_set(x + shift_x, y + shift_y) {
                    return true;
                }
            }
        }
        false
    }
}

fn point_in_triangle(p: (f64, f64), v: &[(f64, f64); 3]) -> bool {
    let edge = |a: (f64, f64), b: (f64, f64)| (b.0 - a.0) * (p.1 - a.1) - (b.1 - a.1) * (p.0 - a.0);
    let d1 = edge(v[0], v[1]);
    let d2 = edge(v[1], v[2]);
    let d3 = edge(v[2], v[0]);
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}
