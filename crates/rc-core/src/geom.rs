use core::ops::{Add, Sub};

/// Cartesian point or offset, `x` along columns and `y` along rows.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

/// Polar coordinate. `theta` is in radians, `rho` is the distance from the
/// origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Polar2 {
    pub theta: f64,
    pub rho: f64,
}

impl Point2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn to_polar(self) -> Polar2 {
        let (theta, rho) = cartesian_to_polar(self.x, self.y);
        Polar2 { theta, rho }
    }
}

impl Polar2 {
    pub fn new(theta: f64, rho: f64) -> Self {
        Self { theta, rho }
    }

    pub fn to_point(self) -> Point2 {
        let (x, y) = polar_to_cartesian(self.theta, self.rho);
        Point2 { x, y }
    }
}

impl Add for Point2 {
    type Output = Point2;

    fn add(self, rhs: Point2) -> Self::Output {
        Point2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl Sub for Point2 {
    type Output = Point2;

    fn sub(self, rhs: Point2) -> Self::Output {
        Point2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

/// Returns `(theta, rho)` with `theta = atan2(y, x)` in `(-pi, pi]`.
pub fn cartesian_to_polar(x: f64, y: f64) -> (f64, f64) {
    (y.atan2(x), x.hypot(y))
}

/// Returns `(x, y)` for the polar coordinate `(theta, rho)`.
pub fn polar_to_cartesian(theta: f64, rho: f64) -> (f64, f64) {
    let (sin, cos) = theta.sin_cos();
    (rho * cos, rho * sin)
}

/// Converts the outer product of `rhos x thetas` into Cartesian offsets.
///
/// Output is row-major: one row per `rho`, one column per `theta`.
pub fn polar_grid_to_cartesian(thetas: &[f64], rhos: &[f64]) -> Vec<Point2> {
    let trig: Vec<(f64, f64)> = thetas.iter().map(|t| t.sin_cos()).collect();
    let mut out = Vec::with_capacity(rhos.len() * thetas.len());
    for &rho in rhos {
        out.extend(trig.iter().map(|&(sin, cos)| Point2 {
            x: rho * cos,
            y: rho * sin,
        }));
    }
    out
}
