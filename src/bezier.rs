//! CSS-like cubic Bézier timing curve evaluation.
//!
//! The curve runs from `(0,0)` to `(1,1)` with the two editable control
//! points in between.  x is time, y is progress.

/// Polynomial form of a timing curve, precomputed from its control points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingCurve {
    ax: f64,
    bx: f64,
    cx: f64,
    ay: f64,
    by: f64,
    cy: f64,
}

impl TimingCurve {
    /// Build the curve for `cubic-bezier(x1, y1, x2, y2)`.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        // B(t) = ((a*t + b)*t + c)*t with the endpoints pinned to 0 and 1.
        let cx = 3.0 * x1;
        let bx = 3.0 * (x2 - x1) - cx;
        let ax = 1.0 - cx - bx;

        let cy = 3.0 * y1;
        let by = 3.0 * (y2 - y1) - cy;
        let ay = 1.0 - cy - by;

        Self {
            ax,
            bx,
            cx,
            ay,
            by,
            cy,
        }
    }

    #[inline]
    fn x_at(&self, t: f64) -> f64 {
        ((self.ax * t + self.bx) * t + self.cx) * t
    }

    #[inline]
    fn y_at(&self, t: f64) -> f64 {
        ((self.ay * t + self.by) * t + self.cy) * t
    }

    #[inline]
    fn dx_at(&self, t: f64) -> f64 {
        (3.0 * self.ax * t + 2.0 * self.bx) * t + self.cx
    }

    /// Find the curve parameter `t` whose x equals `u`.
    fn solve_t(&self, u: f64) -> f64 {
        // Newton-Raphson
        let mut t = u;
        for _ in 0..8 {
            let err = self.x_at(t) - u;
            if err.abs() < 1e-7 {
                return t;
            }
            let dx = self.dx_at(t);
            if dx.abs() < 1e-7 {
                break;
            }
            t -= err / dx;
            if !(0.0..=1.0).contains(&t) {
                break;
            }
        }

        // Bisection fallback
        let mut lo = 0.0;
        let mut hi = 1.0;
        t = u;
        for _ in 0..40 {
            let x = self.x_at(t);
            if (x - u).abs() < 1e-9 {
                return t;
            }
            if x < u {
                lo = t;
            } else {
                hi = t;
            }
            t = 0.5 * (lo + hi);
        }
        t
    }

    /// Eased progress at normalized time `u` (clamped to `[0, 1]`).
    pub fn sample(&self, u: f64) -> f64 {
        let u = u.clamp(0.0, 1.0);
        self.y_at(self.solve_t(u))
    }
}
