//! Particle accessor trait and the plain [`Particle`] record.

/// Read/write access to the transverse phase-space coordinates of one
/// particle.
///
/// Implemented by whatever particle storage the surrounding framework
/// uses. Tracking only reads and writes the four transverse coordinates;
/// `delta` is read by the reference drift maps for their chromatic
/// terms and defaults to zero for storages without an energy coordinate.
pub trait PhaseSpace {
    /// Horizontal position.
    fn x(&self) -> f64;
    /// Vertical position.
    fn y(&self) -> f64;
    /// Horizontal momentum, normalised to the reference momentum.
    fn px(&self) -> f64;
    /// Vertical momentum, normalised to the reference momentum.
    fn py(&self) -> f64;

    /// Relative momentum deviation.
    fn delta(&self) -> f64 {
        0.0
    }

    /// Overwrite the horizontal position.
    fn set_x(&mut self, x: f64);
    /// Overwrite the vertical position.
    fn set_y(&mut self, y: f64);
    /// Overwrite the horizontal momentum.
    fn set_px(&mut self, px: f64);
    /// Overwrite the vertical momentum.
    fn set_py(&mut self, py: f64);

    /// Add a kick to the horizontal momentum.
    fn add_to_px(&mut self, dpx: f64) {
        let px = self.px();
        self.set_px(px + dpx);
    }

    /// Add a kick to the vertical momentum.
    fn add_to_py(&mut self, dpy: f64) {
        let py = self.py();
        self.set_py(py + dpy);
    }
}

/// A single particle with transverse and longitudinal coordinates.
///
/// `zeta` and `delta` belong to the longitudinal tracking of the wider
/// framework; bend tracking never writes them.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Particle {
    /// Horizontal position.
    pub x: f64,
    /// Horizontal momentum.
    pub px: f64,
    /// Vertical position.
    pub y: f64,
    /// Vertical momentum.
    pub py: f64,
    /// Longitudinal position relative to the reference particle.
    pub zeta: f64,
    /// Relative momentum deviation.
    pub delta: f64,
}

impl Particle {
    /// An on-momentum particle at the given transverse coordinates.
    pub fn new(x: f64, px: f64, y: f64, py: f64) -> Self {
        Self {
            x,
            px,
            y,
            py,
            zeta: 0.0,
            delta: 0.0,
        }
    }

    /// Same particle with the given momentum deviation.
    pub fn with_delta(mut self, delta: f64) -> Self {
        self.delta = delta;
        self
    }

    /// Transverse coordinates as `[x, px, y, py]`.
    pub fn transverse(&self) -> [f64; 4] {
        [self.x, self.px, self.y, self.py]
    }
}

impl PhaseSpace for Particle {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn px(&self) -> f64 {
        self.px
    }

    fn py(&self) -> f64 {
        self.py
    }

    fn delta(&self) -> f64 {
        self.delta
    }

    fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    fn set_px(&mut self, px: f64) {
        self.px = px;
    }

    fn set_py(&mut self, py: f64) {
        self.py = py;
    }

    fn add_to_px(&mut self, dpx: f64) {
        self.px += dpx;
    }

    fn add_to_py(&mut self, dpy: f64) {
        self.py += dpy;
    }
}
