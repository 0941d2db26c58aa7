/// Frame-time driven transitions: notice fade-in, unlock bloom and hover glow.

/// A one-shot transition measured in milliseconds of frame time.
#[derive(Debug, Clone)]
pub struct Animation {
    elapsed: f64,
    duration: f64,
    active: bool,
}

impl Animation {
    /// An animation that has already finished (progress 1.0).
    pub fn finished() -> Self {
        Self {
            elapsed: 0.0,
            duration: 0.0,
            active: false,
        }
    }

    pub fn started(duration_ms: f64) -> Self {
        let mut anim = Self::finished();
        anim.start(duration_ms);
        anim
    }

    pub fn start(&mut self, duration_ms: f64) {
        self.elapsed = 0.0;
        self.duration = duration_ms.max(0.0);
        self.active = self.duration > 0.0;
    }

    pub fn update(&mut self, dt_ms: f64) {
        if self.active {
            self.elapsed += dt_ms.max(0.0);
            if self.elapsed >= self.duration {
                self.elapsed = self.duration;
                self.active = false;
            }
        }
    }

    /// Eased progress (0.0..=1.0), ease-out cubic.
    pub fn progress(&self) -> f64 {
        ease_out(self.linear())
    }

    /// Un-eased progress (0.0..=1.0).
    pub fn linear(&self) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self::finished()
    }
}

/// Ease-out cubic: 1 - (1 - t)^3
fn ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Linear interpolation between two values.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Exponential approach towards `target`; frame-rate independent.
pub fn smooth_towards(current: f64, target: f64, dt_ms: f64, speed: f64) -> f64 {
    let factor = 1.0 - (-speed * dt_ms / 1000.0).exp();
    current + (target - current) * factor
}
