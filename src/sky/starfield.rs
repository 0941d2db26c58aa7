/// Night sky background: drifting star particles and a crescent moon.

use crate::core::config;
use crate::core::types::{Color, Vec2};
use crate::platform::renderer::Renderer;
use rand::rngs::StdRng;
use rand::Rng;

/// A single drifting star.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub r: f64,
    pub dx: f64,
    pub dy: f64,
}

/// Crescent moon placed by ratios of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moon {
    pub x_ratio: f64,
    pub y_ratio: f64,
    pub r_ratio: f64,
    pub x: f64,
    pub y: f64,
    pub r: f64,
}

impl Moon {
    pub fn new(x_ratio: f64, y_ratio: f64, r_ratio: f64) -> Self {
        Self {
            x_ratio,
            y_ratio,
            r_ratio,
            x: 0.0,
            y: 0.0,
            r: 0.0,
        }
    }

    /// Recompute absolute placement; the radius follows the width only.
    pub fn place(&mut self, width: f64, height: f64) {
        self.x = width * self.x_ratio;
        self.y = height * self.y_ratio;
        self.r = width * self.r_ratio;
    }

    /// Centre of the disk subtracted to leave a waning crescent lit from below.
    pub fn cutout_center(&self) -> Vec2 {
        Vec2::new(
            self.x + self.r * config::MOON_CUTOUT_DX,
            self.y + self.r * config::MOON_CUTOUT_DY,
        )
    }
}

impl Default for Moon {
    fn default() -> Self {
        Self::new(
            config::MOON_X_RATIO,
            config::MOON_Y_RATIO,
            config::MOON_R_RATIO,
        )
    }
}

pub struct Starfield {
    star_count: usize,
    stars: Vec<Star>,
    moon: Moon,
    width: f64,
    height: f64,
    rng: StdRng,
}

impl Starfield {
    pub fn new(star_count: usize, rng: StdRng) -> Self {
        Self {
            star_count,
            stars: Vec::new(),
            moon: Moon::default(),
            width: 0.0,
            height: 0.0,
            rng,
        }
    }

    /// Regenerate every star for the new viewport and re-place the moon.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self.moon.place(self.width, self.height);

        let half_speed = config::STAR_MAX_SPEED / 2.0;
        let (w, h) = (self.width, self.height);
        let rng = &mut self.rng;
        self.stars = (0..self.star_count)
            .map(|_| Star {
                x: rng.gen::<f64>() * w,
                y: rng.gen::<f64>() * h,
                r: rng.gen::<f64>() * config::STAR_MAX_RADIUS,
                dx: rng.gen_range(-half_speed..half_speed),
                dy: rng.gen_range(-half_speed..half_speed),
            })
            .collect();

        log::debug!(
            "Starfield regenerated: {} stars for {}x{}",
            self.stars.len(),
            self.width,
            self.height
        );
    }

    /// Clear, draw the moon and the stars, then advance every star one step.
    pub fn render_frame(&mut self, renderer: &dyn Renderer) {
        renderer.clear(Color::from_hex(config::BG_COLOR, 1.0));
        self.draw_moon(renderer);

        let star_color = Color::from_hex(config::STAR_COLOR, 1.0);
        for star in &self.stars {
            renderer.fill_circle(star.x, star.y, star.r, star_color);
        }

        self.advance();
    }

    /// Move every star by its velocity, wrapping at the viewport edges.
    pub fn advance(&mut self) {
        let (w, h) = (self.width, self.height);
        for star in &mut self.stars {
            star.x += star.dx;
            star.y += star.dy;
            if star.x < 0.0 {
                star.x = w;
            }
            if star.x > w {
                star.x = 0.0;
            }
            if star.y < 0.0 {
                star.y = h;
            }
            if star.y > h {
                star.y = 0.0;
            }
        }
    }

    fn draw_moon(&self, renderer: &dyn Renderer) {
        if self.moon.r <= 0.0 {
            return;
        }
        renderer.fill_crescent(
            Vec2::new(self.moon.x, self.moon.y),
            self.moon.r,
            self.moon.cutout_center(),
            self.moon.r,
            Color::from_hex(config::MOON_COLOR, 1.0),
        );
    }
}

#[cfg(test)]
impl Starfield {
    pub fn seeded(star_count: usize, seed: u64) -> Self {
        use rand::SeedableRng;
        Self::new(star_count, StdRng::seed_from_u64(seed))
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn moon(&self) -> &Moon {
        &self.moon
    }

    pub fn stars_mut(&mut self) -> &mut Vec<Star> {
        &mut self.stars
    }
}
