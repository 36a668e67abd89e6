//! Falling-glyph background animation.
//!
//! One particle per fixed horizontal band of the viewport, each carrying a
//! glyph from a two-symbol alphabet. A tick advances every particle by a
//! constant step; particles leaving the bottom edge wrap to the top at a new
//! random column. The animator owns its particle collection; a resize
//! replaces the whole collection atomically from the tick loop's perspective.
//! Purely cosmetic, so there is no failure path here.

use rand::Rng;

use crate::theme::Theme;
use crate::Viewport;

/// The two-symbol alphabet glyphs are drawn from.
pub const GLYPHS: &[char] = &['0', '1'];

/// Horizontal pixels per particle; density = viewport width / spacing.
pub const PARTICLE_SPACING: u32 = 20;

/// Vertical advance per tick.
pub const FALL_STEP: f32 = 1.0;

/// Wall-clock redraw cadence in milliseconds (fixed, not frame-synced).
pub const FRAME_INTERVAL_MS: u64 = 50;

/// One falling glyph.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub glyph: char,
}

/// A text paint command for one particle, colored for the current theme.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphPaint {
    pub x: i32,
    pub y: i32,
    pub glyph: char,
    pub color: &'static str,
}

/// Owns the particle collection and the viewport it falls through.
pub struct BackgroundAnimator {
    viewport: Viewport,
    particles: Vec<Particle>,
}

impl BackgroundAnimator {
    pub fn new(viewport: Viewport) -> Self {
        let mut animator = Self {
            viewport,
            particles: Vec::new(),
        };
        animator.resize(viewport);
        animator
    }

    /// Regenerate the collection for a new viewport: exactly
    /// `width / PARTICLE_SPACING` particles, each at a random position within
    /// the new bounds.
    pub fn resize(&mut self, viewport: Viewport) {
        let mut rng = rand::thread_rng();
        let count = (viewport.width / PARTICLE_SPACING) as usize;
        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            particles.push(Particle {
                x: rng.gen_range(0.0..viewport.width as f32),
                y: rng.gen_range(0.0..viewport.height.max(1) as f32),
                glyph: GLYPHS[rng.gen_range(0..GLYPHS.len())],
            });
        }
        self.viewport = viewport;
        self.particles = particles;
    }

    /// Advance one frame: every particle falls by `FALL_STEP`; particles past
    /// the bottom edge wrap to the top at a new random column.
    pub fn tick(&mut self) {
        let mut rng = rand::thread_rng();
        let height = self.viewport.height as f32;
        let width = self.viewport.width as f32;
        for particle in &mut self.particles {
            particle.y += FALL_STEP;
            if particle.y > height {
                particle.y = 0.0;
                particle.x = rng.gen_range(0.0..width);
            }
        }
    }

    /// One text paint command per particle in the theme's accent color.
    pub fn paint(&self, theme: Theme) -> Vec<GlyphPaint> {
        let color = theme.accent_color();
        self.particles
            .iter()
            .map(|p| GlyphPaint {
                x: p.x as i32,
                y: p.y as i32,
                glyph: p.glyph,
                color,
            })
            .collect()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}
