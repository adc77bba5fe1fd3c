//! Decorative particles: a drifting background field and celebration bursts.
//!
//! Positions are in terminal cells. Nothing here feeds back into the deck.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const HEART_GLYPHS: [char; 6] = ['♥', '❤', '♡', '❥', '❣', '✦'];

/// Delay between two hearts of the same burst.
const BURST_STAGGER_MS: u64 = 20;
/// How long one heart flies before it is removed.
const HEART_LIFETIME_MS: u64 = 1_500;
/// Background drift speed bound, in cells per second.
const MAX_DRIFT: f32 = 1.0;

#[derive(Debug, Clone)]
struct Mote {
    x: f32,
    y: f32,
    dx: f32,
    dy: f32,
    bright: bool,
}

#[derive(Debug, Clone)]
struct Heart {
    glyph: char,
    released_ms: u64,
    /// Unit direction.
    dir_x: f32,
    dir_y: f32,
    /// Travel as a fraction of the viewport.
    reach: f32,
}

/// A heart currently on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeartSprite {
    pub x: u16,
    pub y: u16,
    pub glyph: char,
    /// 1.0 at release, 0.0 at the end of its flight.
    pub fade: f32,
}

pub struct ParticleField {
    rng: StdRng,
    width: f32,
    height: f32,
    now_ms: u64,
    motes: Vec<Mote>,
    hearts: Vec<Heart>,
}

impl ParticleField {
    pub fn new(count: usize, width: u16, height: u16) -> Self {
        Self::with_rng(StdRng::seed_from_u64(rand::random()), count, width, height)
    }

    pub fn with_seed(seed: u64, count: usize, width: u16, height: u16) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), count, width, height)
    }

    fn with_rng(mut rng: StdRng, count: usize, width: u16, height: u16) -> Self {
        let width = f32::from(width.max(1));
        let height = f32::from(height.max(1));
        let motes = (0..count)
            .map(|_| Mote {
                x: rng.random_range(0.0..width),
                y: rng.random_range(0.0..height),
                dx: rng.random_range(-MAX_DRIFT..MAX_DRIFT),
                dy: rng.random_range(-MAX_DRIFT..MAX_DRIFT) / 2.0,
                bright: rng.random_bool(0.3),
            })
            .collect();
        Self {
            rng,
            width,
            height,
            now_ms: 0,
            motes,
            hearts: Vec::new(),
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = f32::from(width.max(1));
        self.height = f32::from(height.max(1));
        for mote in &mut self.motes {
            mote.x = mote.x.rem_euclid(self.width);
            mote.y = mote.y.rem_euclid(self.height);
        }
    }

    /// Queue `count` hearts, released one every 20 ms from now.
    pub fn burst(&mut self, count: usize) {
        for i in 0..count as u64 {
            let angle = self.rng.random_range(0.0..std::f32::consts::TAU);
            let glyph = HEART_GLYPHS[self.rng.random_range(0..HEART_GLYPHS.len())];
            self.hearts.push(Heart {
                glyph,
                released_ms: self.now_ms + i * BURST_STAGGER_MS,
                dir_x: angle.cos(),
                dir_y: angle.sin(),
                reach: self.rng.random_range(0.3..0.7),
            });
        }
    }

    /// Move everything to `now_ms`. Time never runs backwards.
    pub fn tick(&mut self, now_ms: u64) {
        if now_ms <= self.now_ms {
            return;
        }
        let dt = (now_ms - self.now_ms) as f32 / 1_000.0;
        self.now_ms = now_ms;

        let (width, height) = (self.width, self.height);
        for mote in &mut self.motes {
            mote.x = (mote.x + mote.dx * dt).rem_euclid(width);
            mote.y = (mote.y + mote.dy * dt).rem_euclid(height);
        }
        self.hearts
            .retain(|heart| now_ms < heart.released_ms + HEART_LIFETIME_MS);
    }

    /// Background dots as `(x, y, bright)`.
    pub fn motes(&self) -> impl Iterator<Item = (u16, u16, bool)> + '_ {
        self.motes
            .iter()
            .map(|mote| (mote.x as u16, mote.y as u16, mote.bright))
    }

    /// Hearts already released and still in flight.
    pub fn hearts(&self) -> Vec<HeartSprite> {
        let (cx, cy) = (self.width / 2.0, self.height / 2.0);
        let span = self.width.max(self.height * 2.0);
        self.hearts
            .iter()
            .filter(|heart| heart.released_ms <= self.now_ms)
            .filter_map(|heart| {
                let t = (self.now_ms - heart.released_ms) as f32 / HEART_LIFETIME_MS as f32;
                let eased = 1.0 - (1.0 - t).powi(2);
                let distance = heart.reach * span * eased;
                // Cells are about twice as tall as they are wide.
                let x = cx + heart.dir_x * distance;
                let y = cy + heart.dir_y * distance / 2.0;
                if x < 0.0 || y < 0.0 || x >= self.width || y >= self.height {
                    return None;
                }
                Some(HeartSprite {
                    x: x as u16,
                    y: y as u16,
                    glyph: heart.glyph,
                    fade: 1.0 - t,
                })
            })
            .collect()
    }

    pub fn mote_count(&self) -> usize {
        self.motes.len()
    }

    /// Hearts queued or in flight.
    pub fn pending_hearts(&self) -> usize {
        self.hearts.len()
    }
}
