//! Random similarity transforms (rigid motion + uniform scale) with replay tokens.
//!
//! Purpose
//! - Exercise landmark selection and classification under arbitrary placement:
//!   a solid moved by a random similarity must classify and transform exactly as
//!   its reference mesh does.
//!
//! Model
//! - Rotation from a normalized Gaussian quaternion (uniform on SO(3)); scale
//!   log-uniform in `[scale_min, scale_max]`; translation uniform in a cube.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::{Quaternion, UnitQuaternion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Similarity, Vec3};

/// Sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct MotionCfg {
    pub scale_min: f64,
    pub scale_max: f64,
    /// Half-width of the translation cube.
    pub translate: f64,
    /// Also apply a reflection with probability 1/2.
    pub allow_reflection: bool,
}

impl Default for MotionCfg {
    fn default() -> Self {
        Self {
            scale_min: 0.5,
            scale_max: 3.0,
            translate: 5.0,
            allow_reflection: false,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    fn rng(&self) -> StdRng {
        // splitmix-style mixing so nearby indices do not share streams
        let mut z = self
            .seed
            .wrapping_add(self.index.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        StdRng::seed_from_u64(z ^ (z >> 31))
    }
}

fn gaussian<R: Rng>(rng: &mut R) -> f64 {
    // Box-Muller; u1 kept away from 0 for the log
    let u1: f64 = rng.gen_range(1e-12..1.0);
    let u2: f64 = rng.gen();
    (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos()
}

/// Draw a similarity transform according to `cfg`.
pub fn random_similarity(cfg: &MotionCfg, token: ReplayToken) -> Similarity {
    let mut rng = token.rng();
    let q = Quaternion::new(
        gaussian(&mut rng),
        gaussian(&mut rng),
        gaussian(&mut rng),
        gaussian(&mut rng),
    );
    let mut rotation = UnitQuaternion::from_quaternion(q)
        .to_rotation_matrix()
        .into_inner();
    if cfg.allow_reflection && rng.gen_bool(0.5) {
        let flipped = -rotation.column(0).into_owned();
        rotation.set_column(0, &flipped);
    }
    let lo = cfg.scale_min.max(1e-6).ln();
    let hi = cfg.scale_max.max(cfg.scale_min).max(1e-6).ln();
    let scale = if hi > lo {
        rng.gen_range(lo..hi).exp()
    } else {
        lo.exp()
    };
    let t = cfg.translate.abs();
    let translation = if t > 0.0 {
        Vec3::new(
            rng.gen_range(-t..t),
            rng.gen_range(-t..t),
            rng.gen_range(-t..t),
        )
    } else {
        Vec3::zeros()
    };
    Similarity {
        rotation,
        scale,
        translation,
    }
}
