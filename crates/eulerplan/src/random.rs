//! Seeded random descriptions for benches, demos and stress runs.
//!
//! Model
//! - Curves are labelled `a`, `b`, ... in order.
//! - Each non-empty subset of curves becomes a zone with probability
//!   `zone_density`; a curve left without zones gets its singleton zone, so the
//!   curve count is exact.
//! - Draws are reproducible from a `ReplayToken` `(seed, index)`.

use std::collections::BTreeSet;
use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::description::{AbstractCurve, Description, Zone};

/// Largest supported curve count (subsets are enumerated as bitmasks).
pub const MAX_CURVES: usize = 16;

/// Errors surfaced by the generator.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratorError {
    InvalidParams { reason: String },
}

impl GeneratorError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid generator params: {reason}"),
        }
    }
}

impl std::error::Error for GeneratorError {}

/// Random description configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RandomDescriptionCfg {
    pub curves: usize,
    /// Probability that a given non-empty subset of curves is a zone.
    pub zone_density: f64,
}

impl Default for RandomDescriptionCfg {
    fn default() -> Self {
        Self {
            curves: 5,
            zone_density: 0.35,
        }
    }
}

impl RandomDescriptionCfg {
    fn validate(&self) -> Result<(), GeneratorError> {
        if self.curves == 0 {
            return Err(GeneratorError::invalid("need at least one curve"));
        }
        if self.curves > MAX_CURVES {
            return Err(GeneratorError::invalid(format!(
                "at most {MAX_CURVES} curves supported"
            )));
        }
        if !(0.0..=1.0).contains(&self.zone_density) {
            return Err(GeneratorError::invalid("zone_density must lie in [0, 1]"));
        }
        Ok(())
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
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }

    #[inline]
    pub fn advanced(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }
}

fn label(i: usize) -> AbstractCurve {
    // `i < MAX_CURVES`, so this stays within a..p.
    AbstractCurve::from(char::from(b'a' + i as u8))
}

/// Draw one random description.
pub fn draw_description(
    cfg: RandomDescriptionCfg,
    tok: ReplayToken,
) -> Result<Description, GeneratorError> {
    cfg.validate()?;
    let mut rng = tok.to_std_rng();
    let n = cfg.curves;
    let curves: Vec<AbstractCurve> = (0..n).map(label).collect();

    let mut zones = BTreeSet::new();
    let mut used = vec![false; n];
    for mask in 1u32..(1u32 << n) {
        if rng.gen_bool(cfg.zone_density) {
            let zone = Zone::from_curves(
                (0..n)
                    .filter(|i| mask & (1 << i) != 0)
                    .map(|i| curves[i].clone()),
            );
            for (i, flag) in used.iter_mut().enumerate() {
                *flag |= mask & (1 << i) != 0;
            }
            zones.insert(zone);
        }
    }
    for (i, curve) in curves.iter().enumerate() {
        if !used[i] {
            zones.insert(Zone::from_curves([curve.clone()]));
        }
    }
    Ok(Description::new(curves.into_iter().collect(), zones))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_are_reproducible() {
        let cfg = RandomDescriptionCfg::default();
        let tok = ReplayToken { seed: 42, index: 3 };
        let d1 = draw_description(cfg, tok).unwrap();
        let d2 = draw_description(cfg, tok).unwrap();
        assert_eq!(d1, d2);
        assert_eq!(d1.num_curves(), cfg.curves);
    }

    #[test]
    fn every_curve_has_a_zone() {
        let cfg = RandomDescriptionCfg {
            curves: 6,
            zone_density: 0.0,
        };
        let d = draw_description(cfg, ReplayToken { seed: 1, index: 0 }).unwrap();
        assert_eq!(d.num_curves(), 6);
        // six singletons plus the outside zone
        assert_eq!(d.num_zones(), 7);
        for c in d.curves() {
            assert!(d.num_zones_in(c) >= 1);
        }
    }

    #[test]
    fn full_density_is_venn() {
        let cfg = RandomDescriptionCfg {
            curves: 4,
            zone_density: 1.0,
        };
        let d = draw_description(cfg, ReplayToken { seed: 9, index: 9 }).unwrap();
        assert_eq!(d.num_zones(), 16);
    }

    #[test]
    fn invalid_params_are_rejected() {
        let tok = ReplayToken { seed: 0, index: 0 };
        for cfg in [
            RandomDescriptionCfg {
                curves: 0,
                zone_density: 0.5,
            },
            RandomDescriptionCfg {
                curves: MAX_CURVES + 1,
                zone_density: 0.5,
            },
            RandomDescriptionCfg {
                curves: 3,
                zone_density: 1.5,
            },
        ] {
            assert!(matches!(
                draw_description(cfg, tok),
                Err(GeneratorError::InvalidParams { .. })
            ));
        }
    }

    #[test]
    fn replay_tokens_advance() {
        let tok = ReplayToken { seed: 5, index: 0 };
        assert_eq!(tok.advanced().index, 1);
        assert_eq!(tok.advanced().seed, 5);
    }
}
