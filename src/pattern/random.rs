use crate::io::configuration::RANDOM_FILL_PROBABILITY;
use crate::pattern::mask::DotMask;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Random mask source owned by a session
///
/// One generator lives for the whole session and advances once per draw;
/// it is never reseeded per frame.
#[derive(Debug, Clone)]
pub struct MaskRng {
    rng: StdRng,
}

impl MaskRng {
    /// Seed from operating system entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic source for reproducible runs
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform mask in `1..=255`
    pub fn non_blank_mask(&mut self) -> DotMask {
        DotMask::new(self.rng.random_range(1..=u8::MAX))
    }

    /// Non-blank mask with probability [`RANDOM_FILL_PROBABILITY`], else blank
    pub fn sparse_mask(&mut self) -> DotMask {
        if self.rng.random::<f64>() <= RANDOM_FILL_PROBABILITY {
            self.non_blank_mask()
        } else {
            DotMask::BLANK
        }
    }
}

impl Default for MaskRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
