//! Test-only helpers shared by the unit test modules.

use rand::RngCore;

/// Generator that always yields the same word.
///
/// `FixedRng(0)` makes every `random_bool(p)` with `p > 0` return `true`;
/// `FixedRng(u64::MAX)` makes every `random_bool(p)` with `p < 1` return
/// `false`.
pub struct FixedRng(pub u64);

impl RngCore for FixedRng {
    fn next_u32(&mut self) -> u32 {
        u32::try_from(self.0 >> 32).unwrap_or(u32::MAX)
    }

    fn next_u64(&mut self) -> u64 {
        self.0
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(self.0.to_le_bytes().first().copied().unwrap_or(0));
    }
}
