//! Deterministic 64-bit key stream backed by MT19937.
//!
//! The previously shipped key tables were produced with CPython's `random`
//! module, and the engine's transposition data is hashed against those exact
//! keys. Seeding and bit extraction therefore follow CPython bit for bit:
//! `random.seed(n)` feeds the 32-bit words of `n` to `init_by_array`, and
//! `random.getrandbits(64)` assembles each draw from two consecutive 32-bit
//! outputs, low word first.

use rand_mt::Mt;

pub struct KeyStream {
    mt: Mt,
}

impl KeyStream {
    pub fn new(seed: u32) -> Self {
        // A seed below 2^32 turns into a single-element init_by_array key.
        KeyStream {
            mt: Mt::new_with_key([seed]),
        }
    }

    /// Draws one 64-bit key, matching `random.getrandbits(64)`.
    pub fn next_key(&mut self) -> u64 {
        let lo = u64::from(self.mt.next_u32());
        let hi = u64::from(self.mt.next_u32());
        hi << 32 | lo
    }
}
