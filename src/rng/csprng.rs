//! ChaCha20-based CSPRNG
//!
//! This module implements the cryptographically secure pseudorandom number
//! generator behind prime candidates and Miller–Rabin witnesses.
//!
//! The crate consumes randomness exclusively as 32-bit limbs, one word at a
//! time, from many short-lived generators (one per prime-search worker). The
//! generator is shaped around that: it is a **fast-key-erasure** design that
//! works in ChaCha words end to end. Each ChaCha20 block is split in half,
//! the first eight words immediately replacing the secret key and the last
//! eight becoming the output buffer that [`Csprng::next_u32`] drains.
//! Output words are zeroed as they are handed out.
//!
//! Because the key never survives past the block it produced, there is no
//! block counter and no nonce to manage, and compromise of a generator's
//! state reveals nothing about the limbs it already produced.

use crate::os::sys_random;

/// The ChaCha20 constant words, the ASCII string `"expand 32-byte k"` as
/// little-endian `u32` values. Fixed, public, non-secret.
const CHACHA_CONSTANTS: [u32; 4] = [0x6170_7865, 0x3320_646e, 0x7962_2d32, 0x6b20_6574];

/// The word quadruples mixed by one ChaCha20 double round: the four columns
/// of the state matrix followed by its four diagonals.
const MIX_PATTERN: [[usize; 4]; 8] = [
    [0, 4, 8, 12],
    [1, 5, 9, 13],
    [2, 6, 10, 14],
    [3, 7, 11, 15],
    [0, 5, 10, 15],
    [1, 6, 11, 12],
    [2, 7, 8, 13],
    [3, 4, 9, 14],
];

/// Cryptographically secure pseudorandom number generator.
///
/// Construction seeds the key from the operating system (or from an
/// explicit seed); every eighth draw ratchets the key forward through one
/// ChaCha20 block. Instances are cheap, single-threaded, and never shared:
/// each prime-search worker builds its own.
pub struct Csprng {
    /// Current secret key, replaced after every generated block.
    key: [u32; 8],

    /// Words still available for output; spent entries are wiped.
    buffer: [u32; 8],

    /// Index of the next unspent word in `buffer`.
    next: usize,
}

impl Csprng {
    /// Creates a generator keyed from operating-system entropy.
    pub fn new() -> Self {
        let mut seed = [0u8; 32];
        sys_random(&mut seed);

        Self::from_seed(seed)
    }

    /// Creates a generator from an explicit 256-bit seed.
    ///
    /// The seed must be uniformly random and unpredictable. It is consumed
    /// into the key words and the buffer is wiped behind it.
    pub fn from_seed(mut seed: [u8; 32]) -> Self {
        let mut key = [0u32; 8];
        for (i, word) in key.iter_mut().enumerate() {
            let offset = 4 * i;
            *word = u32::from_le_bytes([
                seed[offset],
                seed[offset + 1],
                seed[offset + 2],
                seed[offset + 3],
            ]);
        }
        seed.fill(0);

        // An exhausted buffer forces a ratchet on the first draw.
        Self {
            key,
            buffer: [0u32; 8],
            next: 8,
        }
    }

    /// Draws one uniformly distributed 32-bit word.
    ///
    /// This is the limb-sized sampling primitive behind random big integers
    /// and witness bit counts. The word is erased from the buffer as it is
    /// returned.
    pub fn next_u32(&mut self) -> u32 {
        if self.next == self.buffer.len() {
            self.ratchet();
        }

        let word = self.buffer[self.next];
        self.buffer[self.next] = 0;
        self.next += 1;

        word
    }

    /// Generates one ChaCha20 block under the current key, then erases that
    /// key: the front half of the block becomes the next key, the back half
    /// becomes the output buffer.
    fn ratchet(&mut self) {
        let block = chacha20_block(&self.key);

        self.key.copy_from_slice(&block[..8]);
        self.buffer.copy_from_slice(&block[8..]);
        self.next = 0;
    }
}

impl Default for Csprng {
    /// Equivalent to [`Csprng::new`].
    fn default() -> Self {
        Self::new()
    }
}

/// One ChaCha20 quarter round over four words, returned by value.
///
/// Addition modulo 2³², XOR, and the fixed 16/12/8/7 left rotations from
/// RFC 8439; this is the sole source of diffusion in the permutation.
#[inline(always)]
fn quarter_round(mut a: u32, mut b: u32, mut c: u32, mut d: u32) -> (u32, u32, u32, u32) {
    a = a.wrapping_add(b);
    d = (d ^ a).rotate_left(16);

    c = c.wrapping_add(d);
    b = (b ^ c).rotate_left(12);

    a = a.wrapping_add(b);
    d = (d ^ a).rotate_left(8);

    c = c.wrapping_add(d);
    b = (b ^ c).rotate_left(7);

    (a, b, c, d)
}

/// Produces one 16-word ChaCha20 keystream block under `key`.
///
/// The state words reserved for the block counter and nonce stay zero: the
/// key is discarded after a single block, so no `(key, counter)` pair can
/// ever repeat. Ten double rounds (the standard 20-round setting) are
/// driven off [`MIX_PATTERN`], followed by the feed-forward addition of the
/// input state.
fn chacha20_block(key: &[u32; 8]) -> [u32; 16] {
    let mut state = [0u32; 16];
    state[..4].copy_from_slice(&CHACHA_CONSTANTS);
    state[4..12].copy_from_slice(key);

    let input = state;

    for _ in 0..10 {
        for &[a, b, c, d] in MIX_PATTERN.iter() {
            let (x, y, z, w) = quarter_round(state[a], state[b], state[c], state[d]);
            state[a] = x;
            state[b] = y;
            state[c] = z;
            state[d] = w;
        }
    }

    for (word, start) in state.iter_mut().zip(input.iter()) {
        *word = word.wrapping_add(*start);
    }

    state
}
