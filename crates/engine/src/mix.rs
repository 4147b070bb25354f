//! Composite key construction (RMX: rotate, mask, XOR).
//!
//! Folds two 128-bit term identifiers into one 128-bit order-sensitive
//! key. Each index axis (SP, PO, OS) uses its own rotation amount and bit
//! mask pair, so a collision in one axis's key space is statistically
//! independent of collisions in another.
//!
//! This is engineering-grade mixing, not cryptography: the contract is
//! avalanche (a single flipped input bit flips about half the output
//! bits), asymmetry (`mix(a, b) != mix(b, a)` for `a != b`), and no
//! trivial linear inversion.

/// First finalizer multiplier (odd prime).
const P1: u64 = 0xB865_FA7A_CC7F_EAC7;
/// Second finalizer multiplier (odd prime).
const P2: u64 = 0xED46_B9F5_1E7B_869F;
/// Finalizer xor constant.
const P3: u64 = 0xF6A3_5CFA_8F3D_C34F;

/// Fold weight for term `a`: first 64-bit chunk of 2^128/phi.
const C1: u64 = 0x9E37_79B9_7F4A_7C15;
/// Fold weight for term `b`: second 64-bit chunk of 2^128/phi.
///
/// Weighting the two terms differently is what guarantees asymmetry of
/// the fold before the axis round even runs.
const C2: u64 = 0xF39C_C060_5CED_C834;

const FIX_R: u32 = 33;

/// Per-axis parameterization of the rotate-and-mask round.
///
/// The rotation amount must be odd (hence co-prime with 64, so repeated
/// rotation reaches a full cycle) and the two masks must be complements
/// so every bit of the opposite half perturbs exactly one output half.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Axis {
    /// Left-rotation amount applied to both folded halves.
    pub rotation: u32,
    /// Mask selecting which low-half bits perturb the high half.
    pub high_mask: u64,
    /// Mask selecting which high-half bits perturb the low half.
    pub low_mask: u64,
}

/// Subject-predicate axis: alternating single bits.
pub const SP: Axis = Axis {
    rotation: 3,
    high_mask: 0xAAAA_AAAA_AAAA_AAAA,
    low_mask: 0x5555_5555_5555_5555,
};

/// Predicate-object axis: alternating 2-bit groups.
pub const PO: Axis = Axis {
    rotation: 11,
    high_mask: 0xCCCC_CCCC_CCCC_CCCC,
    low_mask: 0x3333_3333_3333_3333,
};

/// Object-subject axis: alternating 4-bit nibbles.
pub const OS: Axis = Axis {
    rotation: 25,
    high_mask: 0xF0F0_F0F0_F0F0_F0F0,
    low_mask: 0x0F0F_0F0F_0F0F_0F0F,
};

/// 64-bit finalizer-style mix: xor-shift, multiply, xor-shift, multiply,
/// xor-shift, xor-constant. Total over u64; overflow wraps.
#[inline]
fn fmix64(mut x: u64) -> u64 {
    x ^= x >> FIX_R;
    x = x.wrapping_mul(P1);
    x ^= x >> FIX_R;
    x = x.wrapping_mul(P2);
    x ^= x >> FIX_R;
    x ^ P3
}

/// Fold two 128-bit terms into one 128-bit composite key on the given
/// axis.
///
/// Pure and total: every (a, b, axis) combination produces a key, and the
/// same combination always produces the same key.
pub fn composite(a: u128, b: u128, axis: &Axis) -> u128 {
    // Mix each 64-bit half of each term independently.
    let ha = fmix64((a >> 64) as u64);
    let la = fmix64(a as u64);
    let hb = fmix64((b >> 64) as u64);
    let lb = fmix64(b as u64);

    // Weighted fold: b's contribution carries a different multiplier
    // than a's, so swapping the terms changes both halves.
    let high = ha.wrapping_mul(C1).wrapping_add(hb.wrapping_mul(C2));
    let low = la.wrapping_mul(C1).wrapping_add(lb.wrapping_mul(C2));

    // Axis round: each rotated half is perturbed by a masked view of the
    // opposite half.
    let rh = high.rotate_left(axis.rotation) ^ (low & axis.high_mask);
    let rl = low.rotate_left(axis.rotation) ^ (high & axis.low_mask);

    ((fmix64(rh) as u128) << 64) | fmix64(rl) as u128
}
