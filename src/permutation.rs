//! The ASCON permutation `p^a` / `p^b` on the 320-bit state.

/// Number of rounds used by initialization and finalization.
pub const ROUNDS_A: usize = 12;

/// Number of rounds used between associated-data and message blocks.
pub const ROUNDS_B: usize = 6;

// Round constants, indexed by `ROUNDS_A - rounds + round`
static ROUND_CONSTANTS: [u64; ROUNDS_A] = [
    0xf0, 0xe1, 0xd2, 0xc3, 0xb4, 0xa5, 0x96, 0x87, 0x78, 0x69, 0x5a, 0x4b,
];

#[inline]
fn rotr(x: u64, n: u32) -> u64 {
    x.rotate_right(n)
}

#[inline]
fn constant_addition(s: &mut [u64; 5], round: usize, rounds: usize) {
    s[2] ^= ROUND_CONSTANTS[ROUNDS_A - rounds + round];
}

#[inline]
fn substitution_layer(s: &mut [u64; 5]) {
    s[0] ^= s[4];
    s[4] ^= s[3];
    s[2] ^= s[1];

    let t0 = !s[0] & s[1];
    let t1 = !s[1] & s[2];
    let t2 = !s[2] & s[3];
    let t3 = !s[3] & s[4];
    let t4 = !s[4] & s[0];

    s[0] ^= t1;
    s[1] ^= t2;
    s[2] ^= t3;
    s[3] ^= t4;
    s[4] ^= t0;

    s[1] ^= s[0];
    s[0] ^= s[4];
    s[3] ^= s[2];
    s[2] = !s[2];
}

#[inline]
fn linear_diffusion(s: &mut [u64; 5]) {
    s[0] ^= rotr(s[0], 19) ^ rotr(s[0], 28);
    s[1] ^= rotr(s[1], 61) ^ rotr(s[1], 39);
    s[2] ^= rotr(s[2], 1) ^ rotr(s[2], 6);
    s[3] ^= rotr(s[3], 10) ^ rotr(s[3], 17);
    s[4] ^= rotr(s[4], 7) ^ rotr(s[4], 41);
}

/// Applies `rounds` rounds of the permutation to `state` in place.
///
/// The round constants are taken from the tail of the constant table, so a
/// 6-round call uses different constants than the first six rounds of a
/// 12-round call. `rounds` is at most `ROUNDS_A`.
pub(crate) fn permute(state: &mut [u64; 5], rounds: usize) {
    debug_assert!(rounds <= ROUNDS_A);

    for round in 0..rounds {
        constant_addition(state, round, rounds);
        substitution_layer(state);
        linear_diffusion(state);
    }
}

/// `p^a`: the 12-round permutation used by initialization and finalization.
pub fn permute_a(state: &mut [u64; 5]) {
    permute(state, ROUNDS_A);
}

/// `p^b`: the 6-round permutation applied after each data block.
pub fn permute_b(state: &mut [u64; 5]) {
    permute(state, ROUNDS_B);
}
