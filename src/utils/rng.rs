use rand_chacha::ChaCha20Rng;
use rand::{RngCore, SeedableRng};

/// Draw a master seed from OS entropy. Called once per process; every
/// temperature point derives its stream from the result.
pub fn entropy_seed() -> u64 {
    ChaCha20Rng::from_entropy().next_u64()
}

/// Mix (master, stream) into a well-spread 64-bit seed (splitmix64 finaliser).
pub fn derive_seed(master: u64, stream: usize) -> u64 {
    let mut x = master ^ ((stream as u64).wrapping_mul(0x9E3779B97F4A7C15));
    x = (x ^ (x >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94D049BB133111EB);
    x ^ (x >> 31)
}

/// Deterministic RNG for one temperature point of a scan.
pub fn point_rng(master: u64, point: usize) -> ChaCha20Rng {
    ChaCha20Rng::seed_from_u64(derive_seed(master, point))
}
