//! Blum Blum Shub pseudo-random generator.
//!
//! # Reference
//!
//! Blum, L., Blum, M. & Shub, M. (1986). "A Simple Unpredictable
//! Pseudo-Random Number Generator", *SIAM Journal on Computing* 15(2),
//! 364–383.

use rand::RngCore;

/// Blum Blum Shub generator: `x_{k+1} = x_k^2 mod (p * q)`.
///
/// The low bit of each successive state forms the output bit stream;
/// integers are folded from 32 (or 64) consecutive bits. Implements
/// [`RngCore`], so it is interchangeable with the platform generator
/// behind any `R: Rng` bound.
///
/// Much slower than the platform generator (one modular squaring per
/// output bit); useful when a generator with a number-theoretic
/// security argument is wanted.
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use u_heurkit::random::BlumBlumShub;
///
/// let mut rng = BlumBlumShub::new(1_000_003, 999_983, 191);
/// let x: f64 = rng.random_range(0.0..1.0);
/// assert!((0.0..1.0).contains(&x));
/// ```
#[derive(Debug, Clone)]
pub struct BlumBlumShub {
    modulus: u64,
    state: u64,
}

impl BlumBlumShub {
    /// Creates a generator from two Blum primes and a seed.
    ///
    /// # Panics
    ///
    /// Panics unless `p ≡ 3 (mod 4)`, `q ≡ 3 (mod 4)`, the seed is
    /// greater than 1 and the seed is coprime with `p * q`. These are
    /// programmer errors, not runtime conditions.
    pub fn new(p: u64, q: u64, seed: u64) -> Self {
        assert!(p % 4 == 3, "p must be a Blum prime (p % 4 == 3)");
        assert!(q % 4 == 3, "q must be a Blum prime (q % 4 == 3)");
        let modulus = p
            .checked_mul(q)
            .expect("p * q must fit in 64 bits");
        assert!(seed > 1, "seed must be greater than 1");
        assert!(gcd(seed, modulus) == 1, "seed must be coprime with p * q");

        let mut rng = Self {
            modulus,
            state: seed % modulus,
        };
        // Discard x_0; the stream starts at x_1.
        rng.step();
        rng
    }

    /// Squares the state modulo `p * q` and returns the new low bit.
    fn step(&mut self) -> u64 {
        let s = self.state as u128;
        self.state = (s * s % self.modulus as u128) as u64;
        self.state & 1
    }

    /// Folds `n` successive stream bits into an integer, oldest bit first.
    fn take_bits(&mut self, n: u32) -> u64 {
        let mut acc = 0u64;
        for _ in 0..n {
            acc = (acc << 1) | self.step();
        }
        acc
    }
}

impl RngCore for BlumBlumShub {
    fn next_u32(&mut self) -> u32 {
        self.take_bits(32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.take_bits(64)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        rand::rand_core::impls::fill_bytes_via_next(self, dest)
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}
