use std::fmt;
use std::path::Path;

use crate::data::loader::write_atomic;
use crate::error::Result;

// ---------------------------------------------------------------------------
// Distributions
// ---------------------------------------------------------------------------

/// Shapes of the synthetic key sets the plotter is used to inspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distribution {
    Uniform,
    Lognormal,
    Exponential,
    /// Deterministic staircase: plateaus of `3 * epsilon` equal keys.
    Stair,
}

impl Distribution {
    pub const ALL: [Distribution; 4] = [
        Distribution::Uniform,
        Distribution::Lognormal,
        Distribution::Exponential,
        Distribution::Stair,
    ];

    /// File stem used for `<stem>.txt` / `<stem>.png`.
    pub fn file_stem(self) -> &'static str {
        match self {
            Distribution::Uniform => "uniform",
            Distribution::Lognormal => "lognormal",
            Distribution::Exponential => "expo",
            Distribution::Stair => "stair",
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_stem())
    }
}

/// Minimal deterministic PRNG (xoshiro256**)
pub struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    pub fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    pub fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    pub fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }

    /// Inverse-CDF sample of an exponential distribution with rate `lambda`.
    pub fn exponential(&mut self, lambda: f64) -> f64 {
        -(1.0 - self.next_f64()).ln() / lambda
    }

    pub fn lognormal(&mut self, mu: f64, sigma: f64) -> f64 {
        self.gauss(mu, sigma).exp()
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Rescale a sorted sequence so its first element maps to 0 and its last
/// to 1. A constant sequence maps to all zeros.
pub fn normalize(data: &mut [f64]) {
    let (Some(&first), Some(&last)) = (data.first(), data.last()) else {
        return;
    };
    let span = last - first;
    if span.abs() < f64::EPSILON {
        data.iter_mut().for_each(|v| *v = 0.0);
        return;
    }
    for v in data.iter_mut() {
        *v = (*v - first) / span;
    }
}

/// Draw `len` sorted, normalized samples of `dist`.
pub fn generate(dist: Distribution, len: usize, epsilon: usize, rng: &mut SimpleRng) -> Vec<f64> {
    let mut data: Vec<f64> = match dist {
        Distribution::Uniform => (0..len).map(|_| rng.next_f64()).collect(),
        Distribution::Lognormal => (0..len).map(|_| rng.lognormal(0.0, 1.0)).collect(),
        Distribution::Exponential => (0..len).map(|_| rng.exponential(1.0)).collect(),
        Distribution::Stair => {
            let width = (epsilon * 3).max(1);
            (0..len)
                .map(|i| 1.001f64.powi((i / width) as i32 + 1))
                .collect()
        }
    };
    data.sort_by(f64::total_cmp);
    normalize(&mut data);
    data
}

/// Serialize values as one space-separated line.
pub fn format_series(values: &[f64]) -> String {
    let mut out = values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    out.push('\n');
    out
}

pub fn write_series(path: &Path, values: &[f64]) -> Result<()> {
    write_atomic(path, format_series(values).as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_sorted(v: &[f64]) -> bool {
        v.windows(2).all(|w| w[0] <= w[1])
    }

    #[test]
    fn rng_is_deterministic() {
        let mut a = SimpleRng::new(42);
        let mut b = SimpleRng::new(42);
        for _ in 0..16 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
        let u = SimpleRng::new(7).next_f64();
        assert!((0.0..1.0).contains(&u));
    }

    #[test]
    fn every_distribution_is_sorted_and_normalized() {
        let mut rng = SimpleRng::new(1);
        for dist in Distribution::ALL {
            let data = generate(dist, 2000, 128, &mut rng);
            assert_eq!(data.len(), 2000);
            assert!(is_sorted(&data), "{dist} not sorted");
            assert_eq!(data[0], 0.0);
            assert!((data[1999] - 1.0).abs() < 1e-12, "{dist} not normalized");
            assert!(data.iter().all(|v| (0.0..=1.0).contains(v)));
        }
    }

    #[test]
    fn stair_has_plateaus_of_three_epsilon() {
        let mut rng = SimpleRng::new(0);
        let data = generate(Distribution::Stair, 1000, 4, &mut rng);
        assert!(data[..12].iter().all(|&v| v == data[0]));
        assert!(data[12] > data[11]);
    }

    #[test]
    fn normalize_handles_constant_and_empty() {
        let mut c = vec![3.0; 4];
        normalize(&mut c);
        assert_eq!(c, vec![0.0; 4]);

        let mut e: Vec<f64> = Vec::new();
        normalize(&mut e);
        assert!(e.is_empty());
    }

    #[test]
    fn formats_single_space_separated_line() {
        assert_eq!(format_series(&[0.0, 0.5, 1.0]), "0 0.5 1\n");
    }
}
