//! Hit-or-miss Monte Carlo estimate of the standard normal mass on `[-5, 5]`.
//!
//! Points are drawn uniformly from the rectangle `[-5, 5) x [0, 0.5)`. A point
//! is a hit when it falls strictly below the density curve, and the fraction
//! of hits scaled by the rectangle's area (5) estimates the area under the
//! curve. The true value is [`TRUE_MASS`](super::normal::TRUE_MASS), about
//! 0.9999994, and the estimate's standard error shrinks as `O(1/sqrt(n))`.
//!
//! # Reproducibility
//!
//! Every estimator owns its generator and seeds it once, at construction.
//! Use [`DensityAreaEstimator::seeded`] or set [`EstimatorConfig::seed`] for
//! repeatable runs; leave the seed unset to draw one from the operating
//! system.

use log::{debug, trace};
use rand::rngs::OsRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rand_distr::Uniform;

use crate::error::{Error, Result};
use crate::math::monte_carlo::normal::{
    legacy_standard_normal_pdf, standard_normal_pdf, BOUND, BOX_AREA, CEILING,
};

/// Arithmetic used when testing points against the density.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precision {
    /// Double precision with the full-precision value of pi.
    #[default]
    Double,
    /// Single-precision intermediates and pi truncated to `3.14159`, matching
    /// the rounding of the legacy routine.
    Legacy,
}

impl Precision {
    /// Returns true if `(x, y)` lies strictly below the density curve.
    pub fn accepts(self, x: f64, y: f64) -> bool {
        match self {
            Precision::Double => y < standard_normal_pdf(x),
            Precision::Legacy => (y as f32) < legacy_standard_normal_pdf(x as f32),
        }
    }
}

/// Configuration for a [`DensityAreaEstimator`].
#[derive(Debug, Clone)]
pub struct EstimatorConfig {
    /// Sample count used by [`DensityAreaEstimator::estimate_default`]
    pub samples: usize,
    /// Fixed seed for the generator; `None` seeds from the OS entropy source
    pub seed: Option<u64>,
    /// Arithmetic used for the acceptance test
    pub precision: Precision,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            samples: 5000,
            seed: None,
            precision: Precision::Double,
        }
    }
}

/// Outcome of a single estimation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityArea {
    /// Number of trials performed
    pub samples: usize,
    /// Number of trials that fell below the curve
    pub hits: usize,
    /// Arithmetic the run used
    pub precision: Precision,
}

impl DensityArea {
    /// Estimated area: the bounding box area scaled by the hit fraction.
    pub fn area(&self) -> f64 {
        let area = BOX_AREA * self.hits as f64 / self.samples as f64;
        match self.precision {
            Precision::Double => area,
            Precision::Legacy => f64::from(area as f32),
        }
    }

    /// Binomial standard error of [`area`](Self::area).
    pub fn standard_error(&self) -> f64 {
        let n = self.samples as f64;
        let p = self.hits as f64 / n;
        BOX_AREA * (p * (1.0 - p) / n).sqrt()
    }
}

/// Spread of repeated estimates at a fixed sample count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReplicationSummary {
    /// Trials per estimate
    pub samples: usize,
    /// Number of estimates taken
    pub replications: usize,
    /// Mean of the estimates
    pub mean: f64,
    /// Sample standard deviation of the estimates
    pub std_dev: f64,
    /// Smallest estimate
    pub min: f64,
    /// Largest estimate
    pub max: f64,
}

/// Counts the points lying strictly below the density curve.
///
/// # Examples
///
/// ```
/// use intpdf::math::monte_carlo::density_area::{count_hits, Precision};
///
/// // density(0) ≈ 0.399, so the first point is a hit and the second is not
/// let points = [(0.0, 0.1), (3.0, 0.1)];
/// assert_eq!(count_hits(points, Precision::Double), 1);
/// ```
pub fn count_hits<I>(points: I, precision: Precision) -> usize
where
    I: IntoIterator<Item = (f64, f64)>,
{
    points
        .into_iter()
        .filter(|&(x, y)| precision.accepts(x, y))
        .count()
}

/// Estimates the standard normal mass on `[-5, 5]` with `n` trials drawn
/// from a caller-supplied generator.
///
/// Returns [`Error::InvalidArgument`] when `n` is zero.
///
/// # Examples
///
/// ```
/// use intpdf::math::monte_carlo::density_area::estimate_density_area;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha20Rng;
///
/// let mut rng = ChaCha20Rng::seed_from_u64(7);
/// let area = estimate_density_area(&mut rng, 10_000).unwrap();
/// assert!((0.0..=5.0).contains(&area));
/// ```
pub fn estimate_density_area<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Result<f64> {
    run(rng, n, Precision::Double).map(|outcome| outcome.area())
}

fn run<R: Rng + ?Sized>(rng: &mut R, n: usize, precision: Precision) -> Result<DensityArea> {
    if n == 0 {
        return Err(Error::invalid_argument("sample count must be positive"));
    }

    let xs = Uniform::new(-BOUND, BOUND);
    let ys = Uniform::new(0.0, CEILING);
    let points = (0..n).map(|_| (rng.sample(xs), rng.sample(ys)));
    let hits = count_hits(points, precision);

    let outcome = DensityArea {
        samples: n,
        hits,
        precision,
    };
    debug!(
        "density area: {} hits in {} samples, area {:.6}",
        hits,
        n,
        outcome.area()
    );
    Ok(outcome)
}

/// Monte Carlo estimator for the area under the standard normal density.
///
/// # Examples
///
/// ```
/// use intpdf::DensityAreaEstimator;
///
/// let mut first = DensityAreaEstimator::seeded(42);
/// let mut second = DensityAreaEstimator::seeded(42);
/// assert_eq!(first.estimate(1000).unwrap(), second.estimate(1000).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct DensityAreaEstimator<R = ChaCha20Rng> {
    rng: R,
    config: EstimatorConfig,
}

impl DensityAreaEstimator<ChaCha20Rng> {
    /// Creates an estimator backed by ChaCha20, seeded from `config.seed` or,
    /// when unset, from the operating system's entropy source.
    pub fn new(config: EstimatorConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => {
                trace!("seeding estimator with fixed seed {}", seed);
                ChaCha20Rng::seed_from_u64(seed)
            }
            None => {
                trace!("seeding estimator from OS entropy");
                ChaCha20Rng::from_rng(OsRng)?
            }
        };
        Ok(Self { rng, config })
    }

    /// Creates a double-precision estimator with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
            config: EstimatorConfig {
                seed: Some(seed),
                ..EstimatorConfig::default()
            },
        }
    }
}

impl<R: Rng> DensityAreaEstimator<R> {
    /// Creates an estimator that draws from an injected generator.
    /// `config.seed` is ignored.
    pub fn with_rng(rng: R, config: EstimatorConfig) -> Self {
        Self { rng, config }
    }

    /// Returns the estimator's configuration.
    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Runs `n` trials and returns the estimated area, always within `[0, 5]`.
    ///
    /// Returns [`Error::InvalidArgument`] when `n` is zero.
    pub fn estimate(&mut self, n: usize) -> Result<f64> {
        self.estimate_detailed(n).map(|outcome| outcome.area())
    }

    /// Like [`estimate`](Self::estimate), keeping the hit count.
    pub fn estimate_detailed(&mut self, n: usize) -> Result<DensityArea> {
        run(&mut self.rng, n, self.config.precision)
    }

    /// Runs [`estimate`](Self::estimate) with the configured sample count.
    pub fn estimate_default(&mut self) -> Result<f64> {
        self.estimate(self.config.samples)
    }

    /// Repeats the estimate `replications` times at `n` trials each and
    /// summarises the spread.
    ///
    /// Mean and variance are accumulated with Welford's algorithm. Requires
    /// at least two replications so the sample standard deviation is defined.
    pub fn replicate(&mut self, n: usize, replications: usize) -> Result<ReplicationSummary> {
        if replications < 2 {
            return Err(Error::invalid_argument(
                "at least two replications are required",
            ));
        }

        let mut mean = 0.0;
        let mut m2 = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for k in 1..=replications {
            let value = self.estimate(n)?;
            let delta = value - mean;
            mean += delta / k as f64;
            m2 += delta * (value - mean);
            min = min.min(value);
            max = max.max(value);
        }

        Ok(ReplicationSummary {
            samples: n,
            replications,
            mean,
            std_dev: (m2 / (replications - 1) as f64).sqrt(),
            min,
            max,
        })
    }
}
