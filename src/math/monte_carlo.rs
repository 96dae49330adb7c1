//! Monte Carlo estimation of the standard normal density mass.
//!
//! - [`normal`] holds the density and the bounding box it is sampled in
//! - [`density_area`] implements the hit-or-miss estimator

pub mod density_area;
pub mod normal;

pub use density_area::{
    count_hits, estimate_density_area, DensityArea, DensityAreaEstimator, EstimatorConfig,
    Precision, ReplicationSummary,
};
