pub mod monte_carlo;

pub use monte_carlo::{
    count_hits, estimate_density_area, DensityArea, DensityAreaEstimator, EstimatorConfig,
    Precision, ReplicationSummary,
};
