pub mod error;
pub mod math;

pub use error::{Error, Result};
pub use math::{
    estimate_density_area, DensityArea, DensityAreaEstimator, EstimatorConfig, Precision,
    ReplicationSummary,
};
