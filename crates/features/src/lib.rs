//! Feature engineering for daily precipitation forecasting.
//!
//! Turns a concatenated sequence of raw daily observations into a
//! model-ready feature table, and splits it chronologically into train
//! and test partitions. All derived features for a given day depend only
//! on strictly earlier days.

mod builder;
mod dataset;
mod error;
mod spec;
mod split;

pub use builder::build;
pub use dataset::{Dataset, FeatureRow};
pub use error::{FeatureError, SplitError};
pub use spec::{PrecipFeature, PRECIP_FEATURES};
pub use split::split;
