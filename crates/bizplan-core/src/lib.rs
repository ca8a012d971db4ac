pub mod canvas;
pub mod config_manager;
pub mod error;
pub mod metrics;
pub mod pages;
pub mod seed;
pub mod traits;
pub mod types;

pub use canvas::*;
pub use config_manager::*;
pub use error::*;
pub use metrics::{CostSummary, PhaseProgress, RoadmapOverview};
pub use pages::*;
pub use traits::*;
pub use types::*;
