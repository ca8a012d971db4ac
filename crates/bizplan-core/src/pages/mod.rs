//! Page controllers. Each page owns its state and exposes update functions;
//! nothing is shared between pages.

pub mod business_model;
pub mod dashboard;
pub mod implementation_plan;
pub mod pitch_generator;
pub mod project_roadmap;
pub mod resource_planning;

pub use business_model::BusinessModelPage;
pub use dashboard::{Dashboard, Tool};
pub use implementation_plan::ImplementationPlanPage;
pub use pitch_generator::PitchGeneratorPage;
pub use project_roadmap::ProjectRoadmapPage;
pub use resource_planning::ResourcePlanningPage;
