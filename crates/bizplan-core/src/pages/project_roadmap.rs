use crate::metrics::{roadmap_overview, RoadmapOverview};
use crate::seed::seed_milestones;
use crate::Milestone;

/// Read-only milestone timeline.
#[derive(Debug, Clone, Default)]
pub struct ProjectRoadmapPage {
    milestones: Vec<Milestone>,
}

impl ProjectRoadmapPage {
    pub fn new(milestones: Vec<Milestone>) -> Self {
        Self { milestones }
    }

    pub fn with_seed_data() -> Self {
        Self::new(seed_milestones())
    }

    pub fn milestones(&self) -> &[Milestone] {
        &self.milestones
    }

    pub fn overview(&self) -> RoadmapOverview {
        roadmap_overview(&self.milestones)
    }
}
