use crate::metrics::{
    self, CostSummary, DEFAULT_DURATION_MONTHS, DEFAULT_WEEKLY_HOURS_POOL, MAX_DURATION_MONTHS,
    MIN_DURATION_MONTHS,
};
use crate::seed::{seed_resources, seed_team};
use crate::{Resource, TeamMember};

/// Team, tooling and budget planner.
#[derive(Debug, Clone)]
pub struct ResourcePlanningPage {
    members: Vec<TeamMember>,
    resources: Vec<Resource>,
    duration_months: u32,
    weekly_hours_pool: f64,
}

impl ResourcePlanningPage {
    pub fn new(members: Vec<TeamMember>, resources: Vec<Resource>) -> Self {
        Self {
            members,
            resources,
            duration_months: DEFAULT_DURATION_MONTHS,
            weekly_hours_pool: DEFAULT_WEEKLY_HOURS_POOL,
        }
    }

    pub fn with_seed_data() -> Self {
        Self::new(seed_team(), seed_resources())
    }

    pub fn with_weekly_hours_pool(mut self, hours: f64) -> Self {
        self.weekly_hours_pool = hours;
        self
    }

    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn duration_months(&self) -> u32 {
        self.duration_months
    }

    pub fn weekly_hours_pool(&self) -> f64 {
        self.weekly_hours_pool
    }

    /// Sets the project duration, clamped to the slider range.
    pub fn set_duration(&mut self, months: u32) {
        self.duration_months = months.clamp(MIN_DURATION_MONTHS, MAX_DURATION_MONTHS);
    }

    pub fn member_weekly_hours(&self, member: &TeamMember) -> f64 {
        metrics::member_weekly_hours(member, self.weekly_hours_pool)
    }

    pub fn team_monthly_cost(&self) -> f64 {
        metrics::team_monthly_cost(&self.members, self.weekly_hours_pool)
    }

    pub fn resource_monthly_cost(&self) -> f64 {
        metrics::resource_monthly_cost(&self.resources)
    }

    pub fn total_project_cost(&self) -> f64 {
        metrics::total_project_cost(
            &self.members,
            &self.resources,
            self.weekly_hours_pool,
            self.duration_months,
        )
    }

    pub fn cost_summary(&self) -> CostSummary {
        metrics::cost_summary(
            &self.members,
            &self.resources,
            self.weekly_hours_pool,
            self.duration_months,
        )
    }

    pub fn required_resources(&self) -> impl Iterator<Item = &Resource> {
        self.resources.iter().filter(|r| r.required)
    }
}

impl Default for ResourcePlanningPage {
    fn default() -> Self {
        Self::with_seed_data()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_costs() {
        let page = ResourcePlanningPage::with_seed_data();
        // 128*85 + 160*90 + 96*75 + 144*95
        assert_eq!(page.team_monthly_cost(), 46_160.0);
        assert_eq!(page.resource_monthly_cost(), 529.0);

        let summary = page.cost_summary();
        assert_eq!(summary.duration_months, 6);
        assert_eq!(summary.total_monthly_cost, 46_689.0);
        assert_eq!(summary.total_project_cost, 280_134.0);
        assert_eq!(page.total_project_cost(), summary.total_project_cost);
    }

    #[test]
    fn duration_is_clamped_to_slider_range() {
        let mut page = ResourcePlanningPage::with_seed_data();
        page.set_duration(0);
        assert_eq!(page.duration_months(), 1);
        page.set_duration(36);
        assert_eq!(page.duration_months(), 24);
        page.set_duration(12);
        assert_eq!(page.duration_months(), 12);
    }

    #[test]
    fn required_resources_filter() {
        let page = ResourcePlanningPage::with_seed_data();
        assert_eq!(page.required_resources().count(), 3);
    }

    #[test]
    fn custom_pool_scales_team_cost() {
        let base = ResourcePlanningPage::with_seed_data();
        let doubled = ResourcePlanningPage::with_seed_data().with_weekly_hours_pool(320.0);
        assert_eq!(doubled.team_monthly_cost(), 2.0 * base.team_monthly_cost());
        assert_eq!(doubled.resource_monthly_cost(), base.resource_monthly_cost());
    }
}
