//! Derived planning metrics: phase progress, team/resource cost and roadmap
//! overview. All functions are pure over in-memory slices.

use crate::{Milestone, MilestoneStatus, Phase, Resource, Task, TaskStatus, TeamMember};
use serde::{Deserialize, Serialize};

/// Organisation-wide weekly hours shared by the whole team.
pub const DEFAULT_WEEKLY_HOURS_POOL: f64 = 160.0;

pub const MIN_DURATION_MONTHS: u32 = 1;
pub const MAX_DURATION_MONTHS: u32 = 24;
pub const DEFAULT_DURATION_MONTHS: u32 = 6;

/// Percentage of tasks in `phase` that are completed, or 0 when the phase has no tasks.
pub fn phase_progress(tasks: &[Task], phase: Phase) -> f64 {
    let (total, completed) = count_phase(tasks, phase);
    if total == 0 {
        return 0.0;
    }
    100.0 * completed as f64 / total as f64
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseProgress {
    pub phase: Phase,
    pub task_count: usize,
    pub completed_count: usize,
    pub progress: f64,
}

/// Progress for every phase, in phase order.
pub fn phase_overview(tasks: &[Task]) -> Vec<PhaseProgress> {
    Phase::ALL
        .into_iter()
        .map(|phase| {
            let (task_count, completed_count) = count_phase(tasks, phase);
            PhaseProgress {
                phase,
                task_count,
                completed_count,
                progress: phase_progress(tasks, phase),
            }
        })
        .collect()
}

pub fn total_estimated_hours(tasks: &[Task]) -> u64 {
    tasks.iter().map(|t| u64::from(t.estimated_hours)).sum()
}

fn count_phase(tasks: &[Task], phase: Phase) -> (usize, usize) {
    tasks
        .iter()
        .filter(|t| t.phase == phase)
        .fold((0, 0), |(total, completed), t| {
            let done = usize::from(t.status == TaskStatus::Completed);
            (total + 1, completed + done)
        })
}

/// Weekly hours attributed to a member: their availability share of the
/// shared pool, spread over four weeks.
pub fn member_weekly_hours(member: &TeamMember, weekly_hours_pool: f64) -> f64 {
    (weekly_hours_pool * f64::from(member.availability) / 100.0) / 4.0
}

pub fn member_monthly_cost(member: &TeamMember, weekly_hours_pool: f64) -> f64 {
    member_weekly_hours(member, weekly_hours_pool) * 4.0 * member.hourly_rate
}

pub fn team_monthly_cost(members: &[TeamMember], weekly_hours_pool: f64) -> f64 {
    members
        .iter()
        .map(|m| member_monthly_cost(m, weekly_hours_pool))
        .sum()
}

/// Sum of every resource's monthly cost; `required` does not matter.
pub fn resource_monthly_cost(resources: &[Resource]) -> f64 {
    resources.iter().map(|r| r.monthly_cost).sum()
}

pub fn total_project_cost(
    members: &[TeamMember],
    resources: &[Resource],
    weekly_hours_pool: f64,
    duration_months: u32,
) -> f64 {
    let monthly = team_monthly_cost(members, weekly_hours_pool) + resource_monthly_cost(resources);
    monthly * f64::from(duration_months)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostSummary {
    pub team_monthly_cost: f64,
    pub resource_monthly_cost: f64,
    pub total_monthly_cost: f64,
    pub duration_months: u32,
    pub total_project_cost: f64,
}

pub fn cost_summary(
    members: &[TeamMember],
    resources: &[Resource],
    weekly_hours_pool: f64,
    duration_months: u32,
) -> CostSummary {
    let team = team_monthly_cost(members, weekly_hours_pool);
    let resource = resource_monthly_cost(resources);
    CostSummary {
        team_monthly_cost: team,
        resource_monthly_cost: resource,
        total_monthly_cost: team + resource,
        duration_months,
        total_project_cost: total_project_cost(
            members,
            resources,
            weekly_hours_pool,
            duration_months,
        ),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapOverview {
    pub completed: usize,
    pub current: usize,
    /// Rounded mean of milestone progress.
    pub overall_progress: u32,
}

pub fn roadmap_overview(milestones: &[Milestone]) -> RoadmapOverview {
    let count = |status: MilestoneStatus| {
        milestones.iter().filter(|m| m.status == status).count()
    };
    let overall_progress = if milestones.is_empty() {
        0
    } else {
        let sum: u32 = milestones.iter().map(|m| u32::from(m.progress)).sum();
        (f64::from(sum) / milestones.len() as f64).round() as u32
    };

    RoadmapOverview {
        completed: count(MilestoneStatus::Completed),
        current: count(MilestoneStatus::Current),
        overall_progress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Priority, ResourceType};
    use std::collections::BTreeSet;

    fn task(phase: Phase, status: TaskStatus) -> Task {
        Task {
            id: format!("{phase}-{status}"),
            title: "t".to_string(),
            description: String::new(),
            phase,
            priority: Priority::Medium,
            status,
            estimated_hours: 8,
            dependencies: BTreeSet::new(),
        }
    }

    fn member(rate: f64, availability: u8) -> TeamMember {
        TeamMember {
            id: "m".to_string(),
            name: "Member".to_string(),
            role: "Engineer".to_string(),
            hourly_rate: rate,
            availability,
            skills: vec![],
            avatar: String::new(),
        }
    }

    fn resource(cost: f64, required: bool) -> Resource {
        Resource {
            id: "r".to_string(),
            name: "Tool".to_string(),
            kind: ResourceType::Software,
            monthly_cost: cost,
            required,
        }
    }

    #[test]
    fn empty_phase_has_zero_progress() {
        let tasks = vec![task(Phase::Planning, TaskStatus::Completed)];
        assert_eq!(phase_progress(&tasks, Phase::Testing), 0.0);
        assert_eq!(phase_progress(&[], Phase::Planning), 0.0);
    }

    #[test]
    fn fully_completed_phase_is_one_hundred() {
        let tasks = vec![
            task(Phase::Design, TaskStatus::Completed),
            task(Phase::Design, TaskStatus::Completed),
            task(Phase::Planning, TaskStatus::Todo),
        ];
        assert_eq!(phase_progress(&tasks, Phase::Design), 100.0);
    }

    #[test]
    fn half_completed_planning_is_fifty() {
        let tasks = vec![
            task(Phase::Planning, TaskStatus::Completed),
            task(Phase::Planning, TaskStatus::Todo),
        ];
        assert_eq!(phase_progress(&tasks, Phase::Planning), 50.0);
    }

    #[test]
    fn in_progress_does_not_count_as_completed() {
        let tasks = vec![
            task(Phase::Testing, TaskStatus::InProgress),
            task(Phase::Testing, TaskStatus::Completed),
            task(Phase::Testing, TaskStatus::Todo),
        ];
        let progress = phase_progress(&tasks, Phase::Testing);
        assert!((progress - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn overview_covers_every_phase_in_order() {
        let tasks = vec![task(Phase::Development, TaskStatus::Completed)];
        let overview = phase_overview(&tasks);
        let phases: Vec<Phase> = overview.iter().map(|p| p.phase).collect();
        assert_eq!(phases, Phase::ALL.to_vec());
        assert_eq!(overview[2].task_count, 1);
        assert_eq!(overview[2].progress, 100.0);
        assert_eq!(overview[0].task_count, 0);
    }

    #[test]
    fn member_cost_uses_shared_pool_share() {
        // 160h pool at 80% -> 32h/week -> 128h/month at 85/h
        let m = member(85.0, 80);
        assert_eq!(member_weekly_hours(&m, DEFAULT_WEEKLY_HOURS_POOL), 32.0);
        assert_eq!(member_monthly_cost(&m, DEFAULT_WEEKLY_HOURS_POOL), 10_880.0);
    }

    #[test]
    fn team_cost_is_linear_in_rate_and_availability() {
        let base = vec![member(50.0, 40), member(90.0, 100)];
        let base_cost = team_monthly_cost(&base, DEFAULT_WEEKLY_HOURS_POOL);
        let first = member_monthly_cost(&base[0], DEFAULT_WEEKLY_HOURS_POOL);

        let doubled_availability = vec![member(50.0, 80), member(90.0, 100)];
        let cost = team_monthly_cost(&doubled_availability, DEFAULT_WEEKLY_HOURS_POOL);
        assert!((cost - (base_cost + first)).abs() < 1e-9);

        let doubled_rate = vec![member(100.0, 40), member(90.0, 100)];
        let cost = team_monthly_cost(&doubled_rate, DEFAULT_WEEKLY_HOURS_POOL);
        assert!((cost - (base_cost + first)).abs() < 1e-9);
    }

    #[test]
    fn resource_cost_ignores_required_flag() {
        let resources = vec![resource(44.0, true), resource(200.0, false)];
        assert_eq!(resource_monthly_cost(&resources), 244.0);
    }

    #[test]
    fn total_cost_is_additive_in_duration() {
        let members = vec![member(85.0, 80), member(75.0, 60)];
        let resources = vec![resource(150.0, true)];
        let pool = DEFAULT_WEEKLY_HOURS_POOL;
        for (d1, d2) in [(0, 0), (1, 5), (6, 18), (12, 12)] {
            let lhs = total_project_cost(&members, &resources, pool, d1 + d2);
            let rhs = total_project_cost(&members, &resources, pool, d1)
                + total_project_cost(&members, &resources, pool, d2);
            assert!((lhs - rhs).abs() < 1e-6, "d1={d1} d2={d2}");
        }
    }

    #[test]
    fn single_resource_contributes_cost_times_duration() {
        let resources = vec![resource(100.0, true)];
        for members in [vec![], vec![member(85.0, 80)], vec![member(10.0, 5); 3]] {
            let with = total_project_cost(&members, &resources, DEFAULT_WEEKLY_HOURS_POOL, 6);
            let without = total_project_cost(&members, &[], DEFAULT_WEEKLY_HOURS_POOL, 6);
            assert!((with - without - 600.0).abs() < 1e-9);
        }
    }

    #[test]
    fn summary_combines_team_and_resources() {
        let members = vec![member(85.0, 80)];
        let resources = vec![resource(100.0, false)];
        let summary = cost_summary(&members, &resources, DEFAULT_WEEKLY_HOURS_POOL, 2);
        assert_eq!(summary.team_monthly_cost, 10_880.0);
        assert_eq!(summary.resource_monthly_cost, 100.0);
        assert_eq!(summary.total_monthly_cost, 10_980.0);
        assert_eq!(summary.total_project_cost, 21_960.0);
    }

    #[test]
    fn roadmap_overview_of_empty_roadmap() {
        let overview = roadmap_overview(&[]);
        assert_eq!(overview.overall_progress, 0);
        assert_eq!(overview.completed, 0);
    }
}
