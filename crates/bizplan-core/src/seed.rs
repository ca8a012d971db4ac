//! Starting data for the planning pages.

use crate::{
    Milestone, MilestoneStatus, Phase, Priority, Resource, ResourceType, Task, TaskStatus,
    TeamMember,
};
use chrono::NaiveDate;
use std::collections::BTreeSet;

pub fn seed_tasks() -> Vec<Task> {
    vec![
        seed_task(
            "1",
            "Market Research & Analysis",
            "Conduct comprehensive market research to validate the project concept",
            Phase::Planning,
            TaskStatus::Completed,
            40,
            &[],
        ),
        seed_task(
            "2",
            "Technical Architecture Design",
            "Design the technical architecture and select technology stack",
            Phase::Planning,
            TaskStatus::InProgress,
            60,
            &["1"],
        ),
        seed_task(
            "3",
            "UI/UX Design & Prototyping",
            "Create user interface designs and interactive prototypes",
            Phase::Design,
            TaskStatus::Todo,
            80,
            &["1"],
        ),
        seed_task(
            "4",
            "Backend Development Setup",
            "Set up backend infrastructure and core services",
            Phase::Development,
            TaskStatus::Todo,
            120,
            &["2"],
        ),
    ]
}

fn seed_task(
    id: &str,
    title: &str,
    description: &str,
    phase: Phase,
    status: TaskStatus,
    estimated_hours: u32,
    dependencies: &[&str],
) -> Task {
    Task {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        phase,
        priority: Priority::High,
        status,
        estimated_hours,
        dependencies: dependencies.iter().map(|d| d.to_string()).collect::<BTreeSet<_>>(),
    }
}

type MilestoneRow = (&'static str, &'static str, NaiveDate, MilestoneStatus, u8);

// Evaluated at compile time, so an impossible date fails the build.
const MILESTONE_ROWS: [MilestoneRow; 6] = [
    (
        "Project Initialization",
        "Define project scope, gather requirements, and assemble the team",
        date(2025, 1, 15),
        MilestoneStatus::Completed,
        100,
    ),
    (
        "Market Research & Validation",
        "Conduct market analysis, competitor research, and validate business assumptions",
        date(2025, 2, 1),
        MilestoneStatus::Completed,
        100,
    ),
    (
        "Design & Prototyping",
        "Create user experience designs, wireframes, and interactive prototypes",
        date(2025, 2, 28),
        MilestoneStatus::Current,
        65,
    ),
    (
        "MVP Development",
        "Build the minimum viable product with core features",
        date(2025, 4, 15),
        MilestoneStatus::Upcoming,
        0,
    ),
    (
        "Beta Testing",
        "Release beta version and gather user feedback",
        date(2025, 5, 1),
        MilestoneStatus::Upcoming,
        0,
    ),
    (
        "Product Launch",
        "Official product launch and marketing campaign",
        date(2025, 6, 1),
        MilestoneStatus::Upcoming,
        0,
    ),
];

const fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid milestone date"),
    }
}

pub fn seed_milestones() -> Vec<Milestone> {
    MILESTONE_ROWS
        .into_iter()
        .enumerate()
        .map(|(i, (title, description, date, status, progress))| Milestone {
            id: (i + 1).to_string(),
            title: title.to_string(),
            description: description.to_string(),
            date,
            status,
            progress,
        })
        .collect()
}

pub fn seed_team() -> Vec<TeamMember> {
    vec![
        seed_member(
            "1",
            "Avery Morgan",
            "Frontend Developer",
            85.0,
            80,
            &["React", "TypeScript", "Tailwind CSS"],
        ),
        seed_member(
            "2",
            "Jordan Ellis",
            "Backend Developer",
            90.0,
            100,
            &["Node.js", "PostgreSQL", "AWS"],
        ),
        seed_member(
            "3",
            "Riley Chen",
            "UI/UX Designer",
            75.0,
            60,
            &["Figma", "Prototyping", "User Research"],
        ),
        seed_member(
            "4",
            "Sam Patel",
            "Project Manager",
            95.0,
            90,
            &["Agile", "Scrum", "Leadership"],
        ),
    ]
}

fn seed_member(
    id: &str,
    name: &str,
    role: &str,
    hourly_rate: f64,
    availability: u8,
    skills: &[&str],
) -> TeamMember {
    TeamMember {
        id: id.to_string(),
        name: name.to_string(),
        role: role.to_string(),
        hourly_rate,
        availability,
        skills: skills.iter().map(|s| s.to_string()).collect(),
        avatar: format!("https://i.pravatar.cc/150?u={}", id),
    }
}

pub fn seed_resources() -> Vec<Resource> {
    let rows = [
        ("GitHub Pro", ResourceType::Service, 44.0, true),
        ("AWS Services", ResourceType::Service, 150.0, true),
        ("Figma Professional", ResourceType::Software, 75.0, true),
        ("MacBook Pro", ResourceType::Hardware, 200.0, false),
        ("Adobe Creative Suite", ResourceType::Software, 60.0, false),
    ];

    rows.into_iter()
        .enumerate()
        .map(|(i, (name, kind, monthly_cost, required))| Resource {
            id: (i + 1).to_string(),
            name: name.to_string(),
            kind,
            monthly_cost,
            required,
        })
        .collect()
}
