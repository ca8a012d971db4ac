use crate::{BizPlanError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

pub type TaskId = String;

/// Input record for the pitch generator. Every field is required before submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PitchRequest {
    pub project_name: String,
    pub industry: String,
    pub problem: String,
    pub solution: String,
    pub target: String,
    pub budget: String,
    pub timeline: String,
}

impl PitchRequest {
    pub fn get(&self, field: PitchField) -> &str {
        match field {
            PitchField::ProjectName => &self.project_name,
            PitchField::Industry => &self.industry,
            PitchField::Problem => &self.problem,
            PitchField::Solution => &self.solution,
            PitchField::Target => &self.target,
            PitchField::Budget => &self.budget,
            PitchField::Timeline => &self.timeline,
        }
    }

    pub fn set(&mut self, field: PitchField, value: impl Into<String>) {
        let slot = match field {
            PitchField::ProjectName => &mut self.project_name,
            PitchField::Industry => &mut self.industry,
            PitchField::Problem => &mut self.problem,
            PitchField::Solution => &mut self.solution,
            PitchField::Target => &mut self.target,
            PitchField::Budget => &mut self.budget,
            PitchField::Timeline => &mut self.timeline,
        };
        *slot = value.into();
    }

    /// First field (in form order) that is blank after trimming.
    pub fn first_missing(&self) -> Option<PitchField> {
        PitchField::ALL
            .into_iter()
            .find(|field| self.get(*field).trim().is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PitchField {
    ProjectName,
    Industry,
    Problem,
    Solution,
    Target,
    Budget,
    Timeline,
}

impl PitchField {
    pub const ALL: [PitchField; 7] = [
        PitchField::ProjectName,
        PitchField::Industry,
        PitchField::Problem,
        PitchField::Solution,
        PitchField::Target,
        PitchField::Budget,
        PitchField::Timeline,
    ];

    /// Suggested values offered by the form. Free text is still accepted.
    pub fn suggestions(&self) -> &'static [&'static str] {
        match self {
            PitchField::Industry => &[
                "Technology",
                "Healthcare",
                "Finance",
                "Education",
                "E-commerce",
                "Entertainment",
                "Other",
            ],
            PitchField::Budget => &[
                "Under $10K",
                "$10K - $50K",
                "$50K - $100K",
                "$100K - $500K",
                "$500K+",
            ],
            PitchField::Timeline => &["1-3 months", "3-6 months", "6-12 months", "1+ years"],
            _ => &[],
        }
    }

    /// True when the field has no suggestion list or the value is on it.
    pub fn is_suggested(&self, value: &str) -> bool {
        let suggestions = self.suggestions();
        suggestions.is_empty() || suggestions.contains(&value)
    }
}

impl fmt::Display for PitchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PitchField::ProjectName => "projectName",
            PitchField::Industry => "industry",
            PitchField::Problem => "problem",
            PitchField::Solution => "solution",
            PitchField::Target => "target",
            PitchField::Budget => "budget",
            PitchField::Timeline => "timeline",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for PitchField {
    type Err = BizPlanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "projectname" => Ok(PitchField::ProjectName),
            "industry" => Ok(PitchField::Industry),
            "problem" => Ok(PitchField::Problem),
            "solution" => Ok(PitchField::Solution),
            "target" => Ok(PitchField::Target),
            "budget" => Ok(PitchField::Budget),
            "timeline" => Ok(PitchField::Timeline),
            _ => Err(BizPlanError::Parse(format!("unknown pitch field: {}", s))),
        }
    }
}

/// Implementation phases, in delivery order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Phase {
    Planning,
    Design,
    Development,
    Testing,
    Deployment,
}

impl Phase {
    pub const ALL: [Phase; 5] = [
        Phase::Planning,
        Phase::Design,
        Phase::Development,
        Phase::Testing,
        Phase::Deployment,
    ];
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Phase::Planning => "Planning",
            Phase::Design => "Design",
            Phase::Development => "Development",
            Phase::Testing => "Testing",
            Phase::Deployment => "Deployment",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Phase {
    type Err = BizPlanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "planning" => Ok(Phase::Planning),
            "design" => Ok(Phase::Design),
            "development" => Ok(Phase::Development),
            "testing" => Ok(Phase::Testing),
            "deployment" => Ok(Phase::Deployment),
            _ => Err(BizPlanError::Parse(format!("unknown phase: {}", s))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Priority {
    type Err = BizPlanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(BizPlanError::Parse(format!("unknown priority: {}", s))),
        }
    }
}

/// Task status. Any status may be overwritten with any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Completed,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for TaskStatus {
    type Err = BizPlanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "todo" => Ok(TaskStatus::Todo),
            "in-progress" => Ok(TaskStatus::InProgress),
            "completed" => Ok(TaskStatus::Completed),
            _ => Err(BizPlanError::Parse(format!("unknown task status: {}", s))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub phase: Phase,
    pub priority: Priority,
    pub status: TaskStatus,
    pub estimated_hours: u32,
    /// Informational only; never validated.
    pub dependencies: BTreeSet<TaskId>,
}

impl Task {
    /// Creates a task from a draft. The id is freshly generated and the task
    /// always starts as `todo` with no dependencies.
    pub fn from_draft(draft: TaskDraft) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            description: draft.description,
            phase: draft.phase,
            priority: draft.priority,
            status: TaskStatus::Todo,
            estimated_hours: draft.estimated_hours,
            dependencies: BTreeSet::new(),
        }
    }
}

/// User-editable fields of a task that has not been added yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub phase: Phase,
    pub priority: Priority,
    pub estimated_hours: u32,
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            phase: Phase::Planning,
            priority: Priority::Medium,
            estimated_hours: 8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MilestoneStatus {
    Completed,
    Current,
    Upcoming,
}

impl fmt::Display for MilestoneStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MilestoneStatus::Completed => "completed",
            MilestoneStatus::Current => "current",
            MilestoneStatus::Upcoming => "upcoming",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub status: MilestoneStatus,
    /// Percent complete, 0..=100.
    pub progress: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
    /// Currency per hour.
    pub hourly_rate: f64,
    /// Share of the shared weekly hours pool, 0..=100.
    pub availability: u8,
    pub skills: Vec<String>,
    pub avatar: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Software,
    Hardware,
    Service,
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ResourceType::Software => "software",
            ResourceType::Hardware => "hardware",
            ResourceType::Service => "service",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ResourceType,
    pub monthly_cost: f64,
    pub required: bool,
}
