use crate::metrics::{self, PhaseProgress};
use crate::seed::seed_tasks;
use crate::{BizPlanError, Phase, Result, Task, TaskDraft, TaskStatus};
use tracing::debug;

/// Task tracker grouped by implementation phase.
#[derive(Debug, Clone, Default)]
pub struct ImplementationPlanPage {
    tasks: Vec<Task>,
    draft: TaskDraft,
}

impl ImplementationPlanPage {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            draft: TaskDraft::default(),
        }
    }

    pub fn with_seed_data() -> Self {
        Self::new(seed_tasks())
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn draft(&self) -> &TaskDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut TaskDraft {
        &mut self.draft
    }

    /// Adds the current draft as a new task and resets the draft.
    pub fn add_task(&mut self) -> Result<&Task> {
        if self.draft.title.trim().is_empty() {
            return Err(BizPlanError::InvalidOperation(
                "task title must not be blank".to_string(),
            ));
        }

        let draft = std::mem::take(&mut self.draft);
        let task = Task::from_draft(draft);
        debug!(id = %task.id, phase = %task.phase, "Task added");
        self.tasks.push(task);
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    /// Overwrites a task's status. Any transition is allowed. Returns `false`
    /// when no task has the given id.
    pub fn update_task_status(&mut self, task_id: &str, status: TaskStatus) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == task_id) {
            Some(task) => {
                task.status = status;
                true
            }
            None => false,
        }
    }

    pub fn phase_progress(&self, phase: Phase) -> f64 {
        metrics::phase_progress(&self.tasks, phase)
    }

    pub fn phase_overview(&self) -> Vec<PhaseProgress> {
        metrics::phase_overview(&self.tasks)
    }

    pub fn total_estimated_hours(&self) -> u64 {
        metrics::total_estimated_hours(&self.tasks)
    }
}
