//! Form state for the add-task and edit-task dialogs
//!
//! The dialogs own validation: a submission with a blank name or no selected priority is refused
//! here, with an error message the dialog can display, and the dialog stays open. The
//! [`Board`](crate::Board) itself never sees a malformed task.

use std::error::Error;

use chrono::Utc;

use crate::config;
use crate::task::{Priority, Task, TaskId, TaskPatch};

/// The buffer behind the "Add New Task" dialog.
///
/// Mirrors the three fields the user can fill in. `priority` is `None` as long as the
/// "Select priority..." placeholder is still selected.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskForm {
    pub name: String,
    pub priority: Option<Priority>,
    pub add_to_calendar: bool,
}

impl TaskForm {
    /// An empty form, the state the dialog opens with
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether this form would currently pass validation
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && self.priority.is_some()
    }

    /// Validate the form and build the task to insert (with a fresh id, the configured
    /// default tag, and a creation date of now).
    ///
    /// Both the name and the priority are required; an incomplete form returns an error
    /// and the caller should keep the dialog open.
    pub fn submit(&self) -> Result<Task, Box<dyn Error>> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("The task needs a name".into());
        }
        let priority = match self.priority {
            Some(p) => p,
            None => return Err("Select a priority first".into()),
        };

        Ok(Task::new_with_parameters(
            name.to_string(),
            config::default_tag(),
            TaskId::random(),
            Some(priority),
            self.add_to_calendar,
            Utc::now(),
        ))
    }

    /// Validate the form and build the patch the edit-task dialog hands to
    /// [`Board::update_task`](crate::Board::update_task). Same validation rules as [`Self::submit`]
    pub fn submit_patch(&self) -> Result<TaskPatch, Box<dyn Error>> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("The task needs a name".into());
        }
        let priority = match self.priority {
            Some(p) => p,
            None => return Err("Select a priority first".into()),
        };

        Ok(TaskPatch {
            name: Some(name.to_string()),
            tag: None,
            priority: Some(priority),
            add_to_calendar: Some(self.add_to_calendar),
        })
    }

    /// Pre-fill a form from an existing task, the way the edit dialog opens
    pub fn prefilled_from(task: &Task) -> Self {
        Self {
            name: task.name().to_string(),
            priority: task.priority(),
            add_to_calendar: task.add_to_calendar(),
        }
    }
}
