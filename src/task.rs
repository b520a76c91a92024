//! Tasks (the cards displayed on the board)

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

/// How much a task matters. Tasks may also have no priority at all, in which case they render as neutral.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    /// Can do anytime
    Low,
    /// Worth focusing
    Medium,
    /// Matters most
    High,
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Priority::Low => write!(f, "Low"),
            Priority::Medium => write!(f, "Medium"),
            Priority::High => write!(f, "High"),
        }
    }
}

impl FromStr for Priority {
    type Err = Box<dyn Error>;

    /// Parse the value of the dialog's priority selector
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(Priority::Low),
            "Medium" => Ok(Priority::Medium),
            "High" => Ok(Priority::High),
            other => Err(format!("Unknown priority {:?}", other).into()),
        }
    }
}

/// The unique identifier of a [`Task`](crate::Task)
///
/// Ids are assigned at creation, are stable for the whole life of the task, and are never reused,
/// not even after the task has been deleted. They live in a namespace of their own (`task-<uuid>`),
/// so they can never collide with a column id.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TaskId {
    content: String,
}
impl TaskId {
    /// Generate a random TaskId.
    pub fn random() -> Self {
        let random = Uuid::new_v4().to_hyphenated().to_string();
        Self { content: format!("task-{}", random) }
    }

    pub fn as_str(&self) -> &str {
        &self.content
    }
}
impl From<String> for TaskId {
    fn from(content: String) -> Self {
        Self { content }
    }
}
impl From<&str> for TaskId {
    fn from(content: &str) -> Self {
        Self { content: content.to_string() }
    }
}
impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content)
    }
}

/// Used to support serde
impl Serialize for TaskId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.content)
    }
}
/// Used to support serde
impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D>(deserializer: D) -> Result<TaskId, D::Error>
    where
        D: Deserializer<'de>,
    {
        let content = String::deserialize(deserializer)?;
        Ok(TaskId { content })
    }
}

/// A task on the board
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// The task id, unique across the whole board
    id: TaskId,

    /// The display name. The add-task dialog guarantees it is never empty
    name: String,

    /// A categorical label (e.g. "Energy", "Focus", "Urgent"), only used for display
    tag: String,

    /// The optional priority. `None` renders as neutral
    priority: Option<Priority>,

    /// Hint that the calendar view should display this task as well.
    /// The board itself does not enforce anything about it
    add_to_calendar: bool,

    /// The time this task was created
    creation_date: DateTime<Utc>,
}

impl Task {
    /// Create a brand new task with the given name and tag.
    /// This will pick a new (random) task ID.
    pub fn new(name: String, tag: String) -> Self {
        Self::new_with_parameters(name, tag, TaskId::random(), None, false, Utc::now())
    }

    /// Create a new Task instance where every field is chosen by the caller
    pub fn new_with_parameters(name: String, tag: String, id: TaskId,
                               priority: Option<Priority>, add_to_calendar: bool,
                               creation_date: DateTime<Utc>,
                            ) -> Self
    {
        Self {
            id,
            name,
            tag,
            priority,
            add_to_calendar,
            creation_date,
        }
    }

    pub fn id(&self) -> &TaskId    { &self.id        }
    pub fn name(&self) -> &str     { &self.name      }
    pub fn tag(&self) -> &str      { &self.tag       }
    pub fn priority(&self) -> Option<Priority>    { self.priority        }
    pub fn add_to_calendar(&self) -> bool         { self.add_to_calendar }
    pub fn creation_date(&self) -> &DateTime<Utc> { &self.creation_date  }

    /// Rename the task
    pub fn set_name(&mut self, new_name: String) {
        self.name = new_name;
    }

    /// Change the display tag
    pub fn set_tag(&mut self, new_tag: String) {
        self.tag = new_tag;
    }

    /// Set or clear the priority
    pub fn set_priority(&mut self, new_priority: Option<Priority>) {
        self.priority = new_priority;
    }

    /// Toggle whether this task should show up in the calendar view
    pub fn set_add_to_calendar(&mut self, flag: bool) {
        self.add_to_calendar = flag;
    }

    /// Apply a partial update. Fields the patch does not mention are left as they are
    pub fn apply(&mut self, patch: &TaskPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(tag) = &patch.tag {
            self.tag = tag.clone();
        }
        if let Some(priority) = patch.priority {
            self.priority = Some(priority);
        }
        if let Some(flag) = patch.add_to_calendar {
            self.add_to_calendar = flag;
        }
    }
}

/// A partial update to an existing task, as produced by the edit-task dialog.
///
/// `None` fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskPatch {
    pub name: Option<String>,
    pub tag: Option<String>,
    pub priority: Option<Priority>,
    pub add_to_calendar: Option<bool>,
}

impl TaskPatch {
    /// Returns whether this patch would leave any task unchanged
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.tag.is_none()
            && self.priority.is_none()
            && self.add_to_calendar.is_none()
    }
}
