//! The board itself: a fixed set of columns, each holding an ordered list of tasks
//!
//! The [`Board`] is the single source of truth rendered by the view layer. Every mutation is
//! synchronous and atomic: a caller never observes a task that is half-moved between two columns.
//! Mutations called with stale ids (a task deleted between two pointer events, say) degrade to
//! no-ops instead of erroring, and report this through their `bool` return value.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::task::{Task, TaskId, TaskPatch};

/// The identifier of a board column (e.g. `To-Do`)
///
/// The set of columns is fixed configuration: columns are never created nor destroyed at runtime.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnId {
    content: String,
}
impl ColumnId {
    pub fn as_str(&self) -> &str {
        &self.content
    }
}
impl From<String> for ColumnId {
    fn from(content: String) -> Self {
        Self { content }
    }
}
impl From<&str> for ColumnId {
    fn from(content: &str) -> Self {
        Self { content: content.to_string() }
    }
}
impl Display for ColumnId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content)
    }
}

/// A named, ordered bucket of tasks
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Column {
    id: ColumnId,
    tasks: Vec<Task>,
}

impl Column {
    fn new(id: ColumnId) -> Self {
        Self { id, tasks: Vec::new() }
    }

    /// Returns the column id
    pub fn id(&self) -> &ColumnId {
        &self.id
    }

    /// Returns the tasks this column contains, in display order (top to bottom)
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the position of a task within this column
    pub fn position_of(&self, task_id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id() == task_id)
    }

    /// Returns whether this column holds the given task
    pub fn contains(&self, task_id: &TaskId) -> bool {
        self.position_of(task_id).is_some()
    }
}

/// The kanban board: every column, in display order
///
/// The column set is decided once, at construction. Tasks move between and within columns,
/// but each task id lives in exactly one column at any time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    columns: Vec<Column>,
}

impl Board {
    /// Create a board with the given (empty) columns. Order is the display order.
    pub fn new<I, C>(column_ids: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<ColumnId>,
    {
        let mut columns: Vec<Column> = Vec::new();
        for id in column_ids {
            let id = id.into();
            if columns.iter().any(|c| c.id == id) {
                log::warn!("Duplicate column {} in the board configuration. Ignoring it", id);
                continue;
            }
            columns.push(Column::new(id));
        }
        Self { columns }
    }

    /// The default board every session starts with: the usual three columns,
    /// seeded with a handful of example tasks
    pub fn example() -> Self {
        let mut board = Board::new(vec!["To-Do", "In Progress", "Done"]);

        let seed = |name: &str, tag: &str, id: &str| {
            Task::new_with_parameters(
                name.to_string(), tag.to_string(), TaskId::from(id),
                None, false, chrono::Utc::now())
        };
        board.insert_task(&"To-Do".into(), seed("Set up calendar", "Focus", "task-2"));
        board.insert_task(&"To-Do".into(), seed("Design UI", "Energy", "task-1"));
        board.insert_task(&"In Progress".into(), seed("Build Kanban", "Urgent", "task-3"));
        board.insert_task(&"Done".into(), seed("Project setup", "Complete", "task-4"));

        board
    }

    /// Returns the columns, in display order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns a particular column
    pub fn column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == id)
    }

    fn column_index(&self, id: &ColumnId) -> Option<usize> {
        self.columns.iter().position(|c| &c.id == id)
    }

    /// Returns a task and the column that currently holds it.
    ///
    /// Scans all columns; `None` is a valid, expected outcome (e.g. a stale drag reference).
    pub fn find_task(&self, task_id: &TaskId) -> Option<(&ColumnId, &Task)> {
        for column in &self.columns {
            if let Some(task) = column.tasks.iter().find(|t| t.id() == task_id) {
                return Some((&column.id, task));
            }
        }
        None
    }

    /// Returns the id of the column that currently holds the given task
    pub fn column_of(&self, task_id: &TaskId) -> Option<&ColumnId> {
        self.find_task(task_id).map(|(column_id, _task)| column_id)
    }

    /// Returns whether any column holds the given task
    pub fn contains(&self, task_id: &TaskId) -> bool {
        self.find_task(task_id).is_some()
    }

    /// How many tasks the whole board holds
    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|c| c.tasks.len()).sum()
    }

    /// Insert a new task at the top of a column.
    ///
    /// The insertion is rejected (and `false` returned) if the column does not exist, or if a task
    /// with the same id already lives anywhere on the board. The latter is a caller bug (an id
    /// generation collision), so it is logged; ids must stay globally unique.
    pub fn insert_task(&mut self, column_id: &ColumnId, task: Task) -> bool {
        if self.contains(task.id()) {
            log::warn!("Task {} already exists on the board. Ignoring the insertion", task.id());
            return false;
        }
        let column = match self.column_index(column_id) {
            Some(i) => &mut self.columns[i],
            None => {
                log::warn!("No column {} on this board. Ignoring the insertion", column_id);
                return false;
            },
        };
        column.tasks.insert(0, task);
        true
    }

    /// Relocate a task to the position another task of the same column currently occupies,
    /// shifting the tasks in between by one.
    ///
    /// Returns whether the board changed. Dropping a task onto itself is a no-op (not an error),
    /// and so is a call where either id is absent from this column.
    pub fn reorder_within_column(&mut self, column_id: &ColumnId, task_id: &TaskId, target_task_id: &TaskId) -> bool {
        if task_id == target_task_id {
            return false;
        }
        let column = match self.column_index(column_id) {
            Some(i) => &mut self.columns[i],
            None => {
                log::debug!("No column {} on this board. Ignoring the reorder", column_id);
                return false;
            },
        };
        let from = match column.position_of(task_id) {
            Some(pos) => pos,
            None => return false,
        };
        let to = match column.position_of(target_task_id) {
            Some(pos) => pos,
            None => return false,
        };

        let task = column.tasks.remove(from);
        column.tasks.insert(to, task);
        true
    }

    /// Move a task out of `from_column_id` and append it at the end of `to_column_id`.
    /// The task itself (id, name, tag, priority...) is unchanged.
    ///
    /// `from` and `to` may be the same column: that moves the task to the end of its own column,
    /// which is what dropping a task on its own column's empty area resolves to.
    /// Returns whether the board changed; a stale task or an unknown column is a no-op.
    pub fn move_between_columns(&mut self, task_id: &TaskId, from_column_id: &ColumnId, to_column_id: &ColumnId) -> bool {
        // Resolve both columns before touching anything, so the mutation stays atomic
        let from = match self.column_index(from_column_id) {
            Some(i) => i,
            None => return false,
        };
        let to = match self.column_index(to_column_id) {
            Some(i) => i,
            None => {
                log::debug!("No column {} on this board. Ignoring the move", to_column_id);
                return false;
            },
        };
        let position = match self.columns[from].position_of(task_id) {
            Some(pos) => pos,
            None => return false,
        };

        let task = self.columns[from].tasks.remove(position);
        self.columns[to].tasks.push(task);
        true
    }

    /// Apply a partial update to a task, wherever it currently resides.
    /// Its column and its position within that column are left unchanged.
    pub fn update_task(&mut self, task_id: &TaskId, patch: &TaskPatch) -> bool {
        for column in &mut self.columns {
            if let Some(task) = column.tasks.iter_mut().find(|t| t.id() == task_id) {
                task.apply(patch);
                return true;
            }
        }
        false
    }

    /// Remove a task from whichever column currently holds it
    pub fn delete_task(&mut self, task_id: &TaskId) -> bool {
        for column in &mut self.columns {
            if let Some(position) = column.position_of(task_id) {
                column.tasks.remove(position);
                return true;
            }
        }
        false
    }
}
