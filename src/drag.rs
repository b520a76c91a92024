//! The drag-and-drop session: what happens between "the user grabbed a card" and
//! "the user let go of it"
//!
//! The view layer feeds pointer gestures in as plain [`DragEvent`] values and renders from the
//! observable state ([`active task`](DragSession::active_task) for the lifted-card effect,
//! [`hover target`](DragSession::hover_target) for highlighting). Only a Drop event mutates the
//! [`Board`]; Hover events drive feedback exclusively.
//!
//! Every resolution path is defined for stale inputs: a drop target can disappear between the
//! last hover and the drop (e.g. the task got deleted by a context-menu action), in which case
//! the gesture quietly resolves to "nothing happened".

use serde::{Deserialize, Serialize};

use crate::board::{Board, ColumnId};
use crate::task::TaskId;

/// The task or column currently under the pointer.
///
/// Task ids and column ids are distinct types, so the two target namespaces can never collide.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DropTarget {
    /// The pointer is over another task card
    Task(TaskId),
    /// The pointer is over a column's own area (its header, or the empty space below its cards)
    Column(ColumnId),
}

/// A pointer gesture, as delivered by the view layer.
///
/// Events are expected in the order the input source produces them:
/// Start, zero or more Hovers, then one Drop or Cancel.
#[derive(Clone, Debug, PartialEq)]
pub enum DragEvent {
    /// The user started dragging a task
    Start(TaskId),
    /// The pointer moved over a potential drop target, or off of every target (`None`)
    Hover(Option<DropTarget>),
    /// The user released the pointer
    Drop(Option<DropTarget>),
    /// The gesture was interrupted (e.g. pointer capture was lost)
    Cancel,
}

/// What a completed gesture did to the board.
///
/// Callers that want to tell the user "that drop did nothing" can match on `Nothing`;
/// everyone else can ignore this value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    /// The dragged task changed position within its own column
    Reordered,
    /// The dragged task moved to another column (or to the end of its own)
    Moved,
    /// The board is exactly as it was
    Nothing,
}

impl DropOutcome {
    pub fn changed_the_board(&self) -> bool {
        !matches!(self, DropOutcome::Nothing)
    }
}

#[derive(Clone, Debug, PartialEq)]
enum DragState {
    Idle,
    Dragging {
        task: TaskId,
        origin: ColumnId,
    },
}

/// Tracks the (at most one) drag gesture in progress.
///
/// There is a single pointer, so there is a single session: a Start while another gesture is in
/// progress is not reachable from real input. It is still handled (the stale gesture is dropped),
/// with a debug assertion to catch misbehaving callers.
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession {
    state: DragState,
    hover_target: Option<DropTarget>,
}

impl Default for DragSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DragSession {
    pub fn new() -> Self {
        Self {
            state: DragState::Idle,
            hover_target: None,
        }
    }

    /// Returns whether no gesture is in progress
    pub fn is_idle(&self) -> bool {
        self.state == DragState::Idle
    }

    /// The task currently being dragged (the one the view renders lifted), if any
    pub fn active_task(&self) -> Option<&TaskId> {
        match &self.state {
            DragState::Dragging { task, .. } => Some(task),
            DragState::Idle => None,
        }
    }

    /// The target currently under the pointer (the one the view highlights), if any
    pub fn hover_target(&self) -> Option<&DropTarget> {
        self.hover_target.as_ref()
    }

    /// Feed one gesture event into the session, mutating `board` at gesture boundaries.
    ///
    /// Only a `Drop` can change the board; the returned [`DropOutcome`] says whether it did.
    pub fn apply(&mut self, board: &mut Board, event: DragEvent) -> DropOutcome {
        match event {
            DragEvent::Start(task_id) => {
                debug_assert!(self.is_idle(), "A drag started while another was in progress");
                self.reset();
                match board.column_of(&task_id) {
                    Some(origin) => {
                        self.state = DragState::Dragging { task: task_id, origin: origin.clone() };
                    },
                    None => {
                        // Stale start (the task vanished under the pointer). Stay idle.
                        log::debug!("Drag started on unknown task {}. Ignoring it", task_id);
                    },
                }
                DropOutcome::Nothing
            },

            DragEvent::Hover(target) => {
                // Hover only drives highlight feedback. Outside a gesture there is nothing to highlight.
                if !self.is_idle() {
                    self.hover_target = target;
                }
                DropOutcome::Nothing
            },

            DragEvent::Drop(target) => {
                let outcome = match (&self.state, target) {
                    (DragState::Dragging { task, origin }, Some(target)) => {
                        Self::resolve_drop(board, task, origin, target)
                    },
                    // Dropped outside any valid target, or no gesture in progress
                    _ => DropOutcome::Nothing,
                };
                self.reset();
                outcome
            },

            DragEvent::Cancel => {
                self.reset();
                DropOutcome::Nothing
            },
        }
    }

    /// Resolution policy for a drop that does have a target:
    /// * onto a task of the same column: the dragged task takes that task's position,
    /// * onto a task of another column: the dragged task is appended to that column,
    /// * onto a column area: the dragged task is appended to that column.
    fn resolve_drop(board: &mut Board, task: &TaskId, origin: &ColumnId, target: DropTarget) -> DropOutcome {
        match target {
            DropTarget::Task(target_task) => {
                let destination = match board.column_of(&target_task) {
                    Some(column_id) => column_id.clone(),
                    // The target task is gone; nowhere to land
                    None => return DropOutcome::Nothing,
                };
                if &destination == origin {
                    match board.reorder_within_column(origin, task, &target_task) {
                        true => DropOutcome::Reordered,
                        false => DropOutcome::Nothing,
                    }
                } else {
                    match board.move_between_columns(task, origin, &destination) {
                        true => DropOutcome::Moved,
                        false => DropOutcome::Nothing,
                    }
                }
            },
            DropTarget::Column(destination) => {
                match board.move_between_columns(task, origin, &destination) {
                    true => DropOutcome::Moved,
                    false => DropOutcome::Nothing,
                }
            },
        }
    }

    /// Clear all transient state, unconditionally
    fn reset(&mut self) {
        self.state = DragState::Idle;
        self.hover_target = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Task;

    fn small_board() -> (Board, TaskId, TaskId) {
        let mut board = Board::new(vec!["To-Do", "In Progress", "Done"]);
        let a = Task::new("A".to_string(), "Energy".to_string());
        let b = Task::new("B".to_string(), "Focus".to_string());
        let (id_a, id_b) = (a.id().clone(), b.id().clone());
        board.insert_task(&"To-Do".into(), b);
        board.insert_task(&"To-Do".into(), a);
        (board, id_a, id_b)
    }

    #[test]
    fn start_exposes_the_active_task() {
        let (mut board, id_a, _) = small_board();
        let mut session = DragSession::new();

        session.apply(&mut board, DragEvent::Start(id_a.clone()));
        assert_eq!(session.active_task(), Some(&id_a));
        assert!(session.hover_target().is_none());
    }

    #[test]
    fn start_on_a_stale_task_stays_idle() {
        let (mut board, ..) = small_board();
        let mut session = DragSession::new();

        session.apply(&mut board, DragEvent::Start(TaskId::from("task-gone")));
        assert!(session.is_idle());
    }

    #[test]
    fn hover_tracks_the_target_without_touching_the_board() {
        let (mut board, id_a, id_b) = small_board();
        let before = board.clone();
        let mut session = DragSession::new();

        session.apply(&mut board, DragEvent::Start(id_a));
        session.apply(&mut board, DragEvent::Hover(Some(DropTarget::Task(id_b.clone()))));
        assert_eq!(session.hover_target(), Some(&DropTarget::Task(id_b)));

        session.apply(&mut board, DragEvent::Hover(Some(DropTarget::Column("Done".into()))));
        assert_eq!(session.hover_target(), Some(&DropTarget::Column("Done".into())));

        session.apply(&mut board, DragEvent::Hover(None));
        assert!(session.hover_target().is_none());

        assert_eq!(board, before);
    }

    #[test]
    fn hover_while_idle_is_ignored() {
        let (mut board, _, id_b) = small_board();
        let mut session = DragSession::new();

        session.apply(&mut board, DragEvent::Hover(Some(DropTarget::Task(id_b))));
        assert!(session.hover_target().is_none());
    }

    #[test]
    fn drop_on_a_sibling_task_reorders() {
        let (mut board, id_a, id_b) = small_board();
        let mut session = DragSession::new();

        session.apply(&mut board, DragEvent::Start(id_a.clone()));
        let outcome = session.apply(&mut board, DragEvent::Drop(Some(DropTarget::Task(id_b.clone()))));

        assert_eq!(outcome, DropOutcome::Reordered);
        let todo: Vec<&TaskId> = board.column(&"To-Do".into()).unwrap()
            .tasks().iter().map(|t| t.id()).collect();
        assert_eq!(todo, vec![&id_b, &id_a]);
        assert!(session.is_idle());
    }

    #[test]
    fn drop_on_a_column_moves_to_its_end() {
        let (mut board, id_a, _) = small_board();
        let mut session = DragSession::new();

        session.apply(&mut board, DragEvent::Start(id_a.clone()));
        let outcome = session.apply(&mut board, DragEvent::Drop(Some(DropTarget::Column("In Progress".into()))));

        assert_eq!(outcome, DropOutcome::Moved);
        assert_eq!(board.column_of(&id_a), Some(&"In Progress".into()));
    }

    #[test]
    fn drop_on_a_task_of_another_column_moves_there() {
        let (mut board, id_a, id_b) = small_board();
        board.move_between_columns(&id_b, &"To-Do".into(), &"Done".into());
        let mut session = DragSession::new();

        session.apply(&mut board, DragEvent::Start(id_a.clone()));
        let outcome = session.apply(&mut board, DragEvent::Drop(Some(DropTarget::Task(id_b.clone()))));

        assert_eq!(outcome, DropOutcome::Moved);
        let done: Vec<&TaskId> = board.column(&"Done".into()).unwrap()
            .tasks().iter().map(|t| t.id()).collect();
        assert_eq!(done, vec![&id_b, &id_a]);
    }

    #[test]
    fn drop_outside_any_target_changes_nothing() {
        let (mut board, id_a, _) = small_board();
        let mut session = DragSession::new();

        session.apply(&mut board, DragEvent::Start(id_a));
        session.apply(&mut board, DragEvent::Hover(Some(DropTarget::Column("Done".into()))));
        let before = board.clone();

        let outcome = session.apply(&mut board, DragEvent::Drop(None));
        assert_eq!(outcome, DropOutcome::Nothing);
        assert_eq!(board, before);
        assert!(session.is_idle());
        assert!(session.hover_target().is_none());
    }

    #[test]
    fn drop_on_a_target_deleted_mid_gesture_changes_nothing() {
        let (mut board, id_a, id_b) = small_board();
        let mut session = DragSession::new();

        session.apply(&mut board, DragEvent::Start(id_a));
        session.apply(&mut board, DragEvent::Hover(Some(DropTarget::Task(id_b.clone()))));
        // a context-menu delete happens between the last hover and the drop
        board.delete_task(&id_b);
        let before = board.clone();

        let outcome = session.apply(&mut board, DragEvent::Drop(Some(DropTarget::Task(id_b))));
        assert_eq!(outcome, DropOutcome::Nothing);
        assert_eq!(board, before);
        assert!(session.is_idle());
    }

    #[test]
    fn drop_of_a_task_deleted_mid_gesture_changes_nothing() {
        let (mut board, id_a, id_b) = small_board();
        let mut session = DragSession::new();

        session.apply(&mut board, DragEvent::Start(id_a.clone()));
        board.delete_task(&id_a);
        let before = board.clone();

        let outcome = session.apply(&mut board, DragEvent::Drop(Some(DropTarget::Task(id_b))));
        assert_eq!(outcome, DropOutcome::Nothing);
        assert_eq!(board, before);
    }

    #[test]
    fn cancel_clears_everything_and_keeps_the_board() {
        let (mut board, id_a, id_b) = small_board();
        let mut session = DragSession::new();

        session.apply(&mut board, DragEvent::Start(id_a));
        session.apply(&mut board, DragEvent::Hover(Some(DropTarget::Task(id_b))));
        let before = board.clone();

        let outcome = session.apply(&mut board, DragEvent::Cancel);
        assert_eq!(outcome, DropOutcome::Nothing);
        assert_eq!(board, before);
        assert!(session.is_idle());
        assert!(session.active_task().is_none());
        assert!(session.hover_target().is_none());
    }

    #[test]
    fn drop_on_itself_is_a_noop() {
        let (mut board, id_a, _) = small_board();
        let before = board.clone();
        let mut session = DragSession::new();

        session.apply(&mut board, DragEvent::Start(id_a.clone()));
        let outcome = session.apply(&mut board, DragEvent::Drop(Some(DropTarget::Task(id_a))));
        assert_eq!(outcome, DropOutcome::Nothing);
        assert_eq!(board, before);
    }
}
