//! This crate provides the state core of the Liora productivity app: a kanban-style task board
//! with drag-and-drop, and the models behind the calendar preview and the greeting header.
//!
//! The [`Board`] in the [`board`] module is the single source of truth: a fixed set of columns,
//! each an ordered list of [`Task`]s, with atomic reorder/move/insert/update/delete operations.
//!
//! Pointer gestures are interpreted by a [`DragSession`] (in the [`drag`] module), which turns
//! start/hover/drop/cancel events into `Board` calls and exposes the transient state the view
//! needs for visual feedback. \
//! Everything is in-memory and single-threaded: state lives for one page session and is
//! reinitialized to the default board on the next one.
//!
//! The [`form`], [`calendar`] and [`greeting`] modules back the dialogs and the other tabs of
//! the UI; they only ever talk to the `Board` through its public operations.

pub mod task;
pub use task::Task;
pub use task::TaskId;
pub use task::TaskPatch;
pub use task::Priority;
pub mod board;
pub use board::Board;
pub use board::Column;
pub use board::ColumnId;
pub mod drag;
pub use drag::DragSession;
pub use drag::DragEvent;
pub use drag::DropTarget;
pub use drag::DropOutcome;
pub mod form;
pub use form::TaskForm;
pub mod calendar;
pub use calendar::MonthGrid;
pub mod greeting;

pub mod config;
pub mod utils;
