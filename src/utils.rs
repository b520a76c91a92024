///! Some utility functions

use crate::board::Board;
use crate::drag::{DragSession, DropTarget};
use crate::task::{Priority, Task};

/// A debug utility that pretty-prints a board
pub fn print_board(board: &Board) {
    for column in board.columns() {
        println!("COL {} ({} tasks)", column.id(), column.tasks().len());
        for task in column.tasks() {
            print_task(task);
        }
    }
}

pub fn print_task(task: &Task) {
    let priority = match task.priority() {
        Some(Priority::High) => "!",
        Some(Priority::Medium) => "~",
        Some(Priority::Low) => ".",
        None => " ",
    };
    let calendar = if task.add_to_calendar() { "c" } else { " " };
    println!("    {}{} {} [{}]\t{}", priority, calendar, task.name(), task.tag(), task.id());
}

/// A debug utility that pretty-prints the state of a drag session
pub fn print_session(session: &DragSession) {
    match session.active_task() {
        None => println!("SESSION idle"),
        Some(task) => {
            let target = match session.hover_target() {
                None => "nothing".to_string(),
                Some(DropTarget::Task(id)) => format!("task {}", id),
                Some(DropTarget::Column(id)) => format!("column {}", id),
            };
            println!("SESSION dragging {} over {}", task, target);
        },
    }
}
