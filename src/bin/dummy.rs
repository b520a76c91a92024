use liora_board::Board;
use liora_board::DragSession;
use liora_board::{DragEvent, DropTarget};
use liora_board::greeting;
use liora_board::utils;

fn main() {
    // This mostly exists to exercise the crate from the command line

    env_logger::init();

    println!("{}", greeting::greeting());
    println!("{}\n", greeting::MOODLINE);

    let mut board = Board::example();
    let mut session = DragSession::new();

    session.apply(&mut board, DragEvent::Start("task-1".into()));
    session.apply(&mut board, DragEvent::Hover(Some(DropTarget::Task("task-2".into()))));
    utils::print_session(&session);

    session.apply(&mut board, DragEvent::Drop(Some(DropTarget::Task("task-2".into()))));
    utils::print_board(&board);
}
