pub mod edit_dialog;
pub mod task_row;


pub use edit_dialog::EditDialog;
pub use task_row::TaskRow;
