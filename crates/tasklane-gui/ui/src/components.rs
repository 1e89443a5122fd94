mod register_form;
mod row_menu;
mod sort_menu;
mod stage_table;
mod task_row;

pub use register_form::RegisterForm;
pub use row_menu::RowMenu;
pub use sort_menu::SortMenu;
pub use stage_table::StageTable;
pub use task_row::TaskRow;
