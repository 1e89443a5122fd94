//! Core of the tasklane stage board: the task collection and its
//! mutators, per-stage filtering and sorting, inline edit sessions,
//! menu state and the projection the frontend renders.

pub mod board;
pub mod config;
pub mod edit;
pub mod filter;
pub mod menu;
pub mod router;
pub mod sort;
pub mod store;
pub mod task;
pub mod view;

pub use board::{
  Action,
  Board
};
pub use config::BoardConfig;
pub use store::TaskCollection;
pub use task::{
  NewTask,
  Stage,
  Task,
  TaskId,
  TaskPatch
};
pub use view::{
  BoardView,
  project
};
