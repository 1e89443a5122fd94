use std::collections::BTreeSet;

use crate::task::{
  Stage,
  TaskId
};

/// Open/closed state of the row action menus and the stage sort menus.
///
/// Row menus are independent of each other. At most one sort menu is
/// open at a time.
#[derive(
  Debug,
  Clone,
  Default,
  PartialEq,
  Eq,
)]
pub struct MenuController {
  open_rows: BTreeSet<TaskId>,
  open_sort: Option<Stage>
}

impl MenuController {
  pub fn is_row_open(
    &self,
    id: TaskId
  ) -> bool {
    self.open_rows.contains(&id)
  }

  pub fn is_sort_open(
    &self,
    stage: Stage
  ) -> bool {
    self.open_sort == Some(stage)
  }

  pub fn open_sort(
    &self
  ) -> Option<Stage> {
    self.open_sort
  }

  pub fn toggle_row(&mut self, id: TaskId) {
    if !self.open_rows.remove(&id) {
      self.open_rows.insert(id);
    }
  }

  pub fn toggle_sort(
    &mut self,
    stage: Stage
  ) {
    self.open_sort =
      if self.is_sort_open(stage) {
        None
      } else {
        Some(stage)
      };
  }

  /// Row menus only; sort menus live in the static page header.
  pub fn close_rows(&mut self) {
    self.open_rows.clear();
  }

  pub fn close_all(&mut self) {
    self.open_rows.clear();
    self.open_sort = None;
  }

  pub fn any_open(&self) -> bool {
    !self.open_rows.is_empty()
      || self.open_sort.is_some()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn row_menus_toggle_independently() {
    let mut menus =
      MenuController::default();
    menus.toggle_row(TaskId(1));
    menus.toggle_row(TaskId(2));

    assert!(menus.is_row_open(TaskId(1)));
    assert!(menus.is_row_open(TaskId(2)));

    menus.toggle_row(TaskId(1));
    assert!(!menus.is_row_open(TaskId(1)));
    assert!(menus.is_row_open(TaskId(2)));
  }

  #[test]
  fn opening_a_sort_menu_closes_the_other()
   {
    let mut menus =
      MenuController::default();
    menus.toggle_sort(Stage::Todo);
    menus.toggle_sort(Stage::Done);

    assert!(!menus.is_sort_open(Stage::Todo));
    assert!(menus.is_sort_open(Stage::Done));

    menus.toggle_sort(Stage::Done);
    assert_eq!(menus.open_sort(), None);
  }

  #[test]
  fn sort_menu_does_not_touch_row_menus() {
    let mut menus =
      MenuController::default();
    menus.toggle_row(TaskId(3));
    menus.toggle_sort(Stage::Doing);

    assert!(menus.is_row_open(TaskId(3)));
  }

  #[test]
  fn outside_click_closes_everything() {
    let mut menus =
      MenuController::default();
    menus.toggle_row(TaskId(1));
    menus.toggle_sort(Stage::Todo);
    menus.close_all();

    assert!(!menus.any_open());
  }

  #[test]
  fn close_rows_keeps_sort_menu() {
    let mut menus =
      MenuController::default();
    menus.toggle_row(TaskId(1));
    menus.toggle_sort(Stage::Todo);
    menus.close_rows();

    assert!(!menus.is_row_open(TaskId(1)));
    assert!(menus.is_sort_open(Stage::Todo));
  }
}
