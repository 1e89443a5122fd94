//! Pure projection of a [`Board`] into the three stage tables.

use crate::board::Board;
use crate::config::{
  BoardConfig,
  SortOption
};
use crate::edit::EditDraft;
use crate::task::{
  Stage,
  Task,
  TaskId
};

#[derive(Debug, Clone, PartialEq)]
pub struct BoardView {
  pub stages: Vec<StageView>
}

#[derive(Debug, Clone, PartialEq)]
pub struct StageView {
  pub stage:          Stage,
  pub title:          String,
  pub container_id:   String,
  pub keyword:        String,
  pub sort_menu_open: bool,
  pub sort_options:   Vec<SortOption>,
  pub rows:           Vec<RowView>
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
  pub id:        TaskId,
  pub stage:     Stage,
  pub menu_open: bool,
  pub cells:     RowCells,
  pub actions:   Vec<RowAction>
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowCells {
  Display {
    name:     String,
    person:   String,
    deadline: String
  },
  Editing(EditDraft)
}

/// Controls offered in a row's action cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowAction {
  Advance {
    next:  Stage,
    label: String
  },
  Update {
    label: String
  },
  Delete {
    label: String
  },
  Save {
    label: String
  }
}

impl RowAction {
  /// Value of the control's `data-action` attribute.
  pub fn key(&self) -> &'static str {
    match self {
      | RowAction::Advance { .. } => {
        "advance"
      }
      | RowAction::Update { .. } => "update",
      | RowAction::Delete { .. } => "delete",
      | RowAction::Save { .. } => "save"
    }
  }

  pub fn label(&self) -> &str {
    match self {
      | RowAction::Advance {
        label,
        ..
      }
      | RowAction::Update { label }
      | RowAction::Delete { label }
      | RowAction::Save { label } => {
        label.as_str()
      }
    }
  }
}

impl RowView {
  pub fn is_editing(&self) -> bool {
    matches!(self.cells, RowCells::Editing(_))
  }
}

/// Builds the complete table set. Same inputs, same output.
pub fn project(
  board: &Board,
  config: &BoardConfig
) -> BoardView {
  let stages = Stage::ALL
    .into_iter()
    .map(|stage| {
      let rows = board
        .filters()
        .visible(board.tasks().iter())
        .filter(|task| task.status == stage)
        .map(|task| {
          project_row(board, config, task)
        })
        .collect();

      StageView {
        stage,
        title: config
          .stage_title(stage)
          .to_string(),
        container_id: stage.container_id(),
        keyword: board
          .filters()
          .keyword(stage)
          .to_string(),
        sort_menu_open: board
          .menus()
          .is_sort_open(stage),
        sort_options: config
          .sort_options
          .clone(),
        rows
      }
    })
    .collect();

  BoardView { stages }
}

fn project_row(
  board: &Board,
  config: &BoardConfig,
  task: &Task
) -> RowView {
  let labels = &config.labels;

  if let Some(draft) =
    board.edits().draft(task.id)
  {
    return RowView {
      id:        task.id,
      stage:     task.status,
      menu_open: false,
      cells:     RowCells::Editing(
        draft.clone()
      ),
      actions:   vec![RowAction::Save {
        label: labels.save.clone()
      }]
    };
  }

  let mut actions = Vec::with_capacity(3);
  if let Some(next) = task.status.next() {
    actions.push(RowAction::Advance {
      next,
      label: config
        .advance_label(task.status)
        .to_string()
    });
  }
  actions.push(RowAction::Update {
    label: labels.update.clone()
  });
  actions.push(RowAction::Delete {
    label: labels.delete.clone()
  });

  RowView {
    id: task.id,
    stage: task.status,
    menu_open: board
      .menus()
      .is_row_open(task.id),
    cells: RowCells::Display {
      name:     task.name.clone(),
      person:   task.person.clone(),
      deadline: task.deadline.clone()
    },
    actions
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::board::Action;
  use crate::task::NewTask;

  fn board_with(
    names: &[(&str, &str)]
  ) -> Board {
    let mut board = Board::new();
    for (name, person) in names {
      board.apply(Action::Register(
        NewTask {
          name:     name.to_string(),
          person:   person.to_string(),
          deadline: "2026-02-02".to_string()
        }
      ));
    }
    board
  }

  fn row_ids(
    view: &BoardView,
    stage: Stage
  ) -> Vec<u64> {
    view
      .stages
      .iter()
      .find(|s| s.stage == stage)
      .map(|s| {
        s.rows
          .iter()
          .map(|row| row.id.0)
          .collect()
      })
      .unwrap_or_default()
  }

  #[test]
  fn rows_land_in_their_stage_container() {
    let mut board = board_with(&[
      ("a", "x"),
      ("b", "y"),
      ("c", "z"),
    ]);
    board.apply(Action::Advance(TaskId(2)));
    board.apply(Action::Advance(TaskId(3)));
    board.apply(Action::Advance(TaskId(3)));

    let view =
      project(&board, &BoardConfig::default());

    assert_eq!(
      view
        .stages
        .iter()
        .map(|s| s.container_id.as_str())
        .collect::<Vec<_>>(),
      vec!["todo-list", "doing-list", "done-list"]
    );
    assert_eq!(row_ids(&view, Stage::Todo), vec![1]);
    assert_eq!(row_ids(&view, Stage::Doing), vec![2]);
    assert_eq!(row_ids(&view, Stage::Done), vec![3]);
  }

  #[test]
  fn done_rows_have_no_advance_control() {
    let mut board = board_with(&[("a", "x")]);
    board.apply(Action::Advance(TaskId(1)));
    board.apply(Action::Advance(TaskId(1)));

    let view =
      project(&board, &BoardConfig::default());
    let row = &view.stages[2].rows[0];

    assert_eq!(
      row
        .actions
        .iter()
        .map(RowAction::key)
        .collect::<Vec<_>>(),
      vec!["update", "delete"]
    );
  }

  #[test]
  fn advance_label_depends_on_stage() {
    let mut board =
      board_with(&[("a", "x"), ("b", "y")]);
    board.apply(Action::Advance(TaskId(2)));

    let view =
      project(&board, &BoardConfig::default());

    assert_eq!(
      view.stages[0].rows[0].actions[0],
      RowAction::Advance {
        next:  Stage::Doing,
        label: "Move to Doing".to_string()
      }
    );
    assert_eq!(
      view.stages[1].rows[0].actions[0]
        .label(),
      "Move to Done"
    );
  }

  #[test]
  fn filtered_rows_are_skipped() {
    let mut board = board_with(&[
      ("deploy", "ana"),
      ("review", "bob"),
      ("retro", "anabel"),
    ]);
    board.apply(Action::SetFilter {
      stage:   Stage::Todo,
      keyword: "ana".to_string()
    });

    let view =
      project(&board, &BoardConfig::default());
    assert_eq!(
      row_ids(&view, Stage::Todo),
      vec![1, 3]
    );
    assert_eq!(view.stages[0].keyword, "ana");
  }

  #[test]
  fn editing_row_shows_inputs_and_save_only()
   {
    let mut board = board_with(&[("a", "x")]);
    board.apply(Action::ToggleRowMenu(
      TaskId(1)
    ));
    board.apply(Action::BeginEdit(TaskId(1)));

    let view =
      project(&board, &BoardConfig::default());
    let row = &view.stages[0].rows[0];

    assert!(row.is_editing());
    assert!(!row.menu_open);
    assert_eq!(
      row
        .actions
        .iter()
        .map(RowAction::key)
        .collect::<Vec<_>>(),
      vec!["save"]
    );
  }

  #[test]
  fn projection_is_idempotent() {
    let mut board =
      board_with(&[("a", "x"), ("b", "y")]);
    board.apply(Action::ToggleSortMenu(
      Stage::Todo
    ));
    let config = BoardConfig::default();

    let first = project(&board, &config);
    assert_eq!(first, project(&board, &config));
    assert!(first.stages[0].sort_menu_open);
    assert!(!first.stages[1].sort_menu_open);
  }
}
