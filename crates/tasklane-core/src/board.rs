use tracing::{
  debug,
  info
};

use crate::edit::{
  EditField,
  EditSessions,
  SaveOutcome
};
use crate::filter::FilterState;
use crate::menu::MenuController;
use crate::sort::{
  SortRequest,
  sort
};
use crate::store::TaskCollection;
use crate::task::{
  NewTask,
  Stage,
  TaskId
};

/// Everything a UI event can ask the board to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
  Register(NewTask),
  SetFilter {
    stage:   Stage,
    keyword: String
  },
  Sort(SortRequest),
  Advance(TaskId),
  Delete(TaskId),
  BeginEdit(TaskId),
  EditInput {
    id:    TaskId,
    field: EditField,
    value: String
  },
  SaveEdit(TaskId),
  ToggleRowMenu(TaskId),
  ToggleSortMenu(Stage),
  CloseMenus
}

/// Page-session state of the tracker.
#[derive(
  Debug,
  Clone,
  Default,
  PartialEq,
  Eq,
)]
pub struct Board {
  tasks:   TaskCollection,
  filters: FilterState,
  edits:   EditSessions,
  menus:   MenuController,
  renders: u64
}

impl Board {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_tasks(
    tasks: TaskCollection
  ) -> Self {
    Self {
      tasks,
      ..Self::default()
    }
  }

  pub fn tasks(&self) -> &TaskCollection {
    &self.tasks
  }

  pub fn filters(&self) -> &FilterState {
    &self.filters
  }

  pub fn edits(&self) -> &EditSessions {
    &self.edits
  }

  pub fn menus(&self) -> &MenuController {
    &self.menus
  }

  /// Number of full re-renders so far.
  pub fn render_count(&self) -> u64 {
    self.renders
  }

  /// Runs one handler to completion. Handlers that change what the
  /// stage tables show end with a full re-render.
  #[tracing::instrument(skip(self), level = "debug")]
  pub fn apply(&mut self, action: Action) {
    match action {
      | Action::Register(new_task) => {
        self.tasks =
          self.tasks.create(new_task);
        self.rerender();
      }
      | Action::SetFilter {
        stage,
        keyword
      } => {
        self
          .filters
          .set_keyword(stage, keyword);
        self.rerender();
      }
      | Action::Sort(request) => {
        self.tasks =
          sort(&self.tasks, &request);
        self.rerender();
      }
      | Action::Advance(id) => {
        self.tasks = self.tasks.advance(id);
        self.rerender();
      }
      | Action::Delete(id) => {
        self.tasks = self.tasks.delete(id);
        self.rerender();
      }
      | Action::BeginEdit(id) => {
        match self.tasks.get(id) {
          | Some(task) => {
            self.edits.begin(task)
          }
          | None => {
            debug!(%id, "edit ignored: no such task")
          }
        }
      }
      | Action::EditInput {
        id,
        field,
        value
      } => {
        self.edits.input(id, field, value);
      }
      | Action::SaveEdit(id) => {
        match self.edits.save(id, &self.tasks)
        {
          | SaveOutcome::Saved(tasks) => {
            self.tasks = tasks;
            self.rerender();
          }
          | SaveOutcome::Orphaned
          | SaveOutcome::NotEditing => {}
        }
      }
      | Action::ToggleRowMenu(id) => {
        self.menus.toggle_row(id);
      }
      | Action::ToggleSortMenu(stage) => {
        self.menus.toggle_sort(stage);
      }
      | Action::CloseMenus => {
        self.menus.close_all();
      }
    }
  }

  /// Rows are rebuilt from scratch, so per-row state does not survive:
  /// in-progress edits and open row menus are dropped.
  fn rerender(&mut self) {
    if !self.edits.is_empty() {
      info!(
        discarded = self.edits.len(),
        "re-render discarded open edits"
      );
    }
    self.edits.clear();
    self.menus.close_rows();
    self.renders += 1;
    debug!(
      render = self.renders,
      tasks = self.tasks.len(),
      "board re-rendered"
    );
  }
}
