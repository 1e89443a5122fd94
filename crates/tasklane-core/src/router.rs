//! Decoding of DOM data attributes into board actions.
//!
//! Rows and controls carry their meaning in `data-*` attributes and a
//! single listener per container reads them back. Anything missing or
//! malformed decodes to `None` and the event is dropped.

use crate::board::Action;
use crate::edit::EditField;
use crate::sort::{
  SortDirection,
  SortField,
  SortRequest
};
use crate::task::{
  Stage,
  TaskId
};

pub const ATTR_ACTION: &str = "data-action";
pub const ATTR_TASK_ID: &str = "data-task-id";
pub const ATTR_FIELD: &str = "data-field";
pub const ATTR_STATUS: &str = "data-status";
pub const ATTR_KEY: &str = "data-key";
pub const ATTR_ORDER: &str = "data-order";

/// `data-action` value of the row menu trigger.
pub const MENU_ACTION: &str = "menu";

/// Row-level click, decoded from `data-action` and `data-task-id`.
pub fn row_click_from_attrs(
  action: Option<&str>,
  task_id: Option<&str>
) -> Option<Action> {
  let id = task_id?.parse::<TaskId>().ok()?;
  let decoded = match action?.trim() {
    | "advance" => Action::Advance(id),
    | "update" => Action::BeginEdit(id),
    | "delete" => Action::Delete(id),
    | "save" => Action::SaveEdit(id),
    | MENU_ACTION => {
      Action::ToggleRowMenu(id)
    }
    | other => {
      tracing::debug!(
        action = other,
        "unknown row action"
      );
      return None;
    }
  };
  Some(decoded)
}

/// Typing in an inline edit input.
pub fn edit_input_from_attrs(
  field: Option<&str>,
  task_id: Option<&str>,
  value: String
) -> Option<Action> {
  let id = task_id?.parse::<TaskId>().ok()?;
  let field =
    field?.parse::<EditField>().ok()?;
  Some(Action::EditInput {
    id,
    field,
    value
  })
}

/// Typing in a stage's filter input.
pub fn filter_from_attrs(
  status: Option<&str>,
  value: String
) -> Option<Action> {
  let stage = status?.parse::<Stage>().ok()?;
  Some(Action::SetFilter {
    stage,
    keyword: value
  })
}

pub fn sort_menu_from_attrs(
  status: Option<&str>
) -> Option<Action> {
  let stage = status?.parse::<Stage>().ok()?;
  Some(Action::ToggleSortMenu(stage))
}

impl SortRequest {
  /// Reads a sort option's `data-key`, `data-order` and `data-status`.
  pub fn from_attrs(
    key: Option<&str>,
    order: Option<&str>,
    status: Option<&str>
  ) -> Option<Self> {
    Some(Self {
      field:     key?
        .parse::<SortField>()
        .ok()?,
      direction: order?
        .parse::<SortDirection>()
        .ok()?,
      stage:     status?
        .parse::<Stage>()
        .ok()?
    })
  }
}
