use std::collections::BTreeMap;
use std::str::FromStr;

use anyhow::anyhow;
use tracing::debug;

use crate::store::TaskCollection;
use crate::task::{
  Task,
  TaskId,
  TaskPatch
};

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
)]
pub enum EditField {
  Name,
  Person,
  Deadline
}

impl EditField {
  pub fn as_str(self) -> &'static str {
    match self {
      | EditField::Name => "name",
      | EditField::Person => "person",
      | EditField::Deadline => {
        "deadline"
      }
    }
  }

  /// `type` attribute of the inline input for this field.
  pub fn input_type(
    self
  ) -> &'static str {
    match self {
      | EditField::Deadline => "date",
      | _ => "text"
    }
  }
}

impl FromStr for EditField {
  type Err = anyhow::Error;

  fn from_str(
    raw: &str
  ) -> Result<Self, Self::Err> {
    match raw.trim() {
      | "name" => Ok(EditField::Name),
      | "person" => Ok(EditField::Person),
      | "deadline" => {
        Ok(EditField::Deadline)
      }
      | other => {
        Err(anyhow!(
          "unknown edit field: {other:?}"
        ))
      }
    }
  }
}

/// Values currently held by a row's inline inputs.
#[derive(
  Debug,
  Clone,
  Default,
  PartialEq,
  Eq,
)]
pub struct EditDraft {
  pub name:     String,
  pub person:   String,
  pub deadline: String
}

impl EditDraft {
  pub fn from_task(task: &Task) -> Self {
    Self {
      name:     task.name.clone(),
      person:   task.person.clone(),
      deadline: task.deadline.clone()
    }
  }

  pub fn get(
    &self,
    field: EditField
  ) -> &str {
    match field {
      | EditField::Name => &self.name,
      | EditField::Person => &self.person,
      | EditField::Deadline => {
        &self.deadline
      }
    }
  }

  pub fn set(
    &mut self,
    field: EditField,
    value: String
  ) {
    match field {
      | EditField::Name => {
        self.name = value
      }
      | EditField::Person => {
        self.person = value
      }
      | EditField::Deadline => {
        self.deadline = value
      }
    }
  }

  fn to_patch(&self) -> TaskPatch {
    TaskPatch {
      name:     Some(self.name.clone()),
      person:   Some(self.person.clone()),
      deadline: Some(self.deadline.clone())
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
  /// Draft written back; the session is over.
  Saved(TaskCollection),
  /// The task disappeared underneath the session. The row stays in
  /// editing mode until the next re-render throws it away.
  Orphaned,
  NotEditing
}

/// Viewing/Editing state of every row. A row without an entry is
/// viewing. Rows are independent: any number may be editing at once.
#[derive(
  Debug,
  Clone,
  Default,
  PartialEq,
  Eq,
)]
pub struct EditSessions {
  drafts: BTreeMap<TaskId, EditDraft>
}

impl EditSessions {
  pub fn is_editing(
    &self,
    id: TaskId
  ) -> bool {
    self.drafts.contains_key(&id)
  }

  pub fn draft(
    &self,
    id: TaskId
  ) -> Option<&EditDraft> {
    self.drafts.get(&id)
  }

  pub fn len(&self) -> usize {
    self.drafts.len()
  }

  pub fn is_empty(&self) -> bool {
    self.drafts.is_empty()
  }

  /// Enters editing with the task's current values. A row that is
  /// already editing keeps its draft.
  pub fn begin(&mut self, task: &Task) {
    if self.is_editing(task.id) {
      debug!(id = %task.id, "edit already in progress");
      return;
    }
    debug!(id = %task.id, "edit started");
    self.drafts.insert(
      task.id,
      EditDraft::from_task(task)
    );
  }

  pub fn input(
    &mut self,
    id: TaskId,
    field: EditField,
    value: String
  ) {
    match self.drafts.get_mut(&id) {
      | Some(draft) => {
        draft.set(field, value)
      }
      | None => {
        debug!(%id, field = field.as_str(), "edit input ignored: row not editing");
      }
    }
  }

  pub fn save(
    &mut self,
    id: TaskId,
    tasks: &TaskCollection
  ) -> SaveOutcome {
    let Some(draft) = self.drafts.get(&id)
    else {
      return SaveOutcome::NotEditing;
    };
    if tasks.get(id).is_none() {
      debug!(%id, "edit save ignored: task no longer exists");
      return SaveOutcome::Orphaned;
    }

    let updated = tasks
      .update_fields(id, &draft.to_patch());
    self.drafts.remove(&id);
    debug!(%id, "edit saved");
    SaveOutcome::Saved(updated)
  }

  pub fn clear(&mut self) {
    self.drafts.clear();
  }
}
