use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use serde::{
  Deserialize,
  Serialize
};

/// Workflow position of a task.
#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
  Todo,
  Doing,
  Done
}

impl Stage {
  /// Display order of the stage tables.
  pub const ALL: [Stage; 3] = [
    Stage::Todo,
    Stage::Doing,
    Stage::Done
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      | Stage::Todo => "todo",
      | Stage::Doing => "doing",
      | Stage::Done => "done"
    }
  }

  /// The only stage a task may move to from `self`, if any.
  pub fn next(self) -> Option<Stage> {
    match self {
      | Stage::Todo => Some(Stage::Doing),
      | Stage::Doing => Some(Stage::Done),
      | Stage::Done => None
    }
  }

  pub fn can_advance_to(
    self,
    next: Stage
  ) -> bool {
    self.next() == Some(next)
  }

  /// Id of the row container the renderer fills for this stage.
  pub fn container_id(self) -> String {
    format!("{}-list", self.as_str())
  }
}

impl fmt::Display for Stage {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Stage {
  type Err = anyhow::Error;

  fn from_str(
    raw: &str
  ) -> Result<Self, Self::Err> {
    match raw.trim() {
      | "todo" => Ok(Stage::Todo),
      | "doing" => Ok(Stage::Doing),
      | "done" => Ok(Stage::Done),
      | other => {
        Err(anyhow!(
          "unknown stage: {other:?}"
        ))
      }
    }
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  PartialOrd,
  Ord,
  Hash,
)]
#[serde(transparent)]
pub struct TaskId(pub u64);

impl fmt::Display for TaskId {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl FromStr for TaskId {
  type Err = anyhow::Error;

  fn from_str(
    raw: &str
  ) -> Result<Self, Self::Err> {
    raw
      .trim()
      .parse::<u64>()
      .map(TaskId)
      .map_err(|error| {
        anyhow!(
          "invalid task id {raw:?}: \
           {error}"
        )
      })
  }
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct Task {
  pub id:       TaskId,
  #[serde(default)]
  pub name:     String,
  #[serde(default)]
  pub person:   String,
  #[serde(default)]
  pub deadline: String,
  pub status:   Stage
}

/// Field values read from the register form.
#[derive(
  Debug,
  Clone,
  Default,
  PartialEq,
  Eq,
)]
pub struct NewTask {
  pub name:     String,
  pub person:   String,
  pub deadline: String
}

/// Partial update of the editable fields; `id` and `status` are never
/// touched through a patch.
#[derive(
  Debug,
  Clone,
  Default,
  PartialEq,
  Eq,
)]
pub struct TaskPatch {
  pub name:     Option<String>,
  pub person:   Option<String>,
  pub deadline: Option<String>
}

impl TaskPatch {
  pub fn apply_to(
    &self,
    task: &mut Task
  ) {
    if let Some(name) = &self.name {
      task.name = name.clone();
    }
    if let Some(person) = &self.person {
      task.person = person.clone();
    }
    if let Some(deadline) =
      &self.deadline
    {
      task.deadline = deadline.clone();
    }
  }
}
