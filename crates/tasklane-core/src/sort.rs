use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use serde::{
  Deserialize,
  Serialize
};

use crate::store::TaskCollection;
use crate::task::{
  Stage,
  Task
};

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
  Id,
  Name,
  Person,
  Deadline,
  Status
}

impl SortField {
  pub fn as_str(self) -> &'static str {
    match self {
      | SortField::Id => "id",
      | SortField::Name => "name",
      | SortField::Person => "person",
      | SortField::Deadline => {
        "deadline"
      }
      | SortField::Status => "status"
    }
  }

  /// Natural ordering of the field's value: numeric for ids,
  /// lexicographic for everything else. ISO dates sort correctly as
  /// plain strings.
  pub fn compare(
    self,
    a: &Task,
    b: &Task
  ) -> Ordering {
    match self {
      | SortField::Id => a.id.cmp(&b.id),
      | SortField::Name => {
        a.name.cmp(&b.name)
      }
      | SortField::Person => {
        a.person.cmp(&b.person)
      }
      | SortField::Deadline => {
        a.deadline.cmp(&b.deadline)
      }
      | SortField::Status => a
        .status
        .as_str()
        .cmp(b.status.as_str())
    }
  }
}

impl fmt::Display for SortField {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for SortField {
  type Err = anyhow::Error;

  fn from_str(
    raw: &str
  ) -> Result<Self, Self::Err> {
    match raw.trim() {
      | "id" => Ok(SortField::Id),
      | "name" => Ok(SortField::Name),
      | "person" => Ok(SortField::Person),
      | "deadline" => {
        Ok(SortField::Deadline)
      }
      | "status" => Ok(SortField::Status),
      | other => {
        Err(anyhow!(
          "unknown sort field: {other:?}"
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
)]
pub enum SortDirection {
  #[serde(rename = "asc")]
  Ascending,
  #[serde(rename = "desc")]
  Descending
}

impl SortDirection {
  pub fn as_str(self) -> &'static str {
    match self {
      | SortDirection::Ascending => "asc",
      | SortDirection::Descending => {
        "desc"
      }
    }
  }

  fn apply(
    self,
    ordering: Ordering
  ) -> Ordering {
    match self {
      | SortDirection::Ascending => {
        ordering
      }
      | SortDirection::Descending => {
        ordering.reverse()
      }
    }
  }
}

impl fmt::Display for SortDirection {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for SortDirection {
  type Err = anyhow::Error;

  fn from_str(
    raw: &str
  ) -> Result<Self, Self::Err> {
    match raw.trim() {
      | "asc" => {
        Ok(SortDirection::Ascending)
      }
      | "desc" => {
        Ok(SortDirection::Descending)
      }
      | other => {
        Err(anyhow!(
          "unknown sort direction: \
           {other:?}"
        ))
      }
    }
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
)]
pub struct SortRequest {
  pub field:     SortField,
  pub direction: SortDirection,
  pub stage:     Stage
}

/// Stable partitioned sort of one stage.
///
/// Tasks outside `request.stage` keep their relative order and come
/// first; the sorted stage follows them. Ties keep their previous
/// relative order.
pub fn sort(
  tasks: &TaskCollection,
  request: &SortRequest
) -> TaskCollection {
  let (mut target, other): (
    Vec<Task>,
    Vec<Task>
  ) = tasks
    .iter()
    .cloned()
    .partition(|task| {
      task.status == request.stage
    });

  target.sort_by(|a, b| {
    request.direction.apply(
      request.field.compare(a, b)
    )
  });

  tracing::debug!(
    stage = %request.stage,
    field = %request.field,
    direction = %request.direction,
    sorted = target.len(),
    untouched = other.len(),
    "sorted stage"
  );

  let mut ordered = other;
  ordered.extend(target);
  tasks.replace_order(ordered)
}
