use std::collections::BTreeMap;

use crate::task::{
  Stage,
  Task
};

/// One independent keyword per stage. Empty keywords match everything.
#[derive(
  Debug,
  Clone,
  Default,
  PartialEq,
  Eq,
)]
pub struct FilterState {
  keywords: BTreeMap<Stage, String>
}

impl FilterState {
  pub fn keyword(
    &self,
    stage: Stage
  ) -> &str {
    self
      .keywords
      .get(&stage)
      .map(String::as_str)
      .unwrap_or("")
  }

  pub fn set_keyword(
    &mut self,
    stage: Stage,
    keyword: impl Into<String>
  ) {
    let keyword = keyword.into();
    tracing::debug!(%stage, keyword = %keyword, "filter keyword changed");
    if keyword.is_empty() {
      self.keywords.remove(&stage);
    } else {
      self
        .keywords
        .insert(stage, keyword);
    }
  }

  /// A task is shown when its own stage's keyword occurs in its name or
  /// its person. Matching is case-sensitive.
  pub fn is_visible(
    &self,
    task: &Task
  ) -> bool {
    let keyword = self.keyword(task.status);
    task.name.contains(keyword)
      || task.person.contains(keyword)
  }

  pub fn visible<'a>(
    &'a self,
    tasks: impl IntoIterator<Item = &'a Task>
  ) -> impl Iterator<Item = &'a Task> {
    tasks
      .into_iter()
      .filter(move |task| {
        self.is_visible(task)
      })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::task::TaskId;

  fn task(
    id: u64,
    name: &str,
    person: &str,
    status: Stage
  ) -> Task {
    Task {
      id: TaskId(id),
      name: name.to_string(),
      person: person.to_string(),
      deadline: String::new(),
      status
    }
  }

  #[test]
  fn empty_keyword_shows_whole_stage() {
    let filters = FilterState::default();
    let tasks = vec![
      task(1, "a", "x", Stage::Todo),
      task(2, "", "", Stage::Todo),
      task(3, "b", "y", Stage::Done),
    ];
    assert_eq!(
      filters.visible(&tasks).count(),
      3
    );
  }

  #[test]
  fn keyword_matches_name_or_person() {
    let mut filters =
      FilterState::default();
    filters
      .set_keyword(Stage::Todo, "ann");

    assert!(filters.is_visible(&task(
      1,
      "plan annual review",
      "bo",
      Stage::Todo
    )));
    assert!(filters.is_visible(&task(
      2,
      "ship",
      "joanna",
      Stage::Todo
    )));
    assert!(!filters.is_visible(&task(
      3,
      "ship",
      "bo",
      Stage::Todo
    )));
  }

  #[test]
  fn keywords_are_scoped_per_stage() {
    let mut filters =
      FilterState::default();
    filters
      .set_keyword(Stage::Doing, "zzz");

    assert!(filters.is_visible(&task(
      1,
      "a",
      "b",
      Stage::Todo
    )));
    assert!(!filters.is_visible(&task(
      2,
      "a",
      "b",
      Stage::Doing
    )));
    assert_eq!(
      filters.keyword(Stage::Todo),
      ""
    );
    assert_eq!(
      filters.keyword(Stage::Doing),
      "zzz"
    );
  }

  #[test]
  fn matching_is_case_sensitive() {
    let mut filters =
      FilterState::default();
    filters
      .set_keyword(Stage::Todo, "Bug");

    assert!(!filters.is_visible(&task(
      1,
      "fix bug",
      "",
      Stage::Todo
    )));
  }

  #[test]
  fn clearing_keyword_restores_visibility()
   {
    let mut filters =
      FilterState::default();
    filters
      .set_keyword(Stage::Done, "nope");
    filters.set_keyword(Stage::Done, "");

    assert_eq!(
      filters,
      FilterState::default()
    );
  }
}
