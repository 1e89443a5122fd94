use anyhow::Context;
use serde::Deserialize;
use tracing::{
  Level,
  debug,
  warn
};

use crate::sort::{
  SortDirection,
  SortField
};
use crate::task::Stage;

fn default_log_level() -> String {
  "info".to_string()
}

/// Board texts and sort menu contents, read from the bundled
/// `board.toml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BoardConfig {
  #[serde(default = "default_log_level")]
  pub log_level:    String,
  #[serde(default)]
  pub labels:       MenuLabels,
  #[serde(default)]
  pub stages:       StageLabelSet,
  #[serde(default)]
  pub sort_options: Vec<SortOption>
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MenuLabels {
  pub menu_trigger: String,
  pub sort_trigger: String,
  pub update:       String,
  pub delete:       String,
  pub save:         String,
  pub register:     String
}

#[derive(
  Debug,
  Clone,
  Default,
  PartialEq,
  Deserialize,
)]
#[serde(default)]
pub struct StageLabels {
  pub title:         String,
  pub advance_label: String
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StageLabelSet {
  pub todo:  StageLabels,
  pub doing: StageLabels,
  pub done:  StageLabels
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SortOption {
  pub field:     SortField,
  pub direction: SortDirection,
  #[serde(default)]
  pub label:     String
}

impl Default for MenuLabels {
  fn default() -> Self {
    Self {
      menu_trigger: "Actions".to_string(),
      sort_trigger: "Sort".to_string(),
      update:       "Update".to_string(),
      delete:       "Delete".to_string(),
      save:         "Save".to_string(),
      register:     "Register".to_string()
    }
  }
}

impl Default for StageLabelSet {
  fn default() -> Self {
    Self {
      todo:  StageLabels {
        title:         "Todo".to_string(),
        advance_label: "Move to Doing"
          .to_string()
      },
      doing: StageLabels {
        title:         "Doing".to_string(),
        advance_label: "Move to Done"
          .to_string()
      },
      done:  StageLabels {
        title:         "Done".to_string(),
        advance_label: String::new()
      }
    }
  }
}

impl StageLabelSet {
  pub fn get(
    &self,
    stage: Stage
  ) -> &StageLabels {
    match stage {
      | Stage::Todo => &self.todo,
      | Stage::Doing => &self.doing,
      | Stage::Done => &self.done
    }
  }

  fn get_mut(
    &mut self,
    stage: Stage
  ) -> &mut StageLabels {
    match stage {
      | Stage::Todo => &mut self.todo,
      | Stage::Doing => &mut self.doing,
      | Stage::Done => &mut self.done
    }
  }
}

impl SortOption {
  fn new(
    field: SortField,
    direction: SortDirection,
    label: &str
  ) -> Self {
    Self {
      field,
      direction,
      label: label.to_string()
    }
  }

  fn default_label(&self) -> String {
    let arrow = match self.direction {
      | SortDirection::Ascending => "↑",
      | SortDirection::Descending => "↓"
    };
    format!("{} {arrow}", self.field)
  }
}

impl Default for BoardConfig {
  fn default() -> Self {
    Self {
      log_level:    default_log_level(),
      labels:       MenuLabels::default(),
      stages:       StageLabelSet::default(),
      sort_options: default_sort_options()
    }
  }
}

fn default_sort_options() -> Vec<SortOption>
{
  use SortDirection::{
    Ascending,
    Descending
  };
  vec![
    SortOption::new(
      SortField::Deadline,
      Ascending,
      "Deadline (earliest first)"
    ),
    SortOption::new(
      SortField::Deadline,
      Descending,
      "Deadline (latest first)"
    ),
    SortOption::new(
      SortField::Name,
      Ascending,
      "Name (A-Z)"
    ),
    SortOption::new(
      SortField::Name,
      Descending,
      "Name (Z-A)"
    ),
    SortOption::new(
      SortField::Person,
      Ascending,
      "Person (A-Z)"
    ),
    SortOption::new(
      SortField::Person,
      Descending,
      "Person (Z-A)"
    ),
  ]
}

impl BoardConfig {
  pub fn from_toml_str(
    raw: &str
  ) -> anyhow::Result<Self> {
    let cfg = toml::from_str::<Self>(raw)
      .context(
        "failed to parse board config"
      )?;
    Ok(cfg.sanitize())
  }

  /// Fills blank labels from the defaults and drops duplicate sort
  /// options. An empty option list falls back to the default list.
  pub fn sanitize(mut self) -> Self {
    let defaults = Self::default();

    let labels = &mut self.labels;
    for (value, fallback) in [
      (
        &mut labels.menu_trigger,
        &defaults.labels.menu_trigger
      ),
      (
        &mut labels.sort_trigger,
        &defaults.labels.sort_trigger
      ),
      (
        &mut labels.update,
        &defaults.labels.update
      ),
      (
        &mut labels.delete,
        &defaults.labels.delete
      ),
      (&mut labels.save, &defaults.labels.save),
      (
        &mut labels.register,
        &defaults.labels.register
      ),
    ] {
      if value.trim().is_empty() {
        *value = fallback.clone();
      }
    }

    for stage in Stage::ALL {
      let fallback =
        defaults.stages.get(stage);
      let entry =
        self.stages.get_mut(stage);
      if entry.title.trim().is_empty() {
        entry.title = fallback.title.clone();
      }
      if entry
        .advance_label
        .trim()
        .is_empty()
      {
        entry.advance_label =
          fallback.advance_label.clone();
      }
    }

    let mut seen = Vec::new();
    self.sort_options.retain(|option| {
      let key =
        (option.field, option.direction);
      if seen.contains(&key) {
        debug!(field = %option.field, direction = %option.direction, "dropping duplicate sort option");
        false
      } else {
        seen.push(key);
        true
      }
    });
    for option in &mut self.sort_options {
      if option.label.trim().is_empty() {
        option.label = option.default_label();
      }
    }
    if self.sort_options.is_empty() {
      warn!(
        "board config has no sort \
         options; using defaults"
      );
      self.sort_options =
        defaults.sort_options;
    }

    self
  }

  pub fn log_level(&self) -> Level {
    self
      .log_level
      .trim()
      .parse::<Level>()
      .unwrap_or(Level::INFO)
  }

  pub fn stage_title(
    &self,
    stage: Stage
  ) -> &str {
    &self.stages.get(stage).title
  }

  pub fn advance_label(
    &self,
    stage: Stage
  ) -> &str {
    &self.stages.get(stage).advance_label
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_file_yields_defaults() {
    let cfg = BoardConfig::from_toml_str("")
      .expect("empty config parses");
    assert_eq!(cfg, BoardConfig::default());
  }

  #[test]
  fn partial_labels_fall_back_per_field() {
    let cfg = BoardConfig::from_toml_str(
      r#"
log_level = "debug"

[labels]
update = "Edit"
delete = "  "

[stages.doing]
title = "In progress"
"#
    )
    .expect("config parses");

    assert_eq!(cfg.labels.update, "Edit");
    assert_eq!(cfg.labels.delete, "Delete");
    assert_eq!(
      cfg.stage_title(Stage::Doing),
      "In progress"
    );
    assert_eq!(
      cfg.advance_label(Stage::Doing),
      "Move to Done"
    );
    assert_eq!(cfg.log_level(), Level::DEBUG);
  }

  #[test]
  fn sort_options_are_deduplicated_and_labelled()
   {
    let cfg = BoardConfig::from_toml_str(
      r#"
[[sort_options]]
field = "name"
direction = "asc"

[[sort_options]]
field = "name"
direction = "asc"
label = "dup"

[[sort_options]]
field = "id"
direction = "desc"
label = "Newest"
"#
    )
    .expect("config parses");

    assert_eq!(cfg.sort_options.len(), 2);
    assert_eq!(
      cfg.sort_options[0].label,
      "name ↑"
    );
    assert_eq!(
      cfg.sort_options[1].field,
      SortField::Id
    );
  }

  #[test]
  fn unknown_sort_field_is_an_error() {
    let err = BoardConfig::from_toml_str(
      r#"
[[sort_options]]
field = "priority"
direction = "asc"
"#
    );
    assert!(err.is_err());
  }

  #[test]
  fn bad_log_level_means_info() {
    let cfg = BoardConfig {
      log_level: "loud".to_string(),
      ..BoardConfig::default()
    };
    assert_eq!(cfg.log_level(), Level::INFO);
  }
}
