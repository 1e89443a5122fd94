use tracing::debug;

use crate::task::{
  NewTask,
  Stage,
  Task,
  TaskId,
  TaskPatch
};

/// Ordered snapshot of every task on the page.
///
/// Mutators never touch `self`; they hand back the next snapshot. The id
/// counter travels with the snapshot, so ids are strictly increasing in
/// creation order and a deleted task's id is never handed out again.
#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
)]
pub struct TaskCollection {
  tasks:   Vec<Task>,
  next_id: u64
}

impl Default for TaskCollection {
  fn default() -> Self {
    Self::new()
  }
}

impl TaskCollection {
  pub fn new() -> Self {
    Self {
      tasks:   Vec::new(),
      next_id: 1
    }
  }

  /// Rebuild a collection in the given order. The counter resumes after
  /// the highest id present; duplicate ids keep their first occurrence.
  pub fn from_tasks(
    tasks: impl IntoIterator<Item = Task>
  ) -> Self {
    let mut out = Self::new();
    for task in tasks {
      if out.get(task.id).is_some() {
        debug!(id = %task.id, "dropping duplicate task id");
        continue;
      }
      out.next_id =
        out.next_id.max(task.id.0 + 1);
      out.tasks.push(task);
    }
    out
  }

  pub fn iter(
    &self
  ) -> impl Iterator<Item = &Task> {
    self.tasks.iter()
  }

  pub fn as_slice(&self) -> &[Task] {
    &self.tasks
  }

  pub fn len(&self) -> usize {
    self.tasks.len()
  }

  pub fn is_empty(&self) -> bool {
    self.tasks.is_empty()
  }

  pub fn get(
    &self,
    id: TaskId
  ) -> Option<&Task> {
    self
      .tasks
      .iter()
      .find(|task| task.id == id)
  }

  pub fn stage_tasks(
    &self,
    stage: Stage
  ) -> impl Iterator<Item = &Task> {
    self
      .tasks
      .iter()
      .filter(move |task| {
        task.status == stage
      })
  }

  /// Appends a new `todo` task and returns the resulting collection.
  pub fn create(
    &self,
    new_task: NewTask
  ) -> Self {
    let id = TaskId(self.next_id);
    let mut tasks = self.tasks.clone();
    tasks.push(Task {
      id,
      name: new_task.name,
      person: new_task.person,
      deadline: new_task.deadline,
      status: Stage::Todo
    });
    debug!(%id, count = tasks.len(), "created task");
    Self {
      tasks,
      next_id: self.next_id + 1
    }
  }

  pub fn delete(
    &self,
    id: TaskId
  ) -> Self {
    let Some(index) = self
      .tasks
      .iter()
      .position(|task| task.id == id)
    else {
      debug!(%id, "delete ignored: no such task");
      return self.clone();
    };

    let mut tasks = self.tasks.clone();
    tasks.remove(index);
    debug!(%id, count = tasks.len(), "deleted task");
    Self {
      tasks,
      next_id: self.next_id
    }
  }

  /// Moves a task to `next`. Only `todo -> doing` and `doing -> done`
  /// are accepted; anything else leaves the snapshot unchanged.
  pub fn advance_stage(
    &self,
    id: TaskId,
    next: Stage
  ) -> Self {
    match self.get(id) {
      | Some(task)
        if task
          .status
          .can_advance_to(next) =>
      {
        debug!(%id, from = %task.status, to = %next, "advanced task");
        self.map_task(id, |task| {
          task.status = next;
        })
      }
      | Some(task) => {
        debug!(%id, from = %task.status, to = %next, "advance ignored: illegal transition");
        self.clone()
      }
      | None => {
        debug!(%id, "advance ignored: no such task");
        self.clone()
      }
    }
  }

  /// Advances a task to whatever stage follows its current one.
  pub fn advance(
    &self,
    id: TaskId
  ) -> Self {
    match self
      .get(id)
      .and_then(|task| task.status.next())
    {
      | Some(next) => {
        self.advance_stage(id, next)
      }
      | None => {
        debug!(%id, "advance ignored: task missing or already done");
        self.clone()
      }
    }
  }

  /// Writes the supplied fields into the matching task; `id` and
  /// `status` stay as they are.
  pub fn update_fields(
    &self,
    id: TaskId,
    patch: &TaskPatch
  ) -> Self {
    if self.get(id).is_none() {
      debug!(%id, "update ignored: no such task");
      return self.clone();
    }
    debug!(%id, "updated task fields");
    self.map_task(id, |task| {
      patch.apply_to(task)
    })
  }

  pub(crate) fn replace_order(
    &self,
    tasks: Vec<Task>
  ) -> Self {
    Self {
      tasks,
      next_id: self.next_id
    }
  }

  fn map_task(
    &self,
    id: TaskId,
    f: impl FnOnce(&mut Task)
  ) -> Self {
    let mut tasks = self.tasks.clone();
    if let Some(task) = tasks
      .iter_mut()
      .find(|task| task.id == id)
    {
      f(task);
    }
    Self {
      tasks,
      next_id: self.next_id
    }
  }
}
