use tasklane_core::config::MenuLabels;
use tasklane_core::edit::{
  EditDraft,
  EditField
};
use tasklane_core::view::{
  RowCells,
  RowView
};
use yew::{
  Html,
  Properties,
  function_component,
  html
};

use super::RowMenu;

#[derive(Properties, PartialEq)]
pub struct TaskRowProps {
  pub row:    RowView,
  pub labels: MenuLabels
}

#[function_component(TaskRow)]
pub fn task_row(
  props: &TaskRowProps
) -> Html {
  let row = &props.row;
  let task_id = row.id.to_string();

  match &row.cells {
    | RowCells::Display {
      name,
      person,
      deadline
    } => {
      html! {
          <tr data-task-id={task_id}>
              <td>{ name.clone() }</td>
              <td>{ person.clone() }</td>
              <td>{ deadline.clone() }</td>
              <td>
                  <RowMenu
                      open={row.menu_open}
                      trigger_label={props.labels.menu_trigger.clone()}
                      actions={row.actions.clone()}
                  />
              </td>
          </tr>
      }
    }
    | RowCells::Editing(draft) => {
      html! {
          <tr data-task-id={task_id} class="editing">
              { edit_cell(draft, EditField::Name) }
              { edit_cell(draft, EditField::Person) }
              { edit_cell(draft, EditField::Deadline) }
              <td>
                  {
                      for row.actions.iter().map(|action| html! {
                          <button class="btn" data-action={action.key()}>
                              { action.label().to_string() }
                          </button>
                      })
                  }
              </td>
          </tr>
      }
    }
  }
}

fn edit_cell(
  draft: &EditDraft,
  field: EditField
) -> Html {
  html! {
      <td>
          <input
              type={field.input_type()}
              data-field={field.as_str()}
              value={draft.get(field).to_string()}
          />
      </td>
  }
}
