use tasklane_core::Action;
use tasklane_core::config::MenuLabels;
use tasklane_core::router::{
  self,
  ATTR_ACTION,
  ATTR_FIELD,
  ATTR_STATUS,
  ATTR_TASK_ID,
  MENU_ACTION
};
use tasklane_core::view::StageView;
use wasm_bindgen::JsCast;
use web_sys::{
  Element,
  HtmlInputElement
};
use yew::{
  Callback,
  Html,
  InputEvent,
  MouseEvent,
  Properties,
  TargetCast,
  function_component,
  html
};

use super::{
  SortMenu,
  TaskRow
};
use crate::app::ui_debug;

#[derive(Properties, PartialEq)]
pub struct StageTableProps {
  pub view:      StageView,
  pub labels:    MenuLabels,
  pub on_action: Callback<Action>
}

/// One stage: header with filter and sort menu, then the row container.
/// The container carries one click and one input listener for all rows.
#[function_component(StageTable)]
pub fn stage_table(
  props: &StageTableProps
) -> Html {
  let stage = props.view.stage;

  let on_filter = {
    let on_action =
      props.on_action.clone();
    Callback::from(
      move |event: InputEvent| {
        let input: HtmlInputElement =
          event.target_unchecked_into();
        let status =
          input.get_attribute(ATTR_STATUS);
        if let Some(action) =
          router::filter_from_attrs(
            status.as_deref(),
            input.value()
          )
        {
          on_action.emit(action);
        }
      }
    )
  };

  let on_row_click = {
    let on_action =
      props.on_action.clone();
    Callback::from(
      move |event: MouseEvent| {
        let Some(control) = event
          .target_dyn_into::<Element>()
          .and_then(|target| {
            target
              .closest("[data-action]")
              .ok()
              .flatten()
          })
        else {
          return;
        };
        let action =
          control.get_attribute(ATTR_ACTION);
        if action.as_deref()
          == Some(MENU_ACTION)
        {
          event.stop_propagation();
        }
        let task_id = control
          .closest("[data-task-id]")
          .ok()
          .flatten()
          .and_then(|row| {
            row.get_attribute(ATTR_TASK_ID)
          });

        match router::row_click_from_attrs(
          action.as_deref(),
          task_id.as_deref()
        ) {
          | Some(decoded) => {
            on_action.emit(decoded)
          }
          | None => {
            ui_debug(
              "row.click.ignored",
              action
                .as_deref()
                .unwrap_or("")
            )
          }
        }
      }
    )
  };

  let on_row_input = {
    let on_action =
      props.on_action.clone();
    Callback::from(
      move |event: InputEvent| {
        let Some(input) = event
          .target()
          .and_then(|target| {
            target
              .dyn_into::<HtmlInputElement>()
              .ok()
          })
        else {
          return;
        };
        let task_id = input
          .closest("[data-task-id]")
          .ok()
          .flatten()
          .and_then(|row| {
            row.get_attribute(ATTR_TASK_ID)
          });
        if let Some(action) =
          router::edit_input_from_attrs(
            input
              .get_attribute(ATTR_FIELD)
              .as_deref(),
            task_id.as_deref(),
            input.value()
          )
        {
          on_action.emit(action);
        }
      }
    )
  };

  html! {
      <section class={format!("stage stage-{stage}")}>
          <header class="stage-header">
              <h2>{ props.view.title.clone() }</h2>
              <input
                  class="js-todo-filter"
                  placeholder="Filter"
                  data-status={stage.to_string()}
                  value={props.view.keyword.clone()}
                  oninput={on_filter}
              />
              <SortMenu
                  stage={stage}
                  open={props.view.sort_menu_open}
                  trigger_label={props.labels.sort_trigger.clone()}
                  options={props.view.sort_options.clone()}
                  on_action={props.on_action.clone()}
              />
          </header>
          <table>
              <tbody
                  id={props.view.container_id.clone()}
                  onclick={on_row_click}
                  oninput={on_row_input}
              >
                  {
                      for props.view.rows.iter().cloned().map(|row| { let key = row.id.0; html! {
                          <TaskRow
                              key={key}
                              row={row}
                              labels={props.labels.clone()}
                          />
                      }})
                  }
              </tbody>
          </table>
      </section>
  }
}
