use tasklane_core::config::SortOption;
use tasklane_core::router::{
  self,
  ATTR_KEY,
  ATTR_ORDER,
  ATTR_STATUS
};
use tasklane_core::sort::SortRequest;
use tasklane_core::{
  Action,
  Stage
};
use web_sys::Element;
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  TargetCast,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct SortMenuProps {
  pub stage:         Stage,
  pub open:          bool,
  pub trigger_label: String,
  pub options:       Vec<SortOption>,
  pub on_action:     Callback<Action>
}

#[function_component(SortMenu)]
pub fn sort_menu(
  props: &SortMenuProps
) -> Html {
  let stage = props.stage.to_string();

  let on_trigger = {
    let on_action =
      props.on_action.clone();
    Callback::from(
      move |event: MouseEvent| {
        // Keep the document closer from
        // re-closing what this click opens.
        event.stop_propagation();
        let status = event
          .target_dyn_into::<Element>()
          .and_then(|target| {
            target
              .get_attribute(ATTR_STATUS)
          });
        if let Some(action) =
          router::sort_menu_from_attrs(
            status.as_deref()
          )
        {
          on_action.emit(action);
        }
      }
    )
  };

  // Option clicks are left to bubble up to the document closer.
  let on_option = {
    let on_action =
      props.on_action.clone();
    Callback::from(
      move |event: MouseEvent| {
        let Some(option) = event
          .target_dyn_into::<Element>()
          .and_then(|target| {
            target
              .closest("[data-key]")
              .ok()
              .flatten()
          })
        else {
          return;
        };
        let request = SortRequest::from_attrs(
          option
            .get_attribute(ATTR_KEY)
            .as_deref(),
          option
            .get_attribute(ATTR_ORDER)
            .as_deref(),
          option
            .get_attribute(ATTR_STATUS)
            .as_deref()
        );
        match request {
          | Some(request) => {
            on_action
              .emit(Action::Sort(request))
          }
          | None => {
            tracing::warn!(
              "sort option without \
               usable data attributes"
            )
          }
        }
      }
    )
  };

  html! {
      <div class="sort-menu-container">
          <button
              class="sort-trigger btn"
              data-status={stage.clone()}
              onclick={on_trigger}
          >
              { props.trigger_label.clone() }
          </button>
          <div
              class={classes!("sort-menu-curtain", props.open.then_some("is-open"))}
              onclick={on_option}
          >
              {
                  for props.options.iter().map(|option| html! {
                      <button
                          class="js-apply-sort"
                          data-key={option.field.to_string()}
                          data-order={option.direction.to_string()}
                          data-status={stage.clone()}
                      >
                          { option.label.clone() }
                      </button>
                  })
              }
          </div>
      </div>
  }
}
