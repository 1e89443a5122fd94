use tasklane_core::router::MENU_ACTION;
use tasklane_core::view::RowAction;
use yew::{
  Html,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct RowMenuProps {
  pub open:          bool,
  pub trigger_label: String,
  pub actions:       Vec<RowAction>
}

/// Action dropdown of a viewing row. Clicks are handled by the stage
/// table's delegated listener through `data-action`.
#[function_component(RowMenu)]
pub fn row_menu(
  props: &RowMenuProps
) -> Html {
  html! {
      <div class="todo-menu-container">
          <button class="menu-trigger" data-action={MENU_ACTION}>
              { props.trigger_label.clone() }
          </button>
          <div class={classes!("menu-curtain", props.open.then_some("is-open"))}>
              {
                  for props.actions.iter().map(|action| html! {
                      <button data-action={action.key()}>
                          { action.label().to_string() }
                      </button>
                  })
              }
          </div>
      </div>
  }
}
