use std::rc::Rc;

use gloo::console::log;
use gloo::events::EventListener;
use tasklane_core::{
  Action,
  Board,
  BoardConfig,
  project
};
use yew::{
  Callback,
  Html,
  Properties,
  Reducible,
  function_component,
  html,
  use_effect_with,
  use_reducer
};

use crate::components::{
  RegisterForm,
  StageTable
};

pub const BOARD_CONFIG_TOML: &str =
  include_str!("../assets/board.toml");

#[derive(Properties, PartialEq)]
pub struct AppProps {
  pub config: Rc<BoardConfig>
}

#[derive(Clone, Default, PartialEq)]
struct BoardState {
  board: Board
}

impl Reducible for BoardState {
  type Action = Action;

  fn reduce(
    self: Rc<Self>,
    action: Action
  ) -> Rc<Self> {
    let mut next = (*self).clone();
    next.board.apply(action);
    Rc::new(next)
  }
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
  let state =
    use_reducer(BoardState::default);

  {
    let dispatcher = state.dispatcher();
    use_effect_with((), move |_| {
      ui_debug(
        "app.mounted",
        "installing outside-click closer"
      );
      let listener = web_sys::window()
        .and_then(|window| {
          window.document()
        })
        .map(|document| {
          EventListener::new(
            &document,
            "click",
            move |_| {
              dispatcher
                .dispatch(Action::CloseMenus)
            }
          )
        });
      if listener.is_none() {
        tracing::warn!(
          "no document available; menus \
           will not close on outside \
           clicks"
        );
      }
      move || drop(listener)
    });
  }

  let on_action = {
    let dispatcher = state.dispatcher();
    Callback::from(move |action: Action| {
      ui_debug(
        "board.action",
        &format!("{action:?}")
      );
      dispatcher.dispatch(action);
    })
  };

  let view =
    project(&state.board, &props.config);
  let labels = props.config.labels.clone();

  html! {
      <main class="board">
          <RegisterForm
              register_label={labels.register.clone()}
              on_action={on_action.clone()}
          />
          <div class="stages">
              {
                  for view.stages.into_iter().map(|stage| { let key = stage.container_id.clone(); html! {
                      <StageTable
                          key={key}
                          view={stage}
                          labels={labels.clone()}
                          on_action={on_action.clone()}
                      />
                  }})
              }
          </div>
      </main>
  }
}

pub(crate) fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
