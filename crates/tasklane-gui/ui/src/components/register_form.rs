use tasklane_core::{
  Action,
  NewTask
};
use web_sys::HtmlInputElement;
use yew::{
  Callback,
  Html,
  InputEvent,
  Properties,
  TargetCast,
  function_component,
  html,
  use_state
};

#[derive(Properties, PartialEq)]
pub struct RegisterFormProps {
  pub register_label: String,
  pub on_action:      Callback<Action>
}

/// New-task inputs. Values are kept after registering.
#[function_component(RegisterForm)]
pub fn register_form(
  props: &RegisterFormProps
) -> Html {
  let draft_name = use_state(String::new);
  let draft_person =
    use_state(String::new);
  let draft_deadline =
    use_state(String::new);

  let bind = |handle: &yew::UseStateHandle<String>| {
    let handle = handle.clone();
    Callback::from(
      move |event: InputEvent| {
        let input: HtmlInputElement =
          event.target_unchecked_into();
        handle.set(input.value());
      }
    )
  };

  let onclick = {
    let on_action =
      props.on_action.clone();
    let draft_name = draft_name.clone();
    let draft_person =
      draft_person.clone();
    let draft_deadline =
      draft_deadline.clone();
    Callback::from(move |_| {
      on_action.emit(Action::Register(
        NewTask {
          name:     (*draft_name).clone(),
          person:   (*draft_person).clone(),
          deadline: (*draft_deadline)
            .clone()
        }
      ));
    })
  };

  html! {
      <section class="register">
          <input
              id="new-todo-name"
              placeholder="Task"
              value={(*draft_name).clone()}
              oninput={bind(&draft_name)}
          />
          <input
              id="new-person"
              placeholder="Person"
              value={(*draft_person).clone()}
              oninput={bind(&draft_person)}
          />
          <input
              id="new-deadline"
              type="date"
              value={(*draft_deadline).clone()}
              oninput={bind(&draft_deadline)}
          />
          <button id="register" class="btn" {onclick}>
              { props.register_label.clone() }
          </button>
      </section>
  }
}
