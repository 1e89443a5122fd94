mod app;
mod components;

use std::rc::Rc;

use tasklane_core::BoardConfig;
use wasm_tracing::WasmLayerConfig;

fn main() {
  console_error_panic_hook::set_once();

  let parsed = BoardConfig::from_toml_str(
    app::BOARD_CONFIG_TOML
  );
  let level = parsed
    .as_ref()
    .map(BoardConfig::log_level)
    .unwrap_or(tracing::Level::INFO);
  let mut tracing_config =
    WasmLayerConfig::new();
  tracing_config.set_max_level(level);
  let _ =
    wasm_tracing::set_as_global_default_with_config(
      tracing_config
    );

  let config = match parsed {
    | Ok(config) => {
      tracing::info!(
        sort_options =
          config.sort_options.len(),
        "loaded board config"
      );
      config
    }
    | Err(error) => {
      tracing::error!(error = %format!("{error:#}"), "failed to parse board config; using defaults");
      BoardConfig::default()
    }
  };

  tracing::info!(
    "starting tasklane frontend"
  );

  let mount = web_sys::window()
    .and_then(|window| {
      window.document()
    })
    .and_then(|document| {
      document.get_element_by_id("app")
    })
    .expect(
      "missing #app mount element"
    );

  yew::Renderer::<app::App>::with_root_and_props(
    mount,
    app::AppProps {
      config: Rc::new(config)
    }
  )
  .render();
}
