mod app;
mod component;
mod logging;
mod surface;

use app::{App, AppProps};
use cardpager_common::{PagerConfig, DEFAULT_CONFIG};
use tracing::error;

fn main() {
    console_error_panic_hook::set_once();

    let config = match PagerConfig::from_toml_str(DEFAULT_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            web_sys::console::error_1(&e.to_string().into());
            return;
        }
    };

    match config.log_level() {
        Ok(level) => logging::init(level),
        Err(e) => {
            logging::init(tracing::Level::INFO);
            error!(%e, "falling back to info log level");
        }
    }

    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
