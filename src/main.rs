use std::rc::Rc;

use gunga_tattoo::config::{self, SiteConfig};
use gunga_tattoo::{App, AppProps};
use log::{error, info};

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    let config = match SiteConfig::embedded() {
        Ok(config) => config,
        Err(e) => {
            error!("Refusing to start: {}", e);
            return;
        }
    };

    info!("Starting application");
    yew::Renderer::<App>::with_props(AppProps {
        config: Rc::new(config),
    })
    .render();
}
