use std::rc::Rc;

use log::info;
use yew::prelude::*;

pub mod config;
pub mod contact;
pub mod error;
pub mod interaction;
pub mod components {
    pub mod contact_form;
    pub mod dev_popup;
    pub mod nav;
    pub mod reveal;
    pub mod smooth_link;
}
pub mod pages {
    pub mod home;
}

use components::{dev_popup::DevPopup, nav::Nav};
use config::SiteConfig;
use pages::home::Home;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<SiteConfig>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    info!("Rendering {}", props.config.studio.name);

    html! {
        <ContextProvider<Rc<SiteConfig>> context={props.config.clone()}>
            <Nav />
            <Home />
            <DevPopup />
        </ContextProvider<Rc<SiteConfig>>>
    }
}
