use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::SiteConfig;
use crate::contact::{instagram_url, whatsapp_profile};
use crate::interaction::popup::{use_popup_phase, PopupAction};

/// Developer credit that slides in a few seconds after load. Closing it is final.
#[function_component(DevPopup)]
pub fn dev_popup() -> Html {
    let config = use_context::<Rc<SiteConfig>>();
    let phase = use_popup_phase();

    let Some(config) = config else {
        return html! {};
    };
    if !phase.is_open() {
        return html! {};
    }

    let on_close = {
        let dispatcher = phase.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(PopupAction::Dismiss))
    };
    let dev = &config.developer;

    html! {
        <div class={classes!("dev-popup", phase.is_visible().then(|| "dev-popup-visible"))}>
            <div class="dev-popup-card">
                <button class="dev-popup-close" onclick={on_close}>{"✕"}</button>
                <p class="dev-popup-kicker">{"Desenvolvido por"}</p>
                <h4>{dev.name.clone()}</h4>
                <p class="dev-popup-pitch">
                    {"Gostou deste site? Crie uma presença digital profissional para o seu negócio hoje mesmo."}
                </p>
                <a href={dev.site.clone()} target="_blank" rel="noreferrer" class="dev-popup-portfolio">
                    {"Ver Portfólio"}
                </a>
                <div class="dev-popup-contacts">
                    <a href={instagram_url(&dev.instagram)} target="_blank" rel="noreferrer">
                        {format!("@{}", dev.instagram)}
                    </a>
                    <a href={whatsapp_profile(&dev.whatsapp)} target="_blank" rel="noreferrer">
                        {dev.whatsapp_display.clone()}
                    </a>
                </div>
            </div>
        </div>
    }
}
