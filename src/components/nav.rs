use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::smooth_link::SmoothScrollLink;
use crate::config::SiteConfig;
use crate::interaction::active_section::{use_active_section, use_scrolled};

#[function_component(Nav)]
pub fn nav() -> Html {
    let config = use_context::<Rc<SiteConfig>>();
    let menu_open = use_state(|| false);
    let is_scrolled = use_scrolled();
    let section_ids = config.as_ref().map(|c| c.section_ids()).unwrap_or_default();
    let active_section = use_active_section(section_ids);

    let Some(config) = config else {
        return html! {};
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| {
            menu_open.set(false);
        })
    };

    let mobile_class = classes!("mobile-menu", (*menu_open).then(|| "mobile-menu-open"));

    html! {
        <>
            <div class="nav-wrapper">
                <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
                    <SmoothScrollLink href="#home" class={classes!("nav-logo")}>
                        {config.studio.brand.clone()}
                        <span class="nav-dot"></span>
                    </SmoothScrollLink>

                    <div class="nav-links">
                        { for config.sections.iter().map(|item| html! {
                            <SmoothScrollLink
                                href={format!("#{}", item.id)}
                                class={classes!("nav-link", (active_section == item.id).then(|| "active"))}
                            >
                                {item.label.clone()}
                            </SmoothScrollLink>
                        }) }
                    </div>

                    <button class="burger-menu" onclick={toggle_menu}>
                        { if *menu_open { "✕" } else { "☰" } }
                    </button>
                </nav>
            </div>

            <div class={mobile_class}>
                <div class="mobile-menu-links">
                    { for config.sections.iter().map(|item| html! {
                        <div class="mobile-menu-item">
                            <SmoothScrollLink
                                href={format!("#{}", item.id)}
                                on_start={close_menu.clone()}
                                class={classes!("mobile-menu-link")}
                            >
                                {item.label.clone()}
                            </SmoothScrollLink>
                        </div>
                    }) }
                </div>
            </div>
        </>
    }
}
