use web_sys::MouseEvent;
use yew::prelude::*;

use crate::interaction::smooth_scroll::smooth_scroll_to;

#[derive(Properties, PartialEq)]
pub struct SmoothScrollLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Runs before the scroll starts, e.g. to close the mobile menu.
    #[prop_or_default]
    pub on_start: Option<Callback<()>>,
    #[prop_or_default]
    pub children: Children,
}

/// Anchor that animates to its in-page target instead of jumping.
#[function_component(SmoothScrollLink)]
pub fn smooth_scroll_link(props: &SmoothScrollLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        let on_start = props.on_start.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            smooth_scroll_to(&href, on_start.as_ref());
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}
