use log::warn;
use web_sys::Element;
use yew::prelude::*;

use crate::config::REVEAL_THRESHOLD;
use crate::interaction::reveal::{RevealState, ViewportObserver};

#[derive(Properties, PartialEq)]
pub struct RevealOnScrollProps {
    /// Transition delay in ms, used to stagger neighbouring blocks.
    #[prop_or_default]
    pub delay: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Fades and slides its children in the first time a tenth of them is on screen.
#[function_component(RevealOnScroll)]
pub fn reveal_on_scroll(props: &RevealOnScrollProps) -> Html {
    let node = use_node_ref();
    let state = use_state(RevealState::default);

    {
        let node = node.clone();
        let state = state.clone();
        use_effect_with_deps(
            move |_| {
                let observer = node.cast::<Element>().and_then(|element| {
                    let mut current = RevealState::Hidden;
                    let on_change = {
                        let state = state.clone();
                        move |intersecting: bool, ratio: f64| {
                            let next = current.observe(intersecting, ratio, REVEAL_THRESHOLD);
                            if next != current {
                                current = next;
                                state.set(next);
                            }
                        }
                    };
                    match ViewportObserver::observe(&element, REVEAL_THRESHOLD, on_change) {
                        Ok(observer) => Some(observer),
                        Err(e) => {
                            // No observer means no trigger, so show the block right away
                            warn!("Reveal disabled for block: {}", e);
                            state.set(RevealState::Visible);
                            None
                        }
                    }
                });
                move || drop(observer)
            },
            (),
        );
    }

    let class = classes!(
        "reveal",
        state.is_visible().then(|| "revealed"),
        props.class.clone()
    );

    html! {
        <div ref={node} {class} style={format!("transition-delay: {}ms;", props.delay)}>
            { for props.children.iter() }
        </div>
    }
}
