use log::error;
use stylist::Style;
use yew::prelude::*;

use crate::config;
use crate::hooks::use_entered;

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    /// Stagger offset for cards in a grid.
    #[prop_or_default]
    pub delay_ms: u32,
    /// Fired once, when the wrapped content first scrolls into view.
    #[prop_or_default]
    pub on_enter: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

/// Slides and fades its children in the first time they become visible.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let entered = use_entered(node.clone(), config::VISIBILITY_THRESHOLD);
    let timing = use_state_eq(|| None::<String>);

    // Registering a stylesheet touches the document, so it waits until the element is mounted
    {
        let timing = timing.clone();
        use_effect_with_deps(
            move |delay_ms| {
                timing.set(transition_class(*delay_ms));
                || ()
            },
            props.delay_ms,
        );
    }

    {
        let on_enter = props.on_enter.clone();
        use_effect_with_deps(
            move |entered| {
                if *entered {
                    on_enter.emit(());
                }
                || ()
            },
            entered,
        );
    }

    html! {
        <div
            ref={node}
            class={classes!("reveal", entered.then(|| "entered"), (*timing).clone(), props.class.clone())}
        >
            { for props.children.iter() }
        </div>
    }
}

fn transition_class(delay_ms: u32) -> Option<String> {
    let css = format!(
        "transition: opacity {duration}ms ease-out {delay}ms, transform {duration}ms ease-out {delay}ms;",
        duration = config::ENTRANCE_DURATION_MS,
        delay = delay_ms,
    );
    match Style::new(css) {
        Ok(style) => Some(style.get_class_name().to_string()),
        Err(e) => {
            error!("Failed to register reveal transition: {}", e);
            None
        }
    }
}
