use yew::prelude::*;

use crate::animation::{use_hover, HoverLift};

#[derive(Properties, PartialEq)]
pub struct HoverCardProps {
    pub lift: HoverLift,
    #[prop_or_default]
    pub class: Classes,
    /// Entrance style; applied to a wrapper so it never fights the lift.
    #[prop_or_default]
    pub style: String,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(HoverCard)]
pub fn hover_card(props: &HoverCardProps) -> Html {
    let hover = use_hover();

    html! {
        <div class="hover-card-slot" style={props.style.clone()}>
            <div
                class={props.class.clone()}
                style={props.lift.style(hover.hovered)}
                onmouseenter={hover.onmouseenter}
                onmouseleave={hover.onmouseleave}
            >
                { for props.children.iter() }
            </div>
        </div>
    }
}
