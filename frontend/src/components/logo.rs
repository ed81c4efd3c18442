use yew::prelude::*;
use yew_router::prelude::*;

use crate::i18n::use_locale;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct LogoProps {
    #[prop_or(40)]
    pub size: u32,
}

#[function_component(Logo)]
pub fn logo(props: &LogoProps) -> Html {
    let locale = use_locale();
    let size = format!("max-width: {0}px; max-height: {0}px;", props.size);

    html! {
        <Link<Route> to={Route::home(locale)} classes="site-logo">
            <img
                src="/chip.webp"
                alt="ZielHub"
                width={props.size.to_string()}
                height={props.size.to_string()}
                style={size}
            />
            <style>
                {r#"
                .site-logo {
                    display: inline-flex;
                    align-items: center;
                    transition: opacity 0.2s ease;
                }
                .site-logo:hover {
                    opacity: 0.8;
                }
                .site-logo img {
                    object-fit: contain;
                }
                "#}
            </style>
        </Link<Route>>
    }
}
