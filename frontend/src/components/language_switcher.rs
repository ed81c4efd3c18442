use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::i18n::{strings, switch_locale_path, use_locale, Locale};
use crate::Route;

#[function_component(LanguageSwitcher)]
pub fn language_switcher() -> Html {
    let current = use_locale();
    let location = use_location();
    let navigator = use_navigator();
    let text = &strings(current).header;

    let switch_to = |target: Locale| {
        let path = location
            .as_ref()
            .map(|l| l.path().to_string())
            .unwrap_or_else(|| "/".to_string());
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            let next = switch_locale_path(&path, target.code());
            info!("Switching locale to {} ({})", target.code(), next);
            if let Some(navigator) = &navigator {
                navigator.push(&Route::recognize(&next).unwrap_or(Route::NotFound));
            }
        })
    };

    html! {
        <div class="language-switcher">
            { for Locale::ALL.into_iter().map(|locale| html! {
                <button
                    key={locale.code()}
                    class={classes!("locale-option", (locale == current).then(|| "active"))}
                    onclick={switch_to(locale)}
                    aria-label={format!("{} {}", text.switch_to, locale.label())}
                >
                    <span class="locale-flag">{ locale.flag() }</span>
                    <span class="locale-label">{ locale.label() }</span>
                </button>
            }) }
            <style>
                {r#"
                .language-switcher {
                    display: flex;
                    align-items: center;
                    gap: 4px;
                    padding: 4px;
                    border-radius: 999px;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    background: rgba(0, 0, 0, 0.6);
                    backdrop-filter: blur(24px);
                }
                .locale-option {
                    display: flex;
                    align-items: center;
                    gap: 6px;
                    padding: 6px 12px;
                    border: none;
                    border-radius: 999px;
                    background: transparent;
                    color: rgba(255, 255, 255, 0.7);
                    font-size: 0.875rem;
                    font-weight: 500;
                    cursor: pointer;
                    transition: all 0.2s ease;
                }
                .locale-option:hover {
                    color: #fff;
                }
                .locale-option.active {
                    background: #fff;
                    color: #000;
                }
                .locale-flag {
                    font-size: 1rem;
                }
                @media (max-width: 640px) {
                    .locale-label {
                        display: none;
                    }
                }
                "#}
            </style>
        </div>
    }
}
