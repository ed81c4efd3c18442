use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::{footer::Footer, header::Header};
use crate::i18n::{strings, use_locale};
use crate::pages::home::SECTION_STYLES;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let locale = use_locale();
    let text = &strings(locale).not_found;

    html! {
        <div class="not-found-page">
            <Header />
            <section class="section not-found">
                <div class="section-heading">
                    <span class="not-found-code">{"404"}</span>
                    <h1 class="section-title">{ text.title }</h1>
                    <p class="section-description">{ text.description }</p>
                    <Link<Route> to={Route::home(locale)} classes="hero-cta primary">
                        { text.back }
                    </Link<Route>>
                </div>
            </section>
            <Footer />
            <style>{ SECTION_STYLES }</style>
            <style>
                {r#"
                .not-found {
                    min-height: 70vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .not-found-code {
                    font-size: 6rem;
                    font-weight: 100;
                    color: rgba(255, 255, 255, 0.2);
                }
                .not-found .hero-cta {
                    margin-top: 32px;
                }
                "#}
            </style>
        </div>
    }
}
