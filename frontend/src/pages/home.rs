use yew::prelude::*;

use crate::components::{
    about::About, contact_form::ContactForm, footer::Footer, global_presence::GlobalPresence,
    header::Header, hero::Hero, revenue_impact::RevenueImpact, showcase::Showcase,
    what_we_do::WhatWeDo,
};
use crate::navigation::use_fragment_scroll;

/// Layout shared by every content section on the site.
pub const SECTION_STYLES: &str = r#"
body {
    margin: 0;
    background: #000;
    color: #fff;
    font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
}
html {
    scroll-behavior: smooth;
}
.section {
    position: relative;
    padding: 120px 24px;
    overflow: hidden;
}
.section-inner {
    position: relative;
    max-width: 1200px;
    margin: 0 auto;
}
.section-heading {
    text-align: center;
    max-width: 760px;
    margin: 0 auto 64px;
}
.section-title {
    color: #fff;
    font-size: clamp(2rem, 4vw, 3rem);
    font-weight: 200;
    letter-spacing: -0.02em;
    margin: 16px 0;
}
.section-description {
    color: rgba(255, 255, 255, 0.6);
    font-size: 1.125rem;
    font-weight: 300;
    line-height: 1.7;
    margin: 0;
}
.badge {
    display: inline-block;
    padding: 6px 16px;
    border-radius: 999px;
    border: 1px solid rgba(59, 130, 246, 0.3);
    background: rgba(59, 130, 246, 0.1);
    color: #93c5fd;
    font-size: 0.8rem;
    letter-spacing: 0.08em;
    text-transform: uppercase;
}
.hero-cta {
    display: inline-block;
    border-radius: 12px;
    border: 1px solid rgba(255, 255, 255, 0.15);
    padding: 14px 28px;
    color: #fff;
    text-decoration: none;
    font-weight: 300;
    transition: background 0.2s;
}
.hero-cta:hover {
    background: rgba(255, 255, 255, 0.1);
}
.hero-cta.primary {
    background: #fff;
    color: #000;
    border-color: #fff;
}
.hero-cta.primary:hover {
    background: rgba(255, 255, 255, 0.9);
}
@media (max-width: 768px) {
    .section {
        padding: 80px 16px;
    }
}
"#;

#[function_component(Home)]
pub fn home() -> Html {
    use_fragment_scroll();

    html! {
        <div class="home">
            <Header />
            <main>
                <Hero />
                <WhatWeDo />
                <RevenueImpact />
                <Showcase />
                <GlobalPresence />
                <About />
                <ContactForm />
            </main>
            <Footer />
            <style>{ SECTION_STYLES }</style>
        </div>
    }
}
