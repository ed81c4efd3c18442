use gloo_timers::callback::Timeout;
use log::info;
use yew::prelude::*;

use crate::animation::{use_mount_reveal, use_scroll_reveal, Pose, RevealTimeline, RevealTrack};
use crate::cases::{case_slugs, case_studies, CaseExpansion, CaseStudy, Direction, DEEP_LINK_SCROLL_DELAY_MS};
use crate::components::charts::{ComparisonChart, TrendChart};
use crate::components::{footer::Footer, header::Header};
use crate::i18n::strings::CasesText;
use crate::i18n::{localized_href, strings, use_locale};
use crate::navigation::{anchor_click, scroll_to_section};
use crate::pages::home::SECTION_STYLES;

fn hero_timeline() -> RevealTimeline {
    RevealTimeline::new().track(RevealTrack::new(Pose::hidden().y(30.0).blur(8.0), 0.8).stagger(0.15, 3))
}

fn list_timeline(cases: usize) -> RevealTimeline {
    RevealTimeline::new().track(RevealTrack::new(Pose::hidden().y(50.0), 0.8).stagger(0.2, cases))
}

fn current_fragment() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

fn direction_class(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => "metric-up",
        Direction::Down => "metric-down",
        Direction::Neutral => "metric-neutral",
    }
}

fn render_details(case: &CaseStudy, text: &CasesText) -> Html {
    html! {
        <div class="case-details">
            <div class="case-story">
                <div>
                    <h4>{ text.challenge }</h4>
                    <p>{ &case.challenge }</p>
                </div>
                <div>
                    <h4>{ text.solution }</h4>
                    <p>{ &case.solution }</p>
                </div>
            </div>
            <div>
                <h4>{ text.implementation }</h4>
                <ol class="case-steps">
                    { for case.implementation.iter().map(|step| html! { <li>{ step }</li> }) }
                </ol>
            </div>
            <div>
                <h4>{ text.results }</h4>
                <p>{ &case.results_description }</p>
                <div class="case-metrics">
                    { for case.metrics.iter().map(|metric| html! {
                        <div class={classes!("case-metric", direction_class(metric.direction()))}>
                            <span class="case-metric-value">{ &metric.value }</span>
                            <span class="case-metric-label">{ &metric.label }</span>
                            <span class="case-metric-change">{ &metric.change }</span>
                        </div>
                    }) }
                </div>
            </div>
            if case.has_charts() {
                <div class="case-charts">
                    if let Some(points) = case.trend.clone() {
                        <TrendChart title={text.performance} {points} />
                    }
                    if let Some(points) = case.comparison.clone() {
                        <ComparisonChart
                            title={text.before_after}
                            before_label={text.before}
                            after_label={text.after}
                            {points}
                        />
                    }
                </div>
            }
        </div>
    }
}

#[function_component(Cases)]
pub fn cases() -> Html {
    let locale = use_locale();
    let text = &strings(locale).cases;
    let cases = use_memo(|locale| case_studies(*locale), locale);
    let expansion = use_state(|| CaseExpansion::from_fragment(&current_fragment(), case_slugs()));

    let hero = hero_timeline();
    let hero_phase = use_mount_reveal(300, hero.total_millis());
    let list_node = use_node_ref();
    let list = list_timeline(cases.len());
    let list_phase = use_scroll_reveal(list_node.clone(), list.trigger, list.total_millis());

    {
        let deep_link = expansion.expanded().map(str::to_string);
        use_effect_with_deps(
            move |_| {
                let timer = deep_link.map(|slug| {
                    info!("Opening case {} from link", slug);
                    Timeout::new(DEEP_LINK_SCROLL_DELAY_MS, move || {
                        scroll_to_section(&slug);
                    })
                });
                move || drop(timer)
            },
            (),
        );
    }

    html! {
        <div class="cases-page">
            <Header />
            <section class="section cases-hero">
                <div class="section-heading">
                    <span class="badge" style={hero.style(hero_phase, 0, 0)}>{ text.badge }</span>
                    <h1 class="section-title" style={hero.style(hero_phase, 0, 1)}>{ text.title }</h1>
                    <p class="section-description" style={hero.style(hero_phase, 0, 2)}>{ text.description }</p>
                </div>
            </section>

            <section ref={list_node} class="section cases-list">
                <div class="section-inner">
                    { for cases.iter().enumerate().map(|(i, case)| {
                        let open = expansion.is_expanded(&case.slug);
                        let toggle = {
                            let expansion = expansion.clone();
                            let slug = case.slug.clone();
                            Callback::from(move |_: MouseEvent| expansion.set(expansion.toggle(&slug)))
                        };
                        html! {
                            <article
                                key={case.slug.clone()}
                                id={case.slug.clone()}
                                class={classes!("case-article", open.then_some("open"))}
                                style={list.style(list_phase, 0, i)}
                            >
                                <div class="case-header">
                                    <img src={case.image.clone()} alt={case.company.clone()} loading="lazy" />
                                    <div class="case-heading">
                                        <span class="case-category">{ &case.category }{" · "}{ &case.duration }</span>
                                        <h2>{ &case.company }</h2>
                                        <h3>{ &case.title }</h3>
                                        <p>{ &case.summary }</p>
                                    </div>
                                </div>
                                if open {
                                    { render_details(case, text) }
                                }
                                <button class="case-toggle" onclick={toggle} aria-expanded={open.to_string()}>
                                    { if open { text.view_less } else { text.view_full } }
                                </button>
                            </article>
                        }
                    }) }
                </div>
            </section>

            <section class="section cases-cta">
                <div class="section-heading">
                    <h2 class="section-title">{ text.cta_title }</h2>
                    <p class="section-description">{ text.cta_description }</p>
                    <a
                        href={localized_href(locale, "/#contact-form")}
                        class="hero-cta primary"
                        onclick={anchor_click("contact-form", None)}
                    >
                        { text.cta_button }
                    </a>
                </div>
            </section>
            <Footer />
            <style>{ SECTION_STYLES }</style>
            <style>
                {r#"
                .cases-hero {
                    padding-top: 180px;
                    padding-bottom: 40px;
                }
                .cases-list .section-inner {
                    display: flex;
                    flex-direction: column;
                    gap: 32px;
                }
                .case-article {
                    border-radius: 24px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(10, 10, 10, 0.6);
                    padding: 32px;
                    scroll-margin-top: 80px;
                }
                .case-article.open {
                    border-color: rgba(59, 130, 246, 0.4);
                }
                .case-header {
                    display: grid;
                    grid-template-columns: 240px 1fr;
                    gap: 32px;
                    align-items: center;
                }
                .case-header img {
                    width: 100%;
                    height: 160px;
                    object-fit: cover;
                    border-radius: 16px;
                    background: linear-gradient(135deg, #171717, #262626);
                }
                .case-category {
                    color: #93c5fd;
                    font-size: 0.8rem;
                    text-transform: uppercase;
                    letter-spacing: 0.08em;
                }
                .case-heading h2 {
                    margin: 8px 0 4px;
                    font-weight: 300;
                }
                .case-heading h3 {
                    margin: 0 0 12px;
                    color: rgba(255, 255, 255, 0.8);
                    font-weight: 300;
                }
                .case-heading p,
                .case-details p,
                .case-steps {
                    color: rgba(255, 255, 255, 0.6);
                    line-height: 1.7;
                    font-weight: 300;
                }
                .case-details {
                    display: flex;
                    flex-direction: column;
                    gap: 32px;
                    margin-top: 32px;
                    padding-top: 32px;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                }
                .case-details h4 {
                    margin: 0 0 12px;
                    color: #fff;
                    font-weight: 400;
                }
                .case-story {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 32px;
                }
                .case-metrics {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                    gap: 16px;
                    margin-top: 16px;
                }
                .case-metric {
                    display: flex;
                    flex-direction: column;
                    gap: 4px;
                    padding: 16px;
                    border-radius: 12px;
                    background: rgba(255, 255, 255, 0.04);
                }
                .case-metric-value {
                    font-size: 1.75rem;
                    font-weight: 200;
                }
                .case-metric-label {
                    color: rgba(255, 255, 255, 0.5);
                    font-size: 0.85rem;
                }
                .metric-up .case-metric-change { color: #4ade80; }
                .metric-down .case-metric-change { color: #f87171; }
                .metric-neutral .case-metric-change { color: #60a5fa; }
                .case-charts {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
                    gap: 24px;
                }
                .case-toggle {
                    margin-top: 24px;
                    padding: 10px 20px;
                    border-radius: 999px;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                    background: transparent;
                    color: #fff;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }
                .case-toggle:hover {
                    background: rgba(255, 255, 255, 0.08);
                }
                @media (max-width: 768px) {
                    .case-header {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
