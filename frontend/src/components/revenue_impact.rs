use yew::prelude::*;

use crate::animation::{use_scroll_reveal, Pose, RevealTimeline, RevealTrack};
use crate::i18n::{localized_href, strings, use_locale};
use crate::navigation::anchor_click;

/// Badge, heading, description, comparison, drivers, outcomes and CTA.
const ITEMS: usize = 7;

fn timeline() -> RevealTimeline {
    RevealTimeline::new().track(RevealTrack::new(Pose::hidden().y(30.0), 0.8).stagger(0.15, ITEMS))
}

#[function_component(RevenueImpact)]
pub fn revenue_impact() -> Html {
    let locale = use_locale();
    let text = &strings(locale).revenue;
    let node = use_node_ref();
    let timeline = timeline();
    let phase = use_scroll_reveal(node.clone(), timeline.trigger, timeline.total_millis());
    let item = |i: usize| timeline.style(phase, 0, i);

    html! {
        <section ref={node} class="section revenue-impact">
            <div class="section-inner">
                <div class="section-heading">
                    <span class="badge" style={item(0)}>{ text.badge }</span>
                    <h2 class="section-title" style={item(1)}>
                        { text.title }<br />
                        <span class="revenue-highlight">{ text.highlight }</span>
                    </h2>
                    <p class="section-description" style={item(2)}>{ text.description }</p>
                </div>

                <div class="revenue-block" style={item(3)}>
                    <h3>{ text.comparison_title }</h3>
                    <div class="before-after-grid">
                        { for text.comparison.iter().map(|row| html! {
                            <div class="before-after">
                                <span class="ba-metric">{ row.metric }</span>
                                <div class="ba-values">
                                    <span class="ba-before">{ row.before }</span>
                                    <span class="ba-arrow">{"→"}</span>
                                    <span class="ba-after">{ row.after }</span>
                                </div>
                                <span class="ba-growth">{ row.growth }</span>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="revenue-block" style={item(4)}>
                    <h3>{ text.drivers_title }</h3>
                    <div class="driver-grid">
                        { for text.drivers.iter().map(|driver| html! {
                            <div class="driver">
                                <span class="driver-impact">{ driver.impact }</span>
                                <h4>{ driver.title }</h4>
                                <p>{ driver.description }</p>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="revenue-block" style={item(5)}>
                    <h3>{ text.outcomes_title }</h3>
                    <ul class="outcomes">
                        { for text.outcomes.iter().map(|outcome| html! { <li>{"✓ "}{ *outcome }</li> }) }
                    </ul>
                </div>

                <div class="revenue-cta" style={item(6)}>
                    <p>{ text.cta_prompt }</p>
                    <a
                        href={localized_href(locale, "/#contact-form")}
                        class="hero-cta primary"
                        onclick={anchor_click("contact-form", None)}
                    >
                        { text.cta }
                    </a>
                </div>
            </div>
            <style>
                {r#"
                .revenue-highlight {
                    background: linear-gradient(to right, #60a5fa, #22d3ee);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }
                .revenue-block {
                    margin-top: 64px;
                }
                .revenue-block h3 {
                    color: #fff;
                    font-size: 1.5rem;
                    font-weight: 300;
                    text-align: center;
                    margin: 0 0 32px;
                }
                .before-after-grid,
                .driver-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 20px;
                }
                .before-after,
                .driver {
                    border-radius: 16px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.04);
                    padding: 24px;
                }
                .ba-metric {
                    display: block;
                    color: rgba(255, 255, 255, 0.6);
                    font-size: 0.875rem;
                    margin-bottom: 12px;
                }
                .ba-values {
                    display: flex;
                    align-items: baseline;
                    gap: 8px;
                    flex-wrap: wrap;
                }
                .ba-before {
                    color: rgba(255, 255, 255, 0.4);
                    text-decoration: line-through;
                }
                .ba-arrow {
                    color: rgba(255, 255, 255, 0.3);
                }
                .ba-after {
                    color: #fff;
                    font-size: 1.5rem;
                    font-weight: 300;
                }
                .ba-growth,
                .driver-impact {
                    display: inline-block;
                    margin-top: 12px;
                    color: #4ade80;
                    font-size: 0.875rem;
                }
                .driver h4 {
                    color: #fff;
                    font-weight: 300;
                    font-size: 1.125rem;
                    margin: 12px 0 8px;
                }
                .driver p {
                    color: rgba(255, 255, 255, 0.6);
                    font-weight: 300;
                    line-height: 1.6;
                    margin: 0;
                }
                .outcomes {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 12px 32px;
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    color: rgba(255, 255, 255, 0.75);
                    font-weight: 300;
                }
                .revenue-cta {
                    margin-top: 64px;
                    text-align: center;
                }
                .revenue-cta p {
                    color: #fff;
                    font-size: 1.25rem;
                    font-weight: 300;
                    margin-bottom: 24px;
                }
                "#}
            </style>
        </section>
    }
}
