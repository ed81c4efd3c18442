use yew::prelude::*;

use crate::animation::{use_scroll_reveal, HoverLift, Pose, RevealTimeline, RevealTrack};
use crate::components::hover_card::HoverCard;
use crate::i18n::{strings, use_locale};

const ICONS: [&str; 6] = ["🧠", "✦", "📈", "🛡", "⚡", "🎯"];

fn timeline(cards: usize) -> RevealTimeline {
    RevealTimeline::new()
        .track(RevealTrack::new(Pose::hidden().y(30.0).blur(8.0), 0.8))
        .track(RevealTrack::new(Pose::hidden().y(20.0), 0.6).at(0.2))
        .track(RevealTrack::new(Pose::hidden().y(40.0).scale(0.95), 0.7).at(0.4).stagger(0.1, cards))
}

#[function_component(WhatWeDo)]
pub fn what_we_do() -> Html {
    let text = &strings(use_locale()).what_we_do;
    let node = use_node_ref();
    let timeline = timeline(text.services.len());
    let phase = use_scroll_reveal(node.clone(), timeline.trigger, timeline.total_millis());

    html! {
        <section id="what-we-do" ref={node} class="section">
            <div class="section-inner">
                <div class="section-heading">
                    <h2 class="section-title" style={timeline.style(phase, 0, 0)}>{ text.title }</h2>
                    <p class="section-description" style={timeline.style(phase, 1, 0)}>{ text.description }</p>
                </div>
                <div class="service-grid">
                    { for text.services.iter().zip(ICONS).enumerate().map(|(i, (service, icon))| html! {
                        <HoverCard
                            lift={HoverLift::SERVICE_CARD}
                            class="service-card"
                            style={timeline.style(phase, 2, i)}
                        >
                            <div class="service-icon">{ icon }</div>
                            <h3>{ service.title }</h3>
                            <p>{ service.description }</p>
                        </HoverCard>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .service-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
                    gap: 24px;
                }
                .service-card {
                    height: 100%;
                    box-sizing: border-box;
                    border-radius: 16px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.05);
                    padding: 32px;
                    backdrop-filter: blur(4px);
                }
                .service-card:hover {
                    background: rgba(255, 255, 255, 0.07);
                }
                .service-icon {
                    display: inline-flex;
                    margin-bottom: 20px;
                    padding: 12px;
                    border-radius: 12px;
                    background: rgba(255, 255, 255, 0.1);
                    font-size: 1.25rem;
                }
                .service-card h3 {
                    margin: 0 0 12px;
                    color: #fff;
                    font-size: 1.25rem;
                    font-weight: 300;
                }
                .service-card p {
                    margin: 0;
                    color: rgba(255, 255, 255, 0.6);
                    font-weight: 300;
                    line-height: 1.6;
                }
                "#}
            </style>
        </section>
    }
}
