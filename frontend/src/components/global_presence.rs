use yew::prelude::*;

use crate::animation::{use_scroll_reveal, HoverLift, Pose, RevealTimeline, RevealTrack};
use crate::components::dynamic_gradient::DynamicGradient;
use crate::components::hover_card::HoverCard;
use crate::components::world_map::{WorldMap, OFFICES};
use crate::i18n::{strings, use_locale};

fn timeline() -> RevealTimeline {
    RevealTimeline::new()
        .track(RevealTrack::new(Pose::hidden().y(30.0).blur(8.0), 0.8))
        .track(RevealTrack::new(Pose::hidden().y(20.0), 0.6).at(0.2))
        .track(RevealTrack::new(Pose::hidden().y(30.0).scale(0.95), 0.8).at(0.4))
        .track(RevealTrack::new(Pose::hidden().y(20.0), 0.6).at(0.6).stagger(0.08, OFFICES.len()))
        .track(RevealTrack::new(Pose::hidden().y(20.0), 0.6).at(0.8).stagger(0.1, 3))
}

#[function_component(GlobalPresence)]
pub fn global_presence() -> Html {
    let text = &strings(use_locale()).global;
    let node = use_node_ref();
    let timeline = timeline();
    let phase = use_scroll_reveal(node.clone(), timeline.trigger, timeline.total_millis());

    html! {
        <section ref={node} class="section global-presence">
            <DynamicGradient scoped=true />
            <div class="section-inner">
                <div class="section-heading">
                    <h2 class="section-title" style={timeline.style(phase, 0, 0)}>{ text.title }</h2>
                    <p class="section-description" style={timeline.style(phase, 1, 0)}>{ text.description }</p>
                </div>

                <WorldMap style={timeline.style(phase, 2, 0)} />

                <div class="country-grid">
                    { for OFFICES.iter().zip(text.countries).enumerate().map(|(i, (office, name))| html! {
                        <HoverCard
                            key={office.code}
                            lift={HoverLift::COUNTRY_CARD}
                            class="country-card"
                            style={timeline.style(phase, 3, i)}
                        >
                            <span class="country-flag">{ office.flag }</span>
                            <span class="country-name">{ name }</span>
                        </HoverCard>
                    }) }
                </div>

                <div class="global-stats">
                    { for text.stats.iter().enumerate().map(|(i, stat)| html! {
                        <div class="global-stat" style={timeline.style(phase, 4, i)}>
                            <span class="global-stat-value">{ stat.value }</span>
                            <span class="global-stat-label">{ stat.label }</span>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .global-presence {
                    overflow: hidden;
                }
                .country-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(150px, 1fr));
                    gap: 16px;
                    margin-top: 40px;
                }
                .country-card {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 8px;
                    padding: 20px;
                    border-radius: 16px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(255, 255, 255, 0.04);
                }
                .country-flag {
                    font-size: 2rem;
                }
                .country-name {
                    color: rgba(255, 255, 255, 0.8);
                    font-weight: 300;
                }
                .global-stats {
                    display: flex;
                    justify-content: center;
                    gap: 64px;
                    flex-wrap: wrap;
                    margin-top: 56px;
                }
                .global-stat {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }
                .global-stat-value {
                    color: #fff;
                    font-size: 2.5rem;
                    font-weight: 200;
                }
                .global-stat-label {
                    color: rgba(255, 255, 255, 0.5);
                    font-size: 0.875rem;
                }
                "#}
            </style>
        </section>
    }
}
