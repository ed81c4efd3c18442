use yew::prelude::*;

use crate::animation::{use_scroll_reveal, Ease, Pose, RevealTimeline, RevealTrack};
use crate::i18n::{strings, use_locale};

const VALUE_ICONS: [&str; 4] = ["💡", "🏆", "💬", "📈"];

fn timeline() -> RevealTimeline {
    RevealTimeline::new()
        // badge, title, description
        .track(RevealTrack::new(Pose::hidden().y(30.0).blur(8.0), 0.8).stagger(0.15, 3))
        // mission and vision
        .track(RevealTrack::new(Pose::hidden().y(40.0).scale(0.95), 0.8).at(0.4).stagger(0.2, 2))
        .track(RevealTrack::new(Pose::hidden().y(50.0).scale(0.9), 0.6).at(0.8).stagger(0.12, 4))
}

/// Stats pop in on a springier curve than the rest of the section.
fn stats_timeline() -> RevealTimeline {
    RevealTimeline::new()
        .ease(Ease::BACK_OUT)
        .track(RevealTrack::new(Pose::hidden().scale(0.8), 0.6).stagger(0.1, 4))
}

#[function_component(About)]
pub fn about() -> Html {
    let text = &strings(use_locale()).about;
    let node = use_node_ref();
    let stats_node = use_node_ref();
    let timeline = timeline();
    let stats = stats_timeline();
    let phase = use_scroll_reveal(node.clone(), timeline.trigger, timeline.total_millis());
    let stats_phase = use_scroll_reveal(stats_node.clone(), stats.trigger, stats.total_millis());

    html! {
        <section id="about" ref={node} class="section">
            <div class="section-inner">
                <div class="section-heading">
                    <span class="badge" style={timeline.style(phase, 0, 0)}>{ text.badge }</span>
                    <h2 class="section-title" style={timeline.style(phase, 0, 1)}>{ text.title }</h2>
                    <p class="section-description" style={timeline.style(phase, 0, 2)}>{ text.description }</p>
                </div>

                <div class="mission-grid">
                    { for [&text.mission, &text.vision].into_iter().enumerate().map(|(i, card)| html! {
                        <div class="mission-card" style={timeline.style(phase, 1, i)}>
                            <h3>{ card.title }</h3>
                            <p>{ card.description }</p>
                        </div>
                    }) }
                </div>

                <div ref={stats_node} class="about-stats">
                    { for text.stats.iter().enumerate().map(|(i, stat)| html! {
                        <div class="about-stat" style={stats.style(stats_phase, 0, i)}>
                            <span class="about-stat-value">{ stat.value }</span>
                            <span class="about-stat-label">{ stat.label }</span>
                        </div>
                    }) }
                </div>

                <h3 class="values-title">{ text.values_title }</h3>
                <div class="values-grid">
                    { for text.values.iter().zip(VALUE_ICONS).enumerate().map(|(i, (value, icon))| html! {
                        <div class="value-card" style={timeline.style(phase, 2, i)}>
                            <span class="value-icon">{ icon }</span>
                            <h4>{ value.title }</h4>
                            <p>{ value.description }</p>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .mission-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                    gap: 24px;
                }
                .mission-card,
                .value-card {
                    border-radius: 16px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: linear-gradient(135deg, rgba(255, 255, 255, 0.06), transparent);
                    padding: 32px;
                }
                .mission-card h3,
                .value-card h4 {
                    color: #fff;
                    font-weight: 300;
                    margin: 0 0 12px;
                }
                .mission-card p,
                .value-card p {
                    color: rgba(255, 255, 255, 0.6);
                    font-weight: 300;
                    line-height: 1.6;
                    margin: 0;
                }
                .about-stats {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
                    gap: 24px;
                    margin: 64px 0;
                    text-align: center;
                }
                .about-stat {
                    display: flex;
                    flex-direction: column;
                }
                .about-stat-value {
                    color: #fff;
                    font-size: 2.5rem;
                    font-weight: 200;
                }
                .about-stat-label {
                    color: rgba(255, 255, 255, 0.5);
                    font-size: 0.875rem;
                }
                .values-title {
                    color: #fff;
                    text-align: center;
                    font-weight: 300;
                    font-size: 1.5rem;
                    margin-bottom: 32px;
                }
                .values-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 20px;
                }
                .value-icon {
                    display: inline-block;
                    font-size: 1.5rem;
                    margin-bottom: 16px;
                }
                "#}
            </style>
        </section>
    }
}
