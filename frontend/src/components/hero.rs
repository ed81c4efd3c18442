use yew::prelude::*;

use crate::animation::{use_mount_reveal, Pose, RevealTimeline, RevealTrack};
use crate::i18n::{localized_href, strings, use_locale};
use crate::navigation::anchor_click;

fn timeline() -> RevealTimeline {
    RevealTimeline::new()
        .track(RevealTrack::new(Pose::hidden().y(30.0).blur(8.0), 0.8))
        .track(RevealTrack::new(Pose::hidden().y(20.0), 0.6).at(0.2))
        .track(RevealTrack::new(Pose::hidden().y(20.0), 0.6).at(0.4).stagger(0.1, 2))
        .track(RevealTrack::new(Pose::hidden().y(10.0), 0.6).at(0.6).stagger(0.1, 3))
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let locale = use_locale();
    let text = &strings(locale).hero;
    let timeline = timeline();
    let phase = use_mount_reveal(200, timeline.total_millis());

    html! {
        <section class="hero">
            <div class="hero-backdrop" />
            <div class="hero-content">
                <h1 style={timeline.style(phase, 0, 0)}>{ text.title }</h1>
                <p class="hero-description" style={timeline.style(phase, 1, 0)}>{ text.description }</p>
                <div class="hero-ctas">
                    <a
                        href={localized_href(locale, "/#contact-form")}
                        class="hero-cta primary"
                        style={timeline.style(phase, 2, 0)}
                        onclick={anchor_click("contact-form", None)}
                    >
                        { text.primary_cta }
                    </a>
                    <a
                        href={localized_href(locale, "/#showcase")}
                        class="hero-cta"
                        style={timeline.style(phase, 2, 1)}
                        onclick={anchor_click("showcase", None)}
                    >
                        { text.secondary_cta }
                    </a>
                </div>
                <ul class="hero-details">
                    { for text.details.iter().enumerate().map(|(i, detail)| html! {
                        <li style={timeline.style(phase, 3, i)}>{ *detail }</li>
                    }) }
                </ul>
            </div>
            <style>
                {r#"
                .hero {
                    position: relative;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    min-height: 100vh;
                    padding: 120px 24px 80px;
                    overflow: hidden;
                    background: #000;
                }
                .hero-backdrop {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                    background:
                        radial-gradient(circle at 20% 30%, rgba(59, 130, 246, 0.18), transparent 45%),
                        radial-gradient(circle at 80% 70%, rgba(79, 192, 219, 0.12), transparent 45%),
                        radial-gradient(rgba(255, 255, 255, 0.08) 1px, transparent 1px);
                    background-size: auto, auto, 32px 32px;
                    animation: hero-drift 18s ease-in-out infinite alternate;
                }
                @keyframes hero-drift {
                    from { background-position: 0 0, 0 0, 0 0; }
                    to { background-position: 40px -20px, -40px 20px, 16px 16px; }
                }
                .hero-content {
                    position: relative;
                    z-index: 20;
                    max-width: 960px;
                    text-align: center;
                }
                .hero h1 {
                    color: #fff;
                    font-size: clamp(2.5rem, 6vw, 4.5rem);
                    font-weight: 200;
                    letter-spacing: -0.02em;
                    line-height: 1.1;
                    margin: 0 0 24px;
                }
                .hero-description {
                    color: rgba(255, 255, 255, 0.7);
                    font-size: 1.125rem;
                    font-weight: 300;
                    line-height: 1.7;
                    max-width: 720px;
                    margin: 0 auto 40px;
                }
                .hero-ctas {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 16px;
                    margin-bottom: 40px;
                }
                .hero-details {
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 24px;
                    list-style: none;
                    padding: 0;
                    margin: 0;
                    color: rgba(255, 255, 255, 0.5);
                    font-size: 0.875rem;
                    font-weight: 300;
                }
                "#}
            </style>
        </section>
    }
}
