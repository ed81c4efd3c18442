use yew::prelude::*;
use yew_router::prelude::*;

use crate::animation::{use_scroll_reveal, Pose, RevealTimeline, RevealTrack};
use crate::cases::case_studies;
use crate::components::case_card::CaseCard;
use crate::i18n::{localized_href, strings, use_locale};
use crate::Route;

fn timeline(cards: usize) -> RevealTimeline {
    RevealTimeline::new()
        .track(RevealTrack::new(Pose::hidden().y(30.0).blur(8.0), 0.8))
        .track(RevealTrack::new(Pose::hidden().y(20.0), 0.6).at(0.2))
        .track(RevealTrack::new(Pose::hidden().y(50.0).scale(0.95), 0.7).at(0.4).stagger(0.12, cards))
        .track(RevealTrack::new(Pose::hidden().y(20.0), 0.6).at(0.6))
}

#[function_component(Showcase)]
pub fn showcase() -> Html {
    let locale = use_locale();
    let all = strings(locale);
    let text = &all.showcase;
    let cases = use_memo(|locale| case_studies(*locale), locale);
    let node = use_node_ref();
    let timeline = timeline(cases.len());
    let phase = use_scroll_reveal(node.clone(), timeline.trigger, timeline.total_millis());

    html! {
        <section id="showcase" ref={node} class="section">
            <div class="section-inner">
                <div class="section-heading">
                    <h2 class="section-title" style={timeline.style(phase, 0, 0)}>{ text.title }</h2>
                    <p class="section-description" style={timeline.style(phase, 1, 0)}>{ text.description }</p>
                </div>
                <div class="showcase-grid">
                    { for cases.iter().enumerate().map(|(i, case)| html! {
                        <CaseCard
                            key={case.slug.clone()}
                            case={case.clone()}
                            href={localized_href(locale, &format!("/cases#{}", case.slug))}
                            cta={all.cases.view_full}
                            style={timeline.style(phase, 2, i)}
                        />
                    }) }
                </div>
                <div class="showcase-more" style={timeline.style(phase, 3, 0)}>
                    <Link<Route> to={Route::cases(locale)} classes="hero-cta">
                        { text.view_all }{" →"}
                    </Link<Route>>
                </div>
            </div>
            <style>
                {r#"
                .showcase-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
                    gap: 24px;
                }
                .showcase-more {
                    display: flex;
                    justify-content: center;
                    margin-top: 48px;
                }
                "#}
            </style>
        </section>
    }
}
