use yew::prelude::*;

use crate::animation::{use_hover, HoverLift};
use crate::cases::CaseStudy;

#[derive(Properties, PartialEq)]
pub struct CaseCardProps {
    pub case: CaseStudy,
    pub href: String,
    pub cta: String,
    /// Entrance style from the enclosing section's timeline.
    #[prop_or_default]
    pub style: String,
}

/// Summary card for one case study, linking to its full write-up.
#[function_component(CaseCard)]
pub fn case_card(props: &CaseCardProps) -> Html {
    let hover = use_hover();
    let case = &props.case;

    html! {
        <div class="case-card-slot" style={props.style.clone()}>
            <a
                href={props.href.clone()}
                class="case-card"
                style={HoverLift::SHOWCASE_CARD.style(hover.hovered)}
                onmouseenter={hover.onmouseenter}
                onmouseleave={hover.onmouseleave}
            >
                <div class="case-card-banner">
                    <img src={case.image.clone()} alt={case.company.clone()} loading="lazy" />
                    <span class="case-card-category">{ &case.category }</span>
                </div>
                <div class="case-card-body">
                    <h3>{ &case.company }</h3>
                    <p>{ &case.summary }</p>
                    <div class="case-card-stats">
                        { for case.headline_metrics().iter().map(|metric| html! {
                            <div class="case-card-stat">
                                <span class="stat-value">{ &metric.value }</span>
                                <span class="stat-label">{ &metric.label }</span>
                            </div>
                        }) }
                    </div>
                    <span class="case-card-cta">{ &props.cta }{" ↗"}</span>
                </div>
            </a>
            <style>
                {r#"
                .case-card {
                    display: flex;
                    flex-direction: column;
                    height: 100%;
                    border-radius: 20px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(10, 10, 10, 0.6);
                    overflow: hidden;
                    color: inherit;
                    text-decoration: none;
                    will-change: transform;
                }
                .case-card:hover {
                    border-color: rgba(255, 255, 255, 0.2);
                }
                .case-card-banner {
                    position: relative;
                    height: 180px;
                    background: linear-gradient(135deg, #171717, #262626, #171717);
                }
                .case-card-banner img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0.8;
                }
                .case-card-category {
                    position: absolute;
                    top: 16px;
                    left: 16px;
                    padding: 4px 12px;
                    border-radius: 999px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: rgba(0, 0, 0, 0.4);
                    color: rgba(255, 255, 255, 0.9);
                    font-size: 0.75rem;
                    font-weight: 300;
                }
                .case-card-body {
                    display: flex;
                    flex-direction: column;
                    gap: 12px;
                    padding: 24px;
                    flex: 1;
                }
                .case-card-body h3 {
                    margin: 0;
                    color: #fff;
                    font-size: 1.25rem;
                    font-weight: 300;
                }
                .case-card-body p {
                    margin: 0;
                    color: rgba(255, 255, 255, 0.6);
                    font-size: 0.9rem;
                    font-weight: 300;
                    line-height: 1.6;
                }
                .case-card-stats {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 12px;
                    margin-top: auto;
                }
                .case-card-stat {
                    display: flex;
                    flex-direction: column;
                    padding: 12px;
                    border-radius: 12px;
                    background: rgba(255, 255, 255, 0.05);
                }
                .stat-value {
                    color: #fff;
                    font-size: 1.25rem;
                    font-weight: 300;
                }
                .stat-label {
                    color: rgba(255, 255, 255, 0.5);
                    font-size: 0.75rem;
                }
                .case-card-cta {
                    color: rgba(255, 255, 255, 0.8);
                    font-size: 0.875rem;
                    font-weight: 300;
                }
                "#}
            </style>
        </div>
    }
}
