use chrono::{Datelike, Utc};
use yew::prelude::*;

use crate::animation::{use_scroll_reveal, Pose, RevealTimeline, RevealTrack};
use crate::config;
use crate::i18n::{strings, use_locale};

const EMAIL: &str = "contato@zielhub.com";
const PHONE: &str = "+5583991066066";
const PHONE_DISPLAY: &str = "+55 83 99106-6066";
const LINKEDIN_URL: &str = "https://www.linkedin.com/company/zielhub";
const INSTAGRAM_URL: &str = "https://www.instagram.com/zielhub";

fn timeline() -> RevealTimeline {
    RevealTimeline::new()
        .trigger(0.8)
        .track(RevealTrack::new(Pose::hidden().y(20.0), 0.6).stagger(0.1, 5))
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let text = &strings(use_locale()).footer;
    let node = use_node_ref();
    let timeline = timeline();
    let phase = use_scroll_reveal(node.clone(), timeline.trigger, timeline.total_millis());
    let item = |i: usize| timeline.style(phase, 0, i);
    let year = Utc::now().year();

    html! {
        <footer ref={node} class="site-footer">
            <div class="footer-inner">
                <div class="footer-grid">
                    <div class="footer-item" style={item(0)}>
                        <img src="/chip.webp" alt="ZielHub" width="50" height="50" class="footer-logo" />
                        <p class="footer-muted">{ text.tagline }</p>
                    </div>

                    <div class="footer-item" style={item(1)}>
                        <h3>{ text.social }</h3>
                        <a href={LINKEDIN_URL} target="_blank" rel="noopener noreferrer">{"LinkedIn"}</a>
                        <a href={INSTAGRAM_URL} target="_blank" rel="noopener noreferrer">{"Instagram"}</a>
                    </div>

                    <div class="footer-item" style={item(2)}>
                        <h3>{ text.contact }</h3>
                        <a href={format!("mailto:{}", EMAIL)}>{ EMAIL }</a>
                        <a href={format!("tel:{}", PHONE)}>{ PHONE_DISPLAY }</a>
                        <a href={config::WHATSAPP_URL} target="_blank" rel="noopener noreferrer">{"WhatsApp"}</a>
                    </div>

                    <div class="footer-item" style={item(3)}>
                        <p class="footer-muted">{ format!("© {} ZielHub", year) }</p>
                        <p class="footer-faint">{ text.rights }</p>
                    </div>
                </div>

                <div class="footer-item footer-bottom" style={item(4)}>
                    <p class="footer-faint">{ text.made_by }</p>
                </div>
            </div>
            <style>
                {r#"
                .site-footer {
                    position: relative;
                    width: 100%;
                    background: #000;
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    padding: 48px 24px;
                }
                .footer-inner {
                    position: relative;
                    z-index: 20;
                    max-width: 1280px;
                    margin: 0 auto;
                }
                .footer-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 32px;
                    margin-bottom: 32px;
                }
                .footer-item h3 {
                    color: #fff;
                    font-weight: 300;
                    font-size: 1rem;
                    margin: 0 0 16px;
                }
                .footer-item a {
                    display: block;
                    margin-bottom: 12px;
                    color: rgba(255, 255, 255, 0.7);
                    font-size: 0.875rem;
                    font-weight: 300;
                    text-decoration: none;
                    transition: color 0.2s;
                }
                .footer-item a:hover {
                    color: #fff;
                }
                .footer-logo {
                    object-fit: contain;
                    margin-bottom: 16px;
                }
                .footer-muted {
                    color: rgba(255, 255, 255, 0.6);
                    font-size: 0.875rem;
                    font-weight: 300;
                    line-height: 1.6;
                }
                .footer-faint {
                    color: rgba(255, 255, 255, 0.4);
                    font-size: 0.75rem;
                    font-weight: 300;
                }
                .footer-bottom {
                    border-top: 1px solid rgba(255, 255, 255, 0.1);
                    padding-top: 24px;
                    text-align: center;
                }
                "#}
            </style>
        </footer>
    }
}
