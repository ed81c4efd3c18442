//! Ad-platform tags. The scripts themselves are third-party; the site only
//! injects them and pokes the globals they define.

use log::{info, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Function, Reflect};

use crate::config;

/// Where conversion events go once a lead has been accepted.
pub trait AnalyticsSink {
    fn report_conversion(&self);
    fn track_lead(&self);
}

/// Calls the `gtag_report_conversion` and `fbq` globals when the tag scripts
/// have defined them. Missing globals and script errors are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserAnalytics;

impl AnalyticsSink for BrowserAnalytics {
    fn report_conversion(&self) {
        call_global("gtag_report_conversion", &[]);
    }

    fn track_lead(&self) {
        call_global("fbq", &["track", "Lead"]);
    }
}

/// Meta pixel `PageView`, sent on every route change.
pub fn track_page_view() {
    call_global("fbq", &["track", "PageView"]);
}

fn call_global(name: &str, args: &[&str]) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let function = match Reflect::get(&window, &JsValue::from_str(name)) {
        Ok(value) => match value.dyn_into::<Function>() {
            Ok(function) => function,
            Err(_) => return,
        },
        Err(_) => return,
    };
    let args: Vec<JsValue> = args.iter().map(|arg| JsValue::from_str(arg)).collect();
    let result = match args.as_slice() {
        [] => function.call0(&window),
        [a] => function.call1(&window, a),
        [a, b] => function.call2(&window, a, b),
        _ => function.call3(&window, &args[0], &args[1], &args[2]),
    };
    if let Err(e) = result {
        warn!("{} threw: {:?}", name, e);
    }
}

fn google_tag_src(tag_id: &str) -> String {
    format!("https://www.googletagmanager.com/gtag/js?id={}", tag_id)
}

/// Inline bootstrap for the Google tag, including the conversion reporter
/// the contact form calls.
fn google_tag_bootstrap(tag_id: &str, conversion_id: &str) -> String {
    format!(
        r#"window.dataLayer = window.dataLayer || [];
function gtag(){{dataLayer.push(arguments);}}
gtag('js', new Date());
gtag('config', '{tag_id}');
window.gtag_report_conversion = function(url) {{
  var callback = function () {{
    if (typeof(url) != 'undefined') {{ window.location = url; }}
  }};
  gtag('event', 'conversion', {{
    'send_to': '{conversion_id}',
    'value': 1.0,
    'currency': 'BRL',
    'event_callback': callback
  }});
  return false;
}};"#
    )
}

fn meta_pixel_bootstrap(pixel_id: &str) -> String {
    format!(
        r#"!function(f,b,e,v,n,t,s)
{{if(f.fbq)return;n=f.fbq=function(){{n.callMethod?
n.callMethod.apply(n,arguments):n.queue.push(arguments)}};
if(!f._fbq)f._fbq=n;n.push=n;n.loaded=!0;n.version='2.0';
n.queue=[];t=b.createElement(e);t.async=!0;
t.src=v;s=b.getElementsByTagName(e)[0];
s.parentNode.insertBefore(t,s)}}(window, document,'script',
'https://connect.facebook.net/en_US/fbevents.js');
fbq('init', '{pixel_id}');"#
    )
}

/// Appends the Google tag and Meta pixel scripts to `<head>`. Safe to call
/// once per page load.
pub fn install_tags() {
    if let Err(e) = try_install_tags() {
        warn!("Failed to install analytics tags: {:?}", e);
    }
}

fn try_install_tags() -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let head = document.head().ok_or_else(|| JsValue::from_str("no <head>"))?;

    let loader: web_sys::HtmlScriptElement = document.create_element("script")?.dyn_into()?;
    loader.set_async(true);
    loader.set_src(&google_tag_src(config::get_google_tag_id()));
    head.append_child(&loader)?;

    let gtag = document.create_element("script")?;
    gtag.set_id("google-analytics");
    gtag.set_text_content(Some(&google_tag_bootstrap(
        config::get_google_tag_id(),
        config::get_google_conversion_id(),
    )));
    head.append_child(&gtag)?;

    let pixel = document.create_element("script")?;
    pixel.set_id("meta-pixel");
    pixel.set_text_content(Some(&meta_pixel_bootstrap(config::get_meta_pixel_id())));
    head.append_child(&pixel)?;

    info!("Analytics tags installed");
    Ok(())
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use super::AnalyticsSink;

    #[derive(Default)]
    pub struct RecordingSink {
        pub events: RefCell<Vec<&'static str>>,
    }

    impl AnalyticsSink for RecordingSink {
        fn report_conversion(&self) {
            self.events.borrow_mut().push("conversion");
        }

        fn track_lead(&self) {
            self.events.borrow_mut().push("lead");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn google_bootstrap_wires_the_conversion_target() {
        let script = google_tag_bootstrap("AW-1", "AW-1/abc");
        assert!(script.contains("gtag('config', 'AW-1');"));
        assert!(script.contains("'send_to': 'AW-1/abc'"));
        assert!(script.contains("window.gtag_report_conversion = function(url) {"));
        assert_eq!(google_tag_src("AW-1"), "https://www.googletagmanager.com/gtag/js?id=AW-1");
    }

    #[test]
    fn pixel_bootstrap_initialises_the_configured_id() {
        let script = meta_pixel_bootstrap("42");
        assert!(script.contains("fbq('init', '42');"));
        assert!(script.starts_with("!function(f,b,e,v,n,t,s)\n{if(f.fbq)return;"));
    }
}
