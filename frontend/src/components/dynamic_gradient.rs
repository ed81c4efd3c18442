use web_sys::Element;
use yew::prelude::*;
use yew_hooks::prelude::*;

/// One radial light layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlowLayer {
    pub radius: u32,
    pub rgba: (u8, u8, u8, f64),
    /// Percentage of the radius where the glow has faded out.
    pub fade: u32,
}

impl GlowLayer {
    pub const PAGE: GlowLayer = GlowLayer { radius: 800, rgba: (79, 192, 219, 0.15), fade: 60 };
    pub const SECTION: GlowLayer = GlowLayer { radius: 600, rgba: (30, 132, 194, 0.12), fade: 50 };
    pub const SECTION_HALO: GlowLayer = GlowLayer { radius: 400, rgba: (79, 192, 219, 0.06), fade: 60 };

    pub fn background(&self, x: f64, y: f64) -> String {
        let (r, g, b, a) = self.rgba;
        format!(
            "background: radial-gradient(circle {}px at {}px {}px, rgba({}, {}, {}, {}), transparent {}%);",
            self.radius, x, y, r, g, b, a, self.fade,
        )
    }
}

#[derive(Properties, PartialEq)]
pub struct DynamicGradientProps {
    /// Track the pointer relative to the parent section instead of the viewport.
    #[prop_or_default]
    pub scoped: bool,
}

/// Soft light that follows the mouse.
#[function_component(DynamicGradient)]
pub fn dynamic_gradient(props: &DynamicGradientProps) -> Html {
    let position = use_state_eq(|| (0.0_f64, 0.0_f64));
    let container = use_node_ref();

    {
        let position = position.clone();
        let container = container.clone();
        let scoped = props.scoped;
        use_event_with_window("mousemove", move |e: MouseEvent| {
            let (mut x, mut y) = (e.client_x() as f64, e.client_y() as f64);
            if scoped {
                if let Some(element) = container.cast::<Element>() {
                    let rect = element.get_bounding_client_rect();
                    x -= rect.left();
                    y -= rect.top();
                }
            }
            position.set((x, y));
        });
    }

    let (x, y) = *position;
    let layers: &[GlowLayer] = if props.scoped {
        &[GlowLayer::SECTION, GlowLayer::SECTION_HALO]
    } else {
        &[GlowLayer::PAGE]
    };

    html! {
        <div ref={container} class={classes!("dynamic-gradient", props.scoped.then(|| "scoped"))}>
            { for layers.iter().map(|layer| html! {
                <div class="glow" style={layer.background(x, y)} />
            }) }
            <style>
                {r#"
                .dynamic-gradient {
                    position: fixed;
                    inset: 0;
                    z-index: 10;
                    pointer-events: none;
                    overflow: hidden;
                }
                .dynamic-gradient.scoped {
                    position: absolute;
                    z-index: 0;
                }
                .dynamic-gradient .glow {
                    position: absolute;
                    inset: 0;
                    transition: background 0.2s;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_glow_css() {
        assert_eq!(
            GlowLayer::PAGE.background(10.0, 20.5),
            "background: radial-gradient(circle 800px at 10px 20.5px, rgba(79, 192, 219, 0.15), transparent 60%);"
        );
    }
}
