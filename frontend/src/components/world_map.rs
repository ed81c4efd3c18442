use yew::prelude::*;

const MAP_WIDTH: f64 = 1000.0;
const MAP_HEIGHT: f64 = 500.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Office {
    pub code: &'static str,
    pub flag: &'static str,
    pub lat: f64,
    pub lng: f64,
}

/// Where the team works, in the order the country cards list them.
pub const OFFICES: [Office; 5] = [
    Office { code: "us", flag: "🇺🇸", lat: 38.9072, lng: -77.0369 },
    Office { code: "br", flag: "🇧🇷", lat: -15.7975, lng: -47.8919 },
    Office { code: "pt", flag: "🇵🇹", lat: 38.7223, lng: -9.1393 },
    Office { code: "de", flag: "🇩🇪", lat: 52.52, lng: 13.405 },
    Office { code: "ch", flag: "🇨🇭", lat: 46.9481, lng: 7.4474 },
];

/// Equirectangular projection onto a `width` x `height` canvas with the
/// origin at the top-left corner.
pub fn project(lat: f64, lng: f64, width: f64, height: f64) -> (f64, f64) {
    let x = (lng + 180.0) / 360.0 * width;
    let y = (90.0 - lat) / 180.0 * height;
    (x, y)
}

/// Curved SVG path between two projected points, bowing upwards.
pub fn arc_path(from: (f64, f64), to: (f64, f64)) -> String {
    let (x1, y1) = from;
    let (x2, y2) = to;
    let distance = ((x2 - x1).powi(2) + (y2 - y1).powi(2)).sqrt();
    let cx = (x1 + x2) / 2.0;
    let cy = y1.min(y2) - distance * 0.3;
    format!("M {:.1} {:.1} Q {:.1} {:.1} {:.1} {:.1}", x1, y1, cx, cy, x2, y2)
}

/// Each office links to the next, and the last back to the first.
pub fn connections() -> impl Iterator<Item = (Office, Office)> {
    OFFICES
        .iter()
        .copied()
        .zip(OFFICES.iter().copied().cycle().skip(1))
}

#[derive(Properties, PartialEq)]
pub struct WorldMapProps {
    #[prop_or_default]
    pub style: String,
}

#[function_component(WorldMap)]
pub fn world_map(props: &WorldMapProps) -> Html {
    let at = |office: &Office| project(office.lat, office.lng, MAP_WIDTH, MAP_HEIGHT);

    let meridians = (1..12).map(|i| {
        let x = i as f64 * MAP_WIDTH / 12.0;
        html! { <line x1={x.to_string()} y1="0" x2={x.to_string()} y2={MAP_HEIGHT.to_string()} class="graticule" /> }
    });
    let parallels = (1..6).map(|i| {
        let y = i as f64 * MAP_HEIGHT / 6.0;
        html! { <line x1="0" y1={y.to_string()} x2={MAP_WIDTH.to_string()} y2={y.to_string()} class="graticule" /> }
    });

    html! {
        <div class="world-map" style={props.style.clone()}>
            <svg viewBox={format!("0 0 {} {}", MAP_WIDTH, MAP_HEIGHT)} preserveAspectRatio="xMidYMid meet">
                <g>{ for meridians }{ for parallels }</g>
                <g>
                    { for connections().enumerate().map(|(i, (from, to))| html! {
                        <path
                            d={arc_path(at(&from), at(&to))}
                            class="map-arc"
                            style={format!("animation-delay: {}s;", i as f64 * 0.4)}
                        />
                    }) }
                </g>
                <g>
                    { for OFFICES.iter().map(|office| {
                        let (x, y) = at(office);
                        html! {
                            <g key={office.code}>
                                <circle cx={x.to_string()} cy={y.to_string()} r="14" class="map-pulse" />
                                <circle cx={x.to_string()} cy={y.to_string()} r="5" class="map-dot" />
                            </g>
                        }
                    }) }
                </g>
            </svg>
            <style>
                {r#"
                .world-map {
                    position: relative;
                    width: 100%;
                    border-radius: 24px;
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    background: radial-gradient(circle at center, rgba(59, 130, 246, 0.08), transparent 70%);
                    overflow: hidden;
                }
                .world-map svg {
                    display: block;
                    width: 100%;
                    height: auto;
                }
                .graticule {
                    stroke: rgba(255, 255, 255, 0.05);
                    stroke-width: 1;
                }
                .map-arc {
                    fill: none;
                    stroke: rgba(59, 130, 246, 0.6);
                    stroke-width: 1.5;
                    stroke-dasharray: 6 6;
                    animation: map-dash 3s linear infinite;
                }
                .map-dot {
                    fill: #3b82f6;
                }
                .map-pulse {
                    fill: rgba(59, 130, 246, 0.25);
                    transform-box: fill-box;
                    transform-origin: center;
                    animation: map-pulse 2s ease-out infinite;
                }
                @keyframes map-dash {
                    to { stroke-dashoffset: -24; }
                }
                @keyframes map-pulse {
                    0% { transform: scale(0.4); opacity: 1; }
                    100% { transform: scale(1.6); opacity: 0; }
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
    fn projection_corners_and_centre() {
        assert_eq!(project(0.0, 0.0, 360.0, 180.0), (180.0, 90.0));
        assert_eq!(project(90.0, -180.0, 360.0, 180.0), (0.0, 0.0));
        assert_eq!(project(-90.0, 180.0, 360.0, 180.0), (360.0, 180.0));
    }

    #[test]
    fn southern_offices_sit_lower_on_the_map() {
        let (_, brazil) = project(OFFICES[1].lat, OFFICES[1].lng, MAP_WIDTH, MAP_HEIGHT);
        let (_, germany) = project(OFFICES[3].lat, OFFICES[3].lng, MAP_WIDTH, MAP_HEIGHT);
        assert!(brazil > germany);
    }

    #[test]
    fn connections_form_a_ring() {
        let links: Vec<_> = connections().map(|(a, b)| (a.code, b.code)).collect();
        assert_eq!(links, vec![("us", "br"), ("br", "pt"), ("pt", "de"), ("de", "ch"), ("ch", "us")]);
    }

    #[test]
    fn arcs_bow_above_both_endpoints() {
        assert_eq!(arc_path((0.0, 100.0), (100.0, 100.0)), "M 0.0 100.0 Q 50.0 70.0 100.0 100.0");
    }
}
