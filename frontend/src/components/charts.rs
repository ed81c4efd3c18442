use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::cases::{ComparisonPoint, TrendPoint};

const WIDTH: u32 = 560;
const HEIGHT: u32 = 280;

const BACKGROUND: RGBColor = RGBColor(10, 10, 10);
const AXIS: RGBColor = RGBColor(120, 120, 120);
const ACCENT: RGBColor = RGBColor(59, 130, 246);
const AFTER: RGBColor = RGBColor(34, 197, 94);
const BEFORE: RGBColor = RGBColor(107, 114, 128);

/// Top of the value axis: the largest value plus 10% headroom.
pub fn y_range(values: impl IntoIterator<Item = f64>) -> f64 {
    let max = values.into_iter().fold(0.0, f64::max);
    if max > 0.0 {
        max * 1.1
    } else {
        1.0
    }
}

fn prepare_canvas(canvas: &HtmlCanvasElement) -> Option<CanvasBackend> {
    canvas.set_width(WIDTH);
    canvas.set_height(HEIGHT);
    CanvasBackend::with_canvas_object(canvas.clone())
}

fn draw_trend(canvas: &HtmlCanvasElement, points: &[TrendPoint]) -> Result<(), String> {
    let backend = prepare_canvas(canvas).ok_or("canvas has no 2d context")?;
    let root = backend.into_drawing_area();
    root.fill(&BACKGROUND).map_err(|e| format!("{:?}", e))?;

    let x_end = points.len().saturating_sub(1).max(1);
    let y_max = y_range(points.iter().map(|p| p.value));

    let mut chart = ChartBuilder::on(&root)
        .margin(12)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(0..x_end, 0.0..y_max)
        .map_err(|e| format!("{:?}", e))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .light_line_style(RGBColor(30, 30, 30))
        .axis_style(AXIS)
        .label_style(("sans-serif", 12).into_font().color(&AXIS))
        .x_labels(points.len())
        .x_label_formatter(&|x| points.get(*x).map(|p| p.period.clone()).unwrap_or_default())
        .y_label_formatter(&|y| format!("{:.0}", y))
        .draw()
        .map_err(|e| format!("{:?}", e))?;

    let series: Vec<(usize, f64)> = points.iter().enumerate().map(|(i, p)| (i, p.value)).collect();
    chart
        .draw_series(AreaSeries::new(series.clone(), 0.0, ACCENT.mix(0.2)).border_style(ACCENT.stroke_width(2)))
        .map_err(|e| format!("{:?}", e))?;
    chart
        .draw_series(series.into_iter().map(|point| Circle::new(point, 4, ACCENT.filled())))
        .map_err(|e| format!("{:?}", e))?;

    root.present().map_err(|e| format!("{:?}", e))
}

fn draw_comparison(
    canvas: &HtmlCanvasElement,
    points: &[ComparisonPoint],
    before_label: &str,
    after_label: &str,
) -> Result<(), String> {
    let backend = prepare_canvas(canvas).ok_or("canvas has no 2d context")?;
    let root = backend.into_drawing_area();
    root.fill(&BACKGROUND).map_err(|e| format!("{:?}", e))?;

    // three units per group: before bar, after bar, gap
    let x_end = (points.len() * 3) as i32;
    let y_max = y_range(points.iter().flat_map(|p| [p.before, p.after]));

    let mut chart = ChartBuilder::on(&root)
        .margin(12)
        .x_label_area_size(30)
        .y_label_area_size(40)
        .build_cartesian_2d(0..x_end, 0.0..y_max)
        .map_err(|e| format!("{:?}", e))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .light_line_style(RGBColor(30, 30, 30))
        .axis_style(AXIS)
        .label_style(("sans-serif", 12).into_font().color(&AXIS))
        .x_labels(x_end as usize)
        .x_label_formatter(&|x| {
            if x.rem_euclid(3) == 1 {
                points.get((*x / 3) as usize).map(|p| p.name.clone()).unwrap_or_default()
            } else {
                String::new()
            }
        })
        .y_label_formatter(&|y| format!("{:.0}", y))
        .draw()
        .map_err(|e| format!("{:?}", e))?;

    chart
        .draw_series(points.iter().enumerate().map(|(i, p)| {
            let x = i as i32 * 3;
            Rectangle::new([(x, 0.0), (x + 1, p.before)], BEFORE.filled())
        }))
        .map_err(|e| format!("{:?}", e))?
        .label(before_label)
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], BEFORE.filled()));
    chart
        .draw_series(points.iter().enumerate().map(|(i, p)| {
            let x = i as i32 * 3 + 1;
            Rectangle::new([(x, 0.0), (x + 1, p.after)], AFTER.filled())
        }))
        .map_err(|e| format!("{:?}", e))?
        .label(after_label)
        .legend(|(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], AFTER.filled()));

    chart
        .configure_series_labels()
        .background_style(BACKGROUND.mix(0.8))
        .border_style(AXIS)
        .label_font(("sans-serif", 12).into_font().color(&WHITE))
        .draw()
        .map_err(|e| format!("{:?}", e))?;

    root.present().map_err(|e| format!("{:?}", e))
}

#[derive(Properties, PartialEq)]
pub struct TrendChartProps {
    pub title: String,
    pub points: Vec<TrendPoint>,
}

#[function_component(TrendChart)]
pub fn trend_chart(props: &TrendChartProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |points: &Vec<TrendPoint>| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    if !points.is_empty() {
                        if let Err(e) = draw_trend(&canvas, points) {
                            log::error!("Failed to draw trend chart: {}", e);
                        }
                    }
                }
                || ()
            },
            props.points.clone(),
        );
    }

    html! {
        <div class="case-chart">
            <h4>{ &props.title }</h4>
            <canvas ref={canvas_ref} width={WIDTH.to_string()} height={HEIGHT.to_string()} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ComparisonChartProps {
    pub title: String,
    pub before_label: String,
    pub after_label: String,
    pub points: Vec<ComparisonPoint>,
}

#[function_component(ComparisonChart)]
pub fn comparison_chart(props: &ComparisonChartProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |(points, before, after): &(Vec<ComparisonPoint>, String, String)| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    if !points.is_empty() {
                        if let Err(e) = draw_comparison(&canvas, points, before, after) {
                            log::error!("Failed to draw comparison chart: {}", e);
                        }
                    }
                }
                || ()
            },
            (props.points.clone(), props.before_label.clone(), props.after_label.clone()),
        );
    }

    html! {
        <div class="case-chart">
            <h4>{ &props.title }</h4>
            <canvas ref={canvas_ref} width={WIDTH.to_string()} height={HEIGHT.to_string()} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_leaves_ten_percent_headroom() {
        assert!((y_range([65.0, 92.0, 88.0]) - 101.2).abs() < 1e-9);
        assert!((y_range([100.0, 53.0]) - 110.0).abs() < 1e-9);
    }

    #[test]
    fn empty_or_zero_series_still_has_an_axis() {
        assert_eq!(y_range(std::iter::empty()), 1.0);
        assert_eq!(y_range([0.0, 0.0]), 1.0);
    }
}
