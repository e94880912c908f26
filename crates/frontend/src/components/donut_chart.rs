//! Revenue donut drawn with a CSS conic gradient.

use core_types::dashboard::{DonutSlice, slice_fractions};
use yew::prelude::*;

/// Properties for DonutChart component.
#[derive(Properties, PartialEq)]
pub struct DonutChartProps {
    pub slices: Vec<DonutSlice>,
    pub center_value: String,
    pub center_label: String,
}

/// Donut chart component.
#[function_component(DonutChart)]
pub fn donut_chart(props: &DonutChartProps) -> Html {
    let mut start = 0.0;
    let stops: Vec<String> = props
        .slices
        .iter()
        .zip(slice_fractions(&props.slices))
        .map(|(slice, fraction)| {
            let end = start + fraction * 100.0;
            let stop = format!("{} {start:.2}% {end:.2}%", slice.color);
            start = end;
            stop
        })
        .collect();

    let background = if stops.is_empty() {
        "var(--border-color)".to_string()
    } else {
        format!("conic-gradient({})", stops.join(", "))
    };

    html! {
        <div class="donut-chart" style={format!("background: {background};")}>
            <div class="donut-hole">
                <div class="stat-value">{ &props.center_value }</div>
                <div class="stat-label">{ &props.center_label }</div>
            </div>
        </div>
    }
}
