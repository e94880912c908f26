//! Stacked monthly bar chart.

use core_types::dashboard::{ChartSeries, MONTHS, stacked_max};
use yew::prelude::*;

/// Properties for BarChart component.
#[derive(Properties, PartialEq)]
pub struct BarChartProps {
    pub series: Vec<ChartSeries>,
}

/// Bar chart with one stacked bar per month, first series at the bottom.
#[function_component(BarChart)]
pub fn bar_chart(props: &BarChartProps) -> Html {
    let max = f64::from(stacked_max(&props.series).max(1));

    html! {
        <div class="bar-chart">
            <div class="chart-legend">
                { for props.series.iter().map(|s| html! {
                    <span class="legend-item">
                        <span class="legend-swatch" style={format!("background: {};", s.color)} />
                        { s.name }
                    </span>
                })}
            </div>
            <div class="bar-chart-bars">
                { for MONTHS.iter().enumerate().map(|(month, label)| html! {
                    <div class="bar-column">
                        <div class="bar-stack">
                            { for props.series.iter().map(|s| {
                                let height = f64::from(s.data[month]) / max * 100.0;
                                html! {
                                    <div
                                        class="bar-segment"
                                        title={format!("{}: {}", s.name, s.data[month])}
                                        style={format!("height: {height:.1}%; background: {};", s.color)}
                                    />
                                }
                            })}
                        </div>
                        <span class="bar-label">{ *label }</span>
                    </div>
                })}
            </div>
        </div>
    }
}
