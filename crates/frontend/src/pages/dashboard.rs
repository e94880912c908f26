//! Dashboard page: headline stats, charts and the team members table.

use core_types::dashboard::{
    MONTHLY_BUDGET, data_growth_series, headline_stats, revenue_slices,
};
use yew::prelude::*;

use crate::components::{BarChart, DataTable, DonutChart, StatCard};
use crate::roster::RosterHandle;

/// Properties for DashboardPage component.
#[derive(Properties, PartialEq)]
pub struct DashboardPageProps {
    pub roster: RosterHandle,
}

/// Dashboard page component.
#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardPageProps) -> Html {
    html! {
        <div>
            <h1>{"Dashboard"}</h1>

            <div class="stats-grid">
                { for headline_stats().into_iter().map(|stat| html! {
                    <StatCard {stat} />
                })}
            </div>

            <div class="charts-grid">
                <div class="card">
                    <div class="card-header">
                        <h2 class="card-title">{"Data growth"}</h2>
                    </div>
                    <BarChart series={data_growth_series()} />
                </div>

                <div class="card">
                    <div class="card-header">
                        <h2 class="card-title">{"Revenue"}</h2>
                    </div>
                    <DonutChart
                        slices={revenue_slices()}
                        center_value={format!("${MONTHLY_BUDGET:.2}")}
                        center_label={"Monthly budget"}
                    />
                </div>
            </div>

            <DataTable roster={props.roster.clone()} />
        </div>
    }
}
