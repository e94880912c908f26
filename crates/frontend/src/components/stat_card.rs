//! Statistics card component.

use core_types::dashboard::{Stat, Trend};
use yew::prelude::*;

/// Properties for StatCard component.
#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub stat: Stat,
}

/// Statistics card component.
#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let stat = &props.stat;

    let change_class = match stat.trend {
        Trend::Up => "stat-change up",
        Trend::Down => "stat-change down",
    };

    html! {
        <div class="card stat-card">
            <div class="stat-label">{ stat.title }</div>
            <div class="stat-value">{ stat.value }</div>
            <div class="stat-footer">
                <span class={change_class}>{ stat.change }</span>
                <span class="stat-subtitle">{ stat.subtitle }</span>
            </div>
        </div>
    }
}
