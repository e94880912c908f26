//! Static figures rendered by the dashboard cards and charts.

/// Direction of a stat's change versus the comparison period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

/// A headline stat card.
#[derive(Debug, Clone, PartialEq)]
pub struct Stat {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub trend: Trend,
    pub subtitle: &'static str,
}

/// One named series of monthly values.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub name: &'static str,
    pub color: &'static str,
    pub data: [u32; 12],
}

/// One slice of the revenue donut.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DonutSlice {
    pub value: f64,
    pub color: &'static str,
}

/// Month labels for the x axis.
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Monthly budget shown in the middle of the revenue donut.
pub const MONTHLY_BUDGET: f64 = 1975.33;

/// Headline stats shown above the charts.
pub fn headline_stats() -> Vec<Stat> {
    vec![
        Stat {
            title: "Total Revenue",
            value: "$1,200,000",
            change: "+18%",
            trend: Trend::Up,
            subtitle: "Compared to last year",
        },
        Stat {
            title: "Active Users",
            value: "2500",
            change: "+5%",
            trend: Trend::Up,
            subtitle: "Compared to last month",
        },
        Stat {
            title: "Conversion Rate",
            value: "4.2%",
            change: "+0.3%",
            trend: Trend::Up,
            subtitle: "Compared to last month",
        },
        Stat {
            title: "New Signups",
            value: "8200",
            change: "-5.3%",
            trend: Trend::Down,
            subtitle: "Compared to last month",
        },
    ]
}

/// Series for the stacked data growth bar chart.
pub fn data_growth_series() -> Vec<ChartSeries> {
    vec![
        ChartSeries {
            name: "Active Users",
            color: "#2563EB",
            data: [480, 530, 420, 480, 430, 520, 470, 490, 460, 500, 530, 450],
        },
        ChartSeries {
            name: "Revenue",
            color: "#E5EDFF",
            data: [400, 460, 370, 420, 360, 450, 400, 420, 380, 430, 460, 390],
        },
    ]
}

/// Slices of the revenue donut.
pub fn revenue_slices() -> Vec<DonutSlice> {
    ["#2463EB", "#1E3B8A", "#91C3FD", "#DCEBFE", "#61A6FA"]
        .into_iter()
        .map(|color| DonutSlice { value: 20.0, color })
        .collect()
}

/// Tallest stacked bar across all months, used to scale the chart.
pub fn stacked_max(series: &[ChartSeries]) -> u32 {
    (0..MONTHS.len())
        .map(|month| series.iter().map(|s| s.data[month]).sum::<u32>())
        .max()
        .unwrap_or(0)
}

/// Each slice's share of the whole donut, in slice order.
///
/// An empty or all-zero donut yields zero for every slice.
pub fn slice_fractions(slices: &[DonutSlice]) -> Vec<f64> {
    let total: f64 = slices.iter().map(|s| s.value).sum();
    slices
        .iter()
        .map(|s| if total > 0.0 { s.value / total } else { 0.0 })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headline_stats() {
        let stats = headline_stats();

        assert_eq!(stats.len(), 4);
        assert_eq!(stats[3].trend, Trend::Down);
    }

    #[test]
    fn test_stacked_max() {
        // Feb and Nov both stack to 530 + 460
        assert_eq!(stacked_max(&data_growth_series()), 990);
        assert_eq!(stacked_max(&[]), 0);
    }

    #[test]
    fn test_slice_fractions() {
        let fractions = slice_fractions(&revenue_slices());

        assert_eq!(fractions.len(), 5);
        assert!(fractions.iter().all(|f| (f - 0.2).abs() < f64::EPSILON));

        let zero = [DonutSlice { value: 0.0, color: "#000" }];
        assert_eq!(slice_fractions(&zero), vec![0.0]);
    }
}
