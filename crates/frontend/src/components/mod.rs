//! Reusable UI components.

mod bar_chart;
mod data_table;
mod donut_chart;
mod member_modal;
mod pagination_bar;
mod stat_card;
mod toast;

pub use bar_chart::BarChart;
pub use data_table::DataTable;
pub use donut_chart::DonutChart;
pub use member_modal::{MemberModal, ModalMode};
pub use pagination_bar::PaginationBar;
pub use stat_card::StatCard;
pub use toast::{Toast, ToastKind, ToastView};
