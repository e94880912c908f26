//! Page navigation controls.

use table_view::{PageLabel, is_active};
use yew::prelude::*;

/// Properties for PaginationBar component.
#[derive(Properties, PartialEq)]
pub struct PaginationBarProps {
    pub labels: Vec<PageLabel>,
    /// 1-based current page
    pub current_page: usize,
    pub can_previous: bool,
    pub can_next: bool,
    /// Emits the zero-based index of the clicked page
    pub on_page: Callback<usize>,
    pub on_previous: Callback<()>,
    pub on_next: Callback<()>,
}

/// Previous/next buttons around the page label sequence.
#[function_component(PaginationBar)]
pub fn pagination_bar(props: &PaginationBarProps) -> Html {
    html! {
        <div class="pagination">
            <button
                class="btn btn-secondary"
                disabled={!props.can_previous}
                onclick={props.on_previous.reform(|_: MouseEvent| ())}
            >
                {"Previous"}
            </button>

            <div class="page-numbers">
                { for props.labels.iter().map(|&label| match label {
                    PageLabel::Page(page) => {
                        let class = if is_active(label, props.current_page) {
                            "page-number active"
                        } else {
                            "page-number"
                        };
                        html! {
                            <button class={class} onclick={props.on_page.reform(move |_: MouseEvent| page - 1)}>
                                { page }
                            </button>
                        }
                    }
                    PageLabel::Ellipsis => html! { <span class="page-ellipsis">{"..."}</span> },
                })}
            </div>

            <button
                class="btn btn-secondary"
                disabled={!props.can_next}
                onclick={props.on_next.reform(|_: MouseEvent| ())}
            >
                {"Next"}
            </button>
        </div>
    }
}
