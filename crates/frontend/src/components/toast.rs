//! Transient notification shown after roster operations.

use gloo_timers::callback::Timeout;
use yew::prelude::*;

/// How long a toast stays on screen.
const TOAST_MILLIS: u32 = 4_000;

#[derive(Clone, Copy, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A notification. The id distinguishes repeated identical messages.
#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Properties for ToastView component.
#[derive(Properties, PartialEq)]
pub struct ToastViewProps {
    pub toast: Option<Toast>,
    pub on_dismiss: Callback<()>,
}

/// Shows the current toast and dismisses it after a delay.
#[function_component(ToastView)]
pub fn toast_view(props: &ToastViewProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        let toast_id = props.toast.as_ref().map(|t| t.id);

        use_effect_with(toast_id, move |toast_id| {
            // Dropping the timeout cancels it, so a newer toast restarts the clock
            let timeout = toast_id.map(|_| Timeout::new(TOAST_MILLIS, move || on_dismiss.emit(())));
            move || drop(timeout)
        });
    }

    let Some(toast) = props.toast.as_ref() else {
        return html! {};
    };

    let class = match toast.kind {
        ToastKind::Success => "toast success",
        ToastKind::Error => "toast error",
    };

    html! {
        <div class={class} role="status">
            <span>{ &toast.message }</span>
            <button class="toast-close" onclick={props.on_dismiss.reform(|_: MouseEvent| ())}>
                {"×"}
            </button>
        </div>
    }
}
