//! Add/edit member form shown in a modal sheet.

use core_types::{Member, MemberStatus, NewMember};
use yew::prelude::*;

/// Which form the modal shows.
#[derive(Clone, PartialEq)]
pub enum ModalMode {
    Closed,
    Add,
    Edit(Member),
}

/// Properties for MemberModal component.
#[derive(Properties, PartialEq)]
pub struct MemberModalProps {
    pub mode: ModalMode,
    /// Emits validated form input
    pub on_submit: Callback<NewMember>,
    pub on_close: Callback<()>,
}

/// Member form modal component.
#[function_component(MemberModal)]
pub fn member_modal(props: &MemberModalProps) -> Html {
    let form = use_state(NewMember::default);
    let show_errors = use_state(|| false);

    // Reset the form whenever the modal opens in a new mode
    {
        let form = form.clone();
        let show_errors = show_errors.clone();

        use_effect_with(props.mode.clone(), move |mode| {
            form.set(match mode {
                ModalMode::Edit(member) => NewMember::from(member),
                ModalMode::Add | ModalMode::Closed => NewMember::default(),
            });
            show_errors.set(false);
        });
    }

    let title = match &props.mode {
        ModalMode::Closed => return html! {},
        ModalMode::Add => "Add member",
        ModalMode::Edit(_) => "Edit member",
    };

    let on_status_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            if let Ok(status) = select.value().parse::<MemberStatus>() {
                let mut next = (*form).clone();
                next.status = status;
                form.set(next);
            }
        })
    };

    let on_submit = {
        let form = form.clone();
        let show_errors = show_errors.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.validate().is_err() {
                show_errors.set(true);
                return;
            }
            on_submit.emit((*form).clone());
        })
    };

    let missing = if *show_errors {
        form.missing_fields()
    } else {
        Vec::new()
    };
    let error_for = |field: &'static str| {
        if missing.contains(&field) {
            html! { <p class="field-error">{ format!("{field} is required") }</p> }
        } else {
            html! {}
        }
    };

    html! {
        <div class="modal-backdrop">
            <form class="modal card" onsubmit={on_submit}>
                <div class="card-header">
                    <h2 class="card-title">{ title }</h2>
                    <button type="button" class="btn btn-secondary" onclick={props.on_close.reform(|_: MouseEvent| ())}>
                        {"Close"}
                    </button>
                </div>

                <label class="form-label" for="member-name">{"Name"}</label>
                <input
                    id="member-name"
                    class="form-input"
                    value={form.name.clone()}
                    oninput={text_input(&form, |f, v| f.name = v)}
                />
                { error_for("name") }

                <label class="form-label" for="member-email">{"Email"}</label>
                <input
                    id="member-email"
                    type="email"
                    class="form-input"
                    value={form.email.clone()}
                    oninput={text_input(&form, |f, v| f.email = v)}
                />
                { error_for("email") }

                <label class="form-label" for="member-role">{"Role"}</label>
                <input
                    id="member-role"
                    class="form-input"
                    value={form.role.clone()}
                    oninput={text_input(&form, |f, v| f.role = v)}
                />
                { error_for("role") }

                <label class="form-label" for="member-status">{"Status"}</label>
                <select id="member-status" class="filter-select" onchange={on_status_change}>
                    { for [MemberStatus::Active, MemberStatus::Inactive].into_iter().map(|status| html! {
                        <option value={status.as_str()} selected={form.status == status}>
                            { status.as_str() }
                        </option>
                    })}
                </select>

                <div class="modal-actions">
                    <button type="submit" class="btn btn-primary">{"Save"}</button>
                </div>
            </form>
        </div>
    }
}

/// Input handler writing the field's new value into the form state.
fn text_input(form: &UseStateHandle<NewMember>, apply: fn(&mut NewMember, String)) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let input: web_sys::HtmlInputElement = e.target_unchecked_into();
        let mut next = (*form).clone();
        apply(&mut next, input.value());
        form.set(next);
    })
}
