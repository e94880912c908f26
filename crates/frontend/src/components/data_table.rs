//! Sortable, paginated team members table with add/edit/delete.

use core_types::{Member, MemberPatch, MemberStatus, NewMember};
use roster_store::LoadSource;
use std::cell::RefCell;
use std::rc::Rc;
use table_view::members::member_columns;
use table_view::{SortDirection, TableState, derive_view};
use yew::prelude::*;

use crate::components::{MemberModal, ModalMode, PaginationBar, Toast, ToastKind, ToastView};
use crate::roster::RosterHandle;

/// Properties for DataTable component.
#[derive(Properties, PartialEq)]
pub struct DataTableProps {
    pub roster: RosterHandle,
}

/// Team members table component.
#[function_component(DataTable)]
pub fn data_table(props: &DataTableProps) -> Html {
    let members = use_state(|| props.roster.snapshot());
    let table = use_state(TableState::default);
    let modal = use_state(|| ModalMode::Closed);
    let toast = use_state(|| startup_notice(props.roster.load_source()));
    let toast_seq = use_mut_ref(|| 1u32);
    let columns = use_memo((), |_| member_columns());

    // Re-render from the store's snapshot after every mutation
    {
        let members = members.clone();

        use_effect_with(props.roster.clone(), move |roster| {
            let id = roster.subscribe(move |snapshot| members.set(snapshot.to_vec()));
            let roster = roster.clone();
            move || roster.unsubscribe(id)
        });
    }

    let notify = notifier(toast.clone(), toast_seq);
    let total_rows = members.len();

    let on_sort = {
        let table = table.clone();
        let columns = columns.clone();
        Callback::from(move |column_id: &'static str| {
            if let Some(column) = columns.iter().find(|c| c.id == column_id) {
                let mut next = (*table).clone();
                next.toggle_sort(column);
                table.set(next);
            }
        })
    };

    let on_page = {
        let table = table.clone();
        Callback::from(move |index: usize| {
            let mut next = (*table).clone();
            next.set_page_index(index, total_rows);
            table.set(next);
        })
    };

    let on_previous = {
        let table = table.clone();
        Callback::from(move |_: ()| {
            let mut next = (*table).clone();
            next.previous_page();
            table.set(next);
        })
    };

    let on_next = {
        let table = table.clone();
        Callback::from(move |_: ()| {
            let mut next = (*table).clone();
            next.next_page(total_rows);
            table.set(next);
        })
    };

    let on_page_size = {
        let table = table.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            if let Ok(size) = select.value().parse::<usize>() {
                let mut next = (*table).clone();
                if next.set_page_size(size, total_rows) {
                    table.set(next);
                }
            }
        })
    };

    let on_add = {
        let modal = modal.clone();
        Callback::from(move |_: MouseEvent| modal.set(ModalMode::Add))
    };

    let on_edit = {
        let modal = modal.clone();
        let roster = props.roster.clone();
        let notify = notify.clone();
        Callback::from(move |id: String| match roster.get(&id) {
            Some(member) => modal.set(ModalMode::Edit(member)),
            None => notify.emit((ToastKind::Error, format!("Member not found: {id}"))),
        })
    };

    let on_delete = {
        let table = table.clone();
        let roster = props.roster.clone();
        let notify = notify.clone();
        Callback::from(move |id: String| match roster.delete(&id) {
            Ok(removed) => {
                let mut next = (*table).clone();
                next.reconcile(total_rows.saturating_sub(1));
                table.set(next);
                notify.emit((ToastKind::Success, format!("Removed {}", removed.name)));
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to delete member: {e}").into());
                notify.emit((ToastKind::Error, format!("Could not delete member: {e}")));
            }
        })
    };

    let on_submit = {
        let modal = modal.clone();
        let roster = props.roster.clone();
        let notify = notify.clone();
        Callback::from(move |input: NewMember| {
            let result = match &*modal {
                ModalMode::Add => roster.add(input).map(|m| format!("Added {}", m.name)),
                ModalMode::Edit(member) => roster
                    .update(&member.id, &MemberPatch::from(input))
                    .map(|m| format!("Updated {}", m.name)),
                ModalMode::Closed => return,
            };

            match result {
                Ok(message) => {
                    modal.set(ModalMode::Closed);
                    notify.emit((ToastKind::Success, message));
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to save member: {e}").into());
                    notify.emit((ToastKind::Error, format!("Could not save member: {e}")));
                }
            }
        })
    };

    let on_close = {
        let modal = modal.clone();
        Callback::from(move |_: ()| modal.set(ModalMode::Closed))
    };

    let on_dismiss = {
        let toast = toast.clone();
        Callback::from(move |_: ()| toast.set(None))
    };

    let view = derive_view(members.as_slice(), &columns, &table);
    let summary = match view.row_range() {
        Some((first, last)) => format!("Showing {first}-{last} of {}", view.total_rows),
        None => "No team members yet".to_string(),
    };

    html! {
        <div class="card">
            <div class="card-header">
                <h2 class="card-title">{"Team members"}</h2>
                <button class="btn btn-primary" onclick={on_add}>{"Add member"}</button>
            </div>

            <table class="table">
                <thead>
                    <tr>
                        { for columns.iter().map(|column| {
                            if column.is_sortable() {
                                let arrow = match table.sort_direction(column.id) {
                                    Some(SortDirection::Asc) => " ↑",
                                    Some(SortDirection::Desc) => " ↓",
                                    None => "",
                                };
                                let id = column.id;
                                html! {
                                    <th>
                                        <button class="sort-header" onclick={on_sort.reform(move |_: MouseEvent| id)}>
                                            { column.header }{ arrow }
                                        </button>
                                    </th>
                                }
                            } else {
                                html! { <th>{ column.header }</th> }
                            }
                        })}
                    </tr>
                </thead>
                <tbody>
                    { for view.rows.iter().map(|member| html! {
                        <MemberRow
                            member={(*member).clone()}
                            on_edit={on_edit.clone()}
                            on_delete={on_delete.clone()}
                        />
                    })}
                </tbody>
            </table>

            <div class="table-footer">
                <span class="text-secondary">{ summary }</span>
                <label class="rows-per-page">
                    {"Rows per page"}
                    <select class="filter-select" onchange={on_page_size}>
                        { for table.page_sizes().iter().map(|&size| html! {
                            <option value={size.to_string()} selected={size == view.page_size}>
                                { size }
                            </option>
                        })}
                    </select>
                </label>
            </div>

            <PaginationBar
                labels={view.labels()}
                current_page={view.current_page()}
                can_previous={view.page_index > 0}
                can_next={view.page_index + 1 < view.page_count}
                {on_page}
                {on_previous}
                {on_next}
            />

            <MemberModal mode={(*modal).clone()} {on_submit} {on_close} />
            <ToastView toast={(*toast).clone()} {on_dismiss} />
        </div>
    }
}

/// Properties for MemberRow component.
#[derive(Properties, PartialEq)]
struct MemberRowProps {
    member: Member,
    on_edit: Callback<String>,
    on_delete: Callback<String>,
}

/// One table row.
#[function_component(MemberRow)]
fn member_row(props: &MemberRowProps) -> Html {
    let member = &props.member;

    let status_class = match member.status {
        MemberStatus::Active => "status-badge active",
        MemberStatus::Inactive => "status-badge inactive",
    };

    let edit = {
        let id = member.id.clone();
        props.on_edit.reform(move |_: MouseEvent| id.clone())
    };
    let delete = {
        let id = member.id.clone();
        props.on_delete.reform(move |_: MouseEvent| id.clone())
    };

    html! {
        <tr>
            <td>
                <div class="member-name">
                    <div class="avatar">{ &member.avatar }</div>
                    <span>{ &member.name }</span>
                </div>
            </td>
            <td>
                <span class={status_class}>
                    <span class="status-dot" />
                    { member.status.as_str() }
                </span>
            </td>
            <td class="text-secondary">{ &member.role }</td>
            <td class="text-secondary">{ &member.email }</td>
            <td>
                <div class="team-badges">
                    { for member.teams.iter().map(|team| html! {
                        <span class={team_class(team)}>{ team }</span>
                    })}
                    if member.extra_teams > 0 {
                        <span class="text-secondary">{ format!("+{}", member.extra_teams) }</span>
                    }
                </div>
            </td>
            <td>
                <button class="btn btn-secondary" onclick={edit}>{"Edit"}</button>
                <button class="btn btn-danger" onclick={delete}>{"Delete"}</button>
            </td>
        </tr>
    }
}

/// Badge class for a team; known teams get their own colors.
fn team_class(team: &str) -> String {
    match team {
        "Design" | "Product" | "Marketing" => format!("team-badge team-{}", team.to_lowercase()),
        _ => "team-badge".to_string(),
    }
}

/// Toast shown on first render when the saved roster could not be used.
fn startup_notice(source: LoadSource) -> Option<Toast> {
    let message = match source {
        LoadSource::Persisted | LoadSource::Seeded => return None,
        LoadSource::Recovered => "Saved team members could not be read; sample data restored",
        LoadSource::Unavailable => "Browser storage is unavailable; changes will not be saved",
    };

    Some(Toast {
        id: 0,
        kind: ToastKind::Error,
        message: message.to_string(),
    })
}

/// Callback that replaces the current toast with a fresh one.
fn notifier(
    toast: UseStateHandle<Option<Toast>>,
    seq: Rc<RefCell<u32>>,
) -> Callback<(ToastKind, String)> {
    Callback::from(move |(kind, message): (ToastKind, String)| {
        let id = {
            let mut seq = seq.borrow_mut();
            *seq += 1;
            *seq
        };
        toast.set(Some(Toast { id, kind, message }));
    })
}
