use super::view_model::JobSeekerAdminViewModel;
use crate::domain::a008_job_seeker::ui::list::professional_type_options;
use crate::layout::global_context::use_global_context;
use crate::shared::components::PageHeader;
use crate::shared::confirm_dialog::ConfirmDialog;
use crate::shared::format::format_years;
use crate::shared::icons::icon;
use crate::shared::list_utils::{CollectionStatus, SearchInput, SelectFilter};
use crate::shared::modal::Modal;
use crate::shared::page_frame::{PageCategory, PageFrame};
use crate::shared::toast::use_toast;
use leptos::prelude::*;
use mep_contracts::domain::a008_job_seeker::aggregate::PROFESSIONAL_TYPES;
use mep_contracts::domain::a008_job_seeker::{JobSeeker, JobSeekerForm, WorkHistoryEntry};
use thaw::*;

#[component]
pub fn JobSeekerAdmin() -> impl IntoView {
    let global = use_global_context();
    let vm = JobSeekerAdminViewModel::new(use_toast(), global);

    // Refetch on mount, on every refresh tick and whenever a server filter changes
    Effect::new(move |_| {
        global.refresh_tick.track();
        vm.reload();
    });

    let rows = Memo::new(move |_| vm.rows());

    view! {
        <PageFrame page_id="a008_job_seeker--admin" category=PageCategory::Admin>
            <PageHeader title="Job Seekers" subtitle="Register, edit and publish job seekers">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.open_create()>
                    {icon("plus")}
                    "Add job seeker"
                </Button>
            </PageHeader>

            <div class="filter-panel">
                <SearchInput value=vm.search placeholder="Search name, email, company..." />
                <SelectFilter
                    label="Professional type"
                    options=professional_type_options()
                    value=vm.professional_type
                />
                <div class="filter-field">
                    <Label>"Min years"</Label>
                    <Input value=vm.min_experience placeholder="0" />
                </div>
                <div class="filter-field">
                    <Label>"Max years"</Label>
                    <Input value=vm.max_experience placeholder="Any" />
                </div>
            </div>

            <CollectionStatus
                loading=vm.collection.loading
                error=vm.collection.error
                count=Signal::derive(move || rows.with(Vec::len))
                empty_message="No job seekers match these filters."
            />

            <div class="table-wrapper">
                <table class="admin-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Professional type"</th>
                            <th>"Experience"</th>
                            <th>"Email"</th>
                            <th>"Phone"</th>
                            <th>"Status"</th>
                            <th class="admin-table__actions">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            rows.get()
                                .into_iter()
                                .map(|seeker| job_seeker_row(vm, seeker))
                                .collect_view()
                        }}
                    </tbody>
                </table>
            </div>

            <Show when=move || vm.crud.with(|c| c.is_open())>
                <JobSeekerFormModal vm=vm />
            </Show>
            <Show when=move || vm.crud.with(|c| c.pending_delete().is_some())>
                <DeleteJobSeekerDialog vm=vm />
            </Show>
        </PageFrame>
    }
}

fn job_seeker_row(vm: JobSeekerAdminViewModel, seeker: JobSeeker) -> impl IntoView {
    let visible = seeker.visible;
    let toggle_id = seeker.id.clone();
    let edit_id = seeker.id.clone();
    let delete_id = seeker.id.clone();

    view! {
        <tr class:admin-table__row--hidden=!visible>
            <td>{seeker.full_name()}</td>
            <td>{seeker.professional_type.clone()}</td>
            <td>{format_years(seeker.years_of_experience)}</td>
            <td>{seeker.email.clone()}</td>
            <td>{seeker.contact_number.clone()}</td>
            <td>
                <Badge appearance=BadgeAppearance::Tint>
                    {if visible { "Visible" } else { "Hidden" }}
                </Badge>
            </td>
            <td class="admin-table__actions">
                <button
                    class="button button--icon"
                    title=if visible { "Hide from public site" } else { "Show on public site" }
                    on:click=move |_| vm.toggle_visibility(toggle_id.clone())
                >
                    {icon(if visible { "eye-off" } else { "eye" })}
                </button>
                <button
                    class="button button--icon"
                    title="Edit"
                    on:click=move |_| vm.open_edit(&edit_id)
                >
                    {icon("edit")}
                </button>
                <button
                    class="button button--icon button--danger"
                    title="Delete"
                    disabled=move || vm.deleting.get()
                    on:click=move |_| vm.request_delete(delete_id.clone())
                >
                    {icon("delete")}
                </button>
            </td>
        </tr>
    }
}

#[component]
fn DeleteJobSeekerDialog(vm: JobSeekerAdminViewModel) -> impl IntoView {
    let name = vm.pending_delete_name().unwrap_or_default();

    view! {
        <ConfirmDialog
            title="Delete job seeker"
            message=format!("Delete {}? This cannot be undone.", name)
            busy=vm.deleting
            on_confirm=Callback::new(move |_| vm.confirm_delete())
            on_cancel=Callback::new(move |_| vm.cancel_delete())
        />
    }
}

#[component]
fn JobSeekerFormModal(vm: JobSeekerAdminViewModel) -> impl IntoView {
    let title = if vm.is_edit_mode() {
        "Edit job seeker"
    } else {
        "New job seeker"
    };
    let submitting = Signal::derive(move || vm.crud.with(|c| c.is_submitting()));
    let employed = Signal::derive(move || vm.crud.with(|c| c.form().currently_employed));

    view! {
        <Modal title=title on_close=Callback::new(move |_| vm.close()) class="modal--wide">
            {move || vm.field_error("form").map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <div class="form-grid">
                <TextField vm=vm label="First name" field="firstName"
                    get={|f| f.first_name.clone()} set={|f, v| f.first_name = v} />
                <TextField vm=vm label="Last name" field="lastName"
                    get={|f| f.last_name.clone()} set={|f, v| f.last_name = v} />
                <TextField vm=vm label="Contact number" field="contactNumber" input_type="tel"
                    get={|f| f.contact_number.clone()} set={|f, v| f.contact_number = v} />
                <TextField vm=vm label="Email" field="email" input_type="email"
                    get={|f| f.email.clone()} set={|f, v| f.email = v} />

                <div class="form-group">
                    <label for="professionalType">"Professional type"</label>
                    <select
                        id="professionalType"
                        prop:value=move || vm.crud.with(|c| c.form().professional_type.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            vm.update_form(|f| f.professional_type = value);
                        }
                    >
                        <option value="">"Select..."</option>
                        {PROFESSIONAL_TYPES
                            .iter()
                            .map(|t| view! { <option value=*t>{*t}</option> })
                            .collect_view()}
                    </select>
                    <FieldError vm=vm field="professionalType" />
                </div>

                <TextField vm=vm label="Years of experience" field="yearsOfExperience" input_type="number"
                    get={|f| f.years_of_experience.clone()} set={|f, v| f.years_of_experience = v} />
                <TextField vm=vm label="Highest qualification" field="highestQualification"
                    get={|f| f.highest_qualification.clone()} set={|f, v| f.highest_qualification = v} />

                <label class="form-check">
                    <input
                        type="checkbox"
                        prop:checked=move || employed.get()
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            vm.update_form(|f| f.currently_employed = checked);
                        }
                    />
                    "Currently employed"
                </label>
                <Show when=move || employed.get()>
                    <TextField vm=vm label="Current company" field="currentCompany"
                        get={|f| f.current_company.clone()} set={|f, v| f.current_company = v} />
                </Show>

                <label class="form-check">
                    <input
                        type="checkbox"
                        prop:checked=move || vm.crud.with(|c| c.form().visible)
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            vm.update_form(|f| f.visible = checked);
                        }
                    />
                    "Visible on the public site"
                </label>
            </div>

            <WorkHistoryEditor vm=vm />

            <div class="modal-actions">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| vm.close()
                    disabled=submitting
                >
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.save_command()
                    disabled=submitting
                >
                    {move || if submitting.get() { "Saving..." } else { "Save" }}
                </Button>
            </div>
        </Modal>
    }
}

#[component]
fn FieldError(vm: JobSeekerAdminViewModel, field: &'static str) -> impl IntoView {
    move || {
        vm.field_error(field)
            .map(|e| view! { <div class="field-error">{e}</div> })
    }
}

#[component]
fn TextField(
    vm: JobSeekerAdminViewModel,
    label: &'static str,
    /// Key used for validation errors, also the input id
    field: &'static str,
    #[prop(optional)] input_type: &'static str,
    get: fn(&JobSeekerForm) -> String,
    set: fn(&mut JobSeekerForm, String),
) -> impl IntoView {
    let input_type = if input_type.is_empty() { "text" } else { input_type };

    view! {
        <div class="form-group">
            <label for=field>{label}</label>
            <input
                type=input_type
                id=field
                class:input--invalid=move || vm.field_error(field).is_some()
                prop:value=move || vm.crud.with(|c| get(c.form()))
                prop:disabled=move || vm.crud.with(|c| c.is_submitting())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    vm.update_form(|f| set(f, value));
                }
            />
            <FieldError vm=vm field=field />
        </div>
    }
}

#[component]
fn WorkHistoryEditor(vm: JobSeekerAdminViewModel) -> impl IntoView {
    let count = Memo::new(move |_| vm.crud.with(|c| c.form().work_history.len()));

    view! {
        <fieldset class="work-history-editor">
            <legend>"Work history"</legend>
            {move || {
                (0..count.get())
                    .map(|i| {
                        view! {
                            <div class="work-history-editor__row">
                                {entry_input(vm, i, "Job title", |w| w.job_title.clone(), |w, v| w.job_title = v)}
                                {entry_input(vm, i, "Company", |w| w.company.clone(), |w, v| w.company = v)}
                                {entry_input(vm, i, "Duration", |w| w.duration.clone(), |w, v| w.duration = v)}
                                <button
                                    class="button button--icon"
                                    title="Remove"
                                    on:click=move |_| {
                                        vm.update_form(|f| {
                                            if i < f.work_history.len() {
                                                f.work_history.remove(i);
                                            }
                                        })
                                    }
                                >
                                    {icon("x")}
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
            <Button
                appearance=ButtonAppearance::Subtle
                on_click=move |_| vm.update_form(|f| f.work_history.push(WorkHistoryEntry::default()))
            >
                {icon("plus")}
                "Add position"
            </Button>
        </fieldset>
    }
}

fn entry_input(
    vm: JobSeekerAdminViewModel,
    index: usize,
    placeholder: &'static str,
    get: fn(&WorkHistoryEntry) -> String,
    set: fn(&mut WorkHistoryEntry, String),
) -> impl IntoView {
    view! {
        <input
            type="text"
            placeholder=placeholder
            prop:value=move || {
                vm.crud
                    .with(|c| c.form().work_history.get(index).map(get).unwrap_or_default())
            }
            on:input=move |ev| {
                let value = event_target_value(&ev);
                vm.update_form(|f| {
                    if let Some(entry) = f.work_history.get_mut(index) {
                        set(entry, value);
                    }
                });
            }
        />
    }
}
