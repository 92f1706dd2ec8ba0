use super::model;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::remote_collection::RemoteCollection;
use crate::shared::toast::ToastService;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use mep_contracts::domain::a008_job_seeker::{JobSeeker, JobSeekerForm, JobSeekerSort};
use mep_contracts::domain::common::RecordId;
use mep_contracts::shared::admin_crud::AdminCrud;
use mep_contracts::shared::api::JobSeekerQuery;
use mep_contracts::shared::listing::{apply, ListQuery, SortSpec};

/// State of the job seeker admin screen
#[derive(Clone, Copy)]
pub struct JobSeekerAdminViewModel {
    pub collection: RemoteCollection<JobSeeker>,
    pub crud: RwSignal<AdminCrud<JobSeekerForm>>,
    pub search: RwSignal<String>,
    /// Server-side filters, sent as query parameters
    pub professional_type: RwSignal<String>,
    pub min_experience: RwSignal<String>,
    pub max_experience: RwSignal<String>,
    pub deleting: RwSignal<bool>,
    toast: ToastService,
    global: AppGlobalContext,
}

fn parse_years(value: &str) -> Option<u32> {
    value.trim().parse().ok()
}

impl JobSeekerAdminViewModel {
    pub fn new(toast: ToastService, global: AppGlobalContext) -> Self {
        Self {
            collection: RemoteCollection::new(),
            crud: RwSignal::new(AdminCrud::new()),
            search: RwSignal::new(String::new()),
            professional_type: RwSignal::new(String::new()),
            min_experience: RwSignal::new(String::new()),
            max_experience: RwSignal::new(String::new()),
            deleting: RwSignal::new(false),
            toast,
            global,
        }
    }

    /// Current server filters; blank or non-numeric inputs are left out
    pub fn query(&self) -> JobSeekerQuery {
        let professional_type = self.professional_type.get();
        JobSeekerQuery {
            professional_type: (!professional_type.is_empty()).then_some(professional_type),
            min_experience: parse_years(&self.min_experience.get()),
            max_experience: parse_years(&self.max_experience.get()),
        }
    }

    /// Refetch with the current filters. Reading them inside an effect
    /// subscribes the effect to filter changes.
    pub fn reload(&self) {
        self.collection.load_with(self.query().to_call());
    }

    /// Loaded rows narrowed by the local search box; hidden records included
    pub fn rows(&self) -> Vec<JobSeeker> {
        let query = ListQuery::new()
            .search(self.search.get())
            .sort(SortSpec::asc(JobSeekerSort::Name));
        self.collection.items.with(|items| apply(items, &query))
    }

    pub fn is_edit_mode(&self) -> bool {
        self.crud.with_untracked(|c| c.mode().is_edit())
    }

    pub fn field_error(&self, field: &'static str) -> Option<String> {
        self.crud.with(|c| c.errors().get(field).map(str::to_string))
    }

    pub fn open_create(&self) {
        self.crud.update(|c| c.open_create());
    }

    pub fn open_edit(&self, id: &RecordId) {
        if let Some(record) = self.collection.find(id) {
            self.crud.update(|c| c.open_edit(&record));
        }
    }

    pub fn close(&self) {
        if !self.crud.with_untracked(|c| c.is_submitting()) {
            self.crud.update(|c| c.close());
        }
    }

    pub fn update_form(&self, change: impl FnOnce(&mut JobSeekerForm)) {
        self.crud.update(|c| c.edit_form(change));
    }

    /// Validate and send the POST or PUT; nothing is sent while invalid
    pub fn save_command(&self) {
        let mut call = None;
        self.crud.update(|c| call = c.submit());
        let Some(call) = call else {
            return;
        };

        let this = *self;
        let created = !self.is_edit_mode();
        spawn_local(async move {
            match model::run(&call).await {
                Ok(()) => {
                    this.crud.update(|c| c.submit_succeeded());
                    this.toast.success(if created {
                        "Job seeker added"
                    } else {
                        "Job seeker updated"
                    });
                    this.global.bump_refresh();
                }
                Err(message) => {
                    this.crud.update(|c| c.submit_failed());
                    this.toast.error(message);
                }
            }
        });
    }

    pub fn toggle_visibility(&self, id: RecordId) {
        let call = self.crud.with_untracked(|c| c.visibility_call(&id));
        let this = *self;
        spawn_local(async move {
            match model::run(&call).await {
                Ok(()) => {
                    this.toast.success("Visibility updated");
                    this.global.bump_refresh();
                }
                Err(message) => this.toast.error(message),
            }
        });
    }

    pub fn request_delete(&self, id: RecordId) {
        self.crud.update(|c| c.request_delete(id));
    }

    pub fn cancel_delete(&self) {
        if !self.deleting.get_untracked() {
            self.crud.update(|c| c.cancel_delete());
        }
    }

    /// Name of the record awaiting delete confirmation
    pub fn pending_delete_name(&self) -> Option<String> {
        let id = self.crud.with(|c| c.pending_delete().cloned())?;
        Some(
            self.collection
                .find(&id)
                .map(|s| s.full_name())
                .unwrap_or_else(|| "this job seeker".to_string()),
        )
    }

    /// DELETE the confirmed record and drop it from the table
    pub fn confirm_delete(&self) {
        let mut request = None;
        self.crud.update(|c| request = c.confirm_delete());
        let Some(request) = request else {
            return;
        };

        let this = *self;
        this.deleting.set(true);
        spawn_local(async move {
            match model::run(&request.call).await {
                Ok(()) => {
                    this.collection.remove(&request.id);
                    this.toast.success("Job seeker deleted");
                }
                Err(message) => this.toast.error(message),
            }
            this.deleting.set(false);
        });
    }
}
