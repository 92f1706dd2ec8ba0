//! State machine behind the admin create/edit/delete screens.
//!
//! ```text
//! Closed -> Open(Create)          -> submit -> Submitting -> Closed (refetch)
//! Closed -> Open(Edit, prefilled) -> submit -> Submitting -> Closed (refetch)
//! ```
//!
//! Nothing here talks to the network: transitions hand back the [`ApiCall`]
//! the screen has to execute, and the screen reports the outcome.

use super::api::{ApiCall, Endpoint};
use super::validation::FieldErrors;
use crate::domain::common::{RecordId, Resource};
use serde::Serialize;

/// Form state of one admin screen
pub trait FormModel: Clone + Default {
    type Record: Resource;
    type Payload: Serialize;

    /// Prefill the form for editing
    fn from_record(record: &Self::Record) -> Self;

    /// Required-field and syntax checks; the payload is what gets sent
    fn validate(&self) -> Result<Self::Payload, FieldErrors>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(RecordId),
}

impl FormMode {
    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Closed,
    Open,
    Submitting,
}

/// A delete the user confirmed: the id to drop locally once the call succeeds
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteRequest {
    pub id: RecordId,
    pub call: ApiCall,
}

#[derive(Debug, Clone)]
pub struct AdminCrud<F: FormModel> {
    phase: FormPhase,
    mode: FormMode,
    form: F,
    errors: FieldErrors,
    pending_delete: Option<RecordId>,
}

impl<F: FormModel> Default for AdminCrud<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FormModel> AdminCrud<F> {
    pub fn new() -> Self {
        Self {
            phase: FormPhase::Closed,
            mode: FormMode::Create,
            form: F::default(),
            errors: FieldErrors::new(),
            pending_delete: None,
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_open(&self) -> bool {
        self.phase != FormPhase::Closed
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn pending_delete(&self) -> Option<&RecordId> {
        self.pending_delete.as_ref()
    }

    pub fn open_create(&mut self) {
        self.mode = FormMode::Create;
        self.form = F::default();
        self.errors = FieldErrors::new();
        self.phase = FormPhase::Open;
    }

    pub fn open_edit(&mut self, record: &F::Record) {
        self.mode = FormMode::Edit(record.id().clone());
        self.form = F::from_record(record);
        self.errors = FieldErrors::new();
        self.phase = FormPhase::Open;
    }

    /// Apply an input change; ignored unless the form is open and idle
    pub fn edit_form(&mut self, change: impl FnOnce(&mut F)) {
        if self.phase == FormPhase::Open {
            change(&mut self.form);
        }
    }

    pub fn close(&mut self) {
        self.phase = FormPhase::Closed;
        self.mode = FormMode::Create;
        self.form = F::default();
        self.errors = FieldErrors::new();
    }

    /// Validate and, when the form is valid, produce exactly one POST or PUT.
    ///
    /// On validation failure the errors are kept for display, the form stays
    /// open and no call is produced.
    pub fn submit(&mut self) -> Option<ApiCall> {
        if self.phase != FormPhase::Open {
            return None;
        }

        let payload = match self.form.validate() {
            Ok(payload) => payload,
            Err(errors) => {
                self.errors = errors;
                return None;
            }
        };
        let body = match serde_json::to_value(&payload) {
            Ok(body) => body,
            Err(e) => {
                let mut errors = FieldErrors::new();
                errors.add("form", format!("Could not prepare the request: {}", e));
                self.errors = errors;
                return None;
            }
        };

        self.errors = FieldErrors::new();
        self.phase = FormPhase::Submitting;
        let kind = <F::Record as Resource>::KIND;
        Some(match &self.mode {
            FormMode::Create => Endpoint::create(kind, body),
            FormMode::Edit(id) => Endpoint::update(kind, id, body),
        })
    }

    /// The save went through: close and reset. The caller refetches the
    /// list with its current server filters.
    pub fn submit_succeeded(&mut self) {
        if self.phase == FormPhase::Submitting {
            self.close();
        }
    }

    /// The save failed: reopen with the user's input intact
    pub fn submit_failed(&mut self) {
        if self.phase == FormPhase::Submitting {
            self.phase = FormPhase::Open;
        }
    }

    /// First step of a delete: ask for confirmation
    pub fn request_delete(&mut self, id: RecordId) {
        self.pending_delete = Some(id);
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Second step: the user accepted the dialog. Yields the DELETE once.
    pub fn confirm_delete(&mut self) -> Option<DeleteRequest> {
        let id = self.pending_delete.take()?;
        let call = Endpoint::delete(<F::Record as Resource>::KIND, &id);
        Some(DeleteRequest { id, call })
    }

    /// `PATCH /{resource}/:id/visibility`
    pub fn visibility_call(&self, id: &RecordId) -> ApiCall {
        Endpoint::visibility(<F::Record as Resource>::KIND, id)
    }
}

/// Drop a deleted record from the displayed list without refetching
pub fn remove_by_id<R: Resource>(items: &mut Vec<R>, id: &RecordId) {
    items.retain(|r| r.id() != id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a008_job_seeker::{JobSeeker, JobSeekerForm};
    use crate::shared::api::HttpMethod;

    fn seeker(id: &str, first: &str, visible: bool) -> JobSeeker {
        serde_json::from_value(serde_json::json!({
            "_id": id,
            "firstName": first,
            "lastName": "Perera",
            "contactNumber": "0771234567",
            "email": "k.perera@example.lk",
            "professionalType": "Engineer",
            "yearsOfExperience": 6,
            "highestQualification": "BSc",
            "visible": visible
        }))
        .unwrap()
    }

    fn filled_form() -> JobSeekerForm {
        JobSeekerForm {
            first_name: "Kasun".into(),
            last_name: "Perera".into(),
            contact_number: "0771234567".into(),
            email: "kasun@example.lk".into(),
            professional_type: "Engineer".into(),
            years_of_experience: "5".into(),
            highest_qualification: "BSc Engineering".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_starts_closed() {
        let crud: AdminCrud<JobSeekerForm> = AdminCrud::new();
        assert_eq!(crud.phase(), FormPhase::Closed);
        assert!(crud.pending_delete().is_none());
    }

    #[test]
    fn test_submit_with_missing_required_field_makes_no_call() {
        let mut crud: AdminCrud<JobSeekerForm> = AdminCrud::new();
        crud.open_create();
        crud.edit_form(|f| {
            *f = filled_form();
            f.last_name.clear();
        });

        assert_eq!(crud.submit(), None);
        assert!(!crud.errors().is_empty());
        assert_eq!(crud.errors().get("lastName"), Some("Last name is required"));
        assert_eq!(crud.phase(), FormPhase::Open);
    }

    #[test]
    fn test_valid_create_produces_exactly_one_post() {
        let mut crud: AdminCrud<JobSeekerForm> = AdminCrud::new();
        crud.open_create();
        crud.edit_form(|f| *f = filled_form());

        let call = crud.submit().expect("valid form must submit");
        assert_eq!(call.method, HttpMethod::Post);
        assert_eq!(call.path, "/jobseekers");
        assert_eq!(call.body.as_ref().unwrap()["firstName"], "Kasun");
        assert!(crud.errors().is_empty());
        assert!(crud.is_submitting());

        // a second click while the request is in flight does nothing
        assert_eq!(crud.submit(), None);
    }

    #[test]
    fn test_errors_clear_after_correction() {
        let mut crud: AdminCrud<JobSeekerForm> = AdminCrud::new();
        crud.open_create();
        assert_eq!(crud.submit(), None);
        assert!(crud.errors().len() > 1);

        crud.edit_form(|f| *f = filled_form());
        assert!(crud.submit().is_some());
        assert!(crud.errors().is_empty());
    }

    #[test]
    fn test_edit_prefills_and_puts() {
        let mut crud: AdminCrud<JobSeekerForm> = AdminCrud::new();
        crud.open_edit(&seeker("x1", "Nimal", true));
        assert_eq!(crud.mode(), &FormMode::Edit(RecordId::new("x1")));
        assert!(crud.mode().is_edit());
        assert_eq!(crud.form().first_name, "Nimal");
        assert_eq!(crud.form().years_of_experience, "6");

        let call = crud.submit().unwrap();
        assert_eq!(call.method, HttpMethod::Put);
        assert_eq!(call.path, "/jobseekers/x1");
    }

    #[test]
    fn test_success_closes_and_resets() {
        let mut crud: AdminCrud<JobSeekerForm> = AdminCrud::new();
        crud.open_create();
        crud.edit_form(|f| *f = filled_form());
        crud.submit().unwrap();

        crud.submit_succeeded();
        assert_eq!(crud.phase(), FormPhase::Closed);
        assert_eq!(crud.form().first_name, "");
    }

    #[test]
    fn test_failure_keeps_input() {
        let mut crud: AdminCrud<JobSeekerForm> = AdminCrud::new();
        crud.open_create();
        crud.edit_form(|f| *f = filled_form());
        crud.submit().unwrap();
        crud.submit_failed();

        assert_eq!(crud.phase(), FormPhase::Open);
        assert_eq!(crud.form().first_name, "Kasun");
    }

    #[test]
    fn test_confirmed_delete_calls_once_and_removes_locally() {
        let mut items = vec![seeker("x1", "Nimal", true), seeker("x2", "Saman", true)];
        let mut crud: AdminCrud<JobSeekerForm> = AdminCrud::new();
        crud.request_delete(RecordId::new("x1"));

        let request = crud.confirm_delete().expect("pending delete");
        assert_eq!(request.call.method, HttpMethod::Delete);
        assert_eq!(request.call.path, "/jobseekers/x1");
        assert_eq!(crud.confirm_delete(), None);

        remove_by_id(&mut items, &request.id);
        assert_eq!(items.len(), 1);
        assert!(items.iter().all(|s| s.id.as_str() != "x1"));
    }

    #[test]
    fn test_cancelled_delete_makes_no_call() {
        let items = vec![seeker("x1", "Nimal", true)];
        let before = items.len();
        let mut crud: AdminCrud<JobSeekerForm> = AdminCrud::new();
        crud.request_delete(RecordId::new("x1"));
        crud.cancel_delete();

        assert_eq!(crud.confirm_delete(), None);
        assert_eq!(items.len(), before);
    }

    #[test]
    fn test_visibility_toggle_then_refetch_reflects_hidden() {
        let crud: AdminCrud<JobSeekerForm> = AdminCrud::new();
        let before = seeker("x1", "Nimal", true);
        let call = crud.visibility_call(&before.id);
        assert_eq!(call.method, HttpMethod::Patch);
        assert_eq!(call.path, "/jobseekers/x1/visibility");

        // what the API returns on the follow-up list fetch
        let refetched: Vec<JobSeeker> = serde_json::from_value(serde_json::json!([
            { "_id": "x1", "firstName": "Nimal", "visible": false }
        ]))
        .unwrap();
        assert!(!refetched[0].visible);
    }
}
