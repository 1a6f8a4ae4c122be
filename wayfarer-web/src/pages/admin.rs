//! Admin form for adding destinations.
//!
//! The form state lives in an [`AdminForm`] reducer so that every edit is
//! merged into the latest draft. Validation runs on submit; only a clean
//! draft reaches the injected [`DestinationSubmitter`].

use crate::{components::TextInput, services::Services};
use shared::{
    DestinationSubmitter, FieldChange, FlagField, FormDraft, FormErrors, SubmitError, TextField,
};
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Result of the last submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStatus {
    Saved(String),
    Failed(String),
}

/// Draft, inline errors, and submit outcome of the admin form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminForm {
    pub draft: FormDraft,
    pub errors: FormErrors,
    pub status: Option<SubmitStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminFormAction {
    Change(FieldChange),
    Rejected(FormErrors),
    Saved,
    Failed(String),
}

impl Reducible for AdminForm {
    type Action = AdminFormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            AdminFormAction::Change(change) => next.draft.apply(change),
            AdminFormAction::Rejected(errors) => {
                next.errors = errors;
                next.status = None;
            }
            AdminFormAction::Saved => {
                let name = next.draft.name.trim().to_string();
                next = Self {
                    status: Some(SubmitStatus::Saved(name)),
                    ..Self::default()
                };
            }
            AdminFormAction::Failed(reason) => {
                next.errors = FormErrors::new();
                next.status = Some(SubmitStatus::Failed(reason));
            }
        }
        Rc::new(next)
    }
}

/// Validates `draft` and, when clean, hands it to `submitter`.
///
/// The submitter is not called for a draft with missing fields.
pub fn submit(draft: &FormDraft, submitter: &dyn DestinationSubmitter) -> AdminFormAction {
    let errors = draft.validate();
    if !errors.is_empty() {
        log::debug!("Admin form rejected: {} invalid field(s)", errors.len());
        return AdminFormAction::Rejected(errors);
    }
    match submitter.create_destination(draft) {
        Ok(()) => {
            log::info!("Destination \"{}\" submitted", draft.name);
            AdminFormAction::Saved
        }
        Err(SubmitError::Validation(errors)) => AdminFormAction::Rejected(errors),
        Err(err @ SubmitError::Transport(_)) => {
            log::error!("Destination submission failed: {err}");
            AdminFormAction::Failed(err.to_string())
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AdminPageProps {
    pub services: Rc<Services>,
}

#[function_component(AdminPage)]
pub fn admin_page(props: &AdminPageProps) -> Html {
    let form = use_reducer(AdminForm::default);

    let on_change = {
        let form = form.dispatcher();
        Callback::from(move |change: FieldChange| form.dispatch(AdminFormAction::Change(change)))
    };

    let on_high_demand = {
        let on_change = on_change.clone();
        Callback::from(move |event: Event| {
            let input: HtmlInputElement = event.target_unchecked_into();
            on_change.emit(FieldChange::flag(FlagField::HighDemand, input.checked()));
        })
    };

    let onsubmit = {
        let form = form.clone();
        let submitter = Rc::clone(&props.services.submitter);
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            form.dispatch(submit(&form.draft, submitter.as_ref()));
        })
    };

    let text_input = |field: TextField| {
        html! {
            <TextInput
                {field}
                value={AttrValue::from(form.draft.text(field).to_string())}
                error={form.errors.message(field).map(AttrValue::from)}
                on_change={on_change.clone()}
            />
        }
    };

    html! {
        <form class="admin-form" {onsubmit}>
            <h2>{"Admin Page"}</h2>
            if let Some(status) = &form.status {
                {
                    match status {
                        SubmitStatus::Saved(name) => html! {
                            <div class="alert alert-success" role="status">
                                {format!("Destination \"{name}\" saved.")}
                            </div>
                        },
                        SubmitStatus::Failed(reason) => html! {
                            <div class="alert alert-error" role="alert">{reason.clone()}</div>
                        },
                    }
                }
            }
            { text_input(TextField::Name) }
            { text_input(TextField::Kind) }
            <div class="form-control">
                <label>
                    <input
                        type="checkbox"
                        name={FlagField::HighDemand.input_name()}
                        checked={form.draft.high_demand}
                        onchange={on_high_demand}
                    />
                    {"High Demand"}
                </label>
            </div>
            if form.draft.shows_additional_options() {
                <fieldset class="additional-options">
                    <legend>{"Additional Options:"}</legend>
                </fieldset>
            }
            <button type="submit">{"Submit"}</button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSubmitter {
        calls: RefCell<Vec<FormDraft>>,
        fail_with: Option<SubmitError>,
    }

    impl DestinationSubmitter for RecordingSubmitter {
        fn create_destination(&self, draft: &FormDraft) -> Result<(), SubmitError> {
            self.calls.borrow_mut().push(draft.clone());
            match &self.fail_with {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }
    }

    fn reduce(form: AdminForm, action: AdminFormAction) -> AdminForm {
        (*Rc::new(form).reduce(action)).clone()
    }

    fn filled() -> AdminForm {
        let form = reduce(
            AdminForm::default(),
            AdminFormAction::Change(FieldChange::text(TextField::Name, "Patagonia")),
        );
        reduce(
            form,
            AdminFormAction::Change(FieldChange::text(TextField::Kind, "Adventure")),
        )
    }

    #[test]
    fn test_empty_submit_reports_two_errors_and_skips_submitter() {
        let submitter = RecordingSubmitter::default();
        let action = submit(&FormDraft::default(), &submitter);

        let form = reduce(AdminForm::default(), action);
        assert_eq!(form.errors.len(), 2);
        assert!(form.errors.get(TextField::Name).is_some());
        assert!(form.errors.get(TextField::Kind).is_some());
        assert!(submitter.calls.borrow().is_empty());
    }

    #[test]
    fn test_resubmit_after_filling_calls_submitter_once() {
        let submitter = RecordingSubmitter::default();
        let rejected = reduce(
            AdminForm::default(),
            submit(&FormDraft::default(), &submitter),
        );
        let mut form = rejected;
        form = reduce(
            form,
            AdminFormAction::Change(FieldChange::text(TextField::Name, "Patagonia")),
        );
        form = reduce(
            form,
            AdminFormAction::Change(FieldChange::text(TextField::Kind, "Adventure")),
        );
        let draft = form.draft.clone();

        let form = reduce(form, submit(&draft, &submitter));

        assert!(form.errors.is_empty());
        assert_eq!(submitter.calls.borrow().as_slice(), &[draft]);
        assert_eq!(
            form.status,
            Some(SubmitStatus::Saved("Patagonia".to_string()))
        );
        assert_eq!(form.draft, FormDraft::default());
    }

    #[test]
    fn test_checkbox_merges_into_draft() {
        let form = reduce(
            filled(),
            AdminFormAction::Change(FieldChange::flag(FlagField::HighDemand, true)),
        );
        assert!(form.draft.high_demand);
        assert_eq!(form.draft.name, "Patagonia");
        assert_eq!(form.draft.kind, "Adventure");
    }

    #[test]
    fn test_transport_failure_keeps_draft() {
        let submitter = RecordingSubmitter {
            fail_with: Some(SubmitError::Transport("offline".to_string())),
            ..RecordingSubmitter::default()
        };
        let form = filled();
        let action = submit(&form.draft, &submitter);
        let form = reduce(form, action);

        assert_eq!(form.draft.name, "Patagonia");
        assert_eq!(
            form.status,
            Some(SubmitStatus::Failed("submission failed: offline".to_string()))
        );
        assert_eq!(submitter.calls.borrow().len(), 1);
    }

    #[test]
    fn test_endpoint_validation_errors_are_shown_inline() {
        let mut errors = FormErrors::new();
        errors.insert(TextField::Kind, shared::models::ValidationError::Required);
        let submitter = RecordingSubmitter {
            fail_with: Some(SubmitError::Validation(errors.clone())),
            ..RecordingSubmitter::default()
        };

        let form = filled();
        let action = submit(&form.draft, &submitter);
        assert_eq!(action, AdminFormAction::Rejected(errors));
    }

    #[test]
    fn test_rejection_clears_previous_status() {
        let saved = AdminForm {
            status: Some(SubmitStatus::Saved("Bali".to_string())),
            ..AdminForm::default()
        };
        let form = reduce(saved, AdminFormAction::Rejected(FormDraft::default().validate()));
        assert_eq!(form.status, None);
        assert_eq!(form.errors.len(), 2);
    }
}
