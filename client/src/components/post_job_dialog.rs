//! Modal form for posting a job with escrowed budget.
//!
//! SYSTEM CONTEXT
//! ==============
//! Opened from the nav bar or the Jobs page through `UiState`. The form edits
//! a `JobDraft`; submit validates it, sends `create_job` through the wallet,
//! and adds the job to the local store once the transaction is accepted, or
//! at once when the wallet's network has no contract deployed.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures render inline under their fields and never reach the
//! wallet. Contract failures are toasted by the service; the dialog stays open
//! with the draft intact so the user can retry.

#[cfg(test)]
#[path = "post_job_dialog_test.rs"]
mod post_job_dialog_test;

use leptos::prelude::*;
use market::contract::applies_locally;
use market::draft::{DraftField, FieldError, JobDraft};

use crate::actions::ContractContext;
use crate::state::jobs::JobsState;
use crate::state::ui::UiState;
use crate::util::clock;

/// Inline message for `field`, if the last validation flagged it.
pub fn field_message(errors: &[FieldError], field: DraftField) -> Option<String> {
    JobDraft::error_for(errors, field).map(|err| err.to_string())
}

/// Add the skill typed so far, clearing the input on success.
pub fn commit_skill(draft: &mut JobDraft, input: &mut String) -> bool {
    let added = draft.add_skill(input);
    if added {
        input.clear();
    }
    added
}

#[component]
pub fn PostJobDialog() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let jobs = expect_context::<RwSignal<JobsState>>();
    let ctx = ContractContext::from_context();

    let draft = RwSignal::new(JobDraft::default());
    let skill_input = RwSignal::new(String::new());
    let errors = RwSignal::new(Vec::<FieldError>::new());
    let submitting = RwSignal::new(false);

    let close = move || {
        if !submitting.get_untracked() {
            ui.update(UiState::close_post_job);
        }
    };

    let add_skill = move || {
        let mut input = skill_input.get_untracked();
        let added = draft.try_update(|d| commit_skill(d, &mut input)).unwrap_or(false);
        if added {
            skill_input.set(input);
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let valid = match draft.with_untracked(JobDraft::validate) {
            Ok(valid) => valid,
            Err(found) => {
                errors.set(found);
                return;
            }
        };
        errors.set(Vec::new());
        submitting.set(true);

        let service = ctx.service();
        let client = ctx.wallet.with_untracked(|w| w.address()).unwrap_or_default();
        leptos::task::spawn_local(async move {
            let deadline = valid.deadline_secs(clock::now_secs());
            let result =
                service.create_job(&valid.title, &valid.description, &valid.budget, deadline, &valid.skills).await;
            submitting.set(false);
            if applies_locally(&result) {
                jobs.update(|state| {
                    state.post(valid, &client, clock::now_ms());
                });
                draft.set(JobDraft::default());
                ui.update(UiState::close_post_job);
            }
        });
    };

    let message = move |field: DraftField| {
        move || {
            field_message(&errors.get(), field).map(|text| view! { <p class="form__error">{text}</p> })
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| close()>
            <div class="dialog dialog--post-job" on:click=move |ev| ev.stop_propagation()>
                <h2 class="dialog__title">"Post a New Job"</h2>
                <form class="form" on:submit=on_submit>
                    <label class="form__label">
                        "Job Title"
                        <input
                            class="form__input"
                            type="text"
                            placeholder="e.g. Smart Contract Audit"
                            prop:value=move || draft.get().title
                            on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                        />
                    </label>
                    {message(DraftField::Title)}

                    <label class="form__label">
                        "Description"
                        <textarea
                            class="form__textarea"
                            placeholder="Describe the work, deliverables, and requirements"
                            prop:value=move || draft.get().description
                            on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                        ></textarea>
                    </label>
                    {message(DraftField::Description)}

                    <div class="form__row">
                        <label class="form__label">
                            "Budget (ETH)"
                            <input
                                class="form__input"
                                type="text"
                                inputmode="decimal"
                                placeholder="1.5"
                                prop:value=move || draft.get().budget
                                on:input=move |ev| draft.update(|d| d.budget = event_target_value(&ev))
                            />
                        </label>
                        <label class="form__label">
                            "Duration (days)"
                            <input
                                class="form__input"
                                type="text"
                                inputmode="numeric"
                                placeholder="14"
                                prop:value=move || draft.get().duration
                                on:input=move |ev| draft.update(|d| d.duration = event_target_value(&ev))
                            />
                        </label>
                    </div>
                    {message(DraftField::Budget)}
                    {message(DraftField::Duration)}

                    <label class="form__label">
                        "Required Skills"
                        <div class="form__skill-entry">
                            <input
                                class="form__input"
                                type="text"
                                placeholder="Add a skill and press Enter"
                                prop:value=move || skill_input.get()
                                on:input=move |ev| skill_input.set(event_target_value(&ev))
                                on:keydown=move |ev| {
                                    if ev.key() == "Enter" {
                                        ev.prevent_default();
                                        add_skill();
                                    }
                                }
                            />
                            <button class="btn" type="button" on:click=move |_| add_skill()>
                                "Add"
                            </button>
                        </div>
                    </label>
                    <div class="skills">
                        <For
                            each=move || draft.get().skills
                            key=|skill| skill.clone()
                            children=move |skill: String| {
                                let removed = skill.clone();
                                view! {
                                    <span class="skill skill--removable">
                                        {skill}
                                        <button
                                            class="skill__remove"
                                            type="button"
                                            aria-label="Remove skill"
                                            on:click=move |_| draft.update(|d| d.remove_skill(&removed))
                                        >
                                            "✕"
                                        </button>
                                    </span>
                                }
                            }
                        />
                    </div>
                    {message(DraftField::Skills)}

                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| close()>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Posting..." } else { "Post Job" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
