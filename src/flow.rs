//! Create-new flow state machine
//!
//! One flow instance per augmented control. The flow owns the resolved config
//! and the sentinel's index explicitly instead of capturing them ambiently, and
//! it never performs I/O itself: callers feed it selection changes, the closed
//! prompt, and the server's answer, and perform the [`FlowEffect`]s it returns.
//!
//! ```text
//! Idle --sentinel selected--> Prompting --cancel/empty--> Idle
//!                                       --submit--> AwaitingServer --done--> Idle
//! ```

use tracing::{debug, warn};

use crate::config::SelectConfig;
use crate::remote::{CreateClient, CreateError, CreatedEntry};
use crate::prompt::PromptSource;
use crate::select::{augment, is_sentinel_selected, SelectControl, SelectOption};

/// Where the flow currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowState {
    /// An original or created option is selected
    #[default]
    Idle,
    /// Waiting for the user to close the text prompt
    Prompting,
    /// Waiting for the create endpoint to answer
    AwaitingServer,
}

/// Work the caller must perform after feeding the flow an input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowEffect {
    /// Open the text prompt with this message
    ShowPrompt { message: String },
    /// POST `{field_name: value}` to `endpoint`, then call
    /// [`CreateFlow::completed`] with the outcome
    SubmitCreate {
        endpoint: String,
        field_name: String,
        value: String,
    },
    /// Show this error to the user; the selection has been reverted
    SurfaceError { message: String },
}

/// Per-control create-new flow
#[derive(Debug, Clone)]
pub struct CreateFlow {
    config: SelectConfig,
    sentinel: usize,
    state: FlowState,
}

impl CreateFlow {
    /// Augment `control` and return the flow driving its create-new entries
    pub fn attach(control: &mut SelectControl, config: SelectConfig) -> Self {
        let sentinel = augment(control, &config);
        Self {
            config,
            sentinel,
            state: FlowState::Idle,
        }
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn config(&self) -> &SelectConfig {
        &self.config
    }

    /// Index of the sentinel option this flow watches
    pub fn sentinel_index(&self) -> usize {
        self.sentinel
    }

    /// Feed a selection change; opens the prompt when the sentinel is picked.
    ///
    /// Only acts from `Idle` so a change event arriving while a request is in
    /// flight cannot start a second flow.
    pub fn selection_changed(&mut self, control: &SelectControl) -> Option<FlowEffect> {
        if self.state != FlowState::Idle {
            return None;
        }
        if !is_sentinel_selected(control, &self.config) {
            return None;
        }
        self.state = FlowState::Prompting;
        debug!("sentinel selected, prompting");
        Some(FlowEffect::ShowPrompt {
            message: self.config.prompt_message.clone(),
        })
    }

    /// Feed the closed prompt. `None` or an empty string reverts the selection
    /// to the first option; text submits a create request, untrimmed.
    pub fn prompt_closed(
        &mut self,
        control: &mut SelectControl,
        input: Option<String>,
    ) -> Option<FlowEffect> {
        if self.state != FlowState::Prompting {
            return None;
        }
        match input {
            Some(value) if !value.is_empty() => {
                self.state = FlowState::AwaitingServer;
                Some(FlowEffect::SubmitCreate {
                    endpoint: control.endpoint().to_string(),
                    field_name: self.config.field_name.clone(),
                    value,
                })
            }
            _ => {
                debug!("prompt dismissed, reverting to first option");
                control.select_first();
                self.state = FlowState::Idle;
                None
            }
        }
    }

    /// Feed the endpoint's answer. Success inserts the created option right
    /// after the sentinel and selects it; failure reverts to the first option
    /// and surfaces the error.
    pub fn completed(
        &mut self,
        control: &mut SelectControl,
        result: Result<CreatedEntry, CreateError>,
    ) -> Option<FlowEffect> {
        if self.state != FlowState::AwaitingServer {
            return None;
        }
        self.state = FlowState::Idle;
        match result {
            Ok(entry) => {
                let at = match control
                    .insert_after(self.sentinel, SelectOption::created(entry.value, entry.name))
                {
                    Ok(at) => at,
                    Err(e) => {
                        // Sentinel index no longer valid; the control was
                        // mutated behind our back.
                        warn!(error = %e, "create result dropped");
                        control.select_first();
                        return Some(FlowEffect::SurfaceError {
                            message: e.to_string(),
                        });
                    }
                };
                // insert_after never returns an out-of-range index
                let _ = control.select(at);
                None
            }
            Err(e) => {
                warn!(error = %e, "create request failed, reverting to first option");
                control.select_first();
                Some(FlowEffect::SurfaceError {
                    message: e.to_string(),
                })
            }
        }
    }
}

/// Drive one complete create-new pass with an injected prompt and client.
///
/// Intended for non-interactive callers and tests; the TUI app performs the
/// same steps itself so the network request can complete off the UI task.
pub async fn run_create_flow(
    control: &mut SelectControl,
    flow: &mut CreateFlow,
    prompt: &dyn PromptSource,
    client: &dyn CreateClient,
) -> Option<FlowEffect> {
    let message = match flow.selection_changed(control) {
        Some(FlowEffect::ShowPrompt { message }) => message,
        other => return other,
    };
    let input = prompt.ask(&message);
    match flow.prompt_closed(control, input) {
        Some(FlowEffect::SubmitCreate {
            endpoint,
            field_name,
            value,
        }) => {
            let result = client.create(&endpoint, &field_name, &value).await;
            flow.completed(control, result)
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::SelectOption;

    fn attached() -> (SelectControl, CreateFlow) {
        let mut control = SelectControl::new(
            "/categories",
            vec![SelectOption::original("", "Choose one")],
        )
        .unwrap();
        let flow = CreateFlow::attach(&mut control, SelectConfig::default());
        (control, flow)
    }

    #[test]
    fn non_sentinel_selection_is_a_noop() {
        let (control, mut flow) = attached();
        assert_eq!(flow.selection_changed(&control), None);
        assert_eq!(flow.state(), FlowState::Idle);
    }

    #[test]
    fn sentinel_selection_opens_prompt() {
        let (mut control, mut flow) = attached();
        control.select(flow.sentinel_index()).unwrap();
        let effect = flow.selection_changed(&control);
        assert_eq!(
            effect,
            Some(FlowEffect::ShowPrompt {
                message: "Please Enter Name".into()
            })
        );
        assert_eq!(flow.state(), FlowState::Prompting);
    }

    #[test]
    fn cancel_reverts_to_first_option() {
        let (mut control, mut flow) = attached();
        control.select(flow.sentinel_index()).unwrap();
        flow.selection_changed(&control);
        assert_eq!(flow.prompt_closed(&mut control, None), None);
        assert_eq!(control.selected_index(), 0);
        assert_eq!(flow.state(), FlowState::Idle);
    }

    #[test]
    fn empty_submission_counts_as_cancel() {
        let (mut control, mut flow) = attached();
        control.select(flow.sentinel_index()).unwrap();
        flow.selection_changed(&control);
        flow.prompt_closed(&mut control, Some(String::new()));
        assert_eq!(control.selected_index(), 0);
        assert_eq!(flow.state(), FlowState::Idle);
    }

    #[test]
    fn submission_carries_endpoint_field_and_untrimmed_value() {
        let (mut control, mut flow) = attached();
        control.select(flow.sentinel_index()).unwrap();
        flow.selection_changed(&control);
        let effect = flow.prompt_closed(&mut control, Some("  Sports ".into()));
        assert_eq!(
            effect,
            Some(FlowEffect::SubmitCreate {
                endpoint: "/categories".into(),
                field_name: "name".into(),
                value: "  Sports ".into(),
            })
        );
        assert_eq!(flow.state(), FlowState::AwaitingServer);
    }

    #[test]
    fn success_inserts_after_sentinel_and_selects() {
        let (mut control, mut flow) = attached();
        control.select(flow.sentinel_index()).unwrap();
        flow.selection_changed(&control);
        flow.prompt_closed(&mut control, Some("Sports".into()));
        let effect = flow.completed(
            &mut control,
            Ok(CreatedEntry {
                value: "42".into(),
                name: "Sports".into(),
            }),
        );
        assert_eq!(effect, None);
        assert_eq!(control.selected_index(), flow.sentinel_index() + 1);
        assert_eq!(control.selected_option().value, "42");
        assert_eq!(flow.state(), FlowState::Idle);
    }

    #[test]
    fn failure_reverts_and_surfaces_error() {
        let (mut control, mut flow) = attached();
        control.select(flow.sentinel_index()).unwrap();
        flow.selection_changed(&control);
        flow.prompt_closed(&mut control, Some("Sports".into()));
        let effect = flow.completed(
            &mut control,
            Err(CreateError::Malformed("missing name".into())),
        );
        assert!(matches!(effect, Some(FlowEffect::SurfaceError { .. })));
        assert_eq!(control.selected_index(), 0);
        assert_eq!(flow.state(), FlowState::Idle);
    }

    #[test]
    fn change_events_are_ignored_while_awaiting_server() {
        let (mut control, mut flow) = attached();
        control.select(flow.sentinel_index()).unwrap();
        flow.selection_changed(&control);
        flow.prompt_closed(&mut control, Some("Sports".into()));
        assert_eq!(flow.selection_changed(&control), None);
        assert_eq!(flow.state(), FlowState::AwaitingServer);
    }
}
