use contracts::form::{FormState, SubmitError};
use serde_json::Value;

use super::transport::FormTransport;
use crate::shared::config::FormConfig;

/// Posts a form through `T` and applies the outcome to its state.
#[derive(Debug, Clone)]
pub struct SubmissionHandler<T> {
    transport: T,
    action: String,
    confirmation: String,
}

impl<T: FormTransport> SubmissionHandler<T> {
    pub fn new(transport: T, config: &FormConfig) -> Self {
        Self {
            transport,
            action: config.action.clone(),
            confirmation: config.confirmation.clone(),
        }
    }

    /// Full round trip on a form the caller owns for the whole request.
    pub async fn submit(&self, form: &mut FormState) -> Result<Value, SubmitError> {
        let body = form.begin_submit()?;
        let result = self.send(body).await;
        self.finish(form, result)
    }

    /// Issues the POST for a body produced by [`FormState::begin_submit`].
    pub async fn send(&self, body: String) -> Result<Value, SubmitError> {
        log::debug!("POST {} ({} bytes)", self.action, body.len());
        self.transport.post_form(&self.action, body).await
    }

    /// Applies the result of [`Self::send`] to `form`.
    pub fn finish(
        &self,
        form: &mut FormState,
        result: Result<Value, SubmitError>,
    ) -> Result<Value, SubmitError> {
        match result {
            Ok(response) => {
                log::info!("Form submitted to {}", self.action);
                form.mark_submitted(&self.confirmation);
                Ok(response)
            }
            Err(e) => {
                log::error!("Form submission to {} failed: {}", self.action, e);
                form.mark_failed(&e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use contracts::form::{FieldKind, FormField, SubmissionStatus};
    use futures::executor::block_on;
    use std::cell::RefCell;

    /// Records every request and answers with a canned result.
    struct RecordingTransport {
        requests: RefCell<Vec<(String, String)>>,
        reply: Result<Value, SubmitError>,
    }

    impl RecordingTransport {
        fn replying(reply: Result<Value, SubmitError>) -> Self {
            Self {
                requests: RefCell::new(Vec::new()),
                reply,
            }
        }
    }

    #[async_trait(?Send)]
    impl FormTransport for RecordingTransport {
        async fn post_form(&self, action: &str, body: String) -> Result<Value, SubmitError> {
            self.requests.borrow_mut().push((action.to_string(), body));
            self.reply.clone()
        }
    }

    fn amount_form() -> FormState {
        FormState::new(vec![
            FormField::new("amount", FieldKind::Number).with_value("10"),
            FormField::new("category", FieldKind::Select).with_value("Food"),
            FormField::new("submit", FieldKind::Submit).with_value("Submit"),
        ])
    }

    fn handler(reply: Result<Value, SubmitError>) -> SubmissionHandler<RecordingTransport> {
        SubmissionHandler::new(
            RecordingTransport::replying(reply),
            &FormConfig::with_action("/api/entries"),
        )
    }

    #[test]
    fn test_success_posts_once_and_resets_form() {
        let handler = handler(Ok(serde_json::json!({ "status": "ok" })));
        let mut form = amount_form();

        let result = block_on(handler.submit(&mut form));

        assert_eq!(result, Ok(serde_json::json!({ "status": "ok" })));
        assert_eq!(
            *handler.transport.requests.borrow(),
            vec![(
                "/api/entries".to_string(),
                "amount=10&category=Food".to_string()
            )]
        );
        assert_eq!(form.value("amount"), "");
        assert_eq!(form.value("category"), "");
        assert_eq!(form.confirmation(), "Submitted!");
        assert!(!form.submit_enabled());
        assert_eq!(form.status(), &SubmissionStatus::Submitted);
    }

    #[test]
    fn test_second_submit_after_success_sends_nothing() {
        let handler = handler(Ok(Value::Null));
        let mut form = amount_form();

        assert!(block_on(handler.submit(&mut form)).is_ok());
        assert_eq!(
            block_on(handler.submit(&mut form)),
            Err(SubmitError::AlreadySubmitted)
        );
        assert_eq!(handler.transport.requests.borrow().len(), 1);
    }

    #[test]
    fn test_malformed_response_is_a_failure() {
        let error = SubmitError::MalformedResponse("expected value at line 1".into());
        let handler = handler(Err(error.clone()));
        let mut form = amount_form();

        assert_eq!(block_on(handler.submit(&mut form)), Err(error));
        assert_eq!(form.value("amount"), "10");
        assert!(form.submit_enabled());
        assert!(matches!(form.status(), SubmissionStatus::Failed(_)));
    }

    #[test]
    fn test_network_failure_allows_retry() {
        let handler = handler(Err(SubmitError::Network("offline".into())));
        let mut form = amount_form();

        assert!(block_on(handler.submit(&mut form)).is_err());
        assert!(block_on(handler.submit(&mut form)).is_err());
        assert_eq!(handler.transport.requests.borrow().len(), 2);
        assert_eq!(
            form.confirmation(),
            "Submission failed: Network error: offline"
        );
    }

    #[test]
    fn test_pending_form_is_not_resent() {
        let handler = handler(Ok(Value::Null));
        let mut form = amount_form();
        assert!(form.begin_submit().is_ok());

        assert_eq!(
            block_on(handler.submit(&mut form)),
            Err(SubmitError::InFlight)
        );
        assert!(handler.transport.requests.borrow().is_empty());
    }
}
