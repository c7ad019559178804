use async_trait::async_trait;
use contracts::form::SubmitError;
use futures::future::{self, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde_json::Value;
use std::future::Future;
use web_sys::{AbortController, AbortSignal};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";

/// Sends an encoded form body and returns the parsed JSON reply.
#[async_trait(?Send)]
pub trait FormTransport {
    async fn post_form(&self, action: &str, body: String) -> Result<Value, SubmitError>;
}

/// Browser `fetch` transport
#[derive(Debug, Clone)]
pub struct HttpTransport {
    timeout_ms: u32,
}

impl HttpTransport {
    pub fn new(timeout_ms: u32) -> Self {
        Self { timeout_ms }
    }
}

#[async_trait(?Send)]
impl FormTransport for HttpTransport {
    async fn post_form(&self, action: &str, body: String) -> Result<Value, SubmitError> {
        if self.timeout_ms == 0 {
            return post(action, body, None).await;
        }

        let controller =
            AbortController::new().map_err(|e| SubmitError::Network(format!("{:?}", e)))?;
        let signal = controller.signal();

        // Abort the fetch before the timeout reaches the form.
        race_timeout(
            post(action, body, Some(&signal)),
            TimeoutFuture::new(self.timeout_ms),
            self.timeout_ms,
            || controller.abort(),
        )
        .await
    }
}

/// Resolves with `request` unless `timeout` finishes first, in which case
/// `on_timeout` runs and the result is [`SubmitError::Timeout`].
pub(crate) async fn race_timeout<R, T>(
    request: R,
    timeout: T,
    timeout_ms: u32,
    on_timeout: impl FnOnce(),
) -> Result<Value, SubmitError>
where
    R: Future<Output = Result<Value, SubmitError>>,
    T: Future<Output = ()>,
{
    futures::pin_mut!(request, timeout);

    match future::select(request, timeout).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => {
            on_timeout();
            log::warn!("Form submission aborted after {} ms", timeout_ms);
            Err(SubmitError::Timeout(timeout_ms))
        }
    }
}

async fn post(
    action: &str,
    body: String,
    signal: Option<&AbortSignal>,
) -> Result<Value, SubmitError> {
    let response = Request::post(action)
        .header("Content-Type", FORM_CONTENT_TYPE)
        .header("Accept", "application/json")
        .abort_signal(signal)
        .body(body)
        .map_err(|e| SubmitError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;

    check_status(response.ok(), response.status())?;

    let text = response
        .text()
        .await
        .map_err(|e| SubmitError::Network(e.to_string()))?;
    parse_body(&text)
}

fn check_status(ok: bool, status: u16) -> Result<(), SubmitError> {
    if ok {
        Ok(())
    } else {
        Err(SubmitError::Status(status))
    }
}

fn parse_body(text: &str) -> Result<Value, SubmitError> {
    serde_json::from_str(text).map_err(|e| SubmitError::MalformedResponse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::Cell;

    #[test]
    fn test_timeout_wins_over_pending_request() {
        let aborted = Cell::new(false);
        let result = block_on(race_timeout(
            future::pending(),
            future::ready(()),
            2500,
            || aborted.set(true),
        ));

        assert_eq!(result, Err(SubmitError::Timeout(2500)));
        assert!(aborted.get());
    }

    #[test]
    fn test_reply_before_timeout_is_returned() {
        let aborted = Cell::new(false);
        let result = block_on(race_timeout(
            future::ready(Ok(serde_json::json!({ "id": 7 }))),
            future::pending(),
            2500,
            || aborted.set(true),
        ));

        assert_eq!(result, Ok(serde_json::json!({ "id": 7 })));
        assert!(!aborted.get());
    }

    #[test]
    fn test_request_error_before_timeout_is_kept() {
        let result = block_on(race_timeout(
            future::ready(Err(SubmitError::Status(502))),
            future::pending(),
            2500,
            || {},
        ));
        assert_eq!(result, Err(SubmitError::Status(502)));
    }

    #[test]
    fn test_non_success_status_is_an_error() {
        assert_eq!(check_status(true, 200), Ok(()));
        assert_eq!(check_status(false, 404), Err(SubmitError::Status(404)));
        assert_eq!(check_status(false, 500), Err(SubmitError::Status(500)));
    }

    #[test]
    fn test_body_must_be_json() {
        assert_eq!(
            parse_body(r#"{"status":"ok"}"#),
            Ok(serde_json::json!({ "status": "ok" }))
        );
        assert!(matches!(
            parse_body("<html>Saved</html>"),
            Err(SubmitError::MalformedResponse(_))
        ));
        assert!(matches!(
            parse_body(""),
            Err(SubmitError::MalformedResponse(_))
        ));
    }
}
