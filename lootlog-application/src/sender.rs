use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::Notify;
use tracing::{debug, warn};

use lootlog_domain::ports::{ClientThread, WebhookTransport};
use lootlog_domain::{ChatNotice, HostAction, WebhookResponse};

use crate::ErrorCounter;

pub const JSON_FIELD: &str = "json";

/// Fire-and-forget submission of rendered payloads. Owns the endpoint error
/// tally; clones share it. Status reactions that touch host state are queued
/// on the client thread.
#[derive(Clone)]
pub struct WebhookSender {
    endpoint_url: Arc<str>,
    transport: Arc<dyn WebhookTransport>,
    client_thread: Arc<dyn ClientThread>,
    errors: Arc<ErrorCounter>,
    in_flight: Arc<InFlight>,
}

#[derive(Default)]
struct InFlight {
    count: AtomicUsize,
    idle: Notify,
}

struct InFlightGuard(Arc<InFlight>);

impl InFlightGuard {
    fn enter(in_flight: Arc<InFlight>) -> Self {
        in_flight.count.fetch_add(1, Ordering::AcqRel);
        Self(in_flight)
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        if self.0.count.fetch_sub(1, Ordering::AcqRel) == 1 {
            self.0.idle.notify_waiters();
        }
    }
}

impl WebhookSender {
    pub fn new(
        endpoint_url: impl Into<String>,
        transport: Arc<dyn WebhookTransport>,
        client_thread: Arc<dyn ClientThread>,
    ) -> Self {
        Self {
            endpoint_url: Arc::from(endpoint_url.into()),
            transport,
            client_thread,
            errors: Arc::new(ErrorCounter::default()),
            in_flight: Arc::new(InFlight::default()),
        }
    }

    pub fn errors(&self) -> &ErrorCounter {
        &self.errors
    }

    /// Dispatches the POST on the current tokio runtime and returns at once.
    pub fn send(&self, json: String) {
        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(err) => {
                warn!("webhook not sent, no async runtime: {}", err);
                return;
            }
        };
        let sender = self.clone();
        let guard = InFlightGuard::enter(self.in_flight.clone());
        runtime.spawn(async move {
            let _guard = guard;
            match sender
                .transport
                .post_form(&sender.endpoint_url, JSON_FIELD, json)
                .await
            {
                Ok(status) => sender.handle_response(WebhookResponse::from(status)),
                Err(err) => debug!("Error submitting webhook: {:#}", err),
            }
        });
    }

    pub fn handle_response(&self, response: WebhookResponse) {
        match response {
            WebhookResponse::OutOfDate => {
                self.notify(ChatNotice::out_of_date());
            }
            WebhookResponse::Unauthorized => {
                self.notify(ChatNotice::unauthorized());
                self.client_thread.invoke(HostAction::ClearAuthCode);
            }
            WebhookResponse::LoggingFailed => {
                self.notify(ChatNotice::logging_failed());
                let total = self.errors.record_failure();
                debug!("endpoint failed to log loot ({} so far)", total);
            }
            WebhookResponse::Ignored(status) => {
                debug!("webhook responded {}", status);
            }
        }
    }

    fn notify(&self, notice: ChatNotice) {
        self.client_thread.invoke(HostAction::Notice(notice));
    }

    /// Waits until every dispatched request has completed.
    pub async fn flush(&self) {
        loop {
            let idle = self.in_flight.idle.notified();
            if self.in_flight.count.load(Ordering::Acquire) == 0 {
                return;
            }
            idle.await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{RecordingClientThread, ScriptedTransport};

    fn sender(transport: Arc<ScriptedTransport>) -> (WebhookSender, Arc<RecordingClientThread>) {
        let client_thread = Arc::new(RecordingClientThread::default());
        let sender = WebhookSender::new("http://127.0.0.1:9/?add", transport, client_thread.clone());
        (sender, client_thread)
    }

    #[tokio::test]
    async fn posts_payload_under_json_field() {
        let transport = Arc::new(ScriptedTransport::status(200));
        let (sender, client_thread) = sender(transport.clone());
        sender.send("{ }".to_string());
        sender.flush().await;

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].url, "http://127.0.0.1:9/?add");
        assert_eq!(calls[0].field, "json");
        assert_eq!(calls[0].value, "{ }");
        assert!(client_thread.take().is_empty());
    }

    #[tokio::test]
    async fn out_of_date_only_notifies() {
        let (sender, client_thread) = sender(Arc::new(ScriptedTransport::status(400)));
        sender.send("{ }".to_string());
        sender.flush().await;
        assert_eq!(
            client_thread.take(),
            vec![HostAction::Notice(ChatNotice::out_of_date())]
        );
        assert_eq!(sender.errors().count(), 0);
    }

    #[tokio::test]
    async fn unauthorized_queues_notice_and_clear_on_client_thread() {
        let (sender, client_thread) = sender(Arc::new(ScriptedTransport::status(401)));
        sender.send("{ }".to_string());
        sender.flush().await;
        assert_eq!(
            client_thread.take(),
            vec![
                HostAction::Notice(ChatNotice::unauthorized()),
                HostAction::ClearAuthCode,
            ]
        );
        assert_eq!(sender.errors().count(), 0);
    }

    #[tokio::test]
    async fn logging_failure_increments_tally_by_one() {
        let (sender, client_thread) = sender(Arc::new(ScriptedTransport::status(402)));
        sender.send("{ }".to_string());
        sender.flush().await;
        assert_eq!(
            client_thread.take(),
            vec![HostAction::Notice(ChatNotice::logging_failed())]
        );
        assert_eq!(sender.errors().count(), 1);
    }

    #[tokio::test]
    async fn transport_failure_is_swallowed() {
        let (sender, client_thread) = sender(Arc::new(ScriptedTransport::unreachable()));
        sender.send("{ }".to_string());
        sender.flush().await;
        assert!(client_thread.take().is_empty());
        assert_eq!(sender.errors().count(), 0);
    }

    #[tokio::test]
    async fn other_statuses_have_no_effect() {
        let (sender, client_thread) = sender(Arc::new(ScriptedTransport::status(500)));
        sender.send("{ }".to_string());
        sender.flush().await;
        assert!(client_thread.take().is_empty());
        assert_eq!(sender.errors().count(), 0);
    }

    #[test]
    fn send_without_runtime_does_not_panic() {
        let transport = Arc::new(ScriptedTransport::status(200));
        let (sender, _client_thread) = sender(transport.clone());
        sender.send("{ }".to_string());
        assert!(transport.calls().is_empty());
    }
}
