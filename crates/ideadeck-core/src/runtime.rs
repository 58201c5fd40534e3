use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::api::IdeasClient;
use crate::config::CoreConfig;
use crate::events::ApiEvent;

/// Cheap handle for issuing remote operations from anywhere in the UI.
#[derive(Clone)]
pub struct CoreHandle {
    client: Arc<IdeasClient>,
    event_tx: UnboundedSender<ApiEvent>,
}

impl CoreHandle {
    /// Kick off the one-shot idea listing. The result (or timeout error)
    /// arrives as `ApiEvent::Listing`.
    pub fn request_listing(&self) {
        let client = self.client.clone();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = client.list_ideas().await;
            let _ = tx.send(ApiEvent::Listing(result));
        });
    }

    /// Fire a favorite toggle tagged with its sequence number.
    pub fn request_favorite_toggle(&self, id: String, seq: u64) {
        let client = self.client.clone();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = client.toggle_favorite(&id).await;
            let _ = tx.send(ApiEvent::ToggleResolved { id, seq, result });
        });
    }

    /// Fire a hide toggle tagged with its sequence number.
    pub fn request_hidden_toggle(&self, id: String, seq: u64) {
        let client = self.client.clone();
        let tx = self.event_tx.clone();
        tokio::spawn(async move {
            let result = client.toggle_hidden(&id).await;
            let _ = tx.send(ApiEvent::ToggleResolved { id, seq, result });
        });
    }
}

/// Owns the HTTP client and the event channel the UI loop drains. All state
/// mutation stays on the UI thread; tasks only ship completions back.
pub struct CoreRuntime {
    handle: CoreHandle,
    event_rx: Option<UnboundedReceiver<ApiEvent>>,
}

impl CoreRuntime {
    pub fn new(config: &CoreConfig) -> Result<Self> {
        std::fs::create_dir_all(&config.data_dir)?;
        let client = Arc::new(IdeasClient::new(config.api_url.clone())?);
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        Ok(Self {
            handle: CoreHandle { client, event_tx },
            event_rx: Some(event_rx),
        })
    }

    pub fn handle(&self) -> CoreHandle {
        self.handle.clone()
    }

    pub fn take_event_rx(&mut self) -> Option<UnboundedReceiver<ApiEvent>> {
        self.event_rx.take()
    }
}
