// Streaming deck service - Full deck first, then every committed control change
use crate::application::deck_service::DeckService;
use crate::domain::deck::{ControlsView, Deck};
use futures::stream::{self, Stream, StreamExt};
use serde::Serialize;
use tokio_stream::wrappers::WatchStream;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DeckMessage {
    Skeleton { deck: Deck },
    Controls { controls: ControlsView },
}

#[derive(Clone)]
pub struct StreamingDeckService {
    deck_service: DeckService,
}

impl StreamingDeckService {
    pub fn new(deck_service: DeckService) -> Self {
        Self { deck_service }
    }

    /// Subscribe before reading the skeleton so no commit falls between the
    /// two. Intermediate commits may coalesce; the latest one is always sent.
    pub fn stream_deck(&self) -> impl Stream<Item = DeckMessage> + Send + use<> {
        let mut rx = self.deck_service.subscribe();
        let skeleton = {
            let snapshot = rx.borrow_and_update();
            self.deck_service.deck_from(&snapshot)
        };

        tracing::debug!("Deck stream subscribed at revision {}", skeleton.controls.revision);

        let updates = WatchStream::from_changes(rx).map(|snapshot| DeckMessage::Controls {
            controls: DeckService::controls_view(&snapshot),
        });

        stream::once(async move { DeckMessage::Skeleton { deck: skeleton } }).chain(updates)
    }
}
