// Application state for HTTP handlers
use crate::application::deck_service::DeckService;
use crate::application::streaming_service::StreamingDeckService;

#[derive(Clone)]
pub struct AppState {
    pub deck_service: DeckService,
    pub streaming_service: StreamingDeckService,
}

impl AppState {
    pub fn new(deck_service: DeckService) -> Self {
        let streaming_service = StreamingDeckService::new(deck_service.clone());
        Self {
            deck_service,
            streaming_service,
        }
    }
}
