#![allow(dead_code)]

use async_trait::async_trait;
use sitecraft::config::{KeyStore, MemoryKeyStore};
use sitecraft::llm::{GenerationRequest, LLMError, TextGenerator};
use sitecraft::{Theme, WizardController};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub enum Reply {
    Text(&'static str),
    Fail(&'static str),
}

/// Generator that plays back scripted replies and tracks concurrency
#[derive(Clone, Default)]
pub struct StubGenerator {
    replies: Arc<Mutex<VecDeque<Reply>>>,
    pub requests: Arc<Mutex<Vec<GenerationRequest>>>,
    pub credentials: Arc<Mutex<Vec<String>>>,
    in_flight: Arc<AtomicUsize>,
    pub max_in_flight: Arc<AtomicUsize>,
}

impl StubGenerator {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(replies.into())),
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, credential: &str, request: &GenerationRequest) -> Result<String, LLMError> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        self.requests.lock().unwrap().push(request.clone());
        self.credentials.lock().unwrap().push(credential.to_string());
        tokio::task::yield_now().await;

        let reply = self
            .replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("stub ran out of replies");
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        match reply {
            Reply::Text(text) => Ok(text.to_string()),
            Reply::Fail(message) => Err(LLMError::ApiError(message.to_string())),
        }
    }
}

/// Key store shared with the test so it can inspect what was persisted
#[derive(Clone, Default)]
pub struct SharedStore(pub Arc<MemoryKeyStore>);

impl KeyStore for SharedStore {
    fn load(&self) -> Result<Option<String>, sitecraft::config::KeyStoreError> {
        self.0.load()
    }

    fn save(&self, value: &str) -> Result<(), sitecraft::config::KeyStoreError> {
        self.0.save(value)
    }

    fn clear(&self) -> Result<(), sitecraft::config::KeyStoreError> {
        self.0.clear()
    }
}

/// Unlocked controller backed by `generator` and a fresh shared store
pub fn unlocked_controller(generator: StubGenerator) -> (WizardController, SharedStore) {
    let store = SharedStore(Arc::new(MemoryKeyStore::with_value("test-key")));
    let controller = WizardController::new(Box::new(generator), Box::new(store.clone())).unwrap();
    (controller, store)
}

/// Walk a controller to BRANDING with the options used throughout the tests
pub fn blog_at_branding(controller: &mut WizardController) {
    controller.select_type("Blog").unwrap();
    controller.select_style("Modern").unwrap();
    controller
        .set_colors(vec!["#000".to_string(), "#111".to_string(), "#222".to_string()])
        .unwrap();
    controller.set_font("Lato").unwrap();
    controller.set_theme(Theme::Dark).unwrap();
}
