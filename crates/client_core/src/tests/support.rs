//! Captures `tracing` events emitted while a test holds the guard.

use std::{
    collections::HashMap,
    fmt,
    sync::{Arc, Mutex},
};

use tracing::{
    field::{Field, Visit},
    subscriber::DefaultGuard,
    Event, Level, Subscriber,
};
use tracing_subscriber::{
    layer::{Context, SubscriberExt},
    registry, Layer,
};

#[derive(Debug, Clone)]
pub(crate) struct CapturedEvent {
    pub level: Level,
    pub fields: HashMap<String, String>,
}

impl CapturedEvent {
    pub fn message(&self) -> &str {
        self.field("message").unwrap_or_default()
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

#[derive(Clone, Default)]
pub(crate) struct CapturedEvents(Arc<Mutex<Vec<CapturedEvent>>>);

impl CapturedEvents {
    /// Routes this thread's events into the capture until the guard drops.
    pub fn install() -> (Self, DefaultGuard) {
        let events = Self::default();
        let guard = tracing::subscriber::set_default(registry().with(events.clone()));
        (events, guard)
    }

    pub fn snapshot(&self) -> Vec<CapturedEvent> {
        self.0.lock().expect("capture lock").clone()
    }

    pub fn with_message(&self, message: &str) -> Vec<CapturedEvent> {
        self.snapshot()
            .into_iter()
            .filter(|event| event.message() == message)
            .collect()
    }

    /// Events at INFO or above, i.e. what the default log filter keeps.
    pub fn records(&self) -> Vec<CapturedEvent> {
        self.snapshot()
            .into_iter()
            .filter(|event| event.level <= Level::INFO)
            .collect()
    }
}

impl<S: Subscriber> Layer<S> for CapturedEvents {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = FieldMap::default();
        event.record(&mut fields);
        self.0.lock().expect("capture lock").push(CapturedEvent {
            level: *event.metadata().level(),
            fields: fields.0,
        });
    }
}

#[derive(Default)]
struct FieldMap(HashMap<String, String>);

impl Visit for FieldMap {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{value:?}"));
    }
}
