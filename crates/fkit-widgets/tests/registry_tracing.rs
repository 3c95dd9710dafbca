//! Registry operations emit structured tracing events.
//!
//! Run:
//!   cargo test -p fkit-widgets --features tracing --test registry_tracing

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use fkit_widgets::{WidgetContext, WidgetRegistry};
use tracing_subscriber::layer::SubscriberExt;

struct EventCapture {
    events: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

struct FieldVisitor<'a>(&'a mut HashMap<String, String>);

impl tracing::field::Visit for FieldVisitor<'_> {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{value:?}"));
    }
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for EventCapture {
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut fields = HashMap::new();
        event.record(&mut FieldVisitor(&mut fields));
        self.events.lock().unwrap().push(fields);
    }
}

fn capture<R>(f: impl FnOnce() -> R) -> (R, Vec<HashMap<String, String>>) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let subscriber = tracing_subscriber::registry().with(EventCapture {
        events: Arc::clone(&events),
    });
    let result = tracing::subscriber::with_default(subscriber, f);
    let events = events.lock().unwrap().clone();
    (result, events)
}

#[test]
fn standard_library_logs_each_registration() {
    let (registry, events) = capture(WidgetRegistry::standard);
    let mut registered: Vec<&str> = events
        .iter()
        .filter(|e| e.get("message").is_some_and(|m| m == "widget registered"))
        .filter_map(|e| e.get("implementation").map(String::as_str))
        .collect();
    registered.sort_unstable();
    assert_eq!(
        registered,
        vec![
            "fkit_widgets::check_box::CheckBox",
            "fkit_widgets::multiselect_footer::MultiSelectFooter",
            "fkit_widgets::text_input::TextInput",
        ]
    );
    assert_eq!(registry.len(), 3);
}

#[test]
fn create_logs_widget_and_locale() {
    let registry = WidgetRegistry::standard();
    let (widget, events) =
        capture(|| registry.create("MultiSelectFooter", &WidgetContext::builtin("sv_SE")));
    assert!(widget.is_ok());
    let created = events
        .iter()
        .find(|e| e.get("message").is_some_and(|m| m == "creating widget"))
        .expect("creation event");
    assert_eq!(created["widget"], "MultiSelectFooter");
    assert_eq!(created["locale"], "sv_SE");
}
