// Console logging - forwards tracing events to the browser devtools console.
//
// A small tracing layer stands in for a fmt subscriber, which has nowhere to
// write in a wasm page. Each event becomes one console line at the matching
// console level.

use std::fmt::{self, Write};

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Metadata, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// Where formatted lines end up.
pub type Sink = fn(Level, &str);

/// Tracing layer writing each event as a single console line.
pub struct ConsoleLayer {
    max_level: Level,
    sink: Sink,
}

impl ConsoleLayer {
    pub fn new(max_level: Level) -> Self {
        Self::with_sink(max_level, write_console)
    }

    pub fn with_sink(max_level: Level, sink: Sink) -> Self {
        Self { max_level, sink }
    }
}

impl<S: Subscriber> Layer<S> for ConsoleLayer {
    fn enabled(&self, metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        *metadata.level() <= self.max_level
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut fields = FieldWriter::default();
        event.record(&mut fields);
        let line = format!("[{} {}] {}{}", metadata.level(), metadata.target(), fields.message, fields.rest);
        (self.sink)(*metadata.level(), &line);
    }
}

#[derive(Default)]
struct FieldWriter {
    message: String,
    rest: String,
}

impl Visit for FieldWriter {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.rest, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.rest, " {}={:?}", field.name(), value);
        }
    }
}

fn write_console(level: Level, line: &str) {
    let line = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::ERROR => web_sys::console::error_1(&line),
        Level::WARN => web_sys::console::warn_1(&line),
        Level::INFO => web_sys::console::info_1(&line),
        _ => web_sys::console::debug_1(&line),
    }
}

/// Install the console layer as the global subscriber. Safe to call more than
/// once; later calls are ignored.
pub fn init() {
    let max_level = if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO };
    let _ = tracing_subscriber::registry()
        .with(ConsoleLayer::new(max_level))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    thread_local! {
        static LINES: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
    }

    fn capture(level: Level, line: &str) {
        LINES.with(|lines| lines.borrow_mut().push((level, line.to_string())));
    }

    fn captured<F: FnOnce()>(max_level: Level, f: F) -> Vec<(Level, String)> {
        LINES.with(|lines| lines.borrow_mut().clear());
        let subscriber =
            tracing_subscriber::registry().with(ConsoleLayer::with_sink(max_level, capture));
        tracing::subscriber::with_default(subscriber, f);
        LINES.with(|lines| lines.borrow().clone())
    }

    #[test]
    fn formats_level_target_message_and_fields() {
        let lines = captured(Level::DEBUG, || {
            tracing::warn!(target: "story", step = "set label", "skipping story modal step");
        });
        assert_eq!(
            lines,
            vec![(Level::WARN, "[WARN story] skipping story modal step step=set label".to_string())]
        );
    }

    #[test]
    fn debug_fields_use_debug_formatting() {
        let lines = captured(Level::DEBUG, || {
            tracing::debug!(target: "story", selectors = ?vec![".close"], "no close control");
        });
        assert_eq!(lines[0].1, "[DEBUG story] no close control selectors=[\".close\"]");
    }

    #[test]
    fn filters_above_max_level() {
        let lines = captured(Level::INFO, || {
            tracing::debug!("hidden");
            tracing::info!("shown");
            tracing::error!("also shown");
        });
        let levels: Vec<Level> = lines.iter().map(|(level, _)| *level).collect();
        assert_eq!(levels, vec![Level::INFO, Level::ERROR]);
    }
}
