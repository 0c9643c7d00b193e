//! Colorful console output for editor events.
//!
//! Provides a custom `tracing` layer that formats news screen and metadata
//! events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Screen state changes, metadata loading
//! - **DEBUG**: Fetch notifications, thumbnail requests, individual values
//! - **WARN**: Thumbnail and preference failures

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};


static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_DIRECTIVES: &str = "rhre_news=info,rhre_config=info";

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the banner and sets up tracing.
pub fn init() {
    INIT.get_or_init(|| {
        EPOCH.get_or_init(Instant::now);
        print_banner();

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(RhreConsoleLayer)
            .try_init();
    });
}

// Returns seconds since `init`.
fn elapsed_secs() -> f64 {
    EPOCH
        .get()
        .map_or(0.0, |epoch| epoch.elapsed().as_secs_f64())
}

fn print_banner() {
    let mut stdout = io::stdout().lock();
    let _ = writeln!(
        stdout,
        "{} {}",
        "RHRE".bright_cyan().bold(),
        format!("v{}", VERSION).bright_white()
    );
    let _ = stdout.flush();
}

/// A tracing layer that formats editor events with colors.
pub struct RhreConsoleLayer;

impl<S: Subscriber> Layer<S> for RhreConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("rhre_") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    from: Option<String>,
    to: Option<String>,
    state: Option<String>,
    url: Option<String>,
    error: Option<String>,
    name: Option<String>,
    range: Option<String>,
    previous: Option<String>,
    values: Option<u64>,
    needs_entity: Option<bool>,
}

impl EventVisitor {
    fn set(&mut self, name: &str, value: String) {
        match name {
            "event" => self.event = Some(value),
            "from" => self.from = Some(value),
            "to" => self.to = Some(value),
            "state" => self.state = Some(value),
            "url" => self.url = Some(value),
            "error" => self.error = Some(value),
            "name" => self.name = Some(value),
            "range" => self.range = Some(value),
            "previous" => self.previous = Some(value),
            _ => {}
        }
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.set(field.name(), s.trim_matches('"').to_string());
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.set(field.name(), value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        if field.name() == "values" {
            self.values = Some(value);
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "needs_entity" {
            self.needs_entity = Some(value);
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "state_changed" => format_state_changed(v),
        "fetch_state" => format_fetch_state(v),
        "thumbnail_requested" => format_thumbnail_requested(v, level),
        "thumbnail_failed" => format_failure("Thumbnail", v.url.as_deref(), v),
        "preferences_flush_failed" => format_failure("Preferences", None, v),
        "metadata_value" => format_metadata_value(v, level),
        "metadata_rule_replaced" => format_rule_replaced(v),
        "metadata_loaded" => format_metadata_loaded(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_state_changed(v: &EventVisitor) -> String {
    let from = v.from.as_deref().unwrap_or("?");
    let to = v.to.as_deref().unwrap_or("?");

    format!(
        "{} {} News {} → {}",
        format_elapsed(),
        "▶".bright_blue(),
        from.bright_black(),
        format_screen_state(to)
    )
}

fn format_screen_state(state: &str) -> String {
    match state {
        "articles" | "in_article" => state.bright_green().bold().to_string(),
        "fetching" => state.bright_yellow().to_string(),
        "error" => state.bright_red().bold().to_string(),
        _ => state.white().to_string(),
    }
}

fn format_fetch_state(v: &EventVisitor) -> String {
    let state = v.state.as_deref().unwrap_or("?");

    format!(
        "{} {} Fetch {}",
        format_elapsed(),
        "⟳".bright_cyan(),
        state.white()
    )
}

fn format_thumbnail_requested(v: &EventVisitor, level: Level) -> String {
    if level != Level::DEBUG && level != Level::TRACE {
        return String::new();
    }
    let url = v.url.as_deref().unwrap_or("?");

    format!(
        "{} {} Thumbnail {}",
        format_elapsed(),
        "…".bright_black(),
        url.bright_black()
    )
}

fn format_failure(what: &str, subject: Option<&str>, v: &EventVisitor) -> String {
    let error = v.error.as_deref().unwrap_or("unknown error");

    let mut output = format!(
        "{} {} {}",
        format_elapsed(),
        "✗".bright_red().bold(),
        what.white().bold()
    );
    if let Some(subject) = subject {
        output.push_str(&format!(" {}", subject));
    }
    output.push_str(&format!(" │ {}", error.bright_red()));
    output
}

fn format_metadata_value(v: &EventVisitor, level: Level) -> String {
    if level != Level::DEBUG && level != Level::TRACE {
        return String::new();
    }
    let name = v.name.as_deref().unwrap_or("?");
    let kind = if v.needs_entity.unwrap_or(false) {
        "range".bright_magenta().to_string()
    } else {
        "static".white().to_string()
    };

    format!(
        "{} {} {} ({})",
        format_elapsed(),
        "·".bright_black(),
        name.white(),
        kind
    )
}

fn format_rule_replaced(v: &EventVisitor) -> String {
    format!(
        "{} {} {} rule {} replaced '{}'",
        format_elapsed(),
        "↺".yellow(),
        v.name.as_deref().unwrap_or("?").white(),
        v.range.as_deref().unwrap_or("?").bright_yellow(),
        v.previous.as_deref().unwrap_or("")
    )
}

fn format_metadata_loaded(v: &EventVisitor) -> String {
    let values = v.values.unwrap_or(0);

    format!(
        "{} {} Metadata │ {} values",
        format_elapsed(),
        "■".bright_cyan().bold(),
        values.to_formatted_string(&Locale::en).bright_yellow()
    )
}
