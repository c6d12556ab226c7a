use colored::*;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

/// Renders every event as a status symbol plus its message.
///
/// Events emitted through `snvet_common::success!` carry an
/// `outcome = "success"` field and get a check mark regardless of level.
pub struct SnvetFormatter;

#[derive(Default)]
struct EventFields {
    message: String,
    success: bool,
}

impl Visit for EventFields {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "message" => self.message = value.to_string(),
            "outcome" => self.success = value == "success",
            _ => {}
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        match field.name() {
            "message" => self.message = format!("{value:?}"),
            "outcome" => self.success = format!("{value:?}") == "\"success\"",
            _ => {}
        }
    }
}

impl<S, N> FormatEvent<S, N> for SnvetFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let mut fields = EventFields::default();
        event.record(&mut fields);

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) = if fields.success {
            ("[✓]", |s| s.green().bold())
        } else {
            match *event.metadata().level() {
                Level::TRACE => ("[ ]", |s| s.dimmed()),
                Level::DEBUG => ("[?]", |s| s.blue()),
                Level::INFO => ("[+]", |s| s.green().bold()),
                Level::WARN => ("[*]", |s| s.yellow().bold()),
                Level::ERROR => ("[-]", |s| s.red().bold()),
            }
        };

        write!(writer, "{} ", color_func(symbol.into()))?;
        writeln!(writer, "{}", fields.message)
    }
}

/// Installs the global subscriber. `RUST_LOG` overrides the default
/// level; otherwise `-qq` and beyond mutes everything below warnings.
pub fn init(quiet: u8) {
    let default_directive: &str = if quiet >= 2 { "warn" } else { "info" };
    let filter: EnvFilter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(SnvetFormatter)
        .init();
}
