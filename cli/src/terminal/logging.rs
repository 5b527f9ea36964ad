use std::fmt;

use colored::*;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

/// Events on this target carry lesson output and are written without decoration.
pub const PRINT_TARGET: &str = "tutor::print";

pub fn init(verbose: u8) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => with_print_target(filter)?,
        Err(_) => default_filter(verbose)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(TutorFormatter)
        .with_writer(std::io::stdout)
        .init();

    Ok(())
}

/// Filter used when `RUST_LOG` is unset: `-v` steps from warn down to trace.
pub fn default_filter(verbose: u8) -> anyhow::Result<EnvFilter> {
    let directive = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    with_print_target(EnvFilter::new(directive))
}

/// Lesson output stays visible whatever the diagnostic level.
fn with_print_target(filter: EnvFilter) -> anyhow::Result<EnvFilter> {
    Ok(filter.add_directive(format!("{PRINT_TARGET}=info").parse()?))
}

pub struct TutorFormatter;

impl<S, N> FormatEvent<S, N> for TutorFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let meta = event.metadata();

        if meta.target() == PRINT_TARGET {
            let mut raw = RawMessage::default();
            event.record(&mut raw);
            if let Some(msg) = raw.0 {
                return writeln!(writer, "{msg}");
            }
        }

        writeln!(writer, "{}", decorate(*meta.level(), &render_fields(ctx, event)?))
    }
}

fn render_fields<S, N>(
    ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
    event: &Event<'_>,
) -> Result<String, fmt::Error>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    let mut fields = String::new();
    ctx.field_format().format_fields(Writer::new(&mut fields), event)?;
    Ok(fields)
}

fn symbol(level: Level) -> ColoredString {
    match level {
        Level::TRACE => "[ ]".dimmed(),
        Level::DEBUG => "[?]".blue(),
        Level::INFO => "[+]".green().bold(),
        Level::WARN => "[*]".yellow().bold(),
        _ => "[-]".red().bold(),
    }
}

fn decorate(level: Level, fields: &str) -> String {
    format!("{} {}", symbol(level), fields)
}

#[derive(Default)]
struct RawMessage(Option<String>);

impl Visit for RawMessage {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "raw_msg" {
            self.0 = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, _field: &Field, _value: &dyn fmt::Debug) {}
}
