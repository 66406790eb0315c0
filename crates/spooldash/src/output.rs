//! Rendering for the `--output` formats.
//!
//! Every command funnels its report data through [`render_list`] or
//! [`render_single`]. Table mode goes through a `tabled` row type built
//! per command; `json`, `json-compact`, and `yaml` serialize the report
//! structs themselves; `plain` emits one identifier per line so the
//! output pipes cleanly into shell tooling.

use std::io::{self, IsTerminal, Write};

use tabled::{Table, Tabled, settings::Style};

use crate::cli::{ColorMode, OutputFormat};

/// Whether stderr decorations (warning prefixes) may use color.
///
/// `auto` requires an interactive terminal and no `NO_COLOR` in the
/// environment.
pub fn should_color(mode: &ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stderr().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

/// Render a slice of report items in the selected format.
///
/// `to_row` maps an item to its table row; `id_fn` yields the plain-mode
/// value. The structured formats serialize the items directly, so the
/// row type never shapes JSON or YAML output.
pub fn render_list<T, R>(
    format: &OutputFormat,
    data: &[T],
    to_row: impl Fn(&T) -> R,
    id_fn: impl Fn(&T) -> String,
) -> String
where
    T: serde::Serialize,
    R: Tabled,
{
    match format {
        OutputFormat::Table => {
            let rows: Vec<R> = data.iter().map(to_row).collect();
            Table::new(&rows).with(Style::rounded()).to_string()
        }
        OutputFormat::Json => to_json(data, false),
        OutputFormat::JsonCompact => to_json(data, true),
        OutputFormat::Yaml => to_yaml(data),
        OutputFormat::Plain => data.iter().map(&id_fn).collect::<Vec<_>>().join("\n"),
    }
}

/// Render one report item in the selected format.
///
/// Detail views are pre-formatted text rather than a one-row table, so
/// table mode delegates to `detail_fn`.
pub fn render_single<T>(
    format: &OutputFormat,
    data: &T,
    detail_fn: impl Fn(&T) -> String,
    id_fn: impl Fn(&T) -> String,
) -> String
where
    T: serde::Serialize,
{
    match format {
        OutputFormat::Table => detail_fn(data),
        OutputFormat::Json => to_json(data, false),
        OutputFormat::JsonCompact => to_json(data, true),
        OutputFormat::Yaml => to_yaml(data),
        OutputFormat::Plain => id_fn(data),
    }
}

/// Write rendered output to stdout unless `--quiet` suppressed it.
pub fn print_output(output: &str, quiet: bool) {
    if quiet || output.is_empty() {
        return;
    }
    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{output}");
}

// Report structs are plain data with derived Serialize, so these cannot
// fail in practice.

fn to_json<T: serde::Serialize + ?Sized>(data: &T, compact: bool) -> String {
    let rendered = if compact {
        serde_json::to_string(data)
    } else {
        serde_json::to_string_pretty(data)
    };
    rendered.expect("report serialization should not fail")
}

fn to_yaml<T: serde::Serialize + ?Sized>(data: &T) -> String {
    serde_yaml::to_string(data).expect("report serialization should not fail")
}
