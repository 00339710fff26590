//! Drawflow CLI library
//!
//! This module contains the core CLI logic for the Drawflow diagram tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fs, io, path::Path, str::FromStr};

use log::{LevelFilter, info, warn};
use serde::de::DeserializeOwned;

use drawflow::{
    DiagramKind, DrawflowBuilder, DrawflowError,
    diagnostics::Diagnostic,
    export,
    graph::{BusinessFlow, Prototype, UiFlow},
};

use error_adapter::{diagnostic_reportables, render};

/// Run the Drawflow CLI application
///
/// Reads model output (or a TOML graph with `--graph`) from the input file,
/// renders it as the requested diagram kind and writes a `.drawio` file.
/// Parser warnings are logged but do not fail the run.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `DrawflowError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Graph files that are not valid TOML graphs
pub fn run(args: &Args) -> Result<(), DrawflowError> {
    info!(
        input_path = args.input,
        kind:% = args.kind,
        graph = args.graph;
        "Processing input"
    );

    let mut app_config = config::load_config(args.config.as_ref())?;
    if let Some(title) = &args.title {
        let header = app_config
            .document()
            .clone()
            .with_diagram_name(title.as_str());
        app_config = app_config.with_document(header);
    }

    let source = fs::read_to_string(&args.input)?;
    let builder = DrawflowBuilder::new(app_config);

    let xml = if args.graph {
        render_graph(&builder, args.kind, &source)?
    } else {
        let rendered = builder.render_text(args.kind, &source);
        report_warnings(rendered.diagnostics(), &source);
        rendered.into_xml()
    };

    let output = output_path(args);
    export::write_drawio(&output, &xml)?;

    info!(output_file = output; "Diagram exported successfully");

    Ok(())
}

/// Parses the `--log-level` value, falling back to `warn` for unknown names.
pub fn log_level(name: &str) -> LevelFilter {
    LevelFilter::from_str(name).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {name}. Using 'warn' instead.");
        LevelFilter::Warn
    })
}

fn render_graph(
    builder: &DrawflowBuilder,
    kind: DiagramKind,
    source: &str,
) -> Result<String, DrawflowError> {
    let xml = match kind {
        DiagramKind::BusinessFlow => {
            builder.render_business_flow(&parse_graph::<BusinessFlow>(source)?)
        }
        DiagramKind::UiFlow => builder.render_ui_flow(&parse_graph::<UiFlow>(source)?),
        DiagramKind::Prototype => builder.render_prototype(&parse_graph::<Prototype>(source)?),
    };
    Ok(xml)
}

fn parse_graph<T: DeserializeOwned>(source: &str) -> Result<T, DrawflowError> {
    toml::from_str(source).map_err(|err| {
        DrawflowError::Io(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Invalid graph file: {err}"),
        ))
    })
}

fn report_warnings(diagnostics: &[Diagnostic], source: &str) {
    let reportables = diagnostic_reportables(diagnostics, source);
    for (diag, reportable) in diagnostics.iter().zip(&reportables) {
        let kind = diag.code().map_or("parser warning", |code| code.description());
        warn!(kind = kind; "{}", render(reportable));
    }
}

/// The explicit `--output`, else a name derived from the title or the
/// input file's stem.
fn output_path(args: &Args) -> String {
    if let Some(output) = &args.output {
        return output.clone();
    }

    let title = match &args.title {
        Some(title) => title.clone(),
        None => Path::new(&args.input)
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default(),
    };
    export::drawio_file_name(&title)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(input: &str, output: Option<&str>, title: Option<&str>) -> Args {
        Args {
            input: input.to_string(),
            output: output.map(str::to_string),
            kind: DiagramKind::BusinessFlow,
            config: None,
            log_level: "off".to_string(),
            title: title.map(str::to_string),
            graph: false,
        }
    }

    #[test]
    fn test_output_path_explicit() {
        assert_eq!(
            output_path(&args("in.txt", Some("x.drawio"), Some("T"))),
            "x.drawio"
        );
    }

    #[test]
    fn test_output_path_from_title() {
        assert_eq!(
            output_path(&args("in.txt", None, Some("Order Flow"))),
            "Order_Flow.drawio"
        );
    }

    #[test]
    fn test_output_path_from_input_stem() {
        assert_eq!(
            output_path(&args("notes/checkout.txt", None, None)),
            "checkout.drawio"
        );
    }

    #[test]
    fn test_invalid_graph_is_error() {
        let builder = DrawflowBuilder::default();
        let result = render_graph(&builder, DiagramKind::UiFlow, "nodes = 3");
        assert!(matches!(result, Err(DrawflowError::Io(_))));
    }

    #[test]
    fn test_log_level_names() {
        assert_eq!(log_level("debug"), LevelFilter::Debug);
        assert_eq!(log_level("OFF"), LevelFilter::Off);
        assert_eq!(log_level("loud"), LevelFilter::Warn);
    }
}
