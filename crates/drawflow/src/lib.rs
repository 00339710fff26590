//! Drawflow - Turn language-model flow descriptions into draw.io diagrams.
//!
//! Model output describing a business process, a UI navigation flow or a
//! set of prototype screens is parsed into a flow graph, laid out on a
//! canvas and serialized as an `mxfile` document that draw.io imports
//! directly. Every stage is deterministic: the same text and configuration
//! always produce byte-identical XML.

pub mod config;
pub mod export;

mod error;
mod generate;
mod layout;

pub use drawflow_core::{document, geometry, graph, language};
pub use drawflow_parser::{
    ConversationTurn, MAX_HISTORY_TURNS, ParseConfig, Parsed, Role, Span,
    error as diagnostics,
};

pub use error::DrawflowError;
pub use generate::{DiagramKind, Payload, Rendered, TextGenerator};

use log::{debug, info, trace};

use drawflow_core::{
    document::DiagramDocument,
    graph::{BusinessFlow, Prototype, UiFlow},
};

use config::AppConfig;

/// Builder for parsing and rendering Drawflow diagrams.
///
/// # Examples
///
/// ```
/// use drawflow::{DrawflowBuilder, config::AppConfig};
///
/// let text = "PROCESS: Validate [actor=System]\nDECISION: Approve -> Yes:Ship, No:Reject";
///
/// let builder = DrawflowBuilder::new(AppConfig::default());
/// let parsed = builder.parse_business_flow(text);
/// let xml = builder.render_business_flow(parsed.value());
///
/// assert!(xml.starts_with("<?xml"));
/// assert!(xml.contains("value=\"Approve\""));
/// ```
#[derive(Debug, Default)]
pub struct DrawflowBuilder {
    config: AppConfig,
}

impl DrawflowBuilder {
    /// Create a new builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Parser, layout and document settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse model output describing a business process.
    ///
    /// Never fails. Text without any `PROCESS:` or `DECISION:` marker yields
    /// the fallback skeleton together with a warning.
    ///
    /// # Arguments
    ///
    /// * `text` - Raw model output
    pub fn parse_business_flow(&self, text: &str) -> Parsed<BusinessFlow> {
        info!(bytes = text.len(); "Parsing business flow");
        let parsed = drawflow_parser::parse_business_flow(text, &self.parse_config());
        trace!(flow:? = parsed.value(); "Parsed business flow");
        parsed
    }

    /// Parse model output describing a UI navigation flow.
    ///
    /// # Arguments
    ///
    /// * `text` - Raw model output
    pub fn parse_ui_flow(&self, text: &str) -> Parsed<UiFlow> {
        info!(bytes = text.len(); "Parsing UI flow");
        let parsed = drawflow_parser::parse_ui_flow(text, &self.parse_config());
        trace!(flow:? = parsed.value(); "Parsed UI flow");
        parsed
    }

    /// Parse model output listing prototype screens.
    ///
    /// # Arguments
    ///
    /// * `text` - Raw model output
    pub fn parse_prototype(&self, text: &str) -> Parsed<Prototype> {
        info!(bytes = text.len(); "Parsing prototype");
        let parsed = drawflow_parser::parse_prototype(text, &self.parse_config());
        trace!(prototype:? = parsed.value(); "Parsed prototype");
        parsed
    }

    /// Render a business flow as a vertical flowchart.
    ///
    /// # Examples
    ///
    /// ```
    /// use drawflow::{DrawflowBuilder, graph::{BusinessFlow, GraphNode}, language::Language};
    ///
    /// let flow = BusinessFlow::new(
    ///     Language::English,
    ///     vec![GraphNode::process("Review", "Editor")],
    ///     vec![],
    /// );
    /// let xml = DrawflowBuilder::default().render_business_flow(&flow);
    /// assert_eq!(xml.matches("vertex=\"1\"").count(), 3);
    /// ```
    pub fn render_business_flow(&self, flow: &BusinessFlow) -> String {
        let mut document = self.document();
        layout::business::layout(flow, self.config.layout().business(), &mut document);
        Self::finish(document, DiagramKind::BusinessFlow)
    }

    /// Render a UI flow as a grid of screens joined by transitions.
    pub fn render_ui_flow(&self, flow: &UiFlow) -> String {
        let mut document = self.document();
        layout::ui::layout(flow, self.config.layout().ui(), &mut document);
        Self::finish(document, DiagramKind::UiFlow)
    }

    /// Render a prototype as screen containers inside one swimlane.
    pub fn render_prototype(&self, prototype: &Prototype) -> String {
        let mut document = self.document();
        layout::prototype::layout(prototype, self.config.layout().prototype(), &mut document);
        Self::finish(document, DiagramKind::Prototype)
    }

    /// Parse `text` as `kind` and render the result.
    ///
    /// # Arguments
    ///
    /// * `kind` - Which grammar to parse and which layout to apply
    /// * `text` - Raw model output
    pub fn render_text(&self, kind: DiagramKind, text: &str) -> Rendered {
        let (xml, diagnostics) = match kind {
            DiagramKind::BusinessFlow => {
                let (flow, diagnostics) = self.parse_business_flow(text).into_parts();
                (self.render_business_flow(&flow), diagnostics)
            }
            DiagramKind::UiFlow => {
                let (flow, diagnostics) = self.parse_ui_flow(text).into_parts();
                (self.render_ui_flow(&flow), diagnostics)
            }
            DiagramKind::Prototype => {
                let (prototype, diagnostics) = self.parse_prototype(text).into_parts();
                (self.render_prototype(&prototype), diagnostics)
            }
        };
        Rendered::new(xml, text.to_string(), diagnostics)
    }

    /// Format prior conversation turns for a generation prompt.
    ///
    /// The language follows the parser configuration, detected from
    /// `requirements` when set to `auto`.
    pub fn format_history(&self, requirements: &str, turns: &[ConversationTurn]) -> String {
        let language = self.config.parser().language().resolve(requirements);
        drawflow_parser::format_history(turns, language)
    }

    /// Ask `generator` for model output and render it.
    ///
    /// # Arguments
    ///
    /// * `generator` - Source of raw model text
    /// * `kind` - The diagram kind requested
    /// * `requirements` - The user's description of what to draw
    /// * `history` - Prior conversation turns, oldest first
    ///
    /// # Errors
    ///
    /// Returns [`DrawflowError::Generate`] if the generator fails. Nothing
    /// after generation can fail.
    ///
    /// # Examples
    ///
    /// ```
    /// use drawflow::{DiagramKind, DrawflowBuilder, Payload};
    ///
    /// let generator = |_: DiagramKind, _: &Payload| -> Result<String, String> {
    ///     Ok("SCREEN: Login\nSCREEN: Home".to_string())
    /// };
    /// let rendered = DrawflowBuilder::default()
    ///     .generate(&generator, DiagramKind::Prototype, "A login page", &[])
    ///     .unwrap();
    /// assert!(rendered.xml().contains("value=\"Login\""));
    /// ```
    pub fn generate<G: TextGenerator>(
        &self,
        generator: &G,
        kind: DiagramKind,
        requirements: &str,
        history: &[ConversationTurn],
    ) -> Result<Rendered, DrawflowError> {
        let payload = Payload::new(requirements, self.format_history(requirements, history));
        info!(kind:% = kind, turns = history.len(); "Requesting model output");

        let text = generator
            .generate(kind, &payload)
            .map_err(DrawflowError::generate)?;
        debug!(bytes = text.len(); "Model output received");

        Ok(self.render_text(kind, &text))
    }

    fn parse_config(&self) -> ParseConfig {
        ParseConfig::from(self.config.parser())
    }

    fn document(&self) -> DiagramDocument {
        DiagramDocument::with_header(self.config.document().clone())
    }

    fn finish(document: DiagramDocument, kind: DiagramKind) -> String {
        info!(
            kind:% = kind,
            vertices = document.vertex_count(),
            edges = document.edge_count();
            "Diagram rendered"
        );
        document.build()
    }
}

/// Render a business flow with the default configuration.
pub fn render_business_flow(flow: &BusinessFlow) -> String {
    DrawflowBuilder::default().render_business_flow(flow)
}

/// Render a UI flow with the default configuration.
pub fn render_ui_flow(flow: &UiFlow) -> String {
    DrawflowBuilder::default().render_ui_flow(flow)
}

/// Render a prototype with the default configuration.
pub fn render_prototype(prototype: &Prototype) -> String {
    DrawflowBuilder::default().render_prototype(prototype)
}
