//! The Diagram Document Builder.
//!
//! [`DiagramDocument`] accumulates [`VisualCell`]s and renders them into a
//! draw.io `mxfile`. It knows nothing about flows: callers decide where
//! things go, the document only allocates ids, assigns styles and
//! serializes.
//!
//! # Example
//!
//! ```
//! # use drawflow_core::document::DiagramDocument;
//! # use drawflow_core::geometry::{Point, Size};
//! # use drawflow_core::graph::NodeKind;
//! # use drawflow_core::document::style::EdgeStyle;
//! let mut doc = DiagramDocument::new();
//! let start = doc.add_node("Start", Point::new(0, 0).to_bounds(Size::new(120, 60)), NodeKind::Start);
//! let end = doc.add_node("End", Point::new(0, 120).to_bounds(Size::new(120, 60)), NodeKind::End);
//! doc.add_edge(start, end, "", EdgeStyle::Solid);
//!
//! let xml = doc.build();
//! assert!(xml.starts_with("<?xml version=\"1.0\" ?>"));
//! assert!(xml.contains("<mxCell id=\"4\" value=\"\""));
//! ```

pub mod cell;
pub mod style;
pub mod xml;

use std::fmt;

use log::trace;
use serde::Deserialize;

pub use cell::{CellId, VisualCell};
pub use style::{EdgeStyle, VertexStyle};

use crate::geometry::Bounds;
use xml::XmlElement;

/// First id handed out; `0` and `1` are the structural cells.
const FIRST_CELL_ID: u32 = 2;

/// Identification attributes written on the `mxfile` and `diagram` elements.
///
/// None of these are time-based, so a document renders byte-identically on
/// every run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DocumentHeader {
    host: String,
    modified: String,
    agent: String,
    version: String,
    diagram_id: String,
    diagram_name: String,
}

impl Default for DocumentHeader {
    fn default() -> Self {
        Self {
            host: "app.diagrams.net".to_string(),
            modified: "2025-01-01T00:00:00.000Z".to_string(),
            agent: "drawflow".to_string(),
            version: "22.1.0".to_string(),
            diagram_id: "diagram".to_string(),
            diagram_name: "Generated Diagram".to_string(),
        }
    }
}

impl DocumentHeader {
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn modified(&self) -> &str {
        &self.modified
    }

    pub fn agent(&self) -> &str {
        &self.agent
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn diagram_id(&self) -> &str {
        &self.diagram_id
    }

    pub fn diagram_name(&self) -> &str {
        &self.diagram_name
    }

    /// Returns a copy of this header with a different diagram name.
    pub fn with_diagram_name(mut self, name: impl Into<String>) -> Self {
        self.diagram_name = name.into();
        self
    }
}

/// An ordered collection of visual cells backed by a private id counter.
///
/// Each document owns its counter, so independent documents never share or
/// skip ids. Ids are unique and strictly increasing in allocation order.
#[derive(Debug, Clone)]
pub struct DiagramDocument {
    header: DocumentHeader,
    cells: Vec<VisualCell>,
    next_id: u32,
}

impl Default for DiagramDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagramDocument {
    /// Creates an empty document with the default header.
    pub fn new() -> Self {
        Self::with_header(DocumentHeader::default())
    }

    pub fn with_header(header: DocumentHeader) -> Self {
        Self {
            header,
            cells: Vec::new(),
            next_id: FIRST_CELL_ID,
        }
    }

    pub fn header(&self) -> &DocumentHeader {
        &self.header
    }

    /// Adds a vertex and returns its id for later edge wiring.
    ///
    /// `style` accepts a [`VertexStyle`] directly, a
    /// [`NodeKind`](crate::graph::NodeKind), or an `Option<NodeKind>` where
    /// `None` selects the unstyled default. Any label is accepted; escaping
    /// happens at render time.
    pub fn add_node(
        &mut self,
        label: impl Into<String>,
        bounds: Bounds,
        style: impl Into<VertexStyle>,
    ) -> CellId {
        let id = self.allocate_id();
        let label = label.into();
        let style = style.into();
        trace!(id:% = id, label:? = label, style:? = style; "Adding vertex");
        self.cells.push(VisualCell::Vertex {
            id,
            label,
            style,
            bounds,
        });
        id
    }

    /// Adds an edge between two cell ids.
    ///
    /// The ids are taken by value and never checked for existence.
    pub fn add_edge(
        &mut self,
        source: CellId,
        target: CellId,
        label: impl Into<String>,
        style: EdgeStyle,
    ) -> CellId {
        let id = self.allocate_id();
        let label = label.into();
        trace!(id:% = id, source:% = source, target:% = target, label:? = label; "Adding edge");
        self.cells.push(VisualCell::Edge {
            id,
            label,
            style,
            source,
            target,
        });
        id
    }

    /// Adds a grouping rectangle used to represent a single screen.
    pub fn add_container(&mut self, label: impl Into<String>, bounds: Bounds) -> CellId {
        self.add_node(label, bounds, VertexStyle::Container)
    }

    /// Adds a titled swimlane.
    pub fn add_swimlane(&mut self, label: impl Into<String>, bounds: Bounds) -> CellId {
        self.add_node(label, bounds, VertexStyle::Swimlane)
    }

    /// The accumulated cells in allocation order, excluding the two
    /// structural cells.
    pub fn cells(&self) -> &[VisualCell] {
        &self.cells
    }

    pub fn vertex_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_vertex()).count()
    }

    pub fn edge_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_edge()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Consumes the document and renders it.
    pub fn build(self) -> String {
        self.to_string()
    }

    fn allocate_id(&mut self) -> CellId {
        let id = CellId::new(self.next_id);
        self.next_id += 1;
        id
    }

    fn to_element(&self) -> XmlElement {
        let mut root = XmlElement::new("root")
            .child(XmlElement::new("mxCell").attr("id", CellId::ROOT))
            .child(
                XmlElement::new("mxCell")
                    .attr("id", CellId::LAYER)
                    .attr("parent", CellId::ROOT),
            );
        for cell in &self.cells {
            root.push(cell_element(cell));
        }

        let model = XmlElement::new("mxGraphModel")
            .attr("dx", "1200")
            .attr("dy", "800")
            .attr("grid", "1")
            .attr("gridSize", "10")
            .attr("guides", "1")
            .attr("tooltips", "1")
            .attr("connect", "1")
            .attr("arrows", "1")
            .attr("fold", "1")
            .attr("page", "1")
            .attr("pageScale", "1")
            .attr("pageWidth", "1169")
            .attr("pageHeight", "827")
            .attr("math", "0")
            .attr("shadow", "0")
            .child(root);

        XmlElement::new("mxfile")
            .attr("host", &self.header.host)
            .attr("modified", &self.header.modified)
            .attr("agent", &self.header.agent)
            .attr("version", &self.header.version)
            .child(
                XmlElement::new("diagram")
                    .attr("id", &self.header.diagram_id)
                    .attr("name", &self.header.diagram_name)
                    .child(model),
            )
    }
}

fn cell_element(cell: &VisualCell) -> XmlElement {
    match cell {
        VisualCell::Vertex {
            id,
            label,
            style,
            bounds,
        } => XmlElement::new("mxCell")
            .attr("id", id)
            .attr("value", label)
            .attr("style", style.as_str())
            .attr("vertex", "1")
            .attr("parent", CellId::LAYER)
            .child(
                XmlElement::new("mxGeometry")
                    .attr("x", bounds.min_x())
                    .attr("y", bounds.min_y())
                    .attr("width", bounds.size().width())
                    .attr("height", bounds.size().height())
                    .attr("as", "geometry"),
            ),
        VisualCell::Edge {
            id,
            label,
            style,
            source,
            target,
        } => XmlElement::new("mxCell")
            .attr("id", id)
            .attr("value", label)
            .attr("style", style.as_str())
            .attr("edge", "1")
            .attr("parent", CellId::LAYER)
            .attr("source", source)
            .attr("target", target)
            .child(
                XmlElement::new("mxGeometry")
                    .attr("relative", "1")
                    .attr("as", "geometry"),
            ),
    }
}

impl fmt::Display for DiagramDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_element().write_document(f)
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{
        geometry::{Point, Size},
        graph::NodeKind,
    };

    // ===================
    // Strategies
    // ===================

    #[derive(Debug, Clone)]
    enum Op {
        Node(String, i32, i32, Option<NodeKind>),
        Edge(usize, usize, String, bool),
        Container(String),
    }

    fn kind_strategy() -> impl Strategy<Value = Option<NodeKind>> {
        prop_oneof![
            Just(None),
            Just(Some(NodeKind::Start)),
            Just(Some(NodeKind::End)),
            Just(Some(NodeKind::Process)),
            Just(Some(NodeKind::Decision)),
            Just(Some(NodeKind::Screen)),
        ]
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (any::<String>(), -2000i32..2000, -2000i32..2000, kind_strategy())
                .prop_map(|(label, x, y, kind)| Op::Node(label, x, y, kind)),
            (any::<usize>(), any::<usize>(), any::<String>(), any::<bool>())
                .prop_map(|(s, t, label, dashed)| Op::Edge(s, t, label, dashed)),
            any::<String>().prop_map(Op::Container),
        ]
    }

    fn apply(ops: &[Op]) -> DiagramDocument {
        let mut doc = DiagramDocument::new();
        let mut ids = vec![CellId::ROOT];
        for op in ops {
            let id = match op {
                Op::Node(label, x, y, kind) => doc.add_node(
                    label.clone(),
                    Point::new(*x, *y).to_bounds(Size::new(120, 60)),
                    *kind,
                ),
                Op::Edge(s, t, label, dashed) => {
                    let style = if *dashed {
                        EdgeStyle::Dashed
                    } else {
                        EdgeStyle::Solid
                    };
                    doc.add_edge(ids[s % ids.len()], ids[t % ids.len()], label.clone(), style)
                }
                Op::Container(label) => {
                    doc.add_container(label.clone(), Point::new(0, 0).to_bounds(Size::new(200, 150)))
                }
            };
            ids.push(id);
        }
        doc
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Ids are unique, strictly increasing and never reserved.
    fn check_ids_strictly_increasing(ops: &[Op]) -> Result<(), TestCaseError> {
        let doc = apply(ops);
        prop_assert_eq!(doc.cells().len(), ops.len());

        let mut previous: Option<CellId> = None;
        for cell in doc.cells() {
            prop_assert!(!cell.id().is_reserved());
            if let Some(prev) = previous {
                prop_assert!(cell.id() > prev);
            }
            previous = Some(cell.id());
        }
        Ok(())
    }

    /// The rendered document has the two structural cells plus one per added cell.
    fn check_cell_count_in_output(ops: &[Op]) -> Result<(), TestCaseError> {
        let xml = apply(ops).build();
        prop_assert_eq!(xml.matches("<mxCell ").count(), ops.len() + 2);
        prop_assert_eq!(xml.matches("<mxCell id=\"0\"/>").count(), 1);
        prop_assert_eq!(xml.matches("<mxCell id=\"1\" parent=\"0\"/>").count(), 1);
        prop_assert!(xml.ends_with("</mxfile>\n"));
        Ok(())
    }

    fn op_label(op: &Op) -> &str {
        match op {
            Op::Node(label, ..) | Op::Edge(_, _, label, _) | Op::Container(label) => label,
        }
    }

    /// An XML parser accepts the output and reads every label back, minus
    /// the characters XML cannot carry.
    fn check_parses_with_labels_intact(ops: &[Op]) -> Result<(), TestCaseError> {
        let xml = apply(ops).build();
        let doc = roxmltree::Document::parse(&xml)
            .map_err(|err| TestCaseError::fail(format!("invalid XML: {err}")))?;

        let cells: Vec<_> = doc
            .descendants()
            .filter(|n| n.has_tag_name("mxCell"))
            .skip(2)
            .collect();
        prop_assert_eq!(cells.len(), ops.len());

        for (cell, op) in cells.iter().zip(ops) {
            let expected: String = op_label(op).chars().filter(|c| xml::is_xml_char(*c)).collect();
            prop_assert_eq!(cell.attribute("value"), Some(expected.as_str()));
        }
        Ok(())
    }

    /// Two fresh documents fed the same operations render byte-identically.
    fn check_deterministic(ops: &[Op]) -> Result<(), TestCaseError> {
        prop_assert_eq!(apply(ops).build(), apply(ops).build());
        Ok(())
    }

    /// Escaped labels never leak raw markup into attribute values.
    fn check_label_never_breaks_markup(label: &str) -> Result<(), TestCaseError> {
        let escaped = xml::escape_attribute(label);
        prop_assert!(!escaped.contains('<'));
        prop_assert!(!escaped.contains('"'));
        prop_assert!(!escaped.contains('\n'));
        Ok(())
    }

    proptest! {
        #[test]
        fn ids_strictly_increasing(ops in prop::collection::vec(op_strategy(), 0..40)) {
            check_ids_strictly_increasing(&ops)?;
        }

        #[test]
        fn cell_count_in_output(ops in prop::collection::vec(op_strategy(), 0..40)) {
            check_cell_count_in_output(&ops)?;
        }

        #[test]
        fn parses_with_labels_intact(ops in prop::collection::vec(op_strategy(), 0..20)) {
            check_parses_with_labels_intact(&ops)?;
        }

        #[test]
        fn deterministic(ops in prop::collection::vec(op_strategy(), 0..20)) {
            check_deterministic(&ops)?;
        }

        #[test]
        fn label_never_breaks_markup(label in any::<String>()) {
            check_label_never_breaks_markup(&label)?;
        }
    }
}
