//! Fixed mxGraph style strings.
//!
//! Consumers rely on these exact strings for colour coding, so each style is
//! a closed enum variant mapping to a `&'static str` rather than something
//! assembled at runtime.
//!
//! | Style | Shape | Fill / Stroke |
//! |-------|-------|---------------|
//! | [`VertexStyle::Start`] | ellipse | `#d5e8d4` / `#82b366` |
//! | [`VertexStyle::End`] | ellipse | `#f8cecc` / `#b85450` |
//! | [`VertexStyle::Decision`] | rhombus | `#fff2cc` / `#d6b656` |
//! | [`VertexStyle::Process`] | rounded | `#dae8fc` / `#6c8ebf` |
//! | [`VertexStyle::Screen`] | rounded | `#e1d5e7` / `#9673a6` |
//! | [`VertexStyle::Plain`] | rounded | none |
//! | [`VertexStyle::Container`] | rounded | `#ffe6cc` / `#d79b00` |
//! | [`VertexStyle::Swimlane`] | swimlane | `#f5f5f5` / `#666666` |

use crate::graph::NodeKind;

/// Style of a vertex cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexStyle {
    Start,
    End,
    Decision,
    Process,
    Screen,
    /// Unstyled default used when no node kind applies.
    Plain,
    Container,
    Swimlane,
}

impl VertexStyle {
    /// Returns the mxGraph style string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "ellipse;whiteSpace=wrap;html=1;fillColor=#d5e8d4;strokeColor=#82b366;",
            Self::End => "ellipse;whiteSpace=wrap;html=1;fillColor=#f8cecc;strokeColor=#b85450;",
            Self::Decision => {
                "rhombus;whiteSpace=wrap;html=1;fillColor=#fff2cc;strokeColor=#d6b656;"
            }
            Self::Process => {
                "rounded=1;whiteSpace=wrap;html=1;fillColor=#dae8fc;strokeColor=#6c8ebf;"
            }
            Self::Screen => {
                "rounded=1;whiteSpace=wrap;html=1;fillColor=#e1d5e7;strokeColor=#9673a6;"
            }
            Self::Plain => "rounded=1;whiteSpace=wrap;html=1;",
            Self::Container => {
                "whiteSpace=wrap;html=1;fillColor=#ffe6cc;strokeColor=#d79b00;rounded=1;"
            }
            Self::Swimlane => {
                "swimlane;whiteSpace=wrap;html=1;fillColor=#f5f5f5;strokeColor=#666666;"
            }
        }
    }
}

impl From<NodeKind> for VertexStyle {
    fn from(kind: NodeKind) -> Self {
        match kind {
            NodeKind::Start => Self::Start,
            NodeKind::End => Self::End,
            NodeKind::Decision => Self::Decision,
            NodeKind::Process => Self::Process,
            NodeKind::Screen => Self::Screen,
        }
    }
}

impl From<Option<NodeKind>> for VertexStyle {
    fn from(kind: Option<NodeKind>) -> Self {
        kind.map_or(Self::Plain, Self::from)
    }
}

/// Line style of an edge cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EdgeStyle {
    #[default]
    Solid,
    Dashed,
}

impl EdgeStyle {
    /// Returns the mxGraph style string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Solid => {
                "edgeStyle=orthogonalEdgeStyle;rounded=0;orthogonalLoop=1;jettySize=auto;html=1;"
            }
            Self::Dashed => {
                "edgeStyle=orthogonalEdgeStyle;rounded=0;orthogonalLoop=1;jettySize=auto;html=1;dashed=1;"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_style_from_node_kind() {
        assert_eq!(VertexStyle::from(NodeKind::Start), VertexStyle::Start);
        assert_eq!(VertexStyle::from(NodeKind::Screen), VertexStyle::Screen);
        assert_eq!(VertexStyle::from(None::<NodeKind>), VertexStyle::Plain);
        assert_eq!(
            VertexStyle::from(Some(NodeKind::Decision)),
            VertexStyle::Decision
        );
    }

    #[test]
    fn test_vertex_style_strings() {
        assert_eq!(
            VertexStyle::Process.as_str(),
            "rounded=1;whiteSpace=wrap;html=1;fillColor=#dae8fc;strokeColor=#6c8ebf;"
        );
        assert_eq!(
            VertexStyle::Swimlane.as_str(),
            "swimlane;whiteSpace=wrap;html=1;fillColor=#f5f5f5;strokeColor=#666666;"
        );
    }

    #[test]
    fn test_dashed_edge_appends_modifier() {
        let solid = EdgeStyle::Solid.as_str();
        let dashed = EdgeStyle::Dashed.as_str();
        assert_eq!(dashed, format!("{solid}dashed=1;"));
    }
}
