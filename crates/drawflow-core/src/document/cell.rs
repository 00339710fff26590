//! Visual cells: the serialized unit of a draw.io document.

use std::fmt;

use crate::{
    document::style::{EdgeStyle, VertexStyle},
    geometry::Bounds,
};

/// Identifier of a cell within one document.
///
/// Ids `0` (canvas root) and `1` (default layer) are reserved and never
/// handed out by [`DiagramDocument`](crate::document::DiagramDocument).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellId(u32);

impl CellId {
    /// The canvas root cell.
    pub const ROOT: CellId = CellId(0);
    /// The default layer that parents every generated cell.
    pub const LAYER: CellId = CellId(1);

    pub(crate) fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the numeric value of the id.
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns `true` for the two structural ids.
    pub fn is_reserved(self) -> bool {
        self == Self::ROOT || self == Self::LAYER
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A vertex or edge accumulated by the document builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VisualCell {
    Vertex {
        id: CellId,
        label: String,
        style: VertexStyle,
        bounds: Bounds,
    },
    Edge {
        id: CellId,
        label: String,
        style: EdgeStyle,
        source: CellId,
        target: CellId,
    },
}

impl VisualCell {
    pub fn id(&self) -> CellId {
        match self {
            Self::Vertex { id, .. } | Self::Edge { id, .. } => *id,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Vertex { label, .. } | Self::Edge { label, .. } => label,
        }
    }

    /// Returns the mxGraph style string of the cell.
    pub fn style(&self) -> &'static str {
        match self {
            Self::Vertex { style, .. } => style.as_str(),
            Self::Edge { style, .. } => style.as_str(),
        }
    }

    pub fn is_vertex(&self) -> bool {
        matches!(self, Self::Vertex { .. })
    }

    pub fn is_edge(&self) -> bool {
        matches!(self, Self::Edge { .. })
    }

    /// Returns the geometry of a vertex, or `None` for edges.
    pub fn bounds(&self) -> Option<Bounds> {
        match self {
            Self::Vertex { bounds, .. } => Some(*bounds),
            Self::Edge { .. } => None,
        }
    }

    /// Returns `(source, target)` for edges, or `None` for vertices.
    pub fn endpoints(&self) -> Option<(CellId, CellId)> {
        match self {
            Self::Vertex { .. } => None,
            Self::Edge { source, target, .. } => Some((*source, *target)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Point, Size};

    #[test]
    fn test_reserved_ids() {
        assert!(CellId::ROOT.is_reserved());
        assert!(CellId::LAYER.is_reserved());
        assert!(!CellId::new(2).is_reserved());
        assert_eq!(CellId::new(42).to_string(), "42");
    }

    #[test]
    fn test_vertex_accessors() {
        let bounds = Point::new(1, 2).to_bounds(Size::new(3, 4));
        let cell = VisualCell::Vertex {
            id: CellId::new(2),
            label: "Login".to_string(),
            style: VertexStyle::Screen,
            bounds,
        };

        assert!(cell.is_vertex());
        assert_eq!(cell.label(), "Login");
        assert_eq!(cell.bounds(), Some(bounds));
        assert_eq!(cell.endpoints(), None);
        assert_eq!(cell.style(), VertexStyle::Screen.as_str());
    }

    #[test]
    fn test_edge_accessors() {
        let cell = VisualCell::Edge {
            id: CellId::new(4),
            label: String::new(),
            style: EdgeStyle::Dashed,
            source: CellId::new(2),
            target: CellId::new(3),
        };

        assert!(cell.is_edge());
        assert_eq!(cell.bounds(), None);
        assert_eq!(cell.endpoints(), Some((CellId::new(2), CellId::new(3))));
    }
}
