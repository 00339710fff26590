//! Structured flow model produced by the parser and consumed by layout.
//!
//! Nodes are identified by name: two nodes with the same name are the same
//! node. Edges and decision branches reference nodes by name only, so a
//! reference to a name that was never declared is representable here and is
//! resolved (or dropped) by the layout stage.
//!
//! # Overview
//!
//! - [`NodeKind`] - The closed set of node classifications
//! - [`GraphNode`] / [`GraphEdge`] / [`Decision`] - Graph elements
//! - [`BusinessFlow`] - Sequential process steps plus decision points
//! - [`UiFlow`] - Typed screens joined by labelled transitions
//! - [`Prototype`] - The screens named in a prototype description

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::language::Language;

/// Visual classification of a graph node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Start,
    End,
    Process,
    Decision,
    Screen,
}

impl NodeKind {
    /// Recognizes a kind token, including its synonyms.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// Returns `None` for tokens outside the synonym table.
    ///
    /// # Examples
    ///
    /// ```
    /// # use drawflow_core::graph::NodeKind;
    /// assert_eq!(NodeKind::from_token("Begin"), Some(NodeKind::Start));
    /// assert_eq!(NodeKind::from_token("terminate"), Some(NodeKind::End));
    /// assert_eq!(NodeKind::from_token("choice"), Some(NodeKind::Decision));
    /// assert_eq!(NodeKind::from_token("widget"), None);
    /// ```
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "start" | "begin" | "开始" => Some(Self::Start),
            "end" | "finish" | "terminate" | "结束" => Some(Self::End),
            "decision" | "branch" | "choice" | "判断" | "决策" | "分支" => Some(Self::Decision),
            "process" | "流程" | "处理" | "步骤" => Some(Self::Process),
            "screen" | "页面" | "界面" => Some(Self::Screen),
            _ => None,
        }
    }

    /// Returns the canonical lowercase name of the kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
            Self::Process => "process",
            Self::Decision => "decision",
            Self::Screen => "screen",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| format!("unknown node kind `{s}`"))
    }
}

/// A named, typed node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    name: String,
    kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    actor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    metadata: Option<String>,
}

impl GraphNode {
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            actor: None,
            metadata: None,
        }
    }

    /// Creates a process step performed by `actor`.
    pub fn process(name: impl Into<String>, actor: impl Into<String>) -> Self {
        Self::new(name, NodeKind::Process).with_actor(actor)
    }

    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    pub fn with_metadata(mut self, metadata: impl Into<String>) -> Self {
        self.metadata = Some(metadata.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn actor(&self) -> Option<&str> {
        self.actor.as_deref()
    }

    pub fn metadata(&self) -> Option<&str> {
        self.metadata.as_deref()
    }
}

/// A directed edge between two node names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    from: String,
    to: String,
    #[serde(default)]
    label: String,
}

impl GraphEdge {
    /// Creates an unlabelled edge.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            label: String::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Name of the node the edge leaves.
    pub fn source(&self) -> &str {
        &self.from
    }

    /// Name of the node the edge enters.
    pub fn target(&self) -> &str {
        &self.to
    }

    /// The edge label; empty when none was given.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// A decision point with up to two named branch targets.
///
/// Branch targets are node names. A target that names no existing node is
/// created on demand by whichever stage consumes the decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    true_branch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    false_branch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    metadata: Option<String>,
}

impl Decision {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            true_branch: None,
            false_branch: None,
            metadata: None,
        }
    }

    pub fn with_true_branch(mut self, target: impl Into<String>) -> Self {
        self.true_branch = Some(target.into());
        self
    }

    pub fn with_false_branch(mut self, target: impl Into<String>) -> Self {
        self.false_branch = Some(target.into());
        self
    }

    pub fn with_metadata(mut self, metadata: impl Into<String>) -> Self {
        self.metadata = Some(metadata.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn true_branch(&self) -> Option<&str> {
        self.true_branch.as_deref()
    }

    pub fn false_branch(&self) -> Option<&str> {
        self.false_branch.as_deref()
    }

    pub fn metadata(&self) -> Option<&str> {
        self.metadata.as_deref()
    }

    /// Returns `true` if at least one branch target is set.
    pub fn has_branches(&self) -> bool {
        self.true_branch.is_some() || self.false_branch.is_some()
    }
}

/// A business process: sequential steps followed by decision points.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessFlow {
    #[serde(default)]
    language: Language,
    #[serde(default)]
    processes: Vec<GraphNode>,
    #[serde(default)]
    decisions: Vec<Decision>,
}

impl BusinessFlow {
    pub fn new(language: Language, processes: Vec<GraphNode>, decisions: Vec<Decision>) -> Self {
        Self {
            language,
            processes,
            decisions,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn processes(&self) -> &[GraphNode] {
        &self.processes
    }

    pub fn decisions(&self) -> &[Decision] {
        &self.decisions
    }

    /// Returns `true` if the flow has neither processes nor decisions.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty() && self.decisions.is_empty()
    }
}

/// A UI navigation flow: typed screens and labelled transitions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiFlow {
    #[serde(default)]
    language: Language,
    #[serde(default)]
    nodes: Vec<GraphNode>,
    #[serde(default)]
    edges: Vec<GraphEdge>,
}

impl UiFlow {
    pub fn new(language: Language, nodes: Vec<GraphNode>, edges: Vec<GraphEdge>) -> Self {
        Self {
            language,
            nodes,
            edges,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    /// Looks up a node by name.
    pub fn node(&self, name: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|node| node.name() == name)
    }
}

/// The screens listed by a prototype description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prototype {
    #[serde(default)]
    language: Language,
    #[serde(default)]
    screens: Vec<GraphNode>,
}

impl Prototype {
    pub fn new(language: Language, screens: Vec<GraphNode>) -> Self {
        Self { language, screens }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn screens(&self) -> &[GraphNode] {
        &self.screens
    }

    pub fn screen_count(&self) -> usize {
        self.screens.len()
    }
}
