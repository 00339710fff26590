//! Configuration types for Drawflow rendering.
//!
//! This module provides configuration structures that control how model
//! output is parsed and how the resulting graphs are laid out. All types
//! implement [`serde::Deserialize`] so they can be loaded from external
//! sources; every field is optional and falls back to its default.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining every section.
//! - [`ParserConfig`] - Language selection for parsing.
//! - [`LayoutConfig`] - Placement constants for each diagram kind.
//! - [`DocumentHeader`] - Fixed `mxfile` header attributes.
//!
//! # Example
//!
//! ```
//! # use drawflow::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.layout().business().step(), 120);
//! assert_eq!(config.layout().ui().columns(), 4);
//! ```

use serde::Deserialize;

use drawflow_core::{
    document::DocumentHeader,
    geometry::{Point, Size},
    language::LanguagePreference,
};
use drawflow_parser::ParseConfig;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Parser configuration section.
    #[serde(default)]
    parser: ParserConfig,

    /// Layout configuration section.
    #[serde(default)]
    layout: LayoutConfig,

    /// Document header section.
    #[serde(default)]
    document: DocumentHeader,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    ///
    /// # Arguments
    ///
    /// * `parser` - Language selection for parsing.
    /// * `layout` - Placement constants.
    /// * `document` - Header attributes written to every document.
    pub fn new(parser: ParserConfig, layout: LayoutConfig, document: DocumentHeader) -> Self {
        Self {
            parser,
            layout,
            document,
        }
    }

    pub fn parser(&self) -> &ParserConfig {
        &self.parser
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    pub fn document(&self) -> &DocumentHeader {
        &self.document
    }

    /// Returns a copy of this configuration with a different document header.
    pub fn with_document(mut self, document: DocumentHeader) -> Self {
        self.document = document;
        self
    }
}

/// Parser configuration.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ParserConfig {
    /// `auto`, `en` or `zh`.
    #[serde(default)]
    language: LanguagePreference,
}

impl ParserConfig {
    pub fn new(language: LanguagePreference) -> Self {
        Self { language }
    }

    pub fn language(&self) -> LanguagePreference {
        self.language
    }
}

impl From<&ParserConfig> for ParseConfig {
    fn from(config: &ParserConfig) -> Self {
        ParseConfig::new(config.language)
    }
}

/// Placement constants, one section per diagram kind.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LayoutConfig {
    #[serde(default)]
    business: BusinessLayoutConfig,

    #[serde(default)]
    ui: UiLayoutConfig,

    #[serde(default)]
    prototype: PrototypeLayoutConfig,
}

impl LayoutConfig {
    pub fn new(
        business: BusinessLayoutConfig,
        ui: UiLayoutConfig,
        prototype: PrototypeLayoutConfig,
    ) -> Self {
        Self {
            business,
            ui,
            prototype,
        }
    }

    pub fn business(&self) -> &BusinessLayoutConfig {
        &self.business
    }

    pub fn ui(&self) -> &UiLayoutConfig {
        &self.ui
    }

    pub fn prototype(&self) -> &PrototypeLayoutConfig {
        &self.prototype
    }
}

/// Vertical business-flow layout.
///
/// Every node is centred on the vertical axis running through the start
/// node placed at `anchor`. Branch targets are centred `branch_offset` to
/// the left (affirmative) or right (negative) of that axis.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BusinessLayoutConfig {
    anchor: Point,
    step: i32,
    branch_offset: i32,
    terminal_size: Size,
    process_size: Size,
    decision_size: Size,
    branch_size: Size,
}

impl Default for BusinessLayoutConfig {
    fn default() -> Self {
        Self {
            anchor: Point::new(250, 50),
            step: 120,
            branch_offset: 150,
            terminal_size: Size::new(120, 60),
            process_size: Size::new(180, 60),
            decision_size: Size::new(150, 80),
            branch_size: Size::new(140, 60),
        }
    }
}

impl BusinessLayoutConfig {
    /// Top-left corner of the synthetic start node.
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Vertical distance between consecutive rows.
    pub fn step(&self) -> i32 {
        self.step
    }

    pub fn branch_offset(&self) -> i32 {
        self.branch_offset
    }

    /// Size of the synthetic start and end nodes.
    pub fn terminal_size(&self) -> Size {
        self.terminal_size
    }

    pub fn process_size(&self) -> Size {
        self.process_size
    }

    pub fn decision_size(&self) -> Size {
        self.decision_size
    }

    pub fn branch_size(&self) -> Size {
        self.branch_size
    }

    /// X coordinate of the shared vertical axis.
    pub fn axis(&self) -> i32 {
        self.anchor.x() + self.terminal_size.width() / 2
    }
}

/// Row-major grid layout for UI flows.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiLayoutConfig {
    columns: usize,
    origin: Point,
    column_spacing: i32,
    row_spacing: i32,
    screen_size: Size,
    terminal_size: Size,
    decision_size: Size,
}

impl Default for UiLayoutConfig {
    fn default() -> Self {
        Self {
            columns: 4,
            origin: Point::new(50, 50),
            column_spacing: 220,
            row_spacing: 150,
            screen_size: Size::new(160, 70),
            terminal_size: Size::new(120, 60),
            decision_size: Size::new(150, 80),
        }
    }
}

impl UiLayoutConfig {
    /// Number of grid columns, never less than one.
    pub fn columns(&self) -> usize {
        self.columns.max(1)
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn column_spacing(&self) -> i32 {
        self.column_spacing
    }

    pub fn row_spacing(&self) -> i32 {
        self.row_spacing
    }

    /// Size of screen and process nodes; also the size of one grid slot.
    pub fn screen_size(&self) -> Size {
        self.screen_size
    }

    pub fn terminal_size(&self) -> Size {
        self.terminal_size
    }

    pub fn decision_size(&self) -> Size {
        self.decision_size
    }
}

/// Swimlane-and-containers layout for prototype wireframes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PrototypeLayoutConfig {
    columns: usize,
    origin: Point,
    container_size: Size,
    column_spacing: i32,
    row_spacing: i32,
    padding: i32,
    title_height: i32,
}

impl Default for PrototypeLayoutConfig {
    fn default() -> Self {
        Self {
            columns: 3,
            origin: Point::new(40, 40),
            container_size: Size::new(200, 150),
            column_spacing: 240,
            row_spacing: 190,
            padding: 20,
            title_height: 30,
        }
    }
}

impl PrototypeLayoutConfig {
    /// Number of grid columns, never less than one.
    pub fn columns(&self) -> usize {
        self.columns.max(1)
    }

    /// Top-left corner of the enclosing swimlane.
    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn container_size(&self) -> Size {
        self.container_size
    }

    pub fn column_spacing(&self) -> i32 {
        self.column_spacing
    }

    pub fn row_spacing(&self) -> i32 {
        self.row_spacing
    }

    /// Gap between the swimlane border and the outermost containers.
    pub fn padding(&self) -> i32 {
        self.padding
    }

    /// Height of the swimlane title bar.
    pub fn title_height(&self) -> i32 {
        self.title_height
    }
}
