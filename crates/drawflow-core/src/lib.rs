//! Drawflow Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Drawflow parser
//! and layout stages. It includes:
//!
//! - **Graph**: The structured flow model ([`graph`] module)
//! - **Language**: Localized markers and language detection ([`language`] module)
//! - **Geometry**: Integer canvas geometry ([`geometry`] module)
//! - **Document**: The draw.io document builder ([`document`] module)

pub mod document;
pub mod geometry;
pub mod graph;
pub mod language;
