//! Helpers for writing rendered documents to disk.

use std::{fs, path::Path};

use log::info;

use crate::DrawflowError;

/// Derives a `.drawio` file name from a diagram title.
///
/// Spaces and path separators become `_`; an empty title yields
/// `diagram.drawio`.
///
/// # Examples
///
/// ```
/// # use drawflow::export::drawio_file_name;
/// assert_eq!(drawio_file_name("Order Flow"), "Order_Flow.drawio");
/// assert_eq!(drawio_file_name("  "), "diagram.drawio");
/// ```
pub fn drawio_file_name(title: &str) -> String {
    let title = title.trim();
    if title.is_empty() {
        return "diagram.drawio".to_string();
    }

    let stem: String = title
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '_',
            c => c,
        })
        .collect();
    format!("{stem}.drawio")
}

/// Writes a rendered document to `path`.
///
/// # Errors
///
/// Returns [`DrawflowError::Io`] if the file cannot be written.
pub fn write_drawio(path: impl AsRef<Path>, xml: &str) -> Result<(), DrawflowError> {
    let path = path.as_ref();
    fs::write(path, xml)?;
    info!(path:? = path, bytes = xml.len(); "Diagram written");
    Ok(())
}
