//! A small pretty-printing XML element tree.
//!
//! Output follows a fixed convention: a bare `<?xml version="1.0" ?>`
//! declaration, two-space indentation, attributes in insertion order,
//! childless elements self-closed as `<name/>`, and a trailing newline.

use std::fmt::{self, Write};

/// An XML element with ordered attributes and child elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlElement {
    name: &'static str,
    attributes: Vec<(&'static str, String)>,
    children: Vec<XmlElement>,
}

impl XmlElement {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Appends an attribute. The value is escaped at write time.
    pub fn attr(mut self, key: &'static str, value: impl ToString) -> Self {
        self.attributes.push((key, value.to_string()));
        self
    }

    pub fn child(mut self, child: XmlElement) -> Self {
        self.children.push(child);
        self
    }

    pub fn push(&mut self, child: XmlElement) {
        self.children.push(child);
    }

    /// Writes this element as a complete document, declaration included.
    pub fn write_document<W: Write>(&self, out: &mut W) -> fmt::Result {
        out.write_str("<?xml version=\"1.0\" ?>\n")?;
        self.write_indented(out, 0)
    }

    fn write_indented<W: Write>(&self, out: &mut W, depth: usize) -> fmt::Result {
        for _ in 0..depth {
            out.write_str("  ")?;
        }
        write!(out, "<{}", self.name)?;
        for (key, value) in &self.attributes {
            write!(out, " {key}=\"")?;
            write_escaped(out, value)?;
            out.write_char('"')?;
        }

        if self.children.is_empty() {
            return out.write_str("/>\n");
        }

        out.write_str(">\n")?;
        for child in &self.children {
            child.write_indented(out, depth + 1)?;
        }
        for _ in 0..depth {
            out.write_str("  ")?;
        }
        writeln!(out, "</{}>", self.name)
    }
}

/// Escapes `value` for use inside a double-quoted attribute.
///
/// # Examples
///
/// ```
/// # use drawflow_core::document::xml::escape_attribute;
/// assert_eq!(escape_attribute("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
/// assert_eq!(escape_attribute("line\nbreak"), "line&#10;break");
/// ```
pub fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    // Writing into a String cannot fail.
    let _ = write_escaped(&mut out, value);
    out
}

fn write_escaped<W: Write>(out: &mut W, value: &str) -> fmt::Result {
    for c in value.chars() {
        match c {
            '&' => out.write_str("&amp;")?,
            '<' => out.write_str("&lt;")?,
            '>' => out.write_str("&gt;")?,
            '"' => out.write_str("&quot;")?,
            '\t' => out.write_str("&#9;")?,
            '\n' => out.write_str("&#10;")?,
            '\r' => out.write_str("&#13;")?,
            c if is_xml_char(c) => out.write_char(c)?,
            _ => {}
        }
    }
    Ok(())
}

/// Returns `true` for characters permitted by the XML 1.0 `Char` production.
pub(crate) fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\u{9}'
            | '\u{A}'
            | '\u{D}'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}
