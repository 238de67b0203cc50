//! `VanDyke` session document model and serializer.
//!
//! ```text
//! <?xml version="1.0" encoding="UTF-8"?>
//! <VanDyke version="3.0">
//!     <key name="Sessions">
//!         <key name="10.0.0.1">
//!             <string name="Hostname">10.0.0.1</string>
//!             ...
//!         </key>
//!     </key>
//! </VanDyke>
//! ```

use std::fmt::{self, Write};

pub const XML_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
pub const DOCUMENT_VERSION: &str = "3.0";

const INDENT: &str = "\t";

/// Root `<VanDyke>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub version: String,
    pub keys: Vec<Key>,
}

/// A `<key>` element: typed values first, then nested keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    pub name: String,
    pub values: Vec<Value>,
    pub children: Vec<Key>,
}

/// A typed leaf field of a [`Key`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    String { name: String, value: String },
    Dword { name: String, value: u32 },
}

impl Document {
    pub fn new(keys: Vec<Key>) -> Self {
        Self {
            version: DOCUMENT_VERSION.to_string(),
            keys,
        }
    }

    /// Writes the header line and the indented element tree.
    pub fn write_to<W: Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, "{XML_HEADER}")?;
        writeln!(out, r#"<VanDyke version="{}">"#, escape_xml(&self.version))?;
        for key in &self.keys {
            key.write_to(out, 1)?;
        }
        write!(out, "</VanDyke>")
    }

    pub fn render(&self) -> Result<String, fmt::Error> {
        let mut out = String::new();
        self.write_to(&mut out)?;
        Ok(out)
    }
}

impl Key {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn string(mut self, name: &str, value: impl Into<String>) -> Self {
        self.values.push(Value::String {
            name: name.to_string(),
            value: value.into(),
        });
        self
    }

    pub fn dword(mut self, name: &str, value: u32) -> Self {
        self.values.push(Value::Dword {
            name: name.to_string(),
            value,
        });
        self
    }

    /// True when the key holds typed fields rather than nested keys.
    pub fn is_leaf(&self) -> bool {
        !self.values.is_empty()
    }

    fn write_to<W: Write>(&self, out: &mut W, level: usize) -> fmt::Result {
        let indent: String = INDENT.repeat(level);
        write!(out, r#"{indent}<key name="{}">"#, escape_xml(&self.name))?;

        if self.values.is_empty() && self.children.is_empty() {
            return writeln!(out, "</key>");
        }

        writeln!(out)?;
        for value in &self.values {
            value.write_to(out, level + 1)?;
        }
        for child in &self.children {
            child.write_to(out, level + 1)?;
        }
        writeln!(out, "{indent}</key>")
    }
}

impl Value {
    fn write_to<W: Write>(&self, out: &mut W, level: usize) -> fmt::Result {
        let indent: String = INDENT.repeat(level);
        match self {
            Value::String { name, value } => writeln!(
                out,
                r#"{indent}<string name="{}">{}</string>"#,
                escape_xml(name),
                escape_xml(value)
            ),
            Value::Dword { name, value } => writeln!(
                out,
                r#"{indent}<dword name="{}">{value}</dword>"#,
                escape_xml(name)
            ),
        }
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
