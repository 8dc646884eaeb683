//! XML documentation loading.
//!
//! This module parses the XML documentation format of the host toolchain
//! (`<member name="T:Ns.Type">` / `"P:Ns.Type.Member"` entries) and
//! attaches the extracted text lines to catalog declarations.

use crate::catalog::TypeCatalog;
use crate::error::MetaError;
use crate::types::QualifiedName;
use quick_xml::Reader;
use quick_xml::events::Event;
use std::collections::HashMap;

/// Parsed documentation entries, keyed by the host documentation key
/// (`T:`, `P:` or `F:` prefix plus the dotted member path).
#[derive(Debug, Clone, Default)]
pub struct DocIndex {
    entries: HashMap<String, Vec<String>>,
}

impl DocIndex {
    /// Returns the documentation lines for a type declaration.
    #[must_use]
    pub fn type_docs(&self, name: &QualifiedName) -> Option<&[String]> {
        self.entries
            .get(&format!("T:{name}"))
            .map(Vec::as_slice)
    }

    /// Returns the documentation lines for a property or field.
    #[must_use]
    pub fn member_docs(&self, name: &QualifiedName, member: &str) -> Option<&[String]> {
        self.entries
            .get(&format!("P:{name}.{member}"))
            .or_else(|| self.entries.get(&format!("F:{name}.{member}")))
            .map(Vec::as_slice)
    }

    /// Returns the number of documented members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no entries were loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Attaches documentation lines to every declaration and member of
    /// the catalog that has a matching entry. Declarations without
    /// entries are left untouched.
    pub fn apply(&self, catalog: &mut TypeCatalog) {
        let names: Vec<QualifiedName> = catalog.iter().map(|decl| decl.name.clone()).collect();
        for name in names {
            let type_docs = self.type_docs(&name).map(<[String]>::to_vec);
            let Some(decl) = catalog.get_mut(&name) else {
                continue;
            };
            if let Some(docs) = type_docs {
                decl.docs = docs;
            }
            let member_names: Vec<String> = decl
                .properties
                .iter()
                .chain(decl.fields.iter())
                .map(|member| member.name.clone())
                .collect();
            for member_name in member_names {
                let Some(docs) = self.member_docs(&name, &member_name) else {
                    continue;
                };
                let docs = docs.to_vec();
                for member in decl
                    .properties
                    .iter_mut()
                    .chain(decl.fields.iter_mut())
                    .filter(|member| member.name == member_name)
                {
                    member.docs = docs.clone();
                }
            }
        }
    }
}

/// Parses XML documentation content into a [`DocIndex`].
///
/// # Arguments
/// * `xml` - XML documentation content
///
/// # Errors
/// Returns `MetaError` if the XML is malformed.
pub fn load_xml_docs(xml: &str) -> Result<DocIndex, MetaError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut entries = HashMap::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                if name == "member" {
                    let mut key = None;
                    for attr in e.attributes().flatten() {
                        if attr.key.as_ref() == b"name" {
                            key = Some(std::str::from_utf8(&attr.value)?.to_string());
                        }
                    }
                    let Some(key) = key else {
                        return Err(MetaError::invalid_structure(
                            "member element without a name attribute",
                        ));
                    };
                    let lines = read_member_text(&mut reader)?;
                    if !lines.is_empty() {
                        entries.insert(key, lines);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(MetaError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(DocIndex { entries })
}

/// Reads the text content of one member element, dropping the summary
/// envelope and blank lines.
fn read_member_text(reader: &mut Reader<&[u8]>) -> Result<Vec<String>, MetaError> {
    let mut buf = Vec::new();
    let mut lines = Vec::new();
    let mut depth = 1;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(_)) => depth += 1,
            Ok(Event::End(_)) => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            Ok(Event::Text(ref t)) => {
                let text = std::str::from_utf8(t.as_ref())?.to_string();
                for line in text.lines() {
                    let line = line.trim();
                    if !line.is_empty() && line != "<summary>" && line != "</summary>" {
                        lines.push(line.to_string());
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(MetaError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(lines)
}
