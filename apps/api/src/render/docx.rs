//! Minimal WordprocessingML writer: one paragraph per line of text.

use std::io::{Cursor, Write};

use anyhow::{Context, Result};
use quick_xml::escape::escape;
use zip::write::SimpleFileOptions;
use zip::CompressionMethod;

pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#;

const ROOT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

const DOCUMENT_HEAD: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>"#;

const DOCUMENT_TAIL: &str = r#"<w:sectPr><w:pgSz w:w="12240" w:h="15840"/><w:pgMar w:top="1440" w:right="1440" w:bottom="1440" w:left="1440" w:header="720" w:footer="720" w:gutter="0"/></w:sectPr></w:body></w:document>"#;

/// Renders `text` (trimmed) as a DOCX package, one paragraph per line.
pub fn render_docx(text: &str) -> Result<Vec<u8>> {
    let document_xml = document_xml(text);

    let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));

    for (name, body) in [
        ("[Content_Types].xml", CONTENT_TYPES_XML),
        ("_rels/.rels", ROOT_RELS_XML),
        ("word/document.xml", document_xml.as_str()),
    ] {
        let options =
            SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        zip.start_file(name, options)
            .with_context(|| format!("Failed to start {name}"))?;
        zip.write_all(body.as_bytes())
            .with_context(|| format!("Failed to write {name}"))?;
    }

    Ok(zip.finish().context("Failed to finish DOCX package")?.into_inner())
}

fn document_xml(text: &str) -> String {
    let mut xml = String::from(DOCUMENT_HEAD);

    for line in text.trim().lines() {
        let line = strip_invalid_xml_chars(line);
        if line.is_empty() {
            xml.push_str("<w:p/>");
        } else {
            xml.push_str(r#"<w:p><w:r><w:t xml:space="preserve">"#);
            xml.push_str(&escape(line.as_str()));
            xml.push_str("</w:t></w:r></w:p>");
        }
    }

    xml.push_str(DOCUMENT_TAIL);
    xml
}

/// XML 1.0 forbids most C0 control characters; model output occasionally
/// carries form feeds or NULs copied from PDF text.
fn strip_invalid_xml_chars(line: &str) -> String {
    line.chars()
        .filter(|&c| c == '\t' || c >= '\u{20}')
        .collect()
}
