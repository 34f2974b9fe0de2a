//! Workspace data documents
//!
//! [`WorkspaceData`] is the parsed content of a workspace data file.
//! Parsing sits behind [`WorkspaceDataParser`] so callers can substitute
//! their own reader; [`XmlWorkspaceDataParser`] handles the usual XML form:
//!
//! ```text
//! <Workspace version = "1.0">
//!    <FileRef location = "group:App.xcodeproj"></FileRef>
//! </Workspace>
//! ```

use crate::error::DataError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

/// Entry pointing at a project or file from a workspace
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileRef {
    location: String,
}

impl FileRef {
    /// Create file reference
    #[inline]
    #[must_use]
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: location.into(),
        }
    }

    /// Raw location, e.g. `group:App.xcodeproj`
    #[inline]
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Location kind before the first colon (`group`, `container`, `absolute`, ...)
    #[must_use]
    pub fn kind(&self) -> Option<&str> {
        self.location.split_once(':').map(|(kind, _)| kind)
    }

    /// Location path after the first colon, or the whole location if unprefixed
    #[must_use]
    pub fn path(&self) -> &str {
        self.location
            .split_once(':')
            .map_or(self.location.as_str(), |(_, path)| path)
    }
}

/// Parsed workspace data document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkspaceData {
    version: Option<String>,
    file_refs: Vec<FileRef>,
}

impl WorkspaceData {
    /// Create from parsed parts
    #[inline]
    #[must_use]
    pub fn new(version: Option<String>, file_refs: Vec<FileRef>) -> Self {
        Self { version, file_refs }
    }

    /// Document format version
    #[inline]
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// File references in document order, including those nested in groups
    #[inline]
    #[must_use]
    pub fn file_refs(&self) -> &[FileRef] {
        &self.file_refs
    }
}

/// Parser seam for workspace data documents
pub trait WorkspaceDataParser: Send + Sync {
    /// Parse document contents
    ///
    /// # Errors
    /// Returns [`DataError`] if the contents are not a valid document
    fn parse(&self, contents: &str) -> Result<WorkspaceData, DataError>;
}

/// quick-xml backed parser for the XML document form
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlWorkspaceDataParser;

impl XmlWorkspaceDataParser {
    /// Create new XML parser
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl WorkspaceDataParser for XmlWorkspaceDataParser {
    fn parse(&self, contents: &str) -> Result<WorkspaceData, DataError> {
        let mut reader = Reader::from_str(contents);
        reader.config_mut().trim_text(true);

        let mut saw_root = false;
        let mut version = None;
        let mut file_refs = Vec::new();

        loop {
            match reader.read_event()? {
                Event::Start(element) | Event::Empty(element) => {
                    match element.name().as_ref() {
                        b"Workspace" => {
                            saw_root = true;
                            version = attribute(&element, b"version")?;
                        }
                        b"FileRef" => {
                            if let Some(location) = attribute(&element, b"location")? {
                                file_refs.push(FileRef::new(location));
                            }
                        }
                        _ => {}
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if !saw_root {
            return Err(DataError::MissingRoot);
        }
        Ok(WorkspaceData::new(version, file_refs))
    }
}

fn attribute(element: &BytesStart<'_>, name: &[u8]) -> Result<Option<String>, DataError> {
    for attr in element.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == name {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_version_and_nested_file_refs() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<Workspace version = "1.0">
   <FileRef location = "group:App.xcodeproj"></FileRef>
   <Group location = "container:" name = "Libs">
      <FileRef location = "group:Lib/Lib.xcodeproj"/>
   </Group>
</Workspace>"#;
        let data = XmlWorkspaceDataParser.parse(xml).unwrap();

        assert_eq!(data.version(), Some("1.0"));
        assert_eq!(
            data.file_refs(),
            &[
                FileRef::new("group:App.xcodeproj"),
                FileRef::new("group:Lib/Lib.xcodeproj")
            ]
        );
    }

    #[test]
    fn empty_workspace_has_no_refs() {
        let data = XmlWorkspaceDataParser.parse("<Workspace version=\"1.0\"/>").unwrap();
        assert!(data.file_refs().is_empty());
    }

    #[test]
    fn missing_root_is_rejected() {
        let err = XmlWorkspaceDataParser.parse("<Project/>").unwrap_err();
        assert!(matches!(err, DataError::MissingRoot));
    }

    #[test]
    fn malformed_xml_is_rejected() {
        assert!(XmlWorkspaceDataParser.parse("<Workspace><FileRef></Workspace>").is_err());
    }

    #[test]
    fn escaped_location_is_unescaped() {
        let data = XmlWorkspaceDataParser
            .parse(r#"<Workspace><FileRef location="group:A&amp;B.xcodeproj"/></Workspace>"#)
            .unwrap();
        assert_eq!(data.file_refs()[0].path(), "A&B.xcodeproj");
    }

    #[test]
    fn file_ref_kind_and_path() {
        let file = FileRef::new("container:Sub/Project.xcodeproj");
        assert_eq!(file.kind(), Some("container"));
        assert_eq!(file.path(), "Sub/Project.xcodeproj");

        let bare = FileRef::new("Project.xcodeproj");
        assert_eq!(bare.kind(), None);
        assert_eq!(bare.path(), "Project.xcodeproj");
    }
}
