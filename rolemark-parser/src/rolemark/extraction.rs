//! Extraction and role routing
//!
//!     Consumers of a parsed document mostly want one of two things: the files it
//!     declares, to write them out, or the content of one conversational role. Both are
//!     read-only walks over the tree, implemented as [Visitor]s.
//!
//!     Files are collected wherever they appear (top level or inside a role) in document
//!     order. A file that never got its end marker is not a File node at all, so it is
//!     simply not extracted. Writing files anywhere is left to the caller.

use crate::rolemark::ast::{CodeBlock, Container, File, Role, Root, Text, Visitor};
use serde::Serialize;

/// A file declared in a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedFile {
    pub name: String,
    pub language: String,
    pub content: String,
}

impl From<&File> for ExtractedFile {
    fn from(file: &File) -> Self {
        Self {
            name: file.name.clone(),
            language: file.language.clone(),
            content: file.text(),
        }
    }
}

/// The content of one role section, split by kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleSection {
    pub name: String,
    pub header: String,
    /// Text directly under the role, outside any block
    pub prose: String,
    pub code_blocks: Vec<CodeBlock>,
    pub files: Vec<ExtractedFile>,
}

#[derive(Default)]
struct FileCollector {
    files: Vec<ExtractedFile>,
}

impl Visitor for FileCollector {
    fn visit_file(&mut self, file: &File) {
        self.files.push(ExtractedFile::from(file));
    }
}

/// Every file block in the document, in order
pub fn extract_files(root: &Root) -> Vec<ExtractedFile> {
    let mut collector = FileCollector::default();
    root.accept(&mut collector);
    collector.files
}

#[derive(Default)]
struct SectionCollector {
    sections: Vec<RoleSection>,
    current: Option<RoleSection>,
    /// Nesting depth of File / CodeBlock nodes under the current role
    block_depth: usize,
}

impl Visitor for SectionCollector {
    fn visit_role(&mut self, role: &Role) {
        self.current = Some(RoleSection {
            name: role.name.clone(),
            header: role.raw_header.clone(),
            prose: String::new(),
            code_blocks: Vec::new(),
            files: Vec::new(),
        });
    }

    fn leave_role(&mut self, _role: &Role) {
        if let Some(section) = self.current.take() {
            self.sections.push(section);
        }
    }

    fn visit_file(&mut self, file: &File) {
        self.block_depth += 1;
        if let Some(section) = self.current.as_mut() {
            section.files.push(ExtractedFile::from(file));
        }
    }

    fn leave_file(&mut self, _file: &File) {
        self.block_depth -= 1;
    }

    fn visit_code_block(&mut self, block: &CodeBlock) {
        self.block_depth += 1;
        if let Some(section) = self.current.as_mut() {
            section.code_blocks.push(block.clone());
        }
    }

    fn leave_code_block(&mut self, _block: &CodeBlock) {
        self.block_depth -= 1;
    }

    fn visit_text(&mut self, text: &Text) {
        if self.block_depth > 0 {
            return;
        }
        if let Some(section) = self.current.as_mut() {
            section.prose.push_str(&text.content);
        }
    }
}

/// One section per Role node, in document order. Content before the first role header
/// belongs to no section.
pub fn role_sections(root: &Root) -> Vec<RoleSection> {
    let mut collector = SectionCollector::default();
    root.accept(&mut collector);
    collector.sections
}

/// Sections for one role; `name` is matched case-insensitively
pub fn sections_for_role(root: &Root, name: &str) -> Vec<RoleSection> {
    let name = name.to_lowercase();
    role_sections(root)
        .into_iter()
        .filter(|section| section.name == name)
        .collect()
}
