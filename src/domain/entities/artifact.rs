//! BuildArtifact entity - one emitted output unit
//!
//! Artifacts are produced by the orchestrator while emitting and are read-only
//! to everything downstream. They live for the duration of one build run.

/// Kind of emitted artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Compiled executable code
    Chunk,
    /// Non-code output such as a stylesheet or image
    Asset,
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArtifactKind::Chunk => write!(f, "chunk"),
            ArtifactKind::Asset => write!(f, "asset"),
        }
    }
}

/// An emitted chunk or asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildArtifact {
    /// Final file name, relative to the output directory
    file_name: String,
    kind: ArtifactKind,
    content: String,
    /// Only ever true for chunks
    is_entry: bool,
    /// Candidate names the compiler proposed (assets only)
    names: Vec<String>,
}

impl BuildArtifact {
    /// Create a chunk
    pub fn chunk(file_name: impl Into<String>, content: impl Into<String>, is_entry: bool) -> Self {
        Self {
            file_name: file_name.into(),
            kind: ArtifactKind::Chunk,
            content: content.into(),
            is_entry,
            names: Vec::new(),
        }
    }

    /// Create an asset
    pub fn asset(file_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            kind: ArtifactKind::Asset,
            content: content.into(),
            is_entry: false,
            names: Vec::new(),
        }
    }

    /// Attach the candidate names this asset was emitted under
    pub fn with_names(mut self, names: Vec<String>) -> Self {
        self.names = names;
        self
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn kind(&self) -> ArtifactKind {
        self.kind
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_chunk(&self) -> bool {
        self.kind == ArtifactKind::Chunk
    }

    pub fn is_asset(&self) -> bool {
        self.kind == ArtifactKind::Asset
    }

    /// True for chunks flagged as an entry point
    pub fn is_entry(&self) -> bool {
        self.is_chunk() && self.is_entry
    }

    /// True for assets whose file name marks stylesheet content
    pub fn is_stylesheet(&self) -> bool {
        self.is_asset() && is_stylesheet_name(&self.file_name)
    }
}

/// Whether a file name carries the stylesheet extension.
///
/// `widget.css.map` is a source map, not a stylesheet.
pub fn is_stylesheet_name(name: &str) -> bool {
    let len = name.len();
    len >= 4 && name.is_char_boundary(len - 4) && name[len - 4..].eq_ignore_ascii_case(".css")
}
