//! FileHandle - one user-selected input file.

use std::fmt;

/// Content type assumed for comparison sheets when none is given.
pub const DEFAULT_CONTENT_TYPE: &str = "text/csv";

/// A selected input file: its name, declared type, and raw bytes.
///
/// The name is what the analysis service echoes back, so it is kept verbatim.
#[derive(Clone, PartialEq, Eq)]
pub struct FileHandle {
    filename: String,
    content_type: String,
    bytes: Vec<u8>,
}

impl FileHandle {
    /// Creates a handle with the default CSV content type.
    pub fn new(filename: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            bytes: bytes.into(),
        }
    }

    /// Overrides the declared content type.
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

// Bytes are elided; sheets can be large.
impl fmt::Debug for FileHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileHandle")
            .field("filename", &self.filename)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}
