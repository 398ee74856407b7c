//! Writing documents to disk.

use std::fs;
use std::path::Path;

use crate::error::{CutError, Result};

use super::SvgDocument;

/// Write a document to `path` in one go.
///
/// Any I/O failure aborts with `OutputWriteFailed`; nothing is retried.
pub fn write_svg(document: &SvgDocument, path: &Path) -> Result<()> {
    fs::write(path, document.render()).map_err(|source| CutError::OutputWriteFailed {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::svg::Unit;
    use tempfile::tempdir;

    #[test]
    fn test_write_svg() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("blank.svg");
        let document = SvgDocument::new(10.0, 20.0, Unit::Millimeters, 0.1);

        write_svg(&document, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, document.render());
    }

    #[test]
    fn test_write_svg_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("blank.svg");
        let document = SvgDocument::new(10.0, 10.0, Unit::Inches, 0.05);

        let err = write_svg(&document, &path).unwrap_err();
        match err {
            CutError::OutputWriteFailed { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
