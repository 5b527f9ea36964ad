use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;
use tutor_common::TutorError;

/// Multi-line literal with the shared indentation removed and the final
/// newline kept.
pub const PAGE: &str = "\
<html>
  <body>
    <p>
      <div>Hello World!</div>
    </p>
  </body>
</html>
";

/// Writes [`PAGE`] to `path`, truncating any existing file.
///
/// The handle is flushed and closed before this returns.
pub fn write_page(path: &Path) -> Result<(), TutorError> {
    let io_err = |source| TutorError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(File::create(path).map_err(io_err)?);
    writer.write_all(PAGE.as_bytes()).map_err(io_err)?;
    writer.into_inner().map_err(|e| io_err(e.into_error()))?;

    info!("Wrote {} bytes to {}", PAGE.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_has_relative_indentation_only() {
        let lines: Vec<&str> = PAGE.lines().collect();
        assert_eq!(lines.first(), Some(&"<html>"));
        assert_eq!(lines.last(), Some(&"</html>"));
        assert_eq!(lines[3], "      <div>Hello World!</div>");
        assert!(PAGE.ends_with("</html>\n"));
    }

    #[test]
    fn writes_exact_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("demo.txt");

        std::fs::write(&path, "stale content that is longer than nothing").unwrap();
        write_page(&path).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), PAGE);
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("demo.txt");

        let err = write_page(&path).unwrap_err();
        assert!(matches!(err, TutorError::Io { path: ref p, .. } if *p == path));
    }
}
