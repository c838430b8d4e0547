use std::{io, path::Path};

/// Trait for types that represent one file of a generated project
pub trait GeneratedFile {
    /// Get the file path relative to the project root, using `/` separators
    fn path(&self) -> String;

    /// Render the file content
    fn render(&self) -> String;

    /// Write the file below `base`, creating parent directories as needed
    fn write(&self, base: &Path) -> io::Result<()> {
        write_file(base, &self.path(), self.render().as_bytes())
    }
}

/// Write `content` to `base/relative`, creating parent directories.
///
/// `relative` uses `/` as separator regardless of platform.
pub fn write_file(base: &Path, relative: &str, content: &[u8]) -> io::Result<()> {
    let path = relative
        .split('/')
        .filter(|segment| !segment.is_empty())
        .fold(base.to_path_buf(), |acc, segment| acc.join(segment));

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    struct Readme;

    impl GeneratedFile for Readme {
        fn path(&self) -> String {
            "docs/README.md".to_string()
        }

        fn render(&self) -> String {
            "# Hello\n".to_string()
        }
    }

    #[test]
    fn test_write_file_creates_file() {
        let temp = TempDir::new().unwrap();

        write_file(temp.path(), "test.txt", b"hello").unwrap();

        let path = temp.path().join("test.txt");
        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_write_file_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();

        write_file(temp.path(), "a/b/c/test.txt", b"nested").unwrap();

        let path = temp.path().join("a").join("b").join("c").join("test.txt");
        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
    }

    #[test]
    fn test_write_file_overwrites_existing() {
        let temp = TempDir::new().unwrap();

        write_file(temp.path(), "test.txt", b"first").unwrap();
        write_file(temp.path(), "test.txt", b"second").unwrap();

        let path = temp.path().join("test.txt");
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_generated_file_write() {
        let temp = TempDir::new().unwrap();

        Readme.write(temp.path()).unwrap();

        let path = temp.path().join("docs").join("README.md");
        assert_eq!(fs::read_to_string(&path).unwrap(), "# Hello\n");
    }
}
