//! Project tree archiving.

use std::io::{self, Cursor, Write};

use weaver_codegen::{GenerationError, Result, tree::ProjectTree};
use zip::{CompressionMethod, DateTime, ZipWriter, write::SimpleFileOptions};

/// Permissions recorded for every entry.
const ENTRY_MODE: u32 = 0o644;

/// Serialize a project tree into a ZIP archive.
///
/// Entries follow tree order and carry a fixed timestamp and mode, so equal
/// trees produce equal bytes. Directories are implied by entry paths.
pub fn archive(tree: &ProjectTree) -> Result<Vec<u8>> {
    write_archive(tree).map_err(|e| GenerationError::archive_io("building archive", e))
}

fn write_archive(tree: &ProjectTree) -> io::Result<Vec<u8>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
        .unix_permissions(ENTRY_MODE);

    for (path, content) in tree.iter() {
        zip.start_file(path, options).map_err(io::Error::other)?;
        zip.write_all(content)?;
    }

    let cursor = zip.finish().map_err(io::Error::other)?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use zip::ZipArchive;

    use super::*;

    fn tree() -> ProjectTree {
        let mut tree = ProjectTree::new();
        tree.insert("models/orders.py", "class Orders: ...\n").unwrap();
        tree.insert("routes/ordersRoutes.py", "orders_bp = None\n").unwrap();
        tree.insert("app.py", "app = None\n").unwrap();
        tree
    }

    #[test]
    fn test_entries_follow_tree_order() {
        let bytes = archive(&tree()).unwrap();
        let mut zip = ZipArchive::new(Cursor::new(bytes)).unwrap();

        let names: Vec<String> = (0..zip.len())
            .map(|i| zip.by_index(i).unwrap().name().to_string())
            .collect();
        assert_eq!(names, ["models/orders.py", "routes/ordersRoutes.py", "app.py"]);

        let mut content = String::new();
        zip.by_name("app.py")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "app = None\n");
    }

    #[test]
    fn test_no_directory_entries() {
        let bytes = archive(&tree()).unwrap();
        let mut zip = ZipArchive::new(Cursor::new(bytes)).unwrap();

        for i in 0..zip.len() {
            let entry = zip.by_index(i).unwrap();
            assert!(!entry.is_dir(), "{} is a directory entry", entry.name());
            assert_eq!(entry.unix_mode().map(|m| m & 0o777), Some(ENTRY_MODE));
        }
    }

    #[test]
    fn test_archive_is_deterministic() {
        assert_eq!(archive(&tree()).unwrap(), archive(&tree()).unwrap());
    }

    #[test]
    fn test_content_change_changes_bytes() {
        let mut other = ProjectTree::new();
        other.insert("models/orders.py", "class Orders: pass\n").unwrap();
        other.insert("routes/ordersRoutes.py", "orders_bp = None\n").unwrap();
        other.insert("app.py", "app = None\n").unwrap();

        assert_ne!(archive(&tree()).unwrap(), archive(&other).unwrap());
    }

    #[test]
    fn test_empty_tree() {
        let bytes = archive(&ProjectTree::new()).unwrap();
        let zip = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(zip.len(), 0);
    }
}
