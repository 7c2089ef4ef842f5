// SPDX-License-Identifier: MPL-2.0
//! Filesystem resource loader.
//!
//! Resources are looked up under a list of root directories. Each root that
//! contains the requested file contributes one source, in root order, so a
//! root listed later overrides keys from the roots before it.

use crate::application::port::{ResourceLoader, ResourceSource};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Loads resources from layered directories.
#[derive(Debug, Clone, Default)]
pub struct FsResourceLoader {
    roots: Vec<PathBuf>,
}

impl FsResourceLoader {
    #[must_use]
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    #[must_use]
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }
}

struct FileSource {
    id: String,
    path: PathBuf,
}

impl ResourceSource for FileSource {
    fn id(&self) -> &str {
        &self.id
    }

    fn read(&self) -> io::Result<String> {
        fs::read_to_string(&self.path)
    }
}

impl ResourceLoader for FsResourceLoader {
    fn list(&self, name: &str) -> Vec<Box<dyn ResourceSource + '_>> {
        self.roots
            .iter()
            .map(|root| root.join(Path::new(name)))
            .filter(|path| path.is_file())
            .map(|path| {
                Box::new(FileSource {
                    id: path.display().to_string(),
                    path,
                }) as Box<dyn ResourceSource>
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn lists_one_source_per_root_in_order() {
        let first = tempdir().expect("failed to create temp dir");
        let second = tempdir().expect("failed to create temp dir");
        fs::write(first.path().join("messages.fr"), "k=premier").expect("write");
        fs::write(second.path().join("messages.fr"), "k=second").expect("write");

        let loader = FsResourceLoader::new(vec![
            first.path().to_path_buf(),
            second.path().to_path_buf(),
        ]);
        let sources = loader.list("messages.fr");

        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].read().expect("read"), "k=premier");
        assert_eq!(sources[1].read().expect("read"), "k=second");
        assert!(sources[1].id().ends_with("messages.fr"));
    }

    #[test]
    fn missing_file_yields_no_source() {
        let root = tempdir().expect("failed to create temp dir");
        let loader = FsResourceLoader::new(vec![root.path().to_path_buf()]);
        assert!(loader.list("messages.de").is_empty());
    }

    #[test]
    fn directories_are_not_sources() {
        let root = tempdir().expect("failed to create temp dir");
        fs::create_dir(root.path().join("messages")).expect("mkdir");
        let loader = FsResourceLoader::new(vec![root.path().to_path_buf()]);
        assert!(loader.list("messages").is_empty());
    }

    #[test]
    fn nested_names_resolve_under_root() {
        let root = tempdir().expect("failed to create temp dir");
        fs::create_dir(root.path().join("conf")).expect("mkdir");
        fs::write(root.path().join("conf").join("messages"), "a=b").expect("write");
        let loader = FsResourceLoader::new(vec![root.path().to_path_buf()]);
        assert_eq!(loader.list("conf/messages").len(), 1);
    }

    #[test]
    fn invalid_utf8_is_a_read_error() {
        let root = tempdir().expect("failed to create temp dir");
        fs::write(root.path().join("messages"), [0xff, 0xfe, 0x00]).expect("write");
        let loader = FsResourceLoader::new(vec![root.path().to_path_buf()]);
        let sources = loader.list("messages");
        let err = sources[0].read().expect_err("not utf-8");
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
