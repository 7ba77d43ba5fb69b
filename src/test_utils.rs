//! Test utilities for building temporary inputs.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::{Compression, GzBuilder};
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// A temporary directory for building test inputs.
///
/// Entry lists use `/` separators; a trailing `/` marks a directory.
/// Everything is removed when the value is dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create a file, and its parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Create each entry on disk.
    pub fn add_entries(&self, entries: &[&str]) {
        for entry in entries {
            match entry.strip_suffix('/') {
                Some(dir) => {
                    self.add_dir(dir);
                }
                None => {
                    self.add_file(entry, "");
                }
            }
        }
    }

    /// Write a zip archive holding `entries`.
    pub fn add_zip(&self, name: &str, entries: &[&str]) -> PathBuf {
        let full_path = self.dir.path().join(name);
        let file = File::create(&full_path).expect("Failed to create zip");
        let mut writer = ZipWriter::new(file);
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
        for entry in entries {
            match entry.strip_suffix('/') {
                Some(dir) => writer
                    .add_directory(dir, options)
                    .expect("Failed to add zip dir"),
                None => {
                    writer.start_file(*entry, options).expect("Failed to add zip file");
                    writer.write_all(entry.as_bytes()).expect("Failed to write zip file");
                }
            }
        }
        writer.finish().expect("Failed to finish zip");
        full_path
    }

    /// Write a gzip-compressed tarball holding `entries`.
    pub fn add_tar_gz(&self, name: &str, entries: &[&str]) -> PathBuf {
        let full_path = self.dir.path().join(name);
        let file = File::create(&full_path).expect("Failed to create tarball");
        let mut builder = tar::Builder::new(GzEncoder::new(file, Compression::default()));
        for entry in entries {
            let mut header = tar::Header::new_ustar();
            if entry.ends_with('/') {
                header.set_entry_type(tar::EntryType::Directory);
                header.set_mode(0o755);
                header.set_size(0);
                builder
                    .append_data(&mut header, entry, std::io::empty())
                    .expect("Failed to add tar dir");
            } else {
                header.set_mode(0o644);
                header.set_size(entry.len() as u64);
                builder
                    .append_data(&mut header, entry, entry.as_bytes())
                    .expect("Failed to add tar file");
            }
        }
        builder
            .into_inner()
            .and_then(|gz| gz.finish())
            .expect("Failed to finish tarball");
        full_path
    }

    /// Write a single-member gzip file, optionally recording `member` in its header.
    pub fn add_gz(&self, name: &str, member: Option<&str>, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(name);
        let file = File::create(&full_path).expect("Failed to create gzip");
        let mut builder = GzBuilder::new();
        if let Some(member) = member {
            builder = builder.filename(member);
        }
        let mut encoder = builder.write(file, Compression::default());
        encoder
            .write_all(content.as_bytes())
            .expect("Failed to write gzip");
        encoder.finish().expect("Failed to finish gzip");
        full_path
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}
