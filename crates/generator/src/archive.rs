//! Directory tree archiving.

use crate::error::GeneratorResult;
use std::fs::{self, File};
use std::io;
use std::path::Path;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Pack every regular file under `src_dir` into a deflate-compressed ZIP at
/// `dest`, naming each entry by its path relative to `src_dir` with forward
/// slashes. Directories get no entries of their own; symlinks are skipped.
///
/// Returns the number of files written.
pub fn archive_dir(src_dir: &Path, dest: &Path) -> GeneratorResult<u64> {
    let mut writer = ZipWriter::new(File::create(dest)?);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut count = 0u64;

    let mut stack = vec![src_dir.to_path_buf()];
    while let Some(dir) = stack.pop() {
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let path = entry.path();
            let file_type = entry.file_type()?;
            if file_type.is_dir() {
                stack.push(path);
            } else if file_type.is_file() {
                let name = path
                    .strip_prefix(src_dir)
                    .unwrap_or(&path)
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy())
                    .collect::<Vec<_>>()
                    .join("/");

                writer.start_file(name, options)?;
                io::copy(&mut File::open(&path)?, &mut writer)?;
                count += 1;
            }
        }
    }

    writer.finish()?;
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn preserves_relative_paths_and_content() {
        let src = tempfile::tempdir().unwrap();
        fs::create_dir_all(src.path().join("a/b")).unwrap();
        fs::write(src.path().join("top.txt"), b"top level").unwrap();
        fs::write(src.path().join("a/b/deep.txt"), b"nested bytes").unwrap();

        let dest_dir = tempfile::tempdir().unwrap();
        let dest = dest_dir.path().join("out.zip");
        let written = archive_dir(src.path(), &dest).unwrap();
        assert_eq!(written, 2);

        let mut archive = zip::ZipArchive::new(File::open(&dest).unwrap()).unwrap();
        assert_eq!(archive.len(), 2);

        let mut content = String::new();
        archive
            .by_name("a/b/deep.txt")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "nested bytes");
    }

    #[test]
    fn empty_directories_produce_no_entries() {
        let src = tempfile::tempdir().unwrap();
        fs::create_dir_all(src.path().join("empty/inner")).unwrap();
        fs::write(src.path().join("only.txt"), b"x").unwrap();

        let dest_dir = tempfile::tempdir().unwrap();
        let dest = dest_dir.path().join("out.zip");
        archive_dir(src.path(), &dest).unwrap();

        let archive = zip::ZipArchive::new(File::open(&dest).unwrap()).unwrap();
        let names: Vec<_> = archive.file_names().collect();
        assert_eq!(names, vec!["only.txt"]);
    }
}
