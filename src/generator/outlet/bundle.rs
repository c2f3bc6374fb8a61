//! 运行目录打包

use anyhow::{Context, Result};
use flate2::{Compression, write::GzEncoder};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 把运行目录下的所有文件打包为gzip压缩的tar，归档内路径相对于运行目录
///
/// 目录不存在时返回None。
pub fn bundle_run_dir(run_dir: &Path) -> Result<Option<Vec<u8>>> {
    if !run_dir.is_dir() {
        return Ok(None);
    }

    let mut archive_bytes = Vec::new();
    {
        let gz = GzEncoder::new(&mut archive_bytes, Compression::default());
        let mut tar = tar::Builder::new(gz);

        for entry in WalkDir::new(run_dir).sort_by_file_name() {
            let entry = entry.context("Failed to walk run directory")?;
            if !entry.file_type().is_file() {
                continue;
            }
            let relative = pathdiff::diff_paths(entry.path(), run_dir)
                .unwrap_or_else(|| PathBuf::from(entry.file_name()));
            tar.append_path_with_name(entry.path(), &relative)
                .with_context(|| format!("Failed to add {} to bundle", entry.path().display()))?;
        }

        tar.into_inner()?.finish()?;
    }

    Ok(Some(archive_bytes))
}

/// 打包并写入目标文件，返回写入的字节数
pub fn write_bundle(run_dir: &Path, output_path: &Path) -> Result<Option<u64>> {
    let Some(bytes) = bundle_run_dir(run_dir)? else {
        return Ok(None);
    };
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(output_path, &bytes)
        .with_context(|| format!("Failed to write bundle {}", output_path.display()))?;
    tracing::info!(size_bytes = bytes.len(), "📦 已打包: {}", output_path.display());
    Ok(Some(bytes.len() as u64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use std::io::Read;
    use tempfile::TempDir;

    #[test]
    fn test_missing_dir_yields_none() {
        let temp_dir = TempDir::new().unwrap();
        assert!(bundle_run_dir(&temp_dir.path().join("missing")).unwrap().is_none());
    }

    #[test]
    fn test_bundle_uses_relative_paths() {
        let temp_dir = TempDir::new().unwrap();
        let run_dir = temp_dir.path().join("my_post");
        std::fs::create_dir_all(run_dir.join("images")).unwrap();
        std::fs::write(run_dir.join("blog.md"), "# Post\n").unwrap();
        std::fs::write(run_dir.join("images").join("diagram.png"), [0u8, 1, 2]).unwrap();

        let bytes = bundle_run_dir(&run_dir).unwrap().unwrap();

        let mut archive = tar::Archive::new(GzDecoder::new(&bytes[..]));
        let mut entries: Vec<(String, Vec<u8>)> = archive
            .entries()
            .unwrap()
            .map(|entry| {
                let mut entry = entry.unwrap();
                let path = entry.path().unwrap().to_string_lossy().replace('\\', "/");
                let mut content = Vec::new();
                entry.read_to_end(&mut content).unwrap();
                (path, content)
            })
            .collect();
        entries.sort();

        assert_eq!(
            entries,
            vec![
                ("blog.md".to_string(), b"# Post\n".to_vec()),
                ("images/diagram.png".to_string(), vec![0u8, 1, 2]),
            ]
        );
    }

    #[test]
    fn test_write_bundle() {
        let temp_dir = TempDir::new().unwrap();
        let run_dir = temp_dir.path().join("post");
        std::fs::create_dir_all(run_dir.join("images")).unwrap();
        std::fs::write(run_dir.join("blog.md"), "x").unwrap();

        let output = temp_dir.path().join("out").join("post.tar.gz");
        let written = write_bundle(&run_dir, &output).unwrap().unwrap();
        assert_eq!(std::fs::metadata(&output).unwrap().len(), written);
    }
}
