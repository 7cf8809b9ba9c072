//! # 文件收集器
//!
//! 收集输入目录下（不递归）扩展名为 `.heic` 的文件。
//!
//! ## 功能
//! - 扩展名匹配不区分大小写 (`.heic`, `.HEIC`, `.Heic` ...)
//! - 只看目录第一层，跟随指向文件的符号链接
//! - 按路径排序，保证进度输出顺序稳定
//! - 目录不可读时返回错误，单个条目读取失败时警告并跳过
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 调用
//! - 使用 `walkdir` 遍历目录
//! - 使用 `utils/output.rs` 打印警告

use crate::error::{Heic2PngError, Result};
use crate::utils::output;

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// HEIC 文件收集器
pub struct HeicCollector {
    /// 输入目录
    input: PathBuf,
}

impl HeicCollector {
    /// 创建新的文件收集器
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
        }
    }

    /// 收集所有匹配的文件（已排序）
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        // 先确认目录本身可读，否则会被误报为"没有文件"
        fs::read_dir(&self.input).map_err(|e| Heic2PngError::DirectoryReadError {
            path: self.input.display().to_string(),
            source: e,
        })?;

        let walker = WalkDir::new(&self.input)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true);

        let mut files = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    output::print_warning(&format!("Skipping unreadable entry: {}", e));
                    continue;
                }
            };
            if entry.file_type().is_file() && Self::is_heic(entry.path()) {
                files.push(entry.into_path());
            }
        }

        files.sort();
        Ok(files)
    }

    /// 文件名是否以 `.heic` 结尾（不区分大小写）
    fn is_heic(path: &Path) -> bool {
        path.file_name()
            .map(|name| name.to_string_lossy().to_ascii_lowercase().ends_with(".heic"))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn names(files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_is_heic() {
        assert!(HeicCollector::is_heic(Path::new("a.heic")));
        assert!(HeicCollector::is_heic(Path::new("b.HEIC")));
        assert!(HeicCollector::is_heic(Path::new("c.HeIc")));
        assert!(!HeicCollector::is_heic(Path::new("c.txt")));
        assert!(!HeicCollector::is_heic(Path::new("d.heif")));
        assert!(!HeicCollector::is_heic(Path::new("heic")));
    }

    #[test]
    fn test_collect_filters_by_extension() {
        let dir = TempDir::new().unwrap();
        for name in ["a.heic", "b.HEIC", "c.txt"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }

        let files = HeicCollector::new(dir.path()).collect().unwrap();
        assert_eq!(names(&files), vec!["a.heic", "b.HEIC"]);
    }

    #[test]
    fn test_collect_is_not_recursive() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("top.heic"), b"x").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("deep.heic"), b"x").unwrap();
        // 名字像 HEIC 的目录不算文件
        fs::create_dir(dir.path().join("folder.heic")).unwrap();

        let files = HeicCollector::new(dir.path()).collect().unwrap();
        assert_eq!(names(&files), vec!["top.heic"]);
    }

    #[test]
    fn test_collect_is_sorted() {
        let dir = TempDir::new().unwrap();
        for name in ["IMG_0003.heic", "IMG_0001.heic", "IMG_0002.heic"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }

        let files = HeicCollector::new(dir.path()).collect().unwrap();
        assert_eq!(
            names(&files),
            vec!["IMG_0001.heic", "IMG_0002.heic", "IMG_0003.heic"]
        );
    }

    #[test]
    fn test_missing_directory_is_read_error() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            HeicCollector::new(dir.path().join("missing")).collect(),
            Err(Heic2PngError::DirectoryReadError { .. })
        ));
    }

    #[test]
    fn test_file_as_input_is_read_error() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.heic");
        fs::write(&file, b"x").unwrap();

        assert!(matches!(
            HeicCollector::new(&file).collect(),
            Err(Heic2PngError::DirectoryReadError { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_directory_is_read_error() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let locked = dir.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::write(locked.join("a.heic"), b"x").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // root 不受权限位限制，此时无法构造不可读目录
        let readable = fs::read_dir(&locked).is_ok();
        let result = HeicCollector::new(&locked).collect();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        if readable {
            assert_eq!(result.unwrap().len(), 1);
        } else {
            assert!(matches!(
                result,
                Err(Heic2PngError::DirectoryReadError { .. })
            ));
        }
    }
}
