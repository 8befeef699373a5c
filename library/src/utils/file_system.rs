use std::fs;
use std::io;
use std::path::Path;

pub fn ensure_parent_folders_exist(file_path: impl AsRef<Path>) -> io::Result<()> {
    match file_path.as_ref().parent() {
        Some(parent) if false == parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_nested_folders_created() {
        let root = tempdir().unwrap();
        let file = root.path().join("a").join("b").join("frame.png");

        ensure_parent_folders_exist(&file).unwrap();

        assert!(root.path().join("a").join("b").is_dir());
        assert!(false == file.exists());
    }

    #[test]
    fn test_bare_file_name() {
        assert!(ensure_parent_folders_exist("frame.png").is_ok());
    }
}
