//! ICD loader lookup, shared by `build.rs`.

use std::path::{Path, PathBuf};

#[cfg(target_os = "windows")]
const LIBRARY_FILE_NAMES: &[&str] = &["OpenCL.lib"];

// libOpenCL.so.1 alone is what the runtime packages install (no dev symlink)
#[cfg(not(target_os = "windows"))]
const LIBRARY_FILE_NAMES: &[&str] = &["libOpenCL.so", "libOpenCL.dylib", "libOpenCL.so.1"];

/// The ICD loader found in a directory.
#[derive(Debug, PartialEq, Eq)]
pub struct Library {
    pub dir: PathBuf,
    pub file_name: &'static str,
}

impl Library {
    /// `cargo:rustc-link-lib` value, a versioned file name is linked verbatim
    pub fn link_lib_arg(&self) -> String {
        if self.file_name.ends_with(".so.1") {
            format!("dylib:+verbatim={}", self.file_name)
        } else {
            "dylib=OpenCL".to_string()
        }
    }
}

pub fn library_in(dir: &Path) -> Option<Library> {
    LIBRARY_FILE_NAMES
        .iter()
        .copied()
        .find(|file_name| dir.join(file_name).is_file())
        .map(|file_name| Library {
            dir: dir.to_path_buf(),
            file_name,
        })
}

#[cfg(all(test, not(target_os = "windows")))]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn test_library_in_runtime_only_install() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("libOpenCL.so.1")).unwrap();

        let library = library_in(dir.path()).unwrap();

        assert_eq!(library.file_name, "libOpenCL.so.1");
        assert_eq!(library.link_lib_arg(), "dylib:+verbatim=libOpenCL.so.1");
    }

    #[test]
    fn test_library_in_prefers_dev_symlink() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("libOpenCL.so.1")).unwrap();
        File::create(dir.path().join("libOpenCL.so")).unwrap();

        let library = library_in(dir.path()).unwrap();

        assert_eq!(library.file_name, "libOpenCL.so");
        assert_eq!(library.link_lib_arg(), "dylib=OpenCL");
    }

    #[test]
    fn test_library_in_missing() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("libOpenCL.so.2.0.0.debug")).unwrap();

        assert_eq!(library_in(dir.path()), None);
    }
}
