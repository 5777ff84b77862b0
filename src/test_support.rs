use std::path::Path;
use tempfile::TempDir;

/// Create `files` (forward-slash relative paths) under `root` with dummy content.
pub(crate) fn write_tree(root: &Path, files: &[&str]) {
    for file in files {
        let path = root.join(file);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, "// source\n").unwrap();
    }
}

/// Create a project directory with a `src/main/java` tree holding `files`.
pub(crate) fn create_test_project(files: &[&str]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    write_tree(&temp_dir.path().join("src/main/java"), files);
    temp_dir
}

/// Write a manifest at the conventional `target/classes/META-INF/MANIFEST.MF` location.
pub(crate) fn write_manifest(project_dir: &Path, content: &str) {
    let path = project_dir.join("target/classes/META-INF/MANIFEST.MF");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}
