//! File system project repository

use crate::error::{Result, VocabError};
use crate::infrastructure::config::{Manifest, MANIFEST_FILE};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Environment variable pointing at a manifest file
pub const CONFIG_ENV: &str = "VOCABGEN_CONFIG";

/// Abstract repository for dictionary sources and generated outputs
pub trait ProjectRepository {
    /// Get the directory relative paths resolve against
    fn root(&self) -> &Path;

    /// Load the project manifest
    fn load_manifest(&self) -> Result<Manifest>;

    /// Check if the root holds a vocabgen.toml
    fn is_initialized(&self) -> bool;

    /// Write a new vocabgen.toml
    fn initialize(&self, manifest: &Manifest) -> Result<()>;

    /// Read a dictionary source file
    fn read_source(&self, path: &Path) -> Result<String>;

    /// Write a generated file, replacing any previous one
    fn write_output(&self, path: &Path, content: &str) -> Result<()>;
}

/// File system implementation of ProjectRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
    /// None when the project runs on the built-in manifest
    pub manifest_path: Option<PathBuf>,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository {
            root,
            manifest_path: None,
        }
    }

    /// Create a repository around an explicit manifest file
    pub fn with_manifest(manifest_path: PathBuf) -> Result<Self> {
        if !manifest_path.is_file() {
            return Err(VocabError::ManifestNotFound(manifest_path));
        }

        let root = manifest_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(FileSystemRepository {
            root,
            manifest_path: Some(manifest_path),
        })
    }

    /// Locate the project manifest.
    /// An explicit path wins, then VOCABGEN_CONFIG, then discovery from the
    /// current directory.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::with_manifest(path.to_path_buf());
        }

        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Self::with_manifest(PathBuf::from(path));
        }

        let current_dir = std::env::current_dir()?;
        Ok(Self::discover_from(&current_dir))
    }

    /// Walk up from `start` looking for vocabgen.toml.
    /// Falls back to the built-in manifest rooted at `start`.
    pub fn discover_from(start: &Path) -> Self {
        let mut current = start.to_path_buf();

        loop {
            let candidate = current.join(MANIFEST_FILE);
            if candidate.is_file() {
                return FileSystemRepository {
                    root: current,
                    manifest_path: Some(candidate),
                };
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    log::info!(
                        "No {} found above {}; using built-in manifest",
                        MANIFEST_FILE,
                        start.display()
                    );
                    return FileSystemRepository::new(start.to_path_buf());
                }
            }
        }
    }

    /// Resolve a manifest path against the root
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// Expand inputs to the list of files to read, in merge order.
    /// Directories contribute every non-hidden file beneath them, sorted by path.
    pub fn expand_inputs(&self, inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for input in inputs {
            let path = self.resolve(input);
            if !path.is_dir() {
                files.push(path);
                continue;
            }

            let walker = WalkDir::new(&path)
                .follow_links(true)
                .sort_by_file_name()
                .into_iter()
                .filter_entry(|entry| {
                    entry.depth() == 0
                        || entry
                            .file_name()
                            .to_str()
                            .is_none_or(|name| !name.starts_with('.'))
                });

            let mut found = 0;
            for entry in walker {
                let entry = entry.map_err(|e| VocabError::Read {
                    path: path.clone(),
                    source: e.into(),
                })?;
                if entry.file_type().is_file() {
                    files.push(entry.into_path());
                    found += 1;
                } else if !entry.file_type().is_dir() {
                    log::debug!("Skipping non-regular file {}", entry.path().display());
                }
            }

            if found == 0 {
                log::warn!("Input directory {} holds no files", path.display());
            }
        }

        Ok(files)
    }
}

impl ProjectRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_manifest(&self) -> Result<Manifest> {
        match &self.manifest_path {
            Some(path) => Manifest::load_from_file(path),
            None => Ok(Manifest::builtin()),
        }
    }

    fn is_initialized(&self) -> bool {
        self.root.join(MANIFEST_FILE).is_file()
    }

    fn initialize(&self, manifest: &Manifest) -> Result<()> {
        if self.is_initialized() {
            return Err(VocabError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        manifest.save_to_dir(&self.root)
    }

    fn read_source(&self, path: &Path) -> Result<String> {
        let path = self.resolve(path);
        fs::read_to_string(&path).map_err(|e| VocabError::Read { path, source: e })
    }

    fn write_output(&self, path: &Path, content: &str) -> Result<()> {
        let path = self.resolve(path);
        let write_err = |source: std::io::Error| VocabError::Write {
            path: path.clone(),
            source,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(write_err)?;
            }
        }

        let tmp_name = format!(
            "{}.vocabgen-tmp-{}",
            path.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("dictionary"),
            std::process::id()
        );
        let tmp_path = path.with_file_name(tmp_name);

        // rename replaces the destination in one step; drop the temp file on failure
        if let Err(e) = fs::write(&tmp_path, content).and_then(|_| fs::rename(&tmp_path, &path)) {
            let _ = fs::remove_file(&tmp_path);
            return Err(write_err(e));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::sync::{Mutex, OnceLock};
    use tempfile::TempDir;

    fn env_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    struct EnvVarRestore {
        key: &'static str,
        previous: Option<OsString>,
    }

    impl EnvVarRestore {
        fn capture(key: &'static str) -> Self {
            Self {
                key,
                previous: std::env::var_os(key),
            }
        }
    }

    impl Drop for EnvVarRestore {
        fn drop(&mut self) {
            if let Some(value) = &self.previous {
                std::env::set_var(self.key, value);
            } else {
                std::env::remove_var(self.key);
            }
        }
    }

    #[test]
    fn test_discover_from_nested_directory() {
        let temp = TempDir::new().unwrap();
        Manifest::builtin().save_to_dir(temp.path()).unwrap();
        let nested = temp.path().join("data").join("es");
        fs::create_dir_all(&nested).unwrap();

        let repo = FileSystemRepository::discover_from(&nested);
        assert_eq!(repo.root, temp.path());
        assert_eq!(repo.manifest_path, Some(temp.path().join(MANIFEST_FILE)));
    }

    #[test]
    fn test_discover_falls_back_to_builtin() {
        let temp = TempDir::new().unwrap();

        let repo = FileSystemRepository::discover_from(temp.path());
        assert_eq!(repo.root, temp.path());
        assert!(repo.manifest_path.is_none());

        let manifest = repo.load_manifest().unwrap();
        assert_eq!(manifest.languages[0].code, "es");
    }

    #[test]
    fn test_discover_uses_env_var() {
        let _guard = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture(CONFIG_ENV);

        let temp = TempDir::new().unwrap();
        Manifest::builtin().save_to_dir(temp.path()).unwrap();
        std::env::set_var(CONFIG_ENV, temp.path().join(MANIFEST_FILE));

        let repo = FileSystemRepository::discover(None).unwrap();
        assert_eq!(repo.root, temp.path());
    }

    #[test]
    fn test_discover_explicit_wins_over_env() {
        let _guard = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture(CONFIG_ENV);

        let temp = TempDir::new().unwrap();
        std::env::set_var(CONFIG_ENV, temp.path().join("missing.toml"));
        Manifest::builtin().save_to_dir(temp.path()).unwrap();

        let explicit = temp.path().join(MANIFEST_FILE);
        let repo = FileSystemRepository::discover(Some(&explicit)).unwrap();
        assert_eq!(repo.manifest_path, Some(explicit));
    }

    #[test]
    fn test_with_manifest_missing() {
        let temp = TempDir::new().unwrap();
        let result = FileSystemRepository::with_manifest(temp.path().join("nope.toml"));
        match result.unwrap_err() {
            VocabError::ManifestNotFound(_) => {}
            other => panic!("Expected ManifestNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_initialize_twice_fails() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        assert!(!repo.is_initialized());
        repo.initialize(&Manifest::builtin()).unwrap();
        assert!(repo.is_initialized());
        assert!(repo.initialize(&Manifest::builtin()).is_err());
    }

    #[test]
    fn test_expand_inputs_directory_sorted() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("data");
        fs::create_dir_all(dir.join("sub")).unwrap();
        fs::write(dir.join("MM.verb"), "").unwrap();
        fs::write(dir.join("MM.adj"), "").unwrap();
        fs::write(dir.join(".hidden"), "").unwrap();
        fs::write(dir.join("sub").join("MM.nom"), "").unwrap();

        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        let files = repo
            .expand_inputs(&[PathBuf::from("data"), PathBuf::from("extra.txt")])
            .unwrap();

        assert_eq!(
            files,
            vec![
                dir.join("MM.adj"),
                dir.join("MM.verb"),
                dir.join("sub").join("MM.nom"),
                temp.path().join("extra.txt"),
            ]
        );
    }

    #[test]
    fn test_read_source_missing() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        match repo.read_source(Path::new("data/es/MM.adj")).unwrap_err() {
            VocabError::Read { path, .. } => {
                assert_eq!(path, temp.path().join("data/es/MM.adj"))
            }
            other => panic!("Expected Read error, got {:?}", other),
        }
    }

    #[test]
    fn test_write_output_creates_parents_and_truncates() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        let output = Path::new("es/dictionary.rs");

        repo.write_output(output, "first version, longer").unwrap();
        repo.write_output(output, "second").unwrap();

        let content = fs::read_to_string(temp.path().join(output)).unwrap();
        assert_eq!(content, "second");
        let leftovers: Vec<_> = fs::read_dir(temp.path().join("es")).unwrap().collect();
        assert_eq!(leftovers.len(), 1);
    }

    #[test]
    fn test_write_output_failure_removes_temp_file() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        // A non-empty directory in place of the output makes the rename fail
        let blocked = temp.path().join("es").join("dictionary.rs");
        fs::create_dir_all(&blocked).unwrap();
        fs::write(blocked.join("keep.txt"), "kept").unwrap();

        match repo
            .write_output(Path::new("es/dictionary.rs"), "content")
            .unwrap_err()
        {
            VocabError::Write { path, .. } => assert_eq!(path, blocked),
            other => panic!("Expected Write error, got {:?}", other),
        }

        let names: Vec<String> = fs::read_dir(temp.path().join("es"))
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["dictionary.rs".to_string()]);
        assert_eq!(
            fs::read_to_string(blocked.join("keep.txt")).unwrap(),
            "kept"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_expand_inputs_follows_symlinks() {
        let temp = TempDir::new().unwrap();
        let shared = temp.path().join("shared");
        let dir = temp.path().join("data");
        fs::create_dir_all(&shared).unwrap();
        fs::create_dir_all(&dir).unwrap();
        fs::write(shared.join("MM.nom"), "casa casa NCFS000\n").unwrap();
        fs::write(dir.join("MM.adj"), "").unwrap();
        std::os::unix::fs::symlink(shared.join("MM.nom"), dir.join("MM.nom")).unwrap();

        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        let files = repo.expand_inputs(&[PathBuf::from("data")]).unwrap();

        assert_eq!(files, vec![dir.join("MM.adj"), dir.join("MM.nom")]);
        assert_eq!(
            repo.read_source(&files[1]).unwrap(),
            "casa casa NCFS000\n"
        );
    }
}
