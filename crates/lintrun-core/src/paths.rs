use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Filename constants
// ---------------------------------------------------------------------------

/// Venv directory names probed in order when no override is configured.
pub const VENV_DIRS: &[&str] = &["venv", ".venv"];

pub const CONFIG_FILE: &str = ".lintrun.yaml";

#[cfg(windows)]
pub const VENV_BIN_DIR: &str = "Scripts";
#[cfg(not(windows))]
pub const VENV_BIN_DIR: &str = "bin";

#[cfg(windows)]
pub const PYTHON_EXE: &str = "python.exe";
#[cfg(not(windows))]
pub const PYTHON_EXE: &str = "python";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn venv_bin_dir(venv: &Path) -> PathBuf {
    venv.join(VENV_BIN_DIR)
}

pub fn venv_python(venv: &Path) -> PathBuf {
    venv_bin_dir(venv).join(PYTHON_EXE)
}

/// Name of an executable inside the venv bin dir, with the platform suffix.
pub fn venv_exe(venv: &Path, name: &str) -> PathBuf {
    #[cfg(windows)]
    let name = format!("{name}.exe");
    venv_bin_dir(venv).join(name)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_helpers() {
        let root = Path::new("/tmp/proj");
        assert_eq!(config_path(root), PathBuf::from("/tmp/proj/.lintrun.yaml"));

        let venv = root.join("venv");
        #[cfg(not(windows))]
        {
            assert_eq!(venv_bin_dir(&venv), PathBuf::from("/tmp/proj/venv/bin"));
            assert_eq!(
                venv_python(&venv),
                PathBuf::from("/tmp/proj/venv/bin/python")
            );
            assert_eq!(
                venv_exe(&venv, "flake8"),
                PathBuf::from("/tmp/proj/venv/bin/flake8")
            );
        }
    }

    #[test]
    fn venv_candidates_are_ordered() {
        assert_eq!(VENV_DIRS, &["venv", ".venv"]);
    }
}
