use std::path::{Path, PathBuf};

#[cfg(feature = "download-source")]
mod source;

#[cfg(feature = "download-source")]
pub use source::{detect_arch, download_source, resolve_version, source_archive_url};

#[cfg(feature = "build-utils")]
pub use pkg_config::Library as PkgConfigLibrary;

//=== Error types ===

#[derive(Debug)]
pub struct BuildError {
    message: String,
}

impl BuildError {
    fn new<M: AsRef<str>>(msg: M) -> Self {
        Self {
            message: msg.as_ref().to_string(),
        }
    }
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for BuildError {}

type Result<T> = std::result::Result<T, BuildError>;

//=== Build helpers ===

#[cfg(feature = "build-utils")]
pub fn probe_pkg(name: &str) -> PkgConfigLibrary {
    pkg_config::Config::new()
        .probe(name)
        .unwrap_or_else(|_| panic!("missing pkg-config dependency: {name}"))
}

/// Architectures MinHook can patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
    X86,
    X64,
}

impl Arch {
    /// Map a `CARGO_CFG_TARGET_ARCH` value onto a MinHook architecture.
    pub fn from_target_arch(arch: &str) -> Result<Arch> {
        match arch {
            "x86" | "i386" | "i586" | "i686" => Ok(Arch::X86),
            "x86_64" => Ok(Arch::X64),
            other => Err(BuildError::new(format!(
                "MinHook does not support target architecture: {other}"
            ))),
        }
    }

    /// Suffix used by MinHook's prebuilt binaries.
    pub fn suffix(self) -> &'static str {
        match self {
            Arch::X86 => "x86",
            Arch::X64 => "x64",
        }
    }

    /// Instruction decoder source for this architecture, relative to the source root.
    pub fn hde_source(self) -> &'static str {
        match self {
            Arch::X86 => "src/hde/hde32.c",
            Arch::X64 => "src/hde/hde64.c",
        }
    }
}

/// Name of the prebuilt import library / dll, without extension.
pub fn library_name(arch: Arch) -> String {
    format!("MinHook.{}", arch.suffix())
}

/// A MinHook distribution found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    /// A source tree with `include/MinHook.h` and `src/*.c`.
    Source { root: PathBuf },
    /// A prebuilt import library (plus the dll it refers to).
    Prebuilt { lib_dir: PathBuf, lib_name: String },
}

impl Layout {
    pub fn include_dir(&self) -> Option<PathBuf> {
        match self {
            Layout::Source { root } => Some(root.join("include")),
            Layout::Prebuilt { .. } => None,
        }
    }
}

//=== Layout detection ===

/// Detect a MinHook source tree or prebuilt distribution under `dir`.
///
/// Release archives extract into a versioned subdirectory, so direct children
/// of `dir` are searched as well.
pub fn find_layout<P: AsRef<Path>>(dir: P, arch: Arch) -> Option<Layout> {
    let dir = dir.as_ref();
    if let Some(layout) = layout_at(dir, arch) {
        return Some(layout);
    }

    let mut children: Vec<PathBuf> = std::fs::read_dir(dir)
        .ok()?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    children.sort();

    children.iter().find_map(|child| layout_at(child, arch))
}

fn layout_at(dir: &Path, arch: Arch) -> Option<Layout> {
    if is_source_tree(dir) {
        return Some(Layout::Source {
            root: dir.to_path_buf(),
        });
    }

    let lib_name = library_name(arch);
    let candidates = [
        format!("{lib_name}.lib"),
        format!("lib{lib_name}.dll.a"),
        format!("lib{lib_name}.a"),
    ];

    for lib_dir in [dir.to_path_buf(), dir.join("bin"), dir.join("lib")] {
        if candidates.iter().any(|name| lib_dir.join(name).is_file()) {
            return Some(Layout::Prebuilt {
                lib_dir,
                lib_name: lib_name.clone(),
            });
        }
    }

    None
}

fn is_source_tree(dir: &Path) -> bool {
    dir.join("include").join("MinHook.h").is_file() && dir.join("src").join("hook.c").is_file()
}

/// C sources that make up the library for `arch`.
pub fn source_files<P: AsRef<Path>>(root: P, arch: Arch) -> Vec<PathBuf> {
    let root = root.as_ref();
    ["src/buffer.c", "src/hook.c", "src/trampoline.c", arch.hde_source()]
        .iter()
        .map(|file| root.join(file))
        .collect()
}

//=== Metadata helpers ===

#[derive(Debug, Default)]
pub struct MinHookMetadata {
    pub version: Option<String>,
}

/// Read `[package.metadata.minhook]` from a crate manifest.
///
/// Returns `None` when the manifest does not exist.
pub fn read_minhook_metadata<P: AsRef<Path>>(manifest: P) -> Option<Result<MinHookMetadata>> {
    let manifest_path = if manifest.as_ref().is_dir() {
        manifest.as_ref().join("Cargo.toml")
    } else {
        manifest.as_ref().to_path_buf()
    };

    if !manifest_path.is_file() {
        return None;
    }

    let manifest_src = match std::fs::read_to_string(&manifest_path) {
        Ok(src) => src,
        Err(e) => {
            return Some(Err(BuildError::new(format!(
                "failed to read Cargo.toml: {e}"
            ))));
        }
    };
    let manifest: toml::Value = match toml::from_str(&manifest_src) {
        Ok(value) => value,
        Err(e) => {
            return Some(Err(BuildError::new(format!(
                "failed to parse Cargo.toml: {e}"
            ))));
        }
    };

    let Some(package) = manifest.get("package") else {
        return Some(Err(BuildError::new("missing [package] section")));
    };

    let meta = package.get("metadata").and_then(|m| m.get("minhook"));
    let version = match meta.and_then(|m| m.get("version")) {
        None => None,
        Some(value) => match value.as_str() {
            Some(version) => Some(version.to_string()),
            None => {
                return Some(Err(BuildError::new(
                    "[package.metadata.minhook].version must be a string",
                )));
            }
        },
    };

    Some(Ok(MinHookMetadata { version }))
}
