use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::{Arch, BuildError, Result};

//=== Target resolution ===

/// Detect the MinHook architecture for the crate being built.
pub fn detect_arch() -> Result<Arch> {
    let arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_else(|_| env::consts::ARCH.into());
    Arch::from_target_arch(&arch)
}

//=== Version resolution ===

/// Resolve the source release to fetch, honoring MINHOOK_VERSION.
pub fn resolve_version(default: &str) -> String {
    match env::var("MINHOOK_VERSION") {
        Ok(version) if !version.trim().is_empty() => version.trim().to_string(),
        _ => default.to_string(),
    }
}

/// GitHub archive URL for a tagged MinHook release.
pub fn source_archive_url(version: &str) -> String {
    let tag = version.strip_prefix('v').unwrap_or(version);
    format!("https://github.com/TsudaKageyu/minhook/archive/refs/tags/v{tag}.tar.gz")
}

//=== Download ===

/// Download and extract a MinHook source archive into `out_dir`.
///
/// This helper uses `curl` + `tar` under the hood (PowerShell for the download
/// on Windows hosts, where `tar` ships with the OS).
pub fn download_source<P: AsRef<Path>>(version: &str, out_dir: P) -> Result<PathBuf> {
    let out_dir = out_dir.as_ref();
    fs::create_dir_all(out_dir)
        .map_err(|e| BuildError::new(format!("failed to create source dir: {e}")))?;

    let tag = version.strip_prefix('v').unwrap_or(version);
    let archive = out_dir.join(format!("minhook-{tag}.tar.gz"));
    let url = source_archive_url(version);

    if cfg!(windows) {
        let dl = format!(
            "Invoke-WebRequest -Uri '{}' -OutFile '{}'",
            url,
            archive.display()
        );
        run(Command::new("powershell").args(["-NoProfile", "-Command", &dl]))?;
    } else {
        run(Command::new("curl")
            .args(["-fL", "-o"])
            .arg(&archive)
            .arg(&url))?;
    }

    run(Command::new("tar")
        .arg("-xzf")
        .arg(&archive)
        .arg("-C")
        .arg(out_dir))?;

    Ok(out_dir.to_path_buf())
}

fn run(cmd: &mut Command) -> Result<()> {
    let status = cmd
        .status()
        .map_err(|e| BuildError::new(format!("failed to run {:?}: {e}", cmd)))?;
    if !status.success() {
        return Err(BuildError::new(format!("command failed ({:?})", cmd)));
    }
    Ok(())
}
