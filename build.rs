use std::env;
use std::path::{Path, PathBuf};

use minhook_bind_build::{
    Arch, Layout, detect_arch, download_source, find_layout, probe_pkg, read_minhook_metadata,
    resolve_version, source_files,
};

// === Configuration ===
// Used when neither MINHOOK_VERSION nor [package.metadata.minhook] names a release.
const DEFAULT_MINHOOK_VERSION: &str = "1.3.3";

// === Build entrypoint ===
fn main() {
    // Build script change tracking.
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=Cargo.toml");
    println!("cargo:rerun-if-env-changed=MINHOOK_DIR");
    println!("cargo:rerun-if-env-changed=MINHOOK_PKG_CONFIG");
    println!("cargo:rerun-if-env-changed=MINHOOK_VERSION");
    println!("cargo:rerun-if-env-changed=MINHOOK_SKIP_NATIVE_BUILD");
    println!("cargo:rerun-if-env-changed=DOCS_RS");
    println!("cargo:rerun-if-env-changed=CARGO_TARGET_DIR");
    println!("cargo:rustc-check-cfg=cfg(minhook_stub)");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());

    // MinHook only exists for Windows; everything else gets the stub backend.
    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_else(|_| env::consts::OS.to_string());
    if target_os != "windows" {
        use_stub();
        return;
    }

    // docs.rs has no network access and does not need native code.
    if env::var_os("DOCS_RS").is_some() || env::var_os("MINHOOK_SKIP_NATIVE_BUILD").is_some() {
        use_stub();
        return;
    }

    let arch = match detect_arch() {
        Ok(arch) => arch,
        Err(err) => {
            println!("cargo:warning={err}; building without MinHook");
            use_stub();
            return;
        }
    };

    // Allow power users to point at an existing MinHook tree directly.
    if let Some(dir) = env::var_os("MINHOOK_DIR") {
        build_with_dir(&PathBuf::from(dir), arch);
        return;
    }

    if let Some(name) = env::var_os("MINHOOK_PKG_CONFIG") {
        let name = name.to_string_lossy();
        let library = probe_pkg(&name);
        println!(
            "cargo:rustc-env=MINHOOK_BIND_NATIVE_VERSION={}",
            library.version
        );
        return;
    }

    // Download the tagged sources by default to keep setup simple.
    let version = resolve_version(&manifest_version(&manifest_dir));
    if let Some(root) = try_download_source(&manifest_dir, &version, arch) {
        compile_source(&root, arch);
        println!("cargo:rustc-env=MINHOOK_BIND_NATIVE_VERSION={version}");
        return;
    }

    panic!(
        "failed to download MinHook {version} sources; set MINHOOK_DIR to a MinHook source tree or prebuilt distribution"
    );
}

fn use_stub() {
    println!("cargo:rustc-cfg=minhook_stub");
}

fn manifest_version(manifest_dir: &Path) -> String {
    match read_minhook_metadata(manifest_dir) {
        Some(Ok(meta)) => meta
            .version
            .unwrap_or_else(|| DEFAULT_MINHOOK_VERSION.to_string()),
        Some(Err(err)) => {
            println!("cargo:warning=ignoring [package.metadata.minhook]: {err}");
            DEFAULT_MINHOOK_VERSION.to_string()
        }
        None => DEFAULT_MINHOOK_VERSION.to_string(),
    }
}

//=== Source download ===

fn try_download_source(manifest_dir: &Path, version: &str, arch: Arch) -> Option<PathBuf> {
    let target_dir = env::var_os("CARGO_TARGET_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| manifest_dir.join("target"));
    let source_dir = target_dir.join("minhook-src").join(version);

    if let Some(Layout::Source { root }) = find_layout(&source_dir, arch) {
        return Some(root);
    }

    if let Err(err) = download_source(version, &source_dir) {
        println!("cargo:warning=MinHook download failed for {version}: {err}");
        return None;
    }

    match find_layout(&source_dir, arch) {
        Some(Layout::Source { root }) => {
            println!(
                "cargo:warning=using MinHook {version} sources from {}",
                root.display()
            );
            Some(root)
        }
        _ => {
            println!(
                "cargo:warning=MinHook download succeeded but expected files are missing in {}",
                source_dir.display()
            );
            None
        }
    }
}

// === Native build ===
fn build_with_dir(dir: &Path, arch: Arch) {
    match find_layout(dir, arch) {
        Some(Layout::Source { root }) => compile_source(&root, arch),
        Some(Layout::Prebuilt { lib_dir, lib_name }) => {
            let import_lib = lib_dir.join(format!("{lib_name}.lib"));
            if import_lib.exists() {
                println!("cargo:rerun-if-changed={}", import_lib.display());
            }
            println!("cargo:rustc-link-search=native={}", lib_dir.display());
            println!("cargo:rustc-link-lib=dylib={lib_name}");
            // The dll is resolved by the loader at runtime, not by cargo.
            println!(
                "cargo:warning=linking {lib_name} from {}; {lib_name}.dll must be next to the executable",
                lib_dir.display()
            );
        }
        None => panic!(
            "MINHOOK_DIR ({}) contains neither a MinHook source tree nor {}.lib",
            dir.display(),
            minhook_bind_build::library_name(arch)
        ),
    }
}

fn compile_source(root: &Path, arch: Arch) {
    let header = root.join("include").join("MinHook.h");
    println!("cargo:rerun-if-changed={}", header.display());

    let files = source_files(root, arch);
    for file in &files {
        println!("cargo:rerun-if-changed={}", file.display());
    }

    cc::Build::new()
        .files(&files)
        .include(root.join("include"))
        .warnings(false)
        .compile("minhook");
}
