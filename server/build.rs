use std::fs;
use std::path::{Path, PathBuf};

fn workspace_root() -> PathBuf {
    let manifest_dir = std::env::var_os("CARGO_MANIFEST_DIR").map_or_else(PathBuf::new, PathBuf::from);
    manifest_dir.parent().map_or(manifest_dir.clone(), Path::to_path_buf)
}

fn copy_if_present(source: &Path, dest: &Path, label: &str) {
    if !source.exists() {
        println!("cargo:warning={label} not found at {}", source.display());
        return;
    }
    match fs::copy(source, dest) {
        Ok(_) => println!("Copied {label} from {} to {}", source.display(), dest.display()),
        Err(err) => println!("cargo:warning=Failed to copy {label}: {err}"),
    }
}

fn main() {
    let root = workspace_root();
    println!("cargo:rerun-if-changed={}", root.join("style/tailwind.css").display());
    println!("cargo:rerun-if-changed={}", root.join("public/favicon.svg").display());

    let site_pkg_dir = root.join("target/site/pkg");
    if let Err(err) = fs::create_dir_all(&site_pkg_dir) {
        println!("cargo:warning=Failed to create {}: {err}", site_pkg_dir.display());
        return;
    }

    copy_if_present(
        &root.join("target/tmp/tailwind.css"),
        &site_pkg_dir.join("sentinex.css"),
        "stylesheet",
    );
    copy_if_present(
        &root.join("public/favicon.svg"),
        &root.join("target/site/favicon.svg"),
        "favicon",
    );

    // cargo-leptos emits `sentinex.wasm`; the JS wrapper asks for `sentinex_bg.wasm`.
    let wasm_link = site_pkg_dir.join("sentinex_bg.wasm");
    if wasm_link.exists() {
        if let Err(err) = fs::remove_file(&wasm_link) {
            println!("cargo:warning=Failed to remove stale {}: {err}", wasm_link.display());
            return;
        }
    }

    #[cfg(unix)]
    let linked = std::os::unix::fs::symlink("sentinex.wasm", &wasm_link);
    #[cfg(windows)]
    let linked = std::os::windows::fs::symlink_file("sentinex.wasm", &wasm_link);

    #[cfg(any(unix, windows))]
    match linked {
        Ok(()) => println!("Created WASM symlink sentinex_bg.wasm -> sentinex.wasm"),
        Err(err) => println!("cargo:warning=Failed to create WASM symlink: {err}"),
    }
}
