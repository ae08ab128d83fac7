fn main() {
    // Build metadata surfaced by the greeting page and the info endpoint.
    // Git lookups fall back to "unknown" so source tarballs (no .git) build.
    println!(
        "cargo:rustc-env=GIT_COMMIT_SHORT={}",
        build_data::get_git_commit_short().unwrap_or_else(|_| "unknown".to_string())
    );
    println!(
        "cargo:rustc-env=GIT_DIRTY={}",
        build_data::get_git_dirty()
            .map(|dirty| dirty.to_string())
            .unwrap_or_else(|_| "unknown".to_string())
    );
    build_data::set_RUSTC_VERSION();
}
