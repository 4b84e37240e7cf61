//! Build version reporting.

/// Returns the version string logged at startup: `pkg_version (git_hash)`.
///
/// The hash reads `unknown` when the build had no git metadata.
#[must_use]
pub fn build_version() -> String {
    let pkg_version = env!("CARGO_PKG_VERSION");
    let git_hash = option_env!("VERGEN_GIT_SHA").unwrap_or("unknown");

    format!("{pkg_version} ({git_hash})")
}
