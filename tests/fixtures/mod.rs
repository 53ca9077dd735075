use std::path::PathBuf;

/// Path to a metadata snapshot under `tests/fixtures/`.
pub fn get_test_fixture_path(fixture_name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(fixture_name)
}

/// Snapshot of the `tests.dex` fixture package.
pub fn tests_dex_snapshot() -> PathBuf {
    get_test_fixture_path("tests_dex.json")
}
