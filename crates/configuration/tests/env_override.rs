//! Kept apart from `load.rs`: cargo runs each test file as its own process, so
//! the variables set here cannot leak into the file-only loading tests.

use configuration::{load_config_from, ENV_PREFIX};
use core_types::{DeltaRounding, TransitionRange};
use std::io::Write;

const RANGE_VAR: &str = "HOUSE_INSIGHTS__GROWTH__RANGE";
const CUTOFF_VAR: &str = "HOUSE_INSIGHTS__HYPOTHESES__OLD_HOUSE_CUTOFF_YEAR";

#[test]
fn environment_overrides_file_settings() {
    assert!(RANGE_VAR.starts_with(ENV_PREFIX));

    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(b"[growth]\nrange = \"observed\"\n").unwrap();
    file.write_all(b"[hypotheses]\nold_house_cutoff_year = 1960\n").unwrap();

    // SAFETY: this is the only test in this binary, so no other thread reads the
    // environment concurrently.
    unsafe {
        std::env::set_var(RANGE_VAR, "all");
        std::env::set_var(CUTOFF_VAR, "1940");
    }
    let result = load_config_from(file.path());
    unsafe {
        std::env::remove_var(RANGE_VAR);
        std::env::remove_var(CUTOFF_VAR);
    }

    let config = result.unwrap();
    assert_eq!(config.growth.range, TransitionRange::All);
    assert_eq!(config.hypotheses.old_house_cutoff_year, 1940);
    // Settings no variable names keep their file or default values.
    assert_eq!(config.growth.rounding, DeltaRounding::PerDelta);
    assert_eq!(config.hypotheses.poor_condition_max, 2);
}
