// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared fixtures for integration tests.

use std::fs;
use std::path::{Path, PathBuf};

/// A small document covering globals and two instances.
#[allow(dead_code)]
pub const SAMPLE_CONF: &str = "\
# BlueStacks configuration
bst.country=\"US\"
bst.system_ram=16384
bst.enable_adb_access=\"1\"
bst.instance.Pie64.display_name=\"BlueStacks App Player\"
bst.instance.Pie64.fb_width=\"1280\"
bst.instance.Pie64.fb_height=\"720\"
bst.instance.Pie64.dpi=\"240\"
bst.instance.Rvc64.fb_width=\"1920\"
bst.instance.Rvc64.fb_height=\"1080\"
bst.instance.Rvc64.max_fps=\"59.5\"
";

/// Routes `tracing` output through the test harness so it shows up on failure.
#[allow(dead_code)]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

/// Writes `content` to `name` inside `dir` and returns the full path.
#[allow(dead_code)]
pub fn write_conf(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}
