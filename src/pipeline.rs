//! Pipeline orchestration for jmerge.
//!
//! Runs the four effects exactly once, in order:
//! - Read the base mapping from the input stream
//! - Read the overlay mapping from the configured file
//! - Shallow-merge the overlay into the base
//! - Write the merged mapping as one compact JSON line
//!
//! Generic over the input reader and output writer so the whole sequence
//! is exercisable in tests without a process boundary.

use std::io::{Read, Write};
use std::path::PathBuf;

use crate::error::{MergeResult, Origin};
use crate::merge::shallow_merge;
use crate::source::{load_mapping, read_mapping};

/// Default overlay file path, relative to the current working directory.
pub const DEFAULT_OVERLAY_PATH: &str = "a.json";

/// Pipeline configuration.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Path to the overlay JSON file.
    pub overlay_path: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            overlay_path: PathBuf::from(DEFAULT_OVERLAY_PATH),
        }
    }
}

/// Run the merge pipeline.
///
/// Nothing is written to `output` until the merged document has been
/// fully serialized, so a failing run produces no partial output.
pub fn run<R: Read, W: Write>(
    input: &mut R,
    output: &mut W,
    config: &PipelineConfig,
) -> MergeResult<()> {
    let base = read_mapping(input, Origin::Stdin)?;
    let overlay = load_mapping(&config.overlay_path)?;

    let merged = shallow_merge(base, overlay);

    // Infallible: the map came from a JSON parse
    let line = serde_json::Value::Object(merged).to_string();
    writeln!(output, "{}", line)?;
    Ok(())
}
