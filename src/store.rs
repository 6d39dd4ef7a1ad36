use std::fs;
use std::path::{Path, PathBuf};

use crate::error::UpdateError;
use crate::types::DrawRecord;

/// On-disk location of a lottery's dataset file.
pub fn dataset_path(data_dir: &Path, slug: &str) -> PathBuf {
    data_dir.join(format!("{slug}.json"))
}

/// Load a stored dataset. A missing file is an empty dataset, not an
/// error: new lotteries start from nothing.
pub fn load_dataset(path: &Path) -> Result<Vec<DrawRecord>, UpdateError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let raw = fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|e| UpdateError::Parse(format!("{}: {e}", path.display())))
}

/// Check the ascending / unique / gap-free contract on `concurso`.
pub fn check_invariants(records: &[DrawRecord]) -> Result<(), UpdateError> {
    for pair in records.windows(2) {
        let (prev, next) = (&pair[0], &pair[1]);
        if next.concurso != prev.concurso + 1 {
            return Err(UpdateError::Consistency(format!(
                "concurso {} followed by {}",
                prev.concurso, next.concurso
            )));
        }
    }
    Ok(())
}

/// Serialize a dataset the way the published files are formatted:
/// pretty-printed with a trailing newline.
pub fn render_dataset(records: &[DrawRecord]) -> Result<String, UpdateError> {
    let mut out = serde_json::to_string_pretty(records)
        .map_err(|e| UpdateError::Parse(e.to_string()))?;
    out.push('\n');
    Ok(out)
}

/// Replace `path` with `contents` via write-temp-then-rename, so an
/// interrupted run never leaves a half-written file behind.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), UpdateError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
