//! Overwrite guard for the output file.

use dialoguer::Confirm;
use std::path::Path;
use vconcat_core::{CoreError, CoreResult};

/// Removes `path` if it exists, asking the user first unless `assume_yes`.
///
/// Refusing the prompt aborts the run; nothing is deleted.
pub fn ensure_overwrite(path: &Path, assume_yes: bool) -> CoreResult<()> {
    if !path.exists() {
        return Ok(());
    }

    if !assume_yes {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "File {} already exists. Overwrite?",
                path.display()
            ))
            .default(false)
            .interact()
            .map_err(|e| CoreError::OperationFailed(format!("overwrite prompt failed: {e}")))?;

        if !confirmed {
            return Err(CoreError::OperationFailed(format!(
                "aborted: {} exists",
                path.display()
            )));
        }
    }

    std::fs::remove_file(path)?;
    Ok(())
}
