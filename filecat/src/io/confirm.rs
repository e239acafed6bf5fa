//! Per-file confirmation before export.

use std::path::Path;

use tracing::warn;

/// Decides whether a file's section is written.
pub trait Confirm {
    fn confirm(&mut self, path: &Path) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&Path) -> bool,
{
    fn confirm(&mut self, path: &Path) -> bool {
        self(path)
    }
}

/// Approves every file.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&mut self, _path: &Path) -> bool {
        true
    }
}

/// Asks on the terminal before each file. Defaults to yes.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromptConfirm;

impl Confirm for PromptConfirm {
    fn confirm(&mut self, path: &Path) -> bool {
        let answer = dialoguer::Confirm::new()
            .with_prompt(format!("Export {}?", path.display()))
            .default(true)
            .interact();
        match answer {
            Ok(answer) => answer,
            Err(err) => {
                warn!(path = %path.display(), "confirmation prompt failed, skipping: {err}");
                false
            }
        }
    }
}
