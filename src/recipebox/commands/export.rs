use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{RecipeStore, StorageBackend};

/// Serializes the whole catalog in the persisted layout, ready to be pasted into
/// another catalog's storage or fed to `import`.
pub fn run<B: StorageBackend>(store: &RecipeStore<B>) -> Result<CmdResult> {
    let encoded = serde_json::to_string_pretty(store.recipes())?;
    let mut result = CmdResult::default();
    result.exported = Some(encoded);
    result.add_message(CmdMessage::success(format!(
        "Exported {} recipe(s)",
        store.len()
    )));
    Ok(result)
}
