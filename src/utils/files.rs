use crate::error::AppError;
use crate::tcg::arena::CardList;
use std::fs;
use std::io;
use std::path::Path;

/// Ensure the directory the output file lands in exists
pub fn ensure_parent_dir(file_path: &Path) -> io::Result<()> {
    match file_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            fs::create_dir_all(parent)?;
            println!("Created directory: {}", parent.display());
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Write the card list as pretty-printed UTF-8 JSON
pub fn write_card_list(file_path: &Path, card_list: &CardList) -> Result<(), AppError> {
    let write_error = |source| AppError::Write {
        path: file_path.display().to_string(),
        source,
    };

    ensure_parent_dir(file_path).map_err(write_error)?;
    let json_data = serde_json::to_string_pretty(card_list)?;
    fs::write(file_path, json_data).map_err(write_error)?;

    Ok(())
}
