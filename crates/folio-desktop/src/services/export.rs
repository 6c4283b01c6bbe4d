//! Static HTML export written through a native save dialog.

use std::path::{Path, PathBuf};

use folio_core::export::EXPORT_FILE_NAME;
use rfd::AsyncFileDialog;

/// Write the rendered page to `path`.
pub fn write_export(path: &Path, html: &str) -> std::io::Result<()> {
    std::fs::write(path, html)
}

/// Ask for a destination and write `html` there.
///
/// Returns `Ok(None)` when the dialog is dismissed.
pub async fn save_export_with_dialog(html: String) -> std::io::Result<Option<PathBuf>> {
    let Some(file) = AsyncFileDialog::new()
        .set_file_name(EXPORT_FILE_NAME)
        .add_filter("HTML", &["html"])
        .save_file()
        .await
    else {
        return Ok(None);
    };

    let path = file.path().to_path_buf();
    write_export(&path, &html)?;
    tracing::info!("Exported portfolio to {}", path.display());
    Ok(Some(path))
}
