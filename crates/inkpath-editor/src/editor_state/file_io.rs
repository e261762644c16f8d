//! File I/O operations (save, load) for editor state.

use anyhow::Context;

use super::EditorState;

impl EditorState {
    /// Writes the document markup to `path`.
    pub fn save_to_file(&mut self, path: impl AsRef<std::path::Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.export_markup())
            .with_context(|| format!("Failed to write drawing to {}", path.display()))?;

        self.current_file_path = Some(path.to_path_buf());
        self.is_modified = false;
        tracing::info!("Saved drawing to {}", path.display());
        Ok(())
    }

    /// Replaces the document with the drawing stored at `path`.
    pub fn load_from_file(&mut self, path: impl AsRef<std::path::Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read drawing from {}", path.display()))?;

        self.commit_markup_text(&content)
            .with_context(|| format!("Failed to parse drawing {}", path.display()))?;

        self.current_file_path = Some(path.to_path_buf());
        self.is_modified = false;
        tracing::info!(
            "Loaded {} with {} shape(s)",
            path.display(),
            self.document.shape_count()
        );
        Ok(())
    }
}
