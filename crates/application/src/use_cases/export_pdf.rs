//! PDF export use case.
//!
//! Export is not implemented; the action only explains that to the user.

use crate::ports::{Notice, Notifier};

/// Title of the export dialog.
pub const EXPORT_TITLE: &str = "PDF Export";

/// Body of the export dialog.
pub const EXPORT_MESSAGE: &str = "PDF-Export-Funktion würde hier die Bewerbung als PDF speichern.\n\n\
Für eine vollständige Implementierung wird die iText-Bibliothek benötigt.";

/// Use case behind the sidebar export button.
pub struct ExportPdf<N: Notifier> {
    notifier: N,
}

impl<N: Notifier> ExportPdf<N> {
    /// Creates a new `ExportPdf` use case.
    #[must_use]
    pub const fn new(notifier: N) -> Self {
        Self { notifier }
    }

    /// Shows the informational notice. No file is written.
    pub fn execute(&self) {
        tracing::info!("pdf export requested");
        self.notifier.notify(&Notice::info(EXPORT_TITLE, EXPORT_MESSAGE));
    }
}
