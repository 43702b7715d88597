use crate::settings::ConfigStore;
use eframe::egui;

/// Split editor text into to-do items: one per line, trimmed, blanks dropped.
pub fn parse_items(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Default, PartialEq, Eq)]
enum EditorState {
    #[default]
    Closed,
    Open {
        buffer: String,
    },
}

/// Free-text editor for the to-do list.
#[derive(Default)]
pub struct TodoDialog {
    state: EditorState,
    error: Option<String>,
}

impl TodoDialog {
    pub fn is_open(&self) -> bool {
        matches!(self.state, EditorState::Open { .. })
    }

    /// Snapshot `items` into the edit buffer, one item per line. Does nothing
    /// while an editing session is already open.
    pub fn open(&mut self, items: &[String]) {
        if self.is_open() {
            return;
        }
        self.state = EditorState::Open {
            buffer: items.join("\n"),
        };
        self.error = None;
    }

    pub fn buffer(&self) -> Option<&str> {
        match &self.state {
            EditorState::Open { buffer } => Some(buffer),
            EditorState::Closed => None,
        }
    }

    pub fn buffer_mut(&mut self) -> Option<&mut String> {
        match &mut self.state {
            EditorState::Open { buffer } => Some(buffer),
            EditorState::Closed => None,
        }
    }

    /// Discard the buffer without touching the settings.
    pub fn cancel(&mut self) {
        self.state = EditorState::Closed;
        self.error = None;
    }

    /// Replace the stored to-do list with the buffer contents and close.
    ///
    /// Returns the saved items, or `None` when the editor was not open. On a
    /// persistence error the editor stays open.
    pub fn save(&mut self, store: &mut ConfigStore) -> anyhow::Result<Option<Vec<String>>> {
        let Some(text) = self.buffer() else {
            return Ok(None);
        };
        let items = parse_items(text);
        let saved = items.clone();
        store.update(move |s| s.todo_items = items)?;
        tracing::info!("saved {} to-do items", saved.len());
        self.state = EditorState::Closed;
        self.error = None;
        Ok(Some(saved))
    }

    /// Render the editor window. Returns the saved items when the user
    /// pressed save and persistence succeeded.
    pub fn ui(&mut self, ctx: &egui::Context, store: &mut ConfigStore) -> Option<Vec<String>> {
        if !self.is_open() {
            return None;
        }
        let mut open = true;
        let mut save_now = false;
        let error = self.error.clone();
        egui::Window::new("Edit To-Do List")
            .open(&mut open)
            .resizable(true)
            .collapsible(false)
            .default_size((400.0, 400.0))
            .show(ctx, |ui| {
                if let Some(buffer) = self.buffer_mut() {
                    let height = (ui.available_height() - 60.0).max(120.0);
                    egui::ScrollArea::vertical().max_height(height).show(ui, |ui| {
                        ui.add(
                            egui::TextEdit::multiline(buffer)
                                .desired_width(f32::INFINITY)
                                .desired_rows(12),
                        );
                    });
                }
                if let Some(err) = &error {
                    ui.colored_label(egui::Color32::RED, err);
                }
                ui.vertical_centered(|ui| {
                    if ui.button("Save").clicked() {
                        save_now = true;
                    }
                });
            });
        if !open {
            self.cancel();
            return None;
        }
        if save_now {
            match self.save(store) {
                Ok(saved) => return saved,
                Err(e) => {
                    tracing::error!("failed to save to-do list: {e:#}");
                    self.error = Some(format!("Failed to save: {e}"));
                }
            }
        }
        None
    }
}
