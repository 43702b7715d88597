mod todo_dialog;

pub use todo_dialog::{parse_items, TodoDialog};

use crate::dashboard::widgets::{
    ClockWidget, DashboardContext, FontScale, HeadlinesWidget, QuotesWidget, TodoWidget,
    WeatherWidget,
};
use crate::dashboard::{Dashboard, RepaintFn, Widget, WidgetAction};
use crate::settings::ConfigStore;
use eframe::egui;
use std::sync::Arc;

/// Keyboard commands understood by the mirror window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    ToggleFullscreen,
    Escape,
    EditTodos,
}

/// Consume the key presses this window reacts to.
pub fn take_key_commands(ctx: &egui::Context) -> Vec<KeyCommand> {
    ctx.input_mut(|i| {
        let mut out = Vec::new();
        if i.consume_key(egui::Modifiers::NONE, egui::Key::F11) {
            out.push(KeyCommand::ToggleFullscreen);
        }
        if i.consume_key(egui::Modifiers::NONE, egui::Key::Escape) {
            out.push(KeyCommand::Escape);
        }
        if i.consume_key(egui::Modifiers::COMMAND, egui::Key::N) {
            out.push(KeyCommand::EditTodos);
        }
        out
    })
}

pub struct MirrorApp {
    store: ConfigStore,
    dashboard: Dashboard,
    todo_dialog: TodoDialog,
    fullscreen: bool,
    clock: ClockWidget,
    weather: WeatherWidget,
    headlines: HeadlinesWidget,
    todo: TodoWidget,
    quotes: QuotesWidget,
}

impl MirrorApp {
    pub fn new(store: ConfigStore, dashboard: Dashboard) -> Self {
        Self {
            store,
            dashboard,
            todo_dialog: TodoDialog::default(),
            fullscreen: false,
            clock: ClockWidget,
            weather: WeatherWidget,
            headlines: HeadlinesWidget,
            todo: TodoWidget,
            quotes: QuotesWidget,
        }
    }

    /// Build the app with the network-backed dashboard. Workers wake the
    /// render loop through `ctx` when they post a result.
    pub fn with_context(ctx: &egui::Context, store: ConfigStore) -> anyhow::Result<Self> {
        let waker = ctx.clone();
        let repaint: RepaintFn = Arc::new(move || waker.request_repaint());
        let dashboard = Dashboard::with_default_sources(store.settings(), Some(repaint))?;
        ctx.set_visuals(egui::Visuals::light());
        Ok(Self::new(store, dashboard))
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub fn todo_dialog(&self) -> &TodoDialog {
        &self.todo_dialog
    }

    pub fn todo_dialog_mut(&mut self) -> &mut TodoDialog {
        &mut self.todo_dialog
    }

    /// Open the to-do editor on the stored items. An editor that is already
    /// open keeps its buffer.
    pub fn open_todo_editor(&mut self) {
        if !self.todo_dialog.is_open() {
            self.todo_dialog.open(&self.store.settings().todo_items);
        }
    }

    /// Act on one keyboard command. Escape closes the editor when it is open
    /// and otherwise asks the window to close.
    pub fn apply_key_command(&mut self, ctx: &egui::Context, cmd: KeyCommand) {
        match cmd {
            KeyCommand::ToggleFullscreen => {
                self.fullscreen = !self.fullscreen;
                ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(self.fullscreen));
            }
            KeyCommand::Escape if self.todo_dialog.is_open() => self.todo_dialog.cancel(),
            KeyCommand::Escape => {
                tracing::info!("exit requested");
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
            KeyCommand::EditTodos => self.open_todo_editor(),
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        for cmd in take_key_commands(ctx) {
            self.apply_key_command(ctx, cmd);
        }
    }

    fn render(&mut self, ctx: &egui::Context) -> Option<WidgetAction> {
        let fonts = FontScale::from_height(ctx.screen_rect().height());
        let context = DashboardContext {
            slots: &self.dashboard.slots,
            fonts,
            news_topic: self.dashboard.news_topic(),
        };
        let frame = egui::Frame::none()
            .fill(egui::Color32::WHITE)
            .inner_margin(egui::Margin::symmetric(40.0, 20.0));
        let mut action = None;

        egui::TopBottomPanel::bottom("quotes")
            .frame(frame)
            .show(ctx, |ui| {
                self.quotes.render(ui, &context);
            });

        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            ui.columns(2, |cols| {
                self.clock.render(&mut cols[0], &context);
                self.weather.render(&mut cols[1], &context);
            });
            ui.add_space(20.0);
            ui.columns(2, |cols| {
                self.headlines.render(&mut cols[0], &context);
                if let Some(a) = self.todo.render(&mut cols[1], &context) {
                    action = Some(a);
                }
            });
        });
        action
    }
}

impl eframe::App for MirrorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);
        let next = self.dashboard.tick(self.store.settings());

        if let Some(WidgetAction::EditTodos) = self.render(ctx) {
            self.open_todo_editor();
        }
        if let Some(items) = self.todo_dialog.ui(ctx, &mut self.store) {
            self.dashboard.set_todo_items(items);
        }

        ctx.request_repaint_after(next);
    }
}
