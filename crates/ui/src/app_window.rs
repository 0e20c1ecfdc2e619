//! Application window management
//!
//! This module provides the main application window and binds its callbacks
//! to the portfolio state.

use std::cell::RefCell;
use std::rc::Rc;

use portfolio_domain::{EXPORT_LABEL, PageId, SIDEBAR_TITLE, UserSettings};
use portfolio_infrastructure::{DialogNotifier, SystemUrlOpener};
use slint::{ComponentHandle, ModelRc, VecModel, Weak};

use crate::bridge::{BlockData, BlockKindData, PageData, UiCommand, UiUpdate};
use crate::state::PortfolioState;
use crate::{BlockItem, BlockKind, MainWindow, NavButtonItem, PageItem, SectionItem};

type SharedState = Rc<RefCell<PortfolioState<SystemUrlOpener, DialogNotifier>>>;

/// Application window wrapper with the portfolio bindings.
pub struct AppWindow {
    window: MainWindow,
    state: SharedState,
}

impl AppWindow {
    /// Creates a new application window showing the home page.
    ///
    /// # Errors
    ///
    /// Returns an error if the window cannot be created.
    pub fn new(settings: &UserSettings) -> Result<Self, slint::PlatformError> {
        let window = MainWindow::new()?;
        apply_settings(&window, settings);
        window.set_sidebar_title(SIDEBAR_TITLE.into());
        window.set_export_label(EXPORT_LABEL.into());

        let state: SharedState = Rc::new(RefCell::new(PortfolioState::new(
            SystemUrlOpener::new(),
            DialogNotifier::new(),
        )));

        for update in state.borrow().render() {
            apply_update(&window, update);
        }

        let ui_weak = window.as_weak();

        window.on_nav_clicked({
            let state = Rc::clone(&state);
            let ui_weak = ui_weak.clone();
            move |index| {
                let page = usize::try_from(index).ok().and_then(PageId::from_index);
                match page {
                    Some(page) => dispatch(&state, &ui_weak, UiCommand::SelectPage(page)),
                    None => tracing::warn!(index, "navigation index out of range"),
                }
            }
        });

        window.on_link_clicked({
            let state = Rc::clone(&state);
            let ui_weak = ui_weak.clone();
            move |target| {
                dispatch(
                    &state,
                    &ui_weak,
                    UiCommand::OpenLink {
                        target: target.to_string(),
                    },
                );
            }
        });

        window.on_export_clicked({
            let state = Rc::clone(&state);
            move || dispatch(&state, &ui_weak, UiCommand::ExportPdf)
        });

        Ok(Self { window, state })
    }

    /// Runs the application event loop.
    ///
    /// This method blocks until the window is closed.
    ///
    /// # Errors
    ///
    /// Returns an error if the event loop fails.
    pub fn run(&self) -> Result<(), slint::PlatformError> {
        tracing::info!(page = %self.active_page(), "portfolio window running");
        self.window.run()
    }

    /// Returns the page currently mounted.
    #[must_use]
    pub fn active_page(&self) -> PageId {
        self.state.borrow().shell().active_page()
    }
}

/// Runs a command against the state and applies the resulting updates.
///
/// Native dialogs may pump events while open; a command arriving during
/// another one is dropped instead of re-borrowing the state.
fn dispatch(state: &SharedState, ui_weak: &Weak<MainWindow>, command: UiCommand) {
    let Ok(mut state) = state.try_borrow_mut() else {
        tracing::warn!(?command, "ignoring command while another is in progress");
        return;
    };
    let updates = state.handle(command);
    drop(state);

    if let Some(ui) = ui_weak.upgrade() {
        for update in updates {
            apply_update(&ui, update);
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn apply_settings(ui: &MainWindow, settings: &UserSettings) {
    ui.window().set_size(slint::LogicalSize::new(
        settings.window_width as f32,
        settings.window_height as f32,
    ));
    ui.set_sidebar_width(settings.sidebar_width as f32);
    ui.set_fade_duration(if settings.fade_in { 300 } else { 0 });
}

fn apply_update(ui: &MainWindow, update: UiUpdate) {
    match update {
        UiUpdate::Navigation(items) => {
            let items: Vec<NavButtonItem> = items
                .into_iter()
                .map(|item| NavButtonItem {
                    label: item.label.into(),
                    active: item.active,
                })
                .collect();
            ui.set_nav_items(ModelRc::new(VecModel::from(items)));
        }

        UiUpdate::Content(page) => {
            tracing::debug!(page = %page.page, "mounting page");
            // A fresh one-element model drops the previous page view.
            ui.set_mounted(ModelRc::new(VecModel::from(vec![page_item(page)])));
        }
    }
}

fn page_item(page: PageData) -> PageItem {
    let sections: Vec<SectionItem> = page
        .sections
        .into_iter()
        .map(|section| {
            let blocks: Vec<BlockItem> = section.blocks.into_iter().map(block_item).collect();
            SectionItem {
                card: section.card,
                blocks: ModelRc::new(VecModel::from(blocks)),
            }
        })
        .collect();

    PageItem {
        has_title: page.title.is_some(),
        title: page.title.unwrap_or_default().into(),
        sections: ModelRc::new(VecModel::from(sections)),
    }
}

fn block_item(block: BlockData) -> BlockItem {
    BlockItem {
        kind: block_kind(block.kind),
        text: block.text.into(),
        detail: block.detail.into(),
        progress: block.progress,
    }
}

const fn block_kind(kind: BlockKindData) -> BlockKind {
    match kind {
        BlockKindData::Hero => BlockKind::Hero,
        BlockKindData::Subtitle => BlockKind::Subtitle,
        BlockKindData::Body => BlockKind::Body,
        BlockKindData::Period => BlockKind::Period,
        BlockKindData::ItemTitle => BlockKind::ItemTitle,
        BlockKindData::Company => BlockKind::Company,
        BlockKindData::Caption => BlockKind::Caption,
        BlockKindData::Accent => BlockKind::Accent,
        BlockKindData::Field => BlockKind::Field,
        BlockKindData::Skill => BlockKind::Skill,
        BlockKindData::Link => BlockKind::Link,
    }
}
