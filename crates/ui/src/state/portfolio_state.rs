//! Window state: the shell plus the external-action use cases.

use portfolio_application::{ExportPdf, Notifier, OpenLink, Shell, UrlOpener};

use crate::bridge::{NavItemData, PageData, UiCommand, UiUpdate};

/// Everything the window mutates in response to user input.
///
/// Commands run synchronously on the UI thread; the returned updates must be
/// applied to the window before the next command.
pub struct PortfolioState<O: UrlOpener, N: Notifier + Clone> {
    shell: Shell,
    open_link: OpenLink<O, N>,
    export_pdf: ExportPdf<N>,
}

impl<O: UrlOpener, N: Notifier + Clone> PortfolioState<O, N> {
    /// Creates the state with the home page mounted.
    #[must_use]
    pub fn new(opener: O, notifier: N) -> Self {
        Self {
            shell: Shell::new(),
            open_link: OpenLink::new(opener, notifier.clone()),
            export_pdf: ExportPdf::new(notifier),
        }
    }

    /// Returns the navigation shell.
    #[must_use]
    pub const fn shell(&self) -> &Shell {
        &self.shell
    }

    /// Updates that draw the current shell from scratch.
    #[must_use]
    pub fn render(&self) -> Vec<UiUpdate> {
        vec![
            UiUpdate::Navigation(
                self.shell
                    .navigation()
                    .into_iter()
                    .map(NavItemData::from)
                    .collect(),
            ),
            UiUpdate::Content(PageData::new(
                self.shell.active_page(),
                self.shell.content(),
            )),
        ]
    }

    /// Handles one command and returns the updates to apply.
    pub fn handle(&mut self, command: UiCommand) -> Vec<UiUpdate> {
        match command {
            UiCommand::SelectPage(page) => {
                self.shell.select_page(page);
                self.render()
            }
            UiCommand::OpenLink { target } => {
                // failures are already reported to the user
                let _ = self.open_link.execute(&target);
                Vec::new()
            }
            UiCommand::ExportPdf => {
                self.export_pdf.execute();
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use portfolio_application::{Notice, OpenerError};
    use portfolio_domain::{LinkTarget, PageId};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::bridge::BlockKindData;

    struct AcceptingOpener;

    impl UrlOpener for AcceptingOpener {
        fn open(&self, _target: &LinkTarget) -> Result<(), OpenerError> {
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        notices: RefCell<Vec<Notice>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, notice: &Notice) {
            self.notices.borrow_mut().push(notice.clone());
        }
    }

    fn state() -> (
        PortfolioState<AcceptingOpener, Rc<RecordingNotifier>>,
        Rc<RecordingNotifier>,
    ) {
        let notifier = Rc::new(RecordingNotifier::default());
        (
            PortfolioState::new(AcceptingOpener, Rc::clone(&notifier)),
            notifier,
        )
    }

    fn mounted(updates: &[UiUpdate]) -> Option<&PageData> {
        updates.iter().find_map(|u| match u {
            UiUpdate::Content(page) => Some(page),
            UiUpdate::Navigation(_) => None,
        })
    }

    fn active_labels(updates: &[UiUpdate]) -> Vec<String> {
        updates
            .iter()
            .filter_map(|u| match u {
                UiUpdate::Navigation(items) => Some(items),
                UiUpdate::Content(_) => None,
            })
            .flatten()
            .filter(|i| i.active)
            .map(|i| i.label.clone())
            .collect()
    }

    #[test]
    fn initial_render_shows_home() {
        let (state, _) = state();
        let updates = state.render();

        assert_eq!(mounted(&updates).map(|p| p.page), Some(PageId::Home));
        assert_eq!(active_labels(&updates), vec!["🏠 Start Page".to_string()]);
    }

    #[test]
    fn select_page_remounts_and_restyles() {
        let (mut state, _) = state();
        state.handle(UiCommand::SelectPage(PageId::Contact));
        let updates = state.handle(UiCommand::SelectPage(PageId::Skills));

        let page = mounted(&updates);
        assert_eq!(page.map(|p| p.page), Some(PageId::Skills));
        assert!(
            page.into_iter()
                .flat_map(|p| &p.sections)
                .flat_map(|s| &s.blocks)
                .all(|b| b.kind != BlockKindData::Link)
        );
        assert_eq!(active_labels(&updates), vec!["⚡ Skills".to_string()]);
        assert_eq!(state.shell().active_page(), PageId::Skills);
    }

    #[test]
    fn reselecting_yields_same_updates() {
        let (mut state, _) = state();
        let first = state.handle(UiCommand::SelectPage(PageId::Projects));
        let second = state.handle(UiCommand::SelectPage(PageId::Projects));
        assert_eq!(first, second);
    }

    #[test]
    fn links_and_export_leave_page_untouched() {
        let (mut state, notifier) = state();
        state.handle(UiCommand::SelectPage(PageId::Contact));

        let ok = state.handle(UiCommand::OpenLink {
            target: "https://github.com/Sunshine031991".to_string(),
        });
        assert!(ok.is_empty());
        assert!(notifier.notices.borrow().is_empty());

        let bad = state.handle(UiCommand::OpenLink {
            target: String::new(),
        });
        assert!(bad.is_empty());
        assert_eq!(notifier.notices.borrow().len(), 1);

        state.handle(UiCommand::ExportPdf);
        assert_eq!(notifier.notices.borrow().len(), 2);
        assert_eq!(state.shell().active_page(), PageId::Contact);
    }
}
