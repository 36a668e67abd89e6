//! Page orchestration: load, render, reveal registration.
//!
//! This is the program's entry action. Its contract: produce a rendered
//! resume or a visible error state, and never leave the loading indicator
//! shown. A load failure is not an error at this level; it is the Failed
//! page state. Only a defective shell aborts the pipeline.

use log::{error, info};

use crate::error::Result;
use crate::loader::ResumeLoader;
use crate::render;
use crate::reveal::{stack_cards, RevealObserver};
use crate::shell::{PageShell, PageState, PageView};
use crate::theme::Theme;
use crate::{PageConfig, Viewport};

/// The final page document plus the state it reflects.
pub struct PageOutput {
    pub html: String,
    pub state: PageState,
}

/// Owns the shell, the loader and the reveal observer for one page build.
pub struct Page {
    shell: PageShell,
    loader: ResumeLoader,
    observer: RevealObserver,
    viewport: Viewport,
    theme: Theme,
}

impl Page {
    pub fn new(config: &PageConfig, shell: PageShell, theme: Theme) -> Result<Self> {
        Ok(Self {
            loader: ResumeLoader::new(config)?,
            observer: RevealObserver::new(config.reveal_threshold),
            viewport: config.viewport,
            shell,
            theme,
        })
    }

    /// Fetch the document (primary, then fallback), render every section and
    /// splice the result into the shell. On success the hidden cards are
    /// registered with the reveal observer, once; elements added later are
    /// not observed. On failure the loader is hidden, the static error panel
    /// is shown and no section container is modified.
    pub async fn load_and_render(&mut self) -> Result<PageOutput> {
        match self.loader.load().await {
            Ok(doc) => {
                let sections = render::sections(&doc);
                let html = self.shell.apply(&PageView {
                    state: PageState::Rendered,
                    sections: Some(&sections),
                    theme: self.theme,
                })?;
                if self.observer.observed_count() == 0 {
                    for (id, rect) in stack_cards(self.shell.hidden_card_ids(), self.viewport) {
                        self.observer.observe(id, rect);
                    }
                    info!("observing {} cards for reveal", self.observer.observed_count());
                }
                Ok(PageOutput {
                    html,
                    state: PageState::Rendered,
                })
            }
            Err(e) => {
                error!("{}", e);
                let html = self.shell.apply(&PageView {
                    state: PageState::Failed,
                    sections: None,
                    theme: self.theme,
                })?;
                Ok(PageOutput {
                    html,
                    state: PageState::Failed,
                })
            }
        }
    }

    /// The reveal observer, for driving scroll events after the render.
    pub fn observer_mut(&mut self) -> &mut RevealObserver {
        &mut self.observer
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }
}
