use std::fmt;
use std::rc::Rc;

use crate::config::LoaderConfig;
use crate::error::{LoadError, LoadResult};
use crate::host::{SheetRequest, StyleHost};
use crate::log::{console_info, console_log, console_warn};
use crate::naming::{generic_request, page_name, page_request};

/// Outcome of the page-specific stylesheet attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageSheet {
    Loaded(String),
    /// A page name was derived but its stylesheet did not load.
    Missing(String),
    /// The current path yields no page name, so nothing was attempted.
    NoPage,
}

/// What one `init` sequence ended up loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub generic: Option<String>,
    pub page: PageSheet,
}

impl fmt::Display for LoadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.generic {
            Some(name) => write!(f, "generic={}", name)?,
            None => write!(f, "generic=none")?,
        }
        match &self.page {
            PageSheet::Loaded(name) => write!(f, ", page={}", name),
            PageSheet::Missing(name) => write!(f, ", page={} (missing)", name),
            PageSheet::NoPage => write!(f, ", page=none"),
        }
    }
}

/// Injects the shared stylesheet and the current page's stylesheet into the
/// document through a [`StyleHost`].
///
/// Construction has no side effects; nothing is loaded until [`init`] or one
/// of the load operations is called.
///
/// [`init`]: StylesheetLoader::init
pub struct StylesheetLoader<H> {
    host: Rc<H>,
    config: Rc<LoaderConfig>,
}

impl<H> Clone for StylesheetLoader<H> {
    fn clone(&self) -> Self {
        Self {
            host: Rc::clone(&self.host),
            config: Rc::clone(&self.config),
        }
    }
}

impl<H: StyleHost> StylesheetLoader<H> {
    pub fn new(host: H) -> Self {
        Self::with_config(host, LoaderConfig::default())
    }

    pub fn with_config(host: H, config: LoaderConfig) -> Self {
        Self {
            host: Rc::new(host),
            config: Rc::new(config),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Loads the stylesheet at `path`.
    ///
    /// When `id` names an element already in the document this returns
    /// `Ok(())` without touching the DOM. Otherwise a `<link>` is appended and
    /// the call resolves once the browser reports `load` or `error`. There is
    /// no timeout.
    pub async fn load(&self, path: &str, id: Option<&str>) -> LoadResult<()> {
        self.load_request(&SheetRequest::new(path).with_optional_id(id))
            .await
    }

    pub async fn load_request(&self, request: &SheetRequest) -> LoadResult<()> {
        if let Some(id) = request.id.as_deref()
            && self.host.has_element(id)
        {
            return Ok(());
        }

        let pending = self.host.insert_stylesheet(request)?;
        pending.await?;
        console_info(&format!("Stylesheet loaded: {}", request.path));
        Ok(())
    }

    /// Tries the shared stylesheet candidates in order and stops at the first
    /// one that loads. Returns its name, or `None` if none loaded.
    pub async fn load_generic(&self) -> Option<String> {
        for (index, name) in self.config.generic_candidates.iter().enumerate() {
            let request = generic_request(&self.config, index, name);
            match self.load_request(&request).await {
                Ok(()) => return Some(name.clone()),
                Err(err) => report_failure("Generic stylesheet not loaded", &err),
            }
        }
        None
    }

    /// Loads the stylesheet named after the current page, if the path names one.
    pub async fn auto_load(&self) -> PageSheet {
        let Some(pathname) = self.host.pathname() else {
            return PageSheet::NoPage;
        };
        let Some(name) = page_name(&pathname, &self.config.page_suffix) else {
            return PageSheet::NoPage;
        };

        let request = page_request(&self.config, name);
        match self.load_request(&request).await {
            Ok(()) => PageSheet::Loaded(name.to_string()),
            Err(err) => {
                report_failure("No page-specific stylesheet", &err);
                PageSheet::Missing(name.to_string())
            }
        }
    }

    /// The shared stylesheet, then the page stylesheet, strictly in sequence.
    pub async fn run(&self) -> LoadReport {
        let generic = self.load_generic().await;
        let page = self.auto_load().await;
        LoadReport { generic, page }
    }

    /// Schedules [`run`](Self::run) on the host's event loop: right away if the
    /// document is past `loading`, otherwise once it becomes ready.
    pub fn init(&self) {
        let loader = self.clone();
        let start = move || {
            let host = Rc::clone(&loader.host);
            host.spawn(Box::pin(async move {
                let report = loader.run().await;
                console_log(&format!("Stylesheet loading finished: {}", report));
            }));
        };

        if self.host.ready_state().is_loading() {
            self.host.on_ready(Box::new(start));
        } else {
            start();
        }
    }
}

fn report_failure(context: &str, err: &LoadError) {
    match err {
        LoadError::Resource { .. } => console_log(&format!("{}: {}", context, err)),
        LoadError::Dom(_) => console_warn(&format!("{}: {}", context, err)),
    }
}
