//! Modal loading: fetch an HTML fragment for an item and hold it open.
//!
//! The loader is UI-agnostic. A host shows [`ModalLoader::content`] in its
//! modal container, shows a spinner while [`ModalLoader::is_loading`], and
//! calls [`ModalLoader::finish_close`] [`CLOSE_DELAY`] after
//! [`ModalLoader::close`] so a closing animation can run.
//!
//! Fetching goes through [`ModalFetcher`]; any closure taking a
//! [`ModalRequest`] works.
//!
//! # Example
//!
//! ```rust
//! use colormode::modal::{FetchError, ModalFragment, ModalLoader, ModalRequest};
//!
//! let mut loader = ModalLoader::new(|req: &ModalRequest| -> Result<String, FetchError> {
//!     let fragment = ModalFragment::for_item("demo", req.id());
//!     Ok(format!("<h2>{}</h2><p>{}</p>", fragment.title, fragment.content))
//! });
//!
//! loader.open("42").unwrap();
//! assert!(loader.content().unwrap().contains("Dynamic Modal for Item 42"));
//!
//! loader.close();
//! loader.finish_close();
//! assert!(loader.content().is_none());
//! ```

use std::time::Duration;

use serde::Serialize;
use thiserror::Error;
use url::form_urlencoded;

/// Path of the modal endpoint.
pub const MODAL_PATH: &str = "/modal";

/// Time the closing animation runs before the container is emptied.
pub const CLOSE_DELAY: Duration = Duration::from_millis(200);

/// A request for the modal fragment of one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalRequest {
    id: String,
}

impl ModalRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The `GET` path and query, e.g. `/modal?id=42`.
    pub fn path(&self) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("id", &self.id)
            .finish();
        format!("{MODAL_PATH}?{query}")
    }
}

/// A failed modal fetch, carrying the HTTP status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{status}: {status_text}")]
pub struct FetchError {
    pub status: u16,
    pub status_text: String,
}

impl FetchError {
    pub fn new(status: u16, status_text: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
        }
    }
}

/// Fetches the HTML fragment for a modal request.
pub trait ModalFetcher {
    fn fetch(&mut self, request: &ModalRequest) -> Result<String, FetchError>;
}

impl<F> ModalFetcher for F
where
    F: FnMut(&ModalRequest) -> Result<String, FetchError>,
{
    fn fetch(&mut self, request: &ModalRequest) -> Result<String, FetchError> {
        self(request)
    }
}

/// What the modal container currently holds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Empty,
    Open(String),
    /// Closing animation running; content still shown.
    Closing(String),
}

/// Opens and closes fetched modals.
#[derive(Debug)]
pub struct ModalLoader<F> {
    fetcher: F,
    state: ModalState,
    loading: bool,
}

impl<F: ModalFetcher> ModalLoader<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            state: ModalState::Empty,
            loading: false,
        }
    }

    /// Fetches and opens the modal for item `id`.
    ///
    /// A failed fetch is logged and leaves the container empty; there is no
    /// retry.
    pub fn open(&mut self, id: &str) -> Result<(), FetchError> {
        let request = self.begin(id);
        let result = self.fetcher.fetch(&request);
        self.complete(&request, result)
    }

    /// Starts loading item `id` and shows the loading overlay.
    ///
    /// For hosts that fetch asynchronously: perform the returned request,
    /// then hand the outcome to [`ModalLoader::complete`].
    pub fn begin(&mut self, id: &str) -> ModalRequest {
        self.loading = true;
        ModalRequest::new(id)
    }

    /// Hides the loading overlay and fills the container with the outcome
    /// of `request`.
    pub fn complete(
        &mut self,
        request: &ModalRequest,
        result: Result<String, FetchError>,
    ) -> Result<(), FetchError> {
        self.loading = false;
        match result {
            Ok(html) => {
                tracing::debug!(path = %request.path(), "modal loaded");
                self.state = ModalState::Open(html);
                Ok(())
            }
            Err(e) => {
                tracing::error!(path = %request.path(), "Error loading modal: {e}");
                self.state = ModalState::Empty;
                Err(e)
            }
        }
    }

    /// Starts closing the open modal. No-op when nothing is open.
    pub fn close(&mut self) {
        if let ModalState::Open(html) = std::mem::take(&mut self.state) {
            self.state = ModalState::Closing(html);
        }
    }

    /// Empties the container once the closing animation is done.
    pub fn finish_close(&mut self) {
        if matches!(self.state, ModalState::Closing(_)) {
            self.state = ModalState::Empty;
        }
    }

    pub fn state(&self) -> &ModalState {
        &self.state
    }

    /// The fragment currently in the container.
    pub fn content(&self) -> Option<&str> {
        match &self.state {
            ModalState::Empty => None,
            ModalState::Open(html) | ModalState::Closing(html) => Some(html),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }
}

/// Data the server renders into a modal fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ModalFragment {
    pub server_name: String,
    pub title: String,
    pub content: String,
}

impl ModalFragment {
    pub fn for_item(server_name: &str, id: &str) -> Self {
        Self {
            server_name: server_name.to_string(),
            title: format!("Dynamic Modal for Item {id}"),
            content: format!("This is dynamically loaded content for item {id}"),
        }
    }
}
