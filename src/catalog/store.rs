//! Lazily built catalog store.

use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

use tracing::{debug, info, warn};

use super::Catalog;
use crate::error::EngineError;
use crate::{figma, tokens};

/// Where token text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenSource {
    /// A file on disk
    File(PathBuf),
    /// Text held in memory (tests, stdin)
    Inline(String),
}

impl TokenSource {
    /// Whether reading the source can possibly succeed.
    pub fn exists(&self) -> bool {
        match self {
            TokenSource::File(path) => path.exists(),
            TokenSource::Inline(_) => true,
        }
    }

    /// Path used in diagnostics.
    pub fn label(&self) -> &Path {
        match self {
            TokenSource::File(path) => path,
            TokenSource::Inline(_) => Path::new("<inline>"),
        }
    }

    pub fn read(&self) -> Result<Cow<'_, str>, EngineError> {
        match self {
            TokenSource::File(path) => fs::read_to_string(path).map(Cow::Owned).map_err(|e| {
                EngineError::SourceUnreadable { path: path.clone(), reason: e.to_string() }
            }),
            TokenSource::Inline(text) => Ok(Cow::Borrowed(text)),
        }
    }
}

/// The primary CSS token source and optional Figma export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSources {
    pub primary: TokenSource,
    pub secondary: Option<TokenSource>,
}

impl TokenSources {
    pub fn new(primary: TokenSource) -> Self {
        Self { primary, secondary: None }
    }

    pub fn with_secondary(mut self, secondary: TokenSource) -> Self {
        self.secondary = Some(secondary);
        self
    }
}

/// Owns the token sources and the catalog built from them.
///
/// The catalog is built on first access and reused afterwards; sources are
/// read at most once per store.
#[derive(Debug)]
pub struct CatalogStore {
    sources: TokenSources,
    catalog: OnceLock<Catalog>,
    loads: AtomicUsize,
}

impl CatalogStore {
    pub fn new(sources: TokenSources) -> Self {
        Self { sources, catalog: OnceLock::new(), loads: AtomicUsize::new(0) }
    }

    /// Store backed by in-memory CSS text only.
    pub fn from_css(css: impl Into<String>) -> Self {
        Self::new(TokenSources::new(TokenSource::Inline(css.into())))
    }

    /// Store whose catalog is already built.
    pub fn preloaded(catalog: Catalog) -> Self {
        let store = Self::new(TokenSources::new(TokenSource::Inline(String::new())));
        let _ = store.catalog.set(catalog);
        store
    }

    /// The catalog, building it on first call.
    pub fn catalog(&self) -> &Catalog {
        self.catalog.get_or_init(|| {
            self.loads.fetch_add(1, Ordering::SeqCst);
            build_catalog(&self.sources)
        })
    }

    pub fn is_loaded(&self) -> bool {
        self.catalog.get().is_some()
    }

    /// Number of times the sources have been parsed (0 or 1).
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    pub fn sources(&self) -> &TokenSources {
        &self.sources
    }
}

/// Parse the primary source, merge the secondary one, and substitute the
/// fallback catalog if nothing was produced.
pub fn build_catalog(sources: &TokenSources) -> Catalog {
    let mut catalog = match sources.primary.read() {
        Ok(text) => tokens::extract(&text),
        Err(err) => {
            warn!(error = %err, "token source unavailable, starting from an empty catalog");
            Catalog::empty()
        }
    };

    if let Some(secondary) = &sources.secondary {
        if !secondary.exists() {
            debug!(path = %secondary.label().display(), "no figma token export present");
        } else {
            match secondary.read().and_then(|text| {
                figma::parse(&text).map_err(|e| EngineError::SourceUnreadable {
                    path: secondary.label().to_path_buf(),
                    reason: e.to_string(),
                })
            }) {
                Ok(doc) => {
                    let report = figma::merge(&mut catalog, &doc);
                    debug!(
                        inserted = report.inserted,
                        skipped_existing = report.skipped_existing,
                        skipped_malformed = report.skipped_malformed,
                        "merged figma tokens"
                    );
                }
                Err(err) => warn!(error = %err, "figma token export ignored"),
            }
        }
    }

    if catalog.is_empty() {
        warn!("no design data could be loaded, using fallback catalog");
        catalog = Catalog::fallback();
    }

    info!(
        colors = catalog.colors.len(),
        typography = catalog.typography.len(),
        spacing = catalog.spacing.len(),
        "design system data loaded"
    );
    catalog
}
