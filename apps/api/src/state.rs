use std::sync::Arc;

use crate::config::Config;
use crate::documents::{NativeDecoder, TextDecoder};
use crate::extraction::ResumeParser;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub parser: ResumeParser,
    /// Pluggable document decoder. Default: NativeDecoder.
    pub decoder: Arc<dyn TextDecoder>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let parser = ResumeParser::new(config.extraction);
        AppState {
            config,
            parser,
            decoder: Arc::new(NativeDecoder),
        }
    }
}
