//! Translation service facade and its caching decorator.
//!
//! The facade normalizes every backend into the same soft-failure contract:
//! a failed or empty translation is `None` plus a log line, never an error
//! crossing the session layer. `CachedTranslator` composes the bounded cache
//! in front of the facade.

use super::backend::TranslationBackend;
use super::cache::{CacheStats, TranslationCache};
use std::sync::Arc;

/// Uniform front over any [`TranslationBackend`].
pub struct TranslationService {
    backend: Arc<dyn TranslationBackend>,
}

impl TranslationService {
    pub fn new(backend: Arc<dyn TranslationBackend>) -> Self {
        Self { backend }
    }

    /// Translates `text` into `target_language`.
    ///
    /// Returns `None` for empty input or on any backend failure. When the
    /// source equals the target (and is not "auto") the input is returned
    /// unchanged without invoking the backend.
    pub async fn translate_text(
        &self,
        text: &str,
        target_language: &str,
        source_language: &str,
    ) -> Option<String> {
        if text.is_empty() {
            return None;
        }

        if source_language == target_language && source_language != "auto" {
            return Some(text.to_string());
        }

        match self
            .backend
            .translate(text, target_language, source_language)
            .await
        {
            Ok(translated) => {
                tracing::debug!("Translated {:.30} -> {:.30}", text, translated);
                Some(translated)
            }
            Err(err) => {
                tracing::error!("Translation error: {}", err);
                None
            }
        }
    }

    /// Best-effort language detection; `"en"` when detection fails or the
    /// input is empty.
    pub async fn detect_language(&self, text: &str) -> String {
        if text.is_empty() {
            return "en".to_string();
        }

        match self.backend.detect(text).await {
            Ok(language) => language,
            Err(err) => {
                tracing::error!("Language detection error: {}", err);
                "en".to_string()
            }
        }
    }
}

/// [`TranslationService`] with memoization through a [`TranslationCache`].
///
/// On a cache hit the wrapped backend is never invoked; on a miss the result
/// is cached only when the backend produced one.
pub struct CachedTranslator {
    service: TranslationService,
    cache: TranslationCache,
}

impl CachedTranslator {
    pub fn new(backend: Arc<dyn TranslationBackend>, cache_capacity: usize) -> Self {
        Self {
            service: TranslationService::new(backend),
            cache: TranslationCache::new(cache_capacity),
        }
    }

    pub async fn translate_text(
        &self,
        text: &str,
        target_language: &str,
        source_language: &str,
    ) -> Option<String> {
        if text.is_empty() {
            return None;
        }

        if let Some(cached) = self.cache.get(text, source_language, target_language) {
            tracing::debug!("Cache hit for translation");
            return Some(cached);
        }

        let result = self
            .service
            .translate_text(text, target_language, source_language)
            .await;

        if let Some(ref translated) = result {
            self.cache
                .insert(text, source_language, target_language, translated);
        }

        result
    }

    pub async fn detect_language(&self, text: &str) -> String {
        self.service.detect_language(text).await
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CalloutError, Result};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Backend that counts calls and can be switched into failure mode.
    struct CountingBackend {
        calls: AtomicUsize,
        fail: bool,
    }

    impl CountingBackend {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                fail: false,
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                fail: true,
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TranslationBackend for CountingBackend {
        async fn translate(&self, text: &str, target: &str, _source: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(CalloutError::backend("connection reset"));
            }
            Ok(format!("{}:{}", target, text))
        }

        async fn detect(&self, _text: &str) -> Result<String> {
            if self.fail {
                return Err(CalloutError::backend("connection reset"));
            }
            Ok("es".to_string())
        }
    }

    #[tokio::test]
    async fn same_language_short_circuits_without_backend_call() {
        let backend = CountingBackend::new();
        let service = TranslationService::new(backend.clone());

        let result = service.translate_text("hello", "en", "en").await;
        assert_eq!(result.as_deref(), Some("hello"));
        assert_eq!(backend.calls(), 0);
    }

    #[tokio::test]
    async fn auto_source_always_hits_the_backend() {
        let backend = CountingBackend::new();
        let service = TranslationService::new(backend.clone());

        let result = service.translate_text("hello", "auto", "auto").await;
        assert_eq!(result.as_deref(), Some("auto:hello"));
        assert_eq!(backend.calls(), 1);
    }

    #[tokio::test]
    async fn backend_failure_becomes_none() {
        let service = TranslationService::new(CountingBackend::failing());
        assert_eq!(service.translate_text("hello", "es", "en").await, None);
    }

    #[tokio::test]
    async fn empty_input_is_none_without_backend_call() {
        let backend = CountingBackend::new();
        let service = TranslationService::new(backend.clone());
        assert_eq!(service.translate_text("", "es", "en").await, None);
        assert_eq!(backend.calls(), 0);
    }

    #[tokio::test]
    async fn detection_failure_defaults_to_english() {
        let service = TranslationService::new(CountingBackend::failing());
        assert_eq!(service.detect_language("hola").await, "en");
        assert_eq!(service.detect_language("").await, "en");
    }

    #[tokio::test]
    async fn cache_hit_skips_the_backend() {
        let backend = CountingBackend::new();
        let translator = CachedTranslator::new(backend.clone(), 10);

        let first = translator.translate_text("gg", "es", "en").await;
        let second = translator.translate_text("gg", "es", "en").await;

        assert_eq!(first, second);
        assert_eq!(backend.calls(), 1);

        let stats = translator.cache_stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hit_rate, 50.0);
    }

    #[tokio::test]
    async fn failed_translations_are_not_cached() {
        let backend = CountingBackend::failing();
        let translator = CachedTranslator::new(backend.clone(), 10);

        assert_eq!(translator.translate_text("gg", "es", "en").await, None);
        assert_eq!(translator.translate_text("gg", "es", "en").await, None);
        // Both attempts reached the backend; nothing was memoized.
        assert_eq!(backend.calls(), 2);
        assert_eq!(translator.cache_stats().size, 0);
    }
}
