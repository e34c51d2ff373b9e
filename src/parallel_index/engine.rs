//! Main parallel indexing engine implementation.

use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use crossbeam_channel::unbounded;
use log::{debug, info, warn};
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::analysis::tokenizer::SeparatorTokenizer;
use crate::config::SearcherConfig;
use crate::error::{Result, SpyglassError};
use crate::global_index::GlobalIndex;
use crate::segment::{Segment, SegmentResult, Segmenter, index_segment};

/// Builds a [`GlobalIndex`] by indexing document segments in parallel.
#[derive(Debug, Clone)]
pub struct ParallelIndexEngine {
    /// Configuration for the engine.
    config: SearcherConfig,

    /// Splits the document into segments.
    segmenter: Segmenter,

    /// Tokenizer shared by value with every worker.
    tokenizer: SeparatorTokenizer,
}

impl ParallelIndexEngine {
    /// Create a new parallel indexing engine.
    pub fn new(config: SearcherConfig) -> Result<Self> {
        config.validate()?;

        let tokenizer = SeparatorTokenizer::new(config.separator);
        let segmenter = Segmenter::new(config.max_segments, tokenizer);

        Ok(Self {
            config,
            segmenter,
            tokenizer,
        })
    }

    /// Get the configuration.
    pub fn config(&self) -> &SearcherConfig {
        &self.config
    }

    /// Get the tokenizer used by the workers.
    pub fn tokenizer(&self) -> &SeparatorTokenizer {
        &self.tokenizer
    }

    /// Index `document` and merge the per-segment results.
    ///
    /// Blocks until every worker has finished. Fails if any segment fails;
    /// no partial index is ever returned.
    pub fn build(&self, document: &str) -> Result<GlobalIndex> {
        let timer = Instant::now();

        let segments = self.segmenter.segments(document)?;
        if segments.is_empty() {
            debug!("Empty document, nothing to index");
            return GlobalIndex::merge(Vec::new(), 0);
        }

        let results = self.index_segments_parallel(document, &segments)?;
        let index = GlobalIndex::merge(results, segments.len())?;

        info!(
            "Indexed {} bytes into {} tokens across {} segments in {:?}",
            document.len(),
            index.token_count(),
            index.segment_count(),
            timer.elapsed()
        );

        Ok(index)
    }

    /// Create a pool with one thread per segment.
    fn create_thread_pool(&self, num_threads: usize) -> Result<ThreadPool> {
        let prefix = self.config.thread_name_prefix.clone();
        ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .thread_name(move |i| format!("{prefix}-{i}"))
            .build()
            .map_err(|e| SpyglassError::thread_pool(format!("Failed to create thread pool: {e}")))
    }

    /// Run one indexing task per segment and collect every result.
    ///
    /// Results are returned in completion order; ordering is restored by the
    /// merge. The pool is dropped once all tasks have reported.
    fn index_segments_parallel(
        &self,
        document: &str,
        segments: &[Segment],
    ) -> Result<Vec<SegmentResult>> {
        let thread_pool = self.create_thread_pool(segments.len())?;
        let (tx, rx) = unbounded();

        thread_pool.scope(|scope| {
            for segment in segments {
                let tx = tx.clone();
                let tokenizer = self.tokenizer;

                scope.spawn(move |_| {
                    let result = Self::process_segment(document, segment, &tokenizer);
                    if let Err(e) = tx.send((segment.id, result)) {
                        warn!("Segment {} result was dropped: {e}", segment.id);
                    }
                });
            }
        });

        // Drop the original sender so the receiver knows when all tasks are done
        drop(tx);

        let mut results = Vec::with_capacity(segments.len());
        let mut failures = Vec::new();
        for (segment_id, result) in rx.iter() {
            match result {
                Ok(result) => {
                    debug!(
                        "Segment {} ({}..={}): {} tokens, {} distinct terms",
                        segment_id,
                        result.segment().start,
                        result.segment().end,
                        result.token_count(),
                        result.distinct_terms()
                    );
                    results.push(result);
                }
                Err(e) => {
                    warn!("Segment {segment_id} failed to index: {e}");
                    failures.push((segment_id, e));
                }
            }
        }

        // Report the lowest failing segment so the error does not depend on
        // scheduling.
        failures.sort_by_key(|(segment_id, _)| *segment_id);
        if let Some((_, error)) = failures.into_iter().next() {
            return Err(error);
        }

        Ok(results)
    }

    /// Index a single segment, turning a worker panic into an indexing error.
    fn process_segment(
        document: &str,
        segment: &Segment,
        tokenizer: &SeparatorTokenizer,
    ) -> Result<SegmentResult> {
        Self::catch_worker_panic(segment.id, || {
            index_segment(document, segment, tokenizer)
        })
    }

    fn catch_worker_panic<F>(segment_id: usize, task: F) -> Result<SegmentResult>
    where
        F: FnOnce() -> Result<SegmentResult>,
    {
        panic::catch_unwind(AssertUnwindSafe(task)).unwrap_or_else(|_| {
            Err(SpyglassError::indexing(format!(
                "worker for segment {segment_id} panicked"
            )))
        })
    }
}
