//! Fan-out/fan-in aggregation engine.
//!
//! Candidates are pushed through a bounded job channel to a fixed pool of
//! worker threads; each worker analyzes files and emits tallies on a
//! bounded result channel. The calling thread is the single aggregation
//! point: it alone merges tallies into the `ScanResult`, so the map needs
//! no locking while analysis stays fully parallel.
//!
//! Fail-fast: the first worker error is captured in a capacity-1 error
//! channel (written at most once) and flips a shared cancellation flag.
//! The feeder stops dispatching, the pool drains, already-computed tallies
//! for other files may be discarded, and the engine returns the error
//! instead of a silently incomplete report.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use crossbeam_channel::bounded;

use crate::analyzer::analyze_file;
use crate::config::ScanConfig;
use crate::error::ExtlocError;
use crate::stats::{FileTally, ScanResult};
use crate::Result;

/// Analyze `candidates` on `worker_count` threads (floor 1) and merge the
/// tallies into a [`ScanResult`].
///
/// The per-extension totals are identical for any worker scheduling or
/// dispatch order; merging is pure summation.
pub fn run(
    candidates: Vec<PathBuf>,
    config: &ScanConfig,
    worker_count: usize,
) -> Result<ScanResult> {
    let worker_count = worker_count.max(1);

    let (job_tx, job_rx) = bounded::<PathBuf>(worker_count * 2);
    let (tally_tx, tally_rx) = bounded::<FileTally>(worker_count * 2);
    let (err_tx, err_rx) = bounded::<ExtlocError>(1);
    let cancelled = AtomicBool::new(false);

    let result = thread::scope(|scope| {
        for _ in 0..worker_count {
            let job_rx = job_rx.clone();
            let tally_tx = tally_tx.clone();
            let err_tx = err_tx.clone();
            let cancelled = &cancelled;
            scope.spawn(move || {
                for path in job_rx.iter() {
                    if cancelled.load(Ordering::Relaxed) {
                        break;
                    }
                    match analyze_file(&path, config) {
                        Ok(tally) => {
                            if tally_tx.send(tally).is_err() {
                                break;
                            }
                        }
                        Err(err) => {
                            cancelled.store(true, Ordering::Relaxed);
                            // only the first error is kept
                            let _ = err_tx.try_send(err);
                            break;
                        }
                    }
                }
            });
        }
        // the aggregator keeps no sender; workers hold the only clones
        drop(job_rx);
        drop(tally_tx);
        drop(err_tx);

        let feeder_cancelled = &cancelled;
        scope.spawn(move || {
            for path in candidates {
                if feeder_cancelled.load(Ordering::Relaxed) {
                    break;
                }
                if job_tx.send(path).is_err() {
                    break;
                }
            }
        });

        let mut result = ScanResult::new();
        for tally in tally_rx.iter() {
            result.merge(&tally);
        }
        result
    });

    match err_rx.try_recv() {
        Ok(err) => Err(err),
        Err(_) => Ok(result),
    }
}
