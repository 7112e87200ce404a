//! Parallel batch utilities.

use anyhow::{Context, Result, bail};
use log::info;
use rayon::{ThreadPoolBuilder, prelude::*};

/// Result of a parallel batch operation.
#[derive(Debug, Default)]
pub struct BatchResult {
    pub succeeded: usize,
    pub failed: usize,
}

impl BatchResult {
    pub fn total(&self) -> usize {
        self.succeeded + self.failed
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }

    pub fn ok_or_bail(&self, operation: &str) -> Result<()> {
        if self.failed > 0 {
            bail!("{operation} failed: {} succeeded, {} failed", self.succeeded, self.failed);
        }
        Ok(())
    }
}

/// Size the global rayon pool. `None` keeps rayon's default of one thread per core.
pub fn configure_threads(jobs: Option<usize>) -> Result<()> {
    let Some(jobs) = jobs else { return Ok(()) };
    if jobs == 0 {
        bail!("--jobs must be at least 1");
    }
    ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build_global()
        .context("Failed to configure worker threads")?;
    info!("using {jobs} worker thread(s)");
    Ok(())
}

/// Run `op` over `items` in parallel and print the outputs in input order.
///
/// Failures are reported on stderr and counted; they do not stop the batch.
pub fn process_parallel_iter<T, F>(
    label: &str,
    items: impl IntoIterator<Item = T>,
    op: F,
) -> BatchResult
where
    T: Send,
    F: Fn(T) -> Result<String> + Sync,
{
    let items: Vec<T> = items.into_iter().collect();
    let results: Vec<_> = items.into_par_iter().map(&op).collect();

    let mut result = BatchResult::default();
    for r in results {
        match r {
            Ok(output) => {
                print!("{output}");
                result.succeeded += 1;
            }
            Err(e) => {
                eprintln!("{e:?}");
                result.failed += 1;
            }
        }
    }

    info!("{label}: {} succeeded, {} failed", result.succeeded, result.failed);
    result
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;

    use super::*;

    #[test]
    fn failures_are_counted_not_fatal() {
        let result = process_parallel_iter("test", 0..6, |i| {
            if i % 3 == 0 { Err(anyhow!("item {i}")) } else { Ok(String::new()) }
        });
        assert_eq!((result.succeeded, result.failed), (4, 2));
        assert_eq!(result.total(), 6);
        assert!(!result.all_succeeded());
        assert!(result.ok_or_bail("test").is_err());
    }

    #[test]
    fn zero_jobs_is_rejected() {
        assert!(configure_threads(Some(0)).is_err());
        assert!(configure_threads(None).is_ok());
    }
}
