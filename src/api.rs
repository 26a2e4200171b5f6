use std::path::Path;

use rayon::prelude::*;

use crate::config::ProbeConfig;
use crate::error::{ProbeError, Result};
use crate::index::scanner;
use crate::types::MediaFile;

/// Probe a media file and return its stream inventory.
///
/// Open or parse failures abort the probe; per-stream problems never do.
pub fn probe<P: AsRef<Path>>(path: P) -> Result<MediaFile> {
    scanner::scan_file(path)
}

/// Probe a media file with a custom configuration
pub fn probe_with_config<P: AsRef<Path>>(path: P, config: &ProbeConfig) -> Result<MediaFile> {
    scanner::scan_file_with_config(path, config)
}

/// Probe several files concurrently.
///
/// Files are probed on a dedicated pool of `config.effective_workers()`
/// threads, each file with its own demuxer context. Results are returned in
/// the order of `paths`; one file failing does not affect the others.
pub fn probe_many<P: AsRef<Path> + Sync>(
    paths: &[P],
    config: &ProbeConfig,
) -> Result<Vec<Result<MediaFile>>> {
    if paths.is_empty() {
        return Ok(Vec::new());
    }

    let workers = config.effective_workers().min(paths.len());
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|idx| format!("probe-{}", idx))
        .build()
        .map_err(|e| ProbeError::Config(format!("Failed to create probe thread pool: {}", e)))?;

    tracing::debug!("Probing {} files on {} workers", paths.len(), workers);

    Ok(pool.install(|| {
        paths
            .par_iter()
            .map(|path| {
                let result = probe_with_config(path, config);
                if let Err(e) = &result {
                    tracing::warn!("Skipping unusable file: {}", e);
                }
                result
            })
            .collect()
    }))
}
