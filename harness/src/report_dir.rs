//! Report directory persistence: write/read/verify a [`RunReport`] on disk.
//!
//! # Directory layout
//!
//! ```text
//! <dir>/
//!   report.json         run report as JSON
//!   report_digest.txt   ASCII digest of report.json (e.g. "sha256:...")
//! ```
//!
//! The directory path is never part of any hash surface.
//!
//! # Fail-closed semantics
//!
//! - Missing report or digest file → error
//! - Extra files → error
//! - Stored digest doesn't match the report bytes → error
//! - Policy or result digest inside the report doesn't match its content → error

use std::collections::BTreeSet;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use lodestar_search::digest::{canonical_hash, ContentHash, DOMAIN_RUN_REPORT};

use crate::runner::RunReport;

const REPORT_FILENAME: &str = "report.json";
const DIGEST_FILENAME: &str = "report_digest.txt";

const REPORT_FILENAMES: &[&str] = &[REPORT_FILENAME, DIGEST_FILENAME];

/// Error writing or reading a report directory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportDirError {
    #[error("I/O error: {detail}")]
    Io { detail: String },

    #[error("missing file: {filename}")]
    MissingFile { filename: String },

    #[error("undeclared extra file: {name}")]
    ExtraFile { name: String },

    #[error("malformed digest file: {value:?}")]
    MalformedDigest { value: String },

    #[error("digest mismatch: stored={stored}, recomputed={recomputed}")]
    DigestMismatch { stored: String, recomputed: String },

    #[error("{field} mismatch: stored={stored}, recomputed={recomputed}")]
    BindingMismatch {
        field: &'static str,
        stored: String,
        recomputed: String,
    },

    #[error("report.json is not in canonical form")]
    NonCanonical,

    #[error("JSON error: {detail}")]
    Json { detail: String },
}

impl From<serde_json::Error> for ReportDirError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json {
            detail: e.to_string(),
        }
    }
}

/// Write `report` to `dir`, creating it if needed. Returns the report digest.
///
/// # Errors
///
/// Returns [`ReportDirError`] on I/O failure or serialization error.
pub fn write_report_dir<S: Serialize>(
    report: &RunReport<S>,
    dir: &Path,
) -> Result<ContentHash, ReportDirError> {
    std::fs::create_dir_all(dir).map_err(|e| ReportDirError::Io {
        detail: format!("create_dir_all: {e}"),
    })?;

    let bytes = report.to_json_bytes()?;
    let digest = canonical_hash(DOMAIN_RUN_REPORT, &bytes);

    write_atomic(&dir.join(REPORT_FILENAME), &bytes)?;
    write_atomic(&dir.join(DIGEST_FILENAME), digest.as_str().as_bytes())?;

    tracing::debug!(dir = %dir.display(), digest = %digest, "report written");
    Ok(digest)
}

/// Read a report directory written by [`write_report_dir`].
///
/// Checks the directory holds exactly the report files and that the stored
/// digest matches the bytes of `report.json`.
///
/// # Errors
///
/// Returns [`ReportDirError`] on any validation failure.
pub fn read_report_dir<S: DeserializeOwned>(dir: &Path) -> Result<RunReport<S>, ReportDirError> {
    let (bytes, _) = read_checked(dir)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Read a report directory and re-derive every digest it carries.
///
/// On top of [`read_report_dir`], the report must re-serialize to the exact
/// stored bytes, and its policy and result digests must match their content.
/// Returns the verified report digest.
///
/// # Errors
///
/// Returns [`ReportDirError`] on any validation failure.
pub fn verify_report_dir<S>(dir: &Path) -> Result<ContentHash, ReportDirError>
where
    S: DeserializeOwned + Serialize,
{
    let (bytes, digest) = read_checked(dir)?;
    let report: RunReport<S> = serde_json::from_slice(&bytes)?;

    if report.to_json_bytes()? != bytes {
        return Err(ReportDirError::NonCanonical);
    }

    check_binding(
        "policy_digest",
        &report.policy_digest,
        &report.policy.digest()?,
    )?;
    check_binding(
        "result_digest",
        &report.result_digest,
        &report.result.digest()?,
    )?;

    Ok(digest)
}

/// Enforce the file set and the stored digest; return report bytes and digest.
fn read_checked(dir: &Path) -> Result<(Vec<u8>, ContentHash), ReportDirError> {
    let present = list_files(dir)?;
    for name in REPORT_FILENAMES {
        if !present.contains(*name) {
            return Err(ReportDirError::MissingFile {
                filename: (*name).to_string(),
            });
        }
    }
    if let Some(extra) = present.iter().find(|n| !REPORT_FILENAMES.contains(&n.as_str())) {
        return Err(ReportDirError::ExtraFile {
            name: extra.clone(),
        });
    }

    let bytes = read_required(dir, REPORT_FILENAME)?;
    let digest_bytes = read_required(dir, DIGEST_FILENAME)?;
    let digest_str = String::from_utf8_lossy(&digest_bytes);
    let stored =
        ContentHash::parse(digest_str.trim()).ok_or_else(|| ReportDirError::MalformedDigest {
            value: digest_str.to_string(),
        })?;

    let recomputed = canonical_hash(DOMAIN_RUN_REPORT, &bytes);
    if stored != recomputed {
        return Err(ReportDirError::DigestMismatch {
            stored: stored.to_string(),
            recomputed: recomputed.to_string(),
        });
    }
    Ok((bytes, recomputed))
}

fn check_binding(
    field: &'static str,
    stored: &ContentHash,
    recomputed: &ContentHash,
) -> Result<(), ReportDirError> {
    if stored == recomputed {
        Ok(())
    } else {
        Err(ReportDirError::BindingMismatch {
            field,
            stored: stored.to_string(),
            recomputed: recomputed.to_string(),
        })
    }
}

/// Write to a temp file in the same directory, then rename.
fn write_atomic(path: &Path, content: &[u8]) -> Result<(), ReportDirError> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let temp_name = format!(
        ".tmp_{}",
        path.file_name().unwrap_or_default().to_string_lossy()
    );
    let temp_path = dir.join(temp_name);

    std::fs::write(&temp_path, content).map_err(|e| ReportDirError::Io {
        detail: format!("write {}: {e}", temp_path.display()),
    })?;
    std::fs::rename(&temp_path, path).map_err(|e| ReportDirError::Io {
        detail: format!("rename {} → {}: {e}", temp_path.display(), path.display()),
    })
}

fn read_required(dir: &Path, filename: &str) -> Result<Vec<u8>, ReportDirError> {
    std::fs::read(dir.join(filename)).map_err(|_| ReportDirError::MissingFile {
        filename: filename.to_string(),
    })
}

/// Regular files in `dir`, names only. Leftover temp files are ignored.
fn list_files(dir: &Path) -> Result<BTreeSet<String>, ReportDirError> {
    let mut files = BTreeSet::new();
    let entries = std::fs::read_dir(dir).map_err(|e| ReportDirError::Io {
        detail: format!("read_dir {}: {e}", dir.display()),
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| ReportDirError::Io {
            detail: format!("dir entry: {e}"),
        })?;
        let file_type = entry.file_type().map_err(|e| ReportDirError::Io {
            detail: format!("file_type: {e}"),
        })?;
        if file_type.is_file() {
            if let Some(name) = entry.file_name().to_str() {
                if !name.starts_with(".tmp_") {
                    files.insert(name.to_string());
                }
            }
        }
    }
    Ok(files)
}
