//! The load, classify, fix and store pipeline, extracted from the CLI.
//!
//! The entry point is I/O-agnostic: all storage access goes through the
//! [`RecordStore`] port.

use crate::codec::{parse_records, serialize_records};
use crate::ports::RecordStore;
use crate::settings::RunSettings;
use camino::Utf8PathBuf;
use hebfix_domain::Planner;
use hebfix_edit::{EditError, apply_plan, render_patch};
use hebfix_types::record::Record;
use hebfix_types::report::FixReport;
use sha2::{Digest, Sha256};
use tracing::{debug, info};

/// Error type for pipeline results. Every variant aborts the run with exit code 1.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    /// Storage missing, unreadable, or not a JSON array of objects. Nothing was written.
    #[error("cannot load records from {path}")]
    Load {
        path: Utf8PathBuf,
        #[source]
        source: anyhow::Error,
    },

    /// A record flagged as reversed cannot be fixed. Nothing was written.
    #[error("cannot fix records")]
    Shape(#[from] EditError),

    /// Storage could not be written. The file may have been partially overwritten.
    #[error("cannot write records to {path}")]
    Write {
        path: Utf8PathBuf,
        #[source]
        source: anyhow::Error,
    },
}

/// Outcome of `run_fix`.
#[derive(Debug)]
pub struct FixOutcome {
    pub records: Vec<Record>,
    pub report: FixReport,
    /// Stored contents before the run.
    pub before: String,
    /// Contents written back (or that would be, on a dry run).
    pub after: String,
    pub backup: Option<Utf8PathBuf>,
    location: Utf8PathBuf,
}

impl FixOutcome {
    /// Unified diff of the data file.
    pub fn patch(&self) -> String {
        render_patch(self.location.as_str(), &self.before, &self.after)
    }
}

/// Run the pipeline against a store.
///
/// The whole collection is re-serialized and written back, even when no
/// record needed fixing, unless `settings.dry_run` is set.
pub fn run_fix(settings: &RunSettings, store: &dyn RecordStore) -> Result<FixOutcome, ToolError> {
    let location = store.location().to_path_buf();

    let before = store.read().map_err(|source| ToolError::Load {
        path: location.clone(),
        source,
    })?;
    let records = parse_records(&before).map_err(|e| ToolError::Load {
        path: location.clone(),
        source: e.into(),
    })?;
    debug!(path = %location, records = records.len(), "loaded records");

    let plan = Planner::new(settings.rules.clone()).plan(&records);
    let fixed = apply_plan(&records, &plan)?;

    let after = serialize_records(&fixed).map_err(|source| ToolError::Write {
        path: location.clone(),
        source,
    })?;

    let mut report = FixReport::new(plan.ids(), records.len());
    report.dry_run = settings.dry_run;
    report.sha256_before = Some(sha256_hex(before.as_bytes()));
    report.sha256_after = Some(sha256_hex(after.as_bytes()));

    let mut backup = None;
    if settings.dry_run {
        info!(path = %location, fixed = report.fixed, total = report.total, "dry run; not writing");
    } else {
        if settings.backup_enabled {
            let target = store
                .backup(&settings.backup_suffix)
                .map_err(|source| ToolError::Write {
                    path: location.clone(),
                    source,
                })?;
            backup = Some(target);
        }
        store.write(&after).map_err(|source| ToolError::Write {
            path: location.clone(),
            source,
        })?;
        info!(path = %location, fixed = report.fixed, total = report.total, "wrote records");
    }

    Ok(FixOutcome {
        records: fixed,
        report,
        before,
        after,
        backup,
        location,
    })
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryRecordStore;
    use hebfix_types::record::RecordId;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const MIXED: &str = r#"[
  {"id": 1, "text": " המ תלוכי?", "options": ["ןכ", "אל"]},
  {"id": 2, "text": "מה התלוכי?", "options": ["כן", "לא"]}
]"#;

    #[test]
    fn fixes_only_reversed_record() {
        let store = InMemoryRecordStore::new("q.json", MIXED);
        let outcome = run_fix(&RunSettings::default(), &store).expect("run");

        assert_eq!(outcome.report.fixed, 1);
        assert_eq!(outcome.report.total, 2);
        assert_eq!(outcome.report.fixed_ids, vec![RecordId(json!(1))]);
        assert_eq!(outcome.records[0].get_str("text"), Some("?יכולת מה "));
        assert_eq!(outcome.records[1].get_str("text"), Some("מה התלוכי?"));
        assert_eq!(store.contents().as_deref(), Some(outcome.after.as_str()));
        assert_eq!(store.write_count(), 1);
        assert!(outcome.backup.is_none());
    }

    #[test]
    fn dry_run_leaves_store_untouched() {
        let store = InMemoryRecordStore::new("q.json", MIXED);
        let settings = RunSettings {
            dry_run: true,
            ..Default::default()
        };
        let outcome = run_fix(&settings, &store).expect("run");

        assert!(outcome.report.dry_run);
        assert_eq!(outcome.report.fixed, 1);
        assert_eq!(store.write_count(), 0);
        assert_eq!(store.contents().as_deref(), Some(MIXED));
        assert!(outcome.patch().contains("?יכולת מה "));
    }

    #[test]
    fn backup_taken_before_overwrite() {
        let store = InMemoryRecordStore::new("q.json", MIXED);
        let settings = RunSettings {
            backup_enabled: true,
            ..Default::default()
        };
        let outcome = run_fix(&settings, &store).expect("run");

        let backups = store.backups();
        assert_eq!(backups.len(), 1);
        assert_eq!(backups[0].0, Utf8PathBuf::from("q.json.hebfix.bak"));
        assert_eq!(backups[0].1, MIXED);
        assert_eq!(outcome.backup, Some(backups[0].0.clone()));
    }

    #[test]
    fn rewrites_even_when_nothing_to_fix() {
        let store = InMemoryRecordStore::new("q.json", r#"[{"id":1,"text":"מה זה?","options":[]}]"#);
        let outcome = run_fix(&RunSettings::default(), &store).expect("run");
        assert_eq!(outcome.report.fixed, 0);
        assert_eq!(store.write_count(), 1);
        assert_ne!(outcome.report.sha256_before, outcome.report.sha256_after);
    }

    #[test]
    fn wide_integer_ids_survive_the_rewrite() {
        let store = InMemoryRecordStore::new(
            "q.json",
            r#"[{"id":123456789012345678901234567890,"text":" המ ?","options":[]}]"#,
        );
        let outcome = run_fix(&RunSettings::default(), &store).expect("run");

        assert_eq!(outcome.report.fixed_ids[0].to_string(), "123456789012345678901234567890");
        assert!(outcome.after.contains("\"id\": 123456789012345678901234567890,"));
    }

    #[test]
    fn load_failure_writes_nothing() {
        let store = InMemoryRecordStore::new("q.json", "not json");
        let err = run_fix(&RunSettings::default(), &store).expect_err("bad json");
        assert!(matches!(err, ToolError::Load { .. }));
        assert_eq!(store.write_count(), 0);

        let err = run_fix(&RunSettings::default(), &InMemoryRecordStore::missing("q.json"))
            .expect_err("missing");
        assert!(err.to_string().contains("q.json"));
    }

    #[test]
    fn shape_failure_writes_nothing() {
        let store = InMemoryRecordStore::new(
            "q.json",
            r#"[{"id":1,"text":"ok"},{"id":9,"text":" המ ?"}]"#,
        );
        let err = run_fix(&RunSettings::default(), &store).expect_err("missing options");
        match err {
            ToolError::Shape(e) => {
                assert_eq!(e.root(), &EditError::MissingField { field: "options" })
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(store.write_count(), 0);
    }

    #[test]
    fn write_failure_is_reported() {
        let store = InMemoryRecordStore::new("q.json", MIXED).read_only();
        let err = run_fix(&RunSettings::default(), &store).expect_err("read only");
        assert!(matches!(err, ToolError::Write { .. }));
    }
}
