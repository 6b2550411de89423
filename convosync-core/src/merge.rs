//! Merger: joins two conversation logs into one session
//!
//! The older log goes first, every record is moved into a single target
//! session, and the root of the newer log is re-parented onto the last
//! record of the older one so the combined log reads as one chain.

use crate::error::{ConvoSyncError, Result};
use crate::models::record::Record;

/// What a merge did, for progress output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeReport {
    pub first_count: usize,
    pub second_count: usize,
    /// `None` when one side was empty and nothing was rewritten.
    pub target_session_id: Option<String>,
    pub linked: bool,
}

impl MergeReport {
    pub fn total(&self) -> usize {
        self.first_count + self.second_count
    }
}

#[derive(Debug, Clone)]
pub struct Merged {
    pub records: Vec<Record>,
    pub report: MergeReport,
}

/// Merge `first` (older) and `second` (newer) into one record sequence.
///
/// If either side is empty the other is returned as-is, without session
/// rewriting.
pub fn merge(
    first: &[Record],
    second: &[Record],
    target_session_id: Option<&str>,
) -> Result<Vec<Record>> {
    Ok(merge_with_report(first, second, target_session_id)?.records)
}

/// Same as [`merge`], also returning a [`MergeReport`].
///
/// Only the fields on the merge path are required: `sessionId` on the
/// first new record when no target is given, `uuid` on the last old
/// record, and `uuid` on the first new record when it gets linked.
pub fn merge_with_report(
    first: &[Record],
    second: &[Record],
    target_session_id: Option<&str>,
) -> Result<Merged> {
    let (Some(last), Some(head)) = (first.last(), second.first()) else {
        tracing::info!(
            first = first.len(),
            second = second.len(),
            "One conversation is empty, returning the other unchanged"
        );
        let records = if first.is_empty() { second } else { first };
        return Ok(Merged {
            records: records.to_vec(),
            report: MergeReport {
                first_count: first.len(),
                second_count: second.len(),
                target_session_id: None,
                linked: false,
            },
        });
    };

    let target = match target_session_id {
        Some(id) => id,
        None => head.session_id().ok_or(ConvoSyncError::MissingField {
            field: "sessionId",
            record: "first record of the new conversation",
        })?,
    }
    .to_string();

    let last_uuid = last.uuid().ok_or(ConvoSyncError::MissingField {
        field: "uuid",
        record: "last record of the old conversation",
    })?;

    tracing::info!(
        old = first.len(),
        new = second.len(),
        target_session_id = %target,
        "Merging conversations"
    );

    let mut records = Vec::with_capacity(first.len() + second.len());
    records.extend(first.iter().map(|r| r.with_session_id(&target)));

    let mut linked = false;
    for (i, record) in second.iter().enumerate() {
        let mut copy = record.with_session_id(&target);
        if i == 0 && copy.is_root() {
            let child = copy.uuid().ok_or(ConvoSyncError::MissingField {
                field: "uuid",
                record: "first record of the new conversation",
            })?;
            tracing::info!(
                parent = %last_uuid,
                child = %child,
                "Linked new conversation start to old conversation end"
            );
            copy.set_parent_uuid(last_uuid);
            linked = true;
        }
        records.push(copy);
    }

    tracing::info!(total = records.len(), "Merge finished");

    Ok(Merged {
        report: MergeReport {
            first_count: first.len(),
            second_count: second.len(),
            target_session_id: Some(target),
            linked,
        },
        records,
    })
}
