use crate::attention::notification::Notification;
use crate::attention::summary::{WorkflowSnapshot, WorkflowSummary};
use crate::attention::transitions::classify_transition;
use std::collections::{BTreeMap, BTreeSet};

/// Watches the polled active-workflow list across ticks and produces at most
/// one notification per detected attention transition.
///
/// All state is in-memory and scoped to one tracker instance: a per-id
/// snapshot of the last observed `{status, step}` and the set of dedupe keys
/// already delivered. Both are purged for ids that drop out of the active
/// list, which re-arms every rule for a later occurrence of the same
/// workflow.
#[derive(Debug, Default)]
pub struct AttentionTracker {
    snapshots: BTreeMap<u64, WorkflowSnapshot>,
    notified: BTreeSet<String>,
}

impl AttentionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one poll tick. `summaries` is the full current active list,
    /// `viewed` the workflow id of the detail view the user is on, if any.
    /// Returns the notifications to deliver for this tick, in input order.
    pub fn tick(
        &mut self,
        summaries: &[WorkflowSummary],
        viewed: Option<u64>,
    ) -> Vec<Notification> {
        let mut notifications = Vec::new();
        for summary in summaries {
            if let Some(reason) = classify_transition(self.snapshots.get(&summary.id), summary) {
                let key = reason.dedupe_key(summary.id);
                // A suppressed occurrence does not consume its key: if the
                // user was already looking at the workflow, a later
                // occurrence may still notify.
                if viewed != Some(summary.id) && !self.notified.contains(&key) {
                    self.notified.insert(key);
                    notifications.push(Notification::for_transition(summary, reason));
                }
            }
            self.snapshots
                .insert(summary.id, WorkflowSnapshot::observed(summary));
        }
        self.purge_inactive(summaries);
        notifications
    }

    /// Drop snapshots and dedupe keys for workflow ids no longer in the
    /// active list.
    fn purge_inactive(&mut self, summaries: &[WorkflowSummary]) {
        let active: BTreeSet<u64> = summaries.iter().map(|summary| summary.id).collect();
        self.snapshots.retain(|id, _| active.contains(id));
        self.notified
            .retain(|key| dedupe_key_workflow_id(key).is_some_and(|id| active.contains(&id)));
    }

    pub fn snapshot(&self, workflow_id: u64) -> Option<&WorkflowSnapshot> {
        self.snapshots.get(&workflow_id)
    }

    pub fn has_notified(&self, dedupe_key: &str) -> bool {
        self.notified.contains(dedupe_key)
    }

    pub fn tracked_count(&self) -> usize {
        self.snapshots.len()
    }
}

fn dedupe_key_workflow_id(key: &str) -> Option<u64> {
    key.split(':').next()?.parse().ok()
}
