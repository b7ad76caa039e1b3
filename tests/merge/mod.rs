mod merge_conflicting_changes;
mod merge_fast_forward;
