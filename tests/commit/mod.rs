mod commit_staged_changes_successfully;
mod commit_without_changes_fails;
mod global_log_lists_every_commit;
mod log_follows_current_branch;
