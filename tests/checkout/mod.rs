mod checkout_branch_with_untracked_obstruction_fails;
mod checkout_current_or_missing_branch_fails;
