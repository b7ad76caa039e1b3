mod add_unchanged_tracked_file_stages_nothing;
mod add_modified_file_stages_it_once;
mod add_file_with_line_break_fails;
