mod compare_directories_in_path_order;
mod compare_directories_with_stat_flag;
mod compare_file_with_directory_fails;
mod compare_files_with_selected_algorithm;
mod compare_identical_generated_projects_prints_nothing;
mod compare_missing_files;
