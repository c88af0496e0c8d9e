pub mod chart_data_point;
pub mod folder;
pub mod history_item;
pub mod history_record;
pub mod lookup_row;
pub mod output_file;
pub mod user;
pub mod user_preference;
