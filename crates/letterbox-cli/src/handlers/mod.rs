pub mod config_show;
pub mod letter_delete;
pub mod letter_list;
pub mod letter_show;
