pub mod config;
pub mod letter;

pub use config::{present_config, present_guidance};
pub use letter::{
    present_delete_result, present_letter_detail, present_letter_list, present_letter_not_found,
};
