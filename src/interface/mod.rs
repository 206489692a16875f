pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_custom_items, prompt_form_field, prompt_menu_mode, prompt_package, prompt_yes_no,
};
pub use render::{
    display_custom_summary, display_event_day, display_master_menu, display_package,
    display_package_list, display_quote, display_request,
};
