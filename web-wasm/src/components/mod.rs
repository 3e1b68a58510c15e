pub mod header;
pub mod upload_area;
pub mod image_preview;
pub mod mode_toggle;
pub mod analysis_results;
pub mod prompt_panel;
pub mod history_panel;
pub mod progress_bar;
pub mod notification;
pub mod save_dialog;
