//! 画面コンポーネント

pub mod analyzing_view;
pub mod dish_card;
pub mod error_view;
pub mod header;
pub mod results_view;
pub mod settings_panel;
pub mod upload_area;
