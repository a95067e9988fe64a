pub mod api;
pub mod form;
pub mod icons;
pub mod list_utils;
pub mod list_view;
pub mod modal_frame;
pub mod modal_stack;
pub mod toast;

/// Формат вывода серверного timestamp в таблицах
pub fn format_timestamp(dt: chrono::DateTime<chrono::Utc>) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}
