/// View components
///
/// Each component is a plain function from borrowed state to an `Element`;
/// user interaction flows back up as `crate::Message`.
/// - clothing_selector.rs - garment pick list
/// - image_uploader.rs - file picker and Upload button
/// - preview_canvas.rs - composed preview display
/// - widget_notice.rs - static embed snippet panel

pub mod clothing_selector;
pub mod image_uploader;
pub mod preview_canvas;
pub mod widget_notice;
