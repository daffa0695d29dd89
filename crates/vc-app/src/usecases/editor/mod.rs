mod detect_editor;
mod select_editor;

pub use detect_editor::DetectEditor;
pub use select_editor::SelectEditor;
