mod list_setups;
mod scan_compilers;
mod select_compiler;
mod verify_compiler;

pub use list_setups::ListSetups;
pub use scan_compilers::ScanCompilers;
pub use select_compiler::SelectCompiler;
pub use verify_compiler::VerifyCompiler;
