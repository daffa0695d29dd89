mod select_workspace;

pub use select_workspace::SelectWorkspace;
