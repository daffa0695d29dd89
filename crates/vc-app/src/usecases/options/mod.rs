mod apply_profile;
mod scan_enabled_options;
mod update_options;

pub use apply_profile::ApplyProfile;
pub use scan_enabled_options::ScanEnabledOptions;
pub use update_options::UpdateOptions;
