// File-backed stores. Each one loads its file once when opened and rewrites
// it on every mutation; failures are logged and never reach the caller.

mod bookmark;
mod json_file;
mod progress;
mod recent;

pub use bookmark::BookmarkStore;
pub use progress::ProgressStore;
pub use recent::RecentStore;
