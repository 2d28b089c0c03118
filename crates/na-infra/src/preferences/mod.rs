mod file_store;

pub use file_store::{FilePreferenceStore, PREFERENCES_FILE_SUFFIX};
