//! Persisted editor preferences used by the news screen.

use rhre_core::error::Result;

/// Preference key holding the id of the newest article already seen.
pub const LAST_NEWS: &str = "lastNews";

/// String key-value preferences persisted by the editor.
pub trait PreferenceStore {
    fn get_string(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, or removes the key when `value` is `None`.
    fn put_string(&mut self, key: &str, value: Option<&str>);

    /// Writes pending changes to storage.
    fn flush(&mut self) -> Result<()>;
}
