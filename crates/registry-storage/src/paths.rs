//! Default locations of the item-list file and the transcript log.

use std::{
    env,
    ffi::OsString,
    path::PathBuf,
};

const ITEM_LIST_RELATIVE: &str = "Documents/EventRegistry/ItemList.txt";
const LOG_RELATIVE: &str = "Documents/EventRegistry/EventRegistry.log";

/// `{home}/Documents/EventRegistry/ItemList.txt`.
pub fn default_item_list_path() -> Option<PathBuf> {
    home_dir().map(|home| home.join(ITEM_LIST_RELATIVE))
}

/// `{home}/Documents/EventRegistry/EventRegistry.log`.
pub fn default_log_path() -> Option<PathBuf> {
    home_dir().map(|home| home.join(LOG_RELATIVE))
}

/// Resolves the user's home directory the way the file format documents it:
/// `HOMEPATH` (Windows family) first, then `HOME`, then the platform home
/// lookup as a fallback.
pub fn home_dir() -> Option<PathBuf> {
    resolve_home(env::var_os("HOMEPATH"), env::var_os("HOME")).or_else(dirs::home_dir)
}

fn resolve_home(homepath: Option<OsString>, home: Option<OsString>) -> Option<PathBuf> {
    homepath.or(home).map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn homepath_wins_over_home() {
        let resolved = resolve_home(
            Some(OsString::from("/windows-home")),
            Some(OsString::from("/unix-home")),
        );
        assert_eq!(resolved, Some(PathBuf::from("/windows-home")));
    }

    #[test]
    fn home_is_used_when_homepath_is_absent() {
        let resolved = resolve_home(None, Some(OsString::from("/unix-home")));
        assert_eq!(resolved, Some(PathBuf::from("/unix-home")));
    }

    #[test]
    fn neither_variable_yields_none() {
        assert_eq!(resolve_home(None, None), None);
    }
}
