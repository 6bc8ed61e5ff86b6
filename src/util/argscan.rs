//! Token-level checks over forwarded arguments. Report modes are chosen by
//! flag membership so that tokens meant for a delegate never block them.

use std::ffi::{OsStr, OsString};

/// Whether `flag` appears verbatim among `args`.
pub fn has_flag(args: &[OsString], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

/// Value of the first occurrence of any of `names`, either as the next
/// token or in `--name=value` form. A trailing flag with no value yields
/// `None`.
pub fn flag_value<'a>(args: &'a [OsString], names: &[&str]) -> Option<&'a OsStr> {
    args.iter().enumerate().find_map(|(i, a)| {
        if names.iter().any(|n| a == *n) {
            return args.get(i + 1).map(OsString::as_os_str);
        }
        let token = a.to_str()?;
        names
            .iter()
            .filter(|n| n.starts_with("--"))
            .find_map(|n| token.strip_prefix(n)?.strip_prefix('='))
            .map(OsStr::new)
    })
}
