//! Reading configuration from environment variables.

use std::env::VarError;

use anyhow::{anyhow, bail, Result};

/// Returns the value of the env var `name`, `fallbackvalue` if it is
/// not set, or an error if neither is available.
pub fn getenv_or(name: &str, fallbackvalue: Option<&str>) -> Result<String> {
    match getenv(name)? {
        Some(s) => Ok(s),
        None => match fallbackvalue {
            Some(v) => Ok(v.to_string()),
            None => bail!("{name:?} env var is missing and \
                           no default provided"),
        }
    }
}

/// Returns None if the env var is not set, an error if it is not
/// unicode.
pub fn getenv(name: &str) -> Result<Option<String>> {
    match std::env::var(name) {
        Ok(s) => Ok(Some(s)),
        Err(e) => match e {
            VarError::NotPresent => Ok(None),
            VarError::NotUnicode(_) => bail!("{name:?} env var is not unicode"),
        }
    }
}

pub fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "on" | "true" | "yes" => Some(true),
        "0" | "" | "off" | "false" | "no" => Some(false),
        _ => None
    }
}

/// Unset gives `default`.
pub fn getenv_bool(name: &str, default: bool) -> Result<bool> {
    match getenv(name)? {
        Some(s) => parse_bool(&s).ok_or_else(
            || anyhow!("{name:?} env var has a non-boolean value: {s:?}")),
        None => Ok(default)
    }
}

/// Parse the env var with `FromStr`, unset gives `default`.
pub fn getenv_parse<T>(name: &str, default: T) -> Result<T>
where T: std::str::FromStr,
      T::Err: std::fmt::Display
{
    match getenv(name)? {
        Some(s) => s.parse().map_err(
            |e| anyhow!("{name:?} env var: invalid value {s:?}: {e}")),
        None => Ok(default)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    // Each test uses its own variable names, as tests run in
    // parallel in the same process.

    #[test]
    fn t_getenv() {
        std::env::remove_var("CHJ_UTIL_T_GETENV");
        assert_eq!(getenv("CHJ_UTIL_T_GETENV").unwrap(), None);
        assert_eq!(getenv_or("CHJ_UTIL_T_GETENV", Some("x")).unwrap(), "x");
        assert!(getenv_or("CHJ_UTIL_T_GETENV", None).is_err());
        std::env::set_var("CHJ_UTIL_T_GETENV", "val");
        assert_eq!(getenv("CHJ_UTIL_T_GETENV").unwrap(), Some("val".into()));
        assert_eq!(getenv_or("CHJ_UTIL_T_GETENV", Some("x")).unwrap(), "val");
    }

    #[test]
    fn t_getenv_bool() {
        std::env::remove_var("CHJ_UTIL_T_BOOL");
        assert_eq!(getenv_bool("CHJ_UTIL_T_BOOL", true).unwrap(), true);
        std::env::set_var("CHJ_UTIL_T_BOOL", "off");
        assert_eq!(getenv_bool("CHJ_UTIL_T_BOOL", true).unwrap(), false);
        std::env::set_var("CHJ_UTIL_T_BOOL", "maybe");
        assert!(getenv_bool("CHJ_UTIL_T_BOOL", true).is_err());
    }

    #[test]
    fn t_getenv_parse() {
        std::env::remove_var("CHJ_UTIL_T_PARSE");
        assert_eq!(getenv_parse("CHJ_UTIL_T_PARSE", 16usize).unwrap(), 16);
        std::env::set_var("CHJ_UTIL_T_PARSE", "4");
        assert_eq!(getenv_parse("CHJ_UTIL_T_PARSE", 16usize).unwrap(), 4);
        std::env::set_var("CHJ_UTIL_T_PARSE", "four");
        assert!(getenv_parse("CHJ_UTIL_T_PARSE", 16usize).is_err());
    }
}
