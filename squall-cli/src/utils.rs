//! Utility functions shared across CLI commands.
//!
//! This module provides config-path resolution, document load/save
//! wrappers, argument validation, and directive construction from
//! command-line inputs.

use std::path::PathBuf;

use crate::error::CliError;
use squall::{ConfigDocument, Defaults, Directive, HostBlock};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // verbose is consumed by the logger in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the SSH config file location.
    pub config: Option<PathBuf>,
}

/// Resolve the SSH config path from global options.
///
/// Priority: `--config` (or `SQUALL_CONFIG`) > `~/.ssh/config`.
pub fn resolve_config_path(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    if let Some(ref path) = global.config {
        return Ok(path.clone());
    }

    let home_dir = home::home_dir()
        .ok_or_else(|| CliError::Config("Could not determine home directory".to_string()))?;
    Ok(home_dir.join(".ssh").join("config"))
}

/// Load the document from the resolved config path.
pub fn load_document(global: &GlobalOptions) -> Result<(ConfigDocument, PathBuf), CliError> {
    let path = resolve_config_path(global)?;
    let doc = squall::store::load(&path)?;
    Ok((doc, path))
}

/// Save the document back to its config path.
pub fn save_document(doc: &ConfigDocument, path: &std::path::Path) -> Result<(), CliError> {
    squall::store::save(doc, path).map_err(CliError::from)
}

/// Validate a host entry name given on the command line.
pub fn validate_name(name: &str) -> Result<(), CliError> {
    if name.trim().is_empty() {
        return Err(CliError::InvalidArguments(
            "host name must be non-empty".to_string(),
        ));
    }
    if name.contains('@') {
        return Err(CliError::InvalidArguments(
            "\"@\" cannot be used in a host name".to_string(),
        ));
    }
    Ok(())
}

/// Build a directive, mapping validation failures to CLI errors.
pub fn directive(key: &str, value: &str) -> Result<Directive, CliError> {
    Directive::new(key, value)
        .map_err(squall::Error::from)
        .map_err(CliError::from)
}

/// Parse repeated `KEY=VALUE` custom options into directives.
pub fn parse_custom_options(options: &[String]) -> Result<Vec<Directive>, CliError> {
    options
        .iter()
        .map(|option| {
            let (key, value) = option.split_once('=').ok_or_else(|| {
                CliError::InvalidArguments(format!("option \"{option}\" must be KEY=VALUE"))
            })?;
            directive(key, value)
        })
        .collect()
}

/// Quote an identity file path the way the SSH client expects, stripping
/// any quotes already present.
pub fn quote_identity_file(value: &str) -> String {
    format!("\"{}\"", value.trim_matches('"'))
}

/// Build the directive list for an add or edit from its parts.
pub fn build_directives(
    host: &str,
    user: &str,
    port: u16,
    id_file: Option<&str>,
    custom_options: &[String],
) -> Result<Vec<Directive>, CliError> {
    let mut directives = vec![
        directive("HostName", host)?,
        directive("User", user)?,
        directive("Port", &port.to_string())?,
    ];
    if let Some(id_file) = id_file {
        if !id_file.is_empty() {
            directives.push(directive("IdentityFile", &quote_identity_file(id_file))?);
        }
    }
    directives.extend(parse_custom_options(custom_options)?);
    Ok(directives)
}

/// Render a block as `name -> user@hostname:port` for list and search
/// output, falling back to the configured defaults.
pub fn describe_block(block: &HostBlock, defaults: &Defaults) -> String {
    let user = block
        .find_directive("user")
        .map_or_else(|| defaults.user(), |d| d.value().to_string());
    let hostname = block
        .find_directive("hostname")
        .map_or("[hostname_not_specified]", |d| d.value());
    let port = block
        .find_directive("port")
        .map_or_else(|| defaults.port().to_string(), |d| d.value().to_string());
    format!("{} -> {user}@{hostname}:{port}", block.pattern())
}

/// Directives other than the user/hostname/port triple, as `key=value`
/// pairs for the custom-options column.
pub fn extra_options(block: &HostBlock) -> Vec<String> {
    block
        .directives()
        .iter()
        .filter(|d| {
            !d.matches_key("user") && !d.matches_key("hostname") && !d.matches_key("port")
        })
        .map(|d| format!("{}={}", d.key(), d.value()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("web").is_ok());
        assert!(validate_name("uk.gw.lan uk.lan").is_ok());
        assert!(validate_name("user@web").is_err());
        assert!(validate_name("  ").is_err());
    }

    #[test]
    fn test_parse_custom_options() {
        let parsed = parse_custom_options(&[
            "StrictHostKeyChecking=no".to_string(),
            "UserKnownHostsFile=/dev/null".to_string(),
        ])
        .unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].key(), "StrictHostKeyChecking");
        assert_eq!(parsed[1].value(), "/dev/null");
    }

    #[test]
    fn test_parse_custom_options_rejects_bare_key() {
        assert!(parse_custom_options(&["NoEquals".to_string()]).is_err());
    }

    #[test]
    fn test_custom_option_value_may_contain_equals() {
        let parsed = parse_custom_options(&["SetEnv=A=1".to_string()]).unwrap();
        assert_eq!(parsed[0].value(), "A=1");
    }

    #[test]
    fn test_quote_identity_file() {
        assert_eq!(quote_identity_file("/tmp/key.pub"), "\"/tmp/key.pub\"");
        assert_eq!(quote_identity_file("\"/tmp/key.pub\""), "\"/tmp/key.pub\"");
    }

    #[test]
    fn test_build_directives_order() {
        let built = build_directives(
            "example.com",
            "root",
            2222,
            Some("/tmp/key.pub"),
            &["ForwardAgent=yes".to_string()],
        )
        .unwrap();
        let keys: Vec<&str> = built.iter().map(Directive::key).collect();
        assert_eq!(
            keys,
            vec!["HostName", "User", "Port", "IdentityFile", "ForwardAgent"]
        );
        assert_eq!(built[3].value(), "\"/tmp/key.pub\"");
    }

    #[test]
    fn test_describe_block_with_defaults() {
        let block = HostBlock::new(
            vec!["web".to_string()],
            vec![Directive::new("HostName", "10.0.0.1").unwrap()],
        )
        .unwrap();
        let described = describe_block(&block, &Defaults::default());
        assert!(described.starts_with("web -> "));
        assert!(described.ends_with("@10.0.0.1:22"));
    }

    #[test]
    fn test_extra_options_excludes_connection_triple() {
        let block = HostBlock::new(
            vec!["web".to_string()],
            vec![
                Directive::new("HostName", "10.0.0.1").unwrap(),
                Directive::new("Port", "22").unwrap(),
                Directive::new("ForwardAgent", "yes").unwrap(),
            ],
        )
        .unwrap();
        assert_eq!(extra_options(&block), vec!["ForwardAgent=yes"]);
    }
}
