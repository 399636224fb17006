use super::*;
use std::path::Path;

fn parse_cli(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

fn parse(args: &[&str]) -> CliCommand {
    parse_cli(args).command
}

#[test]
fn cli_parse_show() {
    match parse(&["mathb", "show"]) {
        CliCommand::Show { json } => assert!(!json),
        _ => panic!("expected Show"),
    }
    match parse(&["mathb", "show", "--json"]) {
        CliCommand::Show { json } => assert!(json),
        _ => panic!("expected Show --json"),
    }
}

#[test]
fn cli_parse_init() {
    assert!(matches!(parse(&["mathb", "init"]), CliCommand::Init));
}

#[test]
fn cli_parse_check_ip() {
    match parse(&["mathb", "check-ip", "10.0.0.5"]) {
        CliCommand::CheckIp { ip } => assert_eq!(ip, "10.0.0.5"),
        _ => panic!("expected CheckIp"),
    }
}

#[test]
fn cli_parse_paths() {
    match parse(&["mathb", "post-path", "abc"]) {
        CliCommand::PostPath { id } => assert_eq!(id, "abc"),
        _ => panic!("expected PostPath"),
    }
    assert!(matches!(parse(&["mathb", "count-path"]), CliCommand::CountPath));
}

#[test]
fn cli_parse_post_url() {
    match parse(&["mathb", "post-url", "42"]) {
        CliCommand::PostUrl { id, key, host_url } => {
            assert_eq!(id, "42");
            assert!(key.is_none());
            assert!(host_url.is_none());
        }
        _ => panic!("expected PostUrl"),
    }
    match parse(&[
        "mathb",
        "post-url",
        "42",
        "--key",
        "abc",
        "--host-url",
        "https://mathb.in/",
    ]) {
        CliCommand::PostUrl { id, key, host_url } => {
            assert_eq!(id, "42");
            assert_eq!(key.as_deref(), Some("abc"));
            assert_eq!(host_url.as_deref(), Some("https://mathb.in/"));
        }
        _ => panic!("expected PostUrl with key"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["mathb", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_parse_global_overrides_after_subcommand() {
    let cli = parse_cli(&[
        "mathb",
        "show",
        "--document-root",
        "/var/www/html",
        "--cache-dir",
        "/var/cache/mathb",
    ]);
    assert_eq!(
        cli.overrides.document_root.as_deref(),
        Some(Path::new("/var/www/html"))
    );
    assert_eq!(cli.overrides.cache_dir.as_deref(), Some("/var/cache/mathb"));
    assert!(cli.overrides.content_dir.is_none());
    assert!(cli.overrides.config.is_none());
}

#[test]
fn overrides_layer_over_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "document_root = \"/var/www/html\"\nip_blacklist = ['^10\\.']\n",
    )
    .unwrap();

    let overrides = Overrides {
        config: Some(path),
        cache_dir: Some("/var/cache/mathb".to_string()),
        ..Overrides::default()
    };
    let cfg = overrides
        .file_config()
        .unwrap()
        .to_configuration()
        .unwrap();
    assert_eq!(cfg.content_directory_path(), "/var/www/mathb-content/");
    assert_eq!(cfg.cache_directory_path(), "/var/cache/mathb/");
    assert!(cfg.client_is_blacklisted("10.1.1.1"));
}

#[test]
fn unreadable_config_reports_path() {
    let overrides = Overrides {
        config: Some("/nonexistent/mathb/config.toml".into()),
        ..Overrides::default()
    };
    let err = overrides.file_config().unwrap_err();
    assert!(format!("{err:#}").contains("/nonexistent/mathb/config.toml"));
}
