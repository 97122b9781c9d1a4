//! Shell config file specs

use crate::prelude::*;

#[test]
fn config_sets_prompt_and_separator() {
    let config = ConfigFile::new("prompt = \"cfg> \"\ntoolbar_separator = \" / \"\n");
    cli()
        .args(&["--config", &config.arg()])
        .stdin("node n1 ?\n")
        .passes()
        .stdout_eq("cfg> -nid / -nsig\n-nid  -nsig\ncfg> ");
}

#[test]
fn config_env_is_used_without_the_flag() {
    let config = ConfigFile::new("prompt = \"env> \"\n");
    cli()
        .env("JC_CONFIG", config.path())
        .stdin("exit\n")
        .passes()
        .stdout_eq("env> ");
}

#[test]
fn config_candidates_seed_completion() {
    let config = ConfigFile::new("[candidates]\ntenants = [\"lab\", \"prod\"]\n");
    cli()
        .args(&["--config", &config.arg(), "-c", "tenant ?"])
        .passes()
        .stdout_eq("tname: Enter a tenant name\nlab  prod\n");
}

#[test]
fn prompt_flag_overrides_config() {
    let config = ConfigFile::new("prompt = \"cfg> \"\n");
    cli()
        .args(&["--config", &config.arg(), "--prompt", "flag> "])
        .stdin("exit\n")
        .passes()
        .stdout_eq("flag> ");
}

#[test]
fn missing_config_fails() {
    cli()
        .args(&["--config", "/nonexistent/jc.toml", "-c", "exit"])
        .fails()
        .stderr_has("Error: failed to read config /nonexistent/jc.toml");
}

#[test]
fn unknown_config_key_fails() {
    let config = ConfigFile::new("colour = true\n");
    cli()
        .args(&["--config", &config.arg(), "-c", "exit"])
        .fails()
        .stderr_has("Error: invalid config");
}
