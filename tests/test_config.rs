use std::sync::Mutex;

use coho::config::Config;

// Env vars are process-global; tests touching them must not interleave.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn clear_env() {
    unsafe {
        std::env::remove_var("COHO_CONFIG");
        std::env::remove_var("COHO_HOST");
        std::env::remove_var("COHO_PORT");
    }
}

#[test]
fn test_config_defaults() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    let cfg = Config::load();
    assert_eq!(cfg.host, "localhost");
    assert_eq!(cfg.service, "8080");
}

#[test]
fn test_config_env_overrides() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();
    unsafe {
        std::env::set_var("COHO_HOST", "0.0.0.0");
        std::env::set_var("COHO_PORT", "3000");
    }

    let cfg = Config::load();
    assert_eq!(cfg.host, "0.0.0.0");
    assert_eq!(cfg.service, "3000");

    clear_env();
}

#[test]
fn test_config_from_yaml_file() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    let path = std::env::temp_dir().join("coho_test_config.yaml");
    std::fs::write(&path, "host: 127.0.0.1\nservice: \"9000\"\n").unwrap();
    unsafe {
        std::env::set_var("COHO_CONFIG", &path);
    }

    let cfg = Config::load();
    assert_eq!(cfg.host, "127.0.0.1");
    assert_eq!(cfg.service, "9000");

    clear_env();
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_config_env_wins_over_file() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();

    let path = std::env::temp_dir().join("coho_test_config_override.yaml");
    std::fs::write(&path, "host: 127.0.0.1\nservice: \"9000\"\n").unwrap();
    unsafe {
        std::env::set_var("COHO_CONFIG", &path);
        std::env::set_var("COHO_PORT", "9001");
    }

    let cfg = Config::load();
    assert_eq!(cfg.host, "127.0.0.1");
    assert_eq!(cfg.service, "9001");

    clear_env();
    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_config_missing_file_falls_back_to_defaults() {
    let _guard = ENV_LOCK.lock().unwrap();
    clear_env();
    unsafe {
        std::env::set_var("COHO_CONFIG", "/nonexistent/coho.yaml");
    }

    let cfg = Config::load();
    assert_eq!(cfg.host, "localhost");
    assert_eq!(cfg.service, "8080");

    clear_env();
}
