// CLASSIFICATION: COMMUNITY
// Filename: host_env.rs v0.1
// Author: Lukas Bower
// Date Modified: 2027-09-02

use bootcfg::{BootConfig, BootPaths, ConfigError, ConfigSource, HostEnv};
use serial_test::serial;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn paths_in(dir: &Path) -> BootPaths {
    BootPaths {
        cmdline: dir.join("cmdline"),
        bootconfig: dir.join("bootconfig"),
        fallback_dt_dir: format!("{}/dt/", dir.display()),
        property_file: Some(dir.join("boot.prop")),
    }
}

#[test]
fn resolves_through_real_files() {
    let _ = env_logger::builder().is_test(true).try_init();
    let dir = tempdir().unwrap();
    let paths = paths_in(dir.path());
    fs::create_dir_all(dir.path().join("dt")).unwrap();
    fs::write(dir.path().join("dt/compatible"), b"android,firmware\0").unwrap();
    fs::write(dir.path().join("dt/serialno"), b"DTSERIAL\0").unwrap();
    fs::write(dir.path().join("boot.prop"), "ro.boot.hardware=pixel\n").unwrap();
    fs::write(
        dir.path().join("bootconfig"),
        "androidboot.slot_suffix = \"_a\"\nandroidboot.boot_devices = \"soc/a,b\", \"soc/c\"\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("cmdline"),
        "console=ttyS0 androidboot.verifiedbootstate=\"orange\" androidboot.slot_suffix=_b\n",
    )
    .unwrap();

    let cfg = BootConfig::with_paths(HostEnv::from_paths(&paths), paths);
    let dt_dir = format!("{}/dt/", dir.path().display());
    assert_eq!(cfg.android_dt_dir(), dt_dir);

    let serial = cfg.resolve("serialno").unwrap();
    assert_eq!(serial.value, "DTSERIAL");
    assert_eq!(serial.source, ConfigSource::DeviceTree);

    assert_eq!(cfg.resolve("hardware").unwrap().source, ConfigSource::Property);
    assert_eq!(cfg.get("slot_suffix"), Some("_a".into()));
    assert_eq!(cfg.get("boot_devices"), Some("soc/a,b, soc/c".into()));
    assert_eq!(cfg.get("verifiedbootstate"), Some("orange".into()));
    assert_eq!(cfg.get("nonexistent"), None);
}

#[test]
fn missing_sources_read_as_not_found() {
    let dir = tempdir().unwrap();
    let paths = paths_in(dir.path());
    let cfg = BootConfig::with_paths(HostEnv::from_paths(&paths), paths);
    assert_eq!(cfg.kernel_cmdline(), None);
    assert_eq!(cfg.bootconfig("androidboot.anything"), None);
    assert_eq!(cfg.get("anything"), None);
    assert_eq!(cfg.android_dt_dir(), format!("{}/dt/", dir.path().display()));
}

#[test]
fn config_file_overrides_defaults() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("bootcfg.toml");
    fs::write(
        &file,
        "cmdline = \"/tmp/cmdline\"\nfallback_dt_dir = \"/tmp/dt\"\n",
    )
    .unwrap();
    let paths = BootPaths::from_toml_file(&file).unwrap();
    assert_eq!(paths.cmdline, Path::new("/tmp/cmdline"));
    assert_eq!(paths.fallback_dt_dir, "/tmp/dt/");
}

#[test]
fn config_file_errors_are_typed() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("missing.toml");
    assert!(matches!(
        BootPaths::from_toml_file(&missing),
        Err(ConfigError::Io { .. })
    ));

    let broken = dir.path().join("broken.toml");
    fs::write(&broken, "cmdline = [1, 2").unwrap();
    assert!(matches!(
        BootPaths::from_toml_file(&broken),
        Err(ConfigError::Parse { .. })
    ));
}

#[test]
#[serial]
fn environment_redirects_default_paths() {
    std::env::set_var("BOOTCFG_CMDLINE", "/env/cmdline");
    std::env::set_var("BOOTCFG_FALLBACK_DT_DIR", "/env/dt");
    std::env::remove_var("BOOTCFG_BOOTCONFIG");
    std::env::remove_var("BOOTCFG_PROPERTIES");
    let paths = BootPaths::default();
    std::env::remove_var("BOOTCFG_CMDLINE");
    std::env::remove_var("BOOTCFG_FALLBACK_DT_DIR");

    assert_eq!(paths.cmdline, Path::new("/env/cmdline"));
    assert_eq!(paths.bootconfig, Path::new("/proc/bootconfig"));
    assert_eq!(paths.fallback_dt_dir, "/env/dt/");
    assert!(paths.property_file.is_none());
}

#[test]
#[serial]
fn defaults_are_proc_paths() {
    for var in [
        "BOOTCFG_CMDLINE",
        "BOOTCFG_BOOTCONFIG",
        "BOOTCFG_FALLBACK_DT_DIR",
        "BOOTCFG_PROPERTIES",
    ] {
        std::env::remove_var(var);
    }
    assert_eq!(BootPaths::default(), BootPaths::proc());
}
