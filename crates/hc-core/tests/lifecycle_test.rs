use std::sync::Arc;
use std::thread;
use std::time::Duration;

use hc_core::lifecycle::{run, startup, Shutdown};
use hc_core::{DispatchTable, Dispatched, HcConfig, HealthReporter};

#[test]
fn startup_registers_configured_names() {
    let config = HcConfig::from_toml(
        r#"
[entry_points]
json = "checkJson"
object = "checkObject"
"#,
    )
    .unwrap();
    let mut table = DispatchTable::new(Arc::new(HealthReporter::default()));
    startup(&mut table, &config).unwrap();
    assert_eq!(table.names().collect::<Vec<_>>(), vec!["checkJson", "checkObject"]);
}

#[test]
fn startup_with_defaults_binds_module_export_names() {
    let mut table = DispatchTable::new(Arc::new(HealthReporter::default()));
    startup(&mut table, &HcConfig::default()).unwrap();
    assert_eq!(
        table.names().collect::<Vec<_>>(),
        vec!["getHealthCheck", "getHealthObject"]
    );
    assert!(matches!(
        table.call("getHealthObject").unwrap(),
        Dispatched::Object(_)
    ));
}

#[test]
fn run_parks_until_shutdown() {
    let shutdown = Arc::new(Shutdown::new());
    let signal = Arc::clone(&shutdown);

    let host = thread::spawn(move || {
        let mut table = DispatchTable::new(Arc::new(HealthReporter::default()));
        run(&mut table, &HcConfig::default(), &signal).map(|()| table)
    });

    thread::sleep(Duration::from_millis(50));
    assert!(!host.is_finished(), "run must not return before shutdown");

    shutdown.trigger();
    let table = host.join().unwrap().unwrap();
    assert!(matches!(
        table.call("getHealthCheck").unwrap(),
        Dispatched::Json(_)
    ));
}

#[test]
fn wait_returns_immediately_once_triggered() {
    let shutdown = Shutdown::new();
    assert!(!shutdown.is_triggered());
    shutdown.trigger();
    assert!(shutdown.is_triggered());
    shutdown.wait();
}

#[test]
fn run_fails_fast_on_invalid_config() {
    let mut config = HcConfig::default();
    config.entry_points.object = config.entry_points.json.clone();
    let shutdown = Shutdown::new();
    let mut table = DispatchTable::new(Arc::new(HealthReporter::default()));
    assert!(run(&mut table, &config, &shutdown).is_err());
    assert!(table.is_empty());
}
