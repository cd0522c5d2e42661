use hc_core::{HcConfig, HcError, RuntimeSlot};

fn custom_config() -> HcConfig {
    HcConfig::from_toml("[reporter]\nsource = \"edge-function\"").unwrap()
}

#[test]
fn peek_does_not_fill_the_slot() {
    let slot: RuntimeSlot<HcConfig> = RuntimeSlot::new();
    assert!(slot.peek().is_none());
    assert!(!slot.is_initialized());
}

#[test]
fn initialize_after_inspection_succeeds() {
    let slot = RuntimeSlot::new();
    assert!(slot.peek().is_none());
    slot.initialize(custom_config()).unwrap();

    assert!(slot.is_explicitly_initialized());
    assert_eq!(slot.peek().unwrap().reporter.source, "edge-function");
    // get_or_init now returns the explicit value, not the default.
    assert_eq!(slot.get_or_init(HcConfig::default).reporter.source, "edge-function");
}

#[test]
fn lazy_default_pins_the_slot() {
    let slot = RuntimeSlot::new();
    let rt = slot.get_or_init(HcConfig::default);
    assert_eq!(rt.reporter.source, "rust-napi");

    assert!(slot.is_initialized());
    assert!(!slot.is_explicitly_initialized());
    assert!(matches!(
        slot.initialize(custom_config()),
        Err(HcError::AlreadyInitialized)
    ));
}

#[test]
fn second_initialize_is_rejected() {
    let slot = RuntimeSlot::new();
    slot.initialize(HcConfig::default()).unwrap();
    let err = slot.initialize(custom_config()).unwrap_err();
    assert!(matches!(err, HcError::AlreadyInitialized));
    assert_eq!(slot.peek().unwrap().reporter.source, "rust-napi");
}
