//! Tests for the one-shot mode resolution

use std::sync::Mutex;

use rhoscope::cli::{dashboard_session_active, Mode, DASHBOARD_ENV};

// The probe reads process environment, so env-touching tests serialize.
static ENV_LOCK: Mutex<()> = Mutex::new(());

fn lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner())
}

#[test]
fn test_explicit_modes_ignore_environment() {
    let _lock = lock();
    std::env::set_var(DASHBOARD_ENV, "1");

    assert_eq!(Mode::Script.resolve(), Mode::Script);

    std::env::remove_var(DASHBOARD_ENV);
    assert_eq!(Mode::Dashboard.resolve(), Mode::Dashboard);
}

#[test]
fn test_auto_without_session_falls_back_to_script() {
    let _lock = lock();
    std::env::remove_var(DASHBOARD_ENV);

    assert_eq!(Mode::Auto.resolve(), Mode::Script);
}

#[test]
fn test_auto_detects_session() {
    let _lock = lock();
    std::env::set_var(DASHBOARD_ENV, "1");

    assert_eq!(Mode::Auto.resolve(), Mode::Dashboard);

    std::env::remove_var(DASHBOARD_ENV);
}

#[test]
fn test_probe_treats_empty_and_zero_as_no_session() {
    let _lock = lock();

    std::env::set_var(DASHBOARD_ENV, "");
    assert!(!dashboard_session_active());

    std::env::set_var(DASHBOARD_ENV, "0");
    assert!(!dashboard_session_active());

    std::env::remove_var(DASHBOARD_ENV);
    assert!(!dashboard_session_active());
}

#[test]
fn test_probe_is_idempotent() {
    let _lock = lock();
    std::env::set_var(DASHBOARD_ENV, "1");

    let first = Mode::Auto.resolve();
    let second = Mode::Auto.resolve();
    assert_eq!(
        first, second,
        "repeated probes in the same process must agree"
    );
    assert!(dashboard_session_active());
    assert!(dashboard_session_active());

    std::env::remove_var(DASHBOARD_ENV);
}
