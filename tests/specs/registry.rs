// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Registration lifecycle through the public API

use fw_events::{EventBus, Listener, RegistryError};
use std::convert::Infallible;

#[test]
fn channel_lifecycle_absent_active_absent() {
    let mut bus: EventBus<(), (), Infallible> = EventBus::new();
    let listener: Listener<(), (), Infallible> = Listener::from_fn(|()| Ok(()));

    assert_eq!(bus.channel_count(), 0);

    bus.add_listener("field:email", &listener).unwrap();
    assert_eq!(bus.channel_count(), 1);
    assert_eq!(bus.channels(), ["field:email"]);
    assert_eq!(bus.listener_count("field:email"), 1);

    bus.remove_listener("field:email", &listener).unwrap();
    assert_eq!(bus.channel_count(), 0);
    assert_eq!(bus.listener_count("field:email"), 0);
}

#[test]
fn errors_name_the_channel() {
    let mut bus: EventBus<(), (), Infallible> = EventBus::new();
    let listener: Listener<(), (), Infallible> = Listener::from_fn(|()| Ok(()));

    bus.add_listener("field:email", &listener).unwrap();

    let err = bus.add_listener("field:email", &listener).unwrap_err();
    assert!(matches!(err, RegistryError::DuplicateListener { .. }));
    assert_eq!(
        err.to_string(),
        "listener already registered for channel 'field:email'"
    );

    let err = bus.remove_listener("field:phone", &listener).unwrap_err();
    assert!(matches!(err, RegistryError::UnknownRegistration { .. }));
    assert_eq!(
        err.to_string(),
        "no matching listener registration for channel 'field:phone'"
    );
}

#[tokio::test]
async fn re_registration_appends_at_the_end() {
    let mut bus: EventBus<(), &'static str, Infallible> = EventBus::new();
    let email: Listener<(), &'static str, Infallible> = Listener::from_fn(|()| Ok("email"));
    let phone: Listener<(), &'static str, Infallible> = Listener::from_fn(|()| Ok("phone"));

    bus.add_listener("form:validate", &email).unwrap();
    bus.add_listener("form:validate", &phone).unwrap();
    bus.remove_listener("form:validate", &email).unwrap();
    bus.add_listener("form:validate", &email).unwrap();

    let results = bus.emit("form:validate", ()).await.unwrap();
    assert_eq!(results, ["phone", "email"]);
}
