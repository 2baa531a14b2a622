// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use dal_core::{EventContext, FakeClock, LaunchMode};

#[test]
fn records_deliveries_in_order() {
    let ctx = EventContext::new(FakeClock::new());
    let fake = FakeEventModel::new();
    ctx.set_bus(Arc::new(fake.clone()));

    let a = Event::new(1, 1, LaunchMode::CreateAndFire, &ctx);
    let b = Event::new(2, 2, LaunchMode::CreateAndFire, &ctx);

    assert_eq!(fake.calls(), vec![a, b]);
    assert_eq!(fake.count(), 2);
}

#[test]
fn clones_share_recordings() {
    let fake = FakeEventModel::new();
    let other = fake.clone();

    other.send(Event::blank(&FakeClock::new()));

    assert_eq!(fake.count(), 1);
    fake.clear();
    assert_eq!(other.count(), 0);
}
