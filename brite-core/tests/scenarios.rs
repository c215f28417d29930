//! End-to-end scenarios driven by scripted event sequences.

mod common;

use brite_core::{CoreError, Event, Palette, PersistenceError, ACTIVE_COLOR_ADDRESS};
use common::{booted, press, select, tick, Effect};

const WAIT: u32 = 900;

#[test]
fn test_save_writes_slot_and_echoes() {
    let (mut core, mut hw) = booted();
    select(&mut core, &mut hw, 4);
    hw.clear_effects();

    core.handle(&mut hw, Event::ByteReceived(0x92)).unwrap();

    assert_eq!(
        hw.effects,
        [Effect::Write { addr: 0x22, value: 4 }, Effect::Echo(0x92)]
    );
}

#[test]
fn test_load_reads_slot_and_echoes() {
    let (mut core, mut hw) = booted();
    hw.mem[0x1A] = 3;

    core.handle(&mut hw, Event::ByteReceived(0x4A)).unwrap();

    assert_eq!(core.active_index(), 3);
    assert_eq!(
        hw.effects,
        [Effect::Output(Palette::DEFAULT.color(3)), Effect::Echo(0x4A)]
    );
}

#[test]
fn test_load_erased_slot_selects_zero() {
    let (mut core, mut hw) = booted();
    select(&mut core, &mut hw, 5);

    core.handle(&mut hw, Event::ByteReceived(0x5F)).unwrap();

    assert_eq!(core.active_index(), 0);
}

#[test]
fn test_load_folds_corrupt_slot() {
    let (mut core, mut hw) = booted();
    hw.mem[0x10] = 200;

    core.handle(&mut hw, Event::ByteReceived(0x40)).unwrap();

    assert_eq!(core.active_index(), 200 % 7);
}

fn assert_alert_then_restore(byte: u8) {
    let (mut core, mut hw) = booted();
    select(&mut core, &mut hw, 2);
    hw.clear_effects();

    core.handle(&mut hw, Event::ByteReceived(byte)).unwrap();
    let alert_ticks = core.alert().duration_ticks();
    tick(&mut core, &mut hw, alert_ticks);

    let alert = core.config().alert_color;
    let off = rgb::RGB16 { r: 0, g: 0, b: 0 };
    let mut expected = Vec::new();
    for _ in 0..5 {
        expected.push(alert);
        expected.push(off);
    }
    expected.push(Palette::DEFAULT.color(2));

    assert_eq!(hw.outputs(), expected);
    assert!(hw.echoes().is_empty());
    assert_eq!(core.active_index(), 2);
    assert!(!core.alert().is_active());
}

#[test]
fn test_zero_byte_alerts_without_echo() {
    assert_alert_then_restore(0x00);
}

#[test]
fn test_all_command_bits_alerts_without_echo() {
    assert_alert_then_restore(0xFF);
}

#[test]
fn test_eight_presses_from_five() {
    let (mut core, mut hw) = booted();
    select(&mut core, &mut hw, 5);

    let mut seen = Vec::new();
    for _ in 0..8 {
        press(&mut core, &mut hw, 1);
        seen.push(core.active_index());
    }

    assert_eq!(seen, [6, 0, 1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_persist_after_quiet_window() {
    let (mut core, mut hw) = booted();
    press(&mut core, &mut hw, 1);
    hw.clear_effects();

    tick(&mut core, &mut hw, WAIT - 1);
    assert!(hw.writes().is_empty());

    tick(&mut core, &mut hw, 1);
    assert_eq!(hw.writes(), [(ACTIVE_COLOR_ADDRESS, 1)]);

    tick(&mut core, &mut hw, 5 * WAIT);
    assert_eq!(hw.writes().len(), 1);
}

#[test]
fn test_burst_coalesces_into_one_write() {
    let (mut core, mut hw) = booted();
    press(&mut core, &mut hw, 1);
    tick(&mut core, &mut hw, 500);
    press(&mut core, &mut hw, 1);
    tick(&mut core, &mut hw, 800);
    press(&mut core, &mut hw, 1);
    hw.clear_effects();

    tick(&mut core, &mut hw, WAIT - 1);
    assert!(hw.writes().is_empty());
    tick(&mut core, &mut hw, 1);
    assert_eq!(hw.writes(), [(ACTIVE_COLOR_ADDRESS, 3)]);
}

#[test]
fn test_load_does_not_trigger_persistence() {
    let (mut core, mut hw) = booted();
    hw.mem[0x15] = 6;
    core.handle(&mut hw, Event::ByteReceived(0x45)).unwrap();

    tick(&mut core, &mut hw, 3 * WAIT);
    assert!(hw.writes().is_empty());
}

#[test]
fn test_persisted_color_survives_reboot() {
    let (mut core, mut hw) = booted();
    press(&mut core, &mut hw, 3);
    tick(&mut core, &mut hw, WAIT);

    let mut rebooted =
        brite_core::EventCore::new(Palette::DEFAULT, brite_core::CoreConfig::DEFAULT).unwrap();
    rebooted.boot(&mut hw).unwrap();
    assert_eq!(rebooted.active_index(), 3);
}

#[test]
fn test_failed_persist_is_reported_and_retried() {
    let (mut core, mut hw) = booted();
    press(&mut core, &mut hw, 2);
    tick(&mut core, &mut hw, WAIT - 1);

    hw.fail_next_write = true;
    assert_eq!(
        core.handle(&mut hw, Event::TimerTick),
        Err(CoreError::Persistence(PersistenceError::Write))
    );
    assert!(hw.writes().is_empty());

    tick(&mut core, &mut hw, WAIT);
    assert_eq!(hw.writes(), [(ACTIVE_COLOR_ADDRESS, 2)]);
}

#[test]
fn test_debounced_edges_advance_once_per_press() {
    let (mut core, mut hw) = booted();
    let bounce = [true, false, true, false, true];

    for _ in 0..3 {
        for level_is_low in bounce {
            core.handle(&mut hw, Event::ButtonEdge { level_is_low })
                .unwrap();
        }
        tick(&mut core, &mut hw, 60);
        for level_is_low in [false, true, false] {
            core.handle(&mut hw, Event::ButtonEdge { level_is_low })
                .unwrap();
        }
        tick(&mut core, &mut hw, 60);
    }

    assert_eq!(core.active_index(), 3);
}

#[test]
fn test_second_invalid_restarts_alert() {
    let (mut core, mut hw) = booted();
    core.handle(&mut hw, Event::ByteReceived(0x00)).unwrap();
    let duration = core.alert().duration_ticks();
    tick(&mut core, &mut hw, duration / 2);
    core.handle(&mut hw, Event::ByteReceived(0xC1)).unwrap();
    tick(&mut core, &mut hw, duration - 1);
    assert!(core.alert().is_active());
    tick(&mut core, &mut hw, 1);
    assert!(!core.alert().is_active());
}

#[test]
fn test_valid_command_during_alert_still_echoes() {
    let (mut core, mut hw) = booted();
    hw.mem[0x13] = 4;
    core.handle(&mut hw, Event::ByteReceived(0x00)).unwrap();
    hw.clear_effects();

    core.handle(&mut hw, Event::ByteReceived(0x43)).unwrap();
    assert_eq!(core.active_index(), 4);
    assert_eq!(hw.effects, [Effect::Echo(0x43)]);

    let remaining = core.alert().duration_ticks();
    tick(&mut core, &mut hw, remaining);
    assert_eq!(hw.outputs().last(), Some(&Palette::DEFAULT.color(4)));
}

#[test]
fn test_press_inside_release_window_advances_after_it() {
    let (mut core, mut hw) = booted();

    core.handle(&mut hw, Event::ButtonEdge { level_is_low: true })
        .unwrap();
    tick(&mut core, &mut hw, 60);
    core.handle(&mut hw, Event::ButtonEdge { level_is_low: false })
        .unwrap();
    tick(&mut core, &mut hw, 10);
    core.handle(&mut hw, Event::ButtonEdge { level_is_low: true })
        .unwrap();
    assert_eq!(core.active_index(), 1);

    tick(&mut core, &mut hw, 60);
    assert_eq!(core.active_index(), 2);
    assert_eq!(hw.outputs().last(), Some(&Palette::DEFAULT.color(2)));
}

#[test]
fn test_failed_save_is_reported_without_echo() {
    let (mut core, mut hw) = booted();
    select(&mut core, &mut hw, 4);
    hw.clear_effects();
    hw.fail_next_write = true;

    assert_eq!(
        core.handle(&mut hw, Event::ByteReceived(0x92)),
        Err(CoreError::Persistence(PersistenceError::Write))
    );

    assert!(hw.effects.is_empty());
    assert_eq!(hw.mem[0x22], 0xFF);
    assert_eq!(core.active_index(), 4);
}
