//! Tests for idle cursor movement
//!
//! These tests verify:
//! - Single steps in both directions
//! - Wraparound at both ends
//! - Idle movement never touches the order
//! - Empty and singleton lists

use super::{letters, values};
use crate::Intent;

#[test]
fn test_initial_state() {
    let list = letters(3);

    assert_eq!(list.cursor(), 0);
    assert!(!list.is_grabbed());
    assert!(!list.is_submitted());
    assert!(!list.help_visible());
    assert_eq!(list.field_key(), None);
}

#[test]
fn test_move_down_advances_cursor() {
    let list = letters(3).handle(Intent::MoveDown);
    assert_eq!(list.cursor(), 1);

    let list = list.handle(Intent::MoveDown);
    assert_eq!(list.cursor(), 2);
}

#[test]
fn test_move_down_wraps_to_first() {
    let list = letters(3).replay([Intent::MoveDown, Intent::MoveDown, Intent::MoveDown]);
    assert_eq!(list.cursor(), 0);
}

#[test]
fn test_move_up_wraps_to_last() {
    let list = letters(3).handle(Intent::MoveUp);
    assert_eq!(list.cursor(), 2);

    let list = list.handle(Intent::MoveUp);
    assert_eq!(list.cursor(), 1);
}

/// N steps in either direction return to the starting row
#[test]
fn test_full_cycle_returns_to_start() {
    for len in 1..=6 {
        for start in 0..len {
            let list = letters(len).replay(std::iter::repeat_n(Intent::MoveDown, start));
            assert_eq!(list.cursor(), start);

            let down = list.clone().replay(std::iter::repeat_n(Intent::MoveDown, len));
            assert_eq!(down.cursor(), start, "len={len} start={start}");

            let up = list.replay(std::iter::repeat_n(Intent::MoveUp, len));
            assert_eq!(up.cursor(), start, "len={len} start={start}");
        }
    }
}

#[test]
fn test_idle_movement_preserves_order() {
    let list = letters(4).replay([
        Intent::MoveDown,
        Intent::MoveDown,
        Intent::MoveUp,
        Intent::MoveUp,
        Intent::MoveUp,
        Intent::MoveDown,
        Intent::MoveUp,
    ]);

    assert_eq!(values(&list), ["a", "b", "c", "d"]);
    assert_eq!(list.cursor(), 2);
}

#[test]
fn test_handle_leaves_original_untouched() {
    let before = letters(3);
    let after = before.handle(Intent::MoveDown);

    assert_eq!(before.cursor(), 0);
    assert_eq!(after.cursor(), 1);
}

#[test]
fn test_empty_list_movement_is_noop() {
    let list = letters(0).replay([Intent::MoveDown, Intent::MoveUp, Intent::MoveDown]);

    assert_eq!(list.cursor(), 0);
    assert!(list.is_empty());
    assert!(list.current_item().is_none());
    assert!(list.current_values().is_empty());
}

#[test]
fn test_singleton_movement_stays_put() {
    let list = letters(1).replay([Intent::MoveDown, Intent::MoveUp]);

    assert_eq!(list.cursor(), 0);
    assert_eq!(values(&list), ["a"]);
}
