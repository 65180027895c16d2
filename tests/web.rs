//! Tests for the JS-facing handle; they need a wasm32 target to run.
#![cfg(target_arch = "wasm32")]

use tic_tac_toe_rust::{new_game, new_game_with_order};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn out_of_range_jump_throws_range_error() {
    let mut handle = new_game();
    handle.play(4).unwrap();
    let err = handle.jump_to(2).unwrap_err();
    assert!(err.is_instance_of::<js_sys::RangeError>());
    assert_eq!(handle.current_move(), 1);
}

#[wasm_bindgen_test]
fn out_of_range_cell_throws_range_error() {
    let mut handle = new_game();
    let err = handle.play(9).unwrap_err();
    assert!(err.is_instance_of::<js_sys::RangeError>());
    assert_eq!(handle.history_length(), 1);
}

#[wasm_bindgen_test]
fn move_location_of_start_throws_plain_error() {
    let handle = new_game();
    let err = handle.move_location(0).unwrap_err();
    assert!(err.is_instance_of::<js_sys::Error>());
    assert!(!err.is_instance_of::<js_sys::RangeError>());
}

#[wasm_bindgen_test]
fn view_is_a_js_object_with_status() {
    let mut handle = new_game_with_order(false);
    for cell in [0, 4, 1, 5, 2] {
        handle.play(cell).unwrap();
    }

    let view = handle.view().unwrap();
    let status_text = js_sys::Reflect::get(&view, &"statusText".into()).unwrap();
    assert_eq!(status_text.as_string().as_deref(), Some("Winner: X"));

    let moves = js_sys::Reflect::get(&view, &"moves".into()).unwrap();
    let moves = moves.dyn_into::<js_sys::Array>().unwrap();
    assert_eq!(moves.length(), 6);
}
