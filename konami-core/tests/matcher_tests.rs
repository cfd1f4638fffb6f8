mod common;

use common::*;
use konami_core::{KONAMI_CODE, KeyCode, MatchState, SequenceMatcher};
use pretty_assertions::assert_eq;

#[test]
fn test_konami_sequence_matches_once() {
    let (count, on_match) = counter();
    let mut matcher = SequenceMatcher::new(KONAMI_CODE, on_match);

    let states = submit_all(&mut matcher, &KONAMI_CODE);

    let expected: Vec<MatchState> = (1..10).map(MatchState::Growing).chain([MatchState::Matched]).collect();
    assert_eq!(states, expected);
    assert_eq!(count.get(), 1);
    assert_eq!(matcher.progress(), 0);
}

#[test]
fn test_back_to_back_sequences_fire_twice() {
    let (count, on_match) = counter();
    let mut matcher = SequenceMatcher::new(KONAMI_CODE, on_match);

    let mut input = KONAMI_CODE.to_vec();
    input.extend_from_slice(&KONAMI_CODE);
    let states = submit_all(&mut matcher, &input);

    assert_eq!(states.iter().filter(|state| state.is_match()).count(), 2);
    assert_eq!(states[10], MatchState::Growing(1));
    assert_eq!(count.get(), 2);
    assert_eq!(matcher.match_count(), 2);
}

#[test]
fn test_wrong_token_inside_sequence_prevents_match() {
    for position in 1..KONAMI_CODE.len() {
        let (count, on_match) = counter();
        let mut matcher = SequenceMatcher::new(KONAMI_CODE, on_match);

        let mut input = KONAMI_CODE.to_vec();
        input.insert(position, KeyCode::KeyX);
        let states = submit_all(&mut matcher, &input);

        assert!(!states.iter().any(MatchState::is_match), "insert at {}", position);
        assert_eq!(count.get(), 0, "insert at {}", position);
    }
}

#[test]
fn test_wrong_token_outside_sequence_still_matches() {
    let (count, on_match) = counter();
    let mut matcher = SequenceMatcher::new(KONAMI_CODE, on_match);

    let mut input = vec![KeyCode::KeyX];
    input.extend_from_slice(&KONAMI_CODE);
    input.push(KeyCode::KeyX);
    submit_all(&mut matcher, &input);

    assert_eq!(count.get(), 1);
}

#[test]
fn test_broken_prefix_clears_to_zero() {
    let (_count, on_match) = counter();
    let mut matcher = SequenceMatcher::new(KONAMI_CODE, on_match);

    submit_all(&mut matcher, &keys("up up down"));
    assert_eq!(matcher.progress(), 3);

    assert_eq!(matcher.submit(KeyCode::KeyA), MatchState::Reset);
    assert_eq!(matcher.progress(), 0);
    assert_eq!(matcher.submit(KeyCode::ArrowUp), MatchState::Growing(1));
}

#[test]
fn test_first_token_restarts_at_one() {
    let (_count, on_match) = counter();
    let mut matcher = SequenceMatcher::new(keys("up up down"), on_match);

    let states = submit_all(&mut matcher, &keys("up down up"));
    assert_eq!(
        states,
        vec![MatchState::Growing(1), MatchState::Reset, MatchState::Growing(1)]
    );
}

#[test]
fn test_restart_after_longer_prefix() {
    let (count, on_match) = counter();
    let mut matcher = SequenceMatcher::new(KONAMI_CODE, on_match);

    // Four valid keys, then Up restarts the pattern from scratch
    let mut input = keys("up up down down up");
    input.extend_from_slice(&KONAMI_CODE[1..]);
    let states = submit_all(&mut matcher, &input);

    assert_eq!(states[4], MatchState::Growing(1));
    assert_eq!(states.last(), Some(&MatchState::Matched));
    assert_eq!(count.get(), 1);
}

#[test]
fn test_only_single_token_restart_is_attempted() {
    let (count, on_match) = counter();
    let mut matcher = SequenceMatcher::new(keys("up up down"), on_match);

    // A full overlap search would keep "up up" here; the matcher keeps one
    let states = submit_all(&mut matcher, &keys("up up up down"));
    assert_eq!(
        states,
        vec![
            MatchState::Growing(1),
            MatchState::Growing(2),
            MatchState::Growing(1),
            MatchState::Reset,
        ]
    );
    assert_eq!(count.get(), 0);
}

#[test]
fn test_konami_triple_up_loses_overlap() {
    let (count, on_match) = counter();
    let mut matcher = SequenceMatcher::new(KONAMI_CODE, on_match);

    let mut input = vec![KeyCode::ArrowUp];
    input.extend_from_slice(&KONAMI_CODE);
    submit_all(&mut matcher, &input);

    assert_eq!(count.get(), 0);
}

#[test]
fn test_reset_on_empty_buffer_is_noop() {
    let (count, on_match) = counter();
    let mut matcher = SequenceMatcher::new(KONAMI_CODE, on_match);

    matcher.reset();
    matcher.reset();
    assert_eq!(matcher.progress(), 0);
    assert!(matcher.is_idle());
    assert_eq!(count.get(), 0);
    assert_eq!(matcher.submit(KeyCode::ArrowUp), MatchState::Growing(1));
}

#[test]
fn test_reset_mid_sequence_requires_full_restart() {
    let (count, on_match) = counter();
    let mut matcher = SequenceMatcher::new(KONAMI_CODE, on_match);

    submit_all(&mut matcher, &KONAMI_CODE[..5]);
    matcher.reset();
    submit_all(&mut matcher, &KONAMI_CODE[5..]);
    assert_eq!(count.get(), 0);

    submit_all(&mut matcher, &KONAMI_CODE);
    assert_eq!(count.get(), 1);
}

#[test]
fn test_single_key_target_matches_every_occurrence() {
    let (count, on_match) = counter();
    let mut matcher = SequenceMatcher::new(vec![KeyCode::Enter], on_match);

    let states = submit_all(&mut matcher, &keys("enter a enter enter"));
    assert_eq!(
        states,
        vec![
            MatchState::Matched,
            MatchState::Reset,
            MatchState::Matched,
            MatchState::Matched,
        ]
    );
    assert_eq!(count.get(), 3);
}

#[test]
fn test_long_pause_keeps_partial_match() {
    let (count, on_match) = counter();
    let mut matcher = SequenceMatcher::new(keys("b a"), on_match);

    matcher.submit(KeyCode::KeyB);
    std::thread::sleep(std::time::Duration::from_millis(20));
    assert_eq!(matcher.submit(KeyCode::KeyA), MatchState::Matched);
    assert_eq!(count.get(), 1);
}

#[test]
fn test_buffer_never_exceeds_target_length() {
    let (_count, on_match) = counter();
    let target = keys("up down left");
    let mut matcher = SequenceMatcher::new(target.clone(), on_match);

    for key in keys("up down up up down left left up down right up down") {
        matcher.submit(key);
        assert!(matcher.progress() <= target.len());
    }
}
