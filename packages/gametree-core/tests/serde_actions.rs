#![cfg(feature = "serde")]

use gametree_core::{reduce, Annotation, MoveInput, Score, Transition, TreeAction, TreeState};
use gametree_test_support::{build_tree, FixedClassifier, ScriptedRules};

#[test]
fn actions_use_type_and_payload_tags() {
    let action: TreeAction =
        serde_json::from_str(r#"{"type":"MAKE_MOVE","payload":{"from":"e2","to":"e4"}}"#).unwrap();
    assert_eq!(action, TreeAction::MakeMove(MoveInput::squares("e2", "e4")));

    let action: TreeAction =
        serde_json::from_str(r#"{"type":"MAKE_MOVE","payload":"Nf3"}"#).unwrap();
    assert_eq!(action, TreeAction::MakeMove(MoveInput::san("Nf3")));

    let action: TreeAction = serde_json::from_str(r#"{"type":"GO_TO_START"}"#).unwrap();
    assert_eq!(action, TreeAction::GoToStart);

    let action: TreeAction =
        serde_json::from_str(r#"{"type":"SET_ANNOTATION","payload":"?!"}"#).unwrap();
    assert_eq!(action, TreeAction::SetAnnotation(Annotation::Dubious));
}

#[test]
fn scores_carry_their_kind() {
    let json = serde_json::to_string(&Score::Mate(-3)).unwrap();
    assert_eq!(json, r#"{"type":"mate","value":-3}"#);
}

#[test]
fn state_survives_a_json_trip() {
    let state = build_tree(&[&["e4", "e5"], &["d4"]]);
    let json = serde_json::to_string(&state).unwrap();
    assert!(json.contains(r#""move":{"san":"e4","uci":"e4"}"#));
    let back: TreeState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, state);
}

#[test]
fn long_games_replace_state_through_json() {
    let line: Vec<&str> = ["Nf3", "Nf6", "Ng1", "Ng8"].repeat(60);
    let state = build_tree(&[&line[..]]);
    assert_eq!(state.mainline_len(), 240);

    let action = format!(
        r#"{{"type":"SET_STATE","payload":{}}}"#,
        serde_json::to_string(&state).unwrap()
    );
    let action: TreeAction = serde_json::from_str(&action).unwrap();

    let mut current = TreeState::default();
    let rules = ScriptedRules::new();
    let transition = reduce(&mut current, &rules, &FixedClassifier(Annotation::None), action);
    assert_eq!(transition, Transition::Replaced);
    assert_eq!(current, state);
}
