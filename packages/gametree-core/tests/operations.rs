use gametree_core::{
    AnalysisEntry, Annotation, Color, Comment, Evaluation, GameHeaders, Score, Shape, Transition,
    TreeAction, TreeEditor, TreeState, WinChanceClassifier, NOVELTY_COMMENT,
};
use gametree_test_support::{
    build_tree, make_move, FixedClassifier, RecordingClassifier, ScriptedRules,
};

fn editor() -> TreeEditor<ScriptedRules, WinChanceClassifier> {
    TreeEditor::new(ScriptedRules::new(), WinChanceClassifier, TreeState::default())
}

#[test]
fn first_move_creates_mainline_child() {
    let mut editor = editor();
    editor.dispatch(make_move("e4"));

    let state = editor.state();
    assert_eq!(state.root.children.len(), 1);
    let child = &state.root.children[0];
    assert_eq!(child.san(), Some("e4"));
    assert_eq!(child.ply, 1);
    assert_eq!(state.path, vec![0]);
}

#[test]
fn replaying_a_move_from_start_reuses_the_child() {
    let mut editor = editor();
    editor.dispatch(make_move("e4"));
    editor.dispatch(TreeAction::GoToStart);
    editor.dispatch(make_move("e4"));

    assert_eq!(editor.state().path, vec![0]);
    assert_eq!(editor.state().root.children.len(), 1);
}

#[test]
fn canonical_moves_deduplicate_spelling_variants() {
    let mut editor = editor();
    editor.dispatch(make_move("Nf3"));
    editor.dispatch(TreeAction::GoToStart);
    editor.dispatch(make_move("Nf3+"));
    assert_eq!(editor.state().root.children.len(), 1);
}

#[test]
fn promoting_a_variation_swaps_it_to_the_front() {
    let state = build_tree(&[&["e4", "e5"], &["d4"]]);
    let mut editor = TreeEditor::new(ScriptedRules::new(), WinChanceClassifier, state);
    editor.dispatch(TreeAction::PromoteVariation(vec![1]));

    let state = editor.state();
    let order: Vec<_> = state.root.children.iter().filter_map(|n| n.san()).collect();
    assert_eq!(order, vec!["d4", "e4"]);
    assert_eq!(state.path, vec![0]);
    assert_eq!(state.root.children[1].children[0].san(), Some("e5"));
}

#[test]
fn deleting_an_ancestor_of_the_selection_selects_its_parent() {
    let state = build_tree(&[&["e4", "e5"]]);
    assert_eq!(state.path, vec![0, 0]);
    let mut editor = TreeEditor::new(ScriptedRules::new(), WinChanceClassifier, state);
    editor.dispatch(TreeAction::DeleteMove(Some(vec![0])));

    assert!(editor.state().root.children.is_empty());
    assert!(editor.state().path.is_empty());
}

#[test]
fn toggling_the_same_marker_twice_clears_it() {
    let mut editor = editor();
    let arrow = Shape::arrow("e2", "e4");
    editor.dispatch(TreeAction::SetShapes(vec![arrow.clone()]));
    assert_eq!(editor.state().root.shapes, vec![arrow.clone()]);
    editor.dispatch(TreeAction::SetShapes(vec![arrow]));
    assert!(editor.state().root.shapes.is_empty());
}

#[test]
fn illegal_moves_leave_the_session_untouched() {
    let rules = ScriptedRules::new().with_illegal("Ke2");
    let mut editor = TreeEditor::new(rules, WinChanceClassifier, build_tree(&[&["e4"]]));
    let before = editor.state().clone();

    let transition = editor.dispatch(make_move("Ke2"));
    assert!(transition.is_ignored());
    assert_eq!(editor.state(), &before);
}

#[test]
fn move_sequences_build_on_each_other() {
    let mut editor = editor();
    editor.dispatch(TreeAction::MakeMoves(
        ["e4", "c5", "Nf3", "d6"].iter().map(|s| s.to_string()).collect(),
    ));
    let state = editor.state();
    assert_eq!(state.mainline_moves(), vec!["e4", "c5", "Nf3", "d6"]);
    assert_eq!(state.path, vec![0, 0, 0, 0]);
    assert_eq!(state.current_node().ply, 4);
    assert_eq!(state.current_node().fen, format!("{} e4 c5 Nf3 d6", state.root.fen));
}

#[test]
fn analysis_annotates_the_mainline_with_alternating_sides() {
    let state = build_tree(&[&["e4", "e5", "Nf3"], &["d4"]]);
    let classifier = RecordingClassifier::default();
    let mut editor = TreeEditor::new(ScriptedRules::new(), &classifier, state);
    let entries = vec![
        AnalysisEntry::new(Evaluation::new(Score::Cp(20), 22), false),
        AnalysisEntry::new(Evaluation::new(Score::Cp(35), 22), false),
        AnalysisEntry::new(Evaluation::new(Score::Cp(30), 22), true),
    ];
    editor.dispatch(TreeAction::AddAnalysis(entries));

    let calls = classifier.calls.borrow();
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[0], (Score::Cp(0), Score::Cp(20), Color::White));
    assert_eq!(calls[1], (Score::Cp(20), Score::Cp(35), Color::Black));
    assert_eq!(calls[2], (Score::Cp(35), Score::Cp(30), Color::White));

    let mainline: Vec<_> = editor.state().root.mainline().collect();
    assert_eq!(mainline[2].comment, Comment::plain(NOVELTY_COMMENT));
    assert_eq!(mainline[3].evaluation, None);
    // variations are never touched
    assert_eq!(editor.state().root.children[1].evaluation, None);
}

#[test]
fn classifier_verdicts_land_on_nodes() {
    let state = build_tree(&[&["e4", "e5"]]);
    let mut editor = TreeEditor::new(
        ScriptedRules::new(),
        FixedClassifier(Annotation::Mistake),
        state,
    );
    editor.dispatch(TreeAction::AddAnalysis(vec![
        AnalysisEntry::new(Evaluation::new(Score::Cp(10), 10), false);
        2
    ]));
    let mainline: Vec<_> = editor.state().root.mainline().collect();
    assert_eq!(mainline[1].annotation, Annotation::Mistake);
    assert_eq!(mainline[2].annotation, Annotation::None);
}

#[test]
fn saving_and_loading_reset_dirty() {
    let mut editor = editor();
    editor.dispatch(make_move("e4"));
    assert!(editor.state().dirty);
    editor.dispatch(TreeAction::Save);
    assert!(!editor.state().dirty);

    editor.dispatch(TreeAction::SetAnnotation(Annotation::Brilliant));
    let mut loaded = build_tree(&[&["c4"]]);
    loaded.dirty = false;
    assert_eq!(
        editor.dispatch(TreeAction::SetState(Box::new(loaded))),
        Transition::Replaced
    );
    assert!(!editor.state().dirty);
    assert_eq!(editor.state().mainline_moves(), vec!["c4"]);
}

#[test]
fn headers_render_with_repertoire_fields() {
    let mut editor = editor();
    editor.dispatch(TreeAction::SetHeaders(GameHeaders {
        event: "Training".into(),
        white: "Me".into(),
        ..GameHeaders::default()
    }));
    editor.dispatch(TreeAction::SetStart(vec![0, 1]));
    editor.dispatch(TreeAction::SetOrientation(Color::White));

    let tags = editor.state().headers.to_tag_pairs();
    assert!(tags.starts_with("[Event \"Training\"]\n[Site \"?\"]\n"));
    assert!(tags.contains("[White \"Me\"]\n"));
    assert!(tags.ends_with("[Start \"[0,1]\"]\n[Orientation \"white\"]\n"));
}

#[test]
fn into_state_hands_back_the_session() {
    let mut editor = editor();
    editor.dispatch(make_move("d4"));
    let state = editor.into_state();
    assert_eq!(state.mainline_len(), 1);
}
