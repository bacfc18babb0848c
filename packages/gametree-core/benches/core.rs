use std::env;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gametree_core::{resolve, MoveInput, TreeState};
use gametree_test_support::ScriptedRules;

const CI_DEPTHS: &[usize] = &[100, 1_000];

const LOCAL_DEPTHS: &[usize] = &[10, 100, 1_000];

const MOVES: [&str; 4] = ["Nf3", "Nf6", "Ng1", "Ng8"];

fn is_ci() -> bool {
    env::var("CI").map(|v| v == "true").unwrap_or(false)
}

fn depths() -> &'static [usize] {
    if is_ci() {
        CI_DEPTHS
    } else {
        LOCAL_DEPTHS
    }
}

/// A single line of `depth` plies with a one-move side variation at every ply.
fn build_line(rules: &ScriptedRules, depth: usize) -> TreeState {
    let mut state = TreeState::default();
    for ply in 0..depth {
        let here = state.path.clone();
        state.make_move(rules, &MoveInput::san("a3"));
        state.go_to(here);
        state.make_move(rules, &MoveInput::san(MOVES[ply % MOVES.len()]));
    }
    state
}

fn bench_insert(c: &mut Criterion) {
    let rules = ScriptedRules::new();
    let mut group = c.benchmark_group("insert-line");
    for &depth in depths() {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| black_box(build_line(&rules, depth)));
        });
    }
    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let rules = ScriptedRules::new();
    let mut group = c.benchmark_group("resolve-deepest");
    for &depth in depths() {
        let state = build_line(&rules, depth);
        let path = state.path.clone();
        group.bench_with_input(BenchmarkId::from_parameter(depth), &path, |b, path| {
            b.iter(|| black_box(resolve(&state.root, path)));
        });
    }
    group.finish();
}

fn bench_traverse(c: &mut Criterion) {
    let rules = ScriptedRules::new();
    let mut group = c.benchmark_group("traverse");
    for &depth in depths() {
        let state = build_line(&rules, depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &state, |b, state| {
            b.iter(|| black_box(state.iter().count()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_resolve, bench_traverse);
criterion_main!(benches);
