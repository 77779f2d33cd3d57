use cmdr::config::Config;
use cmdr::panel::{select_layout, ActiveTabState, CycleDirection, FormFactor};
use cmdr::settings::ConfigFileStore;
use cmdr::tui::action::Action;
use cmdr::tui::reducer::reduce;
use cmdr::tui::state::AppState;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;

const TAB_COUNT: usize = 9;

/// Benchmark the active tab state transitions
fn bench_tab_state(c: &mut Criterion) {
    let mut group = c.benchmark_group("tab_state");

    group.bench_function("cycle_forward_full_lap", |b| {
        let mut state = ActiveTabState::new(TAB_COUNT).unwrap();
        b.iter(|| {
            for _ in 0..TAB_COUNT {
                state.cycle(black_box(CycleDirection::Forward));
            }
            state.active_index()
        })
    });

    group.bench_function("select_every_tab", |b| {
        let mut state = ActiveTabState::new(TAB_COUNT).unwrap();
        b.iter(|| {
            for index in 0..TAB_COUNT {
                state.select(black_box(index)).unwrap();
            }
            state.current()
        })
    });

    group.finish();
}

/// Benchmark layout selection for every form factor and list state
fn bench_layout(c: &mut Criterion) {
    let list = ActiveTabState::new(TAB_COUNT).unwrap();
    let mut open = list.clone();
    open.select(4).unwrap();

    c.bench_function("select_layout", |b| {
        b.iter(|| {
            (
                select_layout(black_box(FormFactor::Full), black_box(&open)),
                select_layout(black_box(FormFactor::Compact), black_box(&list)),
                select_layout(black_box(FormFactor::Compact), black_box(&open)),
            )
        })
    });
}

/// Benchmark reducer dispatch through a mounted panel
fn bench_reducer_dispatch(c: &mut Criterion) {
    let config = Config {
        form_factor: FormFactor::Compact,
        ..Config::default()
    };
    let mut state =
        AppState::open(config, Arc::new(ConfigFileStore::at("/dev/null")), None).unwrap();

    let mut group = c.benchmark_group("reducer");

    group.bench_function("cycle_key", |b| {
        b.iter(|| {
            reduce(
                &mut state,
                black_box(Action::CycleKey(KeyEvent::new(
                    KeyCode::Tab,
                    KeyModifiers::NONE,
                ))),
            )
        })
    });

    group.bench_function("select_then_back", |b| {
        b.iter(|| {
            reduce(&mut state, black_box(Action::SelectTab(3)));
            reduce(&mut state, black_box(Action::Back))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_tab_state, bench_layout, bench_reducer_dispatch);
criterion_main!(benches);
