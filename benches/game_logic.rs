use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_hangman::audio::{synthesize, NullBackend, SoundBank};
use tui_hangman::core::{
    GameSession, GameSnapshot, GameState, LevelCatalog, SimpleRng, Tier, WordEntry,
};
use tui_hangman::term::{FrameBuffer, GameView, Viewport};
use tui_hangman::types::{GameAction, Letter, SoundEffect};

fn bench_guess(c: &mut Criterion) {
    let catalog = LevelCatalog::new(vec![Tier::new(
        "Hard",
        vec![WordEntry::new("POLYMORPHISM", "Many forms.")],
    )])
    .unwrap();
    let letters: Vec<Letter> = "MOPZQ".chars().filter_map(Letter::from_char).collect();
    let mut rng = SimpleRng::new(1);

    c.bench_function("guess_five_letters", |b| {
        b.iter(|| {
            let mut session = GameSession::start_round(&catalog, 0, &mut rng).unwrap();
            for &letter in &letters {
                black_box(session.guess(letter));
            }
        })
    });
}

fn bench_round_start(c: &mut Criterion) {
    let catalog = LevelCatalog::builtin().unwrap();
    let mut rng = SimpleRng::new(12345);

    c.bench_function("start_round", |b| {
        b.iter(|| GameSession::start_round(&catalog, black_box(2), &mut rng))
    });
}

fn bench_synthesize(c: &mut Criterion) {
    let mut rng = SimpleRng::new(7);
    for effect in SoundEffect::ALL {
        let (kind, duration, frequency) = effect.params();
        c.bench_function(&format!("synthesize_{effect:?}"), |b| {
            b.iter(|| synthesize(kind, black_box(duration), frequency, &mut rng))
        });
    }
}

fn bench_build_bank(c: &mut Criterion) {
    c.bench_function("build_sound_bank", |b| {
        b.iter(|| {
            let mut backend = NullBackend::new();
            SoundBank::build_all(&mut backend, &mut SimpleRng::new(1))
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let mut state = GameState::new(LevelCatalog::builtin().unwrap(), 12345);
    state.apply_action(GameAction::Start);
    let view = GameView::default();
    let viewport = Viewport::new(100, 30);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_and_render", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            view.render_into(black_box(&snap), viewport, &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_guess,
    bench_round_start,
    bench_synthesize,
    bench_build_bank,
    bench_render
);
criterion_main!(benches);
