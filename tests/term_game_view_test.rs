use tui_hangman::audio::RecordingBackend;
use tui_hangman::core::{GameSnapshot, LevelCatalog, Tier, WordEntry};
use tui_hangman::engine::Engine;
use tui_hangman::term::{FrameBuffer, GameView, Viewport};
use tui_hangman::types::{InputEvent, Letter, Point};

const VP: Viewport = Viewport {
    width: 80,
    height: 24,
};

fn engine(word: &str) -> Engine<RecordingBackend> {
    let catalog =
        LevelCatalog::new(vec![Tier::new("Easy", vec![WordEntry::new(word, "Meows")])]).unwrap();
    Engine::new(catalog, 1, RecordingBackend::new()).unwrap()
}

fn screen(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

fn key_center(letter: char) -> Point {
    let r = VP.keyboard().key_rect(Letter::from_char(letter).unwrap());
    Point::new(r.x + r.w / 2, r.y + r.h / 2)
}

#[test]
fn term_view_follows_the_engine_through_a_round() {
    let view = GameView::default();
    let mut e = engine("CAT");
    let layout = VP.keyboard();

    let text = screen(&view.render(&e.snapshot(), VP));
    assert!(text.contains("ULTIMATE HANGMAN"));

    e.step(&[InputEvent::Confirm], &layout);
    let text = screen(&view.render(&e.snapshot(), VP));
    assert!(text.contains("LEVEL 1 / 1"));
    assert!(text.contains("_ _ _"));
    assert!(text.contains("HINT: Meows"));
    assert!(text.contains("LIVES: 6"));

    e.step(&[InputEvent::MousePressed(key_center('A'))], &layout);
    let text = screen(&view.render(&e.snapshot(), VP));
    assert!(text.contains("_ A _"));

    e.step(
        &[
            InputEvent::Letter(Letter::from_char('C').unwrap()),
            InputEvent::Letter(Letter::from_char('T').unwrap()),
        ],
        &layout,
    );
    let text = screen(&view.render(&e.snapshot(), VP));
    assert!(text.contains("LEVEL COMPLETE"));
    assert!(text.contains("Word: CAT"));

    e.step(&[InputEvent::Confirm], &layout);
    let text = screen(&view.render(&e.snapshot(), VP));
    assert!(text.contains("CHAMPION!"));
}

#[test]
fn term_view_colors_clicked_key() {
    let view = GameView::default();
    let mut e = engine("CAT");
    let layout = VP.keyboard();
    e.step(&[InputEvent::Confirm], &layout);
    e.step(
        &[
            InputEvent::MousePressed(key_center('Z')),
            InputEvent::MouseMoved(key_center('Z')),
        ],
        &layout,
    );

    let fb = view.render(&e.snapshot(), VP);
    let r = layout.key_rect(Letter::from_char('Z').unwrap());
    assert_eq!(
        fb.get(r.x + 1, r.y + 1).unwrap().style.bg,
        view.palette().key_wrong
    );
    assert!(screen(&fb).contains("LIVES: 5"));
}

#[test]
fn term_view_render_into_reuses_snapshot_buffers() {
    let view = GameView::default();
    let mut e = engine("CAT");
    let layout = VP.keyboard();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    e.step(&[InputEvent::Confirm], &layout);
    e.snapshot_into(&mut snap);
    view.render_into(&snap, VP, &mut fb);
    assert_eq!((fb.width(), fb.height()), (80, 24));
    assert_eq!(snap, e.snapshot());
}
