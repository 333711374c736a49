//! End-to-end viewer sessions against file-backed storage.

use pinmap::store::FileBlobStore;
use pinmap::{
    BlobStore, MemoryBlobStore, Pin, PinBoard, PinDraft, PinStore, Size, ViewerConfig,
    ViewportController, ViewportEvent,
};

const EPSILON: f32 = 0.001;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

#[test]
fn pins_survive_a_restart() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let viewport = Size::new(800.0, 600.0);
    let content = Size::new(1600.0, 1200.0);

    let (first, second) = {
        let mut board = PinBoard::open(
            FileBlobStore::new(dir.path()),
            viewport,
            content,
            ViewerConfig::default(),
        );
        board.handle(ViewportEvent::ZoomTo(2.0));
        board.handle(ViewportEvent::Drag(-120.0, 40.0));
        let first = board.create_pin_at(100.0, 100.0, PinDraft::new("#ff0000").label("Gate"));
        let second = board.create_pin_at(
            500.0,
            420.0,
            PinDraft::new("#00ff00").link("https://example.com/tower"),
        );
        (board.pin(first).cloned().unwrap(), board.pin(second).cloned().unwrap())
    };

    let board = PinBoard::open(
        FileBlobStore::new(dir.path()),
        viewport,
        content,
        ViewerConfig::default(),
    );
    let pins: Vec<&Pin> = board.pins().iter().map(|e| &e.pin).collect();
    assert_eq!(pins, [&first, &second]);
    assert_eq!(second.label, "Pin");
    assert_eq!(board.link_for(board.pins()[1].id), Some("https://example.com/tower"));
}

#[test]
fn pin_stays_under_cursor_through_zoom() {
    init_logging();
    let mut board = PinBoard::open(
        MemoryBlobStore::new(),
        Size::new(1024.0, 768.0),
        Size::new(4096.0, 3072.0),
        ViewerConfig::default(),
    );
    let id = board.create_pin_at(300.0, 250.0, PinDraft::new("#0084ff"));

    for delta_y in [-120.0, -120.0, -360.0, 240.0] {
        board.handle(ViewportEvent::Wheel {
            delta_y,
            x: 300.0,
            y: 250.0,
        });
        let marker = board.marker(id).unwrap();
        assert!(approx_eq(marker.x, 300.0), "x = {}", marker.x);
        assert!(approx_eq(marker.y, 250.0), "y = {}", marker.y);
    }
}

#[test]
fn view_invariants_hold_under_mixed_input() {
    let viewport = Size::new(800.0, 600.0);
    let content = Size::new(1000.0, 3000.0);
    let mut c = ViewportController::fit(viewport, content);
    let events = [
        ViewportEvent::Wheel { delta_y: -500.0, x: 10.0, y: 590.0 },
        ViewportEvent::PointerDown { x: 400.0, y: 300.0 },
        ViewportEvent::PointerMove { x: 2000.0, y: -4000.0 },
        ViewportEvent::PointerMove { x: 2001.0, y: -4001.0 },
        ViewportEvent::PointerUp,
        ViewportEvent::ZoomStep(0.1),
        ViewportEvent::ZoomTo(7.0),
        ViewportEvent::Drag(-1e7, 1e7),
        ViewportEvent::Wheel { delta_y: 5000.0, x: 799.0, y: 1.0 },
        ViewportEvent::ZoomStep(-0.1),
        ViewportEvent::Resize(Size::new(1200.0, 500.0)),
        ViewportEvent::Drag(33.0, -12.0),
    ];

    for event in events {
        c.handle(event);
        let bounds = *c.bounds();
        let view = *c.view();
        assert!(view.scale >= bounds.min_scale && view.scale <= bounds.max_scale);

        let scaled = bounds.scaled_content(view.scale);
        let (min_x, min_y) = bounds.min_offset(view.scale);
        if scaled.width < bounds.viewport.width {
            assert_eq!(view.offset_x, (bounds.viewport.width - scaled.width) / 2.0);
        } else {
            assert!(view.offset_x >= min_x && view.offset_x <= 0.0);
        }
        if scaled.height < bounds.viewport.height {
            assert_eq!(view.offset_y, (bounds.viewport.height - scaled.height) / 2.0);
        } else {
            assert!(view.offset_y >= min_y && view.offset_y <= 0.0);
        }

        let (ix, iy) = view.to_image(123.0, 456.0);
        let (sx, sy) = view.to_screen(ix, iy);
        assert!(approx_eq(sx, 123.0) && approx_eq(sy, 456.0));
    }
}

#[test]
fn boxed_backend_shares_the_store_interface() {
    let mut store: PinStore<Box<dyn BlobStore>> = PinStore::new(Box::new(MemoryBlobStore::new()));
    let pins = vec![Pin::new(10.0, 20.0, "A", "#fff")];
    store.save(&pins).unwrap();
    assert_eq!(store.load(), pins);
}

#[test]
fn content_size_comes_from_image_header() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("map.png");
    image::RgbImage::new(64, 48).save(&path).unwrap();

    let content = Size::from_image_file(&path).unwrap();
    assert_eq!(content, Size::new(64.0, 48.0));

    let c = ViewportController::fit(Size::new(128.0, 128.0), content);
    assert_eq!(c.view().scale, 2.0);
    assert_eq!(c.view().offset_y, 16.0);
}

#[test]
fn logging_init_can_be_called_twice() {
    pinmap::logging::init(pinmap::LogLevel::Debug);
    pinmap::logging::init(pinmap::LogLevel::Warn);
}
