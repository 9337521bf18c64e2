use crate::*;

use alloc::vec;
use alloc::vec::Vec;
use rowwindow::{RenderRange, WindowOptions};

#[derive(Clone, Copy, Debug, Default)]
struct Body {
    top: u64,
    left: u32,
    height: u32,
}

impl ScrollSurface for Body {
    fn scroll_top(&self) -> u64 {
        self.top
    }

    fn scroll_left(&self) -> u32 {
        self.left
    }

    fn client_height(&self) -> u32 {
        self.height
    }
}

#[derive(Clone, Debug, Default)]
struct Header {
    writes: Vec<u32>,
}

impl HeaderSurface for Header {
    fn set_scroll_left(&mut self, scroll_left: u32) {
        self.writes.push(scroll_left);
    }
}

#[derive(Clone, Debug, Default)]
struct Spacer {
    height: Option<u64>,
    writes: usize,
}

impl SpacerSurface for Spacer {
    fn set_height(&mut self, height: u64) {
        self.height = Some(height);
        self.writes += 1;
    }
}

type Controller = ScrollController<Body, Header, Spacer>;

fn mounted(rows: usize) -> Controller {
    let body = Body {
        height: 400,
        ..Body::default()
    };
    let mut c = ScrollController::new(
        WindowOptions::dynamic(40),
        body,
        Header::default(),
        Spacer::default(),
    );
    c.set_rows(rows);
    assert!(c.mount());
    c
}

fn scroll(c: &mut Controller, top: u64, left: u32) {
    let body = c.scroll_surface_mut();
    body.top = top;
    body.left = left;
}

#[test]
fn throttle_passes_leading_event_and_coalesces_the_rest() {
    let mut t = Throttle::new(20);
    assert!(t.admit(0));
    assert!(!t.admit(5));
    assert!(!t.admit(19));
    assert!(t.is_pending());

    assert!(!t.poll(19));
    assert!(t.poll(20));
    assert!(!t.is_pending());
    assert!(!t.poll(100));

    assert!(!t.admit(30));
    assert!(t.admit(40));
    assert!(!t.is_pending());
}

#[test]
fn throttle_reset_drops_pending_event() {
    let mut t = Throttle::default();
    assert_eq!(t.interval_ms(), DEFAULT_THROTTLE_MS);
    assert!(t.admit(0));
    assert!(!t.admit(1));
    t.reset();
    assert!(!t.poll(1000));
    assert!(t.admit(1));
}

#[test]
fn mount_captures_viewport_and_sizes_spacer() {
    let c = mounted(1000);
    assert_eq!(c.lifecycle(), Lifecycle::Mounted);
    assert_eq!(c.window().viewport_height(), 400);
    assert_eq!(c.spacer().height, Some(40_000));
    assert_eq!(
        c.state().range,
        RenderRange {
            start_index: 0,
            end_index: 15,
        }
    );
}

#[test]
fn mount_only_once() {
    let mut c = mounted(10);
    assert!(!c.mount());
    c.unmount();
    assert!(!c.mount());
    assert_eq!(c.lifecycle(), Lifecycle::TornDown);
}

#[test]
fn events_before_mount_are_ignored() {
    let mut c = ScrollController::new(
        WindowOptions::default(),
        Body {
            top: 2000,
            left: 0,
            height: 400,
        },
        Header::default(),
        Spacer::default(),
    );
    c.set_rows(1000);
    assert_eq!(c.on_scroll(0), None);
    assert_eq!(c.on_resize(), None);
    assert_eq!(c.window().start_index(), 0);
    assert_eq!(c.window().viewport_height(), 0);
    assert_eq!(c.spacer().writes, 0);

    let mut out: Vec<usize> = Vec::new();
    assert!(c.render(&[1usize, 2, 3], &mut out, |r, _| Some(*r)).is_empty());
    assert!(out.is_empty());
}

#[test]
fn scroll_moves_window_and_mirrors_header() {
    let mut c = mounted(1000);
    scroll(&mut c, 2000, 37);

    let state = c.on_scroll(0).unwrap();
    assert_eq!(state.start_index, 50);
    assert_eq!(state.range.as_range(), 45..65);
    assert_eq!(state.offset, 1800);
    assert_eq!(c.header().writes, vec![37]);
}

#[test]
fn throttled_scroll_fires_trailing_update_on_tick() {
    let mut c = mounted(1000);
    scroll(&mut c, 400, 0);
    assert!(c.on_scroll(0).is_some());
    assert_eq!(c.window().start_index(), 10);

    scroll(&mut c, 800, 0);
    assert_eq!(c.on_scroll(5), None);
    scroll(&mut c, 1200, 4);
    assert_eq!(c.on_scroll(10), None);
    // Dropped events did not touch the window.
    assert_eq!(c.window().start_index(), 10);

    assert_eq!(c.tick(15), None);
    let state = c.tick(20).unwrap();
    // The trailing update reads the latest scroll position.
    assert_eq!(state.start_index, 30);
    assert_eq!(c.header().writes, vec![0, 4]);
    assert_eq!(c.tick(60), None);
}

#[test]
fn resize_recomputes_viewport_height() {
    let mut c = mounted(1000);
    assert_eq!(c.on_resize(), None);

    c.scroll_surface_mut().height = 200;
    let state = c.on_resize().unwrap();
    assert_eq!(state.viewport_height, 200);
    assert_eq!(state.range.as_range(), 0..10);
}

#[test]
fn render_calls_renderer_once_per_row_in_order() {
    let rows: Vec<u32> = (0..1000).map(|i| i * 10).collect();
    let mut c = mounted(rows.len());
    scroll(&mut c, 2000, 0);
    c.on_scroll(0);

    let mut calls = Vec::new();
    let mut out = vec![(u32::MAX, usize::MAX)];
    let range = c.render(&rows, &mut out, |row, index| {
        calls.push(index);
        // Two nodes per row, like a row followed by its expanded detail.
        [(*row, index), (*row + 1, index)]
    });

    assert_eq!(range.as_range(), 45..65);
    assert_eq!(calls, (45..65).collect::<Vec<_>>());
    assert_eq!(out.len(), 40);
    assert_eq!(out[0], (450, 45));
    assert_eq!(out[1], (451, 45));
    assert_eq!(out[39], (641, 64));
}

#[test]
fn settle_corrects_rendered_rows_and_updates_spacer() {
    let rows = vec![(); 100];
    let mut c = mounted(rows.len());
    scroll(&mut c, 400, 0);
    c.on_scroll(0);

    let mut out = Vec::new();
    let range = c.render(&rows, &mut out, |_, i| Some(i));
    assert_eq!(range.as_range(), 5..25);

    // Row 2 was not rendered in this pass; its measurement is ignored.
    let measured: Vec<(usize, u32)> = vec![(2, 500), (5, 60), (6, 60)];
    let state = c.settle(Some(&measured)).unwrap();
    assert_eq!(c.window().positions().get(2).unwrap().height, 40);
    assert_eq!(state.total_height, 100 * 40 + 40);
    assert_eq!(c.spacer().height, Some(4040));
    // The block still starts at row 5, whose top did not move.
    assert_eq!(state.offset, 200);
    assert!(!state.rows_changed(&c.state()));
}

#[test]
fn settle_runs_at_most_once_per_render() {
    let rows = vec![(); 50];
    let mut c = mounted(rows.len());
    let mut out = Vec::new();

    let measured: Vec<(usize, u32)> = vec![(0, 80)];
    assert_eq!(c.settle(Some(&measured)), None);

    c.render(&rows, &mut out, |_, i| Some(i));
    assert!(c.settle(Some(&measured)).is_some());
    assert_eq!(c.window().total_height(), 50 * 40 + 40);

    let again: Vec<(usize, u32)> = vec![(0, 10)];
    assert_eq!(c.settle(Some(&again)), None);
    assert_eq!(c.window().total_height(), 50 * 40 + 40);
}

#[test]
fn settle_after_row_source_change_is_dropped() {
    let rows = vec![(); 100];
    let mut c = mounted(rows.len());
    let mut out = Vec::new();
    c.render(&rows, &mut out, |_, i| Some(i));

    // Heights measured for the old rows must not land on the rebuilt index.
    c.set_rows(100).unwrap();
    let measured: Vec<(usize, u32)> = vec![(0, 300)];
    assert_eq!(c.settle(Some(&measured)), None);
    assert_eq!(c.window().positions().get(0).unwrap().height, 40);
    assert_eq!(c.spacer().height, Some(4000));

    // The next render re-arms the pipeline.
    c.render(&rows, &mut out, |_, i| Some(i));
    assert!(c.settle(Some(&measured)).is_some());
    assert_eq!(c.window().positions().get(0).unwrap().height, 300);
}

#[test]
fn settle_after_row_size_change_is_dropped() {
    let rows = vec![(); 100];
    let mut c = mounted(rows.len());
    let mut out = Vec::new();
    c.render(&rows, &mut out, |_, i| Some(i));

    c.set_options(WindowOptions::dynamic(20)).unwrap();
    let measured: Vec<(usize, u32)> = vec![(0, 300)];
    assert_eq!(c.settle(Some(&measured)), None);
    assert_eq!(c.window().total_height(), 2000);
}

#[test]
fn settle_survives_buffer_only_option_change() {
    let rows = vec![(); 100];
    let mut c = mounted(rows.len());
    let mut out = Vec::new();
    c.render(&rows, &mut out, |_, i| Some(i));

    c.set_options(WindowOptions::dynamic(40).with_buffer(2)).unwrap();
    let measured: Vec<(usize, u32)> = vec![(0, 60)];
    assert!(c.settle(Some(&measured)).is_some());
    assert_eq!(c.window().total_height(), 4020);
}

#[test]
fn settle_without_measure_surface_skips_cycle() {
    let rows = vec![(); 50];
    let mut c = mounted(rows.len());
    let mut out = Vec::new();
    c.render(&rows, &mut out, |_, i| Some(i));

    let writes = c.spacer().writes;
    assert_eq!(c.settle(None), None);
    assert_eq!(c.spacer().writes, writes);
    assert_eq!(c.window().total_height(), 2000);

    let measured: Vec<(usize, u32)> = vec![(0, 80)];
    assert_eq!(c.settle(Some(&measured)), None);
}

#[test]
fn set_rows_rebuilds_and_resizes_spacer() {
    let rows = vec![(); 10];
    let mut c = mounted(rows.len());
    let mut out = Vec::new();
    c.render(&rows, &mut out, |_, i| Some(i));
    let measured: Vec<(usize, u32)> = vec![(0, 100)];
    c.settle(Some(&measured));
    assert_eq!(c.spacer().height, Some(460));

    c.set_rows(20).unwrap();
    assert_eq!(c.spacer().height, Some(800));
    assert_eq!(c.window().positions().get(0).unwrap().height, 40);
}

#[test]
fn teardown_ignores_every_event() {
    let rows = vec![(); 1000];
    let mut c = mounted(rows.len());
    scroll(&mut c, 400, 0);
    c.on_scroll(0);
    scroll(&mut c, 4000, 9);
    assert_eq!(c.on_scroll(1), None);

    let mut out = Vec::new();
    c.render(&rows, &mut out, |_, i| Some(i));
    c.unmount();
    assert_eq!(c.lifecycle(), Lifecycle::TornDown);

    let before = c.state();
    let header_writes = c.header().writes.clone();
    let spacer_writes = c.spacer().writes;

    c.scroll_surface_mut().height = 100;
    assert_eq!(c.on_scroll(100), None);
    assert_eq!(c.tick(100), None);
    assert_eq!(c.on_resize(), None);
    let measured: Vec<(usize, u32)> = vec![(5, 99)];
    assert_eq!(c.settle(Some(&measured)), None);
    assert_eq!(c.set_rows(5), None);
    assert_eq!(c.set_options(WindowOptions::fixed(10)), None);
    assert!(c.render(&rows, &mut out, |_, i| Some(i)).is_empty());
    assert!(out.is_empty());

    assert_eq!(c.state(), before);
    assert_eq!(c.header().writes, header_writes);
    assert_eq!(c.spacer().writes, spacer_writes);
    assert!(!c.throttle().is_pending());
    c.unmount();
}

#[test]
fn unit_surfaces_stand_in_for_absent_header_and_spacer() {
    let mut c = ScrollController::new(
        WindowOptions::fixed(20).with_buffer(0),
        Body {
            top: 100,
            left: 3,
            height: 60,
        },
        (),
        (),
    );
    c.set_rows(100);
    c.mount();
    let state = c.on_scroll(0).unwrap();
    assert_eq!(state.start_index, 5);
    assert_eq!(state.range.as_range(), 5..8);
    assert_eq!(state.offset, 100);
}

#[test]
fn set_options_switches_variant() {
    let mut c = mounted(100);
    let state = c.set_options(WindowOptions::fixed(10)).unwrap();
    assert_eq!(state.total_height, 1000);
    assert_eq!(c.spacer().height, Some(1000));
    assert!(c.window().positions().is_empty());
}
