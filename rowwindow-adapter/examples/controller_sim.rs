// Example: driving a ScrollController from simulated host events.
use std::cell::Cell;
use std::rc::Rc;

use rowwindow::WindowOptions;
use rowwindow_adapter::{HeaderSurface, ScrollController, ScrollSurface, SpacerSurface};

#[derive(Clone, Default)]
struct Body {
    top: Rc<Cell<u64>>,
}

impl ScrollSurface for Body {
    fn scroll_top(&self) -> u64 {
        self.top.get()
    }

    fn scroll_left(&self) -> u32 {
        0
    }

    fn client_height(&self) -> u32 {
        300
    }
}

struct Header;

impl HeaderSurface for Header {
    fn set_scroll_left(&mut self, scroll_left: u32) {
        println!("  header.scroll_left = {scroll_left}");
    }
}

struct Spacer;

impl SpacerSurface for Spacer {
    fn set_height(&mut self, height: u64) {
        println!("  spacer.height = {height}px");
    }
}

fn main() {
    let rows: Vec<String> = (0..5_000).map(|i| format!("row {i}")).collect();
    let body = Body::default();

    let mut c = ScrollController::new(WindowOptions::default(), body.clone(), Header, Spacer);
    c.set_rows(rows.len());
    c.mount();

    let mut nodes = Vec::new();
    for (now_ms, top) in [(0u64, 0u64), (8, 900), (16, 1800), (40, 2400)] {
        body.top.set(top);
        let request = c.on_scroll(now_ms).or_else(|| c.tick(now_ms));
        let Some(state) = request else {
            println!("t={now_ms}ms scroll_top={top}: throttled");
            continue;
        };
        println!("t={now_ms}ms scroll_top={top}: {state:?}");

        // Render phase.
        let range = c.render(&rows, &mut nodes, |row, index| {
            Some(format!("<tr id={index}>{row}"))
        });
        // Measure phase: every fourth row wraps onto two lines.
        let measured: Vec<(usize, u32)> = range
            .as_range()
            .map(|i| (i, if i % 4 == 0 { 80 } else { 40 }))
            .collect();
        if let Some(settled) = c.settle(Some(&measured)) {
            println!(
                "  settled: offset={} total={}",
                settled.offset, settled.total_height
            );
        }
    }

    c.unmount();
    assert!(c.on_scroll(1_000).is_none());
}
