// Example: feeding measured heights back after layout.
use rowwindow::{RowWindow, WindowOptions};

fn main() {
    let mut w = RowWindow::with_rows(WindowOptions::dynamic(40).with_buffer(2), 100);
    w.set_viewport_height(200);
    w.scroll_to(800);
    println!("before: state={:?}", w.state());

    // Pretend the host laid out the rendered rows and some turned out taller.
    let measured: Vec<(usize, u32)> = w
        .render_range()
        .as_range()
        .map(|i| (i, if i % 3 == 0 { 72 } else { 40 }))
        .collect();
    let changed = w.apply_measurements(measured);
    println!("corrected {changed} rows");
    println!("after: state={:?}", w.state());

    // A later scroll uses the corrected positions.
    w.scroll_to(1200);
    println!(
        "scrolled: start_index={} offset={}",
        w.start_index(),
        w.start_offset()
    );
}
