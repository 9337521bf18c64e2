// Example: minimal usage with estimated heights.
use rowwindow::{RowWindow, WindowOptions};

fn main() {
    let rows: Vec<String> = (0..1_000_000).map(|i| format!("row {i}")).collect();

    let mut w = RowWindow::with_rows(WindowOptions::dynamic(40), rows.len());
    w.set_viewport_height(400);
    w.scroll_to(123_456);

    println!("total_height={}", w.total_height());
    println!("render_range={:?}", w.render_range());
    println!("translate_y={}", w.start_offset());
    println!("first_rendered={:?}", w.visible_rows(&rows).first());
}
