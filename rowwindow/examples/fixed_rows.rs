// Example: the fixed-height variant, selected from a config string.
use rowwindow::{RowWindow, VirtualType, WindowOptions};

fn main() {
    let virtual_type: VirtualType = "fixed".parse().expect("valid virtual type");
    let opts = WindowOptions::default()
        .with_virtual_type(virtual_type)
        .with_item_size(Some(24));

    let mut w = RowWindow::with_rows(opts, 10_000);
    w.set_viewport_height(480);
    w.scroll_to(24 * 5_000 + 7);
    println!(
        "start_index={} range={:?} offset={} total={}",
        w.start_index(),
        w.render_range(),
        w.start_offset(),
        w.total_height()
    );
}
