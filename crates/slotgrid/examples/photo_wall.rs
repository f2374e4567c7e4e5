//! Headless photo wall example demonstrating the grid view lifecycle.
//!
//! Drives a `GridView` through a `ManualViewport`: mount and first
//! measurement, a coalesced resize burst, a pointer drag with the host
//! answering the `moved` signal, and a filter pass. Prints each frame.
//!
//! Run with: cargo run -p slotgrid --example photo_wall

use std::sync::Arc;

use parking_lot::Mutex;
use slotgrid::{
    GridFrame, GridItem, GridView, LayoutOptions, ManualViewport, Point, SortKey,
    StyleDescriptor,
};

#[derive(Debug, Clone)]
struct Photo {
    name: &'static str,
    taken: i64,
    trashed: bool,
}

impl Photo {
    fn new(name: &'static str, taken: i64) -> Self {
        Self {
            name,
            taken,
            trashed: false,
        }
    }
}

impl GridItem for Photo {
    type Key = &'static str;

    fn key(&self) -> &'static str {
        self.name
    }

    fn sort_key(&self) -> SortKey {
        SortKey::Int(self.taken)
    }

    fn filtered(&self) -> bool {
        self.trashed
    }
}

fn label(photo: &Photo, style: &StyleDescriptor) -> String {
    format!(
        "{:<8} at ({:>3}, {:>3})  opacity {:.1}{}",
        photo.name,
        style.origin.x,
        style.origin.y,
        style.opacity,
        if style.z_index > 0 { "  [dragging]" } else { "" },
    )
}

fn print_frame(title: &str, frame: &GridFrame<&'static str, String>) {
    println!("== {title} (grid height {}px)", frame.height);
    for child in &frame.children {
        println!("   {}", child.node);
    }
    println!();
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let viewport = ManualViewport::with_width(350.0);
    let mut view = GridView::new(viewport.clone())
        .with_items(vec![
            Photo::new("harbor", 2019),
            Photo::new("aurora", 2023),
            Photo::new("dunes", 2021),
            Photo::new("glacier", 2017),
            Photo::new("orchard", 2022),
        ])
        .with_options(LayoutOptions {
            item_width: 100.0,
            item_height: 100.0,
            vertical_margin: 0.0,
            zoom: 1.0,
        })
        .with_responsive(true)
        .with_drag_enabled(true);

    let last_move = Arc::new(Mutex::new(None));
    let move_writer = Arc::clone(&last_move);
    view.moved.connect(move |&(key, to_slot)| {
        println!("   moved signal: {key} -> slot {to_slot}");
        *move_writer.lock() = Some((key, to_slot));
    });

    view.mount();
    viewport.run_frames(); // The host's frame scheduler delivers the measurement

    print_frame("mounted at 350px", &view.render(&mut label));

    // The container narrows; the event burst coalesces into one measurement
    viewport.set_width(220.0);
    viewport.emit_resize();
    viewport.emit_resize();
    viewport.emit_resize();
    viewport.run_frames();

    let frame = view.render(&mut label);
    print_frame("after resize to 220px", &frame);

    // Pointer down: hit-test the last frame to find the pressed photo
    let press_at = Point::new(50.0, 50.0);
    let Some(pressed) = frame
        .children
        .iter()
        .find(|child| child.style.bounds().contains(press_at))
        .map(|child| child.key)
    else {
        println!("nothing under the pointer");
        return;
    };

    view.press(pressed, press_at);
    view.drag_to(Point::new(160.0, 160.0));
    print_frame("mid drag", &view.render(&mut label));
    view.release();

    // The host answers the reorder intent by rewriting its sort fields
    if let Some((key, to_slot)) = *last_move.lock() {
        let mut order: Vec<_> = frame
            .children
            .iter()
            .filter_map(|child| child.slot.map(|slot| (slot, child.key)))
            .collect();
        order.sort_by_key(|&(slot, _)| slot);

        let mut names: Vec<_> = order.into_iter().map(|(_, name)| name).collect();
        if let Some(from) = names.iter().position(|name| *name == key) {
            let grabbed = names.remove(from);
            names.insert(to_slot.min(names.len()), grabbed);
        }

        let reordered = names
            .into_iter()
            .enumerate()
            .map(|(position, name)| Photo::new(name, position as i64))
            .collect();
        view.set_items(reordered);
    }

    print_frame("after the host applied the move", &view.render(&mut label));

    // Trash a photo: it keeps its node and fades out in place
    let mut photos = view.items().to_vec();
    if let Some(photo) = photos.iter_mut().find(|photo| photo.name == "harbor") {
        photo.trashed = true;
    }
    view.set_items(photos);

    print_frame("with harbor trashed", &view.render(&mut label));
}
