//! Two widgets wired to one injected store

use tinstore::app::{AppState, AppStore, ContentWidget, ControlsWidget};

fn main() {
    println!("=== Widget Demo ===\n");

    let store = AppStore::new(AppState::default());
    let content = ContentWidget::new(&store);
    let controls = ControlsWidget::new(&store);

    println!("Initial display: {}", content.output());

    println!("\nClicking increment twice...");
    controls.increment();
    controls.increment();
    println!("Display: {}", content.output());

    println!("\nTyping a new message...");
    controls.set_message("World");
    println!("Display: {}", content.output());
    println!("Input mirror: {:?}", controls.input());

    println!("\nDetaching the display widget, then decrementing...");
    content.detach();
    controls.decrement();
    println!("Display (stale): {}", content.output());
    println!("Store count: {}", store.get_state().count);
}
