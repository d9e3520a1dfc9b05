//! Complete counter-and-message application on a single shared store

use tinstore::app::{AppState, AppStatePatch, AppStore};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    println!("=== Counter Application ===\n");

    println!("1. Constructing the store");
    let store = AppStore::new(AppState::default());
    println!(
        "   Initial state: count={}, message={:?}",
        store.get_state().count,
        store.get_state().message
    );

    println!("\n2. Subscribing a logger (fires immediately)");
    let logger = store.subscribe(|state| {
        println!("   [State] count={}, message={:?}", state.count, state.message);
    });

    println!("\n3. Incrementing the counter");
    for _ in 0..3 {
        let count = store.get_state().count;
        store.set_state(AppStatePatch {
            count: Some(count + 1),
            ..Default::default()
        });
    }

    println!("\n4. Changing the message (counter untouched)");
    store.set_state(AppStatePatch {
        message: Some("World".to_string()),
        ..Default::default()
    });

    println!("\n5. Cancelling the logger; further writes are silent");
    logger.cancel();
    store.set_state(AppStatePatch {
        count: Some(100),
        ..Default::default()
    });

    println!(
        "\nFinal state: count={}, message={:?}",
        store.get_state().count,
        store.get_state().message
    );
}
