//! Dialogue-driven NPC
//!
//! This example drives a guide character through a short conversation.
//!
//! Key concepts:
//! - Loading a controller graph from JSON
//! - Named-state lookups for Talk / Listen / Idle
//! - Guarded cross-fades that skip missing and redundant states
//! - Observing guard events
//!
//! Run with: cargo run --example dialogue

use animguard::config::GuardConfig;
use animguard::graph::{ControllerGraph, GraphAnimator};
use animguard::{DialogueStates, TransitionEvent};

const GUIDE: &str = r#"{
    "name": "Guide",
    "layers": [
        {
            "name": "Base",
            "default_state": "Idle",
            "states": [{ "name": "Idle" }, { "name": "Talk" }, { "name": "Listen" }]
        }
    ]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Dialogue Example ===\n");

    let graph = ControllerGraph::from_json(GUIDE)?;
    println!("Controller '{}' states: {:?}\n", graph.name, graph.state_names());

    let config = GuardConfig::from_json(r#"{ "default_duration": 0.25, "history_limit": 16 }"#)?;
    let mut animator = GraphAnimator::new(graph)?;
    let mut guard = config
        .guard()
        .on_event(|event: &TransitionEvent| println!("  event: {event}"));

    // Empty names are skipped by the guard as missing states.
    let script = [
        animator.talk_state(),
        animator.talk_state(),
        animator.listen_state(),
        "Wave",
        animator.idle_state(),
    ];

    for line in script {
        println!("Request: {line:?}");
        let issued = guard.request(&mut animator, &config.request(line));
        println!("  issued: {issued}\n");
    }

    println!("Path on base layer: {:?}", guard.history().get_path(0));
    println!("\n=== Example Complete ===");
    Ok(())
}
