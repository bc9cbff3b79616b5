//! Text and JSON renderings of cars and run outcomes.

use ad_car::CarOutcome;
use ad_sim::CarSpec;
use serde::Serialize;

/// `- name, (x, y) D, COMMANDS`
pub fn car_line(spec: &CarSpec) -> String {
    format!("- {}, {} {}, {}", spec.name, spec.position, spec.direction, spec.commands)
}

/// `- A, (5, 4) S` or `- A, collides with B and C at (5, 4) at step 7`
pub fn outcome_line(name: &str, outcome: &CarOutcome) -> String {
    match outcome {
        CarOutcome::Active { position, direction } => format!("- {name}, {position} {direction}"),
        CarOutcome::Collided(record) => format!(
            "- {name}, collides with {} at {} at step {}",
            record.partners.join(" and "),
            record.position,
            record.step,
        ),
    }
}

#[derive(Serialize)]
struct OutcomeEntry<'a> {
    name:    &'a str,
    outcome: &'a CarOutcome,
}

/// Outcomes as a pretty-printed JSON array of `{ "name", "outcome" }`.
pub fn outcomes_json(outcomes: &[(String, CarOutcome)]) -> serde_json::Result<String> {
    let entries: Vec<OutcomeEntry<'_>> = outcomes
        .iter()
        .map(|(name, outcome)| OutcomeEntry { name, outcome })
        .collect();
    serde_json::to_string_pretty(&entries)
}
