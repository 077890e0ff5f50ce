//! Linear narration of an evolution tree.

use dex_types::{ChainLink, EvolutionDetail, EvolutionStep};

pub const UNKNOWN_METHOD: &str = "Unknown method";

/// Walk the chain root first, following only the first branch at each node.
///
/// Each step's reason is how that stage is reached; the root has no incoming
/// transition and keeps [`UNKNOWN_METHOD`].
pub fn narrate(chain: &ChainLink) -> Vec<EvolutionStep> {
    let mut steps = Vec::new();
    let mut current = Some(chain);

    while let Some(link) = current {
        let reason = link
            .evolution_details
            .first()
            .map(describe_transition)
            .unwrap_or_else(|| UNKNOWN_METHOD.to_string());

        steps.push(EvolutionStep::new(link.species.name.clone(), reason));
        current = link.evolves_to.first();
    }

    steps
}

/// `"Level Up (Level 16)"`, `"Trade (Hold King's Rock)"`, or the bare trigger label
pub fn describe_transition(detail: &EvolutionDetail) -> String {
    let trigger = trigger_label(&detail.trigger.name);
    let conditions = conditions(detail);

    if conditions.is_empty() {
        trigger.to_string()
    } else {
        format!("{} ({})", trigger, conditions.join(", "))
    }
}

fn trigger_label(trigger: &str) -> &str {
    match trigger {
        "level-up" => "Level Up",
        "trade" => "Trade",
        "use-item" => "Use Item",
        "shed" => "Party Space",
        "spin" => "Spin",
        "other" => "Special",
        raw => raw,
    }
}

fn conditions(detail: &EvolutionDetail) -> Vec<String> {
    let mut out = Vec::new();

    if let Some(level) = detail.min_level {
        out.push(format!("Level {level}"));
    }
    if let Some(happiness) = detail.min_happiness {
        out.push(format!("Friendship {happiness}+"));
    }
    if let Some(item) = &detail.item {
        out.push(format_name(&item.name));
    }
    if let Some(held) = &detail.held_item {
        out.push(format!("Hold {}", format_name(&held.name)));
    }
    // the API sends "" when there is no time constraint
    if let Some(time) = detail.time_of_day.as_deref().filter(|t| !t.is_empty()) {
        out.push(format!("At {time}"));
    }
    if let Some(move_type) = &detail.known_move_type {
        out.push(format!("Know {} move", format_name(&move_type.name)));
    }
    if let Some(location) = &detail.location {
        out.push(format!("Near {}", format_name(&location.name)));
    }
    if detail.needs_overworld_rain {
        out.push("Raining".to_string());
    }
    if let Some(gender) = detail.gender {
        let label = if gender == 1 { "Female" } else { "Male" };
        out.push(format!("Gender: {label}"));
    }
    let physical = match detail.relative_physical_stats {
        Some(-1) => Some("Attack < Defense"),
        Some(0) => Some("Attack = Defense"),
        Some(1) => Some("Attack > Defense"),
        _ => None,
    };
    if let Some(physical) = physical {
        out.push(physical.to_string());
    }

    out
}

/// `"thunder-stone"` -> `"Thunder Stone"`
pub fn format_name(raw: &str) -> String {
    raw.split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
