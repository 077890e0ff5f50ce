use std::fmt::Write;

use dex_types::DexView;

pub fn render_text(view: &DexView) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", view.name);
    if !view.image_url.is_empty() {
        let _ = writeln!(out, "{}", view.image_url);
    }

    section(&mut out, "Abilities", view.abilities.iter());
    section(
        &mut out,
        "Evolution Chain",
        view.evolution_chain
            .iter()
            .map(|step| format!("{} → {}", step.name, step.reason)),
    );

    let _ = writeln!(out, "\nGender: {}", view.gender);
    let _ = writeln!(out, "Growth Rate: {}", view.growth_rate);

    section(&mut out, "Natures", view.natures.iter());
    section(
        &mut out,
        "Stats",
        view.stats
            .iter()
            .map(|stat| format!("{}: {}", stat.name, stat.base_stat)),
    );
    section(&mut out, "Types", view.types.iter());
    section(&mut out, "Weaknesses", view.weaknesses.iter());
    section(
        &mut out,
        "Moves",
        view.moves
            .iter()
            .map(|m| format!("{} (Level {})", m.name, m.level)),
    );
    section(&mut out, "Type Advantages", view.type_advantages.iter());
    section(&mut out, "Type Disadvantages", view.type_disadvantages.iter());

    out.trim_end().to_string()
}

fn section<T: std::fmt::Display>(out: &mut String, title: &str, items: impl Iterator<Item = T>) {
    let _ = writeln!(out, "\n{title}:");
    for item in items {
        let _ = writeln!(out, "  - {item}");
    }
}
