
use super::{Grammar, GroupChunk};

/// Render one group the way the orchestrator would, noun included.
fn render(grammar: &dyn Grammar, value: u16, magnitude: u64, has_preceding: bool) -> String {
    let chunk = GroupChunk {
        value,
        magnitude,
        has_preceding,
    };
    let mut out = grammar.render_group(&chunk);
    if let Some(name) = grammar.group_name(&chunk) {
        out.push(' ');
        out.push_str(&name);
    }
    out
}
