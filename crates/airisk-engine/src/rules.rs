//! # Ordered Rule Tables
//!
//! Provision extraction, compliance resolution and recommendation
//! generation are each an ordered list of independent `(predicate, effect)`
//! pairs evaluated in one pass. Every rule whose predicate holds contributes
//! its effect; nothing short-circuits, deduplicates or merges. Adding a rule
//! is a table edit, and the output order is the table order.

/// One guarded rule: when `when(ctx)` holds, `then` fires.
pub struct Rule<C, E> {
    /// Stable identifier, used in trace output.
    pub name: &'static str,
    pub when: fn(&C) -> bool,
    pub then: E,
}

impl<C, E> Rule<C, E> {
    pub const fn new(name: &'static str, when: fn(&C) -> bool, then: E) -> Self {
        Self { name, when, then }
    }
}

impl<C, E: std::fmt::Debug> std::fmt::Debug for Rule<C, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("then", &self.then)
            .finish_non_exhaustive()
    }
}

/// Effects of every rule that fires against `ctx`, in table order.
pub fn fire<'r, C, E>(rules: &'r [Rule<C, E>], ctx: &C) -> Vec<&'r E> {
    rules
        .iter()
        .filter(|rule| {
            let fired = (rule.when)(ctx);
            tracing::trace!(rule = rule.name, fired, "rule evaluated");
            fired
        })
        .map(|rule| &rule.then)
        .collect()
}
