// Node identifier generator.
// One generator per visualize run; identifiers are never reused.

/// Mints unique, human-readable node identifiers. The prefix names the
/// node's role (decl, arg, cond, assignment, return, expr, pass) and the
/// suffix is a strictly increasing counter, so two calls never collide
/// even with the same prefix.
#[derive(Debug, Default)]
pub struct IdGen {
    counter: u64,
}

impl IdGen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next fresh identifier for the given role prefix.
    pub fn next(&mut self, prefix: &str) -> String {
        self.counter += 1;
        format!("{}-{}", prefix, self.counter)
    }
}
