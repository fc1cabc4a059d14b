use crate::clause::Clause;
use tracing::Level;

/// A `tracing`-based debug helper that emits the SQL a clause renders to.
///
/// Enable via the crate feature: `sqlclause = { features = ["tracing"] }`.
#[derive(Debug, Clone)]
pub struct SqlTrace {
    /// Tracing event level to emit at.
    pub level: Level,
    /// Truncate long SQL strings (in bytes, on a char boundary). `None` means no truncation.
    pub max_sql_length: Option<usize>,
}

impl Default for SqlTrace {
    fn default() -> Self {
        Self {
            level: Level::DEBUG,
            max_sql_length: Some(200),
        }
    }
}

impl SqlTrace {
    /// Create a new tracer with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the tracing event level.
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Set maximum SQL length to display.
    pub fn max_sql_length(mut self, len: usize) -> Self {
        self.max_sql_length = Some(len);
        self
    }

    /// Disable SQL truncation.
    pub fn no_truncate(mut self) -> Self {
        self.max_sql_length = None;
        self
    }

    fn truncate_sql(&self, sql: String) -> String {
        match self.max_sql_length {
            Some(max) if sql.len() > max => format!("{}...", truncate_at_char_boundary(&sql, max)),
            _ => sql,
        }
    }

    /// Emit `clause` rendered, with its parameter count, under target `sqlclause.sql`.
    pub fn emit(&self, tag: &str, clause: &Clause) {
        /// Dispatch a tracing event at a runtime-determined level.
        macro_rules! emit_at_level {
            ($level:expr, $($field:tt)*) => {
                match $level {
                    Level::ERROR => tracing::error!($($field)*),
                    Level::WARN  => tracing::warn!($($field)*),
                    Level::INFO  => tracing::info!($($field)*),
                    Level::DEBUG => tracing::debug!($($field)*),
                    Level::TRACE => tracing::trace!($($field)*),
                }
            };
        }

        let sql = self.truncate_sql(clause.to_sql());
        emit_at_level!(
            self.level,
            target: "sqlclause.sql",
            tag,
            param_count = clause.param_count(),
            sql = %sql,
        );
    }
}

fn truncate_at_char_boundary(s: &str, max: usize) -> &str {
    let mut end = max.min(s.len());
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_on_char_boundary() {
        assert_eq!(truncate_at_char_boundary("héllo", 2), "h");
        assert_eq!(truncate_at_char_boundary("abc", 10), "abc");

        let t = SqlTrace::new().max_sql_length(3);
        assert_eq!(t.truncate_sql("abcdef".to_string()), "abc...");
        assert_eq!(t.no_truncate().truncate_sql("abcdef".to_string()), "abcdef");
    }

    #[test]
    fn emit_without_subscriber_is_harmless() {
        let c = Clause::with_expression("select 1");
        SqlTrace::new().level(Level::INFO).emit("test", &c);
        c.trace("test");
    }
}
