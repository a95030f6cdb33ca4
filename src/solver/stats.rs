use prettytable::{Cell, Row, Table};

use crate::solver::engine::SearchStats;

/// Renders the counters of a finished search as a small text table, suitable
/// for dumping after a solve run.
pub fn render_stats_table(stats: &SearchStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("Metric"), Cell::new("Count")]));
    table.add_row(Row::new(vec![
        Cell::new("Nodes visited"),
        Cell::new(&stats.nodes_visited.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Backtracks"),
        Cell::new(&stats.backtracks.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Contradictions"),
        Cell::new(&stats.contradictions.to_string()),
    ]));
    table.to_string()
}
