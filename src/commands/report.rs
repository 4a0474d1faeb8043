//! Text rendering of the season recap.

use crate::storage::{GameMargin, LeagueReport, TeamTotal, WeeklyPerformance};

/// Banner printed above each section:
///
/// ```text
/// ####################
/// # BEST PERFORMANCE #
/// ####################
/// ```
pub fn label(msg: &str) -> String {
    let border = "#".repeat(msg.chars().count() + 4);
    format!("{border}\n# {msg} #\n{border}\n")
}

/// A left-aligned text table.
#[derive(Debug, Clone, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        if self.rows.is_empty() {
            return "(no rows)\n".to_string();
        }

        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.chars().count());
                }
            }
        }

        let line = |cells: &[String]| -> String {
            let padded: Vec<String> = cells
                .iter()
                .zip(&widths)
                .map(|(cell, width)| format!("{:<width$}", cell, width = width))
                .collect();
            format!("{}\n", padded.join("  ").trim_end())
        };

        let mut out = line(&self.headers);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        out.push_str(&format!("{}\n", rule.join("  ")));
        for row in &self.rows {
            out.push_str(&line(row));
        }
        out
    }
}

fn points(value: f64) -> String {
    format!("{:.2}", value)
}

fn signed(value: f64) -> String {
    format!("{:+.2}", value)
}

fn performance_table(perf: Option<&WeeklyPerformance>) -> Table {
    let mut table = Table::new(&["team", "week", "differential"]);
    if let Some(p) = perf {
        table.push(vec![p.team.clone(), p.week.to_string(), signed(p.differential)]);
    }
    table
}

fn margin_table(margin: Option<&GameMargin>) -> Table {
    let mut table = Table::new(&["week", "home", "home_score", "away", "away_score", "differential"]);
    if let Some(m) = margin {
        table.push(vec![
            m.week.to_string(),
            m.home_team.clone(),
            points(m.home_score),
            m.away_team.clone(),
            points(m.away_score),
            points(m.differential),
        ]);
    }
    table
}

fn totals_table<T>(column: &str, totals: &[TeamTotal<T>], fmt: impl Fn(&T) -> String) -> Table {
    let mut table = Table::new(&["team", column]);
    for t in totals {
        table.push(vec![t.team.clone(), fmt(&t.value)]);
    }
    table
}

/// Every section of the report as labeled text tables.
pub fn render_report(report: &LeagueReport) -> String {
    let mut sections: Vec<(&str, Table)> = Vec::new();

    sections.push(("BEST PERFORMANCE", performance_table(report.best_performance.as_ref())));
    sections.push(("WORST PERFORMANCE", performance_table(report.worst_performance.as_ref())));
    sections.push((
        "MOST POINTS FOR",
        totals_table("points", &report.points_for, |v| points(*v)),
    ));
    sections.push((
        "MOST POINTS AGAINST",
        totals_table("points_against", &report.points_against, |v| points(*v)),
    ));
    sections.push(("CLOSEST GAME", margin_table(report.closest_game.as_ref())));
    sections.push(("BIGGEST BLOWOUT", margin_table(report.biggest_blowout.as_ref())));

    let mut luck = Table::new(&["status", "team", "week", "score", "median", "median_diff"]);
    for r in &report.luck {
        luck.push(vec![
            r.tag.to_string(),
            r.team.clone(),
            r.week.to_string(),
            points(r.score),
            points(r.median),
            signed(r.median_diff),
        ]);
    }
    sections.push(("MOST LUCKY WINS, UNLUCKY LOSSES", luck));

    let mut bench = Table::new(&["team", "player", "week", "points"]);
    for b in &report.best_bench_performances {
        bench.push(vec![
            b.team.clone(),
            b.player.clone(),
            b.week.to_string(),
            points(b.points),
        ]);
    }
    sections.push(("BEST BENCH PERFORMANCE", bench));
    sections.push((
        "HIGHEST SCORING BENCH",
        totals_table("points", &report.bench_totals, |v| points(*v)),
    ));
    sections.push((
        "MOST, LEAST EFFICIENT GM",
        totals_table("outscored_starters", &report.outscored_starters, u32::to_string),
    ));
    sections.push((
        "MOST, LEAST ROSTER MOVES",
        totals_table("num_moves", &report.roster_moves, u32::to_string),
    ));
    sections.push((
        "MOST INJURED PLAYERS",
        totals_table("num_injured", &report.injured_players, u32::to_string),
    ));

    let mut swaps = Table::new(&["target_team", "other_schedule_team", "num_wins"]);
    for s in &report.schedule_swaps {
        swaps.push(vec![s.team.clone(), s.schedule_of.clone(), s.wins.to_string()]);
    }
    sections.push(("NUMBER OF WINS IF SCHEDULES WERE SWAPPED", swaps));

    let mut out = String::new();
    for (title, table) in sections {
        out.push_str(&label(title));
        out.push_str(&table.render());
        out.push('\n');
    }
    out
}
