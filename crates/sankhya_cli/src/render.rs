//! Plain-text rendering of readings.
//!
//! Color is decided once, from [`RenderConfig`], and passed to every render
//! call. Renderers build strings; `main` decides where they go.

use std::fmt::Write;
use std::io::IsTerminal;

use clap::ValueEnum;
use colored::Colorize;
use sankhya_base::{Ceiling, reduce_steps};
use sankhya_rs::{
    BirthDate, GRID_LAYOUT, NO_LINES, NO_STRENGTHS, NO_WEAKNESSES, Reading, TarotCard,
};

/// `--color` setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Color when stdout is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn resolve(self) -> RenderConfig {
        let color = match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => {
                std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
            }
        };
        RenderConfig { color }
    }
}

/// How output should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    pub color: bool,
}

impl RenderConfig {
    #[cfg(test)]
    pub const PLAIN: Self = Self { color: false };

    fn paint(&self, text: &str, style: Style) -> String {
        if !self.color {
            return text.to_string();
        }
        match style {
            Style::Title => text.magenta().bold().to_string(),
            Style::Subtitle => text.blue().bold().to_string(),
            Style::Result => text.red().bold().to_string(),
            Style::Meaning => text.yellow().to_string(),
            Style::Connection => text.cyan().bold().to_string(),
        }
    }

    fn title(&self, out: &mut String, text: &str) {
        let _ = writeln!(out, "\n{}", self.paint(&format!("== {text} =="), Style::Title));
    }
}

#[derive(Debug, Clone, Copy)]
enum Style {
    Title,
    Subtitle,
    Result,
    Meaning,
    Connection,
}

/// `1+9+9+0+0+1+0+1 = 21 -> 3`
pub fn process_line(digits: &[u8], steps: &[u32]) -> String {
    let terms: Vec<String> = digits.iter().map(u8::to_string).collect();
    let chain: Vec<String> = steps.iter().map(u32::to_string).collect();
    format!("{} = {}", terms.join("+"), chain.join(" -> "))
}

fn card_text(card: &TarotCard) -> String {
    format!("{} ({})", card.name, card.number)
}

/// A printable part of a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Life,
    Outlook,
    Connection,
    Zodiac,
    Ziwei,
    Tarot,
    Grid,
}

pub const ALL_SECTIONS: [Section; 7] = [
    Section::Life,
    Section::Outlook,
    Section::Connection,
    Section::Zodiac,
    Section::Ziwei,
    Section::Tarot,
    Section::Grid,
];

/// Render the given sections, in order.
pub fn render_sections(r: &Reading, sections: &[Section], cfg: &RenderConfig) -> String {
    let mut out = String::new();
    for &section in sections {
        match section {
            Section::Life => render_life(&mut out, r, cfg),
            Section::Outlook => render_outlook(&mut out, r, cfg),
            Section::Connection => render_connection(&mut out, r, cfg),
            Section::Zodiac => render_zodiac(&mut out, r, cfg),
            Section::Ziwei => render_ziwei(&mut out, r, cfg),
            Section::Tarot => render_tarot(&mut out, r, cfg),
            Section::Grid => render_grid(&mut out, r, cfg),
        }
    }
    out
}

/// Render every section of a reading.
pub fn render_reading(r: &Reading, cfg: &RenderConfig) -> String {
    render_sections(r, &ALL_SECTIONS, cfg)
}

/// The JSON value of one section.
pub fn section_json(r: &Reading, section: Section) -> serde_json::Result<serde_json::Value> {
    match section {
        Section::Life => serde_json::to_value(&r.life),
        Section::Outlook => serde_json::to_value(&r.outlook),
        Section::Connection => serde_json::to_value(&r.connection),
        Section::Zodiac => serde_json::to_value(r.zodiac),
        Section::Ziwei => serde_json::to_value(r.ziwei),
        Section::Tarot => serde_json::to_value(&r.tarot),
        Section::Grid => serde_json::to_value(&r.grid),
    }
}

fn render_life(out: &mut String, r: &Reading, cfg: &RenderConfig) {
    cfg.title(out, "Life number");
    let _ = writeln!(out, "Birth date: {}", r.birth_date);
    let _ = writeln!(
        out,
        "Process: {}",
        process_line(r.birth_date.digits(), &r.life.steps)
    );
    let _ = writeln!(
        out,
        "{}",
        cfg.paint(&format!("Result: life number {}", r.life.number), Style::Result)
    );
    let _ = writeln!(out, "{}", cfg.paint(r.life.meaning, Style::Meaning));
}

fn render_outlook(out: &mut String, r: &Reading, cfg: &RenderConfig) {
    cfg.title(out, "Annual cycle");
    for o in &r.outlook {
        let _ = writeln!(
            out,
            "{}",
            cfg.paint(
                &format!("{}: cycle number {}", o.year, o.cycle_number),
                Style::Result
            )
        );
        let _ = writeln!(out, "  {}", cfg.paint(o.cycle_meaning, Style::Meaning));
        let _ = writeln!(
            out,
            "  Year tarot: {} - {}",
            card_text(&o.tarot),
            o.tarot.meaning
        );
    }
}

fn render_connection(out: &mut String, r: &Reading, cfg: &RenderConfig) {
    cfg.title(out, "Connection numbers");
    for (kind, i) in &r.connection.meanings {
        let _ = writeln!(
            out,
            "{}: {} - {}",
            cfg.paint(kind.label(), Style::Connection),
            i.number,
            cfg.paint(i.meaning, Style::Meaning)
        );
    }
}

fn render_zodiac(out: &mut String, r: &Reading, cfg: &RenderConfig) {
    cfg.title(out, "Zodiac sign");
    let z = &r.zodiac;
    let _ = writeln!(
        out,
        "{}: {} ({}) - {}",
        cfg.paint("Zodiac", Style::Connection),
        z.result.name,
        z.result.index,
        cfg.paint(z.meaning, Style::Meaning)
    );
}

fn render_ziwei(out: &mut String, r: &Reading, cfg: &RenderConfig) {
    cfg.title(out, "Ziwei numbers");
    let z = &r.ziwei;
    for (label, number, meaning) in [
        ("Main star", z.triad.main, z.main),
        ("Sub star", z.triad.sub, z.sub),
        ("Destiny palace", z.triad.destiny, z.destiny),
    ] {
        let _ = writeln!(
            out,
            "{}: {}",
            cfg.paint(label, Style::Subtitle),
            cfg.paint(&number.to_string(), Style::Result)
        );
        let _ = writeln!(out, "  {}", cfg.paint(meaning, Style::Meaning));
    }
}

fn render_tarot(out: &mut String, r: &Reading, cfg: &RenderConfig) {
    cfg.title(out, "Tarot");
    for pc in &r.tarot.natal {
        let _ = writeln!(
            out,
            "{}: {} [{}]",
            cfg.paint(pc.position.label(), Style::Subtitle),
            cfg.paint(&card_text(&pc.card), Style::Result),
            pc.position.method()
        );
        let _ = writeln!(out, "  {}", cfg.paint(pc.card.meaning, Style::Meaning));
    }

    cfg.title(out, "Tarot spreads");
    for s in &r.tarot.spreads {
        let names: Vec<&str> = s.cards.iter().map(|c| c.name).collect();
        let sep = if s.spread.is_path() { " -> " } else { " + " };
        let _ = writeln!(
            out,
            "{}: {}",
            cfg.paint(s.spread.label(), Style::Subtitle),
            names.join(sep)
        );
        let _ = writeln!(out, "  {}", cfg.paint(s.spread.description(), Style::Meaning));
    }
    for c in &r.tarot.coincidences {
        let _ = writeln!(out, "{}", cfg.paint(&format!("* {}", c.description()), Style::Result));
    }
}

fn render_grid(out: &mut String, r: &Reading, cfg: &RenderConfig) {
    cfg.title(out, "Nine-cell grid");
    let grid = &r.grid.grid;
    for row in GRID_LAYOUT {
        let cells: Vec<String> = row
            .iter()
            .map(|&b| format!("{:<10}{:>2}", b.name(), grid.count(b)))
            .collect();
        let _ = writeln!(out, "{}", cells.join("  ").trim_end());
    }

    let a = &r.grid.analysis;
    let _ = writeln!(out, "{}", cfg.paint("Strengths", Style::Subtitle));
    write_list(out, &a.strength_lines(), NO_STRENGTHS);
    let _ = writeln!(out, "{}", cfg.paint("Weaknesses", Style::Subtitle));
    write_list(out, &a.weakness_lines(), NO_WEAKNESSES);
    let _ = writeln!(out, "{}", cfg.paint("Lines", Style::Subtitle));
    write_list(out, &a.connection_lines(), NO_LINES);
}

fn write_list<S: AsRef<str>>(out: &mut String, items: &[S], empty: &str) {
    if items.is_empty() {
        let _ = writeln!(out, "  {empty}");
    }
    for item in items {
        let _ = writeln!(out, "  - {}", item.as_ref());
    }
}

/// Reduction trace of an arbitrary number, as `n -> ... -> result`.
pub fn render_reduction(n: u32, ceiling: Ceiling) -> String {
    let steps: Vec<String> = reduce_steps(n, ceiling)
        .iter()
        .map(u32::to_string)
        .collect();
    steps.join(" -> ")
}

/// One-line summary of a date, printed ahead of single-section output.
pub fn date_header(date: &BirthDate) -> String {
    format!(
        "Birth date: {date} ({:04}-{:02}-{:02})",
        date.year(),
        date.month(),
        date.day()
    )
}
