//! Terminal dashboard.

use console::{Style, style};
use repolyzer_lang::{ColorHint, color_hint};
use repolyzer_settings::DashboardOptions;
use repolyzer_types::{
    DependencyReport, GitReport, HealthReport, LanguageReport, MarkerKind, MarkerReport, Scan,
    StructureReport,
};

const LANGUAGE_BAR_WIDTH: usize = 25;
const SCORE_BAR_WIDTH: usize = 20;
const LABEL_WIDTH: usize = 11;
const VALUE_WIDTH: usize = 16;
const NAME_WIDTH: usize = 18;
const COMMIT_MESSAGE_CHARS: usize = 40;
const PODIUM: usize = 3;

/// Render the full dashboard. Sections for skipped analyzers are left out.
pub fn render_dashboard(scan: &Scan, options: &DashboardOptions) -> String {
    let analysis = &scan.analysis;
    let mut s = String::new();

    header(&mut s, &scan.project);
    languages(&mut s, &analysis.languages, options.top_languages);
    structure(&mut s, &analysis.structure);
    if let Some(git_report) = &analysis.git {
        git(&mut s, git_report);
    }
    dependencies(&mut s, &analysis.dependencies);
    if let Some(health_report) = &analysis.health {
        health(&mut s, health_report);
    }
    if let Some(markers_report) = &analysis.todos {
        markers(&mut s, markers_report);
    }

    s.push_str(&format!(
        "\n  {}\n\n",
        style(format!("Scanned in {:.2}s", scan.elapsed.as_secs_f64())).dim()
    ));
    s
}

fn header(s: &mut String, project: &str) {
    let title = format!("repolyzer  ·  analyzing {project}");
    let rule = "═".repeat(title.chars().count() + 4);
    s.push('\n');
    s.push_str(&format!("  {}\n", style(&rule).cyan().bright()));
    s.push_str(&format!("    {}\n", style(title).cyan().bright().bold()));
    s.push_str(&format!("  {}\n", style(&rule).cyan().bright()));
}

fn section(s: &mut String, title: &str) {
    s.push_str(&format!("\n  {}\n", style(title).cyan().bright().bold()));
    s.push_str(&format!("  {}\n", style("─".repeat(title.chars().count())).cyan()));
}

/// A dim label followed by a bold value, padded so a second pair can follow.
fn pair(label: &str, value: &str) -> String {
    format!(
        "{}{}",
        style(format!("{label:<LABEL_WIDTH$}")).dim(),
        style(format!("{value:<VALUE_WIDTH$}")).white().bright().bold()
    )
}

fn row(s: &mut String, left: (&str, &str), right: Option<(&str, &str)>) {
    s.push_str("    ");
    s.push_str(&pair(left.0, left.1));
    if let Some((label, value)) = right {
        s.push_str(&pair(label, value));
    }
    s.push('\n');
}

fn languages(s: &mut String, report: &LanguageReport, top: usize) {
    if report.breakdown.is_empty() {
        return;
    }
    section(s, "Languages");

    let shown = if top == 0 {
        report.breakdown.len()
    } else {
        top.min(report.breakdown.len())
    };
    let max_lines = report.breakdown[0].lines;

    for entry in &report.breakdown[..shown] {
        let lang_style = hint_style(color_hint(&entry.name));
        let fraction = if max_lines == 0 {
            0.0
        } else {
            entry.lines as f64 / max_lines as f64
        };
        s.push_str(&format!(
            "    {} {}  {}\n",
            lang_style.apply_to(format!("{:<NAME_WIDTH$}", entry.name)).bold(),
            bar(fraction, LANGUAGE_BAR_WIDTH, &lang_style),
            style(format!(
                "{:5.1}%  {:>9} lines  {:>5} files",
                report.percent_of(entry),
                group_digits(entry.lines as u64),
                group_digits(entry.files as u64)
            ))
            .dim()
        ));
    }

    let hidden = report.breakdown.len() - shown;
    if hidden > 0 {
        s.push_str(&format!(
            "    {}\n",
            style(format!("... and {hidden} more")).dim().italic()
        ));
    }
}

fn structure(s: &mut String, report: &StructureReport) {
    section(s, "Structure");
    row(
        s,
        ("Files", &group_digits(report.total_files as u64)),
        Some(("Dirs", &group_digits(report.total_dirs as u64))),
    );
    row(
        s,
        ("Size", &report.size_human()),
        Some(("Max depth", &report.max_depth.to_string())),
    );
    if !report.deepest_path.is_empty() {
        row(s, ("Deepest", &report.deepest_path), None);
    }
    for (idx, file) in report.largest_files.iter().enumerate() {
        let label = if idx == 0 { "Largest" } else { "" };
        s.push_str(&format!(
            "    {}{}  {}\n",
            style(format!("{label:<LABEL_WIDTH$}")).dim(),
            style(&file.path).white().bright(),
            style(repolyzer_types::format_size(file.size)).dim()
        ));
    }
}

fn git(s: &mut String, report: &GitReport) {
    section(s, "Git");
    if !report.is_git_repo {
        s.push_str(&format!(
            "    {}\n",
            style("Not a git repository").dim().italic()
        ));
        return;
    }

    s.push_str("    ");
    s.push_str(&format!(
        "{}{}",
        style(format!("{:<LABEL_WIDTH$}", "Branch")).dim(),
        style(format!("{:<VALUE_WIDTH$}", report.current_branch))
            .green()
            .bright()
            .bold()
    ));
    s.push_str(&pair("Commits", &group_digits(report.commits as u64)));
    s.push('\n');
    row(
        s,
        ("Branches", &report.branches.to_string()),
        Some(("Tags", &report.tags.to_string())),
    );

    let changes = report.uncommitted_changes.to_string();
    let changes_style = if report.uncommitted_changes > 0 {
        Style::new().yellow().bright().bold()
    } else {
        Style::new().white().bright().bold()
    };
    s.push_str(&format!(
        "    {}{}{}\n",
        pair("Authors", &report.contributors.to_string()),
        style(format!("{:<LABEL_WIDTH$}", "Changes")).dim(),
        changes_style.apply_to(changes)
    ));

    if let Some(last) = report.last_commit.as_ref().filter(|c| !c.message.is_empty()) {
        let message: String = last.message.chars().take(COMMIT_MESSAGE_CHARS).collect();
        s.push_str(&format!(
            "    {}{}  {}\n",
            style(format!("{:<LABEL_WIDTH$}", "Last")).dim(),
            style(message).italic(),
            style(format!("{} by {}", last.date, last.author)).dim()
        ));
    }
    if !report.first_commit_date.is_empty() {
        s.push_str(&format!(
            "    {}{}\n",
            style(format!("{:<LABEL_WIDTH$}", "Age")).dim(),
            style(&report.first_commit_date).dim().italic()
        ));
    }
    if !report.remote_url.is_empty() {
        s.push_str(&format!(
            "    {}{}\n",
            style(format!("{:<LABEL_WIDTH$}", "Remote")).dim(),
            style(&report.remote_url).white().bright()
        ));
    }

    if !report.top_contributors.is_empty() {
        s.push('\n');
        for (rank, contributor) in report.top_contributors.iter().take(PODIUM).enumerate() {
            s.push_str(&format!(
                "    {} {}{}\n",
                style(format!("#{}", rank + 1)).yellow().bright(),
                style(format!("{:<NAME_WIDTH$}", contributor.name)).white().bright(),
                style(format!("{} commits", group_digits(contributor.commits as u64))).dim()
            ));
        }
    }
}

fn dependencies(s: &mut String, report: &DependencyReport) {
    if report.files.is_empty() {
        return;
    }
    section(s, "Dependencies");
    for file in &report.files {
        let mut counts = style(format!("{} deps", file.count)).green().bright().to_string();
        if file.dev_count > 0 {
            counts.push_str(&format!("  {}", style(format!("{} dev", file.dev_count)).dim()));
        }
        s.push_str(&format!(
            "    {}{}\n",
            style(format!("{:<NAME_WIDTH$}", file.name)).white().bright().bold(),
            counts
        ));
    }

    let mut total = format!(
        "{} {} {}",
        style("Total:").dim(),
        style(report.total_deps).white().bright().bold(),
        style("dependencies").dim()
    );
    if report.total_dev_deps > 0 {
        total.push_str(&style(format!(", {} dev", report.total_dev_deps)).dim().to_string());
    }
    s.push_str(&format!("\n    {total}\n"));
}

fn health(s: &mut String, report: &HealthReport) {
    section(s, "Health");
    for check in &report.checks {
        let (icon, name) = if check.passed {
            (
                style("✓").green().bright(),
                style(check.name.as_str()).white().bright(),
            )
        } else {
            (style("✗").red().bright(), style(check.name.as_str()).dim())
        };
        s.push_str(&format!("    {icon} {name}\n"));
    }

    let score_style = score_style(report.score);
    s.push_str(&format!(
        "\n    {} {}  {}\n",
        style("Health score:").dim(),
        score_style.apply_to(format!("{}%", report.score)).bold(),
        bar(f64::from(report.score) / 100.0, SCORE_BAR_WIDTH, &score_style)
    ));
}

fn markers(s: &mut String, report: &MarkerReport) {
    if report.total == 0 {
        return;
    }
    section(s, "Code Markers");

    let mut seen: Vec<(MarkerKind, usize)> = report
        .counts
        .iter()
        .filter(|(_, count)| **count > 0)
        .map(|(kind, count)| (*kind, *count))
        .collect();
    // Stable: equal counts keep precedence order.
    seen.sort_by(|a, b| b.1.cmp(&a.1));

    let summary: Vec<String> = seen
        .iter()
        .map(|(kind, count)| {
            let st = marker_style(*kind);
            format!("{} {}", st.apply_to(kind.as_str()), st.apply_to(count))
        })
        .collect();
    s.push_str(&format!("    {}\n", summary.join("    ")));
    s.push_str(&format!(
        "\n    {} {} {}\n",
        style("Total:").dim(),
        style(report.total).white().bright().bold(),
        style("markers found").dim()
    ));

    if !report.items.is_empty() {
        s.push('\n');
        for item in &report.items {
            s.push_str(&format!(
                "    {} {} {}\n",
                marker_style(item.marker).apply_to(format!("{:<10}", item.marker.as_str())),
                style(format!("{}:{}", item.file, item.line)).dim(),
                item.text
            ));
        }
    }
}

/// A `width`-cell bar, `fraction` of it filled (rounded down).
///
/// # Examples
///
/// ```
/// use repolyzer_format::bar;
///
/// let plain = console::strip_ansi_codes(&bar(0.5, 10, &console::Style::new())).into_owned();
/// assert_eq!(plain, "█████░░░░░");
/// ```
#[must_use]
pub fn bar(fraction: f64, width: usize, fill: &Style) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f64) as usize).min(width);
    format!(
        "{}{}",
        fill.apply_to("█".repeat(filled)),
        style("░".repeat(width - filled)).dim()
    )
}

/// Thousands-separated decimal: `1234567` becomes `1,234,567`.
#[must_use]
pub fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn hint_style(hint: ColorHint) -> Style {
    let base = Style::new();
    let colored = match hint {
        ColorHint::White => base.white(),
        ColorHint::Red | ColorHint::BrightRed => base.red(),
        ColorHint::Green | ColorHint::BrightGreen => base.green(),
        ColorHint::Yellow | ColorHint::BrightYellow => base.yellow(),
        ColorHint::Blue | ColorHint::BrightBlue => base.blue(),
        ColorHint::Magenta | ColorHint::BrightMagenta => base.magenta(),
        ColorHint::Cyan => base.cyan(),
    };
    if hint.is_bright() {
        colored.bright()
    } else {
        colored
    }
}

fn marker_style(kind: MarkerKind) -> Style {
    let base = Style::new();
    match kind {
        MarkerKind::Todo => base.cyan().bright(),
        MarkerKind::Fixme => base.red().bright(),
        MarkerKind::Hack => base.yellow().bright(),
        MarkerKind::Bug => base.red(),
        MarkerKind::Xxx => base.magenta().bright(),
        MarkerKind::Optimize => base.green().bright(),
        MarkerKind::Deprecated => base.dim(),
    }
}

fn score_style(score: u8) -> Style {
    match score {
        70.. => Style::new().green().bright(),
        40..=69 => Style::new().yellow().bright(),
        _ => Style::new().red().bright(),
    }
}
