mod enhancer;

pub use enhancer::{ColumnOptions, EnhancerConfig};

use chrono::FixedOffset;
use itertools::Itertools;
use strum::IntoEnumIterator;

use crate::day::Day;
use crate::model::Match;

/// Table header, in rendering order.
pub const COLUMNS: [&str; 5] = ["Match Time", "Country", "Tournament", "Home", "Away"];

const MATCH_TIME_FORMAT: &str = "%b %d, %H:%M";

/// Render the day listing page.
///
/// Rows appear exactly in the order given; kickoff times are shown in
/// the reference offset. Produces the full HTML document including the
/// table widget bootstrap.
pub fn render_page(day: Day, offset: FixedOffset, matches: &[Match]) -> String {
    let head = COLUMNS
        .iter()
        .map(|name| format!("<th>{}</th>", escape(name)))
        .join("");
    let rows = matches.iter().map(|m| render_row(m, offset)).join("\n      ");
    let config = EnhancerConfig::default().to_json();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Matches for {day}</title>
</head>
<body>
  <nav class="day-nav">
    {nav}
  </nav>
  <table id="matches">
    <thead>
      <tr>{head}</tr>
    </thead>
    <tbody>
      {rows}
    </tbody>
  </table>
  <script>
    window.addEventListener("load", function () {{
      applyTableEnhancer(document.getElementById("matches"), {config});
    }});
  </script>
</body>
</html>
"#,
        nav = render_nav(day),
    )
}

/// Error page for an unsupported day token.
pub fn render_not_found(token: &str) -> String {
    render_message(
        "Not found",
        &format!("No match listing for \"{}\".", escape(token)),
    )
}

/// Generic error page shown when the repository cannot serve a query.
pub fn render_error() -> String {
    render_message("Something went wrong", "The match listing is unavailable right now.")
}

fn render_message(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{title}</title>
</head>
<body>
  <h1>{title}</h1>
  <p>{body}</p>
  <p><a href="/">Back to today's matches</a></p>
</body>
</html>
"#,
    )
}

fn render_nav(current: Day) -> String {
    Day::iter()
        .map(|day| {
            let class = if day == current { r#" class="active""# } else { "" };
            format!(r#"<a href="/matches/{day}"{class}>{day}</a>"#)
        })
        .join("\n    ")
}

fn render_row(m: &Match, offset: FixedOffset) -> String {
    let kickoff = m
        .match_time
        .with_timezone(&offset)
        .format(MATCH_TIME_FORMAT)
        .to_string();
    format!(
        "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
        escape(&kickoff),
        escape(&m.country),
        escape(&m.tournament),
        escape(&m.home),
        escape(&m.away),
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
