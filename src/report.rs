use std::io;
use std::ops::Range;

use ariadne::{Color, Config, Label, Report, ReportKind, Source};

use crate::scan::Token;

pub type IllegalReport<'a> = Report<'a, (&'a str, Range<usize>)>;

/// One report per illegal token, labelled on the offending character.
pub fn illegal_reports<'a>(
    path: &'a str,
    tokens: &[Token<'_>],
    color: bool,
) -> Vec<IllegalReport<'a>> {
    tokens
        .iter()
        .filter(|t| t.is_illegal())
        .map(|t| {
            Report::build(ReportKind::Error, (path, t.span.range.clone()))
                .with_config(Config::default().with_color(color))
                .with_message(format!("illegal token `{}`", t.literal.escape_debug()))
                .with_label(
                    Label::new((path, t.span.range.clone()))
                        .with_message("unexpected character")
                        .with_color(Color::Red),
                )
                .finish()
        })
        .collect()
}

/// Print the illegal-token reports for `source` to stderr and return how many
/// there were.
pub fn eprint_illegal(path: &str, source: &str, tokens: &[Token<'_>]) -> io::Result<usize> {
    let reports = illegal_reports(path, tokens, true);
    for report in &reports {
        report.eprint((path, Source::from(source)))?;
    }

    Ok(reports.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::Scanner;

    #[test]
    fn one_report_per_illegal_token() {
        let source = "let a = @ # 1;";
        let tokens = Scanner::new(source).scan();
        let reports = illegal_reports("test.mk", &tokens, false);
        assert_eq!(reports.len(), 2);

        let mut out = Vec::new();
        reports[0]
            .write(("test.mk", Source::from(source)), &mut out)
            .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("illegal token `@`"), "{text}");
        assert!(text.contains("unexpected character"), "{text}");
        assert!(text.contains("test.mk"), "{text}");
    }

    #[test]
    fn clean_source_has_no_reports() {
        let tokens = Scanner::new("let a = 1;").scan();
        assert!(illegal_reports("x", &tokens, false).is_empty());
    }
}
