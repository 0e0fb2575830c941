use anyhow::Result;
use std::io::Write;

use crate::config::DisplayConfig;
use crate::render::html::widget_markup;
use crate::score::Score;
use crate::widget::StarWidget;

/// Print the interactive widget markup seeded with `initial`.
pub fn print_widget<W: Write>(
    out: &mut W,
    initial: Score,
    field_name: &str,
    with_reset: bool,
    display: &DisplayConfig,
) -> Result<()> {
    display.validate()?;
    let widget = StarWidget::new(initial).with_reset(with_reset);
    writeln!(out, "{}", widget_markup(&widget, display, field_name))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::ReviewScore;

    #[test]
    fn test_print_widget_with_score() {
        let mut out = Vec::new();
        print_widget(
            &mut out,
            Some(ReviewScore::new(320).unwrap()),
            "field_review_score",
            true,
            &DisplayConfig::default(),
        )
        .unwrap();
        let html = String::from_utf8(out).unwrap();
        assert!(html.contains("aria-valuenow=\"320\""));
        assert_eq!(html.matches("star--full").count(), 4);
        assert!(html.contains("name=\"field_review_score\" value=\"320\""));
    }
}
