//! HTML markup backend.
//!
//! Produces the read-only formatter markup (gold/dim star images with a
//! clip for partial stars) and the interactive widget markup (slider
//! attributes, gradient partial stars, hidden value, reset button).

use super::{RatingProjection, StarRenderer, StarVisual};
use crate::config::DisplayConfig;
use crate::math::round_to;
use crate::widget::StarWidget;
use html_escape::encode_double_quoted_attribute;

/// Renders read-only ratings as HTML strings.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    config: DisplayConfig,
}

impl HtmlRenderer {
    pub fn new(config: DisplayConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    fn img(&self, src: &str, class: &str, style: Option<String>) -> String {
        let style = style
            .map(|s| format!(" style=\"{}\"", encode_double_quoted_attribute(&s)))
            .unwrap_or_default();
        format!(
            "<img src=\"{}\" alt=\"\" class=\"{}\"{}>",
            encode_double_quoted_attribute(src),
            class,
            style
        )
    }
}

impl StarRenderer for HtmlRenderer {
    type Node = String;

    fn star(&self, visual: &StarVisual) -> String {
        // Dim image sits behind every star.
        let dim = self.img(&self.config.dim_asset_path, "star-img-dim", None);
        let gold = match visual {
            StarVisual::Full => self.img(&self.config.gold_asset_path, "star-img-gold", None),
            StarVisual::Empty => String::new(),
            StarVisual::Partial(pct) => self.img(
                &self.config.gold_asset_path,
                "star-img-gold",
                Some(format!("clip-path: inset(0 {}% 0 0);", round_to(100.0 - pct, 2))),
            ),
        };
        format!(
            "<span class=\"review-score-star {}\">{}{}</span>",
            visual.css_class(),
            dim,
            gold
        )
    }

    fn row(&self, projection: &RatingProjection) -> String {
        let stars: String = projection.stars.iter().map(|v| self.star(v)).collect();
        format!(
            "<div class=\"review-score-stars\" aria-label=\"{}\" style=\"--review-score-width: {}px;\">{}</div>",
            encode_double_quoted_attribute(&projection.label),
            self.config.width_px,
            stars
        )
    }
}

/// Render the interactive widget for the host form.
///
/// `field_name` names the hidden input that carries the committed value.
pub fn widget_markup(widget: &StarWidget, config: &DisplayConfig, field_name: &str) -> String {
    let attrs: String = widget
        .aria()
        .attributes()
        .into_iter()
        .map(|(name, value)| format!(" {}=\"{}\"", name, encode_double_quoted_attribute(&value)))
        .collect();

    let stars: String = widget
        .visuals()
        .iter()
        .map(|visual| widget_star(visual, config))
        .collect();

    let mut markup = format!(
        "<div class=\"review-score-stars review-score-widget\"{} style=\"--review-score-width: {}px;\">{}</div>",
        attrs, config.width_px, stars
    );
    markup.push_str(&format!(
        "<input type=\"hidden\" name=\"{}\" value=\"{}\">",
        encode_double_quoted_attribute(field_name),
        widget.stored_value()
    ));
    if widget.has_reset() {
        markup.push_str("<button type=\"button\" class=\"review-score-reset\">×</button>");
    }
    markup
}

fn widget_star(visual: &StarVisual, config: &DisplayConfig) -> String {
    match visual {
        StarVisual::Partial(pct) => {
            let style = format!(
                "background: linear-gradient(90deg, {} {}%, {} {}%);",
                config.gold_color, pct, config.dim_color, pct
            );
            format!(
                "<span class=\"review-score-star {}\" style=\"{}\"></span>",
                visual.css_class(),
                encode_double_quoted_attribute(&style)
            )
        }
        _ => format!("<span class=\"review-score-star {}\"></span>", visual.css_class()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::project;
    use crate::score::ReviewScore;
    use crate::widget::WidgetEvent;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    fn renderer() -> HtmlRenderer {
        HtmlRenderer::new(DisplayConfig::default())
    }

    #[test]
    fn test_full_star_has_dim_and_gold() {
        let html = renderer().star(&StarVisual::Full);
        assert_eq!(
            html,
            indoc! {r#"<span class="review-score-star star--full"><img src="/images/star_dim.png" alt="" class="star-img-dim"><img src="/images/star_gold.png" alt="" class="star-img-gold"></span>"#}
        );
    }

    #[test]
    fn test_empty_star_has_only_dim() {
        let html = renderer().star(&StarVisual::Empty);
        assert!(html.contains("star--empty"));
        assert!(!html.contains("star-img-gold"));
    }

    #[test]
    fn test_partial_star_is_clipped() {
        let html = renderer().star(&StarVisual::Partial(51.25));
        assert!(html.contains("star--partial"));
        assert!(html.contains("clip-path: inset(0 48.75% 0 0);"));
    }

    #[test]
    fn test_row_has_label_and_width() {
        let html = renderer().row(&project(ReviewScore::new(200).unwrap()));
        assert!(html.starts_with("<div class=\"review-score-stars\""));
        assert!(html.contains("aria-label=\"Rating: 2.5 out of 5 stars\""));
        assert!(html.contains("--review-score-width: 200px;"));
        assert_eq!(html.matches("review-score-star ").count(), 5);
    }

    #[test]
    fn test_asset_paths_are_escaped() {
        let config = DisplayConfig {
            gold_asset_path: "/x\"><script>".into(),
            ..DisplayConfig::default()
        };
        let html = HtmlRenderer::new(config).star(&StarVisual::Full);
        assert!(!html.contains("\"><script>"));
        assert!(html.contains("&quot;"));
    }

    #[test]
    fn test_widget_markup_unset() {
        let widget = StarWidget::new(None);
        let html = widget_markup(&widget, &DisplayConfig::default(), "field_score");
        assert!(html.contains("role=\"slider\""));
        assert!(html.contains("tabindex=\"0\""));
        assert!(!html.contains("aria-valuenow"));
        assert!(html.contains("<input type=\"hidden\" name=\"field_score\" value=\"\">"));
        assert!(html.contains("review-score-reset"));
        assert_eq!(html.matches("star--empty").count(), 5);
    }

    #[test]
    fn test_widget_markup_partial_gradient() {
        let mut widget = StarWidget::new(None).with_reset(false);
        widget.handle(WidgetEvent::Click(0.5));
        let html = widget_markup(&widget, &DisplayConfig::default(), "score");
        assert!(html.contains("aria-valuenow=\"200\""));
        assert!(html.contains("linear-gradient(90deg, #f5a623 50%, #ccc 50%);"));
        assert!(html.contains("value=\"200\""));
        assert!(!html.contains("review-score-reset"));
    }
}
