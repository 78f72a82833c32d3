use std::sync::LazyLock;
use regex::{Captures, Regex};

static MATH_SPAN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$(.+?)\$").expect("math pattern is valid"));
static BRACED_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(.+?)\}").expect("reference pattern is valid"));

/// Turns raw definition and note text into display text.
pub trait Markup: Send + Sync {
    fn render(&self, text: &str) -> String;

    /// Resolve `{word}` references. `is_known` tells whether an entry exists.
    fn link_references(&self, text: &str, is_known: &dyn Fn(&str) -> bool) -> String;
}

/// TeX-ish math spans to HTML, braces to entry links.
#[derive(Debug, Clone, Copy, Default)]
pub struct TexMarkup;

impl TexMarkup {
    fn render_math(span: &str) -> String {
        span.split('=')
            .map(|part| {
                let part = part.replace(['{', '}'], "").replace('*', "×");
                if let Some((base, sub)) = split_marker(&part, '_') {
                    format!("{}<sub>{}</sub>", base, sub)
                } else if let Some((base, sup)) = split_marker(&part, '^') {
                    format!("{}<sup>{}</sup>", base, sup)
                } else {
                    part
                }
            })
            .collect::<Vec<_>>()
            .join("=")
    }
}

/// Text before the first `marker` and the text up to the next one.
fn split_marker(part: &str, marker: char) -> Option<(&str, &str)> {
    let mut pieces = part.split(marker);
    let base = pieces.next()?;
    let script = pieces.next()?;
    Some((base, script))
}

impl Markup for TexMarkup {
    fn render(&self, text: &str) -> String {
        MATH_SPAN
            .replace_all(text, |caps: &Captures| Self::render_math(&caps[1]))
            .into_owned()
    }

    fn link_references(&self, text: &str, is_known: &dyn Fn(&str) -> bool) -> String {
        BRACED_WORD
            .replace_all(text, |caps: &Captures| {
                let word = &caps[1];
                if is_known(word) {
                    format!("<a href=\"/{}\">{}</a>", word, word)
                } else {
                    word.to_string()
                }
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_subscripts_and_superscripts() {
        assert_eq!(
            TexMarkup.render("$x_1$ is $10^2$ examples of $x_{2}$."),
            "x<sub>1</sub> is 10<sup>2</sup> examples of x<sub>2</sub>."
        );
    }

    #[test]
    fn test_render_equations_and_products() {
        assert_eq!(TexMarkup.render("$x_1=b_2$"), "x<sub>1</sub>=b<sub>2</sub>");
        assert_eq!(TexMarkup.render("$2*3$"), "2×3");
    }

    #[test]
    fn test_render_leaves_plain_text_alone() {
        assert_eq!(TexMarkup.render("costs $5"), "costs $5");
    }

    #[test]
    fn test_links_only_known_words() {
        let known = |word: &str| word == "mupli";
        assert_eq!(
            TexMarkup.link_references("See also {mupli}, {mu'u}.", &known),
            "See also <a href=\"/mupli\">mupli</a>, mu'u."
        );
    }
}
