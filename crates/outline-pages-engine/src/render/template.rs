/// An HTML page template with three comment placeholders.
///
/// Every occurrence of a placeholder is replaced, in the order back link,
/// title, content. A placeholder missing from the template is simply not
/// filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    html: String,
}

/// Values for one rendered page.
#[derive(Debug, Clone, Copy)]
pub struct Slots<'a> {
    /// Navigation link; `None` leaves the placeholder untouched.
    pub back: Option<&'a str>,
    pub title: &'a str,
    pub content: &'a str,
}

const BUILTIN: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title><!--TITLE--></title>
</head>
<body>
<nav><!--BACK--></nav>
<h1><!--TITLE--></h1>
<main><!--CONTENT--></main>
</body>
</html>
"#;

impl Template {
    pub const BACK: &'static str = "<!--BACK-->";
    pub const TITLE: &'static str = "<!--TITLE-->";
    pub const CONTENT: &'static str = "<!--CONTENT-->";

    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    /// Minimal template used when no template file is available.
    pub fn builtin() -> Self {
        Self::new(BUILTIN)
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    /// Names of the placeholders this template lacks.
    pub fn missing_placeholders(&self) -> Vec<&'static str> {
        [Self::BACK, Self::TITLE, Self::CONTENT]
            .into_iter()
            .filter(|p| !self.html.contains(p))
            .collect()
    }

    pub fn render(&self, slots: &Slots<'_>) -> String {
        let mut page = self.html.clone();
        if let Some(back) = slots.back {
            page = page.replace(Self::BACK, back);
        }
        page = page.replace(Self::TITLE, slots.title);
        page.replace(Self::CONTENT, slots.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_every_slot() {
        let t = Template::new("<!--BACK-->|<!--TITLE-->|<!--CONTENT-->");
        let page = t.render(&Slots {
            back: Some("back"),
            title: "title",
            content: "body",
        });
        assert_eq!(page, "back|title|body");
    }

    #[test]
    fn repeated_placeholder_is_filled_everywhere() {
        let t = Template::builtin();
        let page = t.render(&Slots {
            back: Some(""),
            title: "Hello",
            content: "",
        });
        assert_eq!(page.matches("Hello").count(), 2);
        assert!(t.missing_placeholders().is_empty());
    }

    #[test]
    fn absent_back_link_keeps_placeholder() {
        let t = Template::new("<!--BACK--><!--TITLE-->");
        let page = t.render(&Slots {
            back: None,
            title: "t",
            content: "c",
        });
        assert_eq!(page, "<!--BACK-->t");
    }

    #[test]
    fn missing_placeholders_are_tolerated() {
        let t = Template::new("<p><!--CONTENT--></p>");
        assert_eq!(
            t.missing_placeholders(),
            vec![Template::BACK, Template::TITLE]
        );
        let page = t.render(&Slots {
            back: Some("b"),
            title: "t",
            content: "c",
        });
        assert_eq!(page, "<p>c</p>");
    }
}
