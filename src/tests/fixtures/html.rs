// Queries over rendered pages, so assertions do not depend on markup layout.

use scraper::{ElementRef, Html, Selector};

pub struct Document(Html);

impl Document {
    pub fn parse(markup: &str) -> Self {
        Self(Html::parse_document(markup))
    }

    fn select<'a>(&'a self, selector: &str) -> Vec<ElementRef<'a>> {
        let selector = Selector::parse(selector).unwrap();
        self.0.select(&selector).collect()
    }

    pub fn count(&self, selector: &str) -> usize {
        self.select(selector).len()
    }

    /// Whitespace-collapsed text of every match.
    pub fn texts(&self, selector: &str) -> Vec<String> {
        self.select(selector)
            .into_iter()
            .map(|element| collapse(&element.text().collect::<String>()))
            .collect()
    }

    pub fn text(&self, selector: &str) -> String {
        self.texts(selector).into_iter().next().unwrap_or_default()
    }

    pub fn attrs(&self, selector: &str, name: &str) -> Vec<String> {
        self.select(selector)
            .into_iter()
            .filter_map(|element| element.value().attr(name).map(str::to_string))
            .collect()
    }

    pub fn attr(&self, selector: &str, name: &str) -> String {
        self.attrs(selector, name).into_iter().next().unwrap_or_default()
    }

    pub fn has_text(&self, needle: &str) -> bool {
        self.text("body").contains(needle)
    }
}

fn collapse(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
