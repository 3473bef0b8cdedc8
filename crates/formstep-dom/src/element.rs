//! Element data structure

use scraper::ElementRef;
use serde::Serialize;

/// Index of an element in its tree, stable for the tree's lifetime
pub type NodeId = usize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Element {
    /// Lowercase tag name
    pub tag: String,
    pub id: Option<String>,
    pub name: Option<String>,
    pub classes: Vec<String>,
    /// Inline `display` value, `None` when the markup sets none
    pub display: Option<String>,
    pub value: Option<String>,
    /// `label` attribute, used by datalist options
    pub label: Option<String>,
    /// Text content
    pub text: String,
    pub disabled: bool,
    /// Detached from the document
    pub removed: bool,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_lowercase(),
            ..Self::default()
        }
    }

    /// `<option value=".." label="..">`
    pub fn option(value: impl Into<String>, label: impl Into<String>) -> Self {
        let mut option = Self::new("option");
        option.value = Some(value.into());
        option.label = Some(label.into());
        option
    }

    pub(crate) fn from_ref(el: ElementRef<'_>, parent: Option<NodeId>) -> Self {
        let value = el.value();
        let text: String = el.text().collect();
        // A textarea's content is its value and keeps surrounding whitespace
        let text = if value.name().eq_ignore_ascii_case("textarea") {
            text
        } else {
            text.trim().to_string()
        };
        Self {
            tag: value.name().to_lowercase(),
            id: value.id().map(str::to_string),
            name: value.attr("name").map(str::to_string),
            classes: value.classes().map(str::to_string).collect(),
            display: value.attr("style").and_then(inline_display),
            value: value.attr("value").map(str::to_string),
            label: value.attr("label").map(str::to_string),
            text,
            disabled: value.attr("disabled").is_some(),
            removed: false,
            parent,
            children: Vec::new(),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn set_class(&mut self, class: &str, present: bool) {
        if present {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    pub fn set_display(&mut self, display: &str) {
        self.display = Some(display.to_string());
    }

    /// Hidden only when the inline style says `display: none`
    pub fn is_hidden(&self) -> bool {
        self.display.as_deref() == Some("none")
    }
}

/// Extract the `display` declaration of an inline style attribute
fn inline_display(style: &str) -> Option<String> {
    style
        .split(';')
        .filter_map(|decl| decl.split_once(':'))
        .filter(|(property, _)| property.trim().eq_ignore_ascii_case("display"))
        .map(|(_, value)| value.trim().to_lowercase())
        .last()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_display() {
        assert_eq!(inline_display("display: none"), Some("none".to_string()));
        assert_eq!(
            inline_display("color: red; DISPLAY:Block;"),
            Some("block".to_string())
        );
        assert_eq!(inline_display("color: red"), None);
    }

    #[test]
    fn test_class_list() {
        let mut el = Element::new("LI");
        assert_eq!(el.tag, "li");

        el.add_class("progress_tab");
        el.add_class("active");
        el.add_class("active");
        assert_eq!(el.classes, vec!["progress_tab", "active"]);

        el.set_class("active", false);
        el.set_class("bg-light", true);
        assert_eq!(el.classes, vec!["progress_tab", "bg-light"]);
        el.remove_class("bg-light");
        assert_eq!(el.classes, vec!["progress_tab"]);
    }

    #[test]
    fn test_textarea_keeps_whitespace() {
        let html = scraper::Html::parse_fragment("<textarea> Hi  </textarea><p> Hi  </p>");
        let texts: Vec<String> = html
            .root_element()
            .children()
            .filter_map(ElementRef::wrap)
            .map(|el| Element::from_ref(el, None).text)
            .collect();
        assert_eq!(texts, vec![" Hi  ", "Hi"]);
    }
}
