//! Auto-sizing text input.
//!
//! An invisible span mirrors the input's text so the container grows to fit
//! it; the input is laid over the span. When the value is empty the span
//! mirrors the placeholder instead, so the box never collapses.

const CONTAINER_STYLE: &str = "position: relative; display: inline-block;";
const TEXT_STYLE: &str = "margin: 0; padding: 0 0.4rem 0 0.2rem; font-size: inherit; \
font-family: sans-serif; display: inline-block; visibility: hidden; white-space: pre;";
const INPUT_STYLE: &str = "margin: 0; padding: 0 0.2rem; font-size: inherit; \
font-family: sans-serif; position: absolute; top: 0; left: 0; right: 0; bottom: 0; \
background-color: transparent; outline: none; color: #fff; border: none;";

/// Columns added around the mirrored text. The span pads 0.2rem + 0.4rem;
/// at roughly 0.6rem per column of sans-serif text that rounds to one.
const HORIZONTAL_PADDING: usize = 1;

pub type BlurHandler = Box<dyn FnMut(&str)>;

pub struct ResizableInputText {
    placeholder: String,
    value: String,
    style: Option<String>,
    on_blur: Option<BlurHandler>,
}

impl ResizableInputText {
    pub fn new(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: placeholder.into(),
            value: String::new(),
            style: None,
            on_blur: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Inline CSS appended to the input's own style.
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn on_blur(mut self, handler: impl FnMut(&str) + 'static) -> Self {
        self.on_blur = Some(Box::new(handler));
        self
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Text of the hidden mirror span.
    pub fn display_text(&self) -> &str {
        if self.value.is_empty() {
            &self.placeholder
        } else {
            &self.value
        }
    }

    pub fn change(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn blur(&mut self) {
        if let Some(handler) = self.on_blur.as_mut() {
            handler(&self.value);
        }
    }

    /// Width in character columns the input should occupy.
    pub fn width(&self) -> usize {
        self.display_text().chars().count() + HORIZONTAL_PADDING
    }

    pub fn render(&self) -> String {
        let mut input_style = INPUT_STYLE.to_string();
        if let Some(style) = &self.style {
            input_style.push(' ');
            input_style.push_str(style);
        }

        format!(
            r#"<div data-testid="resizable-container" style="{CONTAINER_STYLE}"><span data-testid="resizable-text" style="{TEXT_STYLE}">{text}</span><input data-testid="resizable-input" type="text" placeholder="{placeholder}" value="{value}" style="{style}" autofocus></div>"#,
            text = escape_html(self.display_text()),
            placeholder = escape_html(&self.placeholder),
            value = escape_html(&self.value),
            style = escape_html(&input_style),
        )
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
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

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn make_sut(value: &str) -> (ResizableInputText, Rc<RefCell<Vec<String>>>) {
        let blurred = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&blurred);
        let sut = ResizableInputText::new("any placeholder")
            .with_value(value)
            .on_blur(move |v| sink.borrow_mut().push(v.to_string()));
        (sut, blurred)
    }

    #[test]
    fn displays_initial_value() {
        let (sut, _) = make_sut("any value");

        assert_eq!(sut.display_text(), "any value");
        assert_eq!(sut.placeholder(), "any placeholder");
        assert_eq!(sut.value(), "any value");
    }

    #[test]
    fn displays_placeholder_when_value_is_empty() {
        let (sut, _) = make_sut("");

        assert_eq!(sut.display_text(), "any placeholder");
    }

    #[test]
    fn blur_reports_edited_value() {
        let (mut sut, blurred) = make_sut("any value");

        sut.change("new value");
        sut.blur();

        assert_eq!(sut.value(), "new value");
        assert_eq!(*blurred.borrow(), vec!["new value".to_string()]);
    }

    #[test]
    fn blur_without_handler_is_noop() {
        let mut sut = ResizableInputText::new("p");
        sut.blur();
        assert_eq!(sut.value(), "");
    }

    #[test]
    fn width_follows_display_text() {
        let (mut sut, _) = make_sut("");
        assert_eq!(sut.width(), "any placeholder".len() + HORIZONTAL_PADDING);

        sut.change("héllo");
        assert_eq!(sut.width(), 5 + HORIZONTAL_PADDING);
    }

    #[test]
    fn render_hides_mirror_and_applies_style() {
        let (sut, _) = make_sut("any value");
        let sut = sut.with_style("color: red;");

        let html = sut.render();

        assert!(html.contains(r#"data-testid="resizable-container""#));
        assert!(html.contains("visibility: hidden;"));
        assert!(html.contains(">any value</span>"));
        assert!(html.contains(r#"placeholder="any placeholder""#));
        assert!(html.contains("border: none; color: red;"));
    }

    #[test]
    fn render_escapes_text() {
        let (sut, _) = make_sut("<b>\"x\"</b>");

        let html = sut.render();

        assert!(html.contains("&lt;b&gt;&quot;x&quot;&lt;/b&gt;"));
        assert!(!html.contains("<b>"));
    }
}
