use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlStyleElement};

pub(crate) const STYLESHEET_ID: &str = "safespeech-demo-styles";
const STYLESHEET: &str = include_str!("../assets/interactions.css");

/// Injects the bundled rules once. A page that already ships an element with
/// the stylesheet id keeps its own copy.
pub(crate) fn ensure_stylesheet(document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id(STYLESHEET_ID).is_some() {
        return Ok(());
    }
    let Some(head) = document.head() else {
        return Ok(());
    };
    let style = document
        .create_element("style")?
        .dyn_into::<HtmlStyleElement>()?;
    style.set_id(STYLESHEET_ID);
    style.set_text_content(Some(STYLESHEET));
    head.append_child(&style)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use safespeech_demo_core::markup::{STYLED_CLASSES, WORKFLOW_ARROW};

    use super::STYLESHEET;

    #[test]
    fn stylesheet_covers_every_state_class() {
        for class in STYLED_CLASSES {
            assert!(
                STYLESHEET.contains(&format!(".{class} ")),
                "no rule for .{class}"
            );
        }
    }

    #[test]
    fn mobile_rule_targets_workflow_arrows() {
        assert!(STYLESHEET.contains(&format!(".mobile-layout {WORKFLOW_ARROW}")));
    }
}
