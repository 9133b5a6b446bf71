use super::*;

#[test]
fn missing_element_names_selector() {
    let err = DomError::MissingElement("#theme-toggle i".into());
    assert_eq!(err.to_string(), "required element `#theme-toggle i` is missing");
}

#[test]
fn js_error_carries_message() {
    assert_eq!(DomError::Js("SyntaxError".into()).to_string(), "DOM call failed: SyntaxError");
    assert_eq!(DomError::NoWindow.to_string(), "no global window");
}
