use scraper::{ElementRef, Html, Selector};

#[track_caller]
pub(crate) fn must_get_form(html: &Html) -> ElementRef<'_> {
    html.select(&Selector::parse("form").unwrap())
        .next()
        .expect("No form found")
}

#[track_caller]
fn assert_form_attribute(form: &ElementRef<'_>, attribute: &str, want: &str) {
    let got = form
        .value()
        .attr(attribute)
        .unwrap_or_else(|| panic!("{attribute} attribute missing"));

    assert_eq!(
        got, want,
        "want form with attribute {attribute}=\"{want}\", got {got:?}"
    );
}

#[track_caller]
pub(crate) fn assert_form_action(form: &ElementRef<'_>, endpoint: &str) {
    assert_form_attribute(form, "action", endpoint);
}

#[track_caller]
pub(crate) fn assert_form_method(form: &ElementRef<'_>, method: &str) {
    assert_form_attribute(form, "method", method);
}

#[track_caller]
fn must_get_input<'a>(form: &ElementRef<'a>, name: &str, type_: &str) -> ElementRef<'a> {
    let input = form
        .select(&Selector::parse("input").unwrap())
        .find(|input| input.value().attr("name") == Some(name))
        .unwrap_or_else(|| panic!("No input found with name \"{name}\" and type \"{type_}\""));

    let input_type = input.value().attr("type").unwrap_or_default();
    assert_eq!(
        input_type, type_,
        "want input with type \"{type_}\", got {input_type:?}"
    );
    assert!(
        input.value().attr("required").is_some(),
        "want input with name {name} to have the required attribute but got none"
    );

    input
}

#[track_caller]
pub(crate) fn assert_form_input(form: &ElementRef<'_>, name: &str, type_: &str) {
    must_get_input(form, name, type_);
}

#[track_caller]
pub(crate) fn assert_form_input_with_value(
    form: &ElementRef<'_>,
    name: &str,
    type_: &str,
    value: &str,
) {
    let input = must_get_input(form, name, type_);
    let input_value = input.value().attr("value").unwrap_or_default();

    assert_eq!(
        input_value, value,
        "want input with value \"{value}\", got {input_value:?}"
    );
}

#[track_caller]
fn must_get_submit_button<'a>(form: &ElementRef<'a>) -> ElementRef<'a> {
    let submit_button = form
        .select(&Selector::parse("button").unwrap())
        .next()
        .expect("No button found");

    assert_eq!(
        submit_button.value().attr("type").unwrap_or_default(),
        "submit",
        "want submit button with type=\"submit\""
    );

    submit_button
}

#[track_caller]
pub(crate) fn assert_form_submit_button(form: &ElementRef<'_>) {
    must_get_submit_button(form);
}

#[track_caller]
pub(crate) fn assert_form_submit_button_with_text(form: &ElementRef<'_>, text: &str) {
    let submit_button = must_get_submit_button(form);

    let got_text = submit_button.text().collect::<Vec<_>>().join("");
    assert_eq!(text, got_text.trim());
}
