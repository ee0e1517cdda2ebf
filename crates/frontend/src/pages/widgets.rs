//! Small form inputs shared by the pages

use rust_decimal::Decimal;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub label: AttrValue,
    pub value: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    pub on_change: Callback<String>,
}

#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(input.value());
        })
    };

    html! {
        <label>
            {props.label.clone()}
            <input type={props.input_type.clone()} value={props.value.clone()} {oninput} />
        </label>
    }
}

#[derive(Properties, PartialEq)]
pub struct SelectFieldProps {
    pub label: AttrValue,
    /// (value, label) pairs; the empty value means "any"
    pub options: Vec<(AttrValue, AttrValue)>,
    pub on_change: Callback<String>,
}

#[function_component(SelectField)]
pub fn select_field(props: &SelectFieldProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(select.value());
        })
    };

    html! {
        <label>
            {props.label.clone()}
            <select {onchange}>
                <option value="">{"Any"}</option>
                { for props.options.iter().map(|(value, label)| html! {
                    <option value={value.clone()}>{label.clone()}</option>
                }) }
            </select>
        </label>
    }
}

/// Blank input means "no bound"; unparsable input is ignored too
pub fn parse_decimal(input: &str) -> Option<Decimal> {
    let input = input.trim();
    if input.is_empty() {
        None
    } else {
        input.parse().ok()
    }
}

pub fn parse_count(input: &str) -> Option<u32> {
    input.trim().parse().ok()
}

pub fn non_blank(input: String) -> Option<String> {
    (!input.trim().is_empty()).then_some(input)
}
