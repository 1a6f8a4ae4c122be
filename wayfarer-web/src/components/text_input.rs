use shared::{FieldChange, TextField};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TextInputProps {
    pub field: TextField,
    pub value: AttrValue,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    pub on_change: Callback<FieldChange>,
}

/// Labelled text input that reports edits as [`FieldChange::Text`] and
/// shows its validation message inline.
#[function_component(TextInput)]
pub fn text_input(props: &TextInputProps) -> Html {
    let field = props.field;
    let input_id = format!("destination-{}", field.input_name());
    let error_id = format!("{input_id}-error");

    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            on_change.emit(FieldChange::text(field, input.value()));
        })
    };

    let invalid = props.error.is_some();

    html! {
        <div class="form-control">
            <label for={input_id.clone()}>{format!("{}:", field.label())}</label>
            <input
                id={input_id}
                type="text"
                name={field.input_name()}
                value={props.value.clone()}
                aria-invalid={invalid.to_string()}
                aria-describedby={invalid.then(|| error_id.clone())}
                {oninput}
            />
            if let Some(message) = props.error.clone() {
                <span id={error_id} class="field-error">{message}</span>
            }
        </div>
    }
}
