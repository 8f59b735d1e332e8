use wasm_bindgen::JsCast;
use web_sys::{File, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

/// Current value of the input, textarea or select that fired `e`.
pub fn event_value(e: &Event) -> String {
    let Some(target) = e.target() else {
        return String::new();
    };
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

/// Callback writing one form field into `state`.
pub fn update<T, E>(state: &UseStateHandle<T>, apply: fn(&mut T, String)) -> Callback<E>
where
    T: Clone + 'static,
    E: AsRef<Event> + 'static,
{
    let state = state.clone();
    Callback::from(move |e: E| {
        let mut next = (*state).clone();
        apply(&mut next, event_value(e.as_ref()));
        state.set(next);
    })
}

/// Files chosen in a file input, in selection order.
pub fn selected_files(e: &Event) -> Vec<File> {
    let input: HtmlInputElement = e.target_unchecked_into();
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

pub fn clear_file_input(input: &NodeRef) {
    if let Some(input) = input.cast::<HtmlInputElement>() {
        input.set_value("");
    }
}

/// `<option>`s for a fixed label set, with `selected` marked.
pub fn label_options(labels: &[&'static str], selected: &str) -> Html {
    html! {
        { for labels.iter().copied().map(|label| html! {
            <option key={label} value={label} selected={label == selected}>{title_case(label)}</option>
        }) }
    }
}

fn title_case(label: &str) -> String {
    label
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("graphic design"), "Graphic Design");
        assert_eq!(title_case("impact"), "Impact");
        assert_eq!(title_case(""), "");
    }
}
