use shared::CategorySelection;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CategoryTabsProps {
    pub selection: CategorySelection,
    pub on_select: Callback<&'static str>,
}

/// One pill button per label of the selection's view.
#[function_component(CategoryTabs)]
pub fn category_tabs(props: &CategoryTabsProps) -> Html {
    html! {
        <div class="category-tabs">
            { for props.selection.view().labels.iter().copied().map(|label| {
                let on_select = props.on_select.clone();
                let class = if props.selection.is_active(label) {
                    "category-tab active"
                } else {
                    "category-tab"
                };
                html! {
                    <button
                        key={label}
                        type="button"
                        {class}
                        onclick={Callback::from(move |_: MouseEvent| on_select.emit(label))}
                    >
                        {label}
                    </button>
                }
            }) }
        </div>
    }
}
