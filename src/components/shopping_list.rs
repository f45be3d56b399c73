use yew::prelude::*;

use crate::game::ShoppingEntry;

#[derive(Properties, PartialEq, Clone)]
pub struct ShoppingListProps {
    pub entries: Vec<ShoppingEntry>,
}

#[function_component]
pub fn ShoppingList(props: &ShoppingListProps) -> Html {
    let found = props.entries.iter().filter(|e| e.found).count();
    let row_style = "display:flex; align-items:center; gap:8px;";
    html! {
        <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:200px; display:flex; flex-direction:column; gap:8px; font-size:14px;">
            <div style="display:flex; justify-content:space-between; font-weight:600;">
                <span>{"Lista de compras"}</span>
                <span style="font-variant-numeric:tabular-nums; opacity:0.8;">{ format!("{}/{}", found, props.entries.len()) }</span>
            </div>
            <ul id="shopping-list" style="margin:0; padding:0; list-style:none; display:flex; flex-direction:column; gap:6px;">
                { for props.entries.iter().map(|entry| {
                    let (mark, style) = if entry.found {
                        ("✔", format!("{} color:#2ea043; text-decoration:line-through;", row_style))
                    } else {
                        ("•", format!("{} color:#c9d1d9;", row_style))
                    };
                    html! {
                        <li key={entry.product_id.clone()} data-product-id={entry.product_id.clone()} style={style}>
                            <span style="width:16px; text-align:center;">{ mark }</span>
                            <span>{ entry.name.clone() }</span>
                        </li>
                    }
                }) }
            </ul>
        </div>
    }
}
