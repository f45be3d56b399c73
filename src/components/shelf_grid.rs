use yew::prelude::*;

use crate::game::GridCell;

#[derive(Properties, PartialEq, Clone)]
pub struct ShelfGridProps {
    /// Row-major cells.
    pub cells: Vec<GridCell>,
    pub columns: usize,
    pub on_click: Callback<usize>,
}

#[function_component(ShelfGrid)]
pub fn shelf_grid(props: &ShelfGridProps) -> Html {
    let grid_style = format!(
        "display:grid; grid-template-columns:repeat({}, minmax(56px, 1fr)); gap:6px; background:#161b22; border:1px solid #30363d; border-radius:8px; padding:8px;",
        props.columns.max(1)
    );
    html! {
        <div id="shelf-grid" style={grid_style}>
            { for props.cells.iter().map(|cell| {
                let index = cell.index;
                let onclick = {
                    let cb = props.on_click.clone();
                    let disabled = cell.disabled;
                    Callback::from(move |_| if !disabled { cb.emit(index) })
                };
                // found wins over missed; a found cell can't be mis-picked.
                let border = if cell.found {
                    "#2ea043"
                } else if cell.missed {
                    "#f85149"
                } else {
                    "#30363d"
                };
                let mut class = classes!("product-card");
                if cell.found { class.push("found"); }
                if cell.missed { class.push("missed"); }
                let style = format!(
                    "aspect-ratio:1; padding:2px; background:#0e1116; border:2px solid {}; border-radius:6px; cursor:{}; opacity:{};",
                    border,
                    if cell.disabled { "default" } else { "pointer" },
                    if cell.found { "0.55" } else { "1" },
                );
                html! {
                    <button
                        key={index.to_string()}
                        type="button"
                        class={class}
                        data-product-id={cell.product_id.clone()}
                        aria-label={cell.name.clone()}
                        aria-disabled={cell.disabled.to_string()}
                        {onclick}
                        {style}
                    >
                        <img src={cell.image.clone()} alt={cell.name.clone()} style="width:100%; height:100%; object-fit:contain;" />
                    </button>
                }
            }) }
        </div>
    }
}
