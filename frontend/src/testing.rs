use yew::html::BaseComponent;
use yew::LocalServerRenderer;

/// Renders a component to an HTML string. Effects never run, so this is the markup of the
/// first paint: nothing has entered view and no timer has ticked.
pub fn render<C>(props: C::Properties) -> String
where
    C: BaseComponent,
{
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("test runtime");
    let local = tokio::task::LocalSet::new();
    local.block_on(
        &runtime,
        LocalServerRenderer::<C>::with_props(props).hydratable(false).render(),
    )
}
