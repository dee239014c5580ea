// ============================================================================
// APP VIEW - Composición de la página según la ruta
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::dom::ElementBuilder;
use crate::models::route::Route;
use crate::state::AppState;
use crate::viewmodels::PageViewModel;
use crate::views::compliance::render_compliance;
use crate::views::footer::render_footer;
use crate::views::home::render_home;
use crate::views::language_switcher::render_language_switcher;
use crate::views::navbar::render_navbar;
use crate::views::not_found::render_not_found;
use crate::views::ViewHandlers;

/// Renderizar la página completa para `route`
pub fn render_app(
    route: &Route,
    vm: &PageViewModel,
    state: &AppState,
    handlers: &ViewHandlers,
) -> Result<Element, JsValue> {
    let switcher = render_language_switcher(&vm.language_switcher(), handlers)?;
    let wrapper = ElementBuilder::new("div")?.class("min-h-screen").child(switcher)?;

    let page = match route {
        Route::Home { .. } => {
            let home = vm.home_page();
            render_home(&home, &state.accordion.borrow(), &state.quote_form.borrow(), handlers)?
        }
        Route::Compliance => render_compliance(&vm.compliance_page(), handlers)?,
        Route::NotFound { .. } => {
            return Ok(wrapper.child(render_not_found(&vm.not_found_page(), handlers)?)?.build());
        }
    };

    let navbar = render_navbar(
        &vm.navbar(route.is_home()),
        &state.menu.borrow(),
        &state.scroll_style.borrow(),
        handlers,
    )?;

    Ok(wrapper
        .child(navbar)?
        .child(page)?
        .child(render_footer(&vm.footer())?)?
        .build())
}
