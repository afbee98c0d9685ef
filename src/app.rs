use crate::components::theme::prelude::{ModeToggle, WithMode};
use crate::components::DefaultStyling;
use crate::conf::ToggleConf;

use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <WithMode conf={ ToggleConf::new() }>
            <DefaultStyling>
                <div>
                    <h1>{ "Light/Dark Mode Toggle" }</h1>
                    <ModeToggle/>
                </div>
            </DefaultStyling>
        </WithMode>
    }
}
