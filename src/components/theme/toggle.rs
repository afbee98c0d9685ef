pub struct ModeToggle {
    mode_ctx: ModeCtxSub,
}

pub enum ModeToggleMsg {
    ModeContextUpdate(ModeCtx),
    ToggleMode,
}

#[derive(Properties, PartialEq)]
pub struct ModeToggleProps {}

impl Component for ModeToggle {
    type Message = ModeToggleMsg;
    type Properties = ModeToggleProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            mode_ctx: ModeCtxSub::subscribe(ctx, Self::Message::ModeContextUpdate),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onclick = ctx.link().callback(move |_| Self::Message::ToggleMode);

        let state = self.mode_ctx.as_ref();
        let border_color = state.theme.text_color;
        let toggle_style = css!(
            "
                user-select: none;
                padding: 0.5em 1em;
                border: 2px solid ${border_color};
                border-radius: 4px;
                background-color: transparent;
                color: inherit;
                cursor: pointer;
                transition: opacity .2s ease-in;

                :hover {
                    opacity: 0.8;
                }
            ",
            border_color = border_color
        );

        html! {
            <button {onclick} class={ toggle_style }>{ &state.toggle_label }</button>
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::ModeContextUpdate(mode_ctx) => {
                self.mode_ctx.set(mode_ctx);
                true
            }
            Self::Message::ToggleMode => {
                self.mode_ctx.as_ref().toggle();
                false
            }
        }
    }
}

use super::mode_ctx::imports::*;
use crate::components::imports::*;
