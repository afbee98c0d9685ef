use crate::components::imports::*;
use crate::components::theme::prelude::{ModeCtx, ModeCtxSub, ModeState};

// Paints <body> with the current theme
pub struct DefaultStyling {
    mode_ctx: ModeCtxSub,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Children,
}

pub enum Msg {
    ModeContextUpdate(ModeCtx),
}

impl Component for DefaultStyling {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            mode_ctx: ModeCtxSub::subscribe(ctx, Self::Message::ModeContextUpdate),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let ModeState {
            theme, transition, ..
        } = self.mode_ctx.as_ref();

        let bg_color = theme.bg_color;
        let text_color = theme.text_color;

        let global_style = css!(
            "
                body {
                    background-color: ${bg_color};
                    color: ${text_color};
                    transition: ${transition};
                }
            ",
            bg_color = bg_color,
            text_color = text_color,
            transition = transition,
        );

        html! {
            <>
                <Global css={global_style}/>
                { for ctx.props().children.iter() }
            </>
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::ModeContextUpdate(mode_ctx) => {
                console::log!(format!(
                    "body styling updated for {} mode",
                    mode_ctx.mode
                ));
                self.mode_ctx.set(mode_ctx);
                true
            }
        }
    }
}
