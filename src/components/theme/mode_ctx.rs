pub mod imports {
    pub use super::{ModeCtx, ModeCtxSub};
}

// What subscribers need to render the current mode.
// Everything here is derived from the controller in the same render,
// so the applied theme can't drift from the mode.
#[derive(derivative::Derivative, Clone, PartialEq)]
#[derivative(Debug)]
pub struct ModeState {
    pub mode: Mode,
    pub theme: &'static Theme,
    pub toggle_label: AttrValue,
    pub transition: AttrValue,

    #[derivative(Debug = "ignore")]
    toggle_cb: Callback<()>,
}

impl ModeState {
    pub fn new<S: PreferenceStore>(
        controller: &ModeController<S>,
        conf: &ToggleConf,
        toggle_cb: Callback<()>,
    ) -> Self {
        Self {
            mode: controller.mode(),
            theme: controller.theme(),
            toggle_label: controller.toggle_label().into(),
            transition: conf.transition_css().into(),
            toggle_cb,
        }
    }

    // modify state from children
    pub fn toggle(&self) {
        self.toggle_cb.emit(());
    }
}

pub type ModeCtx = Rc<ModeState>;

pub struct ModeCtxSub {
    ctx: ModeCtx,
    // keep handle for component rerender after the mode changes
    _ctx_handle: ContextHandle<ModeCtx>,
}

impl AsRef<ModeState> for ModeCtxSub {
    fn as_ref(&self) -> &ModeState {
        &self.ctx
    }
}

impl ModeCtxSub {
    pub fn subscribe<COMP, F, M>(ctx: &Context<COMP>, f: F) -> Self
    where
        COMP: Component,
        M: Into<COMP::Message>,
        F: Fn(ModeCtx) -> M + 'static,
    {
        let (ctx, _ctx_handle) = ctx
            .link()
            .context(ctx.link().callback(f))
            .expect("Mode context does not exist");

        Self { ctx, _ctx_handle }
    }

    pub fn set(&mut self, ctx: ModeCtx) {
        self.ctx = ctx;
    }
}

pub struct WithMode {
    controller: ModeController<LocalPreferenceStore>,
    toggle_cb: Callback<()>,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub conf: ToggleConf,
    #[prop_or_default]
    pub children: Children,
}

pub enum Msg {
    ToggleMode,
}

impl Component for WithMode {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let store = LocalPreferenceStore::new(ctx.props().conf.storage_key());
        let (controller, error) = ModeController::restore(store);

        match error {
            None => console::log!(format!("mode restored: {}", controller.mode())),
            Some(error) => console::warn!(format!(
                "{error}, falling back to {} mode",
                controller.mode()
            )),
        }

        Self {
            controller,
            toggle_cb: ctx.link().callback(|()| Msg::ToggleMode),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let state = ModeState::new(
            &self.controller,
            &ctx.props().conf,
            self.toggle_cb.clone(),
        );

        html! {
            <ContextProvider<ModeCtx> context={Rc::new(state)}>
                { ctx.props().children.clone() }
            </ContextProvider<ModeCtx>>
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Self::Message::ToggleMode => {
                match self.controller.toggle() {
                    Ok(mode) => console::log!(format!("mode toggled: {mode}")),
                    Err(error) => console::warn!(format!(
                        "mode toggled to {} but not saved: {error}",
                        self.controller.mode()
                    )),
                }
                true
            }
        }
    }
}


use super::controller::ModeController;
use super::modes::Mode;
use super::storage::{LocalPreferenceStore, PreferenceStore};
use super::themes::Theme;
use crate::components::imports::*;
use crate::conf::ToggleConf;
