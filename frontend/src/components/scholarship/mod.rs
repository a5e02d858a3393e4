//! Scholarship application form: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, view rendering,
//! and helpers.
//!
//! The form logic itself lives in `common::form::FormController`; this
//! component owns one controller, forwards DOM events to it as `Msg`s and runs
//! the network part of a submission on the browser's task queue.

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::ScholarshipFormProps;
pub use state::ScholarshipForm;

impl Component for ScholarshipForm {
    type Message = Msg;
    type Properties = ScholarshipFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        ScholarshipForm::new(ctx.props().api_base.clone())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
