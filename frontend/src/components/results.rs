use crate::App;
use shared::PredictionLabel;
use yew::prelude::*;

pub fn render_result(app: &App) -> Html {
    if let Some(label) = app.session.state().result {
        let class = match label {
            PredictionLabel::Real => "result-real",
            PredictionLabel::Fake => "result-fake",
        };
        html! {
            <p class={classes!("prediction-result", class)}>
                {"Prediction: "}<strong>{ label.to_string() }</strong>
            </p>
        }
    } else {
        html! {}
    }
}
