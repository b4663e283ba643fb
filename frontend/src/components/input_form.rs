use crate::{App, Msg};
use shared::ModelIdentifier;
use std::str::FromStr;
use strum::IntoEnumIterator;
use web_sys::{HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

pub fn render_input_form(app: &App, ctx: &Context<App>) -> Html {
    let link = ctx.link();
    let loading = app.session.is_busy();

    let onsubmit = link.callback(|event: SubmitEvent| {
        event.prevent_default();
        Msg::Submit
    });
    let oninput = link.callback(|event: InputEvent| {
        let area: HtmlTextAreaElement = event.target_unchecked_into();
        Msg::UpdateText(area.value())
    });
    let onchange = link.callback(|event: Event| {
        let select: HtmlSelectElement = event.target_unchecked_into();
        Msg::SelectModel(ModelIdentifier::from_str(&select.value()).unwrap_or_default())
    });
    let onclear = link.callback(|_: MouseEvent| Msg::Clear);

    html! {
        <div class="input-form-container">
            <form {onsubmit}>
                <label for="model-select" class="input-label">{"select model"}</label>
                <select id="model-select" class="input-select" {onchange}>
                    { for ModelIdentifier::iter().map(|model| html! {
                        <option value={model.as_ref().to_string()} selected={model == app.model}>
                            { model.display_name() }
                        </option>
                    })}
                </select>

                <label for="text-input" class="input-label">{"enter text to analyse"}</label>
                <textarea
                    id="text-input"
                    class={classes!("input-textarea", app.validation_error.map(|_| "error"))}
                    placeholder="paste a social media post, tweet, or article here..."
                    value={app.text.clone()}
                    {oninput}
                />

                if let Some(error) = app.validation_error {
                    <div class="error-message">{ error.to_string() }</div>
                }

                if let Some(message) = &app.session.state().error_message {
                    <div class="network-error">{ message.clone() }</div>
                }

                <div class="button-group">
                    <button type="submit" class="button-submit" disabled={loading}>
                        { if loading { "analysing..." } else { "analyse text" } }
                    </button>
                    <button type="button" class="button-clear" onclick={onclear}>
                        {"clear"}
                    </button>
                </div>

                <p class="helper-text">{"enter at least 10 characters to analyse"}</p>
            </form>
        </div>
    }
}
