mod components;

use frontend::{
    ClientConfig, HttpTransport, PredictionClient, PredictionResult, Session, SubmitError,
    Submission, ValidationError,
};
use shared::ModelIdentifier;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

pub enum Msg {
    // Input events
    UpdateText(String),
    SelectModel(ModelIdentifier),

    // Prediction lifecycle
    Submit,
    PredictionCompleted(Submission, PredictionResult),
    Clear,
}

// Main component
pub struct App {
    session: Session,
    client: Rc<PredictionClient<HttpTransport>>,
    text: String,
    model: ModelIdentifier,
    validation_error: Option<ValidationError>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let config = ClientConfig::from_env();
        let transport = HttpTransport::new(&config);
        log::info!(
            "Using classification service at {} (timeout {:?})",
            transport.url(),
            config.timeout
        );

        Self {
            session: Session::new(),
            client: Rc::new(PredictionClient::new(transport)),
            text: String::new(),
            model: ModelIdentifier::default(),
            validation_error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::UpdateText(text) => {
                self.text = text;
                true
            }
            Msg::SelectModel(model) => {
                self.model = model;
                true
            }
            Msg::Submit => self.handle_submit(ctx),
            Msg::PredictionCompleted(submission, result) => {
                self.session.complete(&submission, result)
            }
            Msg::Clear => self.handle_clear(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                <h1 class="app-title">{"Misinformation Detector"}</h1>

                <main class="main-content">
                { components::input_form::render_input_form(self, ctx) }
                { components::results::render_result(self) }
                { components::charts::render_charts(self) }
                </main>
            </div>
        }
    }
}

// Handler methods
impl App {
    fn handle_submit(&mut self, ctx: &Context<Self>) -> bool {
        match self.session.begin(&self.text, self.model) {
            Ok(submission) => {
                self.validation_error = None;
                self.send_prediction_request(ctx, submission);
                true
            }
            Err(SubmitError::Invalid(error)) => {
                self.validation_error = Some(error);
                true
            }
            Err(SubmitError::Busy) => false,
        }
    }

    fn handle_clear(&mut self) -> bool {
        self.session.clear();
        self.text.clear();
        self.validation_error = None;
        true
    }

    fn send_prediction_request(&self, ctx: &Context<Self>, submission: Submission) {
        spawn_local({
            let link = ctx.link().clone();
            let client = Rc::clone(&self.client);

            async move {
                let result = client.submit(&submission.text, submission.model).await;
                link.send_message(Msg::PredictionCompleted(submission, result));
            }
        });
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    yew::Renderer::<App>::new().render();
}
