use crate::App;
use frontend::charts::{self, DistributionSeries, KeywordSeries, ModelPerformanceRow};
use yew::prelude::*;

pub fn render_charts(app: &App) -> Html {
    let data = charts::project(&app.session);

    html! {
        <div class="charts">
            { render_distribution(&data.distribution) }
            if !data.keywords.is_empty() {
                { render_keywords(&data.keywords) }
            }
            if data.show_model_performance() {
                { render_model_performance(&data.model_performance) }
            }
        </div>
    }
}

fn percentage(value: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        value as f64 * 100.0 / total as f64
    }
}

fn render_distribution(series: &DistributionSeries) -> Html {
    let total: usize = series.values.iter().sum();

    html! {
        <div class="chart distribution-chart">
            <h3>{"prediction history"}</h3>
            { for series.labels.iter().zip(series.values).map(|(label, value)| {
                let share = percentage(value, total);
                let class = format!("label-{}", label.as_ref().to_lowercase());
                html! {
                    <div class={classes!("result-item", class)}>
                        <div class="result-label">{ label.to_string() }</div>
                        <div class="result-bar-container">
                            <div class="result-bar" style={format!("width: {}%", share)}></div>
                        </div>
                        <div class="result-value">{ format!("{} ({:.1}%)", value, share) }</div>
                    </div>
                }
            })}
        </div>
    }
}

fn render_keywords(series: &KeywordSeries) -> Html {
    let max = series.values.iter().copied().max().unwrap_or(0) as usize;

    html! {
        <div class="chart keyword-chart">
            <h3>{"misinformation keywords detected"}</h3>
            { for series.labels.iter().zip(&series.values).map(|(keyword, count)| {
                let width = percentage(*count as usize, max);
                html! {
                    <div class="result-item">
                        <div class="result-label">{ keyword.clone() }</div>
                        <div class="result-bar-container">
                            <div class="result-bar" style={format!("width: {}%", width)}></div>
                        </div>
                        <div class="result-value">{ count.to_string() }</div>
                    </div>
                }
            })}
        </div>
    }
}

fn render_model_performance(rows: &[ModelPerformanceRow]) -> Html {
    html! {
        <div class="chart model-chart">
            <h3>{"model performance"}</h3>
            <table>
                <thead>
                    <tr><th>{"model"}</th><th>{"total"}</th><th>{"real"}</th><th>{"fake"}</th></tr>
                </thead>
                <tbody>
                    { for rows.iter().map(|row| html! {
                        <tr>
                            <td>{ row.model.display_name() }</td>
                            <td>{ row.total.to_string() }</td>
                            <td>{ row.real.to_string() }</td>
                            <td>{ row.fake.to_string() }</td>
                        </tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}
