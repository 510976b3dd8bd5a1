//! Sentiment Chart Component
//!
//! Line chart of a hashtag's sentiment series using HTML5 Canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::analytics::analyze;
use crate::state::theme::ThemeState;
use crate::state::trend::TrendSeries;

/// Line color when the series ends positive.
const RISING_COLOR: &str = "#4caf50";
/// Line color when the series ends at or below zero.
const FALLING_COLOR: &str = "#f44336";

struct Palette {
    background: &'static str,
    grid: &'static str,
    label: &'static str,
    marker_fill: &'static str,
}

const LIGHT: Palette = Palette {
    background: "#fafafa",
    grid: "#e0e0e0",
    label: "#6b7280",
    marker_fill: "#ffffff",
};

const DARK: Palette = Palette {
    background: "#1f2937",
    grid: "#374151",
    label: "#9ca3af",
    marker_fill: "#1f2937",
};

/// Sentiment line chart component
#[component]
pub fn SentimentChart(series: TrendSeries) -> impl IntoView {
    let theme = use_context::<ThemeState>().expect("ThemeState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();
    let series = store_value(series);

    // Redraw when the theme flips
    create_effect(move |_| {
        let dark = theme.is_dark();
        if let Some(canvas) = canvas_ref.get() {
            series.with_value(|series| draw_chart(&canvas, series, dark));
        }
    });

    view! {
        <canvas
            node_ref=canvas_ref
            width="800"
            height="320"
            class="trend-chart"
        />
    }
}

/// Draw the series on canvas
fn draw_chart(canvas: &HtmlCanvasElement, series: &TrendSeries, dark: bool) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let palette = if dark { DARK } else { LIGHT };
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 50.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 30.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&palette.background.into());
    ctx.fill_rect(0.0, 0.0, width, height);

    let points = &series.trend;
    if points.is_empty() {
        ctx.set_fill_style(&palette.label.into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No data", width / 2.0 - 30.0, height / 2.0);
        return;
    }

    // Y bounds from the padded analytics extrema
    let (y_min, y_max) = analyze(points).axis_bounds();
    let y_range = y_max - y_min;

    let color = if points[points.len() - 1].sentiment > 0.0 {
        RISING_COLOR
    } else {
        FALLING_COLOR
    };

    let x_at = |i: usize| {
        if points.len() == 1 {
            margin_left + chart_width / 2.0
        } else {
            margin_left + (i as f64 / (points.len() - 1) as f64) * chart_width
        }
    };
    let y_at = |sentiment: f64| margin_top + ((y_max - sentiment) / y_range) * chart_height;

    // Horizontal grid lines with y-axis labels
    ctx.set_stroke_style(&palette.grid.into());
    ctx.set_line_width(1.0);
    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = y_max - (i as f64 / 5.0) * y_range;
        ctx.set_fill_style(&palette.label.into());
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{:.1}", value), 8.0, y + 4.0);
    }

    // Area fill under the line
    ctx.set_global_alpha(0.15);
    ctx.set_fill_style(&color.into());
    ctx.begin_path();
    ctx.move_to(x_at(0), y_at(points[0].sentiment));
    for (i, point) in points.iter().enumerate().skip(1) {
        ctx.line_to(x_at(i), y_at(point.sentiment));
    }
    ctx.line_to(x_at(points.len() - 1), margin_top + chart_height);
    ctx.line_to(x_at(0), margin_top + chart_height);
    ctx.close_path();
    ctx.fill();
    ctx.set_global_alpha(1.0);

    // The line itself
    ctx.set_stroke_style(&color.into());
    ctx.set_line_width(3.0);
    ctx.begin_path();
    for (i, point) in points.iter().enumerate() {
        let x = x_at(i);
        let y = y_at(point.sentiment);
        if i == 0 {
            ctx.move_to(x, y);
        } else {
            ctx.line_to(x, y);
        }
    }
    ctx.stroke();

    // Point markers
    ctx.set_line_width(2.0);
    for (i, point) in points.iter().enumerate() {
        ctx.begin_path();
        let _ = ctx.arc(
            x_at(i),
            y_at(point.sentiment),
            4.0,
            0.0,
            std::f64::consts::PI * 2.0,
        );
        ctx.set_fill_style(&palette.marker_fill.into());
        ctx.fill();
        ctx.stroke();
    }

    // X-axis date labels
    ctx.set_fill_style(&palette.label.into());
    ctx.set_font("12px sans-serif");
    for (i, point) in points.iter().enumerate() {
        let _ = ctx.fill_text(&short_date(&point.date), x_at(i) - 15.0, height - 8.0);
    }
}

/// `2025-04-01` -> `Apr 1`
fn short_date(date: &str) -> String {
    chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d.format("%b %-d").to_string())
        .unwrap_or_else(|_| date.to_string())
}
