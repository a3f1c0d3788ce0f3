//! Options Greeks GUI
//!
//! Interactive Black-Scholes calculator: adjust contract parameters in the
//! side panel and watch the price, Greeks, moneyness, and sensitivity curves
//! update live.

use eframe::egui;
use egui_plot::{HLine, Legend, Line, LineStyle, Plot, PlotPoints, VLine};

use greekscope::fmt::{self, format_currency, InputField};
use greekscope::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AnalysisTab {
    PriceVsSpot,
    GreeksVsSpot,
    GreeksVsVol,
    GreeksVsTime,
}

impl AnalysisTab {
    fn label(&self) -> &'static str {
        match self {
            AnalysisTab::PriceVsSpot => "Price vs Underlying",
            AnalysisTab::GreeksVsSpot => "Greeks vs Underlying",
            AnalysisTab::GreeksVsVol => "Greeks vs Volatility",
            AnalysisTab::GreeksVsTime => "Greeks vs Time",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GreekChoice {
    Delta,
    Gamma,
    Theta,
    Vega,
}

impl GreekChoice {
    fn label(&self) -> &'static str {
        match self {
            GreekChoice::Delta => "Delta",
            GreekChoice::Gamma => "Gamma",
            GreekChoice::Theta => "Theta",
            GreekChoice::Vega => "Vega",
        }
    }

    fn pick(&self, greeks: &Greeks) -> f64 {
        match self {
            GreekChoice::Delta => greeks.delta,
            GreekChoice::Gamma => greeks.gamma,
            GreekChoice::Theta => greeks.theta,
            GreekChoice::Vega => greeks.vega,
        }
    }

    fn color(&self) -> egui::Color32 {
        match self {
            GreekChoice::Delta => egui::Color32::LIGHT_BLUE,
            GreekChoice::Gamma => egui::Color32::LIGHT_GREEN,
            GreekChoice::Theta => egui::Color32::LIGHT_RED,
            GreekChoice::Vega => egui::Color32::from_rgb(170, 120, 255),
        }
    }
}

struct GreeksApp {
    // Inputs in UI units: dollars, whole days, percentages
    option_type: OptionType,
    spot: f64,
    strike: f64,
    days_to_expiry: u32,
    volatility_pct: f64,
    risk_free_rate_pct: f64,
    dividend_yield_pct: f64,

    // UI state
    tab: AnalysisTab,
    greek: GreekChoice,
}

impl Default for GreeksApp {
    fn default() -> Self {
        Self {
            option_type: OptionType::Call,
            spot: 100.0,
            strike: 100.0,
            days_to_expiry: 30,
            volatility_pct: 30.0,
            risk_free_rate_pct: 2.5,
            dividend_yield_pct: 0.0,
            tab: AnalysisTab::PriceVsSpot,
            greek: GreekChoice::Delta,
        }
    }
}

impl GreeksApp {
    /// Engine inputs in model units (years, decimal rates)
    fn inputs(&self) -> OptionInputs {
        OptionInputs::from_days(
            self.option_type,
            self.spot,
            self.strike,
            self.days_to_expiry,
            self.volatility_pct / 100.0,
            self.risk_free_rate_pct / 100.0,
            self.dividend_yield_pct / 100.0,
        )
    }

    fn parameter_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Option Parameters");
        ui.separator();

        egui::ComboBox::from_label("Option Type")
            .selected_text(self.option_type.to_string())
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut self.option_type, OptionType::Call, "Call");
                ui.selectable_value(&mut self.option_type, OptionType::Put, "Put");
            })
            .response
            .on_hover_text(fmt::tooltip(InputField::OptionType));

        ui.horizontal(|ui| {
            ui.label("Underlying ($):");
            ui.add(
                egui::DragValue::new(&mut self.spot)
                    .speed(1.0)
                    .clamp_range(1.0..=10000.0),
            )
            .on_hover_text(fmt::tooltip(InputField::SpotPrice));
        });

        ui.horizontal(|ui| {
            ui.label("Strike ($):");
            ui.add(
                egui::DragValue::new(&mut self.strike)
                    .speed(1.0)
                    .clamp_range(1.0..=10000.0),
            )
            .on_hover_text(fmt::tooltip(InputField::StrikePrice));
        });

        ui.horizontal(|ui| {
            ui.label("Days to Expiry:");
            ui.add(egui::DragValue::new(&mut self.days_to_expiry).clamp_range(1..=1000))
                .on_hover_text(fmt::tooltip(InputField::DaysToExpiry));
        });

        ui.horizontal(|ui| {
            ui.label("Volatility (%):");
            ui.add(
                egui::DragValue::new(&mut self.volatility_pct)
                    .speed(1.0)
                    .clamp_range(1.0..=200.0),
            )
            .on_hover_text(fmt::tooltip(InputField::Volatility));
        });

        ui.separator();
        ui.heading("Advanced Parameters");

        ui.add(
            egui::Slider::new(&mut self.risk_free_rate_pct, 0.0..=10.0)
                .text("Risk-Free Rate (%)"),
        )
        .on_hover_text(fmt::tooltip(InputField::RiskFreeRate));

        ui.add(
            egui::Slider::new(&mut self.dividend_yield_pct, 0.0..=10.0)
                .text("Dividend Yield (%)"),
        )
        .on_hover_text(fmt::tooltip(InputField::DividendYield));
    }

    fn analysis_summary(&self, ui: &mut egui::Ui, inputs: &OptionInputs, price: f64) {
        let moneyness = inputs.moneyness();
        let intrinsic = inputs.intrinsic_value();
        let time_value = price - intrinsic;

        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(format!("Price: {}", format_currency(price))).strong(),
            );
            ui.separator();

            let color = match moneyness {
                Moneyness::Itm => egui::Color32::GREEN,
                Moneyness::Atm => egui::Color32::LIGHT_BLUE,
                Moneyness::Otm => egui::Color32::RED,
            };
            ui.label(
                egui::RichText::new(format!("Status: {}", moneyness))
                    .color(color)
                    .strong(),
            );
            ui.separator();

            ui.label(format!("Intrinsic: {}", format_currency(intrinsic)));
            ui.label(format!("Time Value: {}", format_currency(time_value)));
        });
    }

    fn greeks_table(&self, ui: &mut egui::Ui, greeks: &Greeks) {
        egui::Grid::new("greeks_grid")
            .striped(true)
            .spacing([24.0, 4.0])
            .show(ui, |ui| {
                ui.strong("Greek");
                ui.strong("Value");
                ui.strong("Description");
                ui.end_row();

                ui.label("Delta");
                ui.label(format!("{:.4}", greeks.delta));
                ui.label("Change in price per $1 move in the underlying");
                ui.end_row();

                ui.label("Gamma");
                ui.label(format!("{:.6}", greeks.gamma));
                ui.label("Change in delta per $1 move in the underlying");
                ui.end_row();

                ui.label("Theta");
                ui.label(format!("{:.4}", greeks.theta));
                ui.label("Price decay per calendar day");
                ui.end_row();

                ui.label("Vega");
                ui.label(format!("{:.4}", greeks.vega));
                ui.label("Price change per 1% move in implied volatility");
                ui.end_row();

                ui.label("Rho");
                ui.label(format!("{:.4}", greeks.rho));
                ui.label("Price change per 1% move in the risk-free rate");
                ui.end_row();
            });
    }

    fn price_vs_spot_plot(&self, ui: &mut egui::Ui, inputs: &OptionInputs, current_price: f64) {
        let mut call_inputs = *inputs;
        call_inputs.option_type = OptionType::Call;
        let mut put_inputs = *inputs;
        put_inputs.option_type = OptionType::Put;

        let call_curve = price_curve(&call_inputs, SweepVariable::Spot);
        let put_curve = price_curve(&put_inputs, SweepVariable::Spot);

        Plot::new("price_vs_spot")
            .view_aspect(2.0)
            .x_axis_label("Underlying Price ($)")
            .y_axis_label("Option Price ($)")
            .legend(Legend::default())
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(PlotPoints::new(call_curve))
                        .name("Call")
                        .color(egui::Color32::LIGHT_GREEN)
                        .width(2.0),
                );
                plot_ui.line(
                    Line::new(PlotPoints::new(put_curve))
                        .name("Put")
                        .color(egui::Color32::LIGHT_RED)
                        .width(2.0),
                );
                plot_ui.vline(
                    VLine::new(self.spot)
                        .name("Spot")
                        .color(egui::Color32::GRAY)
                        .width(1.0)
                        .style(LineStyle::Dashed { length: 5.0 }),
                );
                plot_ui.vline(
                    VLine::new(self.strike)
                        .name("Strike")
                        .color(egui::Color32::LIGHT_BLUE)
                        .width(1.0)
                        .style(LineStyle::Dotted { spacing: 4.0 }),
                );
                plot_ui.hline(
                    HLine::new(current_price)
                        .color(egui::Color32::GRAY)
                        .width(1.0)
                        .style(LineStyle::Dashed { length: 5.0 }),
                );
            });
    }

    fn greek_plot(&self, ui: &mut egui::Ui, inputs: &OptionInputs, variable: SweepVariable) {
        let curve = greeks_curve(inputs, variable);

        // Convert x to display units: vol in %, time in days
        let points: Vec<[f64; 2]> = curve
            .iter()
            .map(|(x, g)| {
                let x_display = match variable {
                    SweepVariable::Spot => *x,
                    SweepVariable::Volatility => *x * 100.0,
                    SweepVariable::TimeToExpiry => *x * 365.0,
                };
                [x_display, self.greek.pick(g)]
            })
            .collect();

        let (plot_id, x_label, marker) = match variable {
            SweepVariable::Spot => ("greeks_vs_spot", "Underlying Price ($)", self.spot),
            SweepVariable::Volatility => {
                ("greeks_vs_vol", "Implied Volatility (%)", self.volatility_pct)
            }
            SweepVariable::TimeToExpiry => {
                ("greeks_vs_time", "Days to Expiry", self.days_to_expiry as f64)
            }
        };

        Plot::new(plot_id)
            .view_aspect(2.0)
            .x_axis_label(x_label)
            .y_axis_label(self.greek.label())
            .legend(Legend::default())
            .show(ui, |plot_ui| {
                plot_ui.line(
                    Line::new(PlotPoints::new(points))
                        .name(self.greek.label())
                        .color(self.greek.color())
                        .width(2.0),
                );
                plot_ui.vline(
                    VLine::new(marker)
                        .color(egui::Color32::GRAY)
                        .width(1.0)
                        .style(LineStyle::Dashed { length: 5.0 }),
                );
                if variable == SweepVariable::Spot {
                    plot_ui.vline(
                        VLine::new(self.strike)
                            .name("Strike")
                            .color(egui::Color32::LIGHT_BLUE)
                            .width(1.0)
                            .style(LineStyle::Dotted { spacing: 4.0 }),
                    );
                }
            });
    }
}

impl eframe::App for GreeksApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("parameters").show(ctx, |ui| {
            self.parameter_panel(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let inputs = self.inputs();
            let price = bs_price(&inputs);
            let greeks = bs_greeks(&inputs);

            ui.heading("Option Analysis");
            self.analysis_summary(ui, &inputs, price);

            ui.separator();
            ui.heading("Greeks");
            self.greeks_table(ui, &greeks);

            ui.separator();
            ui.heading("Sensitivity Analysis");

            ui.horizontal(|ui| {
                for tab in [
                    AnalysisTab::PriceVsSpot,
                    AnalysisTab::GreeksVsSpot,
                    AnalysisTab::GreeksVsVol,
                    AnalysisTab::GreeksVsTime,
                ] {
                    if ui.selectable_label(self.tab == tab, tab.label()).clicked() {
                        self.tab = tab;
                    }
                }
            });

            if self.tab != AnalysisTab::PriceVsSpot {
                ui.horizontal(|ui| {
                    for greek in [
                        GreekChoice::Delta,
                        GreekChoice::Gamma,
                        GreekChoice::Theta,
                        GreekChoice::Vega,
                    ] {
                        if ui
                            .selectable_label(self.greek == greek, greek.label())
                            .clicked()
                        {
                            self.greek = greek;
                        }
                    }
                });
            }

            match self.tab {
                AnalysisTab::PriceVsSpot => self.price_vs_spot_plot(ui, &inputs, price),
                AnalysisTab::GreeksVsSpot => self.greek_plot(ui, &inputs, SweepVariable::Spot),
                AnalysisTab::GreeksVsVol => {
                    self.greek_plot(ui, &inputs, SweepVariable::Volatility)
                }
                AnalysisTab::GreeksVsTime => {
                    self.greek_plot(ui, &inputs, SweepVariable::TimeToExpiry)
                }
            }
        });
    }
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 900.0])
            .with_title("Options Greeks Calculator"),
        ..Default::default()
    };

    eframe::run_native(
        "Options Greeks Calculator",
        options,
        Box::new(|_cc| Box::new(GreeksApp::default())),
    )
}
