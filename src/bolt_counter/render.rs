use crate::bolt_counter::core::Event;
use crate::bolt_counter::main::BoltCounter;
use crate::bolt_counter::validate::RadiusInput;
use std::time::Instant;

/// The operator's window around a `BoltCounter`. Text fields live here and
/// are handed to the controller whenever it needs them.
pub struct BoltCounterWindow {
    bolt_counter: BoltCounter,
    input: RadiusInput,
    device_index_text: String,
    live_view: Option<egui::TextureHandle>,
}

impl BoltCounterWindow {
    pub fn new(bolt_counter: BoltCounter) -> Self {
        let device_index_text = bolt_counter.config.default_device_index.to_string();
        Self {
            bolt_counter,
            input: RadiusInput::default(),
            device_index_text,
            live_view: None,
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        let running = self.bolt_counter.model().is_running();

        ui.horizontal(|ui| {
            ui.label("Min Radius:");
            ui.add(egui::TextEdit::singleline(&mut self.input.min_text).desired_width(60.0));
            ui.label("Max Radius:");
            ui.add(egui::TextEdit::singleline(&mut self.input.max_text).desired_width(60.0));

            let toggle = if running { "Stop" } else { "Start" };
            if ui.button(toggle).clicked() {
                let event = if running {
                    Event::StopRequested
                } else {
                    Event::StartRequested {
                        input: self.input.clone(),
                    }
                };
                self.bolt_counter.dispatch(event);
            }

            if ui.button("Save Count").clicked() {
                self.bolt_counter.dispatch(Event::ConfirmCountRequested);
            }

            ui.label(self.bolt_counter.model().count_label());
        });
    }

    fn count_table(&self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical()
            .stick_to_bottom(true)
            .auto_shrink([false, true])
            .max_height(160.0)
            .show(ui, |ui| {
                egui::Grid::new("count_table")
                    .striped(true)
                    .num_columns(2)
                    .min_col_width(120.0)
                    .show(ui, |ui| {
                        ui.strong("Count");
                        ui.strong("Sum");
                        ui.end_row();

                        if self.bolt_counter.model().log.is_empty() {
                            ui.weak("No counts saved");
                            ui.end_row();
                        }
                        for entry in self.bolt_counter.model().log.entries() {
                            ui.label(entry.count.to_string());
                            ui.label(entry.cumulative_sum.to_string());
                            ui.end_row();
                        }
                    });
            });
    }

    fn live_view(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        let Some(image) = &self.bolt_counter.model().live_view else {
            self.live_view = None;
            return;
        };

        let size = [image.width() as usize, image.height() as usize];
        let pixels = egui::ColorImage::from_rgb(size, image.as_raw());
        match &mut self.live_view {
            Some(texture) => texture.set(pixels, egui::TextureOptions::LINEAR),
            None => {
                self.live_view =
                    Some(ctx.load_texture("live_view", pixels, egui::TextureOptions::LINEAR));
            }
        }

        if let Some(texture) = &self.live_view {
            ui.add(egui::Image::new(texture).shrink_to_fit());
        }
    }

    fn device_prompt(&mut self, ctx: &egui::Context) {
        if !self.bolt_counter.model().device_prompt_open {
            return;
        }

        let mut event = None;
        egui::Window::new("Camera")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Enter camera index:");
                ui.text_edit_singleline(&mut self.device_index_text);
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        event = Some(Event::DeviceIndexEntered {
                            input: self.input.clone(),
                            device_index: self.device_index_text.clone(),
                        });
                    }
                    if ui.button("Cancel").clicked() {
                        event = Some(Event::DeviceIndexCancelled);
                    }
                });
            });

        if let Some(event) = event {
            self.bolt_counter.dispatch(event);
        }
    }

    fn notice(&mut self, ctx: &egui::Context) {
        let Some(notice) = &self.bolt_counter.model().notice else {
            return;
        };
        let message = notice.to_string();

        let mut dismissed = false;
        egui::Window::new("Message")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(message);
                dismissed = ui.button("OK").clicked();
            });

        if dismissed {
            self.bolt_counter.dispatch(Event::NoticeDismissed);
        }
    }
}

impl eframe::App for BoltCounterWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(wait) = self.bolt_counter.poll(Instant::now(), &self.input) {
            ctx.request_repaint_after(wait);
        }

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.add_space(4.0);
            self.controls(ui);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.count_table(ui);
            ui.separator();
            self.live_view(ctx, ui);
        });

        self.device_prompt(ctx);
        self.notice(ctx);
    }
}
