use crate::config::DemoConfig;
use crate::input::{
    classify, Axis, DeviceId, DeviceInfo, DeviceRegistry, GilrsPlatform, InputError, InputPlatform, Outcome,
    RawNotification, AXIS_RANGE,
};
use crate::roadmap::Roadmap;
use eframe::egui;
use std::time::Instant;

/// What one frame's notifications amounted to
#[derive(Debug, Default, PartialEq)]
pub struct FrameReport {
    pub shutdown_requested: bool,
    pub last_outcome: Option<Outcome>,
    pub skipped: usize,
}

/// Classify notifications in arrival order. Out-of-range notifications are logged and skipped.
pub fn handle_notifications(
    notifications: &[RawNotification],
    registry: &mut DeviceRegistry,
    platform: &dyn InputPlatform,
) -> FrameReport {
    let mut report = FrameReport::default();

    for notification in notifications {
        match classify(notification, registry, platform) {
            Ok(outcome) => {
                match outcome {
                    Outcome::ShutdownRequested => {
                        log::info!("Shutdown requested");
                        report.shutdown_requested = true;
                    }
                    Outcome::ConnectionChanged { device, connected } => {
                        log::info!(
                            "Joystick {} {}",
                            device,
                            if connected { "connected" } else { "disconnected" }
                        );
                    }
                    Outcome::DeviceUpdated(_) | Outcome::Unclassified => {}
                }
                if outcome != Outcome::Unclassified {
                    report.last_outcome = Some(outcome);
                }
            }
            Err(e) => {
                log::warn!("Skipping notification {:?}: {}", notification, e);
                report.skipped += 1;
            }
        }
    }

    report
}

pub struct RoadmapApp {
    config: DemoConfig,
    roadmap: Roadmap,
    platform: Option<GilrsPlatform>,
    registry: DeviceRegistry,
    last_frame: Instant,
    last_outcome: Option<Outcome>,
    shutting_down: bool,
}

impl RoadmapApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: DemoConfig) -> Self {
        cc.egui_ctx.set_zoom_factor(config.scale_factor);

        let platform = match GilrsPlatform::new() {
            Ok(platform) => Some(platform),
            Err(e) => {
                log::error!("Failed to initialize joystick input: {}", e);
                None
            }
        };

        Self {
            roadmap: Roadmap::with_completed(&config.completed_steps),
            config,
            platform,
            registry: DeviceRegistry::new(),
            last_frame: Instant::now(),
            last_outcome: None,
            shutting_down: false,
        }
    }

    fn process_inputs(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        self.registry.set_frame_time(now - self.last_frame);
        self.last_frame = now;

        let mut notifications = Vec::new();
        if let Some(ref mut platform) = self.platform {
            notifications = platform.poll();
            if !self.config.input_mode.uses_events() {
                // Joystick state comes from polling below, connectivity still gets reported
                notifications.retain(|n| {
                    matches!(
                        n,
                        RawNotification::Connected { .. } | RawNotification::Disconnected { .. }
                    )
                });
            }
        }

        let close_requested =
            ctx.input(|i| i.viewport().close_requested() || i.key_pressed(egui::Key::Escape));
        if close_requested {
            notifications.push(RawNotification::WindowClosed);
        }

        let report = match self.platform {
            Some(ref platform) => handle_notifications(&notifications, &mut self.registry, platform),
            None => handle_notifications(&notifications, &mut self.registry, &NoPlatform),
        };
        if report.last_outcome.is_some() {
            self.last_outcome = report.last_outcome;
        }

        if self.config.input_mode.uses_polling() {
            if let Some(ref platform) = self.platform {
                self.registry.poll_connected(platform);
            }
        }

        if report.shutdown_requested && !self.shutting_down {
            self.shutting_down = true;
            self.config.completed_steps = self.roadmap.completed();
            if let Err(e) = self.config.save() {
                log::error!("Failed to save config: {}", e);
            }
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    fn render_roadmap(&mut self, ctx: &egui::Context) {
        egui::Window::new("The road-map").show(ctx, |ui| {
            ui.add(egui::ProgressBar::new(self.roadmap.progress()).show_percentage());
            ui.add_space(5.0);
            for (index, step) in self.roadmap.steps_mut().iter_mut().enumerate() {
                let label = Roadmap::display_label(index, step);
                ui.checkbox(&mut step.done, label);
            }
        });
    }

    fn render_joysticks(&self, ctx: &egui::Context) {
        egui::Window::new("Joysticks").show(ctx, |ui| {
            ui.label(format!(
                "Frame time: {:.2} ms ({:?} input)",
                self.registry.frame_time().as_secs_f64() * 1000.0,
                self.config.input_mode
            ));
            if let Some(outcome) = self.last_outcome {
                ui.label(format!("Last event: {:?}", outcome));
            }
            if self.platform.is_none() {
                ui.label(egui::RichText::new("Joystick input unavailable").color(egui::Color32::RED));
            }
            ui.separator();

            if self.registry.is_empty() {
                ui.label("Press a button on a joystick...");
                return;
            }

            for device in self.registry.devices() {
                ui.collapsing(format!("#{} {}", device.id, device.name), |ui| {
                    if let (Some(vendor), Some(product)) = (device.vendor_id, device.product_id) {
                        ui.label(format!("Vendor {:04x}, product {:04x}", vendor, product));
                    }
                    ui.label(format!("Buttons: {}", device.button_count));

                    let pressed: Vec<String> = device.pressed_buttons().map(|b| b.to_string()).collect();
                    ui.label(format!(
                        "Pressed: {}",
                        if pressed.is_empty() { "none".to_string() } else { pressed.join(", ") }
                    ));

                    for axis in Axis::ALL {
                        let position = device.axis(axis);
                        let fill = (position + AXIS_RANGE) / (2.0 * AXIS_RANGE);
                        ui.add(
                            egui::ProgressBar::new(fill.clamp(0.0, 1.0))
                                .text(format!("{}: {:.1}", axis, position)),
                        );
                    }
                });
            }
        });
    }
}

/// Stand-in when gilrs failed to start: nothing is connected
struct NoPlatform;

impl InputPlatform for NoPlatform {
    fn identify(&self, id: DeviceId) -> Result<DeviceInfo, InputError> {
        Err(InputError::DeviceQueryFailed {
            device: id,
            reason: "joystick input unavailable".to_string(),
        })
    }

    fn is_button_pressed(&self, _id: DeviceId, _button: usize) -> bool {
        false
    }

    fn axis_position(&self, _id: DeviceId, _axis: Axis) -> f32 {
        0.0
    }

    fn connected_ids(&self) -> Vec<DeviceId> {
        Vec::new()
    }
}

impl eframe::App for RoadmapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_inputs(ctx);
        ctx.request_repaint_after(self.config.frame_interval());

        self.render_roadmap(ctx);
        self.render_joysticks(ctx);
    }
}
