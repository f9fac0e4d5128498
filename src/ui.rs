use std::time::Instant;

use ggez;
use ggez::graphics;
use ggez::{GameError, GameResult};

use gfx_core::{handle::RenderTargetView, memory::Typed};
use gfx_device_gl;

use imgui;
use imgui::*;
use imgui_gfx_renderer::*;

use crate::config::DAY;
use crate::simulation::Simulation;

/// Read-only numbers shown in the overlay's menu bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hud {
    pub tick: u64,
    pub elapsed: f64, // simulated seconds
    pub live_bodies: usize,
    pub total_bodies: usize,
}

impl Hud {
    pub fn from_simulation(sim: &Simulation) -> Self {
        Hud {
            tick: sim.tick(),
            elapsed: sim.elapsed(),
            live_bodies: sim.live_bodies(),
            total_bodies: sim.bodies().len(),
        }
    }

    pub fn labels(&self, fps: f32) -> Vec<String> {
        vec![
            format!("Tick: {}", self.tick),
            format!("Day: {:.2}", self.elapsed / DAY),
            format!("Bodies: {}/{}", self.live_bodies, self.total_bodies),
            format!("FPS: {:.0}", fps),
        ]
    }
}

pub struct UiWrapper {
    pub imgui: imgui::Context,
    pub renderer: Renderer<gfx_core::format::Rgba8, gfx_device_gl::Resources>,
    hidpi_factor: f32,
    fps: f32,
    last_frame: Instant,
}

fn build_main_menu(ui: &Ui, hud: &Hud, fps: f32) {
    // Menus in main menu bar are disabled as they only serve to
    // display information
    let token = ui.push_style_color(StyleColor::TextDisabled, [1.0, 1.0, 1.0, 1.0]);
    ui.main_menu_bar(|| {
        for label in hud.labels(fps) {
            ui.menu(&ImString::new(label), false, || {});
        }
    });
    token.pop(ui);
}

fn render_ui(ctx: &mut ggez::Context, ui: Ui,
             renderer: &mut Renderer<gfx_core::format::Rgba8, gfx_device_gl::Resources>) -> GameResult<()> {
    let (factory, _, encoder, _, render_target) = graphics::gfx_objects(ctx);
    let draw_data = ui.render();
    renderer.render(
        &mut *factory,
        encoder,
        &mut RenderTargetView::new(render_target.clone()),
        draw_data
    ).map_err(|e| GameError::RenderError(format!("imgui: {:?}", e)))
}

impl UiWrapper {
    pub fn new(ctx: &mut ggez::Context, hidpi_factor: f32) -> GameResult<Self> {
        let mut imgui = imgui::Context::create();
        let (factory, gfx_device, _, _, _) = graphics::gfx_objects(ctx);
        let shaders = {
            let version = gfx_device.get_info().shading_language;
            if version.is_embedded {
                if version.major >= 3 {
                    Shaders::GlSlEs300
                } else {
                    Shaders::GlSlEs100
                }
            } else if version.major >= 4 {
                Shaders::GlSl400
            } else if version.major >= 3 {
                Shaders::GlSl130
            } else {
                Shaders::GlSl110
            }
        };
        let renderer = Renderer::init(&mut imgui, &mut *factory, shaders)
            .map_err(|e| GameError::RenderError(format!("imgui init: {:?}", e)))?;

        Ok(Self {
            imgui,
            renderer,
            hidpi_factor,
            fps: 0.0,
            last_frame: Instant::now(),
        })
    }

    pub fn update_ui(&mut self, ctx: &mut ggez::Context, hud: &Hud) -> GameResult<()> {
        self.create_new_frame(ctx);

        let fps = self.fps;
        let ui = self.imgui.frame();
        build_main_menu(&ui, hud, fps);

        render_ui(ctx, ui, &mut self.renderer)
    }

    fn create_new_frame(&mut self, ctx: &mut ggez::Context) {
        let io = self.imgui.io_mut();
        let now = Instant::now();
        let delta_s = (now - self.last_frame).as_secs_f32();
        if delta_s > 0.0 {
            self.fps = 1.0 / delta_s;
        }
        self.last_frame = now;

        let (draw_width, draw_height) = graphics::drawable_size(ctx);
        io.display_size = [draw_width, draw_height];
        io.display_framebuffer_scale =
            [self.hidpi_factor, self.hidpi_factor];
        io.delta_time = delta_s.max(1.0e-6);
    }
}
