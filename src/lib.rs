use std::iter;

use anyhow::{bail, Context, Result};
use wgpu::util::DeviceExt;
use winit::{
    dpi::PhysicalSize,
    event::*,
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::Window,
};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod config;
pub mod geometry;

/// Everything the demo owns: the rendering context, the linked program and
/// the two static vertex buffers. Created once by [`run`]; there is no other
/// state anywhere.
struct State<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    size: winit::dpi::PhysicalSize<u32>,
    render_pipeline: wgpu::RenderPipeline,
    position_buffer: wgpu::Buffer,
    color_buffer: wgpu::Buffer,
    vertex_count: u32,
    window: &'a Window,
}

impl<'a> State<'a> {
    async fn new(window: &'a Window) -> Result<State<'a>> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            #[cfg(not(target_arch = "wasm32"))]
            backends: wgpu::Backends::PRIMARY,
            #[cfg(target_arch = "wasm32")]
            backends: wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(window)
            .context("failed to create rendering surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("no suitable GPU adapter for the surface")?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: None,
                required_features: wgpu::Features::empty(),
                required_limits: if cfg!(target_arch = "wasm32") {
                    wgpu::Limits::downlevel_webgl2_defaults()
                } else {
                    wgpu::Limits::default()
                },
                memory_hints: Default::default(),
                trace: wgpu::Trace::Off,
            })
            .await
            .context("failed to create GPU device")?;

        let surface_caps = surface.get_capabilities(&adapter);

        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width,
            height: size.height,
            present_mode: surface_caps.present_modes[0],
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };

        // The two stages are compiled separately so a broken source names
        // itself in the diagnostic; pipeline creation below is the link step.
        let vertex_shader = compile_shader(
            &device,
            "logo vertex shader",
            include_str!("logo.vert.wgsl"),
        )
        .await?;
        let fragment_shader = compile_shader(
            &device,
            "logo fragment shader",
            include_str!("logo.frag.wgsl"),
        )
        .await?;

        let render_pipeline_layout =
            device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("logo pipeline layout"),
                bind_group_layouts: &[],
                push_constant_ranges: &[],
            });

        device.push_error_scope(wgpu::ErrorFilter::Validation);
        let render_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("logo pipeline"),
            layout: Some(&render_pipeline_layout),
            vertex: wgpu::VertexState {
                module: &vertex_shader,
                entry_point: Some("vs_main"),
                buffers: &[geometry::position_layout(), geometry::color_layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &fragment_shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: config.format,
                    blend: Some(wgpu::BlendState {
                        color: wgpu::BlendComponent::REPLACE,
                        alpha: wgpu::BlendComponent::REPLACE,
                    }),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState {
                count: 1,
                mask: !0,
                alpha_to_coverage_enabled: false,
            },
            multiview: None,
            cache: None,
        });
        if let Some(err) = device.pop_error_scope().await {
            bail!("failed to link the shader program:\n{err}");
        }

        let position_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("logo positions"),
            contents: bytemuck::cast_slice(&geometry::LOGO_POSITIONS),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let colors = geometry::logo_colors();
        let color_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("logo colors"),
            contents: bytemuck::cast_slice(&colors),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let vertex_count = geometry::vertex_count() as u32;

        surface.configure(&device, &config);

        Ok(Self {
            surface,
            device,
            queue,
            size,
            config,
            render_pipeline,
            position_buffer,
            color_buffer,
            vertex_count,
            window,
        })
    }

    pub fn window(&self) -> &Window {
        self.window
    }

    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("logo encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("logo pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(config::CLEAR_COLOR),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                occlusion_query_set: None,
                timestamp_writes: None,
            });

            render_pass.set_viewport(
                0.0,
                0.0,
                self.config.width as f32,
                self.config.height as f32,
                0.0,
                1.0,
            );
            render_pass.set_pipeline(&self.render_pipeline);
            render_pass.set_vertex_buffer(0, self.position_buffer.slice(..));
            render_pass.set_vertex_buffer(1, self.color_buffer.slice(..));
            render_pass.draw(0..self.vertex_count, 0..1);
        }

        self.queue.submit(iter::once(encoder.finish()));
        output.present();

        Ok(())
    }
}

/// Compiles one WGSL module, reporting any validation failure as an error
/// carrying the compiler's diagnostic instead of a deferred wgpu panic.
async fn compile_shader(
    device: &wgpu::Device,
    label: &str,
    source: &str,
) -> Result<wgpu::ShaderModule> {
    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });
    if let Some(err) = device.pop_error_scope().await {
        bail!("{label} failed to compile:\n{err}");
    }
    Ok(module)
}

/// One-shot startup: acquire the context, build the program and buffers,
/// then hand control to the windowing system. The scene is static, so no
/// redraw is ever self-requested; the draw re-runs only when the host asks.
pub async fn run() -> Result<()> {
    cfg_if::cfg_if! {
        if #[cfg(target_arch = "wasm32")] {
            std::panic::set_hook(Box::new(console_error_panic_hook::hook));
            console_log::init_with_level(log::Level::Warn).expect("couldn't initialize logger");
        } else {
            env_logger::init();
        }
    }

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    let window_attributes = Window::default_attributes()
        .with_title(config::WINDOW_TITLE)
        .with_inner_size(PhysicalSize::new(config::WINDOW_WIDTH, config::WINDOW_HEIGHT));
    #[allow(deprecated)]
    let window = event_loop
        .create_window(window_attributes)
        .context("failed to create window")?;

    #[cfg(target_arch = "wasm32")]
    {
        use winit::platform::web::WindowExtWebSys;
        web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| {
                let dst = doc.get_element_by_id(config::CANVAS_CONTAINER_ID)?;
                let canvas = web_sys::Element::from(window.canvas()?);
                dst.append_child(&canvas).ok()?;
                Some(())
            })
            .context("couldn't append canvas to the document")?;
    }

    let mut state = State::new(&window).await?;
    let mut surface_configured = false;

    event_loop
        .run(move |event, control_flow| match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == state.window().id() => match event {
                WindowEvent::CloseRequested
                | WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            state: ElementState::Pressed,
                            physical_key: PhysicalKey::Code(KeyCode::Escape),
                            ..
                        },
                    ..
                } => control_flow.exit(),
                WindowEvent::Resized(physical_size) => {
                    surface_configured = true;
                    state.resize(*physical_size);
                    state.window().request_redraw();
                }
                WindowEvent::RedrawRequested => {
                    if !surface_configured {
                        // A frame can be requested before the first Resized
                        // arrives; re-request it so the frame isn't lost.
                        state.window().request_redraw();
                        return;
                    }

                    match state.render() {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            state.resize(state.size)
                        }
                        Err(wgpu::SurfaceError::OutOfMemory | wgpu::SurfaceError::Other) => {
                            log::error!("surface unusable, exiting");
                            control_flow.exit();
                        }
                        Err(wgpu::SurfaceError::Timeout) => {
                            log::warn!("surface timeout")
                        }
                    }
                }
                _ => {}
            },
            _ => {}
        })
        .context("event loop terminated with error")?;

    Ok(())
}

/// Browser entry point; failures surface in the console.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn run_web() -> std::result::Result<(), JsValue> {
    run()
        .await
        .map_err(|e| JsValue::from_str(&format!("{e:#}")))
}
