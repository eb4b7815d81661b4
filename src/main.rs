// src/main.rs
use nannou::prelude::*;
use std::time::Instant;

use trivis::{
    animation::MovementEngine,
    config::Config,
    draw::{DrawParams, GridFrame},
    models::{parse_hex_color, Figure, Palette},
    views::FigureInstance,
};

struct Model {
    // Core components:
    instance: FigureInstance,
    movement_engine: MovementEngine,

    // Style
    background: Rgba,
    grid_style: DrawParams,
    rect_style: DrawParams,

    // FPS
    last_update: Instant,
    fps: f32,
    debug_flag: bool,
}

fn main() {
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().expect("Failed to load config file");

    let palette = match config.resolve_palette_path() {
        Some(path) => {
            println!("Loading palette from {}", path.display());
            Palette::load(&path).expect("Failed to load palette file")
        }
        None => Palette::default(),
    };

    let movement_engine =
        MovementEngine::new(config.movement_config().expect("Invalid animation config"));

    // Build the figure
    let figure = Figure::build(config.figure.num_grids);
    let frame = GridFrame::new(config.figure.grid_delta, config.figure.num_grids, 0.0);
    let instance = FigureInstance::new(figure, palette, frame, config.figure.radius);

    // Resolve styles
    let background =
        parse_hex_color(&config.style.background).expect("Invalid background color");
    let grid_style = DrawParams {
        stroke: parse_hex_color(&config.style.grid_color).expect("Invalid grid color"),
        stroke_weight: config.style.grid_weight,
    };
    let rect_style = DrawParams {
        stroke: parse_hex_color(&config.style.stroke_color).expect("Invalid stroke color"),
        stroke_weight: config.style.stroke_weight,
    };

    // Create window
    app.new_window()
        .title("trivis 0.1.0")
        .size(config.window.width, config.window.height)
        .view(view)
        .mouse_pressed(mouse_pressed)
        .key_pressed(key_pressed)
        .build()
        .unwrap();

    Model {
        instance,
        movement_engine,

        background,
        grid_style,
        rect_style,

        // FPS
        last_update: Instant::now(),
        fps: 0.0,
        debug_flag: false,
    }
}

// Clicking anywhere animates the figure into its next state.
fn mouse_pressed(_app: &App, model: &mut Model, button: MouseButton) {
    if button == MouseButton::Left {
        model.instance.trigger_cycle(&model.movement_engine);
    }
}

fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match key {
        // same as a click
        Key::Space => {
            model.instance.trigger_cycle(&model.movement_engine);
        }
        Key::G => {
            model.instance.show_grid = !model.instance.show_grid;
        }
        Key::D => {
            model.debug_flag = !model.debug_flag;
        }
        Key::Q => {
            app.quit();
        }
        _ => (),
    }
}

fn update(_app: &App, model: &mut Model, _update: Update) {
    let now = Instant::now();
    let duration = now - model.last_update;
    model.last_update = now;
    let dt = duration.as_secs_f32();

    // FPS calculation
    if model.debug_flag && dt > 0.0 {
        model.fps = 1.0 / dt;
    }

    model.instance.update(dt);
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(model.background);

    model
        .instance
        .draw(&draw, &model.grid_style, &model.rect_style);

    // Visualize FPS (Optional)
    if model.debug_flag {
        let rect = app.window_rect();
        draw.text(&format!("FPS: {:.1}", model.fps))
            .x_y(rect.left() + 60.0, rect.top() - 20.0)
            .color(RED);
    }

    draw.to_frame(app, &frame).unwrap();
}
