//! Lattice gas automaton - display front-end.
//!
//! Renders one pixel per cell from the core's color mapping, one
//! simulation step per frame. The hex (FHP-I) lattice runs by default;
//! pass `--square` for the HPP variant.

use macroquad::prelude::*;
use sim::{cell_color, create_cavity_tank, Lattice, LgaSimulation, SeedDensity};

// Grid size, one pixel per cell
const GRID_WIDTH: usize = 800;
const GRID_HEIGHT: usize = 600;

// Empty circular cavity left in the seeded gas (visualizes the inflow)
const CAVITY_X: f32 = 320.0;
const CAVITY_Y: f32 = 240.0;
const CAVITY_RADIUS: f32 = 120.0;

fn window_conf() -> Conf {
    Conf {
        window_title: "Lattice Gas Automaton".to_owned(),
        window_width: GRID_WIDTH as i32,
        window_height: GRID_HEIGHT as i32,
        ..Default::default()
    }
}

fn build_sim(lattice: Lattice) -> LgaSimulation {
    let mut sim = LgaSimulation::new(lattice, GRID_WIDTH, GRID_HEIGHT, None);
    create_cavity_tank(
        &mut sim,
        glam::Vec2::new(CAVITY_X, CAVITY_Y),
        CAVITY_RADIUS,
        SeedDensity::Full,
    );
    sim
}

#[macroquad::main(window_conf)]
async fn main() {
    let lattice = if std::env::args().any(|a| a == "--square") {
        Lattice::Square
    } else {
        Lattice::Hex
    };
    info!(
        "lattice gas: {:?} lattice, {}x{} cells",
        lattice, GRID_WIDTH, GRID_HEIGHT
    );

    let mut sim = build_sim(lattice);

    let mut frame_buffer = Image::gen_image_color(GRID_WIDTH as u16, GRID_HEIGHT as u16, BLACK);
    let frame_texture = Texture2D::from_image(&frame_buffer);
    frame_texture.set_filter(FilterMode::Nearest); // Crisp pixel art look

    let mut paused = false;
    let mut last_fps_echo = get_time();

    loop {
        // --- INPUT (termination is checked between completed steps) ---
        if is_key_pressed(KeyCode::Escape) {
            break;
        }
        if is_key_pressed(KeyCode::Space) {
            paused = !paused;
        }
        if is_key_pressed(KeyCode::R) {
            sim = build_sim(lattice);
        }

        // --- UPDATE ---
        if !paused {
            sim.step();
        }

        // --- RENDER (one color per cell, single texture upload) ---
        let grid = sim.grid();
        let pixels = frame_buffer.get_image_data_mut();
        for y in 0..GRID_HEIGHT {
            for x in 0..GRID_WIDTH {
                pixels[y * GRID_WIDTH + x] = cell_color(grid.get(x, y));
            }
        }
        frame_texture.update(&frame_buffer);
        draw_texture(&frame_texture, 0.0, 0.0, WHITE);

        draw_text(
            &format!(
                "Particles: {} | Step: {} | FPS: {} | {}",
                sim.total_particles(),
                sim.steps(),
                get_fps(),
                if paused { "PAUSED" } else { "Running" }
            ),
            10.0,
            25.0,
            20.0,
            WHITE,
        );
        draw_text("[Space]=Pause [R]=Reseed [Esc]=Quit", 10.0, 45.0, 16.0, GRAY);

        // Once-per-second FPS echo, like a frame counter on a timer
        if get_time() - last_fps_echo >= 1.0 {
            info!("{} FPS", get_fps());
            last_fps_echo = get_time();
        }

        next_frame().await
    }
}
