//! Procedural sprite geometry
//!
//! No image assets: every sprite is generated as flat triangle geometry
//! each frame from a small drawing recipe (stick-figure surfer on a board,
//! rock disc, shark silhouette, seashell star, gradient ocean).

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};
use crate::consts::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::sim::GameState;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a filled ellipse
pub fn ellipse(center: Vec2, rx: f32, ry: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + rx * theta1.cos(),
            center.y + ry * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + rx * theta2.cos(),
            center.y + ry * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate a thick line segment as a quad
pub fn line(p1: Vec2, p2: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (p2 - p1).normalize_or_zero();
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let a = p1 + perp;
    let b = p1 - perp;
    let c = p2 + perp;
    let d = p2 - perp;

    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(d.x, d.y, color),
    ]
}

/// Generate a solid triangle
pub fn triangle(a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
    ]
}

/// Ocean background: vertical deep-to-light gradient with scrolling wave dashes
pub fn ocean_background(wave_offset: f32) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    // Gradient quad via per-vertex colors
    let top = colors::DEEP_WATER;
    let bottom = colors::LIGHT_WATER;
    vertices.push(Vertex::new(0.0, 0.0, top));
    vertices.push(Vertex::new(WORLD_WIDTH, 0.0, top));
    vertices.push(Vertex::new(0.0, WORLD_HEIGHT, bottom));
    vertices.push(Vertex::new(0.0, WORLD_HEIGHT, bottom));
    vertices.push(Vertex::new(WORLD_WIDTH, 0.0, top));
    vertices.push(Vertex::new(WORLD_WIDTH, WORLD_HEIGHT, bottom));

    // Wave dashes every 20px vertically, drifting left with the scroll offset
    let dash = 60.0;
    let gap = 40.0;
    let period = dash + gap;
    let mut y = 20.0;
    while y < WORLD_HEIGHT {
        let mut x = -period + (period - wave_offset % period);
        while x < WORLD_WIDTH {
            let x0 = x.max(0.0);
            let x1 = (x + dash).min(WORLD_WIDTH);
            if x1 > x0 {
                vertices.extend(line(
                    Vec2::new(x0, y),
                    Vec2::new(x1, y),
                    1.5,
                    colors::WAVE_LINE,
                ));
            }
            x += period;
        }
        y += 20.0;
    }

    vertices
}

/// Stick-figure surfer on a board, centered on `pos` (64x64 footprint)
pub fn surfer(pos: Vec2) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    let at = |dx: f32, dy: f32| pos + Vec2::new(dx, dy);

    // Board first so the figure draws over it
    vertices.extend(ellipse(at(0.0, 28.0), 20.0, 5.0, colors::SURFBOARD, 24));

    // Head
    vertices.extend(circle(at(0.0, -12.0), 10.0, colors::SURFER_BODY, 20));
    // Body
    vertices.extend(line(at(0.0, -2.0), at(0.0, 18.0), 2.0, colors::SURFER_BODY));
    // Arms
    vertices.extend(line(at(0.0, 3.0), at(-10.0, 13.0), 2.0, colors::SURFER_BODY));
    vertices.extend(line(at(0.0, 3.0), at(10.0, 13.0), 2.0, colors::SURFER_BODY));
    // Legs
    vertices.extend(line(at(0.0, 18.0), at(-5.0, 28.0), 2.0, colors::SURFER_BODY));
    vertices.extend(line(at(0.0, 18.0), at(5.0, 28.0), 2.0, colors::SURFER_BODY));

    vertices
}

/// Gray rock disc, centered on `pos` (50x50 footprint)
pub fn rock(pos: Vec2) -> Vec<Vertex> {
    circle(pos, 20.0, colors::ROCK, 24)
}

/// Shark silhouette swimming left, centered on `pos` (60x30 footprint)
pub fn shark(pos: Vec2) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    let at = |dx: f32, dy: f32| pos + Vec2::new(dx, dy);

    // Tail
    vertices.extend(triangle(
        at(-30.0, 0.0),
        at(-10.0, -10.0),
        at(-10.0, 10.0),
        colors::SHARK,
    ));
    // Body tapering to the nose
    vertices.extend(triangle(
        at(-10.0, -10.0),
        at(30.0, 0.0),
        at(-10.0, 10.0),
        colors::SHARK,
    ));
    // Dorsal fin
    vertices.extend(triangle(
        at(10.0, 0.0),
        at(20.0, -10.0),
        at(30.0, 0.0),
        colors::SHARK,
    ));

    vertices
}

/// Gold seashell star, centered on `pos` (20x20 footprint)
pub fn seashell(pos: Vec2) -> Vec<Vertex> {
    // Star outline, relative to sprite center
    let points = [
        Vec2::new(0.0, -10.0),
        Vec2::new(2.0, -2.0),
        Vec2::new(10.0, 0.0),
        Vec2::new(2.0, 2.0),
        Vec2::new(0.0, 10.0),
        Vec2::new(-2.0, 2.0),
        Vec2::new(-10.0, 0.0),
        Vec2::new(-2.0, -2.0),
    ];

    let mut vertices = Vec::with_capacity(points.len() * 3);
    for i in 0..points.len() {
        let a = pos + points[i];
        let b = pos + points[(i + 1) % points.len()];
        vertices.extend(triangle(pos, a, b, colors::SHELL));
    }
    vertices
}

/// Build the full frame's geometry from the game state
pub fn scene_vertices(state: &GameState) -> Vec<Vertex> {
    let mut vertices = ocean_background(state.wave_offset);

    for ripple in &state.ripples {
        let mut color = colors::RIPPLE;
        color[3] *= ripple.life.clamp(0.0, 1.0);
        vertices.extend(circle(ripple.pos, ripple.size, color, 12));
    }

    for collectible in &state.collectibles {
        vertices.extend(seashell(collectible.pos));
    }

    for obstacle in &state.obstacles {
        match obstacle.kind {
            crate::sim::ObstacleKind::Rock => vertices.extend(rock(obstacle.pos)),
            crate::sim::ObstacleKind::Shark => vertices.extend(shark(obstacle.pos)),
        }
    }

    vertices.extend(surfer(state.player.pos));

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_vertex_count() {
        let v = circle(Vec2::ZERO, 10.0, [1.0; 4], 16);
        assert_eq!(v.len(), 16 * 3);
    }

    #[test]
    fn test_line_is_a_quad() {
        let v = line(Vec2::ZERO, Vec2::new(10.0, 0.0), 2.0, [1.0; 4]);
        assert_eq!(v.len(), 6);
        // Width is perpendicular to the segment
        assert!((v[0].position[1] - 1.0).abs() < 0.001);
        assert!((v[1].position[1] + 1.0).abs() < 0.001);
    }

    #[test]
    fn test_scene_contains_all_entities() {
        use crate::sim::GameState;
        use crate::sim::spawn::{spawn_collectible, spawn_obstacle};

        let mut state = GameState::new(5);
        spawn_obstacle(&mut state);
        spawn_collectible(&mut state);

        let base = scene_vertices(&GameState::new(5)).len();
        let with_entities = scene_vertices(&state).len();
        assert!(with_entities > base);
    }

    #[test]
    fn test_seashell_centered_within_footprint() {
        let v = seashell(Vec2::new(100.0, 100.0));
        for vert in v {
            assert!((vert.position[0] - 100.0).abs() <= 10.0);
            assert!((vert.position[1] - 100.0).abs() <= 10.0);
        }
    }
}
