use raylib::prelude::*;

use crate::constants::*;
use crate::counter::{AnimatedCounter, StatRing};
use crate::engine::{Control, Line, Showcase, View};
use crate::particles::Particles;
use crate::visibility::ScrollThreshold;

const MARGIN: i32 = 40;
const CARD_GAP: i32 = 30;
const BLUE: Color = Color::new(37, 99, 235, 255);
const GOLD: Color = Color::new(250, 204, 21, 255);

/// Opens the showcase window and runs until it is closed.
pub fn run(
    mut showcases: Vec<Box<dyn Showcase>>,
    mut counters: Vec<(AnimatedCounter, StatRing, String)>,
) {
    let (mut rl, thread) = raylib::init()
        .size(RENDER_WIDTH, RENDER_HEIGHT)
        .title("Showcase")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let mut particles = Particles::default();
    let mut buttons = ScrollThreshold::default();
    let mut scroll = 0.0f32;
    let mut active = 0usize;

    for (counter, ring, _) in counters.iter_mut() {
        counter.observe(1.0);
        ring.observe(1.0);
    }

    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        // --- Input ---
        if !showcases.is_empty() {
            if rl.is_key_pressed(KeyboardKey::KEY_TAB) {
                active = (active + 1) % showcases.len();
            }
            let showcase = &mut showcases[active];
            if let Some(control) = pressed_control(&rl) {
                if let Err(e) = showcase.control(control) {
                    tracing::warn!(showcase = showcase.name(), "ignored control: {e}");
                }
            }
        }
        scroll = (scroll - rl.get_mouse_wheel_move() * 40.0).max(0.0);
        buttons.on_scroll(scroll);

        // --- Update ---
        particles.update(dt);
        for showcase in showcases.iter_mut() {
            if showcase.update(dt) {
                tracing::info!(showcase = showcase.name(), page = showcase.current_page(), "page");
            }
        }
        for (counter, ring, _) in counters.iter_mut() {
            counter.update(std::time::Duration::from_secs_f32(dt.max(0.0)));
            ring.update(dt);
        }

        // --- Draw ---
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::RAYWHITE);

        let sw = d.get_screen_width() as f32;
        let sh = d.get_screen_height() as f32;
        for p in &particles.particles {
            d.draw_circle((p.x * sw) as i32, (p.y * sh) as i32, p.radius, BLUE.fade(0.15));
        }

        if let Some(showcase) = showcases.get(active) {
            d.draw_text(showcase.name(), MARGIN, MARGIN / 2, 28, Color::DARKGRAY);
            draw_view(&mut d, &showcase.view(), sw as i32);
        }
        draw_stats(&mut d, &counters, sw as i32, sh as i32);

        if buttons.is_visible() {
            d.draw_text("^ back to top", sw as i32 - 180, sh as i32 - 30, 18, BLUE);
        }
    }
}

fn pressed_control(rl: &RaylibHandle) -> Option<Control> {
    if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
        return Some(Control::Next);
    }
    if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
        return Some(Control::Previous);
    }
    if rl.is_key_pressed(KeyboardKey::KEY_SPACE) {
        return Some(Control::TogglePlay);
    }
    let digits = [
        KeyboardKey::KEY_ONE,
        KeyboardKey::KEY_TWO,
        KeyboardKey::KEY_THREE,
        KeyboardKey::KEY_FOUR,
        KeyboardKey::KEY_FIVE,
        KeyboardKey::KEY_SIX,
        KeyboardKey::KEY_SEVEN,
        KeyboardKey::KEY_EIGHT,
        KeyboardKey::KEY_NINE,
    ];
    digits
        .iter()
        .position(|key| rl.is_key_pressed(*key))
        .map(Control::Indicator)
}

fn draw_view(d: &mut RaylibDrawHandle, view: &View, screen_width: i32) {
    let columns = view.cards.len().max(1) as i32;
    let card_width = (screen_width - 2 * MARGIN - (columns - 1) * CARD_GAP) / columns;
    let alpha = view.opacity.clamp(0.0, 1.0);

    for (column, card) in view.cards.iter().enumerate() {
        let x = MARGIN + column as i32 * (card_width + CARD_GAP) + view.offset_x as i32;
        let mut y = 80;
        d.draw_rectangle(x, y, card_width, 380, Color::WHITE.fade(alpha));
        d.draw_rectangle_lines(x, y, card_width, 380, Color::LIGHTGRAY.fade(alpha));
        y += 20;

        for line in &card.lines {
            let (text, size, color) = match line {
                Line::Icon(icon) => (format!("[{icon}]"), 16, BLUE),
                Line::Title(title) => (title.clone(), 24, Color::BLACK),
                Line::Body(body) => (body.clone(), 16, Color::DARKGRAY),
                Line::Bullet(feature) => (format!("- {feature}"), 16, Color::GRAY),
                Line::Quote(quote) => (format!("\"{quote}\""), 18, Color::DARKGRAY),
                Line::Author(author) => (author.clone(), 20, Color::BLACK),
                Line::Caption(caption) => (caption.clone(), 16, BLUE),
                Line::Rating(stars) => ("*".repeat(usize::from(*stars)), 28, GOLD),
            };
            for wrapped in wrap(&text, (card_width - 40) / (size / 2).max(1)) {
                d.draw_text(&wrapped, x + 20, y, size, color.fade(alpha));
                y += size + 6;
            }
        }
    }

    // Indicator dots and play state
    let mut x = MARGIN;
    for current in &view.indicators {
        let color = if *current { BLUE } else { Color::LIGHTGRAY };
        d.draw_circle(x + 6, 490, if *current { 7.5 } else { 6.0 }, color);
        x += 24;
    }
    let play_state = if view.auto_advancing { "auto" } else { "paused" };
    d.draw_text(play_state, x + 10, 482, 16, Color::GRAY);
}

fn draw_stats(
    d: &mut RaylibDrawHandle,
    counters: &[(AnimatedCounter, StatRing, String)],
    screen_width: i32,
    screen_height: i32,
) {
    if counters.is_empty() {
        return;
    }
    let step = screen_width / counters.len() as i32;
    let cy = screen_height - 110;
    for (i, (counter, ring, label)) in counters.iter().enumerate() {
        let cx = step * i as i32 + step / 2;
        let center = Vector2::new(cx as f32, cy as f32);
        d.draw_ring(center, 44.0, 48.0, -90.0, -90.0 + 360.0 * ring.fill(), 64, BLUE);
        let text = counter.display();
        let width = measure_text(&text, 24);
        d.draw_text(&text, cx - width / 2, cy - 12, 24, BLUE);
        let width = measure_text(label, 14);
        d.draw_text(label, cx - width / 2, cy + 56, 14, Color::GRAY);
    }
}

fn wrap(text: &str, max_chars: i32) -> Vec<String> {
    let max_chars = max_chars.max(8) as usize;
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
